use log::info;
use serenity::all::{GuildId, UserId};

use super::{
    commands::CommandRegistrarService, platform::Platform, presence::PresenceReporterService,
};

/// What the gateway told us when the session was established.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadySignal {
    pub user_id: UserId,
    pub tag: String,
    pub guild_count: usize,
}

pub struct ReadyService {
    presence: PresenceReporterService,
    registrar: CommandRegistrarService,
}

impl ReadyService {
    pub fn new(guild_id: GuildId) -> Self {
        Self {
            presence: PresenceReporterService::new(guild_id),
            registrar: CommandRegistrarService::new(guild_id),
        }
    }

    pub async fn on(&self, platform: &dyn Platform, ready: ReadySignal) {
        info!("Logged in as {}", ready.tag);

        // display the bot's information
        info!("user id : {}", ready.user_id);
        info!("bot version : {}", env!("CARGO_PKG_VERSION"));
        info!("connected {} guilds", ready.guild_count);

        tokio::join!(
            self.presence.refresh(platform),
            self.registrar.register(platform)
        );
    }
}
