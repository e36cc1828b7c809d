use anyhow::{Context as _, Result};
use serenity::{all::GatewayIntents, client::Client};

use super::handler;
use crate::config::Config;

pub struct DiscordClient {
    config: Config,
}

impl DiscordClient {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub async fn run(self) -> Result<()> {
        // GUILD_MEMBERS and GUILD_PRESENCES are privileged and must be enabled for the application
        let intents = GatewayIntents::GUILDS
            | GatewayIntents::GUILD_MEMBERS
            | GatewayIntents::GUILD_PRESENCES;

        let mut client = Client::builder(&self.config.discord_token, intents)
            .event_handler(handler::EvHandler::new(&self.config))
            .await
            .context("Failed to create Discord client")?;

        client
            .start()
            .await
            .context("Failed to start Discord client")
    }
}
