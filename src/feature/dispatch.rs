use log::debug;
use serenity::all::{GuildId, UserId};

use super::{
    interaction::{InboundInteraction, InteractionResponderService},
    platform::Platform,
    presence::PresenceReporterService,
    ready::{ReadyService, ReadySignal},
};
use crate::config::Config;

#[derive(Debug, Clone, PartialEq)]
pub enum BotEvent {
    Ready(ReadySignal),
    /// The platform cache has received every guild.
    CacheReady,
    /// A guild became available to the bot.
    GuildAvailable {
        guild_id: GuildId,
    },
    /// One page of a requested member list has reached the cache.
    MembersChunk {
        guild_id: GuildId,
        chunk_index: u32,
        chunk_count: u32,
    },
    PresenceChanged {
        user_id: UserId,
        guild_id: Option<GuildId>,
    },
    Interaction(InboundInteraction),
}

/// Routes each [`BotEvent`] to the service that owns it.
pub struct Dispatcher {
    ready: ReadyService,
    presence: PresenceReporterService,
    responder: InteractionResponderService,
}

impl Dispatcher {
    pub fn new(config: &Config) -> Self {
        Self {
            ready: ReadyService::new(config.guild_id),
            presence: PresenceReporterService::new(config.guild_id),
            responder: InteractionResponderService::new(config.images.clone()),
        }
    }

    pub async fn dispatch(&self, platform: &dyn Platform, event: BotEvent) {
        match event {
            BotEvent::Ready(ready) => self.ready.on(platform, ready).await,
            BotEvent::CacheReady => self.presence.refresh(platform).await,
            BotEvent::GuildAvailable { guild_id } => {
                self.presence.on_guild_available(platform, guild_id)
            }
            BotEvent::MembersChunk {
                guild_id,
                chunk_index,
                chunk_count,
            } => {
                self.presence
                    .on_members_chunk(platform, guild_id, chunk_index, chunk_count)
                    .await
            }
            BotEvent::PresenceChanged { user_id, guild_id } => {
                // the configured guild is re-read whatever guild the update came from
                debug!("presence changed for {} in {:?}", user_id, guild_id);
                self.presence.refresh(platform).await
            }
            BotEvent::Interaction(interaction) => self.responder.on(platform, interaction).await,
        }
    }
}
