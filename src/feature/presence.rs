use log::{error, info, warn};
use serenity::all::GuildId;

use super::{model::PresenceSummary, platform::Platform};

pub fn activity_text(summary: PresenceSummary) -> String {
    format!("{} online", summary)
}

/// Keeps the bot's "Watching" status in line with the configured guild.
#[derive(Debug, Clone, Copy)]
pub struct PresenceReporterService {
    guild_id: GuildId,
}

impl PresenceReporterService {
    pub fn new(guild_id: GuildId) -> Self {
        Self { guild_id }
    }

    /// Streams the configured guild's full member list, with presences, into the cache.
    pub fn on_guild_available(&self, platform: &dyn Platform, guild_id: GuildId) {
        if guild_id != self.guild_id {
            return;
        }
        info!("requesting members of guild {}", guild_id);
        platform.request_members(guild_id);
    }

    pub async fn on_members_chunk(
        &self,
        platform: &dyn Platform,
        guild_id: GuildId,
        chunk_index: u32,
        chunk_count: u32,
    ) {
        if self.is_last_chunk(guild_id, chunk_index, chunk_count) {
            self.refresh(platform).await;
        }
    }

    fn is_last_chunk(&self, guild_id: GuildId, chunk_index: u32, chunk_count: u32) -> bool {
        guild_id == self.guild_id && chunk_index + 1 == chunk_count
    }

    pub async fn refresh(&self, platform: &dyn Platform) {
        let guild = match platform.fetch_guild(self.guild_id).await {
            Ok(guild) => guild,
            Err(why) => {
                error!("Error updating presence: {:?}", why);
                return;
            }
        };

        if !guild.presences_loaded {
            warn!(
                "skip status update because presences for guild {} are not loaded yet",
                guild.id
            );
            return;
        }

        let summary = PresenceSummary::from_members(&guild.members);
        platform.set_watching(&activity_text(summary));
        info!(
            "Updated status for guild {}: {} online (excluding bots)",
            guild.id, summary
        );
    }
}
