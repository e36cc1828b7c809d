use anyhow::Result;
use serenity::{all::GuildId, async_trait};

use super::{
    commands::CommandDescriptor,
    model::{BotIdentity, GuildSnapshot, InteractionHandle},
    reply::Reply,
};

/// The calls the bot makes against Discord. Handlers only ever talk to this
/// trait, so they can run against a fake.
#[async_trait]
pub trait Platform: Send + Sync {
    fn bot_identity(&self) -> BotIdentity;

    async fn fetch_guild(&self, guild_id: GuildId) -> Result<GuildSnapshot>;

    /// Ask the gateway to stream every member (with presences) into the cache.
    fn request_members(&self, guild_id: GuildId);

    fn set_watching(&self, text: &str);

    /// Replaces the guild's command catalog. Returns how many commands Discord accepted.
    async fn register_commands(
        &self,
        guild_id: GuildId,
        commands: &[CommandDescriptor],
    ) -> Result<usize>;

    async fn reply(&self, handle: &InteractionHandle, reply: &Reply) -> Result<()>;
}
