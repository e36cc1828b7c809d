use std::sync::Mutex;

use anyhow::{anyhow, Result};
use serenity::{
    all::{GuildId, InteractionId},
    async_trait,
};

use super::{
    commands::CommandDescriptor,
    model::{BotIdentity, GuildSnapshot, InteractionHandle, MemberSnapshot, PresenceStatus},
    platform::Platform,
    reply::Reply,
};

/// Records every call made through [`Platform`].
#[derive(Default)]
pub struct FakePlatform {
    pub guild: Option<GuildSnapshot>,
    pub bot: BotIdentity,
    pub fail_registration: bool,
    /// Number of leading `reply` calls that fail.
    pub failing_replies: usize,

    pub fetches: Mutex<Vec<GuildId>>,
    pub member_requests: Mutex<Vec<GuildId>>,
    pub activities: Mutex<Vec<String>>,
    pub registered: Mutex<Vec<(GuildId, Vec<CommandDescriptor>)>>,
    pub replies: Mutex<Vec<(InteractionHandle, Reply)>>,
}

impl FakePlatform {
    pub fn with_guild(guild: GuildSnapshot) -> Self {
        Self {
            guild: Some(guild),
            ..Default::default()
        }
    }

    pub fn sent_replies(&self) -> Vec<Reply> {
        self.replies
            .lock()
            .unwrap()
            .iter()
            .map(|(_, reply)| reply.clone())
            .collect()
    }
}

#[async_trait]
impl Platform for FakePlatform {
    fn bot_identity(&self) -> BotIdentity {
        self.bot.clone()
    }

    async fn fetch_guild(&self, guild_id: GuildId) -> Result<GuildSnapshot> {
        self.fetches.lock().unwrap().push(guild_id);
        self.guild.clone().ok_or_else(|| anyhow!("guild {} unavailable", guild_id))
    }

    fn request_members(&self, guild_id: GuildId) {
        self.member_requests.lock().unwrap().push(guild_id);
    }

    fn set_watching(&self, text: &str) {
        self.activities.lock().unwrap().push(text.to_string());
    }

    async fn register_commands(
        &self,
        guild_id: GuildId,
        commands: &[CommandDescriptor],
    ) -> Result<usize> {
        self.registered
            .lock()
            .unwrap()
            .push((guild_id, commands.to_vec()));
        if self.fail_registration {
            return Err(anyhow!("Missing Access"));
        }
        Ok(commands.len())
    }

    async fn reply(&self, handle: &InteractionHandle, reply: &Reply) -> Result<()> {
        let mut replies = self.replies.lock().unwrap();
        let attempt = replies.len();
        replies.push((handle.clone(), reply.clone()));
        if attempt < self.failing_replies {
            return Err(anyhow!("Unknown interaction"));
        }
        Ok(())
    }
}

pub fn handle() -> InteractionHandle {
    InteractionHandle {
        id: InteractionId::new(7),
        token: "token".to_string(),
    }
}

/// A guild named "Test Guild" holding one member per `(is_bot, status)` pair.
pub fn guild_with(members: &[(bool, PresenceStatus)]) -> GuildSnapshot {
    GuildSnapshot {
        id: GuildId::new(1),
        name: "Test Guild".to_string(),
        icon_url: Some("https://cdn.discordapp.com/icons/1/abc.webp?size=1024".to_string()),
        member_count: members.len() as u64,
        members: members
            .iter()
            .map(|(is_bot, status)| MemberSnapshot {
                is_bot: *is_bot,
                status: *status,
            })
            .collect(),
        presences_loaded: true,
    }
}
