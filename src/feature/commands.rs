use log::{error, info};
use serenity::all::GuildId;

use super::platform::Platform;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlashCommand {
    Active,
    Developer,
    Owner,
}

impl SlashCommand {
    pub const ALL: [SlashCommand; 3] = [
        SlashCommand::Active,
        SlashCommand::Developer,
        SlashCommand::Owner,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SlashCommand::Active => "active",
            SlashCommand::Developer => "developer",
            SlashCommand::Owner => "owner",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            SlashCommand::Active => "Shows active members",
            SlashCommand::Developer => "Shows developer info",
            SlashCommand::Owner => "Shows server owner info",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.name() == name)
    }

    /// Ephemeral text sent when the command's branch fails.
    pub fn failure_message(self) -> &'static str {
        match self {
            SlashCommand::Active => {
                "❌ Something went wrong while fetching active members. Try again later!"
            }
            SlashCommand::Developer => "❌ Failed to load developer info. Please try again later!",
            SlashCommand::Owner => "❌ Couldn’t load owner info. Try again later!",
        }
    }
}

/// A parameterless slash command as submitted to Discord.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDescriptor {
    pub name: &'static str,
    pub description: &'static str,
}

pub fn catalog() -> Vec<CommandDescriptor> {
    SlashCommand::ALL
        .into_iter()
        .map(|command| CommandDescriptor {
            name: command.name(),
            description: command.description(),
        })
        .collect()
}

#[derive(Debug, Clone, Copy)]
pub struct CommandRegistrarService {
    guild_id: GuildId,
}

impl CommandRegistrarService {
    pub fn new(guild_id: GuildId) -> Self {
        Self { guild_id }
    }

    pub async fn register(&self, platform: &dyn Platform) {
        info!("Started refreshing application (/) commands.");
        match platform.register_commands(self.guild_id, &catalog()).await {
            Ok(count) => info!("Successfully reloaded {} application (/) commands.", count),
            Err(why) => error!("Failed to register commands: {:?}", why),
        }
    }
}

#[cfg(test)]
mod tests {
    use serenity::all::GuildId;

    use super::{catalog, CommandRegistrarService, SlashCommand};
    use crate::feature::testing::FakePlatform;

    #[test]
    fn test_catalog_has_three_commands_in_order() {
        let names: Vec<_> = catalog().iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["active", "developer", "owner"]);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(SlashCommand::from_name("active"), Some(SlashCommand::Active));
        assert_eq!(SlashCommand::from_name("developer"), Some(SlashCommand::Developer));
        assert_eq!(SlashCommand::from_name("owner"), Some(SlashCommand::Owner));
        assert_eq!(SlashCommand::from_name("Owner"), None);
        assert_eq!(SlashCommand::from_name("ping"), None);
    }

    #[tokio::test]
    async fn test_register_submits_catalog_to_configured_guild() {
        let platform = FakePlatform::default();
        CommandRegistrarService::new(GuildId::new(42))
            .register(&platform)
            .await;

        let registered = platform.registered.lock().unwrap();
        assert_eq!(registered.len(), 1);
        let (guild_id, commands) = &registered[0];
        assert_eq!(*guild_id, GuildId::new(42));
        assert_eq!(commands, &catalog());
    }

    #[tokio::test]
    async fn test_register_failure_is_swallowed() {
        let platform = FakePlatform {
            fail_registration: true,
            ..Default::default()
        };
        CommandRegistrarService::new(GuildId::new(42))
            .register(&platform)
            .await;
        assert_eq!(platform.registered.lock().unwrap().len(), 1);
    }
}
