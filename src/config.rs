use anyhow::{bail, Context as _, Result};
use serenity::all::GuildId;

use crate::feature::image::ImageConfig;

pub fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

/// Process configuration, read once at start-up and handed to the client.
#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub guild_id: GuildId,
    pub images: ImageConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let discord_token = match lookup("DISCORD_TOKEN") {
            Some(token) if !token.trim().is_empty() => token.trim().to_string(),
            _ => bail!("Expected a token in the environment variable DISCORD_TOKEN"),
        };

        let raw_guild_id = lookup("GUILD_ID")
            .context("Expected a guild id in the environment variable GUILD_ID")?;
        let guild_id = parse_guild_id(&raw_guild_id)?;

        Ok(Self {
            discord_token,
            guild_id,
            images: ImageConfig::default(),
        })
    }
}

fn parse_guild_id(raw: &str) -> Result<GuildId> {
    let id = raw
        .trim()
        .parse::<u64>()
        .with_context(|| format!("GUILD_ID is not a valid snowflake: {:?}", raw))?;
    if id == 0 {
        bail!("GUILD_ID must not be zero");
    }
    Ok(GuildId::new(id))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serenity::all::GuildId;

    use super::Config;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_from_lookup_reads_token_and_guild() {
        let config =
            Config::from_lookup(lookup(&[("DISCORD_TOKEN", "abc"), ("GUILD_ID", "123")])).unwrap();
        assert_eq!(config.discord_token, "abc");
        assert_eq!(config.guild_id, GuildId::new(123));
    }

    #[test]
    fn test_from_lookup_missing_token() {
        let result = Config::from_lookup(lookup(&[("GUILD_ID", "123")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_from_lookup_blank_token() {
        let result = Config::from_lookup(lookup(&[("DISCORD_TOKEN", "  "), ("GUILD_ID", "123")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_from_lookup_missing_guild() {
        let result = Config::from_lookup(lookup(&[("DISCORD_TOKEN", "abc")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_from_lookup_rejects_bad_guild_ids() {
        for raw in ["abc", "0", "-4", ""] {
            let result = Config::from_lookup(lookup(&[("DISCORD_TOKEN", "abc"), ("GUILD_ID", raw)]));
            assert!(result.is_err(), "accepted {:?}", raw);
        }
    }
}
