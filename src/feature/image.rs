use log::debug;

use super::model::{BotIdentity, GuildSnapshot};

const DEFAULT_FALLBACK: &str = "https://via.placeholder.com/150?text=Fallback+Image";

#[derive(Debug, Clone, PartialEq)]
pub struct RoleImages {
    pub thumbnail: String,
    pub banner: String,
}

/// Artwork for the profile embeds plus the last-resort placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageConfig {
    pub developer: RoleImages,
    pub owner: RoleImages,
    pub fallback: String,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            developer: RoleImages {
                thumbnail: "https://media.discordapp.net/attachments/1294639687952240682/1361931913274589225/172174951.png?ex=68008d6f&is=67ff3bef&hm=118882e2b15ef6cd948e0bdd38784d9b0554b902580a3bf50bd9eaffb103df48&=&format=webp&quality=lossless".to_string(),
                banner: "https://share.creavite.co/67ff358f5502193c79bac8a0.gif".to_string(),
            },
            owner: RoleImages {
                thumbnail: "https://i.imgur.com/yourPrestigeThumbnail.jpg".to_string(),
                banner: "https://i.imgur.com/yourPrestigeBanner.jpg".to_string(),
            },
            fallback: DEFAULT_FALLBACK.to_string(),
        }
    }
}

/// Picks a displayable image: the primary URL if it looks like one, otherwise
/// the guild icon, the bot's own avatar, and finally the placeholder.
pub fn resolve_image(
    primary: Option<&str>,
    guild: Option<&GuildSnapshot>,
    bot: &BotIdentity,
    images: &ImageConfig,
) -> String {
    debug!("Checking image URL: {:?}", primary);
    if let Some(url) = primary.filter(|url| url.starts_with("http")) {
        return url.to_string();
    }
    if let Some(icon) = guild.and_then(|guild| guild.icon_url.as_deref()) {
        debug!("Using server icon as fallback: {}", icon);
        return icon.to_string();
    }
    if let Some(avatar) = bot.avatar_url.as_deref() {
        debug!("Using bot avatar as fallback: {}", avatar);
        return avatar.to_string();
    }
    debug!("Using default fallback: {}", images.fallback);
    images.fallback.clone()
}
