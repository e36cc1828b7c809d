use super::{
    image::{resolve_image, ImageConfig, RoleImages},
    model::{BotIdentity, GuildSnapshot},
    reply::{EmbedCard, EmbedField, EmbedFooter, LinkButton, Reply},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileRole {
    Developer,
    Owner,
}

impl ProfileRole {
    pub fn images(self, config: &ImageConfig) -> &RoleImages {
        match self {
            ProfileRole::Developer => &config.developer,
            ProfileRole::Owner => &config.owner,
        }
    }

    pub fn profile(self) -> &'static Profile {
        match self {
            ProfileRole::Developer => &DEVELOPER,
            ProfileRole::Owner => &OWNER,
        }
    }
}

/// Static content of a `/developer` or `/owner` card.
pub struct Profile {
    pub role: ProfileRole,
    pub title: &'static str,
    pub describe: fn(&GuildSnapshot) -> String,
    pub color: u32,
    pub fields: [(&'static str, &'static str); 2],
    pub footer: &'static str,
    pub buttons: [LinkButton; 3],
}

pub static DEVELOPER: Profile = Profile {
    role: ProfileRole::Developer,
    title: "🚀 Xen Official - The Code Maestro",
    describe: describe_developer,
    color: 0x1E90FF,
    fields: [
        ("🏗️ Notable Projects", "Custom Discord bots, community tools"),
        ("🎮 Hobbies", "Gaming, coding, video editing"),
    ],
    footer: "Powered by XEN DEVELOPMENT 🌟 Built with 💖",
    buttons: [
        LinkButton {
            label: "GitHub",
            emoji: "📜",
            url: "https://github.com/Xen-Dev23",
        },
        LinkButton {
            label: "TikTok",
            emoji: "🎥",
            url: "https://www.tiktok.com/@drei_xen",
        },
        LinkButton {
            label: "YouTube",
            emoji: "▶️",
            url: "https://www.youtube.com/@Xen_Moto",
        },
    ],
};

pub static OWNER: Profile = Profile {
    role: ProfileRole::Owner,
    title: "👑 Prestige Beta - The Community Leader",
    describe: describe_owner,
    color: 0xFF4500,
    fields: [
        ("🎨 Art Style", "Bold, vibrant, and expressive"),
        ("🎮 Favorites", "Gaming, art, community events"),
    ],
    footer: "Powered by XEN DEVELOPMENT 🌟 Leading with Passion",
    buttons: [
        LinkButton {
            label: "Facebook",
            emoji: "📘",
            url: "https://www.facebook.com/PrestigeBeta",
        },
        LinkButton {
            label: "YouTube",
            emoji: "▶️",
            url: "https://www.youtube.com/@prestigebeta6900",
        },
        LinkButton {
            label: "Instagram",
            emoji: "📸",
            url: "https://www.instagram.com/lenarddoesart/",
        },
    ],
};

fn describe_developer(guild: &GuildSnapshot) -> String {
    format!(
        "**Welcome to my world of code!** I'm the developer behind this bot, crafting epic tools for **{}**.\n\n\
         🌟 **Who Am I?** A passionate coder, gamer, and content creator.\n\
         💻 **Tech Stack**: JavaScript, Node.js, Discord.js, and a dash of magic.\n\
         🎯 **Goal**: Elevate your Discord experience with awesome bots.\n\
         📬 **Connect**: Hit me up on my socials below!",
        guild.name
    )
}

fn describe_owner(guild: &GuildSnapshot) -> String {
    format!(
        "**Meet the visionary behind {}!** Prestige Beta is all about creativity and community.\n\n\
         🌟 **Who Are They?** A talented artist, gamer, and leader.\n\
         🎨 **Talents**: Stunning artwork and engaging content creation.\n\
         🏰 **Vision**: Fostering a thriving community of {} members.\n\
         📬 **Connect**: Follow their socials below!",
        guild.name, guild.member_count
    )
}

impl Profile {
    pub fn card(&self, guild: &GuildSnapshot, bot: &BotIdentity, images: &ImageConfig) -> EmbedCard {
        let role_images = self.role.images(images);
        let thumbnail = resolve_image(Some(role_images.thumbnail.as_str()), Some(guild), bot, images);
        let banner = resolve_image(Some(role_images.banner.as_str()), Some(guild), bot, images);

        let mut fields: Vec<EmbedField> = self
            .fields
            .iter()
            .map(|(name, value)| EmbedField::builder().name(*name).value(*value).build())
            .collect();
        fields.push(
            EmbedField::builder()
                .name("🌍 Community")
                .value(format!("{} ({} members)", guild.name, guild.member_count))
                .build(),
        );

        EmbedCard::builder()
            .title(self.title)
            .description((self.describe)(guild))
            .color(self.color)
            .thumbnail(thumbnail)
            .image(banner)
            .fields(fields)
            .footer(
                EmbedFooter::builder()
                    .text(self.footer)
                    .icon_url(bot.face_url.clone())
                    .build(),
            )
            .build()
    }

    pub fn reply(&self, guild: &GuildSnapshot, bot: &BotIdentity, images: &ImageConfig) -> Reply {
        Reply::embed(self.card(guild, bot, images)).with_buttons(&self.buttons)
    }
}
