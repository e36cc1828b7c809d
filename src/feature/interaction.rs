use anyhow::{bail, Context as _, Result};
use chrono::Local;
use log::{debug, error, info};
use serenity::all::GuildId;

use super::{
    commands::SlashCommand,
    image::{resolve_image, ImageConfig},
    model::{BotIdentity, GuildSnapshot, InteractionHandle, PresenceSummary, Requester},
    platform::Platform,
    profile::ProfileRole,
    reply::{EmbedCard, EmbedFooter, Reply},
};

const ACTIVE_COLOR: u32 = 0xFFD700;

/// Inbound interactions the bot answers.
#[derive(Debug, Clone, PartialEq)]
pub enum InboundInteraction {
    Command {
        handle: InteractionHandle,
        name: String,
        guild_id: Option<GuildId>,
        requester: Requester,
    },
    /// A non-link button; its custom id is the URL to acknowledge.
    Button {
        handle: InteractionHandle,
        custom_id: String,
    },
}

pub struct InteractionResponderService {
    images: ImageConfig,
}

impl InteractionResponderService {
    pub fn new(images: ImageConfig) -> Self {
        Self { images }
    }

    pub async fn on(&self, platform: &dyn Platform, interaction: InboundInteraction) {
        match interaction {
            InboundInteraction::Button { handle, custom_id } => {
                self.on_button(platform, &handle, &custom_id).await
            }
            InboundInteraction::Command {
                handle,
                name,
                guild_id,
                requester,
            } => {
                let Some(command) = SlashCommand::from_name(&name) else {
                    debug!("skip interaction because /{} is not a known command", name);
                    return;
                };
                info!("Slash command triggered: {}", name);
                self.on_command(platform, &handle, command, guild_id, &requester)
                    .await
            }
        }
    }

    async fn on_button(&self, platform: &dyn Platform, handle: &InteractionHandle, url: &str) {
        let reply = Reply::ephemeral(format!("🔗 Opening {} in your browser!", url));
        if let Err(why) = platform.reply(handle, &reply).await {
            error!("Error handling button interaction: {:?}", why);
            let fallback = Reply::ephemeral("❌ Could not process your request.");
            if let Err(why) = platform.reply(handle, &fallback).await {
                error!("Failed to send button error reply: {:?}", why);
            }
        }
    }

    async fn on_command(
        &self,
        platform: &dyn Platform,
        handle: &InteractionHandle,
        command: SlashCommand,
        guild_id: Option<GuildId>,
        requester: &Requester,
    ) {
        let result = match command {
            SlashCommand::Active => self.active(platform, handle, guild_id, requester).await,
            SlashCommand::Developer => {
                self.profile(platform, handle, guild_id, ProfileRole::Developer)
                    .await
            }
            SlashCommand::Owner => {
                self.profile(platform, handle, guild_id, ProfileRole::Owner)
                    .await
            }
        };

        if let Err(why) = result {
            error!("Error handling /{} command: {:?}", command.name(), why);
            let fallback = Reply::ephemeral(command.failure_message());
            if let Err(why) = platform.reply(handle, &fallback).await {
                error!("Failed to send /{} error reply: {:?}", command.name(), why);
            }
        }
    }

    async fn active(
        &self,
        platform: &dyn Platform,
        handle: &InteractionHandle,
        guild_id: Option<GuildId>,
        requester: &Requester,
    ) -> Result<()> {
        let guild = fetch_invoking_guild(platform, guild_id).await?;
        if !guild.presences_loaded {
            bail!("presences for guild {} are not loaded yet", guild.id);
        }
        let bot = platform.bot_identity();
        let reply = active_reply(&guild, &bot, requester, &self.images, &local_time());
        platform
            .reply(handle, &reply)
            .await
            .context("Failed to send active members reply")
    }

    async fn profile(
        &self,
        platform: &dyn Platform,
        handle: &InteractionHandle,
        guild_id: Option<GuildId>,
        role: ProfileRole,
    ) -> Result<()> {
        let guild = fetch_invoking_guild(platform, guild_id).await?;
        let bot = platform.bot_identity();
        let reply = role.profile().reply(&guild, &bot, &self.images);
        if let Some(card) = reply.embeds.first() {
            debug!(
                "{:?} embed - thumbnail: {:?}, banner: {:?}",
                role, card.thumbnail, card.image
            );
        }
        platform
            .reply(handle, &reply)
            .await
            .with_context(|| format!("Failed to send {:?} profile reply", role))
    }
}

async fn fetch_invoking_guild(
    platform: &dyn Platform,
    guild_id: Option<GuildId>,
) -> Result<GuildSnapshot> {
    let guild_id = guild_id.context("interaction was not sent from a guild")?;
    platform.fetch_guild(guild_id).await
}

fn local_time() -> String {
    Local::now().format("%-I:%M:%S %p").to_string()
}

/// Builds the `/active` answer. Nobody online gets a private notice instead of a card.
pub fn active_reply(
    guild: &GuildSnapshot,
    bot: &BotIdentity,
    requester: &Requester,
    images: &ImageConfig,
    time: &str,
) -> Reply {
    let summary = PresenceSummary::from_members(&guild.members);
    if summary.online == 0 {
        return Reply::ephemeral(format!(
            "❌ No active members are online at the moment. ({})",
            summary
        ));
    }

    let thumbnail = resolve_image(guild.icon_url.as_deref(), Some(guild), bot, images);
    let card = EmbedCard::builder()
        .title("✨ Active Members")
        .description(format!(
            "**{}** members are online in **{}**!",
            summary, guild.name
        ))
        .color(ACTIVE_COLOR)
        .thumbnail(thumbnail)
        .footer(
            EmbedFooter::builder()
                .text(format!("👤 Requested by {} • {}", requester.name, time))
                .icon_url(requester.face_url.clone())
                .build(),
        )
        .build();
    Reply::embed(card)
}
