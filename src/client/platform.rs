use anyhow::{Context as _, Result};
use log::{debug, warn};
use serenity::{
    all::{
        ActivityData, ChunkGuildFilter, CreateActionRow, CreateButton, CreateCommand, CreateEmbed,
        CreateEmbedFooter, CreateInteractionResponse, CreateInteractionResponseMessage, GuildId,
        Member, OnlineStatus, ReactionType, Timestamp, UserId,
    },
    async_trait,
    client::Context,
};

use crate::feature::{
    commands::CommandDescriptor,
    model::{BotIdentity, GuildSnapshot, InteractionHandle, MemberSnapshot, PresenceStatus},
    platform::Platform,
    reply::{EmbedCard, Reply},
};

const ICON_SIZE: u16 = 1024;
const MEMBER_PAGE_LIMIT: u64 = 1000;

/// [`Platform`] backed by a live serenity [`Context`].
pub struct SerenityPlatform {
    ctx: Context,
}

impl SerenityPlatform {
    pub fn new(ctx: Context) -> Self {
        Self { ctx }
    }

    fn cached_guild(&self, guild_id: GuildId) -> Option<GuildSnapshot> {
        let guild = self.ctx.cache.guild(guild_id)?;
        let members = guild
            .members
            .values()
            .map(|member| MemberSnapshot {
                is_bot: member.user.bot,
                status: guild
                    .presences
                    .get(&member.user.id)
                    .map_or(PresenceStatus::Absent, |presence| {
                        presence_status(presence.status)
                    }),
            })
            .collect();

        Some(GuildSnapshot {
            id: guild.id,
            name: guild.name.clone(),
            icon_url: guild.icon_url().map(sized_icon),
            member_count: guild.member_count,
            members,
            presences_loaded: true,
        })
    }

    async fn fetch_guild_over_http(&self, guild_id: GuildId) -> Result<GuildSnapshot> {
        let partial = guild_id
            .to_partial_guild_with_counts(&self.ctx.http)
            .await
            .context("Failed to fetch guild")?;

        let mut members: Vec<Member> = Vec::new();
        let mut after: Option<UserId> = None;
        loop {
            let page = guild_id
                .members(&self.ctx.http, Some(MEMBER_PAGE_LIMIT), after)
                .await
                .context("Failed to fetch guild members")?;
            let exhausted = (page.len() as u64) < MEMBER_PAGE_LIMIT;
            after = page.last().map(|member| member.user.id);
            members.extend(page);
            if exhausted || after.is_none() {
                break;
            }
        }

        let member_count = partial
            .approximate_member_count
            .unwrap_or(members.len() as u64);
        Ok(GuildSnapshot {
            id: partial.id,
            name: partial.name.clone(),
            icon_url: partial.icon_url().map(sized_icon),
            member_count,
            members: members
                .iter()
                .map(|member| MemberSnapshot {
                    is_bot: member.user.bot,
                    status: PresenceStatus::Absent,
                })
                .collect(),
            presences_loaded: false,
        })
    }
}

#[async_trait]
impl Platform for SerenityPlatform {
    fn bot_identity(&self) -> BotIdentity {
        let user = self.ctx.cache.current_user();
        BotIdentity {
            avatar_url: user.avatar_url(),
            face_url: user.face(),
        }
    }

    async fn fetch_guild(&self, guild_id: GuildId) -> Result<GuildSnapshot> {
        if let Some(guild) = self.cached_guild(guild_id) {
            return Ok(guild);
        }
        warn!(
            "guild {} is not cached yet, fetching without presences",
            guild_id
        );
        self.fetch_guild_over_http(guild_id).await
    }

    fn request_members(&self, guild_id: GuildId) {
        debug!("requesting member chunks for guild {}", guild_id);
        self.ctx
            .shard
            .chunk_guild(guild_id, None, true, ChunkGuildFilter::None, None);
    }

    fn set_watching(&self, text: &str) {
        self.ctx.set_activity(Some(ActivityData::watching(text)));
    }

    async fn register_commands(
        &self,
        guild_id: GuildId,
        commands: &[CommandDescriptor],
    ) -> Result<usize> {
        let commands = commands
            .iter()
            .map(|command| CreateCommand::new(command.name).description(command.description))
            .collect();
        let registered = guild_id
            .set_commands(&self.ctx.http, commands)
            .await
            .with_context(|| format!("Failed to set commands for guild {}", guild_id))?;
        Ok(registered.len())
    }

    async fn reply(&self, handle: &InteractionHandle, reply: &Reply) -> Result<()> {
        let response = CreateInteractionResponse::Message(to_response_message(reply));
        self.ctx
            .http
            .create_interaction_response(handle.id, &handle.token, &response, Vec::new())
            .await
            .with_context(|| format!("Failed to respond to interaction {}", handle.id))
    }
}

fn presence_status(status: OnlineStatus) -> PresenceStatus {
    match status {
        OnlineStatus::Online => PresenceStatus::Online,
        OnlineStatus::Idle => PresenceStatus::Idle,
        OnlineStatus::DoNotDisturb => PresenceStatus::DoNotDisturb,
        _ => PresenceStatus::Offline,
    }
}

fn sized_icon(url: String) -> String {
    format!("{}?size={}", url, ICON_SIZE)
}

fn to_embed(card: &EmbedCard) -> CreateEmbed {
    let mut footer = CreateEmbedFooter::new(&card.footer.text);
    if let Some(icon_url) = &card.footer.icon_url {
        footer = footer.icon_url(icon_url);
    }

    let mut embed = CreateEmbed::new()
        .title(&card.title)
        .description(&card.description)
        .color(card.color)
        .fields(
            card.fields
                .iter()
                .map(|field| (field.name.clone(), field.value.clone(), field.inline)),
        )
        .footer(footer);
    if let Some(thumbnail) = &card.thumbnail {
        embed = embed.thumbnail(thumbnail);
    }
    if let Some(image) = &card.image {
        embed = embed.image(image);
    }
    if card.timestamp {
        embed = embed.timestamp(Timestamp::now());
    }
    embed
}

fn to_response_message(reply: &Reply) -> CreateInteractionResponseMessage {
    let mut message = CreateInteractionResponseMessage::new()
        .ephemeral(reply.ephemeral)
        .embeds(reply.embeds.iter().map(to_embed).collect());
    if let Some(content) = &reply.content {
        message = message.content(content);
    }
    if !reply.buttons.is_empty() {
        let buttons = reply
            .buttons
            .iter()
            .map(|button| {
                CreateButton::new_link(button.url)
                    .label(button.label)
                    .emoji(ReactionType::Unicode(button.emoji.to_string()))
            })
            .collect();
        message = message.components(vec![CreateActionRow::Buttons(buttons)]);
    }
    message
}

#[cfg(test)]
mod tests {
    use serenity::all::OnlineStatus;

    use super::{presence_status, sized_icon};
    use crate::feature::model::PresenceStatus;

    #[test]
    fn test_presence_status_mapping() {
        assert_eq!(presence_status(OnlineStatus::Online), PresenceStatus::Online);
        assert_eq!(presence_status(OnlineStatus::Idle), PresenceStatus::Idle);
        assert_eq!(
            presence_status(OnlineStatus::DoNotDisturb),
            PresenceStatus::DoNotDisturb
        );
        assert_eq!(presence_status(OnlineStatus::Invisible), PresenceStatus::Offline);
        assert_eq!(presence_status(OnlineStatus::Offline), PresenceStatus::Offline);
    }

    #[test]
    fn test_sized_icon() {
        assert_eq!(
            sized_icon("https://cdn.discordapp.com/icons/1/a_abc.gif".to_string()),
            "https://cdn.discordapp.com/icons/1/a_abc.gif?size=1024"
        );
    }
}
