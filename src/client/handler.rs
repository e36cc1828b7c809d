use log::debug;
use serenity::{
    all::{
        ComponentInteractionDataKind, EventHandler, Guild, GuildId, GuildMembersChunkEvent,
        Interaction, Presence,
    },
    async_trait,
    client::Context,
    model::prelude::Ready,
};

use super::platform::SerenityPlatform;
use crate::{
    config::Config,
    feature::{
        dispatch::{BotEvent, Dispatcher},
        interaction::InboundInteraction,
        model::{InteractionHandle, Requester},
        ready::ReadySignal,
    },
};

/// Turns gateway events into [`BotEvent`]s for the dispatcher.
pub struct EvHandler {
    dispatcher: Dispatcher,
}

impl EvHandler {
    pub fn new(config: &Config) -> Self {
        Self {
            dispatcher: Dispatcher::new(config),
        }
    }

    async fn dispatch(&self, ctx: Context, event: BotEvent) {
        let platform = SerenityPlatform::new(ctx);
        self.dispatcher.dispatch(&platform, event).await;
    }
}

#[async_trait]
impl EventHandler for EvHandler {
    async fn ready(&self, ctx: Context, r: Ready) {
        let signal = ReadySignal {
            user_id: r.user.id,
            tag: r.user.tag(),
            guild_count: r.guilds.len(),
        };
        self.dispatch(ctx, BotEvent::Ready(signal)).await;
    }

    async fn cache_ready(&self, ctx: Context, guilds: Vec<GuildId>) {
        debug!("cache is ready for {} guilds", guilds.len());
        self.dispatch(ctx, BotEvent::CacheReady).await;
    }

    async fn guild_create(&self, ctx: Context, guild: Guild, _is_new: Option<bool>) {
        debug!(
            "guild create: {} ({}) with {} cached members",
            guild.name,
            guild.id,
            guild.members.len()
        );
        self.dispatch(ctx, BotEvent::GuildAvailable { guild_id: guild.id })
            .await;
    }

    async fn guild_members_chunk(&self, ctx: Context, chunk: GuildMembersChunkEvent) {
        debug!(
            "member chunk {}/{} for guild {}",
            chunk.chunk_index + 1,
            chunk.chunk_count,
            chunk.guild_id
        );
        let event = BotEvent::MembersChunk {
            guild_id: chunk.guild_id,
            chunk_index: chunk.chunk_index,
            chunk_count: chunk.chunk_count,
        };
        self.dispatch(ctx, event).await;
    }

    async fn presence_update(&self, ctx: Context, new_data: Presence) {
        let event = BotEvent::PresenceChanged {
            user_id: new_data.user.id,
            guild_id: new_data.guild_id,
        };
        self.dispatch(ctx, event).await;
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let inbound = match interaction {
            Interaction::Command(cmd) => InboundInteraction::Command {
                handle: InteractionHandle {
                    id: cmd.id,
                    token: cmd.token,
                },
                name: cmd.data.name,
                guild_id: cmd.guild_id,
                requester: Requester {
                    face_url: cmd.user.face(),
                    name: cmd.user.name,
                },
            },
            Interaction::Component(component) => match component.data.kind {
                ComponentInteractionDataKind::Button => InboundInteraction::Button {
                    handle: InteractionHandle {
                        id: component.id,
                        token: component.token,
                    },
                    custom_id: component.data.custom_id,
                },
                _ => return,
            },
            _ => return,
        };
        self.dispatch(ctx, BotEvent::Interaction(inbound)).await;
    }
}
