use canchas_client::{ManagementFlow, RefreshTask, RentalFlow};
use canchas_core::api::BookingApi;
use serenity::{
    async_trait,
    model::{
        application::{
            command::Command,
            interaction::{
                message_component::MessageComponentInteraction, Interaction,
                InteractionResponseType,
            },
        },
        gateway::Ready,
        id::{GuildId, UserId},
    },
    prelude::*,
};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{error, info, warn};

pub mod arrendar;
pub mod reservas;

use crate::commands;
use crate::config::BotConfig;

/// Rental flows keyed by the Discord user driving them.
pub type RentalSessions = Arc<RwLock<HashMap<UserId, Arc<Mutex<RentalFlow>>>>>;

/// Reservation boards keyed by the Discord user who opened them.
pub type BoardSessions = Arc<RwLock<HashMap<UserId, BoardSession>>>;

/// An open `/reservas` board. Dropping it stops its periodic refresh.
pub struct BoardSession {
    pub flow: ManagementFlow,
    _refresh: RefreshTask,
}

impl BoardSession {
    pub fn new(flow: ManagementFlow, refresh: RefreshTask) -> Self {
        Self {
            flow,
            _refresh: refresh,
        }
    }
}

/// Main Discord handler that processes all events.
///
/// Holds the backend client shared by every session plus the per-user page state.
pub struct Handler {
    config: BotConfig,
    api: Arc<dyn BookingApi>,
    rentals: RentalSessions,
    boards: BoardSessions,
}

impl Handler {
    /// Create a new handler
    pub fn new(config: BotConfig, api: Arc<dyn BookingApi>) -> Self {
        Self {
            config,
            api,
            rentals: Arc::new(RwLock::new(HashMap::new())),
            boards: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    fn context(&self, ctx: &Context) -> HandlerContext {
        HandlerContext {
            ctx: ctx.clone(),
            config: self.config.clone(),
            api: self.api.clone(),
            rentals: self.rentals.clone(),
            boards: self.boards.clone(),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Handle ready events (when bot connects to Discord)
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("{} is connected!", ready.user.name);

        // Guild commands show up immediately; global ones go through Discord's cache
        if let Some(test_guild_id) = self.config.test_guild_id {
            match GuildId(test_guild_id)
                .set_application_commands(&ctx.http, commands::register_commands)
                .await
            {
                Ok(cmds) => {
                    info!("Guild commands registered for {}: {}", test_guild_id, cmds.len());
                }
                Err(why) => {
                    error!("Error registering guild commands: {:?}", why);
                }
            }
        }

        match Command::set_global_application_commands(&ctx.http, commands::register_commands).await {
            Ok(cmds) => {
                info!("Global commands registered successfully! Total commands: {}", cmds.len());
                for cmd in cmds {
                    info!("Command registered: /{} - {}", cmd.name, cmd.description);
                }
            }
            Err(why) => {
                error!("Error registering global commands: {:?}", why);
            }
        }
    }

    /// Handle interactions (slash commands, buttons, select menus)
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        match interaction {
            Interaction::ApplicationCommand(command) => {
                info!("Received command: {} from {}", command.data.name, command.user.id);
                let handler_ctx = self.context(&ctx);

                let result = match command.data.name.as_str() {
                    commands::arrendar::NAME => arrendar::handle_command(handler_ctx, &command).await,
                    commands::reservas::NAME => reservas::handle_command(handler_ctx, &command).await,
                    _ => {
                        error!("Unknown command: {}", command.data.name);
                        Err(eyre::eyre!("Comando desconocido"))
                    }
                };

                if let Err(e) = result {
                    error!("Error handling command: {:?}", e);

                    if let Err(why) = command
                        .create_interaction_response(&ctx.http, |r| {
                            r.kind(InteractionResponseType::ChannelMessageWithSource)
                                .interaction_response_data(|m| {
                                    m.content(format!("Error: {}", e)).ephemeral(true)
                                })
                        })
                        .await
                    {
                        warn!("Could not respond, sending follow-up: {:?}", why);
                        if let Err(why) = command
                            .create_followup_message(&ctx.http, |m| {
                                m.content(format!("Error: {}", e)).ephemeral(true)
                            })
                            .await
                        {
                            error!("Failed to send error response: {:?}", why);
                        }
                    }
                }
            }
            Interaction::MessageComponent(mut component) => {
                let handler_ctx = self.context(&ctx);
                let custom_id = component.data.custom_id.clone();

                let result = if custom_id.starts_with("arrendar:") {
                    arrendar::handle_component(handler_ctx, &mut component).await
                } else if custom_id.starts_with("reservas:") {
                    reservas::handle_component(handler_ctx, &mut component).await
                } else {
                    warn!("Ignoring component {}", custom_id);
                    Ok(())
                };

                if let Err(e) = result {
                    error!("Error handling component {}: {:?}", custom_id, e);

                    if let Err(why) = component
                        .create_interaction_response(&ctx.http, |r| {
                            r.kind(InteractionResponseType::ChannelMessageWithSource)
                                .interaction_response_data(|m| {
                                    m.content(format!("Error: {}", e)).ephemeral(true)
                                })
                        })
                        .await
                    {
                        warn!("Could not respond, sending follow-up: {:?}", why);
                        if let Err(why) = component
                            .create_followup_message(&ctx.http, |m| {
                                m.content(format!("Error: {}", e)).ephemeral(true)
                            })
                            .await
                        {
                            error!("Failed to send error response: {:?}", why);
                        }
                    }
                }
            }
            _ => {}
        }
    }
}

/// Shared context for command handlers.
///
/// Bundles the Discord context, bot configuration, backend client and session maps.
pub struct HandlerContext {
    pub ctx: Context,
    pub config: BotConfig,
    pub api: Arc<dyn BookingApi>,
    pub rentals: RentalSessions,
    pub boards: BoardSessions,
}

/// Tell the user their session is gone, e.g. after a restart.
pub(crate) async fn expired(
    ctx: &HandlerContext,
    component: &MessageComponentInteraction,
    command: &str,
) -> eyre::Result<()> {
    component
        .create_interaction_response(&ctx.ctx.http, |r| {
            r.kind(InteractionResponseType::ChannelMessageWithSource)
                .interaction_response_data(|m| {
                    m.content(format!("La sesión expiró, usa /{command} de nuevo."))
                        .ephemeral(true)
                })
        })
        .await?;
    Ok(())
}
