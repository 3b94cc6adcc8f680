use canchas_client::ManagementFlow;
use canchas_core::{
    errors::{BookingError, BookingResult},
    models::reservation::Decision,
};
use eyre::Result;
use serenity::model::application::interaction::{
    application_command::ApplicationCommandInteraction,
    message_component::MessageComponentInteraction, InteractionResponseType,
};
use tracing::{debug, info, warn};

use crate::commands::reservas::NAME;
use crate::handlers::{expired, BoardSession, HandlerContext};
use crate::screens::{reservas as screen, Screen};

/// Handle the /reservas command: fetch the board and start its periodic refresh
pub async fn handle_command(
    ctx: HandlerContext,
    command: &ApplicationCommandInteraction,
) -> Result<()> {
    command
        .create_interaction_response(&ctx.ctx.http, |r| {
            r.kind(InteractionResponseType::DeferredChannelMessageWithSource)
                .interaction_response_data(|m| m.ephemeral(true))
        })
        .await?;

    let flow = ManagementFlow::new(ctx.api.clone(), ctx.config.client.admin_id.clone());
    if let Err(e) = flow.refresh().await {
        warn!("Initial reservation fetch failed: {}", e);
    }
    let refresh = flow.spawn_refresh(ctx.config.client.refresh_interval);
    info!(
        "Reservation board opened by {} (refresh every {:?})",
        command.user.id, ctx.config.client.refresh_interval
    );

    let view = render(&flow).await;

    // The previous board of this user, if any, stops refreshing here
    ctx.boards
        .write()
        .await
        .insert(command.user.id, BoardSession::new(flow, refresh));

    command
        .edit_original_interaction_response(&ctx.ctx.http, |m| view.apply_edit(m))
        .await?;

    Ok(())
}

/// Handle tab buttons, accept/reject pickers and the confirmation dialog
pub async fn handle_component(
    ctx: HandlerContext,
    component: &mut MessageComponentInteraction,
) -> Result<()> {
    let flow = ctx
        .boards
        .read()
        .await
        .get(&component.user.id)
        .map(|session| session.flow.clone());
    let Some(flow) = flow else {
        return expired(&ctx, component, NAME).await;
    };

    let custom_id = component.data.custom_id.clone();
    debug!("Board interaction {} from {}", custom_id, component.user.id);

    if custom_id == screen::REFRESH || custom_id == screen::CONFIRM {
        component
            .create_interaction_response(&ctx.ctx.http, |r| {
                r.kind(InteractionResponseType::DeferredUpdateMessage)
            })
            .await?;

        // Failures end up on the board as an error state or banner
        if custom_id == screen::REFRESH {
            if let Err(e) = flow.refresh().await {
                warn!("Reservation refresh failed: {}", e);
            }
        } else {
            match flow.confirm_action().await {
                Ok(updated) => info!("Reservation {} set to {}", updated.id, updated.estado),
                Err(e) => warn!("Reservation update failed: {}", e),
            }
        }

        let view = render(&flow).await;
        component
            .edit_original_interaction_response(&ctx.ctx.http, |m| view.apply_edit(m))
            .await?;
        return Ok(());
    }

    let value = component.data.values.first().cloned();
    let view = match apply(&flow, &custom_id, value.as_deref()).await {
        Ok(()) => render(&flow).await,
        Err(e) => {
            debug!("Rejected {}: {}", custom_id, e);
            render(&flow).await.with_notice(&e.user_message())
        }
    };

    component
        .create_interaction_response(&ctx.ctx.http, |r| {
            r.kind(InteractionResponseType::UpdateMessage)
                .interaction_response_data(|m| view.apply_data(m))
        })
        .await?;

    Ok(())
}

/// Apply one interaction that does not reach the backend.
pub async fn apply(flow: &ManagementFlow, custom_id: &str, value: Option<&str>) -> BookingResult<()> {
    let selected =
        || value.ok_or_else(|| BookingError::Validation("Selecciona una reserva".to_string()));

    match custom_id {
        screen::ACCEPT => {
            flow.request_action(selected()?, Decision::Accept).await?;
        }
        screen::REJECT => {
            flow.request_action(selected()?, Decision::Reject).await?;
        }
        screen::CANCEL => flow.cancel_action().await,
        screen::DISMISS => flow.board().write().await.dismiss_banner(),
        other => {
            let tab = screen::parse_tab(other).ok_or_else(|| {
                BookingError::Validation(format!("Acción desconocida: {other}"))
            })?;
            flow.board().write().await.select_tab(tab);
        }
    }
    Ok(())
}

async fn render(flow: &ManagementFlow) -> Screen {
    let board = flow.board();
    let board = board.read().await;
    screen::board_screen(&board)
}
