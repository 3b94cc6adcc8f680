use std::sync::Arc;

use canchas_client::RentalFlow;
use canchas_core::{
    api::BookingApi,
    dialog::BookingDialog,
    errors::{BookingError, BookingResult},
    models::{booking::ShirtColor, venue::PlayMode},
};
use chrono::{Local, NaiveDate};
use eyre::Result;
use serenity::model::application::interaction::{
    application_command::ApplicationCommandInteraction,
    message_component::MessageComponentInteraction, InteractionResponseType,
};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::commands::arrendar::NAME;
use crate::handlers::{expired, HandlerContext};
use crate::screens::{arrendar as screen, choice_value};

/// Handle the /arrendar command: load the catalog into a fresh flow for this user
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

    let mut flow = RentalFlow::new(ctx.api.clone(), ctx.config.client.user_id.clone());
    flow.load().await;
    let view = screen::render(&flow);

    // Replaces any flow this user had open
    ctx.rentals
        .write()
        .await
        .insert(command.user.id, Arc::new(Mutex::new(flow)));

    command
        .edit_original_interaction_response(&ctx.ctx.http, |m| view.apply_edit(m))
        .await?;

    Ok(())
}

/// Handle select menus and buttons of the rental message
pub async fn handle_component(
    ctx: HandlerContext,
    component: &mut MessageComponentInteraction,
) -> Result<()> {
    let session = ctx.rentals.read().await.get(&component.user.id).cloned();
    let Some(session) = session else {
        return expired(&ctx, component, NAME).await;
    };
    let custom_id = component.data.custom_id.clone();
    debug!("Rental interaction {} from {}", custom_id, component.user.id);

    // Backend calls are acknowledged first and the message edited afterwards.
    // The flow is only locked around local state, never across the request.
    if custom_id == screen::RELOAD || custom_id == screen::PAY {
        component
            .create_interaction_response(&ctx.ctx.http, |r| {
                r.kind(InteractionResponseType::DeferredUpdateMessage)
            })
            .await?;

        let view = if custom_id == screen::RELOAD {
            let api = session.lock().await.api();
            let result = api.list_venues().await;
            let mut flow = session.lock().await;
            flow.finish_load(result);
            screen::render(&flow)
        } else {
            let payment = session.lock().await.begin_payment();
            match payment {
                Ok(payment) => {
                    let result = payment.submit().await;
                    let mut flow = session.lock().await;
                    match flow.finish_payment(result) {
                        // The payment screen shows the failure
                        Err(e) => warn!("Booking for {} not completed: {}", component.user.id, e),
                        Ok(()) => info!("Booking completed for {}", component.user.id),
                    }
                    screen::render(&flow)
                }
                Err(e) => {
                    debug!("Rejected {}: {}", custom_id, e);
                    screen::render(&*session.lock().await).with_notice(&e.user_message())
                }
            }
        };

        component
            .edit_original_interaction_response(&ctx.ctx.http, |m| view.apply_edit(m))
            .await?;
        return Ok(());
    }

    let mut flow = session.lock().await;
    let value = component.data.values.first().cloned();
    let today = Local::now().date_naive();
    let view = match apply(&mut flow, &custom_id, value.as_deref(), today) {
        Ok(()) => screen::render(&flow),
        Err(e) => {
            debug!("Rejected {}: {}", custom_id, e);
            screen::render(&flow).with_notice(&e.user_message())
        }
    };
    drop(flow);

    component
        .create_interaction_response(&ctx.ctx.http, |r| {
            r.kind(InteractionResponseType::UpdateMessage)
                .interaction_response_data(|m| view.apply_data(m))
        })
        .await?;

    Ok(())
}

/// Apply one local interaction to the flow.
pub fn apply(
    flow: &mut RentalFlow,
    custom_id: &str,
    value: Option<&str>,
    today: NaiveDate,
) -> BookingResult<()> {
    match custom_id {
        screen::SPORT => flow.set_sport(choice_value(selected(value)?)),
        screen::LOCATION => flow.set_location(choice_value(selected(value)?))?,
        screen::MODE => {
            let mode = choice_value(selected(value)?).and_then(|mode| PlayMode::parse(&mode));
            flow.set_mode(mode);
        }
        screen::VENUE => {
            flow.open_dialog(selected(value)?, today)?;
        }
        screen::COURT => {
            let index = selected(value)?
                .parse::<usize>()
                .map_err(|_| BookingError::Validation("Cancha inválida".to_string()))?;
            dialog(flow)?.select_court(index)?;
        }
        screen::DATE => {
            let date = screen::parse_date(selected(value)?)
                .ok_or_else(|| BookingError::Validation("Fecha inválida".to_string()))?;
            dialog(flow)?.select_date(date)?;
        }
        screen::SLOT => dialog(flow)?.select_slot(selected(value)?)?,
        screen::COLOR => {
            let color = ShirtColor::parse(selected(value)?)
                .ok_or_else(|| BookingError::Validation("Color inválido".to_string()))?;
            dialog(flow)?.select_color(color)?;
        }
        screen::CONFIRM => flow.complete_dialog()?,
        screen::CLOSE => flow.close_dialog(),
        screen::CANCEL => flow.cancel_payment()?,
        screen::RESET => flow.reset()?,
        other => {
            return Err(BookingError::Validation(format!("Acción desconocida: {other}")));
        }
    }
    Ok(())
}

fn selected(value: Option<&str>) -> BookingResult<&str> {
    value.ok_or_else(|| BookingError::Validation("Selecciona una opción".to_string()))
}

fn dialog(flow: &mut RentalFlow) -> BookingResult<&mut BookingDialog> {
    flow.dialog_mut()
        .ok_or_else(|| BookingError::Validation("No hay un arriendo en curso".to_string()))
}
