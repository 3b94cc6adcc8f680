use canchas_core::{
    board::{ReservationBoard, Tab, TableView, EMPTY_TAB},
    display::{self, ChipTone},
    models::reservation::{Decision, Reservation},
};
use serenity::{
    builder::{CreateComponents, CreateEmbed},
    model::application::component::ButtonStyle,
    utils::Color,
};

use super::{add_select, MenuChoice, Screen};

pub const TAB_PREFIX: &str = "reservas:tab:";
pub const ACCEPT: &str = "reservas:accept";
pub const REJECT: &str = "reservas:reject";
pub const CONFIRM: &str = "reservas:confirm";
pub const CANCEL: &str = "reservas:cancel";
pub const REFRESH: &str = "reservas:refresh";
pub const DISMISS: &str = "reservas:dismiss";

/// Rows listed in the embed before the rest is summarized.
pub const MAX_TABLE_ROWS: usize = 20;

pub fn tone_color(tone: ChipTone) -> Color {
    match tone {
        ChipTone::Success => Color::DARK_GREEN,
        ChipTone::Warning => Color::ORANGE,
        ChipTone::Error => Color::RED,
    }
}

pub fn tone_marker(tone: ChipTone) -> &'static str {
    match tone {
        ChipTone::Success => "🟢",
        ChipTone::Warning => "🟠",
        ChipTone::Error => "🔴",
    }
}

pub fn tab_id(tab: Tab) -> String {
    format!("{TAB_PREFIX}{}", tab.key())
}

pub fn parse_tab(custom_id: &str) -> Option<Tab> {
    custom_id.strip_prefix(TAB_PREFIX).and_then(Tab::from_key)
}

pub fn row_line(reservation: &Reservation) -> String {
    format!(
        "{} **{}** · {} · {} {} · {}",
        tone_marker(display::status_tone(reservation.estado)),
        display::user_name(reservation.user.as_ref()),
        reservation.enclosure.name,
        display::date(reservation.date.date_naive()),
        reservation.time,
        reservation.estado,
    )
}

/// Body of the board: loading, the fetch error, or the rows of the current tab.
pub fn table_text(board: &ReservationBoard) -> String {
    match board.table() {
        TableView::Loading => "Cargando reservas...".to_string(),
        TableView::Error(message) => format!("No se pudieron cargar las reservas: {message}"),
        TableView::Rows(rows) if rows.is_empty() => EMPTY_TAB.to_string(),
        TableView::Rows(rows) => {
            let mut lines: Vec<String> = rows
                .iter()
                .take(MAX_TABLE_ROWS)
                .map(|reservation| row_line(reservation))
                .collect();
            if rows.len() > MAX_TABLE_ROWS {
                lines.push(format!("…y {} más", rows.len() - MAX_TABLE_ROWS));
            }
            lines.join("\n")
        }
    }
}

/// Pending rows of the current tab, the only ones that can be decided.
pub fn action_choices(board: &ReservationBoard) -> Vec<MenuChoice> {
    match board.table() {
        TableView::Rows(rows) => rows
            .into_iter()
            .filter(|reservation| reservation.estado.is_pending())
            .map(|reservation| {
                MenuChoice::new(
                    format!(
                        "{} · {} {}",
                        display::user_name(reservation.user.as_ref()),
                        display::date(reservation.date.date_naive()),
                        reservation.time
                    ),
                    &reservation.id,
                )
                .describe(reservation.enclosure.name.clone())
            })
            .collect(),
        _ => Vec::new(),
    }
}

pub fn board_screen(board: &ReservationBoard) -> Screen {
    let mut embed = CreateEmbed::default();
    embed
        .title(format!("Reservas · {}", board.tab().label()))
        .description(table_text(board))
        .color(match board.table() {
            TableView::Error(_) => Color::RED,
            _ => Color::BLUE,
        })
        .footer(|f| f.text("La lista se actualiza automáticamente"));
    if let Some(banner) = board.banner() {
        embed.field("No se pudo actualizar la reserva", banner, false);
    }

    let mut components = CreateComponents::default();

    if let Some(action) = board.pending_action() {
        embed.field("Confirmar acción", action.prompt(), false);
        let style = match action.decision {
            Decision::Accept => ButtonStyle::Success,
            Decision::Reject => ButtonStyle::Danger,
        };
        components.create_action_row(|row| {
            row.create_button(|b| b.custom_id(CONFIRM).label("Confirmar").style(style))
                .create_button(|b| {
                    b.custom_id(CANCEL)
                        .label("Cancelar")
                        .style(ButtonStyle::Secondary)
                })
        });
        return Screen { embed, components };
    }

    components.create_action_row(|row| {
        for tab in Tab::ALL {
            row.create_button(|b| {
                b.custom_id(tab_id(tab)).label(tab.label()).style(if tab == board.tab() {
                    ButtonStyle::Primary
                } else {
                    ButtonStyle::Secondary
                })
            });
        }
        row.create_button(|b| {
            b.custom_id(REFRESH)
                .label("Actualizar")
                .style(ButtonStyle::Secondary)
        })
    });

    let choices = action_choices(board);
    add_select(&mut components, ACCEPT, "Aceptar reserva", &choices);
    add_select(&mut components, REJECT, "Rechazar reserva", &choices);

    if board.banner().is_some() {
        components.create_action_row(|row| {
            row.create_button(|b| {
                b.custom_id(DISMISS)
                    .label("Cerrar aviso")
                    .style(ButtonStyle::Secondary)
            })
        });
    }

    Screen { embed, components }
}
