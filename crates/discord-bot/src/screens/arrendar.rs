use canchas_client::RentalFlow;
use canchas_core::{
    dialog::BookingDialog,
    display,
    models::{
        booking::ShirtColor,
        venue::{PlayMode, Venue},
    },
    rental::{Checkout, Confirmation, RentalView, SubmitFailure},
};
use chrono::{Duration, NaiveDate};
use serenity::{
    builder::{CreateComponents, CreateEmbed},
    model::application::component::ButtonStyle,
    utils::Color,
};

use super::{add_select, MenuChoice, Screen, ANY, MAX_MENU_OPTIONS};

pub const SPORT: &str = "arrendar:sport";
pub const LOCATION: &str = "arrendar:location";
pub const MODE: &str = "arrendar:mode";
pub const VENUE: &str = "arrendar:venue";
pub const RELOAD: &str = "arrendar:reload";
pub const COURT: &str = "arrendar:court";
pub const DATE: &str = "arrendar:date";
pub const SLOT: &str = "arrendar:slot";
pub const COLOR: &str = "arrendar:color";
pub const CONFIRM: &str = "arrendar:confirm";
pub const CLOSE: &str = "arrendar:close";
pub const PAY: &str = "arrendar:pay";
pub const CANCEL: &str = "arrendar:cancel";
pub const RESET: &str = "arrendar:reset";

/// Days offered by the date picker, today included.
pub const BOOKING_DAYS: i64 = 14;

/// Select values for dates.
pub const DATE_VALUE_FORMAT: &str = "%Y-%m-%d";

pub fn sport_choices(sports: &[String], selected: Option<&str>) -> Vec<MenuChoice> {
    let mut choices = vec![MenuChoice::new("Todos los deportes", ANY).select_if(selected.is_none())];
    choices.extend(
        sports
            .iter()
            .map(|sport| MenuChoice::new(sport, sport).select_if(selected == Some(sport.as_str()))),
    );
    choices
}

/// Empty until a sport is chosen, matching the filter's own rule.
pub fn location_choices(
    sport: Option<&str>,
    locations: &[String],
    selected: Option<&str>,
) -> Vec<MenuChoice> {
    if sport.is_none() || locations.is_empty() {
        return Vec::new();
    }
    let mut choices =
        vec![MenuChoice::new("Todas las ubicaciones", ANY).select_if(selected.is_none())];
    choices.extend(locations.iter().map(|location| {
        MenuChoice::new(location, location).select_if(selected == Some(location.as_str()))
    }));
    choices
}

pub fn mode_choices(selected: Option<PlayMode>) -> Vec<MenuChoice> {
    let mut choices =
        vec![MenuChoice::new("Cualquier modalidad", ANY).select_if(selected.is_none())];
    choices.extend(
        [PlayMode::Solo, PlayMode::Team]
            .into_iter()
            .map(|mode| MenuChoice::new(mode.label(), mode.as_str()).select_if(selected == Some(mode))),
    );
    choices
}

pub fn venue_choices(venues: &[&Venue]) -> Vec<MenuChoice> {
    venues
        .iter()
        .map(|venue| {
            MenuChoice::new(&venue.name, &venue.id).describe(format!(
                "{} · {} · {} / hr",
                venue.sport,
                venue.location,
                display::clp(venue.hourly_cost)
            ))
        })
        .collect()
}

/// Court options by index; offered only when there is more than one court.
pub fn court_choices(dialog: &BookingDialog) -> Vec<MenuChoice> {
    if !dialog.shows_court_picker() {
        return Vec::new();
    }
    dialog
        .venue()
        .courts
        .iter()
        .enumerate()
        .map(|(index, court)| {
            MenuChoice::new(&court.label, index.to_string())
                .describe(court.materials.clone())
                .select_if(index == dialog.court_index())
        })
        .collect()
}

pub fn date_choices(dialog: &BookingDialog) -> Vec<MenuChoice> {
    (0..BOOKING_DAYS)
        .map(|offset| dialog.today() + Duration::days(offset))
        .map(|date| {
            let label = if date == dialog.today() {
                format!("Hoy, {}", display::date(date))
            } else {
                display::date(date)
            };
            MenuChoice::new(label, date.format(DATE_VALUE_FORMAT).to_string())
                .select_if(dialog.date() == Some(date))
        })
        .collect()
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_VALUE_FORMAT).ok()
}

pub fn slot_choices(dialog: &BookingDialog) -> Vec<MenuChoice> {
    dialog
        .time_slots()
        .iter()
        .map(|slot| MenuChoice::new(slot, slot).select_if(dialog.time_slot() == Some(slot.as_str())))
        .collect()
}

/// Shirt colors, only for team bookings.
pub fn color_choices(dialog: &BookingDialog) -> Vec<MenuChoice> {
    if !dialog.is_team() {
        return Vec::new();
    }
    ShirtColor::ALL
        .iter()
        .map(|color| {
            MenuChoice::new(color.label(), color.label())
                .select_if(dialog.shirt_color() == Some(*color))
        })
        .collect()
}

/// Venue facts shown at the top of the dialog.
pub fn venue_details(venue: &Venue) -> String {
    let mut lines = vec![
        format!("**Deporte:** {}", venue.sport),
        format!("**Jugadores máximos:** {}", venue.max_players),
        format!("**Costo:** {} / hr", display::clp(venue.hourly_cost)),
        format!("**Ubicación:** {}", venue.location),
    ];
    if !venue.description.is_empty() {
        lines.insert(0, venue.description.clone());
    }
    lines.extend(display::amenities(venue));
    if !venue.services.is_empty() {
        let chips: Vec<String> = venue.services.iter().map(|s| format!("`{s}`")).collect();
        lines.push(format!("**Servicios:** {}", chips.join(" ")));
    }
    lines.join("\n")
}

pub fn captain_lines(dialog: &BookingDialog) -> Option<String> {
    dialog
        .is_team()
        .then(|| "Capitán: Tú\nBusca capitán rival".to_string())
}

fn catalog_screen(flow: &RentalFlow) -> Screen {
    let filtered = flow.filtered();

    let mut embed = CreateEmbed::default();
    embed.title("Arrienda una cancha").color(Color::BLUE);
    match flow.load_error() {
        Some(error) => {
            embed
                .description(format!("No se pudieron cargar los recintos: {error}"))
                .color(Color::RED);
        }
        None if filtered.is_empty() => {
            embed.description("No hay recintos que coincidan con los filtros.");
        }
        None => {
            let mut lines: Vec<String> = filtered
                .iter()
                .take(MAX_MENU_OPTIONS)
                .map(|venue| {
                    format!(
                        "**{}** · {} · {} · {} / hr",
                        venue.name,
                        venue.sport,
                        venue.location,
                        display::clp(venue.hourly_cost)
                    )
                })
                .collect();
            if filtered.len() > MAX_MENU_OPTIONS {
                lines.push(format!(
                    "…y {} más. Usa los filtros para acotar la lista.",
                    filtered.len() - MAX_MENU_OPTIONS
                ));
            }
            embed.description(lines.join("\n"));
        }
    }

    let filter = flow.filter();
    let mut components = CreateComponents::default();
    add_select(
        &mut components,
        SPORT,
        "Deporte",
        &sport_choices(&flow.sports(), filter.sport()),
    );
    add_select(
        &mut components,
        LOCATION,
        "Ubicación",
        &location_choices(filter.sport(), &flow.locations(), filter.location()),
    );
    add_select(&mut components, MODE, "Modalidad", &mode_choices(filter.mode()));
    add_select(
        &mut components,
        VENUE,
        "Elige un recinto para reservar",
        &venue_choices(&filtered),
    );
    if flow.load_error().is_some() {
        components.create_action_row(|row| {
            row.create_button(|b| {
                b.custom_id(RELOAD)
                    .label("Reintentar")
                    .style(ButtonStyle::Secondary)
            })
        });
    }

    Screen { embed, components }
}

fn dialog_screen(dialog: &BookingDialog) -> Screen {
    let venue = dialog.venue();

    let mut embed = CreateEmbed::default();
    embed
        .title(&venue.name)
        .description(venue_details(venue))
        .color(Color::DARK_GREEN);
    if let Some(image) = &venue.image {
        embed.thumbnail(image);
    }
    if let Some(court) = dialog.active_court() {
        embed.field("Cancha", &court.label, true);
    }
    if let Some(date) = dialog.date() {
        embed.field("Día", display::date(date), true);
    }
    embed.field("Horario", dialog.time_slot().unwrap_or("Sin seleccionar"), true);
    if let Some(captain) = captain_lines(dialog) {
        let color = dialog
            .shirt_color()
            .map(|c| c.label())
            .unwrap_or("Sin seleccionar");
        embed.field("Equipo", format!("{captain}\nColor de camiseta: {color}"), false);
    }
    if let Some(warning) = dialog.warning() {
        embed.field("Atención", warning, false).color(Color::ORANGE);
    }

    let mut components = CreateComponents::default();
    add_select(&mut components, COURT, "Cancha", &court_choices(dialog));
    if dialog.active_court().is_some() {
        add_select(&mut components, DATE, "Día", &date_choices(dialog));
        add_select(&mut components, SLOT, "Horario", &slot_choices(dialog));
    }
    add_select(&mut components, COLOR, "Color de camiseta", &color_choices(dialog));
    components.create_action_row(|row| {
        row.create_button(|b| {
            b.custom_id(CONFIRM)
                .label("Confirmar arriendo")
                .style(ButtonStyle::Success)
                .disabled(!dialog.can_confirm())
        })
        .create_button(|b| {
            b.custom_id(CLOSE)
                .label("Cancelar")
                .style(ButtonStyle::Secondary)
        })
    });

    Screen { embed, components }
}

fn checkout_screen(checkout: &Checkout, failure: Option<&SubmitFailure>) -> Screen {
    let draft = &checkout.draft;

    let mut embed = CreateEmbed::default();
    embed
        .title("Pago")
        .description(format!(
            "{} ({})\n{} a las {}\nTotal: {}",
            draft.venue_name,
            draft.court_label,
            display::date(draft.date),
            draft.time_slot,
            display::clp(checkout.venue.hourly_cost)
        ))
        .color(Color::GOLD);
    if let Some(color) = draft.shirt_color {
        embed.field("Color de camiseta", color.label(), true);
    }
    if let Some(failure) = failure {
        embed
            .field(failure.title(), &failure.message, false)
            .color(Color::RED);
    }

    let mut components = CreateComponents::default();
    components.create_action_row(|row| {
        row.create_button(|b| {
            b.custom_id(PAY)
                .label(if failure.is_some() { "Reintentar pago" } else { "Pagar" })
                .style(ButtonStyle::Success)
        })
        .create_button(|b| {
            b.custom_id(CANCEL)
                .label("Volver")
                .style(ButtonStyle::Secondary)
        })
    });

    Screen { embed, components }
}

fn confirmation_screen(confirmation: &Confirmation) -> Screen {
    let tone = display::status_tone(confirmation.reservation.estado);

    let mut embed = CreateEmbed::default();
    embed
        .title("Reserva registrada")
        .description(&confirmation.summary)
        .color(super::reservas::tone_color(tone))
        .footer(|f| f.text(format!("Reserva {}", confirmation.reservation.id)));

    let mut components = CreateComponents::default();
    components.create_action_row(|row| {
        row.create_button(|b| {
            b.custom_id(RESET)
                .label("Nueva reserva")
                .style(ButtonStyle::Primary)
        })
    });

    Screen { embed, components }
}

/// The screen for the flow's current state.
pub fn render(flow: &RentalFlow) -> Screen {
    match flow.view() {
        RentalView::Lista => match flow.dialog() {
            Some(dialog) => dialog_screen(dialog),
            None => catalog_screen(flow),
        },
        RentalView::Pagando(checkout) => checkout_screen(checkout, flow.failure()),
        RentalView::Confirmado(confirmation) => confirmation_screen(confirmation),
    }
}
