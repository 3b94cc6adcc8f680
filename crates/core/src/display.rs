use chrono::NaiveDate;

use crate::models::{
    booking::BookingDraft,
    reservation::{ReservationStatus, UserRef},
    venue::Venue,
};

pub const USER_UNAVAILABLE: &str = "Usuario no disponible";

/// Chip tone of a reservation status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChipTone {
    Success,
    Warning,
    Error,
}

pub fn status_tone(status: ReservationStatus) -> ChipTone {
    match status {
        ReservationStatus::Confirmed => ChipTone::Success,
        ReservationStatus::Pending => ChipTone::Warning,
        ReservationStatus::Rejected => ChipTone::Error,
    }
}

/// Full name of the booking user, or a placeholder when the backend sent none.
pub fn user_name(user: Option<&UserRef>) -> String {
    match user.map(UserRef::full_name) {
        Some(name) if !name.is_empty() => name,
        _ => USER_UNAVAILABLE.to_string(),
    }
}

/// `dd-mm-yyyy`, as es-CL renders dates.
pub fn date(date: NaiveDate) -> String {
    date.format("%d-%m-%Y").to_string()
}

/// Chilean peso amount with `.` as thousands separator, e.g. `$25.000`.
pub fn clp(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("${grouped}")
}

/// Amenity lines shown in the booking dialog.
pub fn amenities(venue: &Venue) -> Vec<String> {
    let mut lines = Vec::new();
    if venue.parking {
        lines.push("Estacionamiento disponible".to_string());
    }
    if venue.vests {
        lines.push("Petos incluidos".to_string());
    }
    if venue.referees {
        lines.push("Servicio de árbitros disponible".to_string());
    }
    if !venue.materials.is_empty() {
        lines.push(format!("Materiales: {}", venue.materials));
    }
    lines
}

pub fn booking_summary(draft: &BookingDraft, status: ReservationStatus) -> String {
    let mut summary = format!(
        "Reserva {} en {} ({}) para el {} a las {}",
        status,
        draft.venue_name,
        draft.court_label,
        date(draft.date),
        draft.time_slot,
    );
    if let Some(color) = draft.shirt_color {
        summary.push_str(&format!(". Color de camiseta: {color}"));
    }
    summary
}
