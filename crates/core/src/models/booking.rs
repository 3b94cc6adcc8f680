use std::fmt;

use chrono::{NaiveDate, SecondsFormat};
use serde::{Deserialize, Serialize};

use super::reservation::ReservationStatus;

/// Shirt colors offered to team bookings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShirtColor {
    Rojo,
    Azul,
    Verde,
    Amarillo,
    Blanco,
    Negro,
}

impl ShirtColor {
    pub const ALL: [ShirtColor; 6] = [
        ShirtColor::Rojo,
        ShirtColor::Azul,
        ShirtColor::Verde,
        ShirtColor::Amarillo,
        ShirtColor::Blanco,
        ShirtColor::Negro,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ShirtColor::Rojo => "Rojo",
            ShirtColor::Azul => "Azul",
            ShirtColor::Verde => "Verde",
            ShirtColor::Amarillo => "Amarillo",
            ShirtColor::Blanco => "Blanco",
            ShirtColor::Negro => "Negro",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|color| color.label() == value)
    }
}

impl fmt::Display for ShirtColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Selections emitted by a confirmed booking dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDraft {
    pub venue_name: String,
    pub date: NaiveDate,
    pub time_slot: String,
    pub court_label: String,
    pub shirt_color: Option<ShirtColor>,
}

/// Body of `POST /playes`.
///
/// The status is never sent; the backend assigns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateReservationRequest {
    pub enclosure: String,
    pub user: String,
    pub date: String,
    pub time: String,
}

impl CreateReservationRequest {
    pub fn from_draft(venue_id: &str, user_id: &str, draft: &BookingDraft) -> Self {
        Self {
            enclosure: venue_id.to_string(),
            user: user_id.to_string(),
            date: iso_date(draft.date),
            time: draft.time_slot.clone(),
        }
    }
}

/// Midnight UTC of `date`, e.g. `2025-08-10T00:00:00.000Z`.
pub fn iso_date(date: NaiveDate) -> String {
    date.and_hms_opt(0, 0, 0)
        .map(|midnight| midnight.and_utc().to_rfc3339_opts(SecondsFormat::Millis, true))
        .unwrap_or_default()
}

/// Response of `POST /playes`. Only the identifier and assigned status are relied on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedReservation {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub estado: ReservationStatus,
    #[serde(default)]
    pub time: Option<String>,
}
