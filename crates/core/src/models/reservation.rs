use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{BookingError, BookingResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReservationStatus {
    #[serde(rename = "pendiente")]
    Pending,
    #[serde(rename = "confirmado")]
    Confirmed,
    #[serde(rename = "rechazado")]
    Rejected,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Pending => "pendiente",
            ReservationStatus::Confirmed => "confirmado",
            ReservationStatus::Rejected => "rechazado",
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ReservationStatus::Pending)
    }

    /// Status reached by applying an operator decision. Only pending reservations can
    /// be decided; confirmed and rejected are terminal.
    pub fn decide(self, decision: Decision) -> BookingResult<ReservationStatus> {
        let to = decision.target();
        if self.is_pending() {
            Ok(to)
        } else {
            Err(BookingError::InvalidTransition { from: self, to })
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operator decision on a pending reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    Accept,
    Reject,
}

impl Decision {
    pub fn target(&self) -> ReservationStatus {
        match self {
            Decision::Accept => ReservationStatus::Confirmed,
            Decision::Reject => ReservationStatus::Rejected,
        }
    }

    /// Verb used in the confirmation dialog.
    pub fn verb(&self) -> &'static str {
        match self {
            Decision::Accept => "aceptar",
            Decision::Reject => "rechazar",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRef {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "lastName", default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
}

impl UserRef {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.last_name).trim().to_string()
    }
}

/// The venue's administrator, either populated or left as a bare id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AdminRef {
    User(UserRef),
    Id(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenueRef {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(default)]
    pub admin: Option<AdminRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub enclosure: VenueRef,
    #[serde(default)]
    pub user: Option<UserRef>,
    pub date: DateTime<Utc>,
    pub time: String,
    pub estado: ReservationStatus,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body of `PATCH /playes/gestion/reservas/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    pub estado: ReservationStatus,
}

/// Response of the status patch. Backends may answer with an unpopulated document,
/// so only the identifier, the new status and the update time are read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationUpdate {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub estado: ReservationStatus,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<DateTime<Utc>>,
}
