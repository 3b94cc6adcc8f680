use chrono::Utc;

use crate::display;
use crate::errors::{BookingError, BookingResult};
use crate::models::reservation::{Decision, Reservation, ReservationStatus, ReservationUpdate};

pub const EMPTY_TAB: &str = "No hay reservas en esta categoría.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Pending,
    Confirmed,
    Rejected,
    All,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Pending, Tab::Confirmed, Tab::Rejected, Tab::All];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Pending => "Pendientes",
            Tab::Confirmed => "Confirmadas",
            Tab::Rejected => "Rechazadas",
            Tab::All => "Todas",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Tab::Pending => "pendientes",
            Tab::Confirmed => "confirmadas",
            Tab::Rejected => "rechazadas",
            Tab::All => "todas",
        }
    }

    pub fn from_key(key: &str) -> Option<Tab> {
        Tab::ALL.into_iter().find(|tab| tab.key() == key)
    }

    pub fn includes(&self, status: ReservationStatus) -> bool {
        match self {
            Tab::Pending => status == ReservationStatus::Pending,
            Tab::Confirmed => status == ReservationStatus::Confirmed,
            Tab::Rejected => status == ReservationStatus::Rejected,
            Tab::All => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Loaded,
    Failed(String),
}

/// What the reservations table shows. Loading and error replace the rows.
#[derive(Debug, PartialEq)]
pub enum TableView<'a> {
    Loading,
    Error(&'a str),
    Rows(Vec<&'a Reservation>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PendingAction {
    pub reservation: Reservation,
    pub decision: Decision,
}

impl PendingAction {
    /// Question asked before patching.
    pub fn prompt(&self) -> String {
        let reservation = &self.reservation;
        format!(
            "¿Estás seguro de que deseas {} la reserva de {} para el recinto {} el {} a las {}?",
            self.decision.verb(),
            display::user_name(reservation.user.as_ref()),
            reservation.enclosure.name,
            display::date(reservation.date.date_naive()),
            reservation.time,
        )
    }
}

/// Local state of the reservation management panel.
#[derive(Debug, Clone)]
pub struct ReservationBoard {
    reservations: Vec<Reservation>,
    state: LoadState,
    tab: Tab,
    pending: Option<PendingAction>,
    banner: Option<String>,
}

impl Default for ReservationBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl ReservationBoard {
    pub fn new() -> Self {
        Self {
            reservations: Vec::new(),
            state: LoadState::Loading,
            tab: Tab::default(),
            pending: None,
            banner: None,
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    pub fn pending_action(&self) -> Option<&PendingAction> {
        self.pending.as_ref()
    }

    /// The banner stays until dismissed.
    pub fn begin_loading(&mut self) {
        self.state = LoadState::Loading;
    }

    pub fn finish_loading(&mut self, result: Result<Vec<Reservation>, String>) {
        match result {
            Ok(reservations) => {
                self.reservations = reservations;
                self.state = LoadState::Loaded;
            }
            Err(message) => self.state = LoadState::Failed(message),
        }
    }

    /// Tab switches never touch the data.
    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    /// Rows of the current tab, regardless of load state.
    pub fn visible(&self) -> Vec<&Reservation> {
        self.reservations
            .iter()
            .filter(|reservation| self.tab.includes(reservation.estado))
            .collect()
    }

    pub fn table(&self) -> TableView<'_> {
        match &self.state {
            LoadState::Loading => TableView::Loading,
            LoadState::Failed(message) => TableView::Error(message),
            LoadState::Loaded => TableView::Rows(self.visible()),
        }
    }

    pub fn find(&self, id: &str) -> Option<&Reservation> {
        self.reservations.iter().find(|reservation| reservation.id == id)
    }

    /// Open the confirmation dialog for a pending reservation.
    pub fn request_action(&mut self, id: &str, decision: Decision) -> BookingResult<&PendingAction> {
        let reservation = self
            .find(id)
            .ok_or_else(|| BookingError::NotFound(format!("Reserva {id}")))?;
        reservation.estado.decide(decision)?;

        let action = PendingAction {
            reservation: reservation.clone(),
            decision,
        };
        Ok(self.pending.insert(action))
    }

    pub fn cancel_action(&mut self) {
        self.pending = None;
    }

    /// Apply the server's answer to the local copy of a reservation.
    pub fn apply_update(&mut self, updated: &ReservationUpdate) {
        if let Some(entry) = self
            .reservations
            .iter_mut()
            .find(|reservation| reservation.id == updated.id)
        {
            entry.estado = updated.estado;
            entry.updated_at = updated.updated_at.or(Some(Utc::now()));
        }
        self.pending = None;
    }

    /// The patch failed: show the banner and close the dialog, nothing else changes.
    pub fn fail_action(&mut self, message: String) {
        self.banner = Some(message);
        self.pending = None;
    }

    pub fn dismiss_banner(&mut self) {
        self.banner = None;
    }
}
