use chrono::NaiveDate;

use crate::errors::{BookingError, BookingResult};
use crate::models::{
    booking::{BookingDraft, ShirtColor},
    venue::{Court, PlayMode, Venue},
};

pub const NO_COURTS_WARNING: &str =
    "Este recinto no tiene canchas registradas, no es posible reservar.";

/// Transient selections of the booking dialog for one venue.
///
/// The dialog only validates and emits a [`BookingDraft`]; submitting it is the
/// caller's job.
#[derive(Debug, Clone)]
pub struct BookingDialog {
    venue: Venue,
    mode: Option<PlayMode>,
    today: NaiveDate,
    court_index: usize,
    date: Option<NaiveDate>,
    time_slot: Option<String>,
    shirt_color: Option<ShirtColor>,
}

impl BookingDialog {
    /// Open the dialog with the first court selected and the date set to `today`.
    pub fn open(venue: Venue, mode: Option<PlayMode>, today: NaiveDate) -> Self {
        Self {
            venue,
            mode,
            today,
            court_index: 0,
            date: Some(today),
            time_slot: None,
            shirt_color: None,
        }
    }

    pub fn venue(&self) -> &Venue {
        &self.venue
    }

    pub fn mode(&self) -> Option<PlayMode> {
        self.mode
    }

    pub fn is_team(&self) -> bool {
        self.mode == Some(PlayMode::Team)
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn court_index(&self) -> usize {
        self.court_index
    }

    pub fn active_court(&self) -> Option<&Court> {
        self.venue.courts.get(self.court_index)
    }

    /// The court picker is only shown when there is something to pick.
    pub fn shows_court_picker(&self) -> bool {
        self.venue.courts.len() > 1
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn time_slot(&self) -> Option<&str> {
        self.time_slot.as_deref()
    }

    pub fn shirt_color(&self) -> Option<ShirtColor> {
        self.shirt_color
    }

    /// Slots offered by the active court; empty when there is no valid court.
    pub fn time_slots(&self) -> &[String] {
        self.active_court()
            .map(|court| court.time_slots.as_slice())
            .unwrap_or(&[])
    }

    pub fn warning(&self) -> Option<&'static str> {
        if self.venue.has_courts() {
            None
        } else {
            Some(NO_COURTS_WARNING)
        }
    }

    pub fn select_court(&mut self, index: usize) -> BookingResult<()> {
        let court = self.venue.courts.get(index).ok_or_else(|| {
            BookingError::Validation(format!("La cancha {index} no existe en este recinto"))
        })?;

        if let Some(slot) = &self.time_slot {
            if !court.offers(slot) {
                self.time_slot = None;
            }
        }
        self.court_index = index;
        Ok(())
    }

    /// Changing the day always clears the chosen slot.
    pub fn select_date(&mut self, date: NaiveDate) -> BookingResult<()> {
        if date < self.today {
            return Err(BookingError::Validation(
                "No se puede reservar en una fecha pasada".to_string(),
            ));
        }
        self.date = Some(date);
        self.time_slot = None;
        Ok(())
    }

    pub fn select_slot(&mut self, slot: &str) -> BookingResult<()> {
        let offered = self.active_court().is_some_and(|court| court.offers(slot));
        if !offered {
            return Err(BookingError::Validation(format!(
                "El horario {slot} no está disponible en esta cancha"
            )));
        }
        self.time_slot = Some(slot.to_string());
        Ok(())
    }

    pub fn select_color(&mut self, color: ShirtColor) -> BookingResult<()> {
        if !self.is_team() {
            return Err(BookingError::Validation(
                "El color de camiseta solo aplica a reservas de equipo".to_string(),
            ));
        }
        self.shirt_color = Some(color);
        Ok(())
    }

    pub fn can_confirm(&self) -> bool {
        self.active_court().is_some()
            && self.date.is_some()
            && self.time_slot.is_some()
            && (!self.is_team() || self.shirt_color.is_some())
    }

    pub fn confirm(&self) -> BookingResult<BookingDraft> {
        let court = self
            .active_court()
            .ok_or_else(|| BookingError::Validation(NO_COURTS_WARNING.to_string()))?;
        let date = self
            .date
            .ok_or_else(|| BookingError::Validation("Selecciona el día".to_string()))?;
        let time_slot = self
            .time_slot
            .clone()
            .ok_or_else(|| BookingError::Validation("Selecciona un horario".to_string()))?;

        let shirt_color = if self.is_team() {
            Some(self.shirt_color.ok_or_else(|| {
                BookingError::Validation("Selecciona el color de camiseta".to_string())
            })?)
        } else {
            None
        };

        Ok(BookingDraft {
            venue_name: self.venue.name.clone(),
            date,
            time_slot,
            court_label: court.label.clone(),
            shirt_color,
        })
    }

    /// Discard every selection, back to the state right after [`BookingDialog::open`].
    pub fn reset(&mut self) {
        self.court_index = 0;
        self.date = Some(self.today);
        self.time_slot = None;
        self.shirt_color = None;
    }
}
