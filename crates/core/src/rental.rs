use crate::display;
use crate::errors::{ApiError, BookingError, BookingResult, FailureKind};
use crate::models::{
    booking::{BookingDraft, CreatedReservation},
    venue::Venue,
};

/// Venue and draft waiting for payment.
#[derive(Debug, Clone, PartialEq)]
pub struct Checkout {
    pub venue: Venue,
    pub draft: BookingDraft,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Confirmation {
    pub reservation: CreatedReservation,
    pub draft: BookingDraft,
    pub summary: String,
}

/// View states of the rental page.
///
/// `Lista -> Pagando -> Confirmado`, with `Pagando -> Lista` on cancel and
/// `Confirmado -> Lista` on reset.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RentalView {
    #[default]
    Lista,
    Pagando(Checkout),
    Confirmado(Confirmation),
}

impl RentalView {
    pub fn name(&self) -> &'static str {
        match self {
            RentalView::Lista => "lista",
            RentalView::Pagando(_) => "pagando",
            RentalView::Confirmado(_) => "confirmado",
        }
    }

    pub fn checkout(&self) -> Option<&Checkout> {
        match self {
            RentalView::Pagando(checkout) => Some(checkout),
            _ => None,
        }
    }

    pub fn start_payment(&mut self, venue: Venue, draft: BookingDraft) -> BookingResult<()> {
        match self {
            RentalView::Lista => {
                *self = RentalView::Pagando(Checkout { venue, draft });
                Ok(())
            }
            other => Err(invalid(other, "pagando")),
        }
    }

    pub fn cancel_payment(&mut self) -> BookingResult<()> {
        match self {
            RentalView::Pagando(_) => {
                *self = RentalView::Lista;
                Ok(())
            }
            other => Err(invalid(other, "lista")),
        }
    }

    pub fn confirm(&mut self, reservation: CreatedReservation) -> BookingResult<()> {
        match self {
            RentalView::Pagando(checkout) => {
                let summary = display::booking_summary(&checkout.draft, reservation.estado);
                let draft = checkout.draft.clone();
                *self = RentalView::Confirmado(Confirmation {
                    reservation,
                    draft,
                    summary,
                });
                Ok(())
            }
            other => Err(invalid(other, "confirmado")),
        }
    }

    pub fn reset(&mut self) -> BookingResult<()> {
        match self {
            RentalView::Confirmado(_) => {
                *self = RentalView::Lista;
                Ok(())
            }
            other => Err(invalid(other, "lista")),
        }
    }
}

fn invalid(view: &RentalView, to: &str) -> BookingError {
    BookingError::InvalidView(format!("{} -> {}", view.name(), to))
}

/// Why a booking submission failed, ready to show to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl SubmitFailure {
    pub fn title(&self) -> &'static str {
        match self.kind {
            FailureKind::Server => "El servidor rechazó la reserva",
            FailureKind::Network => "Sin respuesta del servidor",
            FailureKind::Request => "Error al preparar la reserva",
        }
    }
}

impl From<&ApiError> for SubmitFailure {
    fn from(err: &ApiError) -> Self {
        Self {
            kind: err.kind(),
            message: err.user_message(),
        }
    }
}
