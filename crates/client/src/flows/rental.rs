use std::sync::Arc;

use canchas_core::{
    api::BookingApi,
    catalog::{self, VenueFilter},
    dialog::BookingDialog,
    errors::{ApiError, ApiResult, BookingError, BookingResult},
    models::{
        booking::{CreateReservationRequest, CreatedReservation},
        venue::{PlayMode, Venue},
    },
    rental::{RentalView, SubmitFailure},
};
use chrono::NaiveDate;
use tracing::{error, info, warn};

/// The rental page: catalog, filters, booking dialog and the payment/confirmation views.
pub struct RentalFlow {
    api: Arc<dyn BookingApi>,
    user_id: Option<String>,
    venues: Vec<Venue>,
    load_error: Option<String>,
    filter: VenueFilter,
    dialog: Option<BookingDialog>,
    view: RentalView,
    failure: Option<SubmitFailure>,
}

impl RentalFlow {
    pub fn new(api: Arc<dyn BookingApi>, user_id: Option<String>) -> Self {
        Self {
            api,
            user_id,
            venues: Vec::new(),
            load_error: None,
            filter: VenueFilter::default(),
            dialog: None,
            view: RentalView::default(),
            failure: None,
        }
    }

    /// Fetch the venue catalog. A failure leaves an empty list and a message.
    pub async fn load(&mut self) {
        let result = self.api.list_venues().await;
        self.finish_load(result);
    }

    /// Backend handle, for callers that fetch without holding the flow.
    pub fn api(&self) -> Arc<dyn BookingApi> {
        self.api.clone()
    }

    /// Store the outcome of a catalog fetch.
    pub fn finish_load(&mut self, result: ApiResult<Vec<Venue>>) {
        match result {
            Ok(venues) => {
                info!("Loaded {} venues", venues.len());
                self.venues = venues;
                self.load_error = None;
            }
            Err(e) => {
                error!("Error loading venues: {}", e);
                self.venues.clear();
                self.load_error = Some(e.user_message());
            }
        }
    }

    pub fn venues(&self) -> &[Venue] {
        &self.venues
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn filter(&self) -> &VenueFilter {
        &self.filter
    }

    pub fn sports(&self) -> Vec<String> {
        catalog::sports(&self.venues)
    }

    pub fn locations(&self) -> Vec<String> {
        self.filter.locations(&self.venues)
    }

    pub fn filtered(&self) -> Vec<&Venue> {
        self.filter.apply(&self.venues)
    }

    pub fn set_sport(&mut self, sport: Option<String>) {
        self.filter.set_sport(sport);
    }

    pub fn set_location(&mut self, location: Option<String>) -> BookingResult<()> {
        let wanted = location.clone();
        if self.filter.set_location(&self.venues, location) {
            Ok(())
        } else {
            Err(BookingError::Validation(format!(
                "La ubicación {} no corresponde al deporte seleccionado",
                wanted.unwrap_or_default()
            )))
        }
    }

    pub fn set_mode(&mut self, mode: Option<PlayMode>) {
        self.filter.set_mode(mode);
    }

    /// Open the booking dialog for a listed venue, bound to the active mode filter.
    pub fn open_dialog(&mut self, venue_id: &str, today: NaiveDate) -> BookingResult<&BookingDialog> {
        let venue = self
            .filtered()
            .into_iter()
            .find(|venue| venue.id == venue_id)
            .cloned()
            .ok_or_else(|| BookingError::NotFound(format!("Recinto {venue_id}")))?;

        let dialog = BookingDialog::open(venue, self.filter.mode(), today);
        if let Some(warning) = dialog.warning() {
            warn!("Opened dialog for {}: {}", venue_id, warning);
        }
        Ok(self.dialog.insert(dialog))
    }

    pub fn dialog(&self) -> Option<&BookingDialog> {
        self.dialog.as_ref()
    }

    pub fn dialog_mut(&mut self) -> Option<&mut BookingDialog> {
        self.dialog.as_mut()
    }

    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }

    /// Validate the dialog and move to the payment view.
    pub fn complete_dialog(&mut self) -> BookingResult<()> {
        let dialog = self
            .dialog
            .as_ref()
            .ok_or_else(|| BookingError::Validation("No hay un arriendo en curso".to_string()))?;
        let draft = dialog.confirm()?;
        let venue = dialog.venue().clone();

        self.view.start_payment(venue, draft)?;
        self.dialog = None;
        self.failure = None;
        Ok(())
    }

    pub fn view(&self) -> &RentalView {
        &self.view
    }

    pub fn failure(&self) -> Option<&SubmitFailure> {
        self.failure.as_ref()
    }

    /// Simulated payment, then the reservation is submitted.
    ///
    /// On failure the view stays in `pagando` and [`RentalFlow::failure`] tells why.
    pub async fn pay(&mut self) -> BookingResult<()> {
        let payment = self.begin_payment()?;
        let result = payment.submit().await;
        self.finish_payment(result)
    }

    /// Build the creation request for the checkout being paid. Performs no I/O.
    pub fn begin_payment(&self) -> BookingResult<Payment> {
        let checkout = self
            .view
            .checkout()
            .ok_or_else(|| BookingError::InvalidView(format!("{} -> confirmado", self.view.name())))?;

        let request = match self.user_id.as_deref() {
            Some(user_id) => Ok(CreateReservationRequest::from_draft(
                &checkout.venue.id,
                user_id,
                &checkout.draft,
            )),
            None => Err(ApiError::Request(
                "no hay un usuario configurado (CANCHAS_USER_ID)".to_string(),
            )),
        };

        Ok(Payment {
            api: self.api.clone(),
            request,
        })
    }

    /// Apply the backend's answer to a submitted payment.
    pub fn finish_payment(&mut self, result: ApiResult<CreatedReservation>) -> BookingResult<()> {
        match result {
            Ok(created) => {
                info!("Reservation {} created with status {}", created.id, created.estado);
                self.failure = None;
                self.view.confirm(created)
            }
            Err(e) => {
                error!("Error creating reservation: {}", e);
                self.failure = Some(SubmitFailure::from(&e));
                Err(e.into())
            }
        }
    }

    pub fn cancel_payment(&mut self) -> BookingResult<()> {
        self.view.cancel_payment()?;
        self.failure = None;
        Ok(())
    }

    pub fn reset(&mut self) -> BookingResult<()> {
        self.view.reset()
    }
}

/// A reservation ready to be sent, detached from the flow that built it.
pub struct Payment {
    api: Arc<dyn BookingApi>,
    request: ApiResult<CreateReservationRequest>,
}

impl Payment {
    /// Send the reservation. A request that could not be built is never sent.
    pub async fn submit(self) -> ApiResult<CreatedReservation> {
        let request = self.request?;
        self.api.create_reservation(&request).await
    }
}
