use async_trait::async_trait;

use crate::errors::ApiResult;
use crate::models::{
    booking::{CreateReservationRequest, CreatedReservation},
    reservation::{Reservation, ReservationStatus, ReservationUpdate},
    venue::Venue,
};

/// Backend operations the front-end relies on.
///
/// Paths are relative to the configured base URL.
#[async_trait]
pub trait BookingApi: Send + Sync {
    /// `GET /enclosure`
    async fn list_venues(&self) -> ApiResult<Vec<Venue>>;

    /// `POST /playes`
    async fn create_reservation(
        &self,
        request: &CreateReservationRequest,
    ) -> ApiResult<CreatedReservation>;

    /// `GET /playes/gestion/reservas`
    async fn list_reservations(&self) -> ApiResult<Vec<Reservation>>;

    /// `GET /playes/gestion/arrendatario/{admin_id}`
    async fn list_admin_reservations(&self, admin_id: &str) -> ApiResult<Vec<Reservation>>;

    /// `PATCH /playes/gestion/reservas/{id}`
    async fn update_reservation_status(
        &self,
        id: &str,
        status: ReservationStatus,
    ) -> ApiResult<ReservationUpdate>;
}
