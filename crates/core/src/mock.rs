use async_trait::async_trait;
use mockall::mock;

use crate::api::BookingApi;
use crate::errors::ApiResult;
use crate::models::{
    booking::{CreateReservationRequest, CreatedReservation},
    reservation::{Reservation, ReservationStatus, ReservationUpdate},
    venue::Venue,
};

// Mock backend for testing flows without a server
mock! {
    pub Backend {}

    #[async_trait]
    impl BookingApi for Backend {
        async fn list_venues(&self) -> ApiResult<Vec<Venue>>;

        async fn create_reservation(
            &self,
            request: &CreateReservationRequest,
        ) -> ApiResult<CreatedReservation>;

        async fn list_reservations(&self) -> ApiResult<Vec<Reservation>>;

        async fn list_admin_reservations(&self, admin_id: &str) -> ApiResult<Vec<Reservation>>;

        async fn update_reservation_status(
            &self,
            id: &str,
            status: ReservationStatus,
        ) -> ApiResult<ReservationUpdate>;
    }
}
