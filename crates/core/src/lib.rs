//! # Canchas Core
//!
//! Domain types and the state machines behind the booking front-end.
//!
//! Nothing in this crate performs I/O. The backend is reached only through the
//! [`api::BookingApi`] trait, which `canchas-client` implements over HTTP and
//! [`mock`] implements for tests.

/// Backend seam shared by the client and the tests
pub mod api;
/// Reservation board for the administrator panel
pub mod board;
/// Venue filters for the rental listing
pub mod catalog;
/// Booking dialog state
pub mod dialog;
/// Human-readable formatting (es-CL)
pub mod display;
pub mod errors;
pub mod mock;
pub mod models;
/// View states of the rental page
pub mod rental;
