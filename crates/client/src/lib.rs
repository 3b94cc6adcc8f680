//! # Canchas Client
//!
//! The HTTP side of the booking front-end.
//!
//! ## Architecture
//!
//! - **Config**: backend base URL, timeouts and the injected user/administrator identity
//! - **Http**: [`http::HttpApi`], the `reqwest` implementation of
//!   [`canchas_core::api::BookingApi`]
//! - **Flows**: the booking submission and reservation management flows, which drive the
//!   core state machines against any `BookingApi`

/// Configuration loaded from the environment
pub mod config;
/// Page-level flows
pub mod flows;
/// `reqwest` backend client
pub mod http;

pub use config::ClientConfig;
pub use http::HttpApi;
pub use flows::{ManagementFlow, Payment, RefreshTask, RentalFlow};
