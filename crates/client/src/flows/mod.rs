pub mod management;
pub mod rental;

pub use management::{ManagementFlow, RefreshTask};
pub use rental::{Payment, RentalFlow};
