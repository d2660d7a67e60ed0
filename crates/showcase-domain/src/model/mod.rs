//! Domain model types

pub mod catalog;
pub mod filter;

pub use catalog::Catalog;
pub use filter::VehicleFilter;
