//! Common types shared by all records

pub mod record_id;
pub mod reference;

// Re-exports
pub use reference::{ChairmanRef, CityRef, HouseRef, StreetRef};
