//! DTOs shared between the record editors and the housing-utilities backend.

pub mod domain;
pub mod enums;
pub mod shared;
