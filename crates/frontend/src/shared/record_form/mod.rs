//! Shared machinery of the record editor pages
//!
//! - page_mode.rs: create vs. edit from the path
//! - select.rs / lookup.rs: dropdown seam and its server-backed option sources
//! - cascade.rs: dependent selectors
//! - loader.rs: record fetch and form population
//! - submission.rs: save request and reply handling
//! - page.rs: start-up order

pub mod cascade;
pub mod form;
pub mod loader;
pub mod lookup;
pub mod page;
pub mod page_mode;
pub mod select;
pub mod submission;

#[cfg(test)]
pub(crate) mod testing;

pub use cascade::{CascadeController, CascadeLevel, Level};
pub use form::{DependentRefs, Encoding, MessageKeys, RecordForm, RecordMeta};
pub use lookup::{Lookup, RemoteLookup};
pub use page::{FormPage, PageServices};
pub use page_mode::{determine_mode, PageMode};
pub use select::{SelectConfig, SelectOption, SelectWidget};
pub use submission::SubmitOutcome;
