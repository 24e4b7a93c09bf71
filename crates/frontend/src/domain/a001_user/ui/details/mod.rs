//! User editor
//!
//! - model.rs: record metadata, photo checks and labels
//! - view_model.rs: form signals, `RecordForm` implementation
//! - view.rs: Leptos component

mod model;
mod view;
mod view_model;

pub use view::UserDetails;
pub use view_model::UserDetailsVm;
