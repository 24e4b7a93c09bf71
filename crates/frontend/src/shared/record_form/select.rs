//! Seam between the cascade controller and a searchable dropdown widget.

use futures::future::LocalBoxFuture;
use std::rc::Rc;

use crate::shared::api_utils::ApiError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub id: String,
    pub text: String,
}

impl SelectOption {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Remote search installed into a widget; receives the typed term.
pub type SearchFn = Rc<dyn Fn(String) -> LocalBoxFuture<'static, Result<Vec<SelectOption>, ApiError>>>;

pub struct SelectConfig {
    pub placeholder_key: &'static str,
    pub search: SearchFn,
}

/// A searchable single-choice dropdown.
///
/// `clear`, `set_options` and `set_enabled` are silent. `select` and user
/// picks notify the `on_change` listeners.
pub trait SelectWidget {
    fn configure(&self, config: SelectConfig);
    /// Resolves once `configure` has completed.
    fn ready(&self) -> LocalBoxFuture<'static, ()>;

    fn is_enabled(&self) -> bool;
    fn set_enabled(&self, enabled: bool);
    fn set_loading(&self, loading: bool);

    fn value(&self) -> Option<SelectOption>;
    fn clear(&self);
    /// Replaces the option list and drops the selection.
    fn set_options(&self, options: Vec<SelectOption>);
    fn options(&self) -> Vec<SelectOption>;
    fn has_option(&self, id: &str) -> bool;
    fn add_option(&self, option: SelectOption);

    /// Selects an existing option. Resolves when the widget emits its
    /// "selected" event, which may never happen for injected options.
    fn select(&self, id: &str) -> LocalBoxFuture<'static, ()>;

    fn on_change(&self, listener: Rc<dyn Fn()>);
}
