use std::time::Duration;

use crate::shared::api_utils::context_path;

/// Page-level settings shared by the record editors
#[derive(Debug, Clone, PartialEq)]
pub struct FormConfig {
    /// Prefix the backend is mounted under (`window.contextPath`)
    pub context_path: String,
    /// Upper bound for uploaded photos, inclusive
    pub max_file_size: u64,
    pub allowed_file_types: Vec<&'static str>,
    /// Photo value the server uses for "no photo"
    pub default_photo_sentinel: &'static str,
    pub default_avatar_path: &'static str,
    /// How long a success toast stays visible before leaving the page
    pub redirect_delay: Duration,
    /// Fallback when a select widget does not report its "selected" event
    pub select_fallback: Duration,
    /// Debounce for search-as-you-type in select widgets
    pub search_debounce: Duration,
    pub toast_duration: Duration,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            context_path: String::new(),
            max_file_size: 800 * 1024,
            allowed_file_types: vec!["image/jpeg", "image/jpg", "image/png", "image/gif"],
            default_photo_sentinel: "default_photo.jpg",
            default_avatar_path: "/assets/img/avatars/1.png",
            redirect_delay: Duration::from_millis(1500),
            select_fallback: Duration::from_millis(50),
            search_debounce: Duration::from_millis(250),
            toast_duration: Duration::from_millis(5000),
        }
    }
}

impl FormConfig {
    /// Defaults plus the context path of the current page.
    pub fn from_window() -> Self {
        Self {
            context_path: context_path(),
            ..Self::default()
        }
    }

    pub fn url(&self, path: &str) -> String {
        crate::shared::api_utils::api_url(&self.context_path, path)
    }

    pub fn default_avatar(&self) -> String {
        self.url(self.default_avatar_path)
    }

    /// Image source for a stored photo value.
    pub fn avatar_src(&self, photo: Option<&str>) -> String {
        match photo.map(str::trim) {
            Some(p) if !p.is_empty() && p != self.default_photo_sentinel => {
                format!("{}/{}", self.context_path, p.trim_start_matches('/'))
            }
            _ => self.default_avatar(),
        }
    }
}
