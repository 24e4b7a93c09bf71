/// Create vs. edit, decided from the navigation path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageMode {
    Create,
    Edit { id: String },
}

impl PageMode {
    pub fn is_edit(&self) -> bool {
        matches!(self, PageMode::Edit { .. })
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            PageMode::Create => None,
            PageMode::Edit { id } => Some(id),
        }
    }
}

const EDIT_SEGMENT: &str = "/edit/";

/// `/users/edit/42` → `Edit { id: "42" }`; anything else is `Create`.
///
/// The identifier is the path segment after `/edit/`; query and fragment are
/// ignored. An empty identifier falls back to `Create`.
pub fn determine_mode(path: &str) -> PageMode {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let Some((_, rest)) = path.split_once(EDIT_SEGMENT) else {
        return PageMode::Create;
    };
    let id = rest.split('/').next().unwrap_or_default().trim();
    if id.is_empty() {
        log::warn!("Edit path without identifier: {}", path);
        return PageMode::Create;
    }
    PageMode::Edit { id: id.to_string() }
}
