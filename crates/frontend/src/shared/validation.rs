//! Client-side file checks and the per-field error set filled from server
//! responses.

use contracts::shared::error_response::ErrorResponse;
use std::collections::BTreeMap;

use crate::shared::i18n::Translator;

/// What the file checks need to know about a selected file.
pub trait FileInfo {
    fn mime_type(&self) -> String;
    fn size(&self) -> u64;
}

impl FileInfo for web_sys::File {
    fn mime_type(&self) -> String {
        self.type_()
    }

    fn size(&self) -> u64 {
        // Blob::size is an f64 byte count
        web_sys::Blob::size(self) as u64
    }
}

pub fn validate_file_type(file: &impl FileInfo, allowed_types: &[&str]) -> bool {
    let mime = file.mime_type();
    allowed_types.iter().any(|t| *t == mime)
}

/// Inclusive upper bound.
pub fn validate_file_size(file: &impl FileInfo, max_bytes: u64) -> bool {
    file.size() <= max_bytes
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Text shown under the input
    pub text: String,
    /// Translation key the text came from, re-translated on language change
    pub i18n_key: Option<String>,
}

/// Invalid markers for the tracked inputs of one form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors {
    tracked: Vec<&'static str>,
    errors: BTreeMap<String, FieldError>,
}

impl FieldErrors {
    pub fn new(tracked: &[&'static str]) -> Self {
        Self {
            tracked: tracked.to_vec(),
            errors: BTreeMap::new(),
        }
    }

    pub fn is_tracked(&self, field: &str) -> bool {
        self.tracked.iter().any(|f| *f == field)
    }

    pub fn is_invalid(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.errors.get(field)
    }

    pub fn invalid_fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    /// Removes every invalid marker; idempotent.
    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    /// Marks a tracked field; untracked names are ignored.
    pub fn mark(&mut self, field: &str, error: FieldError) -> bool {
        if !self.is_tracked(field) {
            return false;
        }
        self.errors.insert(field.to_string(), error);
        true
    }

    /// Rebuilds the set from a server response. Messages containing a dot are
    /// translation keys.
    ///
    /// Returns whether the response carried a structured field mapping.
    pub fn apply_server_errors(
        &mut self,
        response: &ErrorResponse,
        translator: Option<&dyn Translator>,
    ) -> bool {
        self.clear_errors();
        let Some(mapping) = response.field_errors() else {
            return false;
        };
        for (field, message) in mapping {
            let error = if message.contains('.') {
                FieldError {
                    text: translator
                        .map(|t| t.translate(message, &[]))
                        .unwrap_or_else(|| message.clone()),
                    i18n_key: Some(message.clone()),
                }
            } else {
                FieldError {
                    text: message.clone(),
                    i18n_key: None,
                }
            };
            if !self.mark(field, error) {
                log::debug!("Server error for untracked field {}: {}", field, message);
            }
        }
        true
    }

    /// Text for a field, re-translating keyed messages.
    pub fn message(&self, field: &str, translator: Option<&dyn Translator>) -> Option<String> {
        self.errors.get(field).map(|e| match (&e.i18n_key, translator) {
            (Some(key), Some(t)) => t.translate(key, &[]),
            _ => e.text.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::i18n::{translate, Args, Lang};

    struct FakeFile {
        mime: &'static str,
        size: u64,
    }

    impl FileInfo for FakeFile {
        fn mime_type(&self) -> String {
            self.mime.to_string()
        }

        fn size(&self) -> u64 {
            self.size
        }
    }

    struct Russian;

    impl Translator for Russian {
        fn translate(&self, key: &str, args: &Args) -> String {
            translate(Lang::Ru, key, args)
        }
    }

    const FIELDS: &[&str] = &["firstName", "lastName", "email", "phone", "login"];

    #[test]
    fn test_file_size_boundary_is_inclusive() {
        let max = 800 * 1024;
        let exact = FakeFile { mime: "image/png", size: 800 * 1024 };
        let over = FakeFile { mime: "image/png", size: 900 * 1024 };
        assert!(validate_file_size(&exact, max));
        assert!(!validate_file_size(&over, max));
    }

    #[test]
    fn test_file_type_membership() {
        let allowed = ["image/jpeg", "image/png"];
        assert!(validate_file_type(&FakeFile { mime: "image/png", size: 1 }, &allowed));
        assert!(!validate_file_type(&FakeFile { mime: "application/pdf", size: 1 }, &allowed));
    }

    #[test]
    fn test_only_email_marked_after_clear_and_apply() {
        let mut errors = FieldErrors::new(FIELDS);
        errors.mark("firstName", FieldError { text: "old".into(), i18n_key: None });
        errors.mark("phone", FieldError { text: "old".into(), i18n_key: None });

        let response: ErrorResponse =
            serde_json::from_str(r#"{"fieldErrors": {"email": "x"}}"#).unwrap();
        errors.clear_errors();
        assert!(errors.apply_server_errors(&response, None));

        assert_eq!(errors.invalid_fields().collect::<Vec<_>>(), vec!["email"]);
        for field in FIELDS.iter().filter(|f| **f != "email") {
            assert!(!errors.is_invalid(field));
        }
        assert_eq!(errors.message("email", None).as_deref(), Some("x"));
    }

    #[test]
    fn test_keyed_messages_are_translated() {
        let mut errors = FieldErrors::new(FIELDS);
        let response: ErrorResponse = serde_json::from_str(
            r#"{"validationErrors": {"login": "users.validation.login.Size", "unknownField": "boom"}}"#,
        )
        .unwrap();
        errors.apply_server_errors(&response, Some(&Russian as &dyn Translator));

        let error = errors.get("login").unwrap();
        assert_eq!(error.text, "Логин должен быть от 3 до 50 символов");
        assert_eq!(error.i18n_key.as_deref(), Some("users.validation.login.Size"));
        assert!(!errors.is_invalid("unknownField"));
    }

    #[test]
    fn test_message_only_response_marks_nothing() {
        let mut errors = FieldErrors::new(FIELDS);
        let response = ErrorResponse {
            message: Some("Conflict".into()),
            ..Default::default()
        };
        assert!(!errors.apply_server_errors(&response, None));
        assert_eq!(errors.invalid_fields().count(), 0);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut errors = FieldErrors::new(FIELDS);
        errors.clear_errors();
        errors.clear_errors();
        assert_eq!(errors, FieldErrors::new(FIELDS));
    }
}
