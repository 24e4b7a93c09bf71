use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Тело ответа сервера при ошибке сохранения
///
/// Field errors arrive under `fieldErrors` or, from older controllers, under
/// `validationErrors`. Messages are either plain text or translation keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub field_errors: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub validation_errors: Option<BTreeMap<String, String>>,
}

impl ErrorResponse {
    /// Structured per-field mapping, `fieldErrors` first.
    pub fn field_errors(&self) -> Option<&BTreeMap<String, String>> {
        self.field_errors
            .as_ref()
            .or(self.validation_errors.as_ref())
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.trim().is_empty())
    }
}
