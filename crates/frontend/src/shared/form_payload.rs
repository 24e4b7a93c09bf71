//! Outgoing form data.
//!
//! Entries keep insertion order, the way browser `FormData` does. The payload
//! encodes either as multipart form data or as a flat JSON object.

use serde_json::{Map, Value};
use wasm_bindgen::JsValue;

use crate::shared::api_utils::ApiError;

#[derive(Debug, Clone)]
pub enum FormValue {
    Text(String),
    File(web_sys::File),
}

#[derive(Debug, Clone, Default)]
pub struct FormPayload {
    entries: Vec<(String, FormValue)>,
}

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.entries
            .push((name.to_string(), FormValue::Text(value.into())));
        self
    }

    pub fn file(mut self, name: &str, file: web_sys::File) -> Self {
        self.entries.push((name.to_string(), FormValue::File(file)));
        self
    }

    pub fn get_text(&self, name: &str) -> Option<&str> {
        self.entries.iter().find_map(|(key, value)| match value {
            FormValue::Text(text) if key == name => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(key, _)| key == name)
    }

    /// Removes every entry named `name`.
    pub fn remove(&mut self, name: &str) {
        self.entries.retain(|(key, _)| key != name);
    }

    /// Moves the value of `from` to the end of the payload under `to`.
    pub fn rename(&mut self, from: &str, to: &str) {
        let mut moved = Vec::new();
        self.entries.retain(|(key, value)| {
            if key == from {
                moved.push(value.clone());
                false
            } else {
                true
            }
        });
        for value in moved {
            self.entries.push((to.to_string(), value));
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn entries(&self) -> &[(String, FormValue)] {
        &self.entries
    }

    /// Flat JSON object of text entries whose value is present and non-empty.
    /// Files are never part of a JSON body.
    pub fn to_json(&self) -> Value {
        let mut object = Map::new();
        for (key, value) in &self.entries {
            if let FormValue::Text(text) = value {
                if !text.is_empty() {
                    object.insert(key.clone(), Value::String(text.clone()));
                }
            }
        }
        Value::Object(object)
    }

    /// Builds a browser `FormData` for multipart upload.
    pub fn to_form_data(&self) -> Result<web_sys::FormData, ApiError> {
        let data = web_sys::FormData::new().map_err(encode_error)?;
        for (key, value) in &self.entries {
            let appended = match value {
                FormValue::Text(text) => data.append_with_str(key, text),
                FormValue::File(file) => data.append_with_blob(key, file),
            };
            appended.map_err(encode_error)?;
        }
        Ok(data)
    }
}

fn encode_error(e: JsValue) -> ApiError {
    ApiError::Encode(e.as_string().unwrap_or_else(|| format!("{e:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rename_moves_value_to_new_key() {
        let mut payload = FormPayload::new()
            .text("password", "secret")
            .text("repeatPassword", "secret")
            .text("login", "ivan");
        payload.rename("repeatPassword", "confirmPassword");

        assert!(!payload.contains("repeatPassword"));
        assert_eq!(payload.get_text("confirmPassword"), Some("secret"));
        assert_eq!(
            payload.keys().collect::<Vec<_>>(),
            vec!["password", "login", "confirmPassword"]
        );
    }

    #[test]
    fn test_json_skips_empty_values() {
        let payload = FormPayload::new()
            .text("id", "")
            .text("houseNumber", "12")
            .text("streetId", "s1")
            .text("status", "");
        let json = payload.to_json();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(object["houseNumber"], "12");
        assert!(!object.contains_key("id"));
    }
}
