use super::record_id;
use serde::{Deserialize, Serialize};

/// Город (корень каскада адреса)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityRef {
    #[serde(deserialize_with = "record_id::required")]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// Улица; `city` присутствует, когда сервер разворачивает родителя
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreetRef {
    #[serde(deserialize_with = "record_id::required")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: Option<CityRef>,
}

/// Дом. Номер приходит либо в `number`, либо в `houseNumber`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseRef {
    #[serde(deserialize_with = "record_id::required")]
    pub id: String,
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub house_number: Option<String>,
    #[serde(default)]
    pub street: Option<StreetRef>,
}

impl HouseRef {
    /// First non-blank of `number` and `houseNumber`.
    pub fn display_number(&self) -> Option<&str> {
        [self.number.as_deref(), self.house_number.as_deref()]
            .into_iter()
            .flatten()
            .find(|n| !n.trim().is_empty())
    }
}

/// Председатель дома
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChairmanRef {
    #[serde(deserialize_with = "record_id::required")]
    pub id: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl ChairmanRef {
    /// `fullName`, else "lastName firstName".
    pub fn display_name(&self) -> String {
        if let Some(full) = self.full_name.as_deref().filter(|n| !n.trim().is_empty()) {
            return full.to_string();
        }
        let parts: Vec<&str> = [self.last_name.as_deref(), self.first_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|n| !n.trim().is_empty())
            .collect();
        parts.join(" ")
    }
}
