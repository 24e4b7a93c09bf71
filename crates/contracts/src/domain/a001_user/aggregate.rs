use crate::domain::common::{record_id, CityRef, HouseRef, StreetRef};
use serde::{Deserialize, Serialize};

/// Пользователь (жилец), как его отдаёт `/users/getUser/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, deserialize_with = "record_id::optional")]
    pub id: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub middle_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub login: Option<String>,
    #[serde(default)]
    pub apartment_number: Option<String>,
    #[serde(default)]
    pub apartment_area: Option<f64>,
    #[serde(default)]
    pub account_number: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub city: Option<CityRef>,
    #[serde(default)]
    pub street: Option<StreetRef>,
    #[serde(default)]
    pub house: Option<HouseRef>,
}

impl User {
    /// Имя для заголовков и уведомлений: имя, иначе фамилия
    pub fn display_name(&self) -> Option<&str> {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .find(|n| !n.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_server_payload() {
        let json = r#"{
            "id": "65f0c1",
            "firstName": "Ivan",
            "lastName": "Petrenko",
            "apartmentArea": 54.5,
            "status": "ACTIVE",
            "city": {"id": "c1", "name": "Kyiv"},
            "street": {"id": "s1", "name": "Khreshchatyk"},
            "house": {"id": "h1", "houseNumber": "22"},
            "bills": []
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id.as_deref(), Some("65f0c1"));
        assert_eq!(user.apartment_area, Some(54.5));
        assert_eq!(user.house.as_ref().and_then(|h| h.display_number()), Some("22"));
        assert_eq!(user.display_name(), Some("Ivan"));
    }

    #[test]
    fn test_display_name_falls_back_to_last_name() {
        let user = User {
            first_name: Some(" ".into()),
            last_name: Some("Shevchenko".into()),
            ..Default::default()
        };
        assert_eq!(user.display_name(), Some("Shevchenko"));
    }
}
