use crate::domain::common::{record_id, ChairmanRef, StreetRef};
use serde::{Deserialize, Serialize};

/// Дом, как его отдаёт `/houses/getHouse/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct House {
    #[serde(default, deserialize_with = "record_id::optional")]
    pub id: Option<String>,
    #[serde(default)]
    pub house_number: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub street: Option<StreetRef>,
    #[serde(default)]
    pub chairman: Option<ChairmanRef>,
}

impl House {
    pub fn display_number(&self) -> Option<&str> {
        [self.house_number.as_deref(), self.number.as_deref()]
            .into_iter()
            .flatten()
            .find(|n| !n.trim().is_empty())
    }
}
