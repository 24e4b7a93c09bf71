use serde::{Deserialize, Serialize};

/// Статусы дома
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HouseStatus {
    New,
    Active,
    Deactivated,
    Blocked,
}

impl HouseStatus {
    pub fn code(&self) -> &'static str {
        match self {
            HouseStatus::New => "NEW",
            HouseStatus::Active => "ACTIVE",
            HouseStatus::Deactivated => "DEACTIVATED",
            HouseStatus::Blocked => "BLOCKED",
        }
    }

    pub fn i18n_key(&self) -> &'static str {
        match self {
            HouseStatus::New => "houses.statusOptions.new",
            HouseStatus::Active => "houses.statusOptions.active",
            HouseStatus::Deactivated => "houses.statusOptions.deactivated",
            HouseStatus::Blocked => "houses.statusOptions.blocked",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            HouseStatus::New => "Новый",
            HouseStatus::Active => "Активный",
            HouseStatus::Deactivated => "Деактивирован",
            HouseStatus::Blocked => "Заблокирован",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "NEW" => Some(HouseStatus::New),
            "ACTIVE" => Some(HouseStatus::Active),
            "DEACTIVATED" => Some(HouseStatus::Deactivated),
            "BLOCKED" => Some(HouseStatus::Blocked),
            _ => None,
        }
    }
}
