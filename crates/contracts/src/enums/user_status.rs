use serde::{Deserialize, Serialize};

/// Статусы пользователя
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    Active,
    Inactive,
    Blocked,
}

impl UserStatus {
    /// Код статуса, как его отдаёт `/users/getStatuses`
    pub fn code(&self) -> &'static str {
        match self {
            UserStatus::Active => "ACTIVE",
            UserStatus::Inactive => "INACTIVE",
            UserStatus::Blocked => "BLOCKED",
        }
    }

    /// Ключ перевода для подписи в списке
    pub fn i18n_key(&self) -> &'static str {
        match self {
            UserStatus::Active => "users.statusOptions.active",
            UserStatus::Inactive => "users.statusOptions.inactive",
            UserStatus::Blocked => "users.statusOptions.blocked",
        }
    }

    /// Подпись, если перевод недоступен
    pub fn display_name(&self) -> &'static str {
        match self {
            UserStatus::Active => "Активный",
            UserStatus::Inactive => "Неактивный",
            UserStatus::Blocked => "Заблокирован",
        }
    }

    pub fn all() -> Vec<UserStatus> {
        vec![UserStatus::Active, UserStatus::Inactive, UserStatus::Blocked]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ACTIVE" => Some(UserStatus::Active),
            "INACTIVE" => Some(UserStatus::Inactive),
            "BLOCKED" => Some(UserStatus::Blocked),
            _ => None,
        }
    }
}
