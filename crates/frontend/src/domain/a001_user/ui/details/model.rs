use contracts::enums::user_status::UserStatus;

use crate::shared::config::FormConfig;
use crate::shared::i18n::Translator;
use crate::shared::record_form::{Encoding, MessageKeys, RecordMeta};
use crate::shared::validation::{validate_file_size, validate_file_type, FileInfo};

pub const USER_META: RecordMeta = RecordMeta {
    resource: "users",
    load_path: "/users/getUser",
    list_path: "/users",
    create_encoding: Encoding::Multipart,
    update_encoding: Encoding::Multipart,
    name_arg: "userName",
    keys: MessageKeys {
        new_title: "users.newUser",
        edit_title: "users.editUser",
        editing_title: "users.editingUser",
        created: "users.success.created",
        updated: "users.success.updated",
        load_failed: "users.errors.loadFailed",
        save_failed: "users.errors.saveFailed",
        validation: "users.errors.validation",
    },
};

/// Inputs that can carry a server error
pub const TRACKED_FIELDS: &[&str] = &[
    "firstName",
    "lastName",
    "middleName",
    "phone",
    "email",
    "login",
    "cityId",
    "addressId",
    "houseId",
    "houseNumber",
    "apartmentNumber",
    "apartmentArea",
    "accountNumber",
    "status",
    "password",
    "confirmPassword",
    "photoFile",
];

pub const PHOTO_FIELD: &str = "photoFile";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoCheck {
    Accepted,
    WrongType,
    TooLarge,
}

impl PhotoCheck {
    pub fn error_key(&self) -> Option<&'static str> {
        match self {
            PhotoCheck::Accepted => None,
            PhotoCheck::WrongType => Some("users.validation.invalidFileType"),
            PhotoCheck::TooLarge => Some("users.validation.fileTooLarge"),
        }
    }
}

pub fn check_photo(file: &impl FileInfo, config: &FormConfig) -> PhotoCheck {
    if !validate_file_type(file, &config.allowed_file_types) {
        return PhotoCheck::WrongType;
    }
    if !validate_file_size(file, config.max_file_size) {
        return PhotoCheck::TooLarge;
    }
    PhotoCheck::Accepted
}

/// `819200` → `800KB`
pub fn size_label(bytes: u64) -> String {
    format!("{}KB", bytes / 1024)
}

/// Label for a status code; codes outside the known set are shown as is.
pub fn status_label(code: &str, t: &dyn Translator) -> String {
    let Some(status) = UserStatus::from_code(code) else {
        return code.to_string();
    };
    let label = t.translate(status.i18n_key(), &[]);
    if label == status.i18n_key() {
        status.display_name().to_string()
    } else {
        label
    }
}

/// `54.0` → `54`, `54.5` → `54.5`
pub fn format_area(area: f64) -> String {
    area.to_string()
}
