use contracts::enums::house_status::HouseStatus;

use crate::shared::i18n::Translator;
use crate::shared::record_form::{Encoding, MessageKeys, RecordMeta};

/// Creation is a JSON post; updates go out as multipart like the user form.
pub const HOUSE_META: RecordMeta = RecordMeta {
    resource: "houses",
    load_path: "/houses/getHouse",
    list_path: "/houses",
    create_encoding: Encoding::Json,
    update_encoding: Encoding::Multipart,
    name_arg: "houseNumber",
    keys: MessageKeys {
        new_title: "houses.newHouse",
        edit_title: "houses.editHouse",
        editing_title: "houses.editingHouse",
        created: "houses.success.created",
        updated: "houses.success.updated",
        load_failed: "houses.errors.loadFailed",
        save_failed: "houses.errors.saveFailed",
        validation: "houses.errors.validation",
    },
};

pub const TRACKED_FIELDS: &[&str] = &["houseNumber", "status", "cityId", "streetId", "chairmanId"];

pub fn status_label(code: &str, t: &dyn Translator) -> String {
    let Some(status) = HouseStatus::from_code(code) else {
        return code.to_string();
    };
    let label = t.translate(status.i18n_key(), &[]);
    if label == status.i18n_key() {
        status.display_name().to_string()
    } else {
        label
    }
}
