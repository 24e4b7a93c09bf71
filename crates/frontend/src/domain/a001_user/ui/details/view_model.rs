//! ViewModel for the user editor
//!
//! Every input is its own RwSignal; the address selectors are `SignalSelect`
//! handles driven by the cascade. Implements `RecordForm` so the shared
//! loader and submission controller can read and write the form.

use contracts::domain::a001_user::aggregate::User;
use leptos::prelude::*;
use std::rc::Rc;

use super::model::{self, PhotoCheck, PHOTO_FIELD, TRACKED_FIELDS, USER_META};
use crate::shared::components::search_select::SignalSelect;
use crate::shared::config::FormConfig;
use crate::shared::form_payload::FormPayload;
use crate::shared::i18n::{I18nContext, Translator};
use crate::shared::notify::{NoticeKind, NotificationBridge};
use crate::shared::record_form::lookup;
use crate::shared::record_form::{
    CascadeLevel, DependentRefs, Level, PageServices, RecordForm, RecordMeta,
};
use crate::shared::validation::FieldErrors;

fn non_blank(v: String) -> Option<String> {
    if v.trim().is_empty() {
        None
    } else {
        Some(v)
    }
}

#[derive(Clone, Copy)]
pub struct UserDetailsVm {
    // === Form fields ===
    pub id: RwSignal<String>,
    pub first_name: RwSignal<String>,
    pub last_name: RwSignal<String>,
    pub middle_name: RwSignal<String>,
    pub phone: RwSignal<String>,
    pub email: RwSignal<String>,
    pub login: RwSignal<String>,
    pub apartment_number: RwSignal<String>,
    pub apartment_area: RwSignal<String>,
    pub account_number: RwSignal<String>,
    pub status: RwSignal<String>,
    pub password: RwSignal<String>,
    pub repeat_password: RwSignal<String>,

    // === Address cascade ===
    pub city: SignalSelect,
    pub street: SignalSelect,
    pub house: SignalSelect,

    // === Photo ===
    pub avatar_src: RwSignal<String>,
    photo_file: StoredValue<Option<web_sys::File>, LocalStorage>,

    // === Reference data ===
    pub statuses: RwSignal<Vec<String>>,

    // === UI state ===
    pub record_name: RwSignal<Option<String>>,
    pub errors: RwSignal<FieldErrors>,
    pub saving: RwSignal<bool>,
    config: StoredValue<FormConfig>,
}

impl UserDetailsVm {
    pub fn new(config: FormConfig) -> Self {
        let debounce = config.search_debounce;
        Self {
            id: RwSignal::new(String::new()),
            first_name: RwSignal::new(String::new()),
            last_name: RwSignal::new(String::new()),
            middle_name: RwSignal::new(String::new()),
            phone: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            login: RwSignal::new(String::new()),
            apartment_number: RwSignal::new(String::new()),
            apartment_area: RwSignal::new(String::new()),
            account_number: RwSignal::new(String::new()),
            status: RwSignal::new(String::new()),
            password: RwSignal::new(String::new()),
            repeat_password: RwSignal::new(String::new()),

            city: SignalSelect::new(debounce),
            street: SignalSelect::new(debounce),
            house: SignalSelect::new(debounce),

            avatar_src: RwSignal::new(config.default_avatar()),
            photo_file: StoredValue::new_local(None),

            statuses: RwSignal::new(Vec::new()),

            record_name: RwSignal::new(None),
            errors: RwSignal::new(FieldErrors::new(TRACKED_FIELDS)),
            saving: RwSignal::new(false),
            config: StoredValue::new(config),
        }
    }

    /// Error text for `field`, re-translated when the language changes.
    pub fn error_for(&self, field: &'static str, i18n: I18nContext) -> Signal<Option<String>> {
        let errors = self.errors;
        Signal::derive(move || {
            i18n.lang.track();
            errors.with(|e| e.message(field, Some(&i18n as &dyn Translator)))
        })
    }

    /// Status options as (code, label) pairs.
    pub fn status_options(&self, i18n: I18nContext) -> Signal<Vec<(String, String)>> {
        let statuses = self.statuses;
        Signal::derive(move || {
            i18n.lang.track();
            statuses
                .get()
                .into_iter()
                .map(|code| {
                    let label = model::status_label(&code, &i18n);
                    (code, label)
                })
                .collect()
        })
    }

    // === Photo ===

    /// Accepts a chosen file after the type and size checks. Returns `false`
    /// when the file was rejected and the input should be reset.
    pub fn choose_photo(&self, file: web_sys::File, notifier: &NotificationBridge) -> bool {
        let config = self.config.get_value();
        let check = model::check_photo(&file, &config);
        if let Some(key) = check.error_key() {
            log::warn!("Rejected photo {}: {:?}", file.name(), check);
            let max = model::size_label(config.max_file_size);
            notifier.show(
                key,
                NoticeKind::Error,
                true,
                &[("maxSize", max.as_str())],
            );
            return false;
        }
        debug_assert_eq!(check, PhotoCheck::Accepted);

        match web_sys::Url::create_object_url_with_blob(&file) {
            Ok(url) => self.set_avatar(url),
            Err(e) => log::error!("Failed to preview photo: {:?}", e),
        }
        self.photo_file.set_value(Some(file));
        true
    }

    /// Back to the default avatar; the stored photo is left to the server.
    pub fn reset_photo(&self) {
        self.photo_file.set_value(None);
        self.set_avatar(self.config.with_value(FormConfig::default_avatar));
    }

    fn set_avatar(&self, src: String) {
        let previous = self.avatar_src.get_untracked();
        if previous.starts_with("blob:") {
            let _ = web_sys::Url::revoke_object_url(&previous);
        }
        self.avatar_src.set(src);
    }
}

impl RecordForm for UserDetailsVm {
    type Record = User;

    fn meta(&self) -> &'static RecordMeta {
        &USER_META
    }

    fn cascade_levels(&self, services: &PageServices) -> Vec<CascadeLevel> {
        let ctx = services.config.context_path.as_str();
        let http = &services.http;
        vec![
            CascadeLevel {
                level: Level::Region,
                widget: Rc::new(self.city),
                placeholder_key: "users.placeholders.selectCity",
                lookup: Rc::new(lookup::cities(http.clone(), ctx)),
                error_key: "users.errors.searchFailed",
            },
            CascadeLevel {
                level: Level::Subregion,
                widget: Rc::new(self.street),
                placeholder_key: "users.placeholders.selectCityFirst",
                lookup: Rc::new(lookup::streets(http.clone(), ctx)),
                error_key: "users.errors.loadStreets",
            },
            CascadeLevel {
                level: Level::Unit,
                widget: Rc::new(self.house),
                placeholder_key: "users.placeholders.selectStreetFirst",
                lookup: Rc::new(lookup::houses(http.clone(), ctx)),
                error_key: "users.errors.loadHouses",
            },
        ]
    }

    fn apply_scalars(&self, user: &User) {
        let fields = [
            (self.first_name, &user.first_name),
            (self.last_name, &user.last_name),
            (self.middle_name, &user.middle_name),
            (self.phone, &user.phone),
            (self.email, &user.email),
            (self.login, &user.login),
            (self.apartment_number, &user.apartment_number),
            (self.account_number, &user.account_number),
            (self.status, &user.status),
        ];
        for (signal, value) in fields {
            if let Some(value) = value {
                signal.set(value.clone());
            }
        }
        if let Some(area) = user.apartment_area {
            self.apartment_area.set(model::format_area(area));
        }
    }

    fn record_id(&self, user: &User) -> Option<String> {
        user.id.clone()
    }

    fn apply_id(&self, id: &str) {
        self.id.set(id.to_string());
    }

    fn dependent_refs(&self, user: &User) -> DependentRefs {
        DependentRefs::from_address(user.city.as_ref(), user.street.as_ref(), user.house.as_ref())
    }

    fn apply_attachment(&self, user: &User) {
        let src = self
            .config
            .with_value(|config| config.avatar_src(user.photo.as_deref()));
        self.set_avatar(src);
    }

    fn record_name(&self, user: &User) -> Option<String> {
        user.display_name().map(str::to_string)
    }

    fn set_record_name(&self, name: Option<String>) {
        self.record_name.set(name);
    }

    fn set_statuses(&self, statuses: Vec<String>) {
        self.statuses.set(statuses);
    }

    fn collect_payload(&self) -> FormPayload {
        let text = |signal: RwSignal<String>| signal.get_untracked();
        let payload = FormPayload::new()
            .text("id", text(self.id))
            .text("firstName", text(self.first_name))
            .text("lastName", text(self.last_name))
            .text("middleName", text(self.middle_name))
            .text("phone", text(self.phone))
            .text("email", text(self.email))
            .text("login", text(self.login))
            .text("cityId", self.city.value_id().unwrap_or_default())
            .text("addressId", self.street.value_id().unwrap_or_default())
            .text("houseId", self.house.value_id().unwrap_or_default())
            .text("houseNumber", self.house.value_text().unwrap_or_default())
            .text("apartmentNumber", text(self.apartment_number))
            .text("apartmentArea", text(self.apartment_area))
            .text("accountNumber", text(self.account_number))
            .text("status", text(self.status))
            .text("password", text(self.password))
            .text("repeatPassword", text(self.repeat_password));

        match self.photo_file.get_value() {
            Some(file) => payload.file(PHOTO_FIELD, file),
            None => payload,
        }
    }

    fn form_name(&self) -> Option<String> {
        non_blank(self.first_name.get_untracked())
            .or_else(|| non_blank(self.last_name.get_untracked()))
    }

    fn update_errors(&self, update: impl FnOnce(&mut FieldErrors)) {
        self.errors.update(update);
    }

    fn set_busy(&self, busy: bool) {
        self.saving.set(busy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vm() -> UserDetailsVm {
        UserDetailsVm::new(FormConfig {
            context_path: "/app".into(),
            ..FormConfig::default()
        })
    }

    #[test]
    fn test_scalars_only_overwrite_present_values() {
        let owner = Owner::new();
        owner.set();
        let vm = vm();
        vm.phone.set("+380000000".into());

        let user: User = serde_json::from_str(
            r#"{"id": 7, "firstName": "Ivan", "apartmentArea": 54.5, "status": "ACTIVE"}"#,
        )
        .unwrap();
        vm.apply_scalars(&user);

        assert_eq!(vm.first_name.get_untracked(), "Ivan");
        assert_eq!(vm.apartment_area.get_untracked(), "54.5");
        assert_eq!(vm.status.get_untracked(), "ACTIVE");
        assert_eq!(vm.phone.get_untracked(), "+380000000");
    }

    #[test]
    fn test_avatar_from_record() {
        let owner = Owner::new();
        owner.set();
        let vm = vm();
        assert_eq!(vm.avatar_src.get_untracked(), "/app/assets/img/avatars/1.png");

        let user: User = serde_json::from_str(r#"{"photo": "uploads/u7.png"}"#).unwrap();
        vm.apply_attachment(&user);
        assert_eq!(vm.avatar_src.get_untracked(), "/app/uploads/u7.png");

        let user: User = serde_json::from_str(r#"{"photo": "default_photo.jpg"}"#).unwrap();
        vm.apply_attachment(&user);
        assert_eq!(vm.avatar_src.get_untracked(), "/app/assets/img/avatars/1.png");
    }

    #[test]
    fn test_payload_uses_server_names() {
        let owner = Owner::new();
        owner.set();
        let vm = vm();
        vm.first_name.set("Ivan".into());
        vm.repeat_password.set("pw".into());

        let payload = vm.collect_payload();
        let keys: Vec<_> = payload.keys().collect();

        assert_eq!(keys.first(), Some(&"id"));
        assert!(keys.contains(&"addressId"));
        assert!(keys.contains(&"houseNumber"));
        assert!(!keys.contains(&PHOTO_FIELD));
        assert_eq!(payload.get_text("repeatPassword"), Some("pw"));
        assert_eq!(vm.form_name().as_deref(), Some("Ivan"));
    }

    #[test]
    fn test_form_name_falls_back_to_last_name() {
        let owner = Owner::new();
        owner.set();
        let vm = vm();
        vm.first_name.set("  ".into());
        vm.last_name.set("Petrenko".into());
        assert_eq!(vm.form_name().as_deref(), Some("Petrenko"));
    }
}
