//! ViewModel for the house editor: number, status, a city → street pair and
//! the chairman.

use contracts::domain::a002_house::aggregate::House;
use leptos::prelude::*;
use std::rc::Rc;

use super::model::{self, HOUSE_META, TRACKED_FIELDS};
use crate::shared::components::search_select::SignalSelect;
use crate::shared::form_payload::FormPayload;
use crate::shared::i18n::{I18nContext, Translator};
use crate::shared::record_form::lookup::{self, AsSelectOption};
use crate::shared::record_form::{
    CascadeLevel, DependentRefs, Level, PageServices, RecordForm, RecordMeta, SelectConfig,
    SelectWidget,
};
use crate::shared::validation::FieldErrors;

#[derive(Clone, Copy)]
pub struct HouseDetailsVm {
    pub id: RwSignal<String>,
    pub house_number: RwSignal<String>,
    pub status: RwSignal<String>,
    pub city: SignalSelect,
    pub street: SignalSelect,
    pub chairman: SignalSelect,

    pub statuses: RwSignal<Vec<String>>,
    pub record_name: RwSignal<Option<String>>,
    pub errors: RwSignal<FieldErrors>,
    pub saving: RwSignal<bool>,
}

impl HouseDetailsVm {
    pub fn new(search_debounce: std::time::Duration) -> Self {
        Self {
            id: RwSignal::new(String::new()),
            house_number: RwSignal::new(String::new()),
            status: RwSignal::new(String::new()),
            city: SignalSelect::new(search_debounce),
            street: SignalSelect::new(search_debounce),
            chairman: SignalSelect::new(search_debounce),
            statuses: RwSignal::new(Vec::new()),
            record_name: RwSignal::new(None),
            errors: RwSignal::new(FieldErrors::new(TRACKED_FIELDS)),
            saving: RwSignal::new(false),
        }
    }

    pub fn error_for(&self, field: &'static str, i18n: I18nContext) -> Signal<Option<String>> {
        let errors = self.errors;
        Signal::derive(move || {
            i18n.lang.track();
            errors.with(|e| e.message(field, Some(&i18n as &dyn Translator)))
        })
    }

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
}

impl RecordForm for HouseDetailsVm {
    type Record = House;

    fn meta(&self) -> &'static RecordMeta {
        &HOUSE_META
    }

    fn cascade_levels(&self, services: &PageServices) -> Vec<CascadeLevel> {
        let ctx = services.config.context_path.as_str();
        vec![
            CascadeLevel {
                level: Level::Region,
                widget: Rc::new(self.city),
                placeholder_key: "houses.placeholders.selectCity",
                lookup: Rc::new(lookup::cities(services.http.clone(), ctx)),
                error_key: "houses.errors.searchFailed",
            },
            CascadeLevel {
                level: Level::Subregion,
                widget: Rc::new(self.street),
                placeholder_key: "houses.placeholders.selectCityFirst",
                lookup: Rc::new(lookup::streets(services.http.clone(), ctx)),
                error_key: "houses.errors.loadStreets",
            },
        ]
    }

    fn configure_selects(&self, services: &PageServices) {
        let ctx = services.config.context_path.as_str();
        self.chairman.configure(SelectConfig {
            placeholder_key: "houses.placeholders.selectChairman",
            search: lookup::unscoped_search(
                Rc::new(lookup::chairmen(services.http.clone(), ctx)),
                services.notifier.clone(),
                "houses.errors.searchFailed",
            ),
        });
        self.chairman.set_enabled(true);
    }

    fn apply_scalars(&self, house: &House) {
        if let Some(number) = house.display_number() {
            self.house_number.set(number.to_string());
        }
        if let Some(status) = &house.status {
            self.status.set(status.clone());
        }
        if let Some(chairman) = &house.chairman {
            self.chairman.preset(chairman.to_option());
        }
    }

    fn record_id(&self, house: &House) -> Option<String> {
        house.id.clone()
    }

    fn apply_id(&self, id: &str) {
        self.id.set(id.to_string());
    }

    fn dependent_refs(&self, house: &House) -> DependentRefs {
        DependentRefs::from_address(None, house.street.as_ref(), None)
    }

    fn record_name(&self, house: &House) -> Option<String> {
        house.display_number().map(str::to_string)
    }

    fn set_record_name(&self, name: Option<String>) {
        self.record_name.set(name);
    }

    fn set_statuses(&self, statuses: Vec<String>) {
        self.statuses.set(statuses);
    }

    fn collect_payload(&self) -> FormPayload {
        let payload = FormPayload::new()
            .text("id", self.id.get_untracked())
            .text("houseNumber", self.house_number.get_untracked())
            .text("status", self.status.get_untracked())
            .text("streetId", self.street.value_id().unwrap_or_default());

        match self.chairman.value_id().filter(|id| !id.is_empty()) {
            Some(id) => payload.text("chairmanId", id),
            None => payload,
        }
    }

    fn form_name(&self) -> Option<String> {
        let number = self.house_number.get_untracked();
        (!number.trim().is_empty()).then_some(number)
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
    use crate::shared::api_utils::RequestBody;
    use crate::shared::record_form::testing::Harness;
    use crate::shared::record_form::{FormPage, SelectOption, SubmitOutcome};
    use std::time::Duration;

    fn vm() -> HouseDetailsVm {
        HouseDetailsVm::new(Duration::from_millis(250))
    }

    #[test]
    fn test_house_number_from_either_field() {
        let owner = Owner::new();
        owner.set();
        let vm = vm();

        let house: House =
            serde_json::from_str(r#"{"id": 5, "number": "12A", "status": "NEW"}"#).unwrap();
        vm.apply_scalars(&house);
        assert_eq!(vm.house_number.get_untracked(), "12A");
        assert_eq!(vm.status.get_untracked(), "NEW");
        assert_eq!(vm.record_name(&house).as_deref(), Some("12A"));
    }

    #[test]
    fn test_edit_page_selects_city_and_street() {
        let owner = Owner::new();
        owner.set();
        let h = Harness::new();
        h.http.respond(
            "/app/houses/getHouse/5",
            200,
            r#"{"id": 5, "houseNumber": "12A", "street": {"id": "s1", "name": "Lenina", "city": {"id": "c1", "name": "Kyiv"}}}"#,
        );
        let vm = vm();
        let page = FormPage::new(Rc::new(vm), &h.services, "/houses/edit/5");

        h.queue.block_on(page.start());

        assert_eq!(vm.city.value_id().as_deref(), Some("c1"));
        assert_eq!(vm.street.value_id().as_deref(), Some("s1"));
        assert!(vm.street.is_enabled());
        assert_eq!(vm.id.get_untracked(), "5");
        assert!(page.is_armed());
    }

    #[test]
    fn test_create_posts_json() {
        let owner = Owner::new();
        owner.set();
        let h = Harness::new();
        h.http.respond("/app/houses/create", 200, r#"{"id": 9, "houseNumber": "7"}"#);
        let vm = vm();
        let page = FormPage::new(Rc::new(vm), &h.services, "/houses/new");
        h.queue.block_on(page.start());

        vm.house_number.set("7".into());
        vm.status.set("NEW".into());
        assert_eq!(h.queue.block_on(page.submit()), SubmitOutcome::Saved);

        let request = h
            .http
            .requests()
            .into_iter()
            .find(|r| r.url == "/app/houses/create")
            .unwrap();
        let RequestBody::Json(body) = request.body else {
            panic!("expected a JSON body");
        };
        assert_eq!(body["houseNumber"], "7");
        assert!(body.get("streetId").is_none());
        assert!(body.get("id").is_none());
        assert_eq!(h.toasts.messages(), vec!["houses.success.created[houseNumber=7]"]);
    }

    #[test]
    fn test_street_without_city_is_kept_on_resave() {
        let owner = Owner::new();
        owner.set();
        let h = Harness::new();
        h.http.respond(
            "/app/houses/getHouse/5",
            200,
            r#"{"id": 5, "houseNumber": "12A", "street": {"id": "s1", "name": "Lenina"}}"#,
        );
        h.http.respond("/app/houses/5", 200, r#"{"id": 5, "houseNumber": "12A"}"#);
        let vm = vm();
        let page = FormPage::new(Rc::new(vm), &h.services, "/houses/edit/5");

        h.queue.block_on(page.start());

        assert_eq!(vm.city.value_id(), None);
        assert_eq!(vm.street.value_id().as_deref(), Some("s1"));
        assert!(vm.street.is_enabled());

        assert_eq!(h.queue.block_on(page.submit()), SubmitOutcome::Saved);
        let sent = h.http.requests().pop().unwrap();
        assert_eq!(sent.url, "/app/houses/5");
        let RequestBody::Multipart(payload) = sent.body else {
            panic!("expected a multipart body");
        };
        assert_eq!(payload.get_text("streetId"), Some("s1"));
    }

    #[test]
    fn test_chairman_populated_and_sent() {
        let owner = Owner::new();
        owner.set();
        let h = Harness::new();
        h.http.respond(
            "/app/houses/getHouse/5",
            200,
            r#"{"id": 5, "houseNumber": "12A", "chairman": {"id": 4, "firstName": "Ivan", "lastName": "Petrenko"}}"#,
        );
        let vm = vm();
        let page = FormPage::new(Rc::new(vm), &h.services, "/houses/edit/5");
        assert!(vm.chairman.is_enabled());
        assert_eq!(
            vm.chairman.placeholder_key.get_untracked(),
            "houses.placeholders.selectChairman"
        );

        h.queue.block_on(page.start());

        assert_eq!(vm.chairman.value_text().as_deref(), Some("Petrenko Ivan"));
        assert_eq!(vm.collect_payload().get_text("chairmanId"), Some("4"));
    }

    #[test]
    fn test_chairman_omitted_when_empty() {
        let owner = Owner::new();
        owner.set();
        let vm = vm();
        assert!(!vm.collect_payload().contains("chairmanId"));

        vm.chairman.pick(SelectOption::new("7", "Shevchenko"));
        assert_eq!(vm.collect_payload().get_text("chairmanId"), Some("7"));
        vm.chairman.pick_none();
        assert!(!vm.collect_payload().contains("chairmanId"));
    }
}
