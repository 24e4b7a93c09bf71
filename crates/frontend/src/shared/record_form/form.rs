//! What a record page exposes to the shared controllers.

use contracts::domain::common::{CityRef, HouseRef, StreetRef};
use serde::de::DeserializeOwned;

use super::cascade::{CascadeLevel, Level};
use super::lookup::AsSelectOption;
use super::page::PageServices;
use super::page_mode::PageMode;
use super::select::SelectOption;
use crate::shared::form_payload::FormPayload;
use crate::shared::i18n::Translator;
use crate::shared::validation::FieldErrors;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Multipart,
    /// Flat object of the non-empty text fields
    Json,
}

/// Translation keys a record page uses for titles and notifications
#[derive(Debug, Clone, Copy)]
pub struct MessageKeys {
    pub new_title: &'static str,
    pub edit_title: &'static str,
    /// Takes the record name as `name_arg`
    pub editing_title: &'static str,
    pub created: &'static str,
    pub updated: &'static str,
    pub load_failed: &'static str,
    pub save_failed: &'static str,
    pub validation: &'static str,
}

/// Endpoints and message keys of one record type
#[derive(Debug, Clone, Copy)]
pub struct RecordMeta {
    /// `users`, `houses`
    pub resource: &'static str,
    /// Prefix of `GET {load_path}/{id}`
    pub load_path: &'static str,
    /// Where to go after a successful save
    pub list_path: &'static str,
    pub create_encoding: Encoding,
    pub update_encoding: Encoding,
    /// Interpolation argument carrying the record name
    pub name_arg: &'static str,
    pub keys: MessageKeys,
}

impl RecordMeta {
    pub fn record_path(&self, id: &str) -> String {
        format!("{}/{}", self.load_path, urlencoding::encode(id))
    }

    pub fn statuses_path(&self) -> String {
        format!("/{}/getStatuses", self.resource)
    }

    pub fn create_path(&self) -> String {
        format!("/{}/create", self.resource)
    }

    pub fn update_path(&self, id: &str) -> String {
        format!("/{}/{}", self.resource, urlencoding::encode(id))
    }

    pub fn encoding(&self, mode: &PageMode) -> Encoding {
        match mode {
            PageMode::Create => self.create_encoding,
            PageMode::Edit { .. } => self.update_encoding,
        }
    }

    /// Heading for the page in its current state.
    pub fn page_title(&self, mode: &PageMode, name: Option<&str>, t: &dyn Translator) -> String {
        match (mode, name) {
            (PageMode::Create, _) => t.translate(self.keys.new_title, &[]),
            (PageMode::Edit { .. }, Some(name)) => {
                t.translate(self.keys.editing_title, &[(self.name_arg, name)])
            }
            (PageMode::Edit { .. }, None) => t.translate(self.keys.edit_title, &[]),
        }
    }
}

/// Values for the dependent selectors, root first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DependentRefs {
    pub region: Option<SelectOption>,
    pub subregion: Option<SelectOption>,
    pub unit: Option<SelectOption>,
}

impl DependentRefs {
    pub fn get(&self, level: Level) -> Option<&SelectOption> {
        match level {
            Level::Region => self.region.as_ref(),
            Level::Subregion => self.subregion.as_ref(),
            Level::Unit => self.unit.as_ref(),
        }
    }

    /// City → street → house chain. A missing ancestor is taken from the
    /// nested reference of its descendant (`house.street`, `street.city`).
    pub fn from_address(
        city: Option<&CityRef>,
        street: Option<&StreetRef>,
        house: Option<&HouseRef>,
    ) -> Self {
        let street = street.or_else(|| house.and_then(|h| h.street.as_ref()));
        let city = city.or_else(|| street.and_then(|s| s.city.as_ref()));
        Self {
            region: city.map(AsSelectOption::to_option),
            subregion: street.map(AsSelectOption::to_option),
            unit: house.map(AsSelectOption::to_option),
        }
    }
}

/// A record editor page as seen by the loader and the submission controller.
pub trait RecordForm: 'static {
    type Record: DeserializeOwned + 'static;

    fn meta(&self) -> &'static RecordMeta;

    /// Selectors of the address chain, root first.
    fn cascade_levels(&self, services: &PageServices) -> Vec<CascadeLevel>;
    /// Search selects outside the chain; configured once at start-up.
    fn configure_selects(&self, _services: &PageServices) {}

    /// Writes plain inputs; absent values leave the input untouched.
    fn apply_scalars(&self, record: &Self::Record);
    fn record_id(&self, record: &Self::Record) -> Option<String>;
    fn apply_id(&self, id: &str);
    fn dependent_refs(&self, record: &Self::Record) -> DependentRefs;
    /// Photo and other non-input state.
    fn apply_attachment(&self, _record: &Self::Record) {}

    fn record_name(&self, record: &Self::Record) -> Option<String>;
    fn set_record_name(&self, name: Option<String>);
    fn set_statuses(&self, statuses: Vec<String>);

    /// Current form values under their server names.
    fn collect_payload(&self) -> FormPayload;
    /// Name taken from the inputs, used when the server does not echo one.
    fn form_name(&self) -> Option<String>;

    fn update_errors(&self, update: impl FnOnce(&mut FieldErrors));
    fn set_busy(&self, busy: bool);
}
