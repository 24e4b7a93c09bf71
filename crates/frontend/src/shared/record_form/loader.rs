//! Fetches the edited record and writes it into the form.

use std::rc::Rc;

use super::cascade::CascadeController;
use super::form::RecordForm;
use crate::shared::api_utils::{api_url, get_json, HttpClient};
use crate::shared::notify::NotificationBridge;

pub struct RecordLoader<F: RecordForm> {
    form: Rc<F>,
    cascade: Rc<CascadeController>,
    http: Rc<dyn HttpClient>,
    notifier: NotificationBridge,
    context_path: String,
}

impl<F: RecordForm> RecordLoader<F> {
    pub fn new(
        form: Rc<F>,
        cascade: Rc<CascadeController>,
        http: Rc<dyn HttpClient>,
        notifier: NotificationBridge,
        context_path: &str,
    ) -> Self {
        Self {
            form,
            cascade,
            http,
            notifier,
            context_path: context_path.to_string(),
        }
    }

    /// `None` after any failure; the user has been notified by then.
    pub async fn load_record(&self, id: &str) -> Option<F::Record> {
        let meta = self.form.meta();
        let url = api_url(&self.context_path, &meta.record_path(id));
        match get_json::<F::Record>(self.http.as_ref(), url).await {
            Ok(record) => Some(record),
            Err(e) => {
                log::error!("Failed to load {} {}: {}", meta.resource, id, e);
                self.notifier.error_key(meta.keys.load_failed);
                None
            }
        }
    }

    /// Fills the status select. Failures are only logged.
    pub async fn load_statuses(&self) {
        let meta = self.form.meta();
        let url = api_url(&self.context_path, &meta.statuses_path());
        match get_json::<Vec<String>>(self.http.as_ref(), url).await {
            Ok(statuses) => self.form.set_statuses(statuses),
            Err(e) => log::error!("Failed to load {} statuses: {}", meta.resource, e),
        }
    }

    /// Scalars, then the id, then the selectors root first, then the
    /// attachment. Safe to run again with the same record.
    pub async fn populate_form(&self, record: &F::Record) {
        let _quiet = self.cascade.begin_population();

        self.form.apply_scalars(record);
        if let Some(id) = self.form.record_id(record) {
            self.form.apply_id(&id);
        }

        let refs = self.form.dependent_refs(record);
        let levels: Vec<_> = self.cascade.levels().collect();
        for level in levels {
            let Some(option) = refs.get(level).cloned() else {
                continue;
            };
            if let Some(parent) = level.parent() {
                if self.cascade.value(parent).is_none() {
                    // stored value is kept even without its ancestor
                    log::warn!(
                        "Populating {} {} with no {} selected",
                        level.as_str(),
                        option.id,
                        parent.as_str()
                    );
                }
                self.cascade.enable(level);
            }
            self.cascade.set_value(level, option).await;
        }

        self.form.apply_attachment(record);
        self.form.set_record_name(self.form.record_name(record));
    }
}
