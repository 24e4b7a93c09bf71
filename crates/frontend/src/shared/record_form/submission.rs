//! Sends the form to the server and routes the reply.

use contracts::shared::error_response::ErrorResponse;
use futures::FutureExt;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use super::form::{Encoding, RecordForm};
use super::page_mode::PageMode;
use crate::shared::api_utils::{
    api_url, ApiRequest, ApiResponse, HttpClient, HttpMethod, RequestBody,
};
use crate::shared::notify::{NoticeKind, NotificationBridge};
use crate::shared::platform::{Delay, Navigator, Spawner};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The page has not finished initializing
    NotArmed,
    /// A previous submission is still in flight
    Busy,
    Saved,
    /// The server refused the data (4xx/5xx)
    Rejected,
    /// The request never got a response
    Failed,
}

pub struct SubmissionController<F: RecordForm> {
    form: Rc<F>,
    mode: PageMode,
    http: Rc<dyn HttpClient>,
    notifier: NotificationBridge,
    navigator: Rc<dyn Navigator>,
    delay: Rc<dyn Delay>,
    spawner: Spawner,
    context_path: String,
    redirect_delay: Duration,
    armed: Cell<bool>,
    in_flight: Cell<bool>,
}

/// Busy state for the duration of one request
struct InFlight<'a, F: RecordForm> {
    form: &'a F,
    flag: &'a Cell<bool>,
}

impl<'a, F: RecordForm> InFlight<'a, F> {
    fn start(form: &'a F, flag: &'a Cell<bool>) -> Self {
        flag.set(true);
        form.set_busy(true);
        Self { form, flag }
    }
}

impl<F: RecordForm> Drop for InFlight<'_, F> {
    fn drop(&mut self) {
        self.flag.set(false);
        self.form.set_busy(false);
    }
}

impl<F: RecordForm> SubmissionController<F> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        form: Rc<F>,
        mode: PageMode,
        http: Rc<dyn HttpClient>,
        notifier: NotificationBridge,
        navigator: Rc<dyn Navigator>,
        delay: Rc<dyn Delay>,
        spawner: Spawner,
        context_path: &str,
        redirect_delay: Duration,
    ) -> Self {
        Self {
            form,
            mode,
            http,
            notifier,
            navigator,
            delay,
            spawner,
            context_path: context_path.to_string(),
            redirect_delay,
            armed: Cell::new(false),
            in_flight: Cell::new(false),
        }
    }

    pub fn arm(&self) {
        self.armed.set(true);
    }

    pub fn is_armed(&self) -> bool {
        self.armed.get()
    }

    pub async fn submit(&self) -> SubmitOutcome {
        if !self.armed.get() {
            log::warn!("Submit ignored: page is still initializing");
            return SubmitOutcome::NotArmed;
        }
        if self.in_flight.get() {
            return SubmitOutcome::Busy;
        }

        self.form.update_errors(|errors| errors.clear_errors());
        let _busy = InFlight::start(self.form.as_ref(), &self.in_flight);

        let request = self.build_request();
        log::debug!("Submitting {} {}", request.method.as_str(), request.url);

        match self.http.send(request).await {
            Ok(response) if response.ok() => {
                self.on_saved(&response);
                SubmitOutcome::Saved
            }
            Ok(response) => {
                self.on_rejected(&response);
                SubmitOutcome::Rejected
            }
            Err(e) => {
                log::error!("Failed to save {}: {}", self.form.meta().resource, e);
                self.notifier.error_key(self.form.meta().keys.save_failed);
                SubmitOutcome::Failed
            }
        }
    }

    /// Method, URL and body for the current form state.
    pub fn build_request(&self) -> ApiRequest {
        let meta = self.form.meta();
        let mut payload = self.form.collect_payload();

        if payload.get_text("id").is_some_and(|id| id.trim().is_empty()) {
            payload.remove("id");
        }
        if payload.contains("repeatPassword") {
            payload.rename("repeatPassword", "confirmPassword");
        }

        let (method, path) = match &self.mode {
            PageMode::Create => (HttpMethod::Post, meta.create_path()),
            PageMode::Edit { id } => (HttpMethod::Put, meta.update_path(id)),
        };
        let body = match meta.encoding(&self.mode) {
            Encoding::Multipart => RequestBody::Multipart(payload),
            Encoding::Json => RequestBody::Json(payload.to_json()),
        };

        ApiRequest {
            method,
            url: api_url(&self.context_path, &path),
            body,
        }
    }

    fn on_saved(&self, response: &ApiResponse) {
        let meta = self.form.meta();
        let echoed = response
            .json::<F::Record>()
            .ok()
            .and_then(|record| self.form.record_name(&record));
        let name = echoed.or_else(|| self.form.form_name()).unwrap_or_default();

        let key = if self.mode.is_edit() {
            meta.keys.updated
        } else {
            meta.keys.created
        };
        self.notifier
            .show(key, NoticeKind::Success, true, &[(meta.name_arg, name.as_str())]);

        let navigator = self.navigator.clone();
        let sleep = self.delay.sleep(self.redirect_delay);
        let target = api_url(&self.context_path, meta.list_path);
        (self.spawner)(
            async move {
                sleep.await;
                navigator.navigate(&target);
            }
            .boxed_local(),
        );
    }

    fn on_rejected(&self, response: &ApiResponse) {
        let meta = self.form.meta();
        log::warn!(
            "Server rejected {} with status {}",
            meta.resource,
            response.status
        );

        let body: ErrorResponse = response.json().unwrap_or_default();
        let translator = self.notifier.translator().cloned();
        self.form.update_errors(|errors| {
            errors.apply_server_errors(&body, translator.as_deref());
        });

        match body.message() {
            // plain text has no catalog entry and is shown as is
            Some(message) => self.notifier.show(message, NoticeKind::Error, true, &[]),
            None => self.notifier.error_key(meta.keys.validation),
        }
    }
}
