//! Page start-up: mode, selectors, record, population, then submission.

use futures::future;
use std::rc::Rc;

use super::cascade::CascadeController;
use super::form::RecordForm;
use super::loader::RecordLoader;
use super::page_mode::{determine_mode, PageMode};
use super::submission::{SubmissionController, SubmitOutcome};
use crate::shared::api_utils::{GlooHttpClient, HttpClient};
use crate::shared::config::FormConfig;
use crate::shared::i18n::Translator;
use crate::shared::notify::{NotificationBridge, ToastSink};
use crate::shared::platform::{browser_spawner, BrowserDelay, BrowserNavigator, Delay, Navigator, Spawner};

/// Capabilities shared by the controllers of one page
#[derive(Clone)]
pub struct PageServices {
    pub http: Rc<dyn HttpClient>,
    pub notifier: NotificationBridge,
    pub delay: Rc<dyn Delay>,
    pub navigator: Rc<dyn Navigator>,
    pub spawner: Spawner,
    pub config: Rc<FormConfig>,
}

impl PageServices {
    pub fn browser(
        toasts: Option<Rc<dyn ToastSink>>,
        translator: Option<Rc<dyn Translator>>,
    ) -> Self {
        Self {
            http: Rc::new(GlooHttpClient),
            notifier: NotificationBridge::new(toasts, translator),
            delay: Rc::new(BrowserDelay),
            navigator: Rc::new(BrowserNavigator),
            spawner: browser_spawner(),
            config: Rc::new(FormConfig::from_window()),
        }
    }
}

pub struct FormPage<F: RecordForm> {
    mode: PageMode,
    form: Rc<F>,
    cascade: Rc<CascadeController>,
    loader: RecordLoader<F>,
    submission: SubmissionController<F>,
}

impl<F: RecordForm> FormPage<F> {
    /// Wires the controllers for the page at `path` and configures the
    /// selects outside the chain. Nothing is fetched until [`FormPage::start`].
    pub fn new(form: Rc<F>, services: &PageServices, path: &str) -> Rc<Self> {
        let mode = determine_mode(path);
        let config = &services.config;
        form.configure_selects(services);

        let cascade = CascadeController::new(
            form.cascade_levels(services),
            services.notifier.clone(),
            services.delay.clone(),
            config.select_fallback,
            services.spawner.clone(),
        );
        let loader = RecordLoader::new(
            form.clone(),
            cascade.clone(),
            services.http.clone(),
            services.notifier.clone(),
            &config.context_path,
        );
        let submission = SubmissionController::new(
            form.clone(),
            mode.clone(),
            services.http.clone(),
            services.notifier.clone(),
            services.navigator.clone(),
            services.delay.clone(),
            services.spawner.clone(),
            &config.context_path,
            config.redirect_delay,
        );

        Rc::new(Self {
            mode,
            form,
            cascade,
            loader,
            submission,
        })
    }

    pub fn mode(&self) -> &PageMode {
        &self.mode
    }

    pub fn cascade(&self) -> &Rc<CascadeController> {
        &self.cascade
    }

    /// Runs the start-up sequence. Submission is armed last; an edit page
    /// whose record failed to load stays unarmed.
    pub async fn start(&self) {
        log::info!("Starting {} page in {:?} mode", self.form.meta().resource, self.mode);
        self.cascade.initialize();

        let record = async {
            match self.mode.id() {
                Some(id) => self.loader.load_record(id).await,
                None => None,
            }
        };
        let (record, ()) = future::join(record, self.loader.load_statuses()).await;

        self.cascade.ready().await;

        match (&self.mode, record) {
            (_, Some(record)) => self.loader.populate_form(&record).await,
            (PageMode::Edit { id }, None) => {
                log::error!("Submission stays disabled: {} {} was not loaded", self.form.meta().resource, id);
                return;
            }
            (PageMode::Create, None) => {}
        }

        self.submission.arm();
    }

    pub fn is_armed(&self) -> bool {
        self.submission.is_armed()
    }

    pub async fn submit(&self) -> SubmitOutcome {
        self.submission.submit().await
    }
}
