//! In-memory stand-ins for the browser capabilities, used by the controller
//! tests.

use futures::channel::oneshot;
use futures::executor::LocalPool;
use futures::future::{self, LocalBoxFuture};
use futures::task::LocalSpawnExt;
use futures::FutureExt;
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;
use std::time::Duration;

use contracts::domain::a001_user::aggregate::User;

use super::cascade::{CascadeLevel, Level};
use super::form::{DependentRefs, Encoding, MessageKeys, RecordForm, RecordMeta};
use super::lookup;
use super::page::PageServices;
use super::select::{SearchFn, SelectConfig, SelectOption, SelectWidget};
use crate::shared::api_utils::{ApiError, ApiRequest, ApiResponse, HttpClient};
use crate::shared::config::FormConfig;
use crate::shared::form_payload::FormPayload;
use crate::shared::i18n::{Args, Translator};
use crate::shared::notify::{NoticeKind, NotificationBridge, ToastSink};
use crate::shared::platform::{Delay, Navigator, Spawner};
use crate::shared::validation::FieldErrors;

type Reply = Result<ApiResponse, ApiError>;

/// Canned responses keyed by URL. Held URLs answer only when released.
#[derive(Default)]
pub struct FakeHttp {
    replies: RefCell<HashMap<String, Reply>>,
    held: RefCell<HashSet<String>>,
    pending: RefCell<Vec<(String, oneshot::Sender<Reply>)>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl FakeHttp {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn respond(&self, url: &str, status: u16, body: &str) {
        self.replies.borrow_mut().insert(
            url.to_string(),
            Ok(ApiResponse {
                status,
                body: body.to_string(),
            }),
        );
    }

    pub fn fail(&self, url: &str) {
        self.fail_with(url, ApiError::Transport("connection refused".into()));
    }

    pub fn fail_with(&self, url: &str, error: ApiError) {
        self.replies.borrow_mut().insert(url.to_string(), Err(error));
    }

    pub fn hold(&self, url: &str) {
        self.held.borrow_mut().insert(url.to_string());
    }

    /// Answers the oldest held request for `url`.
    pub fn release(&self, url: &str, status: u16, body: &str) {
        let mut pending = self.pending.borrow_mut();
        if let Some(pos) = pending.iter().position(|(u, _)| u == url) {
            let (_, tx) = pending.remove(pos);
            let _ = tx.send(Ok(ApiResponse {
                status,
                body: body.to_string(),
            }));
        }
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn urls(&self) -> Vec<String> {
        self.requests.borrow().iter().map(|r| r.url.clone()).collect()
    }
}

impl HttpClient for FakeHttp {
    fn send(&self, request: ApiRequest) -> LocalBoxFuture<'static, Reply> {
        let url = request.url.clone();
        self.requests.borrow_mut().push(request);

        if self.held.borrow().contains(&url) {
            let (tx, rx) = oneshot::channel();
            self.pending.borrow_mut().push((url, tx));
            return rx
                .map(|r| r.unwrap_or_else(|_| Err(ApiError::Transport("dropped".into()))))
                .boxed_local();
        }

        let reply = self.replies.borrow().get(&url).cloned().unwrap_or(Ok(ApiResponse {
            status: 404,
            body: String::new(),
        }));
        future::ready(reply).boxed_local()
    }
}

#[derive(Default)]
struct SelectState {
    placeholder: Option<&'static str>,
    search: Option<SearchFn>,
    enabled: bool,
    loading: bool,
    options: Vec<SelectOption>,
    value: Option<SelectOption>,
    listeners: Vec<Rc<dyn Fn()>>,
}

/// Dropdown double. `silent_select` models a widget that never reports its
/// "selected" event.
#[derive(Default)]
pub struct FakeSelect {
    state: RefCell<SelectState>,
    silent_select: Cell<bool>,
}

impl FakeSelect {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn silent() -> Rc<Self> {
        let select = Self::new();
        select.silent_select.set(true);
        select
    }

    pub fn placeholder(&self) -> Option<&'static str> {
        self.state.borrow().placeholder
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    pub fn value_id(&self) -> Option<String> {
        self.state.borrow().value.as_ref().map(|o| o.id.clone())
    }

    pub fn value_text(&self) -> Option<String> {
        self.state.borrow().value.as_ref().map(|o| o.text.clone())
    }

    pub fn option_ids(&self) -> Vec<String> {
        self.state.borrow().options.iter().map(|o| o.id.clone()).collect()
    }

    pub fn search_fn(&self) -> Option<SearchFn> {
        self.state.borrow().search.clone()
    }

    /// A user pick of `option`, which need not be in the list.
    pub fn pick(&self, option: SelectOption) {
        {
            let mut state = self.state.borrow_mut();
            if !state.options.iter().any(|o| o.id == option.id) {
                state.options.push(option.clone());
            }
            state.value = Some(option);
        }
        self.notify();
    }

    /// The user clearing the selection.
    pub fn pick_none(&self) {
        self.state.borrow_mut().value = None;
        self.notify();
    }

    fn notify(&self) {
        let listeners = self.state.borrow().listeners.clone();
        for listener in listeners {
            listener();
        }
    }
}

impl SelectWidget for FakeSelect {
    fn configure(&self, config: SelectConfig) {
        let mut state = self.state.borrow_mut();
        state.placeholder = Some(config.placeholder_key);
        state.search = Some(config.search);
    }

    fn ready(&self) -> LocalBoxFuture<'static, ()> {
        future::ready(()).boxed_local()
    }

    fn is_enabled(&self) -> bool {
        self.state.borrow().enabled
    }

    fn set_enabled(&self, enabled: bool) {
        self.state.borrow_mut().enabled = enabled;
    }

    fn set_loading(&self, loading: bool) {
        self.state.borrow_mut().loading = loading;
    }

    fn value(&self) -> Option<SelectOption> {
        self.state.borrow().value.clone()
    }

    fn clear(&self) {
        self.state.borrow_mut().value = None;
    }

    fn set_options(&self, options: Vec<SelectOption>) {
        let mut state = self.state.borrow_mut();
        state.options = options;
        state.value = None;
    }

    fn options(&self) -> Vec<SelectOption> {
        self.state.borrow().options.clone()
    }

    fn has_option(&self, id: &str) -> bool {
        self.state.borrow().options.iter().any(|o| o.id == id)
    }

    fn add_option(&self, option: SelectOption) {
        self.state.borrow_mut().options.push(option);
    }

    fn select(&self, id: &str) -> LocalBoxFuture<'static, ()> {
        let found = {
            let mut state = self.state.borrow_mut();
            let option = state.options.iter().find(|o| o.id == id).cloned();
            if option.is_some() {
                state.value = option;
            }
            state.value.as_ref().is_some_and(|o| o.id == id)
        };
        if found {
            self.notify();
        }
        if self.silent_select.get() {
            future::pending().boxed_local()
        } else {
            future::ready(()).boxed_local()
        }
    }

    fn on_change(&self, listener: Rc<dyn Fn()>) {
        self.state.borrow_mut().listeners.push(listener);
    }
}

#[derive(Default)]
pub struct RecordingToasts(RefCell<Vec<(NoticeKind, String, String)>>);

impl RecordingToasts {
    pub fn shown(&self) -> Vec<(NoticeKind, String, String)> {
        self.0.borrow().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.0.borrow().iter().map(|(_, _, m)| m.clone()).collect()
    }
}

impl ToastSink for RecordingToasts {
    fn toast(&self, kind: NoticeKind, title: &str, message: &str) {
        self.0
            .borrow_mut()
            .push((kind, title.to_string(), message.to_string()));
    }
}

/// Translator that echoes keys, so assertions can name the key shown.
pub struct KeyEcho;

impl Translator for KeyEcho {
    fn translate(&self, key: &str, args: &Args) -> String {
        if args.is_empty() {
            return key.to_string();
        }
        let rendered: Vec<String> = args.iter().map(|(k, v)| format!("{k}={v}")).collect();
        format!("{key}[{}]", rendered.join(","))
    }
}

pub fn echo_notifier() -> (NotificationBridge, Rc<RecordingToasts>) {
    let toasts = Rc::new(RecordingToasts::default());
    let bridge = NotificationBridge::new(Some(toasts.clone()), Some(Rc::new(KeyEcho)));
    (bridge, toasts)
}

/// Every sleep completes immediately.
pub struct InstantDelay;

impl Delay for InstantDelay {
    fn sleep(&self, _: Duration) -> LocalBoxFuture<'static, ()> {
        future::ready(()).boxed_local()
    }
}

/// Sleeps that only finish when the test fires them.
#[derive(Default)]
pub struct ManualDelay {
    timers: RefCell<Vec<(Duration, oneshot::Sender<()>)>>,
}

impl ManualDelay {
    pub fn fire_all(&self) {
        for (_, tx) in self.timers.borrow_mut().drain(..) {
            let _ = tx.send(());
        }
    }

    pub fn requested(&self) -> Vec<Duration> {
        self.timers.borrow().iter().map(|(d, _)| *d).collect()
    }
}

impl Delay for ManualDelay {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        let (tx, rx) = oneshot::channel();
        self.timers.borrow_mut().push((duration, tx));
        rx.map(|_| ()).boxed_local()
    }
}

#[derive(Default)]
pub struct RecordingNavigator(RefCell<Vec<String>>);

impl RecordingNavigator {
    pub fn visited(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, url: &str) {
        self.0.borrow_mut().push(url.to_string());
    }
}

/// Single-threaded executor whose spawner feeds the controllers.
pub struct TaskQueue {
    pool: RefCell<LocalPool>,
}

impl TaskQueue {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            pool: RefCell::new(LocalPool::new()),
        })
    }

    pub fn spawner(&self) -> Spawner {
        let spawner = self.pool.borrow().spawner();
        Rc::new(move |task| {
            if let Err(e) = spawner.spawn_local(task) {
                panic!("task queue shut down: {e:?}");
            }
        })
    }

    /// Runs every spawned task until none can make progress.
    pub fn run(&self) {
        self.pool.borrow_mut().run_until_stalled();
    }

    pub fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        self.pool.borrow_mut().run_until(future)
    }
}

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

/// User editor double: plain cells instead of signals.
pub struct FakeForm {
    pub city: Rc<FakeSelect>,
    pub street: Rc<FakeSelect>,
    pub house: Rc<FakeSelect>,
    pub scalars: RefCell<Vec<(String, String)>>,
    pub id: RefCell<String>,
    pub statuses: RefCell<Vec<String>>,
    pub record_name: RefCell<Option<String>>,
    pub photo: RefCell<Option<String>>,
    pub errors: RefCell<FieldErrors>,
    pub busy_log: RefCell<Vec<bool>>,
    /// Events in the order the loader produced them
    pub journal: RefCell<Vec<String>>,
}

impl FakeForm {
    pub fn new() -> Rc<Self> {
        Self::with_house(FakeSelect::new())
    }

    pub fn with_house(house: Rc<FakeSelect>) -> Rc<Self> {
        Rc::new(Self {
            city: FakeSelect::new(),
            street: FakeSelect::new(),
            house,
            scalars: RefCell::new(Vec::new()),
            id: RefCell::new(String::new()),
            statuses: RefCell::new(Vec::new()),
            record_name: RefCell::new(None),
            photo: RefCell::new(None),
            errors: RefCell::new(FieldErrors::new(&["firstName", "email", "login", "houseId"])),
            busy_log: RefCell::new(Vec::new()),
            journal: RefCell::new(Vec::new()),
        })
    }

    pub fn set(&self, name: &str, value: &str) {
        let mut scalars = self.scalars.borrow_mut();
        match scalars.iter_mut().find(|(k, _)| k == name) {
            Some(entry) => entry.1 = value.to_string(),
            None => scalars.push((name.to_string(), value.to_string())),
        }
    }

    pub fn get(&self, name: &str) -> Option<String> {
        self.scalars
            .borrow()
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.clone())
    }
}

impl RecordForm for FakeForm {
    type Record = User;

    fn meta(&self) -> &'static RecordMeta {
        &USER_META
    }

    fn cascade_levels(&self, services: &PageServices) -> Vec<CascadeLevel> {
        let ctx = services.config.context_path.as_str();
        let http = services.http.clone();
        vec![
            CascadeLevel {
                level: Level::Region,
                widget: self.city.clone(),
                placeholder_key: "users.placeholders.selectCity",
                lookup: Rc::new(lookup::cities(http.clone(), ctx)),
                error_key: "users.errors.searchFailed",
            },
            CascadeLevel {
                level: Level::Subregion,
                widget: self.street.clone(),
                placeholder_key: "users.placeholders.selectCityFirst",
                lookup: Rc::new(lookup::streets(http.clone(), ctx)),
                error_key: "users.errors.loadStreets",
            },
            CascadeLevel {
                level: Level::Unit,
                widget: self.house.clone(),
                placeholder_key: "users.placeholders.selectStreetFirst",
                lookup: Rc::new(lookup::houses(http, ctx)),
                error_key: "users.errors.loadHouses",
            },
        ]
    }

    fn apply_scalars(&self, record: &User) {
        self.journal.borrow_mut().push("scalars".into());
        if let Some(first_name) = &record.first_name {
            self.set("firstName", first_name);
        }
        if let Some(email) = &record.email {
            self.set("email", email);
        }
    }

    fn record_id(&self, record: &User) -> Option<String> {
        record.id.clone()
    }

    fn apply_id(&self, id: &str) {
        self.journal.borrow_mut().push("id".into());
        *self.id.borrow_mut() = id.to_string();
    }

    fn dependent_refs(&self, record: &User) -> DependentRefs {
        DependentRefs::from_address(
            record.city.as_ref(),
            record.street.as_ref(),
            record.house.as_ref(),
        )
    }

    fn apply_attachment(&self, record: &User) {
        self.journal.borrow_mut().push("attachment".into());
        *self.photo.borrow_mut() = record.photo.clone();
    }

    fn record_name(&self, record: &User) -> Option<String> {
        record.display_name().map(str::to_string)
    }

    fn set_record_name(&self, name: Option<String>) {
        *self.record_name.borrow_mut() = name;
    }

    fn set_statuses(&self, statuses: Vec<String>) {
        *self.statuses.borrow_mut() = statuses;
    }

    fn collect_payload(&self) -> FormPayload {
        let mut payload = FormPayload::new().text("id", self.id.borrow().clone());
        for (name, value) in self.scalars.borrow().iter() {
            payload = payload.text(name, value.clone());
        }
        payload
            .text("cityId", self.city.value_id().unwrap_or_default())
            .text("addressId", self.street.value_id().unwrap_or_default())
            .text("houseId", self.house.value_id().unwrap_or_default())
    }

    fn form_name(&self) -> Option<String> {
        self.get("firstName").filter(|n| !n.is_empty())
    }

    fn update_errors(&self, update: impl FnOnce(&mut FieldErrors)) {
        update(&mut self.errors.borrow_mut());
    }

    fn set_busy(&self, busy: bool) {
        self.busy_log.borrow_mut().push(busy);
    }
}

/// Page services over fakes, plus handles to inspect them.
pub struct Harness {
    pub services: PageServices,
    pub http: Rc<FakeHttp>,
    pub toasts: Rc<RecordingToasts>,
    pub navigator: Rc<RecordingNavigator>,
    pub queue: Rc<TaskQueue>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_delay(Rc::new(InstantDelay))
    }

    pub fn with_delay(delay: Rc<dyn Delay>) -> Self {
        let http = FakeHttp::new();
        let (notifier, toasts) = echo_notifier();
        let navigator = Rc::new(RecordingNavigator::default());
        let queue = TaskQueue::new();
        let services = PageServices {
            http: http.clone(),
            notifier,
            delay,
            navigator: navigator.clone(),
            spawner: queue.spawner(),
            config: Rc::new(FormConfig {
                context_path: "/app".into(),
                ..FormConfig::default()
            }),
        };
        Self {
            services,
            http,
            toasts,
            navigator,
            queue,
        }
    }
}
