//! Searchable dropdown backed by signals.
//!
//! `SignalSelect` is the widget handle the cascade drives (it implements
//! `SelectWidget`); `SearchSelect` renders it. Typed terms are debounced and
//! sent to the search function installed by `configure`.

use futures::channel::oneshot;
use futures::future::{self, LocalBoxFuture};
use futures::FutureExt;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::rc::Rc;
use std::time::Duration;
use thaw::{Spinner, SpinnerSize};

use crate::shared::api_utils::ApiError;
use crate::shared::i18n::use_i18n;
use crate::shared::record_form::select::{SearchFn, SelectConfig, SelectOption, SelectWidget};

#[derive(Clone, Copy)]
pub struct SignalSelect {
    pub enabled: RwSignal<bool>,
    pub loading: RwSignal<bool>,
    pub options: RwSignal<Vec<SelectOption>>,
    pub value: RwSignal<Option<SelectOption>>,
    pub placeholder_key: RwSignal<&'static str>,
    /// Dropdown state
    pub open: RwSignal<bool>,
    pub term: RwSignal<String>,
    pub results: RwSignal<Vec<SelectOption>>,
    /// Typed search in flight; `loading` belongs to the cascade
    pub searching: RwSignal<bool>,
    configured: RwSignal<bool>,
    search_seq: RwSignal<u64>,
    debounce_ms: u32,
    search: StoredValue<Option<SearchFn>, LocalStorage>,
    listeners: StoredValue<Vec<Rc<dyn Fn()>>, LocalStorage>,
    ready_waiters: StoredValue<Vec<oneshot::Sender<()>>, LocalStorage>,
}

impl SignalSelect {
    pub fn new(debounce: Duration) -> Self {
        Self {
            enabled: RwSignal::new(false),
            loading: RwSignal::new(false),
            options: RwSignal::new(Vec::new()),
            value: RwSignal::new(None),
            placeholder_key: RwSignal::new("select.searchPlaceholder"),
            open: RwSignal::new(false),
            term: RwSignal::new(String::new()),
            results: RwSignal::new(Vec::new()),
            searching: RwSignal::new(false),
            configured: RwSignal::new(false),
            search_seq: RwSignal::new(0),
            debounce_ms: u32::try_from(debounce.as_millis()).unwrap_or(u32::MAX),
            search: StoredValue::new_local(None),
            listeners: StoredValue::new_local(Vec::new()),
            ready_waiters: StoredValue::new_local(Vec::new()),
        }
    }

    pub fn value_id(&self) -> Option<String> {
        self.value.get_untracked().map(|o| o.id)
    }

    pub fn value_text(&self) -> Option<String> {
        self.value.get_untracked().map(|o| o.text)
    }

    /// Options shown in the open dropdown: server results while a term is
    /// typed, the loaded list otherwise.
    pub fn visible_options(&self) -> Vec<SelectOption> {
        if self.term.get().trim().is_empty() {
            self.options.get()
        } else {
            self.results.get()
        }
    }

    pub fn toggle(&self) {
        if !self.enabled.get_untracked() {
            return;
        }
        self.open.update(|open| *open = !*open);
        if !self.open.get_untracked() {
            self.term.set(String::new());
        }
    }

    /// A pick made in the dropdown.
    pub fn pick(&self, option: SelectOption) {
        self.options.update(|options| {
            if !options.iter().any(|o| o.id == option.id) {
                options.push(option.clone());
            }
        });
        self.value.set(Some(option));
        self.open.set(false);
        self.term.set(String::new());
        self.emit_change();
    }

    /// The clear button.
    pub fn pick_none(&self) {
        self.value.set(None);
        self.emit_change();
    }

    fn emit_change(&self) {
        let listeners = self.listeners.with_value(|l| l.clone());
        for listener in listeners {
            listener();
        }
    }

    /// Shows a stored value without notifying listeners.
    pub fn preset(&self, option: SelectOption) {
        self.options.update(|options| {
            if !options.iter().any(|o| o.id == option.id) {
                options.push(option.clone());
            }
        });
        self.value.set(Some(option));
    }

    /// Debounced remote search for `term`; superseded terms are dropped.
    pub fn search_term(&self, term: String) {
        let Some((seq, search)) = self.begin_search(term.clone()) else {
            return;
        };

        let this = *self;
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(this.debounce_ms).await;
            if this.search_seq.get_untracked() != seq {
                return;
            }
            this.searching.set(true);
            let found = search(term).await;
            this.finish_search(seq, found);
        });
    }

    /// Records the term and supersedes any running search. Returns the
    /// search to run, if the term calls for one.
    fn begin_search(&self, term: String) -> Option<(u64, SearchFn)> {
        let seq = self.search_seq.get_untracked() + 1;
        self.search_seq.set(seq);
        self.term.set(term.clone());

        if term.trim().is_empty() {
            self.searching.set(false);
            self.results.set(Vec::new());
            return None;
        }
        let search = self.search.with_value(|s| s.clone())?;
        Some((seq, search))
    }

    fn finish_search(&self, seq: u64, found: Result<Vec<SelectOption>, ApiError>) {
        if self.search_seq.get_untracked() != seq {
            return;
        }
        self.searching.set(false);
        // the search function reports failures itself
        self.results.set(found.unwrap_or_default());
    }
}

impl SelectWidget for SignalSelect {
    fn configure(&self, config: SelectConfig) {
        self.placeholder_key.set(config.placeholder_key);
        self.search.set_value(Some(config.search));
        self.configured.set(true);
        self.ready_waiters.update_value(|waiters| {
            for tx in waiters.drain(..) {
                let _ = tx.send(());
            }
        });
    }

    fn ready(&self) -> LocalBoxFuture<'static, ()> {
        if self.configured.get_untracked() {
            return future::ready(()).boxed_local();
        }
        let (tx, rx) = oneshot::channel();
        self.ready_waiters.update_value(|waiters| waiters.push(tx));
        rx.map(|_| ()).boxed_local()
    }

    fn is_enabled(&self) -> bool {
        self.enabled.get_untracked()
    }

    fn set_enabled(&self, enabled: bool) {
        self.enabled.set(enabled);
        if !enabled {
            self.value.set(None);
            self.open.set(false);
        }
    }

    fn set_loading(&self, loading: bool) {
        self.loading.set(loading);
    }

    fn value(&self) -> Option<SelectOption> {
        self.value.get_untracked()
    }

    fn clear(&self) {
        self.value.set(None);
        self.search_seq.update(|seq| *seq += 1);
        self.searching.set(false);
        self.term.set(String::new());
        self.results.set(Vec::new());
    }

    fn set_options(&self, options: Vec<SelectOption>) {
        self.options.set(options);
        self.value.set(None);
    }

    fn options(&self) -> Vec<SelectOption> {
        self.options.get_untracked()
    }

    fn has_option(&self, id: &str) -> bool {
        self.options.with_untracked(|options| options.iter().any(|o| o.id == id))
    }

    fn add_option(&self, option: SelectOption) {
        self.options.update(|options| options.push(option));
    }

    fn select(&self, id: &str) -> LocalBoxFuture<'static, ()> {
        let found = self
            .options
            .with_untracked(|options| options.iter().find(|o| o.id == id).cloned());
        match found {
            Some(option) => {
                self.value.set(Some(option));
                self.emit_change();
                future::ready(()).boxed_local()
            }
            None => {
                log::warn!("Select: option {} is not in the list", id);
                future::pending().boxed_local()
            }
        }
    }

    fn on_change(&self, listener: Rc<dyn Fn()>) {
        self.listeners.update_value(|listeners| listeners.push(listener));
    }
}

/// Searchable dropdown bound to a [`SignalSelect`].
#[component]
pub fn SearchSelect(
    select: SignalSelect,
    /// Label text
    #[prop(into)]
    label: Signal<String>,
    /// Error text under the control
    #[prop(optional, into)]
    error: MaybeProp<String>,
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let i18n = use_i18n();
    let control_id = move || id.get().unwrap_or_default();

    view! {
        <div class="form__group search-select" class:search-select--disabled=move || !select.enabled.get()>
            <label class="form__label" for=control_id>{move || label.get()}</label>
            <div class="search-select__control" class:is-invalid=move || error.get().is_some()>
                <button
                    id=control_id
                    type="button"
                    class="search-select__value"
                    disabled=move || !select.enabled.get()
                    on:click=move |_| select.toggle()
                >
                    {move || match select.value.get() {
                        Some(option) => option.text,
                        None => i18n.t(select.placeholder_key.get()),
                    }}
                </button>
                <Show when=move || select.loading.get() || select.searching.get()>
                    <Spinner size=SpinnerSize::Tiny />
                </Show>
                <Show when=move || select.enabled.get() && select.value.get().is_some()>
                    <button
                        type="button"
                        class="search-select__clear"
                        title=move || i18n.t("select.clear")
                        on:click=move |_| select.pick_none()
                    >
                        "×"
                    </button>
                </Show>
            </div>

            <Show when=move || select.open.get()>
                <div class="search-select__dropdown">
                    <input
                        class="form__input search-select__search"
                        type="text"
                        placeholder=move || i18n.t("select.searchPlaceholder")
                        prop:value=move || select.term.get()
                        on:input=move |ev| select.search_term(event_target_value(&ev))
                    />
                    <ul class="search-select__options">
                        <For
                            each=move || select.visible_options()
                            key=|option| option.id.clone()
                            children=move |option| {
                                let text = option.text.clone();
                                let id = option.id.clone();
                                let is_current = move || select.value.get().is_some_and(|v| v.id == id);
                                view! {
                                    <li
                                        class="search-select__option"
                                        class:selected=is_current
                                        on:click=move |_| select.pick(option.clone())
                                    >
                                        {text}
                                    </li>
                                }
                            }
                        />
                    </ul>
                    <Show when=move || select.visible_options().is_empty() && !select.loading.get() && !select.searching.get()>
                        <div class="search-select__empty">{move || i18n.t("select.noResults")}</div>
                    </Show>
                </div>
            </Show>

            {move || error.get().map(|e| view! { <div class="form__error">{e}</div> })}
        </div>
    }
}
