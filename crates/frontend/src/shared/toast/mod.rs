//! Toast stack: transient notifications in the top-right corner.
//!
//! `ToastService` is provided at the app root and implements `ToastSink` for
//! the notification bridge; `ToastHost` renders it.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::time::Duration;
use wasm_bindgen_futures::spawn_local;

use crate::shared::notify::{NoticeKind, ToastSink};

#[derive(Clone, Debug, PartialEq)]
struct ToastEntry {
    id: u64,
    kind: NoticeKind,
    title: String,
    message: String,
}

#[derive(Clone, Copy)]
pub struct ToastService {
    stack: RwSignal<Vec<ToastEntry>>,
    next_id: RwSignal<u64>,
    duration: StoredValue<Duration>,
}

impl ToastService {
    pub fn new(duration: Duration) -> Self {
        Self {
            stack: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
            duration: StoredValue::new(duration),
        }
    }

    /// Push a toast; it dismisses itself after the configured duration.
    pub fn push(&self, kind: NoticeKind, title: &str, message: &str) -> u64 {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.stack.update(|s| {
            s.push(ToastEntry {
                id,
                kind,
                title: title.to_string(),
                message: message.to_string(),
            });
        });

        let svc = *self;
        let millis = u32::try_from(self.duration.get_value().as_millis()).unwrap_or(u32::MAX);
        spawn_local(async move {
            TimeoutFuture::new(millis).await;
            svc.dismiss(id);
        });

        id
    }

    pub fn dismiss(&self, id: u64) {
        self.stack.update(|s| s.retain(|e| e.id != id));
    }
}

impl ToastSink for ToastService {
    fn toast(&self, kind: NoticeKind, title: &str, message: &str) {
        self.push(kind, title, message);
    }
}

/// Renders the toast stack at the application root.
///
/// Must be mounted exactly once.
#[component]
pub fn ToastHost() -> impl IntoView {
    let svc = use_context::<ToastService>()
        .expect("ToastService not provided in context (provide it in app root)");

    view! {
        <div class="toast-stack">
            <For
                each=move || svc.stack.get()
                key=|entry| entry.id
                children=move |entry| {
                    let id = entry.id;
                    let class = format!("toast toast--{}", entry.kind.as_str());
                    view! {
                        <div class=class role="alert">
                            <div class="toast__content">
                                <strong class="toast__title">{entry.title}</strong>
                                <div class="toast__message">{entry.message}</div>
                            </div>
                            <button
                                type="button"
                                class="toast__close"
                                on:click=move |_| svc.dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
