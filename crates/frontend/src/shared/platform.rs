//! Browser capabilities the controllers depend on: timers, task spawning and
//! navigation. Injected so that controllers also run under a plain executor.

use futures::future::LocalBoxFuture;
use futures::FutureExt;
use gloo_timers::future::TimeoutFuture;
use std::rc::Rc;
use std::time::Duration;

pub trait Delay {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;
}

pub trait Navigator {
    fn navigate(&self, url: &str);
}

/// Detached execution of a local future
pub type Spawner = Rc<dyn Fn(LocalBoxFuture<'static, ()>)>;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDelay;

impl Delay for BrowserDelay {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        TimeoutFuture::new(millis).boxed_local()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, url: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.location().set_href(url) {
            log::error!("Navigation to {} failed: {:?}", url, e);
        }
    }
}

impl BrowserNavigator {
    /// "Cancel" on the edit pages.
    pub fn back() {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.history().and_then(|h| h.back()) {
            log::error!("history.back failed: {:?}", e);
        }
    }
}

pub fn browser_spawner() -> Spawner {
    Rc::new(|task| wasm_bindgen_futures::spawn_local(task))
}
