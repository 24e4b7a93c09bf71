//! Dependent selectors: region → subregion → unit.
//!
//! A level is enabled only while its parent has a selection. Changing a level
//! synchronously clears and disables every descendant, then reloads the
//! immediate child from the server. Reloads carry a per-level generation
//! number; a reply that arrives after a newer change of the same parent is
//! dropped.

use futures::future::{self, LocalBoxFuture};
use futures::FutureExt;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use super::lookup::Lookup;
use super::select::{SearchFn, SelectConfig, SelectOption, SelectWidget};
use crate::shared::notify::NotificationBridge;
use crate::shared::platform::{Delay, Spawner};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Region,
    Subregion,
    Unit,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Region, Level::Subregion, Level::Unit];

    pub fn index(self) -> usize {
        match self {
            Level::Region => 0,
            Level::Subregion => 1,
            Level::Unit => 2,
        }
    }

    pub fn parent(self) -> Option<Level> {
        match self {
            Level::Region => None,
            Level::Subregion => Some(Level::Region),
            Level::Unit => Some(Level::Subregion),
        }
    }

    pub fn child(self) -> Option<Level> {
        match self {
            Level::Region => Some(Level::Subregion),
            Level::Subregion => Some(Level::Unit),
            Level::Unit => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Region => "region",
            Level::Subregion => "subregion",
            Level::Unit => "unit",
        }
    }
}

/// One selector of the chain together with its option source.
pub struct CascadeLevel {
    pub level: Level,
    pub widget: Rc<dyn SelectWidget>,
    pub placeholder_key: &'static str,
    pub lookup: Rc<dyn Lookup>,
    /// Notification shown when this level's options cannot be loaded
    pub error_key: &'static str,
}

#[derive(Default)]
struct Generations([Cell<u64>; 3]);

impl Generations {
    fn current(&self, level: Level) -> u64 {
        self.0[level.index()].get()
    }

    fn bump(&self, level: Level) -> u64 {
        let cell = &self.0[level.index()];
        cell.set(cell.get() + 1);
        cell.get()
    }
}

/// Keeps the cascade quiet while the loader writes values; released on drop.
pub struct PopulationGuard {
    flag: Rc<Cell<bool>>,
}

impl Drop for PopulationGuard {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

pub struct CascadeController {
    levels: Vec<CascadeLevel>,
    populating: Rc<Cell<bool>>,
    generations: Rc<Generations>,
    notifier: NotificationBridge,
    delay: Rc<dyn Delay>,
    select_timeout: Duration,
    spawner: Spawner,
}

impl CascadeController {
    /// `levels` run root first; a form may stop after any level.
    pub fn new(
        levels: Vec<CascadeLevel>,
        notifier: NotificationBridge,
        delay: Rc<dyn Delay>,
        select_timeout: Duration,
        spawner: Spawner,
    ) -> Rc<Self> {
        debug_assert!(levels
            .iter()
            .zip(Level::ALL)
            .all(|(entry, level)| entry.level == level));
        Rc::new(Self {
            levels,
            populating: Rc::new(Cell::new(false)),
            generations: Rc::new(Generations::default()),
            notifier,
            delay,
            select_timeout,
            spawner,
        })
    }

    pub fn levels(&self) -> impl Iterator<Item = Level> + '_ {
        self.levels.iter().map(|entry| entry.level)
    }

    pub fn has_level(&self, level: Level) -> bool {
        self.entry(level).is_some()
    }

    fn entry(&self, level: Level) -> Option<&CascadeLevel> {
        self.levels.iter().find(|entry| entry.level == level)
    }

    pub fn widget(&self, level: Level) -> Option<Rc<dyn SelectWidget>> {
        self.entry(level).map(|entry| entry.widget.clone())
    }

    pub fn value(&self, level: Level) -> Option<SelectOption> {
        self.entry(level).and_then(|entry| entry.widget.value())
    }

    pub fn is_enabled(&self, level: Level) -> bool {
        self.entry(level)
            .is_some_and(|entry| entry.widget.is_enabled())
    }

    pub fn enable(&self, level: Level) {
        if let Some(entry) = self.entry(level) {
            entry.widget.set_enabled(true);
        }
    }

    /// Installs search behaviour and placeholders, disables every non-root
    /// level and subscribes to changes.
    pub fn initialize(self: &Rc<Self>) {
        for entry in &self.levels {
            entry.widget.configure(SelectConfig {
                placeholder_key: entry.placeholder_key,
                search: self.search_fn(entry),
            });

            let is_root = entry.level.parent().is_none();
            if !is_root {
                entry.widget.clear();
            }
            entry.widget.set_enabled(is_root);

            let weak = Rc::downgrade(self);
            let level = entry.level;
            entry.widget.on_change(Rc::new(move || {
                let Some(cascade) = weak.upgrade() else {
                    return;
                };
                if let Some(reload) = cascade.on_parent_changed(level) {
                    (cascade.spawner)(reload);
                }
            }));
        }
        log::debug!("Cascade initialized with {} levels", self.levels.len());
    }

    fn search_fn(&self, entry: &CascadeLevel) -> SearchFn {
        let lookup = entry.lookup.clone();
        let parent = entry.level.parent().and_then(|p| self.widget(p));
        let notifier = self.notifier.clone();
        let error_key = entry.error_key;

        Rc::new(move |term: String| {
            let parent_id = match &parent {
                Some(widget) => match widget.value() {
                    Some(option) => Some(option.id),
                    // nothing to search under
                    None => return future::ready(Ok(Vec::new())).boxed_local(),
                },
                None => None,
            };
            let search = lookup.search(parent_id, term);
            let notifier = notifier.clone();
            async move {
                let result = search.await;
                if let Err(e) = &result {
                    log::error!("Search failed: {}", e);
                    notifier.error_key(error_key);
                }
                result
            }
            .boxed_local()
        })
    }

    /// Resolves once every widget has finished configuring.
    pub fn ready(&self) -> LocalBoxFuture<'static, ()> {
        let readiness: Vec<_> = self.levels.iter().map(|entry| entry.widget.ready()).collect();
        future::join_all(readiness).map(|_| ()).boxed_local()
    }

    /// Clears and disables the descendants of `level` right away. Returns the
    /// reload of the immediate child when `level` now has a selection.
    pub fn on_parent_changed(&self, level: Level) -> Option<LocalBoxFuture<'static, ()>> {
        if self.populating.get() {
            return None;
        }
        let child = level.child().filter(|c| self.has_level(*c))?;
        self.reset_descendants(level);

        let parent_id = self.value(level)?.id;
        Some(self.reload(child, parent_id))
    }

    fn reset_descendants(&self, level: Level) {
        let mut next = level.child();
        while let Some(descendant) = next {
            let Some(entry) = self.entry(descendant) else {
                break;
            };
            self.generations.bump(descendant);
            entry.widget.clear();
            entry.widget.set_enabled(false);
            entry.widget.set_loading(false);
            next = descendant.child();
        }
    }

    fn reload(&self, level: Level, parent_id: String) -> LocalBoxFuture<'static, ()> {
        let Some(entry) = self.entry(level) else {
            return future::ready(()).boxed_local();
        };
        let widget = entry.widget.clone();
        let generations = self.generations.clone();
        let issued = generations.current(level);
        let notifier = self.notifier.clone();
        let error_key = entry.error_key;

        widget.set_loading(true);
        let children = entry.lookup.children(parent_id.clone());

        async move {
            let result = children.await;
            if generations.current(level) != issued {
                log::debug!(
                    "Dropping stale {} options for parent {}",
                    level.as_str(),
                    parent_id
                );
                return;
            }
            widget.set_loading(false);
            match result {
                Ok(options) => {
                    widget.set_options(options);
                    widget.set_enabled(true);
                }
                Err(e) => {
                    log::error!("Failed to load {} options: {}", level.as_str(), e);
                    notifier.error_key(error_key);
                }
            }
        }
        .boxed_local()
    }

    /// Selects `option` on `level`, adding it first when the list lacks it.
    /// Resolves on the widget's "selected" event or after the fallback delay.
    pub fn set_value(&self, level: Level, option: SelectOption) -> LocalBoxFuture<'static, ()> {
        let Some(widget) = self.widget(level) else {
            return future::ready(()).boxed_local();
        };
        if !widget.has_option(&option.id) {
            widget.add_option(option.clone());
        }
        let selected = widget.select(&option.id);
        let fallback = self.delay.sleep(self.select_timeout);
        future::select(selected, fallback).map(|_| ()).boxed_local()
    }

    pub fn begin_population(&self) -> PopulationGuard {
        self.populating.set(true);
        PopulationGuard {
            flag: self.populating.clone(),
        }
    }

    pub fn is_populating(&self) -> bool {
        self.populating.get()
    }
}
