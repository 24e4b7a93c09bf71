//! Translation module for the record editors.
//!
//! Provides a context-based language switch (Russian and English) with
//! `{{name}}` interpolation. The language preference is persisted in
//! localStorage. Unknown keys translate to themselves.

mod catalog;

use leptos::prelude::*;
use web_sys::window;

/// Interpolation arguments: `("userName", "Ivan")` fills `{{userName}}`.
pub type Args<'a> = [(&'a str, &'a str)];

/// Translation capability handed to controllers.
pub trait Translator {
    fn translate(&self, key: &str, args: &Args) -> String;
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Lang {
    #[default]
    Ru,
    En,
}

impl Lang {
    pub fn as_str(&self) -> &'static str {
        match self {
            Lang::Ru => "ru",
            Lang::En => "en",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Lang::Ru => "Русский",
            Lang::En => "English",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "en" => Lang::En,
            _ => Lang::Ru,
        }
    }

    pub fn all() -> [Lang; 2] {
        [Lang::Ru, Lang::En]
    }

    fn table(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Lang::Ru => catalog::RU,
            Lang::En => catalog::EN,
        }
    }
}

/// Look a key up and substitute `{{name}}` placeholders.
pub fn translate(lang: Lang, key: &str, args: &Args) -> String {
    let template = lang
        .table()
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
        .unwrap_or(key);
    interpolate(template, args)
}

/// Placeholders without a matching argument are left as they are.
/// Substituted values are copied verbatim, never scanned again.
pub fn interpolate(template: &str, args: &Args) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            break;
        };
        let name = &after[..end];
        match args.iter().find(|(k, _)| *k == name) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    out
}

const LANG_STORAGE_KEY: &str = "app-lang";

fn load_lang_from_storage() -> Lang {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(LANG_STORAGE_KEY).ok().flatten())
        .map(|s| Lang::from_str(&s))
        .unwrap_or_default()
}

fn save_lang_to_storage(lang: Lang) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(LANG_STORAGE_KEY, lang.as_str());
    }
}

/// I18n context type.
#[derive(Clone, Copy)]
pub struct I18nContext {
    pub lang: RwSignal<Lang>,
}

impl I18nContext {
    pub fn new(lang: Lang) -> Self {
        Self {
            lang: RwSignal::new(lang),
        }
    }

    /// Tracked lookup for use inside views; re-renders on language change.
    pub fn t(&self, key: &str) -> String {
        translate(self.lang.get(), key, &[])
    }

    pub fn t_with(&self, key: &str, args: &Args) -> String {
        translate(self.lang.get(), key, args)
    }

    pub fn set_lang(&self, lang: Lang) {
        self.lang.set(lang);
        save_lang_to_storage(lang);
    }
}

impl Translator for I18nContext {
    fn translate(&self, key: &str, args: &Args) -> String {
        translate(self.lang.get_untracked(), key, args)
    }
}

/// Provides the i18n context to children components.
#[component]
pub fn I18nProvider(children: Children) -> impl IntoView {
    provide_context(I18nContext::new(load_lang_from_storage()));
    children()
}

/// Hook to use the i18n context.
pub fn use_i18n() -> I18nContext {
    use_context::<I18nContext>().expect("I18nContext not found. Wrap your app with I18nProvider.")
}

/// Language switch buttons for the page header.
#[component]
pub fn LanguageSwitcher() -> impl IntoView {
    let ctx = use_i18n();

    view! {
        <div class="lang-switcher">
            {Lang::all().into_iter().map(|lang| {
                view! {
                    <button
                        type="button"
                        class=move || if ctx.lang.get() == lang { "lang-btn active" } else { "lang-btn" }
                        on:click=move |_| ctx.set_lang(lang)
                    >
                        {lang.display_name()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
