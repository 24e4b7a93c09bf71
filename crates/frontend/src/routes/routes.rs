use crate::domain::a001_user::ui::details::UserDetails;
use crate::domain::a002_house::ui::details::HouseDetails;
use crate::shared::api_utils::context_path;
use crate::shared::i18n::use_i18n;
use leptos::prelude::*;
// Pages are picked from location.pathname; the server renders one page per URL

/// Editor pages served by this bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    User,
    House,
    NotFound,
}

/// Resolves `path` (with the context prefix) to a page.
pub fn resolve_page(path: &str, context_path: &str) -> Page {
    let path = path.strip_prefix(context_path).unwrap_or(path);
    let mut segments = path.trim_matches('/').split('/');
    let resource = segments.next().unwrap_or_default();
    let action = segments.next().unwrap_or_default();

    let page = match resource {
        "users" => Page::User,
        "houses" => Page::House,
        _ => return Page::NotFound,
    };
    match (action, segments.next()) {
        ("new", None) => page,
        ("edit", Some(id)) if !id.is_empty() => page,
        _ => Page::NotFound,
    }
}

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let i18n = use_i18n();
    let path = current_path();
    let page = resolve_page(&path, &context_path());
    log::info!("Route {} → {:?}", path, page);

    match page {
        Page::User => view! { <UserDetails path=path /> }.into_any(),
        Page::House => view! { <HouseDetails path=path /> }.into_any(),
        Page::NotFound => {
            view! { <div class="not-found">{move || i18n.t("app.notFound")}</div> }.into_any()
        }
    }
}
