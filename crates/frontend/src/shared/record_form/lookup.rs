//! Server-backed option sources for the cascade levels.

use contracts::domain::common::{ChairmanRef, CityRef, HouseRef, StreetRef};
use futures::future::LocalBoxFuture;
use futures::FutureExt;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use std::rc::Rc;

use super::select::{SearchFn, SelectOption};
use crate::shared::api_utils::{get_json, ApiError, HttpClient};
use crate::shared::notify::NotificationBridge;

pub const HOUSE_NUMBER_MISSING: &str = "Номер не указан";

/// Server reference types that render as a dropdown option
pub trait AsSelectOption {
    fn to_option(&self) -> SelectOption;
}

impl AsSelectOption for CityRef {
    fn to_option(&self) -> SelectOption {
        SelectOption::new(&self.id, &self.name)
    }
}

impl AsSelectOption for StreetRef {
    fn to_option(&self) -> SelectOption {
        SelectOption::new(&self.id, &self.name)
    }
}

impl AsSelectOption for HouseRef {
    fn to_option(&self) -> SelectOption {
        SelectOption::new(
            &self.id,
            self.display_number().unwrap_or(HOUSE_NUMBER_MISSING),
        )
    }
}

impl AsSelectOption for ChairmanRef {
    fn to_option(&self) -> SelectOption {
        SelectOption::new(&self.id, self.display_name())
    }
}

pub trait Lookup {
    /// Incremental search, scoped to the parent selection when there is one.
    fn search(
        &self,
        parent_id: Option<String>,
        term: String,
    ) -> LocalBoxFuture<'static, Result<Vec<SelectOption>, ApiError>>;

    /// Complete option list for a parent, used after the parent changes.
    fn children(&self, parent_id: String)
        -> LocalBoxFuture<'static, Result<Vec<SelectOption>, ApiError>>;
}

/// `GET {search_path}?{parent_param}=&q=&page=1` and
/// `GET {children_path}/{parent_id}`
pub struct RemoteLookup<T> {
    http: Rc<dyn HttpClient>,
    context_path: String,
    search_path: &'static str,
    parent_param: Option<&'static str>,
    children_path: Option<&'static str>,
    _item: PhantomData<T>,
}

impl<T> RemoteLookup<T> {
    pub fn new(http: Rc<dyn HttpClient>, context_path: &str, search_path: &'static str) -> Self {
        Self {
            http,
            context_path: context_path.to_string(),
            search_path,
            parent_param: None,
            children_path: None,
            _item: PhantomData,
        }
    }

    pub fn scoped_by(mut self, parent_param: &'static str, children_path: &'static str) -> Self {
        self.parent_param = Some(parent_param);
        self.children_path = Some(children_path);
        self
    }

    pub fn search_url(&self, parent_id: Option<&str>, term: &str) -> String {
        let mut query = String::new();
        if let (Some(param), Some(parent)) = (self.parent_param, parent_id) {
            query.push_str(&format!("{}={}&", param, urlencoding::encode(parent)));
        }
        query.push_str(&format!("q={}&page=1", urlencoding::encode(term)));
        format!("{}{}?{}", self.context_path, self.search_path, query)
    }

    pub fn children_url(&self, parent_id: &str) -> Option<String> {
        self.children_path.map(|path| {
            format!(
                "{}{}/{}",
                self.context_path,
                path,
                urlencoding::encode(parent_id)
            )
        })
    }
}

/// `GET /cities/search`
pub fn cities(http: Rc<dyn HttpClient>, context_path: &str) -> RemoteLookup<CityRef> {
    RemoteLookup::new(http, context_path, "/cities/search")
}

/// Streets of a city: `GET /streets/search?cityId=`, `GET /streets/getByCity/{id}`
pub fn streets(http: Rc<dyn HttpClient>, context_path: &str) -> RemoteLookup<StreetRef> {
    RemoteLookup::new(http, context_path, "/streets/search").scoped_by("cityId", "/streets/getByCity")
}

/// Houses of a street: `GET /houses/search?streetId=`, `GET /houses/getByStreet/{id}`
pub fn houses(http: Rc<dyn HttpClient>, context_path: &str) -> RemoteLookup<HouseRef> {
    RemoteLookup::new(http, context_path, "/houses/search").scoped_by("streetId", "/houses/getByStreet")
}

/// `GET /chairmen/search`
pub fn chairmen(http: Rc<dyn HttpClient>, context_path: &str) -> RemoteLookup<ChairmanRef> {
    RemoteLookup::new(http, context_path, "/chairmen/search")
}

/// Search for a select outside the cascade. Failures are logged and shown
/// under `error_key`.
pub fn unscoped_search(
    lookup: Rc<dyn Lookup>,
    notifier: NotificationBridge,
    error_key: &'static str,
) -> SearchFn {
    Rc::new(move |term: String| {
        let search = lookup.search(None, term);
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

async fn fetch_options<T>(http: Rc<dyn HttpClient>, url: String) -> Result<Vec<SelectOption>, ApiError>
where
    T: DeserializeOwned + AsSelectOption,
{
    let items: Vec<T> = get_json(http.as_ref(), url).await?;
    Ok(items.iter().map(AsSelectOption::to_option).collect())
}

impl<T> Lookup for RemoteLookup<T>
where
    T: DeserializeOwned + AsSelectOption + 'static,
{
    fn search(
        &self,
        parent_id: Option<String>,
        term: String,
    ) -> LocalBoxFuture<'static, Result<Vec<SelectOption>, ApiError>> {
        let url = self.search_url(parent_id.as_deref(), &term);
        fetch_options::<T>(self.http.clone(), url).boxed_local()
    }

    fn children(
        &self,
        parent_id: String,
    ) -> LocalBoxFuture<'static, Result<Vec<SelectOption>, ApiError>> {
        match self.children_url(&parent_id) {
            Some(url) => fetch_options::<T>(self.http.clone(), url).boxed_local(),
            None => self.search(Some(parent_id), String::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_utils::{ApiRequest, ApiResponse};

    struct NoHttp;

    impl HttpClient for NoHttp {
        fn send(&self, _: ApiRequest) -> LocalBoxFuture<'static, Result<ApiResponse, ApiError>> {
            futures::future::ready(Err(ApiError::Transport("offline".into()))).boxed_local()
        }
    }

    #[test]
    fn test_search_url_carries_parent_and_term() {
        let lookup = streets(Rc::new(NoHttp), "/app");
        assert_eq!(
            lookup.search_url(Some("c1"), "Шев"),
            "/app/streets/search?cityId=c1&q=%D0%A8%D0%B5%D0%B2&page=1"
        );
        assert_eq!(
            lookup.children_url("c1").as_deref(),
            Some("/app/streets/getByCity/c1")
        );
    }

    #[test]
    fn test_root_search_has_no_parent_param() {
        let lookup = cities(Rc::new(NoHttp), "");
        assert_eq!(lookup.search_url(None, ""), "/cities/search?q=&page=1");
        assert_eq!(lookup.children_url("x"), None);
    }

    #[test]
    fn test_house_lookup_scoped_by_street() {
        let lookup = houses(Rc::new(NoHttp), "");
        assert_eq!(lookup.search_url(Some("s1"), "1"), "/houses/search?streetId=s1&q=1&page=1");
        assert_eq!(lookup.children_url("s1").as_deref(), Some("/houses/getByStreet/s1"));
    }

    #[test]
    fn test_house_option_text_fallback() {
        let house: HouseRef = serde_json::from_str(r#"{"id": 3}"#).unwrap();
        assert_eq!(house.to_option(), SelectOption::new("3", HOUSE_NUMBER_MISSING));
    }

    #[test]
    fn test_chairman_search_is_unscoped() {
        let lookup = chairmen(Rc::new(NoHttp), "/app");
        assert_eq!(lookup.search_url(None, "Pe"), "/app/chairmen/search?q=Pe&page=1");
        assert_eq!(lookup.children_url("x"), None);
    }

    #[test]
    fn test_unscoped_search_reports_failures() {
        let (notifier, toasts) = crate::shared::record_form::testing::echo_notifier();
        let search = unscoped_search(
            Rc::new(chairmen(Rc::new(NoHttp), "")),
            notifier,
            "houses.errors.searchFailed",
        );

        let result = futures::executor::block_on(search("Pe".into()));

        assert!(result.is_err());
        assert_eq!(toasts.messages(), vec!["houses.errors.searchFailed"]);
    }
}
