use super::model::HOUSE_META;
use super::view_model::HouseDetailsVm;
use crate::shared::components::search_select::SearchSelect;
use crate::shared::components::ui::{OptionSelect, TextField};
use crate::shared::i18n::{use_i18n, Translator};
use crate::shared::notify::ToastSink;
use crate::shared::platform::BrowserNavigator;
use crate::shared::record_form::{FormPage, PageServices};
use crate::shared::toast::ToastService;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;

/// House editor for `/houses/new` and `/houses/edit/{id}`
#[component]
pub fn HouseDetails(path: String) -> impl IntoView {
    let i18n = use_i18n();
    let toasts: Option<Rc<dyn ToastSink>> =
        use_context::<ToastService>().map(|t| Rc::new(t) as Rc<dyn ToastSink>);
    let services = PageServices::browser(toasts, Some(Rc::new(i18n) as Rc<dyn Translator>));

    let vm = HouseDetailsVm::new(services.config.search_debounce);
    let page = FormPage::new(Rc::new(vm), &services, &path);
    let mode = page.mode().clone();
    let page = StoredValue::new_local(page);

    let starting = page.get_value();
    spawn_local(async move { starting.start().await });

    let title = {
        let mode = mode.clone();
        move || {
            i18n.lang.track();
            let name = vm.record_name.get();
            HOUSE_META.page_title(&mode, name.as_deref(), &i18n)
        }
    };
    let submit_label = move || {
        if vm.saving.get() {
            i18n.t("common.saving")
        } else if mode.is_edit() {
            i18n.t("common.save")
        } else {
            i18n.t("common.create")
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let page = page.get_value();
        spawn_local(async move {
            let outcome = page.submit().await;
            log::debug!("House form submitted: {:?}", outcome);
        });
    };

    let label = move |key: &'static str| Signal::derive(move || i18n.t(key));

    view! {
        <div class="details-container house-details">
            <div class="details-header">
                <h3>{title}</h3>
            </div>

            <form class="details-form" novalidate=true on:submit=on_submit>
                <div class="form__row">
                    <TextField
                        id="houseNumber"
                        label=label("houses.fields.houseNumber")
                        value=vm.house_number
                        error=vm.error_for("houseNumber", i18n)
                        required=true
                    />
                    <OptionSelect
                        id="status"
                        label=label("houses.fields.status")
                        value=vm.status
                        options=vm.status_options(i18n)
                        placeholder=label("houses.placeholders.selectStatus")
                        error=vm.error_for("status", i18n)
                    />
                </div>

                <div class="form__row">
                    <SearchSelect
                        id="cityId"
                        select=vm.city
                        label=label("houses.fields.city")
                        error=vm.error_for("cityId", i18n)
                    />
                    <SearchSelect
                        id="streetId"
                        select=vm.street
                        label=label("houses.fields.street")
                        error=vm.error_for("streetId", i18n)
                    />
                </div>

                <div class="form__row">
                    <SearchSelect
                        id="chairmanId"
                        select=vm.chairman
                        label=label("houses.fields.chairman")
                        error=vm.error_for("chairmanId", i18n)
                    />
                </div>

                <div class="details-actions">
                    <button type="submit" class="btn btn-primary" disabled=move || vm.saving.get()>
                        {submit_label}
                    </button>
                    <button type="button" class="btn btn-secondary" on:click=move |_| BrowserNavigator::back()>
                        {move || i18n.t("common.cancel")}
                    </button>
                </div>
            </form>
        </div>
    }
}
