use super::model::USER_META;
use super::view_model::UserDetailsVm;
use crate::shared::components::search_select::SearchSelect;
use crate::shared::components::ui::{OptionSelect, TextField};
use crate::shared::i18n::{use_i18n, Translator};
use crate::shared::notify::ToastSink;
use crate::shared::platform::BrowserNavigator;
use crate::shared::record_form::{FormPage, PageServices};
use crate::shared::toast::ToastService;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;

/// User editor for `/users/new` and `/users/edit/{id}`
#[component]
pub fn UserDetails(path: String) -> impl IntoView {
    let i18n = use_i18n();
    let toasts: Option<Rc<dyn ToastSink>> =
        use_context::<ToastService>().map(|t| Rc::new(t) as Rc<dyn ToastSink>);
    let services = PageServices::browser(toasts, Some(Rc::new(i18n) as Rc<dyn Translator>));

    let vm = UserDetailsVm::new(services.config.as_ref().clone());
    let page = FormPage::new(Rc::new(vm), &services, &path);
    let mode = page.mode().clone();
    let notifier = StoredValue::new_local(services.notifier.clone());
    let page = StoredValue::new_local(page);

    let starting = page.get_value();
    spawn_local(async move { starting.start().await });

    let title = {
        let mode = mode.clone();
        move || {
            i18n.lang.track();
            let name = vm.record_name.get();
            USER_META.page_title(&mode, name.as_deref(), &i18n)
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

    let photo_input: NodeRef<html::Input> = NodeRef::new();
    let on_photo = move |_| {
        let Some(input) = photo_input.get() else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        let accepted = notifier.with_value(|n| vm.choose_photo(file, n));
        if !accepted {
            input.set_value("");
        }
    };
    let on_photo_reset = move |_| {
        vm.reset_photo();
        if let Some(input) = photo_input.get() {
            input.set_value("");
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let page = page.get_value();
        spawn_local(async move {
            let outcome = page.submit().await;
            log::debug!("User form submitted: {:?}", outcome);
        });
    };

    let photo_error = vm.error_for("photoFile", i18n);
    let label = move |key: &'static str| Signal::derive(move || i18n.t(key));

    view! {
        <div class="details-container user-details">
            <div class="details-header">
                <h3>{title}</h3>
            </div>

            <form class="details-form" novalidate=true on:submit=on_submit>
                <div class="user-photo">
                    <img class="user-photo__img" src=move || vm.avatar_src.get() alt="avatar" />
                    <div class="user-photo__actions">
                        <label class="btn btn-primary" for="photoFile">
                            {move || i18n.t("users.photo.upload")}
                        </label>
                        <input
                            id="photoFile"
                            type="file"
                            accept="image/png, image/jpeg, image/gif"
                            hidden=true
                            node_ref=photo_input
                            on:change=on_photo
                        />
                        <button type="button" class="btn btn-secondary" on:click=on_photo_reset>
                            {move || i18n.t("users.photo.reset")}
                        </button>
                        <div class="form__hint">{move || i18n.t("users.photo.hint")}</div>
                        {move || photo_error.get().map(|e| view! { <div class="form__error">{e}</div> })}
                    </div>
                </div>

                <div class="form__row">
                    <TextField
                        id="lastName"
                        label=label("users.fields.lastName")
                        value=vm.last_name
                        error=vm.error_for("lastName", i18n)
                        required=true
                    />
                    <TextField
                        id="firstName"
                        label=label("users.fields.firstName")
                        value=vm.first_name
                        error=vm.error_for("firstName", i18n)
                        required=true
                    />
                    <TextField
                        id="middleName"
                        label=label("users.fields.middleName")
                        value=vm.middle_name
                        error=vm.error_for("middleName", i18n)
                    />
                </div>

                <div class="form__row">
                    <TextField
                        id="phone"
                        input_type="tel"
                        label=label("users.fields.phone")
                        value=vm.phone
                        error=vm.error_for("phone", i18n)
                    />
                    <TextField
                        id="email"
                        input_type="email"
                        label=label("users.fields.email")
                        value=vm.email
                        error=vm.error_for("email", i18n)
                        required=true
                    />
                    <TextField
                        id="login"
                        label=label("users.fields.login")
                        value=vm.login
                        error=vm.error_for("login", i18n)
                        required=true
                    />
                </div>

                <div class="form__row">
                    <SearchSelect
                        id="cityId"
                        select=vm.city
                        label=label("users.fields.city")
                        error=vm.error_for("cityId", i18n)
                    />
                    <SearchSelect
                        id="addressId"
                        select=vm.street
                        label=label("users.fields.street")
                        error=vm.error_for("addressId", i18n)
                    />
                    <SearchSelect
                        id="houseId"
                        select=vm.house
                        label=label("users.fields.house")
                        error=vm.error_for("houseId", i18n)
                    />
                </div>

                <div class="form__row">
                    <TextField
                        id="apartmentNumber"
                        label=label("users.fields.apartmentNumber")
                        value=vm.apartment_number
                        error=vm.error_for("apartmentNumber", i18n)
                    />
                    <TextField
                        id="apartmentArea"
                        input_type="number"
                        label=label("users.fields.apartmentArea")
                        value=vm.apartment_area
                        error=vm.error_for("apartmentArea", i18n)
                    />
                    <TextField
                        id="accountNumber"
                        label=label("users.fields.accountNumber")
                        value=vm.account_number
                        error=vm.error_for("accountNumber", i18n)
                    />
                </div>

                <div class="form__row">
                    <OptionSelect
                        id="status"
                        label=label("users.fields.status")
                        value=vm.status
                        options=vm.status_options(i18n)
                        placeholder=label("users.placeholders.selectStatus")
                        error=vm.error_for("status", i18n)
                    />
                    <TextField
                        id="password"
                        input_type="password"
                        autocomplete="new-password"
                        label=label("users.fields.password")
                        value=vm.password
                        error=vm.error_for("password", i18n)
                    />
                    <TextField
                        id="repeatPassword"
                        input_type="password"
                        autocomplete="new-password"
                        label=label("users.fields.repeatPassword")
                        value=vm.repeat_password
                        error=vm.error_for("confirmPassword", i18n)
                    />
                </div>

                <div class="details-actions">
                    <button type="submit" class="btn btn-primary" disabled=move || vm.saving.get()>
                        <Show when=move || vm.saving.get()>
                            <span class="btn__spinner"></span>
                        </Show>
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
