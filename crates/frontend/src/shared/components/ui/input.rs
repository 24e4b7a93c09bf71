use leptos::prelude::*;

/// Text input bound to a signal, with label and server error text
#[component]
pub fn TextField(
    /// Label text
    #[prop(into)]
    label: Signal<String>,
    /// Bound value
    value: RwSignal<String>,
    /// Error shown under the input; also marks it invalid
    #[prop(optional, into)]
    error: MaybeProp<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "password", "email", "tel", "number"
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Autocomplete attribute
    #[prop(optional, into)]
    autocomplete: MaybeProp<String>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let is_invalid = move || error.get().is_some();

    view! {
        <div class="form__group">
            <label class="form__label" for=input_id>
                {move || label.get()}
                {required.then(|| view! { <span class="form__required">" *"</span> })}
            </label>
            <input
                id=input_id
                class="form__input"
                class:is-invalid=is_invalid
                type=input_t
                prop:value=move || value.get()
                placeholder=move || placeholder.get().unwrap_or_default()
                autocomplete=move || autocomplete.get().unwrap_or_else(|| "off".to_string())
                required=required
                disabled=move || disabled.get().unwrap_or(false)
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            {move || error.get().map(|e| view! { <div class="form__error">{e}</div> })}
        </div>
    }
}
