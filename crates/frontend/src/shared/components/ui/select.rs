use leptos::prelude::*;

/// Native select over a fixed option list, with an empty placeholder entry
#[component]
pub fn OptionSelect(
    /// Label text
    #[prop(into)]
    label: Signal<String>,
    /// Bound value; empty string for "nothing selected"
    value: RwSignal<String>,
    /// Options: Vec of (value, label) tuples
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Text of the empty entry
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Error shown under the select
    #[prop(optional, into)]
    error: MaybeProp<String>,
    /// ID for the select element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();

    view! {
        <div class="form__group">
            <label class="form__label" for=select_id>
                {move || label.get()}
            </label>
            <select
                id=select_id
                class="form__select"
                class:is-invalid=move || error.get().is_some()
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                <option value="" selected=move || value.get().is_empty()>
                    {move || placeholder.get().unwrap_or_default()}
                </option>
                <For
                    each=move || options.get()
                    key=|(val, label)| (val.clone(), label.clone())
                    children=move |(val, label)| {
                        let val_clone = val.clone();
                        let is_selected = move || value.get() == val_clone;
                        view! {
                            <option value=val selected=is_selected>
                                {label}
                            </option>
                        }
                    }
                />
            </select>
            {move || error.get().map(|e| view! { <div class="form__error">{e}</div> })}
        </div>
    }
}
