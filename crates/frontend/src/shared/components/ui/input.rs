use leptos::prelude::*;

/// Single-line text input bound to a signal
#[component]
pub fn TextInput(
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Marks the input invalid (red border, `aria-invalid`)
    #[prop(optional, into)]
    invalid: Signal<bool>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// `name` attribute, the form field this input edits
    #[prop(optional, into)]
    name: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_name = move || name.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();

    view! {
        <input
            id=input_id
            name=input_name
            type="text"
            class="form__input"
            class:form__input--invalid=move || invalid.get()
            aria-invalid=move || if invalid.get() { "true" } else { "false" }
            prop:value=move || value.get()
            placeholder=input_placeholder
            required=required
            on:input=move |ev| {
                if let Some(handler) = on_input {
                    handler.run(event_target_value(&ev));
                }
            }
        />
    }
}
