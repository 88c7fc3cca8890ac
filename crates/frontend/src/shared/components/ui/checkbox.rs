use leptos::prelude::*;

/// On/off switch, a checkbox styled as a toggle with a state label
#[component]
pub fn Switch(
    /// Checked state
    #[prop(into)]
    checked: Signal<bool>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<bool>>,
    /// Label shown while on
    #[prop(into)]
    label: String,
    /// Label shown while off
    #[prop(into)]
    label_off: String,
    /// ID for the checkbox element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let switch_id = move || id.get().unwrap_or_default();

    view! {
        <label class="form__switch" for=switch_id>
            <input
                id=switch_id
                type="checkbox"
                role="switch"
                class="form__switch-input"
                prop:checked=move || checked.get()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_checked(&ev));
                    }
                }
            />
            <span class="form__switch-toggle" aria-hidden="true"></span>
            <span class="form__switch-label">
                {move || if checked.get() { label.clone() } else { label_off.clone() }}
            </span>
        </label>
    }
}
