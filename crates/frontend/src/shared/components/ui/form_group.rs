use super::help_item::HelpItem;
use leptos::prelude::*;

/// Labelled row of a horizontal form with help marker and inline error
#[component]
pub fn FormGroup(
    /// Label text
    #[prop(into)]
    label: String,
    /// ID of the control inside the group
    #[prop(into)]
    field_id: String,
    /// Message key of the help text
    #[prop(optional, into)]
    help_text: Option<String>,
    /// Shows the required marker
    #[prop(optional)]
    required: bool,
    /// Message shown under the control while set
    #[prop(optional, into)]
    error: MaybeProp<String>,
    /// Drops the top padding for switches
    #[prop(optional)]
    no_padding_top: bool,
    children: Children,
) -> impl IntoView {
    let help = help_text.map(|key| {
        view! { <HelpItem help_text=key for_label=label.clone() for_id=field_id.clone() /> }
    });

    view! {
        <div
            class="form__group form__group--horizontal"
            class:form__group--invalid=move || error.get().is_some()
            class:form__group--no-padding-top=no_padding_top
        >
            <div class="form__label-column">
                <label class="form__label" for=field_id.clone()>
                    {label.clone()}
                    {required.then(|| view! { <span class="form__required" aria-hidden="true">" *"</span> })}
                </label>
                {help}
            </div>
            <div class="form__control-column">
                {children()}
                {move || error.get().map(|message| view! {
                    <div class="form__helper-text form__helper-text--error" aria-live="polite">
                        {message}
                    </div>
                })}
            </div>
        </div>
    }
}
