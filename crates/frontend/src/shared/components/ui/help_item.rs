use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// "?" marker next to a field label; the help text shows as a tooltip
#[component]
pub fn HelpItem(
    /// Message key of the help text
    #[prop(into)]
    help_text: String,
    /// Label of the field the help belongs to, for screen readers
    #[prop(into)]
    for_label: String,
    /// ID of the described field
    #[prop(into)]
    for_id: String,
) -> impl IntoView {
    let i18n = use_i18n();
    let text = i18n.t(&help_text);
    let aria = format!("Help for {}", for_label);

    view! {
        <span
            class="help-item"
            role="note"
            title=text
            aria-label=aria
            aria-describedby=for_id
        >
            {icon("help")}
        </span>
    }
}
