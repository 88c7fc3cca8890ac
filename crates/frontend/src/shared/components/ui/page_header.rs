use leptos::prelude::*;

/// Header of a console page: title, optional subtitle and action buttons
#[component]
pub fn PageHeader(
    /// Page title (required)
    #[prop(into)]
    title: Signal<String>,

    /// Optional subtitle
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Action buttons (pass empty fragment if not needed)
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h2>{move || title.get()}</h2>
                {move || subtitle.get().map(|s| view! {
                    <div class="page__header-subtitle">{s}</div>
                })}
            </div>
            <div class="page__header-right">
                {children()}
            </div>
        </div>
    }
}
