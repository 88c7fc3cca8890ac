use leptos::prelude::*;

/// Single-choice dropdown whose open/closed state is owned by the caller.
///
/// Clicking the toggle calls `on_toggle`; clicking an option calls
/// `on_select`. The component never opens or closes itself.
#[component]
pub fn Select(
    /// Currently selected option
    #[prop(into)]
    value: Signal<String>,
    /// Options in display order
    #[prop(into)]
    options: Signal<Vec<String>>,
    /// Whether the option list is shown
    #[prop(into)]
    is_open: Signal<bool>,
    /// Toggle button clicked
    on_toggle: Callback<()>,
    /// Option clicked
    on_select: Callback<String>,
    /// ID for the toggle button
    #[prop(optional, into)]
    toggle_id: MaybeProp<String>,
    /// Accessible name of the list
    #[prop(optional, into)]
    aria_label: MaybeProp<String>,
) -> impl IntoView {
    let button_id = move || toggle_id.get().unwrap_or_default();
    let list_label = move || aria_label.get().unwrap_or_default();

    view! {
        <div class="form__select" class:form__select--open=move || is_open.get()>
            <button
                id=button_id
                type="button"
                class="form__select-toggle"
                aria-haspopup="listbox"
                aria-expanded=move || if is_open.get() { "true" } else { "false" }
                on:click=move |_| on_toggle.run(())
            >
                <span class="form__select-value">{move || value.get()}</span>
                <span class="form__select-arrow" aria-hidden="true">"▾"</span>
            </button>
            <Show when=move || is_open.get()>
                <ul class="form__select-menu" role="listbox" aria-label=list_label>
                    <For
                        each=move || options.get()
                        key=|option| option.clone()
                        children=move |option| {
                            let option_for_class = option.clone();
                            let option_for_aria = option.clone();
                            let option_for_click = option.clone();
                            let is_selected = move || value.get() == option_for_class;
                            let aria_selected = move || {
                                if value.get() == option_for_aria { "true" } else { "false" }
                            };
                            view! {
                                <li
                                    role="option"
                                    class="form__select-option"
                                    class:form__select-option--selected=is_selected
                                    aria-selected=aria_selected
                                    on:click=move |_| on_select.run(option_for_click.clone())
                                >
                                    {option}
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}
