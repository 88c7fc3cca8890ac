use super::view_model::ScopeFormVm;
use crate::routes::routes::use_route_id;
use crate::shared::components::ui::{FormGroup, Select, Switch, TextInput};
use crate::shared::config::ConsoleConfig;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::navigation::use_navigator;
use crate::shared::providers::use_login_providers;
use contracts::domain::a001_client_scope::attributes::{
    CONSENT_SCREEN_TEXT, DISPLAY_ON_CONSENT_SCREEN, GUI_ORDER, INCLUDE_IN_TOKEN_SCOPE,
};
use contracts::domain::a001_client_scope::form::{
    attribute_field, FormMode, DESCRIPTION, LISTING_PATH, NAME, PROTOCOL,
};
use contracts::domain::a001_client_scope::ClientScope;
use leptos::prelude::*;

/// Create/edit form of a client scope.
///
/// The protocol selector is only rendered when the route carries no id.
/// Persisting is up to `save`; cancel goes back to the listing.
#[component]
pub fn ScopeForm(
    #[prop(into)] client_scope: Signal<ClientScope>,
    save: Callback<ClientScope>,
) -> impl IntoView {
    let i18n = use_i18n();
    let navigator = use_navigator();
    let listing_path = use_context::<ConsoleConfig>()
        .map(|c| c.routes.client_scopes)
        .unwrap_or_else(|| LISTING_PATH.to_string());

    let mode = FormMode::from_route_id(use_route_id());
    let vm = ScopeFormVm::new(mode, use_login_providers(), &listing_path);

    vm.initialize(&client_scope.get_untracked());
    Effect::new(move |_| {
        let scope = client_scope.get();
        vm.initialize(&scope);
    });

    let display_field = attribute_field(DISPLAY_ON_CONSENT_SCREEN);
    let consent_text_field = attribute_field(CONSENT_SCREEN_TEXT);
    let include_field = attribute_field(INCLUDE_IN_TOKEN_SCOPE);
    let gui_order_field = attribute_field(GUI_ORDER);

    let on = i18n.t("common:on");
    let off = i18n.t("common:off");
    let on_display = on.clone();
    let off_display = off.clone();

    let protocol_group = vm.shows_protocol().then(|| {
        view! {
            <FormGroup
                label=i18n.t("client-scopes:protocol")
                field_id="kc-protocol"
                help_text="client-scopes-help:protocol"
            >
                <Select
                    toggle_id="kc-protocol"
                    value=Signal::derive(move || vm.text(PROTOCOL))
                    options=Signal::derive(move || vm.providers())
                    is_open=Signal::derive(move || vm.is_protocol_open())
                    on_toggle=Callback::new(move |_| vm.toggle_protocol_select())
                    on_select=Callback::new(move |protocol| vm.select_protocol(protocol))
                    aria_label=i18n.t("client-scopes:selectEncryptionType")
                />
            </FormGroup>
        }
    });

    view! {
        <form
            class="form form--horizontal details-form"
            novalidate=true
            on:submit=move |ev| {
                ev.prevent_default();
                vm.submit_command(save);
            }
        >
            <FormGroup
                label=i18n.t("common:name")
                field_id="kc-name"
                help_text="client-scopes-help:name"
                required=true
                error=Signal::derive(move || vm.error_message(NAME, i18n))
            >
                <TextInput
                    id="kc-name"
                    name=NAME
                    value=Signal::derive(move || vm.text(NAME))
                    invalid=Signal::derive(move || vm.has_error(NAME))
                    on_input=Callback::new(move |v| vm.set_text(NAME, v))
                />
            </FormGroup>

            <FormGroup
                label=i18n.t("common:description")
                field_id="kc-description"
                help_text="client-scopes-help:description"
                error=Signal::derive(move || vm.error_message(DESCRIPTION, i18n))
            >
                <TextInput
                    id="kc-description"
                    name=DESCRIPTION
                    value=Signal::derive(move || vm.text(DESCRIPTION))
                    invalid=Signal::derive(move || vm.has_error(DESCRIPTION))
                    on_input=Callback::new(move |v| vm.set_text(DESCRIPTION, v))
                />
            </FormGroup>

            {protocol_group}

            <FormGroup
                label=i18n.t("client-scopes:displayOnConsentScreen")
                field_id="kc-display.on.consent.screen"
                help_text="client-scopes-help:displayOnConsentScreen"
                no_padding_top=true
            >
                <Switch
                    id="kc-display.on.consent.screen"
                    label=on_display
                    label_off=off_display
                    checked=Signal::derive({
                        let field = display_field.clone();
                        move || vm.flag(&field)
                    })
                    on_change=Callback::new({
                        let field = display_field.clone();
                        move |checked| vm.set_flag(&field, checked)
                    })
                />
            </FormGroup>

            <FormGroup
                label=i18n.t("client-scopes:consentScreenText")
                field_id="kc-consent-screen-text"
                help_text="client-scopes-help:consentScreenText"
            >
                <TextInput
                    id="kc-consent-screen-text"
                    name=consent_text_field.clone()
                    value=Signal::derive({
                        let field = consent_text_field.clone();
                        move || vm.text(&field)
                    })
                    on_input=Callback::new({
                        let field = consent_text_field.clone();
                        move |v| vm.set_text(&field, v)
                    })
                />
            </FormGroup>

            <FormGroup
                label=i18n.t("client-scopes:includeInTokenScope")
                field_id="includeInTokenScope"
                help_text="client-scopes-help:includeInTokenScope"
                no_padding_top=true
            >
                <Switch
                    id="includeInTokenScope"
                    label=on
                    label_off=off
                    checked=Signal::derive({
                        let field = include_field.clone();
                        move || vm.flag(&field)
                    })
                    on_change=Callback::new({
                        let field = include_field.clone();
                        move |checked| vm.set_flag(&field, checked)
                    })
                />
            </FormGroup>

            <FormGroup
                label=i18n.t("client-scopes:guiOrder")
                field_id="kc-gui-order"
                help_text="client-scopes-help:guiOrder"
                error=Signal::derive({
                    let field = gui_order_field.clone();
                    move || vm.error_message(&field, i18n)
                })
            >
                <TextInput
                    id="kc-gui-order"
                    name=gui_order_field.clone()
                    value=Signal::derive({
                        let field = gui_order_field.clone();
                        move || vm.text(&field)
                    })
                    invalid=Signal::derive({
                        let field = gui_order_field.clone();
                        move || vm.has_error(&field)
                    })
                    on_input=Callback::new({
                        let field = gui_order_field.clone();
                        move |v| vm.set_text(&field, v)
                    })
                />
            </FormGroup>

            <div class="details-actions">
                <button type="submit" class="button button--primary">
                    {icon("save")}
                    {i18n.t("common:save")}
                </button>
                <button
                    type="button"
                    class="button button--ghost"
                    on:click=move |_| vm.cancel_command(&navigator)
                >
                    {icon("cancel")}
                    {i18n.t("common:cancel")}
                </button>
            </div>
        </form>
    }
}
