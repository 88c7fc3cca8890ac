use crate::domain::a001_client_scope::store::ClientScopeStore;
use crate::routes::routes::Route;
use crate::shared::components::ui::PageHeader;
use crate::shared::config::ConsoleConfig;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_indicator, sort_list, SortState, Sortable};
use crate::shared::navigation::use_navigator;
use contracts::domain::a001_client_scope::ClientScope;
use leptos::prelude::*;
use std::cmp::Ordering;
use thaw::*;

#[derive(Clone, Debug, PartialEq)]
pub struct ClientScopeRow {
    pub id: String,
    pub name: String,
    pub protocol: String,
    pub gui_order: Option<u32>,
    pub description: String,
}

impl From<ClientScope> for ClientScopeRow {
    fn from(s: ClientScope) -> Self {
        let gui_order = s.typed_attributes().gui_order_value();
        Self {
            id: s.id.unwrap_or_default(),
            name: s.name,
            protocol: s.protocol.unwrap_or_else(|| "-".to_string()),
            gui_order,
            description: s.description.unwrap_or_default(),
        }
    }
}

impl Sortable for ClientScopeRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        let by_name = || self.name.to_lowercase().cmp(&other.name.to_lowercase());
        match field {
            "name" => by_name(),
            "protocol" => self.protocol.cmp(&other.protocol).then_with(by_name),
            // Unset display order sorts after every number
            "gui_order" => match (self.gui_order, other.gui_order) {
                (Some(a), Some(b)) => a.cmp(&b),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
            .then_with(by_name),
            _ => Ordering::Equal,
        }
    }
}

#[component]
pub fn ClientScopeList() -> impl IntoView {
    let store = use_context::<ClientScopeStore>().expect("ClientScopeStore not found");
    let config = use_context::<ConsoleConfig>().expect("ConsoleConfig not found");
    let navigator = use_navigator();
    let i18n = use_i18n();

    let base = StoredValue::new(config.routes.client_scopes.clone());
    let sort = RwSignal::new(SortState::new("name"));

    let rows = move || {
        let mut rows: Vec<ClientScopeRow> = store.list().into_iter().map(Into::into).collect();
        sort.with(|s| sort_list(&mut rows, &s.field, s.ascending));
        rows
    };

    let open = move |id: Option<String>| {
        let path = Route::ClientScopeDetails { id }.to_path(&base.get_value());
        navigator.push(&path);
    };

    let header = move |field: &'static str, label: String| {
        view! {
            <th
                class="table__header-cell table__header-cell--sortable"
                on:click=move |_| sort.update(|s| s.toggle(field))
            >
                {label}
                <span class="table__sort-indicator">
                    {move || sort.with(|s| get_sort_indicator(&s.field, field, s.ascending))}
                </span>
            </th>
        }
    };

    view! {
        <div class="page">
            <PageHeader title=i18n.t("client-scopes:clientScopes")>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| open(None)
                >
                    {icon("plus")}
                    {format!(" {}", i18n.t("client-scopes:createClientScope"))}
                </Button>
            </PageHeader>

            <div class="page__content">
                <Show
                    when=move || !store.is_empty()
                    fallback=move || view! { <div class="empty-state">{i18n.t("client-scopes:emptyList")}</div> }
                >
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                {header("name", i18n.t("common:name"))}
                                {header("protocol", i18n.t("client-scopes:protocol"))}
                                {header("gui_order", i18n.t("client-scopes:guiOrder"))}
                                <th class="table__header-cell">{i18n.t("common:description")}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || rows().into_iter().map(|row| {
                                let id = row.id.clone();
                                view! {
                                    <tr class="table__row" on:click=move |_| open(Some(id.clone()))>
                                        <td class="table__cell table__cell--link">{row.name}</td>
                                        <td class="table__cell">{row.protocol}</td>
                                        <td class="table__cell">
                                            {row.gui_order.map(|o| o.to_string()).unwrap_or_default()}
                                        </td>
                                        <td class="table__cell">{row.description}</td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                </Show>
            </div>
        </div>
    }
}
