pub mod filters;
pub mod state;
pub mod table;

use chrono::DateTime;
use contracts::domain::a003_purchase_order::export::{export_file_name, to_csv};
use contracts::domain::a003_purchase_order::query::PurchaseOrderQuery;
use contracts::domain::a003_purchase_order::row::{rows_from_orders, PurchaseOrderRow};
use contracts::shared::i18n::MessageKey;
use contracts::shared::list::sort_rows;
use leptos::prelude::*;
use leptos::task::spawn_local;

use self::filters::PurchaseOrderFilters;
use self::state::create_state;
use self::table::PurchaseOrderTable;
use super::modals::{CreateGrnModal, EditOrderModal};
use crate::domain::a003_purchase_order::api::fetch_purchase_orders;
use crate::shared::export::download_csv;
use crate::shared::i18n::language_switcher::LanguageSwitcher;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::network::now_ms;
use crate::shared::notice::use_notices;
use crate::shared::reference_data::use_reference_data;
use crate::system::auth::context::use_session;

#[derive(Clone, Debug, PartialEq)]
enum OpenModal {
    EditOrder(PurchaseOrderRow),
    CreateGrn(PurchaseOrderRow),
}

#[component]
pub fn PurchaseOrderPage() -> impl IntoView {
    let i18n = use_i18n();
    let session = use_session();
    let notices = use_notices();
    let reference = use_reference_data();

    let state = create_state();
    let sku_search = RwSignal::new(String::new());
    let open_modal = RwSignal::new(None::<OpenModal>);

    let load_orders = move || {
        let (filters, generation) = state
            .try_update(|s| (s.filters.clone(), s.begin_fetch()))
            .unwrap_or_default();
        let cities = reference.cities.with_untracked(|s| s.items());
        let facilities = reference.facilities.with_untracked(|s| s.items());
        let query = PurchaseOrderQuery::resolve(&filters, &cities, &facilities);

        spawn_local(async move {
            let rows = match fetch_purchase_orders(&query).await {
                Ok(orders) => {
                    log::info!("fetched {} purchase orders", orders.len());
                    rows_from_orders(&orders, &filters.vendor)
                }
                Err(e) => {
                    log::error!("Purchase order API error: {}", e);
                    Vec::new()
                }
            };
            state.update(|s| s.finish_fetch(generation, rows));
        });
    };

    reference.ensure_loaded();

    // Default selection follows the reference lists; the first fetch waits
    // until both lists have settled.
    Effect::new(move |_| {
        let cities = reference.cities.get();
        let facilities = reference.facilities.get();
        state.update(|s| s.filters.apply_reference_data(&cities.items(), &facilities.items()));

        let ready = cities.is_settled() && facilities.is_settled();
        if ready && !state.with_untracked(|s| s.initial_fetch_done) {
            load_orders();
        }
    });

    let on_fetch = Callback::new(move |_| load_orders());

    let on_export = Callback::new(move |_| {
        let rows = state.with_untracked(|s| {
            let mut rows = s.rows.clone();
            if !s.sort_field.is_empty() {
                sort_rows(&mut rows, &s.sort_field, s.sort_ascending);
            }
            rows
        });
        if rows.is_empty() {
            notices.show(i18n.t(MessageKey::ExportEmpty), "");
            return;
        }

        let today = DateTime::from_timestamp_millis(now_ms() as i64)
            .map(|dt| dt.date_naive())
            .unwrap_or_default();
        let result = to_csv(&rows)
            .map_err(|e| e.to_string())
            .and_then(|content| download_csv(&content, &export_file_name(today)));
        match result {
            Ok(()) => notices.show(
                i18n.t(MessageKey::ExportSuccess),
                i18n.t(MessageKey::ExportSuccessDesc),
            ),
            Err(e) => log::error!("CSV export failed: {}", e),
        }
    });

    let on_action = Callback::new(move |key: MessageKey| {
        notices.show(
            i18n.t(MessageKey::ActionInitiated),
            format!("{} {}", i18n.t(key), i18n.t(MessageKey::ActionInitiatedDesc)),
        );
    });

    let on_edit = Callback::new(move |row: PurchaseOrderRow| open_modal.set(Some(OpenModal::EditOrder(row))));
    let on_create_grn = Callback::new(move |row: PurchaseOrderRow| open_modal.set(Some(OpenModal::CreateGrn(row))));
    let on_print = Callback::new(move |row: PurchaseOrderRow| {
        notices.show(
            i18n.t(MessageKey::PrintInitiated),
            format!("{} {}", i18n.t(MessageKey::PrintInitiatedDesc), row.po_id),
        );
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.print() {
                log::warn!("print failed: {:?}", e);
            }
        }
    });
    let close_modal = Callback::new(move |_| open_modal.set(None));

    view! {
        <div class="page po-page">
            <header class="page__header">
                <h1 class="page__title">{move || i18n.t(MessageKey::PoTitle)}</h1>
                <div class="page__header-actions">
                    <input
                        type="search"
                        class="form__input po-page__sku-search"
                        aria-label=move || i18n.t(MessageKey::SearchSku)
                        placeholder=move || i18n.t(MessageKey::SearchSku)
                        prop:value=move || sku_search.get()
                        on:input=move |ev| sku_search.set(event_target_value(&ev))
                    />
                    <button
                        type="button"
                        class="button button--secondary"
                        on:click=move |_| on_action.run(MessageKey::Feedback)
                    >
                        {icon("message")}
                        <span>{move || i18n.t(MessageKey::Feedback)}</span>
                    </button>
                    <span class="page__user">
                        {icon("user")}
                        <span>{move || session.header_identifier()}</span>
                    </span>
                    <LanguageSwitcher />
                </div>
            </header>

            <PurchaseOrderFilters
                state=state
                on_fetch=on_fetch
                on_export=on_export
                on_action=on_action
            />

            <PurchaseOrderTable
                state=state
                on_edit=on_edit
                on_create_grn=on_create_grn
                on_print=on_print
            />

            {move || match open_modal.get() {
                Some(OpenModal::EditOrder(row)) => view! {
                    <EditOrderModal row=row on_close=close_modal />
                }
                .into_any(),
                Some(OpenModal::CreateGrn(row)) => view! {
                    <CreateGrnModal row=row on_close=close_modal />
                }
                .into_any(),
                None => ().into_any(),
            }}
        </div>
    }
}
