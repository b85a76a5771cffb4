use contracts::shared::cascade::{facilities_in_city, visible_facilities};
use contracts::shared::filters::OrderType;
use contracts::shared::i18n::MessageKey;
use leptos::prelude::*;
use thaw::*;

use super::state::PurchaseOrderListState;
use crate::shared::components::ui::Select;
use crate::shared::i18n::use_i18n;
use crate::shared::reference_data::use_reference_data;

/// Secondary actions that only acknowledge the click.
const PLAIN_ACTIONS: [MessageKey; 4] = [
    MessageKey::ActionPrintPo,
    MessageKey::ActionPrintGrn,
    MessageKey::ActionGenerateInvoice,
    MessageKey::ActionAcknowledgeCopy,
];

#[component]
pub fn PurchaseOrderFilters(
    state: RwSignal<PurchaseOrderListState>,
    on_fetch: Callback<()>,
    on_export: Callback<()>,
    on_action: Callback<MessageKey>,
) -> impl IntoView {
    let i18n = use_i18n();
    let reference = use_reference_data();

    // City

    let city_options = Signal::derive(move || {
        reference
            .cities
            .with(|s| s.items())
            .into_iter()
            .map(|c| (c.name.clone(), c.name))
            .collect::<Vec<_>>()
    });
    let city_blocked = Signal::derive(move || reference.cities.with(|s| s.is_loading() || s.is_failed()));
    let city_placeholder = Signal::derive(move || {
        reference.cities.with(|s| {
            if s.is_loading() {
                Some(i18n.t(MessageKey::LoadingCities).to_string())
            } else if s.is_failed() {
                Some(i18n.t(MessageKey::CitiesError).to_string())
            } else {
                None
            }
        })
    });
    let on_city_change = Callback::new(move |city: String| {
        let facilities = reference.facilities.with_untracked(|s| s.items());
        state.update(|s| s.filters.select_city(&city, &facilities));
    });

    // Facility

    let city_has_facilities = Signal::derive(move || {
        let city = state.with(|s| s.filters.city.clone());
        reference
            .facilities
            .with(|s| !facilities_in_city(&s.items(), &city).is_empty())
    });
    let facility_options = Signal::derive(move || {
        let (city, search) = state.with(|s| (s.filters.city.clone(), s.facility_search.clone()));
        let inactive = i18n.t(MessageKey::Inactive);
        reference.facilities.with(|s| {
            let items = s.items();
            visible_facilities(&items, &city, &search)
                .into_iter()
                .map(|f| {
                    let label = if f.is_active() {
                        f.name.clone()
                    } else {
                        format!("{} {}", f.name, inactive)
                    };
                    (f.name.clone(), label)
                })
                .collect::<Vec<_>>()
        })
    });
    let facility_blocked = Signal::derive(move || {
        reference.facilities.with(|s| s.is_loading() || s.is_failed()) || !city_has_facilities.get()
    });
    let facility_placeholder = Signal::derive(move || {
        reference.facilities.with(|s| {
            if s.is_loading() {
                Some(i18n.t(MessageKey::LoadingFacilities).to_string())
            } else if s.is_failed() {
                Some(i18n.t(MessageKey::FacilitiesError).to_string())
            } else if !city_has_facilities.get() {
                Some(i18n.t(MessageKey::NoFacilitiesForCity).to_string())
            } else {
                None
            }
        })
    });
    let on_facility_change = Callback::new(move |name: String| {
        let facilities = reference.facilities.with_untracked(|s| s.items());
        state.update(|s| {
            s.filters.select_facility(&name, &facilities);
        });
    });

    // Order type

    let order_type_options = Signal::derive(move || {
        OrderType::all()
            .into_iter()
            .map(|t| (t.as_str().to_string(), i18n.t(t.label_key()).to_string()))
            .collect::<Vec<_>>()
    });
    let on_order_type_change = Callback::new(move |tag: String| {
        if let Some(order_type) = OrderType::from_tag(&tag) {
            state.update(|s| s.filters.order_type = order_type);
        }
    });

    view! {
        <div class="filter-panel">
            <div class="filter-panel__grid">
                <Select
                    id="city-select".to_string()
                    label=Signal::derive(move || i18n.t(MessageKey::FilterCity).to_string())
                    value=Signal::derive(move || state.with(|s| s.filters.city.clone()))
                    on_change=on_city_change
                    options=city_options
                    disabled=city_blocked
                    placeholder=city_placeholder
                />

                <div class="form__group">
                    <Select
                        id="facility-select".to_string()
                        label=Signal::derive(move || i18n.t(MessageKey::FilterFacility).to_string())
                        value=Signal::derive(move || state.with(|s| s.filters.facility.clone()))
                        on_change=on_facility_change
                        options=facility_options
                        disabled=facility_blocked
                        placeholder=facility_placeholder
                    />
                    <input
                        type="search"
                        class="form__input form__input--compact"
                        aria-label=move || i18n.t(MessageKey::SearchFacility)
                        placeholder=move || i18n.t(MessageKey::SearchFacility)
                        prop:value=move || state.with(|s| s.facility_search.clone())
                        on:input=move |ev| {
                            let search = event_target_value(&ev);
                            state.update(|s| s.facility_search = search);
                        }
                        disabled=move || facility_blocked.get()
                    />
                </div>

                <Select
                    id="order-type-select".to_string()
                    label=Signal::derive(move || i18n.t(MessageKey::FilterOrderType).to_string())
                    value=Signal::derive(move || state.with(|s| s.filters.order_type.as_str().to_string()))
                    on_change=on_order_type_change
                    options=order_type_options
                />

                <div class="form__group">
                    <label class="form__label" for="vendor-input">
                        {move || i18n.t(MessageKey::FilterVendor)}
                    </label>
                    <input
                        type="text"
                        id="vendor-input"
                        class="form__input"
                        placeholder=move || i18n.t(MessageKey::SearchVendor)
                        prop:value=move || state.with(|s| s.filters.vendor.clone())
                        on:input=move |ev| {
                            let vendor = event_target_value(&ev);
                            state.update(|s| s.filters.vendor = vendor);
                        }
                    />
                </div>

                <div class="form__group">
                    <label class="form__label" for="date-input">
                        {move || i18n.t(MessageKey::FilterDate)}
                    </label>
                    <input
                        type="datetime-local"
                        id="date-input"
                        class="form__input"
                        prop:value=move || state.with(|s| s.filters.date.clone())
                        on:input=move |ev| {
                            let date = event_target_value(&ev);
                            state.update(|s| s.filters.date = date);
                        }
                    />
                </div>
            </div>

            <Flex gap=FlexGap::Small class="filter-panel__actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| on_fetch.run(())
                    disabled=Signal::derive(move || state.with(|s| s.is_loading))
                >
                    {move || i18n.t(MessageKey::ActionFetch)}
                </Button>
                {PLAIN_ACTIONS
                    .into_iter()
                    .map(|key| view! {
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| on_action.run(key)
                        >
                            {move || i18n.t(key)}
                        </Button>
                    })
                    .collect_view()}
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_export.run(())
                >
                    {move || i18n.t(MessageKey::ActionExportCsv)}
                </Button>
            </Flex>
        </div>
    }
}
