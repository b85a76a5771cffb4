//! Edit-order and create-GRN dialogs.
//!
//! Neither dialog persists anything: confirming shows a notice and closes.

use contracts::domain::a003_purchase_order::row::{format_quantity, PurchaseOrderRow};
use contracts::shared::format::to_datetime_local;
use contracts::shared::i18n::MessageKey;
use leptos::prelude::*;
use thaw::*;

use crate::shared::i18n::use_i18n;
use crate::shared::modal::Modal;
use crate::shared::notice::use_notices;

#[component]
fn ModalField(
    #[prop(into)] id: String,
    #[prop(into)] label: Signal<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label" for=id>{move || label.get()}</label>
            {children()}
        </div>
    }
}

#[component]
pub fn EditOrderModal(row: PurchaseOrderRow, on_close: Callback<()>) -> impl IntoView {
    let i18n = use_i18n();
    let notices = use_notices();

    let vendor = RwSignal::new(row.vendor_name.clone());
    let quantity = RwSignal::new(format_quantity(row.qty_target));
    let delivery = RwSignal::new(row.target_delivery_ms.map(to_datetime_local).unwrap_or_default());
    let address = RwSignal::new(row.address.clone());

    let po_id = row.po_id.clone();
    let description = Signal::derive(move || format!("{} #{}", i18n.t(MessageKey::EditOrderDesc), po_id));

    let save = move |_: leptos::ev::MouseEvent| {
        log::info!(
            "edit order {}: vendor={}, qty={}, delivery={}",
            row.po_id,
            vendor.get_untracked(),
            quantity.get_untracked(),
            delivery.get_untracked()
        );
        notices.show(i18n.t(MessageKey::OrderUpdated), i18n.t(MessageKey::OrderUpdatedDesc));
        on_close.run(());
    };

    view! {
        <Modal
            title=Signal::derive(move || i18n.t(MessageKey::ActionEditOrder).to_string())
            description=description
            on_close=on_close
            footer=std::sync::Arc::new(move || view! {
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    {move || i18n.t(MessageKey::ActionCancel)}
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=save.clone()>
                    {move || i18n.t(MessageKey::ActionSave)}
                </Button>
            }.into_any())
        >
            <ModalField id="edit-vendor" label=Signal::derive(move || i18n.t(MessageKey::FilterVendor).to_string())>
                <Input value=vendor attr:id="edit-vendor" />
            </ModalField>
            <ModalField id="edit-qty" label=Signal::derive(move || i18n.t(MessageKey::TableQtyTarget).to_string())>
                <Input value=quantity input_type=InputType::Number attr:id="edit-qty" />
            </ModalField>
            <ModalField id="edit-delivery" label=Signal::derive(move || i18n.t(MessageKey::TableTargetDelivery).to_string())>
                <input
                    type="datetime-local"
                    id="edit-delivery"
                    class="form__input"
                    prop:value=move || delivery.get()
                    on:input=move |ev| delivery.set(event_target_value(&ev))
                />
            </ModalField>
            <ModalField id="edit-address" label=Signal::derive(move || i18n.t(MessageKey::Address).to_string())>
                <Input value=address attr:id="edit-address" />
            </ModalField>
        </Modal>
    }
}

#[component]
pub fn CreateGrnModal(row: PurchaseOrderRow, on_close: Callback<()>) -> impl IntoView {
    let i18n = use_i18n();
    let notices = use_notices();

    let received = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());

    let po_id = row.po_id.clone();
    let description = Signal::derive(move || format!("{} #{}", i18n.t(MessageKey::CreateGrnDesc), po_id));

    let create = move |_: leptos::ev::MouseEvent| {
        log::info!("create GRN for order {}: received={}", row.po_id, received.get_untracked());
        notices.show(i18n.t(MessageKey::GrnCreated), i18n.t(MessageKey::GrnCreatedDesc));
        on_close.run(());
    };

    view! {
        <Modal
            title=Signal::derive(move || i18n.t(MessageKey::ActionCreateGrn).to_string())
            description=description
            on_close=on_close
            footer=std::sync::Arc::new(move || view! {
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    {move || i18n.t(MessageKey::ActionCancel)}
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=create.clone()>
                    {move || i18n.t(MessageKey::ActionCreate)}
                </Button>
            }.into_any())
        >
            <ModalField id="grn-received" label=Signal::derive(move || i18n.t(MessageKey::ReceivedQty).to_string())>
                <Input value=received input_type=InputType::Number attr:id="grn-received" />
            </ModalField>
            <ModalField id="grn-notes" label=Signal::derive(move || i18n.t(MessageKey::Notes).to_string())>
                <textarea
                    id="grn-notes"
                    class="form__textarea"
                    rows=3
                    placeholder=move || i18n.t(MessageKey::NotesPlaceholder)
                    prop:value=move || notes.get()
                    on:input=move |ev| notes.set(event_target_value(&ev))
                />
            </ModalField>
        </Modal>
    }
}
