use contracts::domain::a003_purchase_order::row::{format_quantity, PaymentStatus, PurchaseOrderRow};
use contracts::shared::format::format_timestamp;
use contracts::shared::i18n::MessageKey;
use contracts::shared::list::{page_count, paginate, sort_rows, toggle_sort, PAGE_SIZE};
use leptos::prelude::*;
use thaw::*;

use super::state::PurchaseOrderListState;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::ui::Badge;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;

const TABLE_COLUMNS: usize = 9;

fn badge_variant(status: PaymentStatus) -> &'static str {
    match status {
        PaymentStatus::Paid => "success",
        PaymentStatus::Pending => "warning",
        PaymentStatus::NotPaid => "error",
    }
}

#[component]
pub fn PurchaseOrderTable(
    state: RwSignal<PurchaseOrderListState>,
    on_edit: Callback<PurchaseOrderRow>,
    on_create_grn: Callback<PurchaseOrderRow>,
    on_print: Callback<PurchaseOrderRow>,
) -> impl IntoView {
    let i18n = use_i18n();

    let sorted_rows = Memo::new(move |_| {
        state.with(|s| {
            let mut rows = s.rows.clone();
            if !s.sort_field.is_empty() {
                sort_rows(&mut rows, &s.sort_field, s.sort_ascending);
            }
            rows
        })
    });

    let total_pages = Signal::derive(move || sorted_rows.with(|rows| page_count(rows.len(), PAGE_SIZE)));
    let current_page = Signal::derive(move || state.with(|s| s.page));

    let page_rows = Memo::new(move |_| {
        let page = state.with(|s| s.page);
        sorted_rows.with(|rows| paginate(rows, page, PAGE_SIZE).to_vec())
    });

    let on_sort = Callback::new(move |field: String| {
        state.update(|s| {
            let (field, ascending) = toggle_sort(&s.sort_field, s.sort_ascending, &field);
            s.sort_field = field;
            s.sort_ascending = ascending;
        });
    });

    let on_page_change = Callback::new(move |page: usize| {
        state.update(|s| s.page = page);
    });

    let all_page_selected = move || {
        let selected = state.with(|s| s.selected_ids.clone());
        page_rows.with(|rows| !rows.is_empty() && rows.iter().all(|r| selected.contains(&r.id)))
    };

    let toggle_page_selection = move |_| {
        let select = !all_page_selected();
        let ids: Vec<i64> = page_rows.with_untracked(|rows| rows.iter().map(|r| r.id).collect());
        state.update(|s| {
            for id in ids {
                if select {
                    s.selected_ids.insert(id);
                } else {
                    s.selected_ids.remove(&id);
                }
            }
        });
    };

    let sort_field = Signal::derive(move || state.with(|s| s.sort_field.clone()));
    let sort_ascending = Signal::derive(move || state.with(|s| s.sort_ascending));
    let header = move |key: MessageKey| Signal::derive(move || i18n.t(key).to_string());

    view! {
        <div class="table-wrapper">
            <Table attr:class="po-table">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell min_width=60.0>
                            <input
                                type="checkbox"
                                class="table__checkbox"
                                aria-label=move || i18n.t(MessageKey::SelectAll)
                                prop:checked=all_page_selected
                                on:change=toggle_page_selection
                            />
                            <span class="table__row-no">{move || i18n.t(MessageKey::TableRowNo)}</span>
                        </TableHeaderCell>
                        <SortableHeaderCell
                            label=header(MessageKey::TablePoId)
                            sort_field="po_id"
                            current_sort_field=sort_field
                            sort_ascending=sort_ascending
                            on_sort=on_sort
                            min_width=90.0
                        />
                        <SortableHeaderCell
                            label=header(MessageKey::TableVendorName)
                            sort_field="vendor_name"
                            current_sort_field=sort_field
                            sort_ascending=sort_ascending
                            on_sort=on_sort
                            min_width=160.0
                        />
                        <SortableHeaderCell
                            label=header(MessageKey::TablePayment)
                            sort_field="payment_status"
                            current_sort_field=sort_field
                            sort_ascending=sort_ascending
                            on_sort=on_sort
                        />
                        <TableHeaderCell resizable=true min_width=220.0>
                            {move || i18n.t(MessageKey::TableOtherDetails)}
                        </TableHeaderCell>
                        <SortableHeaderCell
                            label=header(MessageKey::TableQtyTarget)
                            sort_field="qty_target"
                            current_sort_field=sort_field
                            sort_ascending=sort_ascending
                            on_sort=on_sort
                        />
                        <SortableHeaderCell
                            label=header(MessageKey::TableTargetDelivery)
                            sort_field="target_delivery"
                            current_sort_field=sort_field
                            sort_ascending=sort_ascending
                            on_sort=on_sort
                            min_width=140.0
                        />
                        <SortableHeaderCell
                            label=header(MessageKey::TableCreatedTime)
                            sort_field="created_time"
                            current_sort_field=sort_field
                            sort_ascending=sort_ascending
                            on_sort=on_sort
                            min_width=140.0
                        />
                        <TableHeaderCell min_width=200.0>
                            {move || i18n.t(MessageKey::TableActions)}
                        </TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        if state.with(|s| s.is_loading) {
                            return view! {
                                <TableRow>
                                    <TableCell attr:colspan=TABLE_COLUMNS.to_string()>
                                        <div class="table__status">{i18n.t(MessageKey::Loading)}</div>
                                    </TableCell>
                                </TableRow>
                            }
                            .into_any();
                        }

                        let rows = page_rows.get();
                        if rows.is_empty() {
                            return view! {
                                <TableRow>
                                    <TableCell attr:colspan=TABLE_COLUMNS.to_string()>
                                        <div class="table__status">{i18n.t(MessageKey::TableNoResults)}</div>
                                    </TableCell>
                                </TableRow>
                            }
                            .into_any();
                        }

                        let offset = current_page.get_untracked() * PAGE_SIZE;
                        rows.into_iter()
                            .enumerate()
                            .map(|(index, row)| {
                                let id = row.id;
                                let is_selected = move || state.with(|s| s.selected_ids.contains(&id));
                                let status = row.payment_status;
                                let (edit_row, grn_row, print_row) = (row.clone(), row.clone(), row.clone());

                                view! {
                                    <TableRow attr:class=move || if is_selected() { "table__row--selected" } else { "" }>
                                        <TableCell>
                                            <input
                                                type="checkbox"
                                                class="table__checkbox"
                                                aria-label=move || i18n.t(MessageKey::SelectRow)
                                                prop:checked=is_selected
                                                on:change=move |_| state.update(|s| {
                                                    if !s.selected_ids.remove(&id) {
                                                        s.selected_ids.insert(id);
                                                    }
                                                })
                                            />
                                            <span class="table__row-no">{offset + index + 1}</span>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{row.po_id.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{row.vendor_name.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <Badge variant=badge_variant(status).to_string()>
                                                {move || i18n.t(status.label_key())}
                                            </Badge>
                                        </TableCell>
                                        <TableCell>
                                            <div class="po-table__details">
                                                <span>{row.city.clone()}</span>
                                                <span>{row.facility.clone()}</span>
                                                <span class="po-table__address">{row.address.clone()}</span>
                                                <span class="po-table__user">{row.created_user.clone()}</span>
                                            </div>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span class="table__number">{format_quantity(row.qty_target)}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{format_timestamp(row.target_delivery_ms)}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{format_timestamp(row.created_time_ms)}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <div class="po-table__actions">
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Secondary
                                                    on_click=move |_| on_edit.run(edit_row.clone())
                                                >
                                                    {move || i18n.t(MessageKey::ActionEditOrder)}
                                                </Button>
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Secondary
                                                    on_click=move |_| on_create_grn.run(grn_row.clone())
                                                >
                                                    {move || i18n.t(MessageKey::ActionCreateGrn)}
                                                </Button>
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| on_print.run(print_row.clone())
                                                    attr:aria-label=move || i18n.t(MessageKey::ActionPrint)
                                                >
                                                    {icon("printer")}
                                                </Button>
                                            </div>
                                        </TableCell>
                                    </TableRow>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </TableBody>
            </Table>
        </div>

        <PaginationControls
            current_page=current_page
            total_pages=total_pages
            on_page_change=on_page_change
        />
    }
}
