//! Sortable table header cell
//!
//! ```ignore
//! <SortableHeaderCell
//!     label=Signal::derive(move || i18n.t(MessageKey::TableQtyTarget).to_string())
//!     sort_field="qty_target"
//!     current_sort_field=Signal::derive(move || state.with(|s| s.sort_field.clone()))
//!     sort_ascending=Signal::derive(move || state.with(|s| s.sort_ascending))
//!     on_sort=Callback::new(move |field| toggle_sort(field))
//! />
//! ```

use contracts::shared::list::sort_indicator;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SortableHeaderCell(
    #[prop(into)]
    label: Signal<String>,

    /// Column key passed to `on_sort`
    #[prop(into)]
    sort_field: String,

    #[prop(into)]
    current_sort_field: Signal<String>,

    #[prop(into)]
    sort_ascending: Signal<bool>,

    on_sort: Callback<String>,

    #[prop(optional, default = 100.0)]
    min_width: f64,
) -> impl IntoView {
    let sort_field_for_click = sort_field.clone();
    let sort_field_for_indicator = sort_field.clone();
    let sort_field_for_aria = sort_field;

    let aria_sort = move || {
        if current_sort_field.get() != sort_field_for_aria {
            "none"
        } else if sort_ascending.get() {
            "ascending"
        } else {
            "descending"
        }
    };

    view! {
        <TableHeaderCell resizable=false min_width=min_width attr:aria-sort=aria_sort>
            <div
                class="table__sortable-header"
                style="cursor: pointer;"
                on:click=move |_| on_sort.run(sort_field_for_click.clone())
            >
                {move || label.get()}
                <span class="table__sort-indicator">
                    {move || {
                        sort_indicator(
                            &current_sort_field.get(),
                            &sort_field_for_indicator,
                            sort_ascending.get(),
                        )
                    }}
                </span>
            </div>
        </TableHeaderCell>
    }
}
