use contracts::shared::i18n::MessageKey;
use leptos::prelude::*;

use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;

/// Previous / numbered pages / next.
#[component]
pub fn PaginationControls(
    /// Current page (0-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages (at least 1)
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <nav class="pagination-controls" aria-label="pagination">
            <button
                type="button"
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 0 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || current_page.get() == 0
            >
                {icon("chevron-left")}
                <span>{move || i18n.t(MessageKey::PaginationPrevious)}</span>
            </button>
            {move || {
                let current = current_page.get();
                (0..total_pages.get().max(1))
                    .map(|page| {
                        view! {
                            <button
                                type="button"
                                class=if page == current { "pagination-link pagination-link--active" } else { "pagination-link" }
                                aria-current=if page == current { Some("page") } else { None }
                                on:click=move |_| on_page_change.run(page)
                            >
                                {page + 1}
                            </button>
                        }
                    })
                    .collect_view()
            }}
            <button
                type="button"
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page + 1 < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=move || current_page.get() + 1 >= total_pages.get()
            >
                <span>{move || i18n.t(MessageKey::PaginationNext)}</span>
                {icon("chevron-right")}
            </button>
        </nav>
    }
}
