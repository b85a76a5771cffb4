use std::collections::HashSet;

use contracts::domain::a003_purchase_order::row::PurchaseOrderRow;
use contracts::shared::filters::FilterSelection;
use contracts::shared::format::to_datetime_local;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct PurchaseOrderListState {
    pub filters: FilterSelection,
    /// Free-text search over the facility options.
    pub facility_search: String,
    /// Rows of the last completed fetch, vendor filter applied.
    pub rows: Vec<PurchaseOrderRow>,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub selected_ids: HashSet<i64>,
    pub page: usize,
    pub is_loading: bool,
    pub initial_fetch_done: bool,
    /// Bumped per fetch; only the latest fetch may write `rows`.
    pub generation: u64,
}

impl Default for PurchaseOrderListState {
    fn default() -> Self {
        // datetime-local inputs expect local wall-clock time
        let offset_ms = js_sys::Date::new_0().get_timezone_offset() * 60_000.0;
        let local_now = (js_sys::Date::now() - offset_ms) as i64;
        Self::with_date(to_datetime_local(local_now))
    }
}

impl PurchaseOrderListState {
    pub fn with_date(date: String) -> Self {
        Self {
            filters: FilterSelection::new(date),
            facility_search: String::new(),
            rows: Vec::new(),
            sort_field: String::new(),
            sort_ascending: true,
            selected_ids: HashSet::new(),
            page: 0,
            is_loading: false,
            initial_fetch_done: false,
            generation: 0,
        }
    }

    /// Start a fetch and return its generation.
    pub fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.is_loading = true;
        self.initial_fetch_done = true;
        self.generation
    }

    /// Apply a fetch result unless a newer fetch has started since.
    pub fn finish_fetch(&mut self, generation: u64, rows: Vec<PurchaseOrderRow>) {
        if generation != self.generation {
            return;
        }
        self.rows = rows;
        self.page = 0;
        self.selected_ids.clear();
        self.is_loading = false;
    }
}

pub fn create_state() -> RwSignal<PurchaseOrderListState> {
    RwSignal::new(PurchaseOrderListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_purchase_order::aggregate::PurchaseOrder;
    use contracts::domain::a003_purchase_order::row::rows_from_orders;

    fn rows(ids: &[i64]) -> Vec<PurchaseOrderRow> {
        let orders: Vec<PurchaseOrder> = ids
            .iter()
            .map(|&id| PurchaseOrder {
                id,
                ..PurchaseOrder::default()
            })
            .collect();
        rows_from_orders(&orders, "")
    }

    fn state() -> PurchaseOrderListState {
        PurchaseOrderListState::with_date("2024-01-20T10:30".into())
    }

    #[test]
    fn test_with_date() {
        let state = state();
        assert_eq!(state.filters.date, "2024-01-20T10:30");
        assert!(!state.is_loading);
        assert!(!state.initial_fetch_done);
        assert_eq!(state.generation, 0);
    }

    #[test]
    fn test_finish_fetch_applies_latest() {
        let mut state = state();
        state.page = 3;
        state.selected_ids.insert(99);

        let generation = state.begin_fetch();
        assert!(state.is_loading);
        assert!(state.initial_fetch_done);

        state.finish_fetch(generation, rows(&[1, 2]));
        assert!(!state.is_loading);
        assert_eq!(state.rows.len(), 2);
        assert_eq!(state.page, 0);
        assert!(state.selected_ids.is_empty());
    }

    #[test]
    fn test_stale_fetch_is_dropped() {
        let mut state = state();
        let first = state.begin_fetch();
        let second = state.begin_fetch();
        assert!(second > first);

        state.finish_fetch(first, rows(&[1]));
        assert!(state.rows.is_empty());
        assert!(state.is_loading);

        state.finish_fetch(second, rows(&[2, 3]));
        assert!(!state.is_loading);
        assert_eq!(state.rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2, 3]);

        // a late answer from the first fetch must not overwrite
        state.finish_fetch(first, rows(&[1]));
        assert_eq!(state.rows.len(), 2);
        assert!(!state.is_loading);
    }
}
