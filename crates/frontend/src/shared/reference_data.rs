//! App-level cache of the city and facility lists.
//!
//! Both lists are fetched independently and concurrently; a failure of one
//! leaves the other untouched. Loaded lists are reused for
//! [`REFERENCE_TTL_MS`](contracts::shared::cache::REFERENCE_TTL_MS).

use contracts::domain::a001_city::aggregate::City;
use contracts::domain::a002_facility::aggregate::Facility;
use contracts::shared::cache::CachedList;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_city::api::fetch_cities;
use crate::domain::a002_facility::api::fetch_facilities;
use crate::shared::network::now_ms;

#[derive(Clone, Debug, PartialEq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Loaded(CachedList<T>),
    Failed(String),
}

impl<T: Clone> LoadState<T> {
    pub fn items(&self) -> Vec<T> {
        match self {
            LoadState::Loaded(list) => list.items.clone(),
            _ => Vec::new(),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LoadState::Failed(_))
    }

    /// Loaded or failed: no fetch outstanding and none pending.
    pub fn is_settled(&self) -> bool {
        matches!(self, LoadState::Loaded(_) | LoadState::Failed(_))
    }

    fn needs_fetch(&self, now: f64) -> bool {
        match self {
            LoadState::Idle | LoadState::Failed(_) => true,
            LoadState::Loading => false,
            LoadState::Loaded(list) => !list.is_fresh(now),
        }
    }
}

#[derive(Clone, Copy)]
pub struct ReferenceData {
    pub cities: RwSignal<LoadState<City>>,
    pub facilities: RwSignal<LoadState<Facility>>,
}

impl ReferenceData {
    pub fn new() -> Self {
        Self {
            cities: RwSignal::new(LoadState::Idle),
            facilities: RwSignal::new(LoadState::Idle),
        }
    }

    /// Fetch whichever list is missing or stale.
    pub fn ensure_loaded(&self) {
        let now = now_ms();

        if self.cities.with_untracked(|s| s.needs_fetch(now)) {
            let cities = self.cities;
            cities.set(LoadState::Loading);
            spawn_local(async move {
                match fetch_cities().await {
                    Ok(items) => {
                        log::info!("loaded {} cities", items.len());
                        cities.set(LoadState::Loaded(CachedList::new(items, now_ms())));
                    }
                    Err(e) => {
                        log::error!("City API error: {}", e);
                        cities.set(LoadState::Failed(e.to_string()));
                    }
                }
            });
        } else {
            log::debug!("using cached cities");
        }

        if self.facilities.with_untracked(|s| s.needs_fetch(now)) {
            let facilities = self.facilities;
            facilities.set(LoadState::Loading);
            spawn_local(async move {
                match fetch_facilities().await {
                    Ok(items) => {
                        log::info!("loaded {} facilities", items.len());
                        facilities.set(LoadState::Loaded(CachedList::new(items, now_ms())));
                    }
                    Err(e) => {
                        log::error!("Facility API error: {}", e);
                        facilities.set(LoadState::Failed(e.to_string()));
                    }
                }
            });
        } else {
            log::debug!("using cached facilities");
        }
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_reference_data() -> ReferenceData {
    use_context::<ReferenceData>().expect("ReferenceData not provided")
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::cache::REFERENCE_TTL_MS;

    fn loaded(fetched_at_ms: f64) -> LoadState<City> {
        LoadState::Loaded(CachedList::new(
            vec![City {
                id: 1,
                name: "Chennai".into(),
                ..City::default()
            }],
            fetched_at_ms,
        ))
    }

    #[test]
    fn test_needs_fetch() {
        let now = 1_000_000.0;
        assert!(LoadState::<City>::Idle.needs_fetch(now));
        assert!(!LoadState::<City>::Loading.needs_fetch(now));
        assert!(LoadState::<City>::Failed("timeout".into()).needs_fetch(now));
    }

    #[test]
    fn test_loaded_list_reused_until_stale() {
        let fetched_at = 1_000_000.0;
        assert!(!loaded(fetched_at).needs_fetch(fetched_at));
        assert!(!loaded(fetched_at).needs_fetch(fetched_at + REFERENCE_TTL_MS - 1.0));
        assert!(loaded(fetched_at).needs_fetch(fetched_at + REFERENCE_TTL_MS));
    }

    #[test]
    fn test_load_state_accessors() {
        let state = loaded(0.0);
        assert_eq!(state.items().len(), 1);
        assert!(state.is_settled());
        assert!(!state.is_loading());

        assert!(LoadState::<City>::Loading.items().is_empty());
        assert!(!LoadState::<City>::Loading.is_settled());
        assert!(LoadState::<City>::Failed("x".into()).is_failed());
        assert!(LoadState::<City>::Failed("x".into()).is_settled());
    }
}
