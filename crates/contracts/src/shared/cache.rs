/// Lifetime of cached reference lists (cities, facilities).
pub const REFERENCE_TTL_MS: f64 = 5.0 * 60.0 * 1000.0;

/// A list fetched at a known time, in milliseconds since the epoch.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedList<T> {
    pub items: Vec<T>,
    pub fetched_at_ms: f64,
}

impl<T> CachedList<T> {
    pub fn new(items: Vec<T>, fetched_at_ms: f64) -> Self {
        Self {
            items,
            fetched_at_ms,
        }
    }

    pub fn is_fresh(&self, now_ms: f64) -> bool {
        now_ms >= self.fetched_at_ms && now_ms - self.fetched_at_ms < REFERENCE_TTL_MS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_freshness_window() {
        let cached = CachedList::new(vec![1, 2, 3], 1_000.0);
        assert!(cached.is_fresh(1_000.0));
        assert!(cached.is_fresh(1_000.0 + REFERENCE_TTL_MS - 1.0));
        assert!(!cached.is_fresh(1_000.0 + REFERENCE_TTL_MS));
        // Clock moved backwards: refetch
        assert!(!cached.is_fresh(0.0));
    }
}
