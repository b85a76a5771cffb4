//! Client-side sorting and pagination of table rows.

use std::cmp::Ordering;

/// Rows per table page.
pub const PAGE_SIZE: usize = 10;

/// Row types that can be ordered by a named column.
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Stable sort; equal rows keep their server order.
pub fn sort_rows<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Number of pages; an empty list still has one (empty) page.
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total.div_ceil(page_size).max(1)
}

/// Zero-based page slice, clamped to the last page.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page_size == 0 || items.is_empty() {
        return &[];
    }
    let page = page.min(page_count(items.len(), page_size) - 1);
    let start = page * page_size;
    let end = (start + page_size).min(items.len());
    &items[start..end]
}

/// Sort-direction glyph for a column header.
pub fn sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// Click on a header: same column flips the direction, another column sorts ascending.
pub fn toggle_sort(current_field: &str, ascending: bool, clicked: &str) -> (String, bool) {
    if current_field == clicked {
        (clicked.to_string(), !ascending)
    } else {
        (clicked.to_string(), true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Row(&'static str, u32);

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "name" => self.0.cmp(other.0),
                "qty" => self.1.cmp(&other.1),
                _ => Ordering::Equal,
            }
        }
    }

    #[test]
    fn test_sort_rows() {
        let mut rows = vec![Row("b", 2), Row("a", 3), Row("c", 1)];
        sort_rows(&mut rows, "qty", true);
        assert_eq!(rows, vec![Row("c", 1), Row("b", 2), Row("a", 3)]);
        sort_rows(&mut rows, "name", false);
        assert_eq!(rows, vec![Row("c", 1), Row("b", 2), Row("a", 3)]);
        sort_rows(&mut rows, "unknown", true);
        assert_eq!(rows[0], Row("c", 1));
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(25, 10), 3);
    }

    #[test]
    fn test_paginate() {
        let items: Vec<u32> = (1..=25).collect();
        assert_eq!(paginate(&items, 0, 10), &items[0..10]);
        assert_eq!(paginate(&items, 2, 10), &items[20..25]);
        assert_eq!(paginate(&items, 9, 10), &items[20..25]);
        assert!(paginate::<u32>(&[], 0, 10).is_empty());
    }

    #[test]
    fn test_toggle_sort() {
        assert_eq!(toggle_sort("po_id", true, "po_id"), ("po_id".to_string(), false));
        assert_eq!(toggle_sort("po_id", false, "qty_target"), ("qty_target".to_string(), true));
        assert_eq!(sort_indicator("po_id", "po_id", true), " ▲");
        assert_eq!(sort_indicator("po_id", "qty_target", true), " ⇅");
    }
}
