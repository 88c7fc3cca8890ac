//! Sorting helpers for list pages

use std::cmp::Ordering;

/// Row types that can be ordered by a named column
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Sorts the list by the given column
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending { cmp } else { cmp.reverse() }
    });
}

/// Sort indicator for a column header
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending { " ▲" } else { " ▼" }
    } else {
        " ⇅"
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub field: String,
    pub ascending: bool,
}

impl SortState {
    pub fn new(field: &str) -> Self {
        Self {
            field: field.to_string(),
            ascending: true,
        }
    }

    /// Clicking the active column flips direction, another column sorts ascending
    pub fn toggle(&mut self, field: &str) {
        if self.field == field {
            self.ascending = !self.ascending;
        } else {
            self.field = field.to_string();
            self.ascending = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(u32);

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, _field: &str) -> Ordering {
            self.0.cmp(&other.0)
        }
    }

    #[test]
    fn test_sort_list_direction() {
        let mut rows = vec![Row(2), Row(1), Row(3)];
        sort_list(&mut rows, "n", false);
        assert_eq!(rows.iter().map(|r| r.0).collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[test]
    fn test_sort_toggle() {
        let mut state = SortState::new("name");
        state.toggle("name");
        assert!(!state.ascending);
        state.toggle("gui_order");
        assert_eq!(state, SortState::new("gui_order"));
        assert_eq!(get_sort_indicator(&state.field, "gui_order", true), " ▲");
        assert_eq!(get_sort_indicator(&state.field, "name", true), " ⇅");
    }
}
