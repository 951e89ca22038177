// Copyright 2025 the Multipick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The set of chosen values and the operations that change it.

use alloc::vec::Vec;

use crate::SelectableList;

/// Chosen values, in the order they were added.
///
/// Membership is decided by the list's [`values_equal`] rather than by
/// `PartialEq`, so every query and mutation takes the list it is made against.
/// Mutations return `true` only when the member set actually changed; callers
/// use that to decide whether to emit a change notification.
///
/// Values without a matching row are kept until the next mutation that
/// replaces the selection. Options that load later link back up with them.
///
/// [`values_equal`]: SelectableList::values_equal
#[derive(Clone, Debug, PartialEq)]
pub struct Selection<V> {
    values: Vec<V>,
    limit: Option<usize>,
}

impl<V> Default for Selection<V> {
    fn default() -> Self {
        Self {
            values: Vec::new(),
            limit: None,
        }
    }
}

impl<V: Clone> Selection<V> {
    /// An empty selection without a limit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from caller-supplied values, kept as given.
    #[must_use]
    pub fn with_values(values: Vec<V>) -> Self {
        Self {
            values,
            limit: None,
        }
    }

    /// Caps the number of selected values.
    ///
    /// Once the cap is reached every unselected row counts as disabled.
    #[must_use]
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// The selected values in insertion order.
    #[must_use]
    pub fn values(&self) -> &[V] {
        &self.values
    }

    /// Number of selected values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The selection cap.
    #[must_use]
    pub const fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Changes the selection cap; existing values are left alone.
    pub fn set_limit(&mut self, limit: Option<usize>) {
        self.limit = limit;
    }

    /// Returns `true` when the cap is set and reached.
    #[must_use]
    pub fn limit_reached(&self) -> bool {
        self.limit.is_some_and(|limit| self.values.len() >= limit)
    }

    /// Returns `true` if `value` is selected.
    pub fn contains<L>(&self, list: &L, value: &V) -> bool
    where
        L: SelectableList<Value = V> + ?Sized,
    {
        self.values.iter().any(|v| list.values_equal(v, value))
    }

    /// Returns `true` if the row at `index` has a selected value.
    pub fn is_selected_at<L>(&self, list: &L, index: usize) -> bool
    where
        L: SelectableList<Value = V> + ?Sized,
    {
        list.value_at(index)
            .is_some_and(|value| self.contains(list, &value))
    }

    /// Returns `true` if the row at `index` is disabled, by the caller or by a
    /// reached limit.
    pub fn is_disabled_at<L>(&self, list: &L, index: usize) -> bool
    where
        L: SelectableList<Value = V> + ?Sized,
    {
        if list.is_disabled_at(index) {
            return true;
        }
        self.limit_reached() && !self.is_selected_at(list, index)
    }

    /// Returns `true` if the row at `index` carries a value and is not disabled.
    pub fn is_selectable_at<L>(&self, list: &L, index: usize) -> bool
    where
        L: SelectableList<Value = V> + ?Sized,
    {
        index < list.len() && list.value_at(index).is_some() && !self.is_disabled_at(list, index)
    }

    /// Removes the row's value if selected, else appends it.
    ///
    /// Disabled rows and headers are rejected.
    pub fn toggle_at<L>(&mut self, list: &L, index: usize) -> bool
    where
        L: SelectableList<Value = V> + ?Sized,
    {
        if !self.is_selectable_at(list, index) {
            return false;
        }
        let Some(value) = list.value_at(index) else {
            return false;
        };
        if self.contains(list, &value) {
            self.values.retain(|v| !list.values_equal(v, &value));
        } else {
            self.values.push(value);
        }
        true
    }

    /// Replaces the selection with every enabled row between `from` and `to`,
    /// inclusive and in either order, truncated to the limit.
    ///
    /// A missing end is substituted with the nearest selected row: `from`
    /// searches backwards from `to` first, then `to` searches forwards from the
    /// resolved `from`. Nothing happens if neither end resolves.
    pub fn select_range<L>(&mut self, list: &L, from: Option<usize>, to: Option<usize>) -> bool
    where
        L: SelectableList<Value = V> + ?Sized,
    {
        let from = from.or_else(|| self.nearest_selected_index(list, to, true));
        let to = to.or_else(|| self.nearest_selected_index(list, from, false));
        let (Some(from), Some(to)) = (from, to) else {
            return false;
        };
        if list.is_empty() {
            return false;
        }
        let last = list.len() - 1;
        let (start, end) = (from.min(to).min(last), from.max(to).min(last));
        let values = self.enabled_values(list, start..=end);
        self.replace(list, values)
    }

    /// Replaces the selection with every selectable row, truncated to the limit.
    pub fn select_all<L>(&mut self, list: &L) -> bool
    where
        L: SelectableList<Value = V> + ?Sized,
    {
        let values = self.enabled_values(list, 0..list.len());
        self.replace(list, values)
    }

    /// Values of the rows in `indices` the caller has not disabled, truncated to
    /// the limit.
    ///
    /// Bulk replacements ignore the limit's own disabling: the replaced values
    /// are about to be dropped anyway.
    fn enabled_values<L>(&self, list: &L, indices: impl Iterator<Item = usize>) -> Vec<V>
    where
        L: SelectableList<Value = V> + ?Sized,
    {
        let mut values: Vec<V> = indices
            .filter(|&i| !list.is_disabled_at(i))
            .filter_map(|i| list.value_at(i))
            .collect();
        if let Some(limit) = self.limit {
            values.truncate(limit);
        }
        values
    }

    /// Deselects every value that has a row in `list`; hidden values stay.
    pub fn clear_visible<L>(&mut self, list: &L) -> bool
    where
        L: SelectableList<Value = V> + ?Sized,
    {
        let visible: Vec<V> = (0..list.len()).filter_map(|i| list.value_at(i)).collect();
        let before = self.values.len();
        self.values
            .retain(|v| !visible.iter().any(|shown| list.values_equal(v, shown)));
        self.values.len() != before
    }

    /// Deselects everything.
    pub fn clear_all(&mut self) -> bool {
        let changed = !self.values.is_empty();
        self.values.clear();
        changed
    }

    /// Deselects one value regardless of its row.
    pub fn remove_value<L>(&mut self, list: &L, value: &V) -> bool
    where
        L: SelectableList<Value = V> + ?Sized,
    {
        let before = self.values.len();
        self.values.retain(|v| !list.values_equal(v, value));
        self.values.len() != before
    }

    /// Replaces the selection wholesale.
    ///
    /// Returns `false`, leaving the order as it was, when `values` holds the
    /// same members.
    pub fn replace<L>(&mut self, list: &L, values: Vec<V>) -> bool
    where
        L: SelectableList<Value = V> + ?Sized,
    {
        let same = values.len() == self.values.len()
            && values.iter().all(|v| self.contains(list, v))
            && self
                .values
                .iter()
                .all(|v| values.iter().any(|w| list.values_equal(v, w)));
        if same {
            return false;
        }
        self.values = values;
        true
    }

    /// Returns `true` if the list has rows and every row is a header, disabled,
    /// or selected.
    ///
    /// With a reached limit, unselected rows count as disabled, so a capped
    /// selection reads as "all selected".
    pub fn all_selected<L>(&self, list: &L) -> bool
    where
        L: SelectableList<Value = V> + ?Sized,
    {
        !list.is_empty()
            && (0..list.len()).all(|i| {
                list.value_at(i).is_none()
                    || self.is_disabled_at(list, i)
                    || self.is_selected_at(list, i)
            })
    }

    fn is_valid_selected_at<L>(&self, list: &L, index: usize) -> bool
    where
        L: SelectableList<Value = V> + ?Sized,
    {
        self.is_selectable_at(list, index) && self.is_selected_at(list, index)
    }

    /// Index of the first selected row.
    ///
    /// This and the other selected-row searches skip rows the caller disabled.
    pub fn first_selected_index<L>(&self, list: &L) -> Option<usize>
    where
        L: SelectableList<Value = V> + ?Sized,
    {
        (0..list.len()).find(|&i| self.is_valid_selected_at(list, i))
    }

    /// Index of the last selected row.
    pub fn last_selected_index<L>(&self, list: &L) -> Option<usize>
    where
        L: SelectableList<Value = V> + ?Sized,
    {
        (0..list.len()).rev().find(|&i| self.is_valid_selected_at(list, i))
    }

    /// First selected row strictly after `index`; `None` searches from the top.
    pub fn next_selected_index<L>(&self, list: &L, index: Option<usize>) -> Option<usize>
    where
        L: SelectableList<Value = V> + ?Sized,
    {
        let start = index.map_or(0, |i| i + 1);
        (start..list.len()).find(|&i| self.is_valid_selected_at(list, i))
    }

    /// Last selected row strictly before `index`; `None` finds nothing.
    pub fn prev_selected_index<L>(&self, list: &L, index: Option<usize>) -> Option<usize>
    where
        L: SelectableList<Value = V> + ?Sized,
    {
        let end = index?.min(list.len());
        (0..end).rev().find(|&i| self.is_valid_selected_at(list, i))
    }

    /// The selected row closest to `index` in the preferred direction, then the
    /// other one; `index` itself when nothing is selected on either side.
    pub fn nearest_selected_index<L>(
        &self,
        list: &L,
        index: Option<usize>,
        prefer_prev: bool,
    ) -> Option<usize>
    where
        L: SelectableList<Value = V> + ?Sized,
    {
        if self.is_empty() {
            return index;
        }
        let found = if prefer_prev {
            self.prev_selected_index(list, index)
                .or_else(|| self.next_selected_index(list, index))
        } else {
            self.next_selected_index(list, index)
                .or_else(|| self.prev_selected_index(list, index))
        };
        found.or(index)
    }

    /// Row of the most recently added value that has one.
    pub fn selected_index<L>(&self, list: &L) -> Option<usize>
    where
        L: SelectableList<Value = V> + ?Sized,
    {
        self.values.iter().rev().find_map(|value| {
            (0..list.len()).find(|&i| {
                self.is_selectable_at(list, i)
                    && list
                        .value_at(i)
                        .is_some_and(|candidate| list.values_equal(&candidate, value))
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::Selection;
    use crate::SelectableList;

    #[derive(Debug)]
    enum Row {
        Header,
        Item(&'static str, bool),
    }

    #[derive(Debug)]
    struct Rows(Vec<Row>);

    impl SelectableList for Rows {
        type Value = &'static str;

        fn len(&self) -> usize {
            self.0.len()
        }

        fn value_at(&self, index: usize) -> Option<&'static str> {
            match self.0.get(index)? {
                Row::Header => None,
                Row::Item(value, _) => Some(value),
            }
        }

        fn is_disabled_at(&self, index: usize) -> bool {
            matches!(self.0.get(index), Some(Row::Item(_, true)))
        }

        fn values_equal(&self, a: &&'static str, b: &&'static str) -> bool {
            a.eq_ignore_ascii_case(b)
        }
    }

    fn fruit() -> Rows {
        Rows(vec![
            Row::Header,
            Row::Item("apple", false),
            Row::Item("banana", false),
            Row::Item("cherry", true),
            Row::Header,
            Row::Item("date", false),
            Row::Item("elder", false),
        ])
    }

    #[test]
    fn toggle_twice_is_a_no_op() {
        let rows = fruit();
        let mut sel = Selection::new();
        assert!(sel.toggle_at(&rows, 2));
        assert_eq!(sel.values(), ["banana"]);
        assert!(sel.toggle_at(&rows, 2));
        assert!(sel.is_empty());
    }

    #[test]
    fn headers_and_disabled_rows_reject_toggles() {
        let rows = fruit();
        let mut sel = Selection::new();
        assert!(!sel.toggle_at(&rows, 0));
        assert!(!sel.toggle_at(&rows, 3));
        assert!(!sel.toggle_at(&rows, 99));
        assert!(sel.is_empty());
    }

    #[test]
    fn equality_key_decides_membership() {
        let rows = fruit();
        let mut sel = Selection::with_values(vec!["APPLE"]);
        assert!(sel.is_selected_at(&rows, 1));
        assert!(sel.toggle_at(&rows, 1));
        assert!(sel.is_empty());
    }

    #[test]
    fn range_is_inclusive_and_order_independent() {
        let rows = fruit();
        for (from, to) in [(1, 6), (6, 1)] {
            let mut sel = Selection::new();
            assert!(sel.select_range(&rows, Some(from), Some(to)));
            assert_eq!(sel.values(), ["apple", "banana", "date", "elder"]);
        }
        let mut sel = Selection::new();
        sel.select_range(&rows, Some(2), Some(2));
        assert_eq!(sel.values(), ["banana"]);
    }

    #[test]
    fn range_with_a_missing_end_extends_from_the_selection() {
        let rows = fruit();
        let mut sel = Selection::with_values(vec!["banana"]);
        // Shift+End: from the nearest selected row down to the last row.
        assert!(sel.select_range(&rows, None, Some(6)));
        assert_eq!(sel.values(), ["banana", "date", "elder"]);

        let mut sel = Selection::with_values(vec!["date"]);
        // Shift+Home: from the first row up to the nearest selected row.
        assert!(sel.select_range(&rows, Some(1), None));
        assert_eq!(sel.values(), ["apple", "banana", "date"]);

        let mut empty = Selection::new();
        assert!(!empty.select_range(&rows, None, None));
    }

    #[test]
    fn select_all_then_all_selected() {
        let rows = fruit();
        let mut sel = Selection::new();
        assert!(!sel.all_selected(&rows));
        assert!(sel.select_all(&rows));
        assert_eq!(sel.values(), ["apple", "banana", "date", "elder"]);
        assert!(sel.all_selected(&rows));
        assert!(!sel.select_all(&rows), "same members, no change");
        assert!(!sel.all_selected(&Rows(vec![])));
    }

    #[test]
    fn limit_disables_unselected_rows() {
        let rows = fruit();
        let mut sel = Selection::new().with_limit(Some(2));
        sel.toggle_at(&rows, 1);
        sel.toggle_at(&rows, 2);
        assert!(sel.limit_reached());
        assert!(!sel.toggle_at(&rows, 5));
        assert!(sel.is_disabled_at(&rows, 5));
        assert!(sel.all_selected(&rows));
        // Selected rows can still be removed.
        assert!(sel.toggle_at(&rows, 1));
        assert!(sel.toggle_at(&rows, 5));
        assert_eq!(sel.values(), ["banana", "date"]);

        let mut capped = Selection::new().with_limit(Some(3));
        capped.select_all(&rows);
        assert_eq!(capped.values(), ["apple", "banana", "date"]);

        // A full selection can still be replaced by a range.
        assert!(capped.select_range(&rows, Some(5), Some(6)));
        assert_eq!(capped.values(), ["date", "elder"]);
    }

    #[test]
    fn clears() {
        let rows = Rows(vec![Row::Item("apple", false), Row::Item("date", false)]);
        let mut sel = Selection::with_values(vec!["apple", "kiwi"]);
        assert!(sel.clear_visible(&rows));
        assert_eq!(sel.values(), ["kiwi"]);
        assert!(!sel.clear_visible(&rows));
        assert!(sel.remove_value(&rows, &"KIWI"));
        assert!(!sel.clear_all());
    }

    #[test]
    fn unknown_initial_values_are_retained() {
        let rows = fruit();
        let mut sel = Selection::with_values(vec!["kiwi"]);
        assert_eq!(sel.selected_index(&rows), None);
        sel.toggle_at(&rows, 5);
        assert_eq!(sel.values(), ["kiwi", "date"]);
    }

    #[test]
    fn nearest_selected_searches() {
        let rows = fruit();
        let sel = Selection::with_values(vec!["elder", "apple"]);
        assert_eq!(sel.first_selected_index(&rows), Some(1));
        assert_eq!(sel.last_selected_index(&rows), Some(6));
        assert_eq!(sel.next_selected_index(&rows, Some(1)), Some(6));
        assert_eq!(sel.prev_selected_index(&rows, Some(6)), Some(1));
        assert_eq!(sel.prev_selected_index(&rows, None), None);
        assert_eq!(sel.nearest_selected_index(&rows, Some(3), true), Some(1));
        assert_eq!(sel.nearest_selected_index(&rows, Some(3), false), Some(6));
        assert_eq!(sel.nearest_selected_index(&rows, None, true), Some(1));
        // Most recently added wins.
        assert_eq!(sel.selected_index(&rows), Some(1));

        let none = Selection::<&str>::new();
        assert_eq!(none.nearest_selected_index(&rows, Some(4), false), Some(4));
    }

    #[test]
    fn slices_are_lists() {
        let rows: &[(u32, bool)] = &[(1, false), (2, true), (3, false)];
        let mut sel = Selection::new();
        sel.select_all(rows);
        assert_eq!(sel.values(), [1, 3]);
    }
}
