// Copyright 2025 the Multipick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Views of the visible list for the selection and navigation engines.

use multipick_focus::ListSpace;
use multipick_options::{OptionAccess, OptionSource, VisibleEntry};
use multipick_selection::{Selection, SelectableList};

/// The visible list read through the option accessors.
pub(crate) struct VisibleRows<'a, T, A> {
    pub(crate) source: &'a OptionSource<T>,
    pub(crate) access: &'a A,
    pub(crate) entries: &'a [VisibleEntry],
}

impl<'a, T, A> VisibleRows<'a, T, A>
where
    A: OptionAccess<T>,
{
    pub(crate) fn new(source: &'a OptionSource<T>, access: &'a A, entries: &'a [VisibleEntry]) -> Self {
        Self {
            source,
            access,
            entries,
        }
    }

    /// The option behind row `index`; `None` for headers.
    pub(crate) fn option(&self, index: usize) -> Option<&'a T> {
        let at = self.entries.get(index)?.option()?;
        self.source.get(at)
    }
}

impl<T, A> SelectableList for VisibleRows<'_, T, A>
where
    A: OptionAccess<T>,
{
    type Value = A::Value;

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn value_at(&self, index: usize) -> Option<A::Value> {
        self.option(index).map(|option| self.access.value(option))
    }

    fn is_disabled_at(&self, index: usize) -> bool {
        self.option(index)
            .is_some_and(|option| self.access.is_disabled(option))
    }

    fn values_equal(&self, a: &A::Value, b: &A::Value) -> bool {
        self.access.values_equal(a, b)
    }
}

/// Rows the cursor may rest on: options that are not disabled, counting a
/// reached selection limit.
pub(crate) struct CursorSpace<'a, T, A: OptionAccess<T>> {
    pub(crate) rows: VisibleRows<'a, T, A>,
    pub(crate) selection: &'a Selection<A::Value>,
}

impl<T, A> ListSpace for CursorSpace<'_, T, A>
where
    A: OptionAccess<T>,
{
    fn len(&self) -> usize {
        self.rows.entries.len()
    }

    fn is_focusable(&self, index: usize) -> bool {
        self.selection.is_selectable_at(&self.rows, index)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use multipick_focus::{FocusPolicy, ListPolicy, Navigation};
    use multipick_options::{Identity, OptionGroup};

    use super::*;

    #[test]
    fn headers_carry_no_value() {
        let source = OptionSource::grouped(vec![OptionGroup::new("Fruit", vec!["Apple", "Banana"])]);
        let entries = source.flatten();
        let rows = VisibleRows::new(&source, &Identity, &entries);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows.value_at(0), None);
        assert_eq!(rows.value_at(2), Some("Banana"));
        assert!(!rows.is_disabled_at(0));
    }

    #[test]
    fn limit_blocks_the_cursor() {
        let source = OptionSource::flat(vec!["Apple", "Banana", "Cherry"]);
        let entries = source.flatten();
        let rows = VisibleRows::new(&source, &Identity, &entries);
        let selection = Selection::with_values(vec!["Banana"]).with_limit(Some(1));
        let space = CursorSpace {
            rows: VisibleRows::new(&source, &Identity, &entries),
            selection: &selection,
        };

        assert!(selection.is_selected_at(&rows, 1));
        // Only the selected row stays reachable.
        assert_eq!(space.first_focusable(), Some(1));
        assert_eq!(
            ListPolicy.next(Some(1), Navigation::Next, &space),
            Some(1)
        );
    }
}
