// Copyright 2025 the Multipick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The positional list a [`Selection`](crate::Selection) operates over.

use core::fmt::Debug;

/// A positional list of selectable rows, such as a filtered option list.
///
/// Rows that carry no value (group headers) return `None` from
/// [`value_at`](Self::value_at). Indices are only meaningful until the list is
/// recomputed; the selection itself is always stored by value.
pub trait SelectableList {
    /// Value stored in the selection for a row.
    type Value: Clone + Debug;

    /// Number of rows, headers included.
    fn len(&self) -> usize;

    /// Returns `true` if there are no rows.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value of the row at `index`, or `None` for headers and out-of-range
    /// indices.
    fn value_at(&self, index: usize) -> Option<Self::Value>;

    /// Returns `true` if the row at `index` is disabled by the caller.
    ///
    /// Headers need not report themselves as disabled; they are never selectable
    /// because they have no value.
    fn is_disabled_at(&self, index: usize) -> bool;

    /// The equality key: whether `a` and `b` denote the same option.
    fn values_equal(&self, a: &Self::Value, b: &Self::Value) -> bool;
}

/// A `[(value, disabled)]` slice is a list without headers.
impl<V: Clone + Debug + PartialEq> SelectableList for [(V, bool)] {
    type Value = V;

    fn len(&self) -> usize {
        <[(V, bool)]>::len(self)
    }

    fn value_at(&self, index: usize) -> Option<V> {
        self.get(index).map(|(value, _)| value.clone())
    }

    fn is_disabled_at(&self, index: usize) -> bool {
        self.get(index).is_some_and(|(_, disabled)| *disabled)
    }

    fn values_equal(&self, a: &V, b: &V) -> bool {
        a == b
    }
}
