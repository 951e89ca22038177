// Copyright 2025 the Multipick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cursor movement over a one-dimensional list of rows.

/// Direction of cursor navigation within a list.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Navigation {
    /// Move to the next focusable row (for example, Arrow Down).
    Next,
    /// Move to the previous focusable row (for example, Arrow Up).
    Prev,
    /// Jump to the first focusable row (for example, Home).
    First,
    /// Jump to the last focusable row (for example, End).
    Last,
}

/// A read-only view of rows that may or may not take the cursor.
///
/// Group headers and disabled rows report `false` from
/// [`is_focusable`](Self::is_focusable).
pub trait ListSpace {
    /// Number of rows.
    fn len(&self) -> usize;

    /// Returns `true` if there are no rows.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the row at `index` can hold the cursor.
    fn is_focusable(&self, index: usize) -> bool;

    /// First focusable row.
    fn first_focusable(&self) -> Option<usize> {
        (0..self.len()).find(|&i| self.is_focusable(i))
    }

    /// Last focusable row.
    fn last_focusable(&self) -> Option<usize> {
        (0..self.len()).rev().find(|&i| self.is_focusable(i))
    }
}

/// A `[bool]` slice is a list whose entries say whether the row is focusable.
impl ListSpace for [bool] {
    fn len(&self) -> usize {
        <[bool]>::len(self)
    }

    fn is_focusable(&self, index: usize) -> bool {
        self.get(index).copied().unwrap_or(false)
    }
}

/// Trait for list traversal policies.
///
/// A policy receives the current cursor (or `None` when unset), a navigation
/// intent, and the list, and returns the new cursor position.
pub trait FocusPolicy<S>
where
    S: ListSpace + ?Sized,
{
    /// Compute the next cursor position.
    fn next(&self, origin: Option<usize>, direction: Navigation, space: &S) -> Option<usize>;
}

/// Linear traversal policy for option lists.
///
/// From an unset cursor, [`Navigation::Next`] lands on the first focusable row
/// and [`Navigation::Prev`] on the last one. The cursor never wraps: a move
/// that finds nothing beyond the origin returns the origin.
#[derive(Copy, Clone, Debug, Default)]
pub struct ListPolicy;

impl<S> FocusPolicy<S> for ListPolicy
where
    S: ListSpace + ?Sized,
{
    fn next(&self, origin: Option<usize>, direction: Navigation, space: &S) -> Option<usize> {
        let len = space.len();
        match direction {
            Navigation::First => space.first_focusable(),
            Navigation::Last => space.last_focusable(),
            Navigation::Next => match origin {
                None => space.first_focusable(),
                Some(origin) => {
                    let after = origin.saturating_add(1).min(len);
                    (after..len)
                        .find(|&i| space.is_focusable(i))
                        .or(Some(origin))
                }
            },
            Navigation::Prev => match origin {
                None => space.last_focusable(),
                Some(origin) => (0..origin.min(len))
                    .rev()
                    .find(|&i| space.is_focusable(i))
                    .or(Some(origin)),
            },
        }
    }
}
