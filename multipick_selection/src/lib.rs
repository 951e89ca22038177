// Copyright 2025 the Multipick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=multipick_selection --heading-base-level=0

//! Multipick Selection: the chosen values of a multi-select.
//!
//! A [`Selection`] holds values, not positions. Positions belong to a
//! [`SelectableList`], which is whatever the user is currently looking at (for
//! a multi-select, the filtered option list). Every operation is made against
//! such a list:
//!
//! - [`Selection::toggle_at`] adds or removes one row's value.
//! - [`Selection::select_range`] replaces the selection with a contiguous run of
//!   rows, resolving a missing end to the nearest selected row.
//! - [`Selection::select_all`] and [`Selection::clear_visible`] are bounded by the
//!   list, so a filter narrows bulk operations.
//! - [`Selection::all_selected`] drives a "toggle all" checkbox.
//!
//! Equality comes from [`SelectableList::values_equal`], which lets a caller key
//! membership on one field of a larger value.
//!
//! ## Example
//!
//! ```rust
//! use multipick_selection::Selection;
//!
//! // (value, disabled) slices are lists without group headers.
//! let rows: &[(&str, bool)] = &[("Apple", false), ("Banana", true), ("Cherry", false)];
//!
//! let mut selection = Selection::new();
//! assert!(selection.toggle_at(rows, 2));
//! assert!(!selection.toggle_at(rows, 1), "disabled rows reject toggles");
//!
//! assert!(selection.select_range(rows, Some(2), Some(0)));
//! assert_eq!(selection.values(), ["Apple", "Cherry"]);
//! assert!(selection.all_selected(rows));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod list;
mod selection;

pub use list::SelectableList;
pub use selection::Selection;
