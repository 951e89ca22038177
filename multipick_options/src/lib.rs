// Copyright 2025 the Multipick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=multipick_options --heading-base-level=0

//! Multipick Options: option sources, field access, and filtering.
//!
//! This crate turns caller-owned option data into the *visible list* a
//! multi-select navigates: a flat sequence of [`VisibleEntry`] values that are
//! either group headers or references to options. Entries point back into the
//! [`OptionSource`]; option data is never copied.
//!
//! - [`OptionSource`]: a flat list or a list of [`OptionGroup`]s.
//! - [`OptionAccess`]: how to read a value, label, disabled flag, and keys out of an
//!   option. [`Identity`] covers string-like options; with the `json` feature,
//!   [`JsonFields`] reads named fields out of `serde_json::Value` records.
//! - [`Filter`]: derives the visible list for a query, over one or more fields,
//!   with a [`MatchMode`] and locale-aware [`Fold`]ing.
//!
//! Visible positions are unstable across recomputation. Anything that must
//! survive a filter change (the selection, most notably) is keyed by value.
//!
//! ## Example
//!
//! ```rust
//! use multipick_options::{Filter, Identity, OptionGroup, OptionRef, OptionSource, VisibleEntry};
//!
//! let source = OptionSource::grouped(vec![
//!     OptionGroup::new("Fruit", vec!["Apple", "Banana"]),
//!     OptionGroup::new("Veg", vec!["Leek"]),
//! ]);
//!
//! // No query: every header and option.
//! assert_eq!(Filter::new().apply(&source, &Identity, "").len(), 5);
//!
//! // "ap" keeps the Fruit header with Apple under it and drops Veg entirely.
//! let visible = Filter::new().apply(&source, &Identity, "ap");
//! assert_eq!(
//!     visible,
//!     [
//!         VisibleEntry::Group { group: 0, child_count: 1 },
//!         VisibleEntry::Option(OptionRef::grouped(0, 0)),
//!     ]
//! );
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`MatchMode`].
//! - `json`: [`FieldConfig`] and [`JsonFields`] for options given as JSON.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod access;
mod filter;
mod fold;
#[cfg(feature = "json")]
mod json;
mod source;

pub use access::{Identity, OptionAccess, label_of_value, label_string, render_key};
pub use filter::{Filter, MatchMode, filter};
pub use fold::Fold;
#[cfg(feature = "json")]
pub use json::{FieldConfig, JsonFields, JsonSourceError};
pub use source::{OptionGroup, OptionRef, OptionSource, VisibleEntry, pos_in_set, set_size};
