// Copyright 2025 the Multipick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=multipick_focus --heading-base-level=0

//! Multipick Focus: focus navigation primitives for option lists and overlays.
//!
//! This crate models two kinds of focus movement:
//! - **Cursor navigation** within a list ([`Navigation`], [`ListSpace`],
//!   [`FocusPolicy`]). The cursor is a row index, or unset; rows that are group
//!   headers or disabled never take it. [`ListPolicy`] moves linearly and holds
//!   at the boundary instead of wrapping.
//! - **Tab trapping** inside a floating overlay ([`FocusEntry`], [`FocusSpace`],
//!   [`Sentinel`], [`redirect`]). Two invisible sentinels flank the overlay
//!   content; focus that lands on one is sent back inside, so Tab cycles without
//!   the host managing tab order.
//!
//! ## Minimal example
//!
//! ```rust
//! use multipick_focus::{FocusPolicy, ListPolicy, Navigation};
//!
//! // A group header, two options, and a disabled option.
//! let rows: &[bool] = &[false, true, true, false];
//! let policy = ListPolicy;
//!
//! // Arrow Down from an unset cursor lands on the first option…
//! assert_eq!(policy.next(None, Navigation::Next, rows), Some(1));
//! // …and holds at the last focusable one instead of wrapping.
//! assert_eq!(policy.next(Some(2), Navigation::Next, rows), Some(2));
//! ```
//!
//! Geometry for the tab trap is expressed in terms of [`kurbo::Rect`]; a
//! [`FocusSpace`] should use one coordinate space for all of its entries.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod list;
mod trap;

pub use list::{FocusPolicy, ListPolicy, ListSpace, Navigation};
pub use trap::{FocusEntry, FocusOrigin, FocusSpace, Sentinel, redirect};
