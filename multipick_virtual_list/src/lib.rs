// Copyright 2025 the Multipick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=multipick_virtual_list --heading-base-level=0

//! Multipick Virtual List: windowed rendering for long option lists.
//!
//! The option overlay of a multi-select can hold thousands of rows. This crate
//! decides which of them to render; it never decides which row is focused or
//! selected. Those indices always address the full visible list.
//!
//! The pieces:
//!
//! - [`Scalar`]: `f32`/`f64` abstraction for extents and offsets.
//! - [`ExtentModel`]: per-row extents with prefix-sum style queries, implemented by
//!   [`FixedExtentModel`] (uniform rows) and [`EstimatedExtentModel`] (rows start at
//!   an estimate and are refined by measurement).
//! - [`compute_visible_strip`]: the rows covering a viewport plus overscan, and the
//!   spacer extents around them.
//! - [`VirtualList`]: scroll state over a model, with index scrolling via
//!   [`ScrollAlign`].
//! - [`ListWindow`]: the coordinator a widget talks to. It reports the rendered
//!   [`VirtualWindow`] and turns "scroll to index" into a [`ScrollOutcome`]. With
//!   virtualization off it degenerates to `{0, len}` and hands scroll requests back
//!   to the host.
//!
//! ## Minimal example
//!
//! ```rust
//! use multipick_virtual_list::{ListWindow, ScrollOutcome, VirtualWindow};
//!
//! // 500 options, 24px each, in a 120px overlay.
//! let mut window = ListWindow::virtualized(500, 24.0, 120.0, 0.0);
//! assert_eq!(window.window(), VirtualWindow { start: 0, count: 5 });
//!
//! // Keyboard navigation reached the last option.
//! match window.scroll_to_index(499) {
//!     ScrollOutcome::Scrolled { offset } => assert_eq!(offset, 11_880.0),
//!     other => panic!("unexpected outcome {other:?}"),
//! }
//! assert!(window.window().contains(499));
//!
//! // Short lists are rendered whole.
//! let mut small = ListWindow::direct(3);
//! assert_eq!(small.scroll_to_index(2), ScrollOutcome::IntoView(2));
//! ```
//!
//! All extents live in a caller-chosen 1D space (typically logical pixels) and
//! are expected to be finite and non-negative.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod fixed;
mod model;
mod prefix_sum;
mod scalar;
mod virtual_list;
mod window;

pub use fixed::FixedExtentModel;
pub use model::{ExtentModel, ResizableExtentModel, VisibleStrip, compute_visible_strip};
pub use prefix_sum::EstimatedExtentModel;
pub use scalar::Scalar;
pub use virtual_list::{ScrollAlign, VirtualList};
pub use window::{ListWindow, ScrollOutcome, VirtualWindow};
