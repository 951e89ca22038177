// Copyright 2025 the Multipick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=multipick --heading-base-level=0

//! Multipick: a headless multi-select combo box.
//!
//! [`MultiSelect`] composes the rest of the workspace into one widget:
//!
//! - options and filtering from `multipick_options`,
//! - the selection from `multipick_selection`,
//! - keys and type-ahead from `multipick_event_state`,
//! - cursor movement and the overlay tab trap from `multipick_focus`,
//! - the overlay lifecycle from `multipick_overlay`,
//! - the rendered window from `multipick_virtual_list`.
//!
//! It does no rendering. The host feeds it input through the `on_*` methods,
//! calls [`MultiSelect::tick`] after each dispatch to run deferred steps, and
//! drains two queues: [`MultiSelectEvent`]s for the screen that owns the
//! widget, and [`Effect`]s (focus moves, scrolling, overlay placement) for
//! itself.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use multipick::{MultiSelect, MultiSelectConfig, MultiSelectEvent};
//! use multipick_event_state::keys::{Key, KeyEvent};
//! use multipick_options::{Identity, OptionSource};
//! use multipick_overlay::{OverlayManager, OverlayState};
//!
//! let options = Arc::new(OptionSource::flat(vec!["Apple", "Banana", "Cherry"]));
//! let mut select = MultiSelect::new(Identity, MultiSelectConfig::default(), OverlayManager::shared())
//!     .unwrap()
//!     .with_options(options);
//!
//! select.show();
//! for _ in 0..3 {
//!     select.on_key_down(KeyEvent::new(Key::ArrowDown), 0);
//! }
//! assert_eq!(select.cursor(), Some(2));
//!
//! select.on_key_down(KeyEvent::new(Key::Enter), 0);
//! assert_eq!(select.value(), &["Cherry"]);
//! assert!(select.take_events().contains(&MultiSelectEvent::Change { value: vec!["Cherry"] }));
//!
//! select.on_key_down(KeyEvent::new(Key::Escape), 0);
//! select.tick(0);
//! assert_eq!(select.overlay_state(), OverlayState::Closed);
//! assert_eq!(select.value(), &["Cherry"]);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//! - `json`: [`MultiSelect::from_json`] for options given as `serde_json::Value` records.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod event;
#[cfg(feature = "json")]
mod json;
mod visible;
mod widget;

pub use config::{ConfigError, DisplayMode, Messages, MultiSelectConfig, VirtualScrollerConfig};
pub use event::{Effect, FocusTarget, MultiSelectEvent};
pub use widget::{Chip, DEFAULT_WIDGET_ID, DisplayLabel, Layout, MultiSelect};
