// Copyright 2025 the Multipick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=multipick_overlay --heading-base-level=0

//! Multipick Overlay: the lifecycle of a floating panel attached to a trigger.
//!
//! A multi-select shows its options in an overlay. Getting that overlay right is
//! mostly sequencing: place it, bind listeners that dismiss it, unbind them on
//! the way out, and only hand focus back once the event that closed it has
//! finished.
//!
//! - [`OverlayController`]: one widget's overlay, driven through
//!   [`OverlayState`]: `Closed -> Opening -> Open -> Closing -> Closed`. Each call
//!   returns the [`OverlayEvent`]s it produced.
//! - [`OverlayManager`]: a service shared by all widgets on a surface
//!   ([`SharedOverlayManager`]). It stacks layers by z-index, tracks which
//!   [`Listeners`] each overlay holds (never two of a kind), and records where
//!   each overlay sits so a press inside an overlay stacked above another one
//!   does not dismiss the lower one.
//! - [`place_overlay`]: below the trigger at least as wide as it, flipped above
//!   when that fits better, clamped to the viewport.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use multipick_overlay::{OverlayController, OverlayEvent, OverlayManager, OverlayState};
//!
//! let manager = OverlayManager::shared();
//! let mut overlay = OverlayController::new(manager.clone());
//!
//! let trigger = Rect::new(10.0, 10.0, 210.0, 40.0);
//! let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
//! overlay.show(trigger, Size::new(180.0, 240.0), viewport);
//! overlay.tick();
//! assert_eq!(overlay.state(), OverlayState::Open);
//!
//! // A click elsewhere closes it; the deferred step finishes the job.
//! overlay.on_pointer_down(Point::new(600.0, 500.0));
//! assert_eq!(overlay.state(), OverlayState::Closing);
//! assert_eq!(overlay.tick().as_slice(), &[OverlayEvent::Hide]);
//! assert_eq!(manager.borrow().open_count(), 0);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod controller;
mod manager;
mod placement;
mod state;

pub use controller::{ALL_LISTENERS, OverlayController, OverlayEvents};
pub use manager::{DEFAULT_BASE_Z_INDEX, OverlayId, OverlayManager, SharedOverlayManager};
pub use placement::{Placement, place_overlay};
pub use state::{Listeners, OverlayEvent, OverlayState};
