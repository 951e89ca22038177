// Copyright 2025 the Multipick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlay lifecycle states, events, and dismissal listener kinds.

use bitflags::bitflags;

/// Where an overlay is in its show/hide cycle.
///
/// The cycle always runs `Closed -> Opening -> Open -> Closing -> Closed`, with
/// one shortcut: showing a `Closing` overlay puts it straight back to `Open`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum OverlayState {
    /// Not shown; no listeners bound.
    #[default]
    Closed,
    /// Placed and visible, listeners not yet bound.
    Opening,
    /// Visible with dismissal listeners bound.
    Open,
    /// Hidden, listeners unbound, focus restoration pending.
    Closing,
}

impl OverlayState {
    /// Returns `true` while the overlay content is shown and navigable.
    #[must_use]
    pub const fn is_visible(self) -> bool {
        matches!(self, Self::Opening | Self::Open)
    }
}

bitflags! {
    /// Kinds of environment listener an open overlay binds.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Listeners: u8 {
        /// Pointer down anywhere outside the trigger and the overlay.
        const OUTSIDE_CLICK = 1 << 0;
        /// Scrolling of any container of the trigger.
        const SCROLL = 1 << 1;
        /// Window resize.
        const RESIZE = 1 << 2;
    }
}

/// Notifications produced by lifecycle transitions, in order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OverlayEvent {
    /// About to show; emitted before placement.
    BeforeShow,
    /// Shown, with listeners bound.
    Show,
    /// About to hide; emitted before listeners are unbound.
    BeforeHide,
    /// Fully hidden.
    Hide,
    /// The deferred close step ran and focus should go back to the trigger.
    RestoreFocus,
}
