// Copyright 2025 the Multipick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! What the widget tells its caller, and what it asks of its host.

use alloc::string::String;
use alloc::vec::Vec;

use multipick_overlay::Placement;

/// Notifications for the screen that owns the widget.
#[derive(Clone, Debug, PartialEq)]
pub enum MultiSelectEvent<V> {
    /// The selection changed; carries the whole new selection, never a delta.
    Change {
        /// Selected values in selection order.
        value: Vec<V>,
    },
    /// The filter text changed.
    Filter {
        /// The new filter text.
        value: String,
    },
    /// The overlay is about to show.
    BeforeShow,
    /// The overlay is shown.
    Show,
    /// The overlay is about to hide.
    BeforeHide,
    /// The overlay is hidden.
    Hide,
    /// The header checkbox was clicked while the caller owns toggle-all state.
    SelectAllChange {
        /// The state the caller should switch to.
        checked: bool,
    },
    /// The widget received focus.
    Focus,
    /// The widget lost focus.
    Blur,
}

/// Focus destinations the host resolves to its own elements.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FocusTarget {
    /// The focusable element of the trigger.
    Trigger,
    /// The filter input inside the overlay.
    Filter,
    /// A focusable element inside the overlay, by the id the host registered.
    Overlay(u32),
}

/// Side effects the host performs on the widget's behalf.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Move keyboard focus.
    Focus(FocusTarget),
    /// Bring a row's element into view by lookup; every row is rendered.
    ScrollIntoView {
        /// Visible-list index.
        index: usize,
        /// DOM-style id of the row.
        id: String,
    },
    /// Scroll the virtual list to an offset and re-render its window.
    ScrollTo {
        /// Scroll offset in logical pixels.
        offset: f64,
    },
    /// Position the overlay.
    PositionOverlay {
        /// Where the overlay goes.
        placement: Placement,
        /// Stacking order of the overlay layer.
        z_index: i32,
    },
}
