// Copyright 2025 the Multipick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Positioning an overlay relative to its trigger.

use kurbo::{Point, Rect, Size};

/// Where to put an overlay.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement {
    /// Overlay bounds in viewport coordinates.
    pub rect: Rect,
    /// Minimum width applied to the overlay; the trigger's width.
    pub min_width: f64,
    /// `true` when the overlay opens above the trigger.
    pub flipped: bool,
}

/// Places an overlay of `size` under `trigger`, inside `viewport`.
///
/// The overlay is at least as wide as the trigger. It opens below the trigger
/// unless it does not fit there and there is more room above. Horizontally it
/// starts at the trigger's left edge and is pushed back inside the viewport if
/// it would overflow the right edge, but never past the left edge.
#[must_use]
pub fn place_overlay(trigger: Rect, size: Size, viewport: Rect) -> Placement {
    let min_width = trigger.width();
    let width = size.width.max(min_width);
    let height = size.height;

    let space_below = viewport.y1 - trigger.y1;
    let space_above = trigger.y0 - viewport.y0;
    let flipped = height > space_below && space_above > space_below;
    let y = if flipped {
        trigger.y0 - height
    } else {
        trigger.y1
    };

    let mut x = trigger.x0;
    if x + width > viewport.x1 {
        x = viewport.x1 - width;
    }
    x = x.max(viewport.x0);

    Placement {
        rect: Rect::from_origin_size(Point::new(x, y), Size::new(width, height)),
        min_width,
        flipped,
    }
}
