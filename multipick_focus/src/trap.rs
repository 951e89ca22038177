// Copyright 2025 the Multipick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Circular tab trap for floating overlays.

use alloc::vec::Vec;
use core::cmp::Ordering;

use kurbo::Rect;

/// A single focusable element inside an overlay.
///
/// `FocusEntry` bundles the element identifier with its bounds and effective
/// focus properties. Tab order is explicit order first, then reading order.
#[derive(Clone, Debug)]
pub struct FocusEntry<K> {
    /// Identifier for this focusable element.
    pub id: K,
    /// Bounds in the overlay's coordinate space.
    ///
    /// All entries within a given [`FocusSpace`] should use the same space so
    /// that reading order compares positions meaningfully.
    pub rect: Rect,
    /// Optional explicit ordering key, like a positive `tabindex`.
    pub order: Option<i32>,
    /// Whether this element is enabled for focus.
    pub enabled: bool,
}

/// A read-only view of the focusable elements inside an overlay.
///
/// The two sentinels that flank the overlay content are not part of the space.
#[derive(Clone, Debug)]
pub struct FocusSpace<'a, K> {
    /// Focusable candidates, in any order.
    pub nodes: &'a [FocusEntry<K>],
}

impl<K: Copy> FocusSpace<'_, K> {
    /// Enabled candidates in tab order.
    pub fn tab_order(&self) -> Vec<K> {
        let mut enabled: Vec<&FocusEntry<K>> = self.nodes.iter().filter(|e| e.enabled).collect();
        enabled.sort_by(|a, b| compare_linear(a, b));
        enabled.into_iter().map(|e| e.id).collect()
    }

    /// Returns `true` if anything inside can take focus.
    pub fn has_focusable(&self) -> bool {
        self.nodes.iter().any(|e| e.enabled)
    }

    /// First element in tab order.
    pub fn first(&self) -> Option<K> {
        self.nodes
            .iter()
            .filter(|e| e.enabled)
            .min_by(|a, b| compare_linear(a, b))
            .map(|e| e.id)
    }

    /// Last element in tab order.
    pub fn last(&self) -> Option<K> {
        self.nodes
            .iter()
            .filter(|e| e.enabled)
            .max_by(|a, b| compare_linear(a, b))
            .map(|e| e.id)
    }
}

/// One of the two invisible elements flanking the overlay content.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Sentinel {
    /// Before the first element; reached by Shift+Tab from inside or Tab from
    /// the trigger.
    Leading,
    /// After the last element; reached by Tab from inside or Shift+Tab from
    /// the trigger.
    Trailing,
}

/// Where focus came from when a sentinel received it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FocusOrigin {
    /// The widget's own trigger, so focus is entering the overlay.
    Trigger,
    /// An element inside the overlay, so focus is about to leave it.
    Inside,
}

/// Redirects focus that lands on a sentinel back into the overlay.
///
/// Entering from the trigger goes to the near end: the leading sentinel sends
/// focus to the first element, the trailing one to the last. Leaving from inside
/// wraps around: past the end goes to the first element, before the start goes
/// to the last. Returns `None` when nothing inside is focusable.
pub fn redirect<K: Copy>(
    sentinel: Sentinel,
    origin: FocusOrigin,
    space: &FocusSpace<'_, K>,
) -> Option<K> {
    match (sentinel, origin) {
        (Sentinel::Leading, FocusOrigin::Trigger) | (Sentinel::Trailing, FocusOrigin::Inside) => {
            space.first()
        }
        (Sentinel::Trailing, FocusOrigin::Trigger) | (Sentinel::Leading, FocusOrigin::Inside) => {
            space.last()
        }
    }
}

fn compare_linear<K>(a: &FocusEntry<K>, b: &FocusEntry<K>) -> Ordering {
    // First, honor explicit order when present.
    match (a.order, b.order) {
        (Some(ao), Some(bo)) => ao
            .cmp(&bo)
            .then_with(|| compare_rect_reading(&a.rect, &b.rect)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => compare_rect_reading(&a.rect, &b.rect),
    }
}

fn compare_rect_reading(a: &Rect, b: &Rect) -> Ordering {
    const RELATIVE_EPS: f64 = 1e-6;
    let (ay, by) = (a.y0, b.y0);
    if (ay - by).abs() > f64::max(ay.abs(), by.abs()) * RELATIVE_EPS {
        return ay.partial_cmp(&by).unwrap_or(Ordering::Equal);
    }
    a.x0.partial_cmp(&b.x0).unwrap_or(Ordering::Equal)
}
