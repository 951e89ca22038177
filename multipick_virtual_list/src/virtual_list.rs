// Copyright 2025 the Multipick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll state over an [`ExtentModel`].

use crate::{ExtentModel, Scalar, VisibleStrip, compute_visible_strip};

/// Where a row should land when it is scrolled into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAlign {
    /// Row top at viewport top.
    Start,
    /// Row centered in the viewport.
    Center,
    /// Row bottom at viewport bottom.
    End,
    /// Smallest scroll that makes the row fully visible.
    Nearest,
}

/// Scroll offset, viewport, and overscan over an owned [`ExtentModel`].
///
/// The last computed [`VisibleStrip`] is cached until something that affects it
/// changes. The controller never looks at option data; it only knows row
/// indices.
#[derive(Debug)]
pub struct VirtualList<M: ExtentModel> {
    model: M,
    scroll_offset: M::Scalar,
    viewport_extent: M::Scalar,
    overscan_before: M::Scalar,
    overscan_after: M::Scalar,

    dirty: bool,
    last_strip: VisibleStrip<M::Scalar>,
}

impl<M: ExtentModel> VirtualList<M> {
    /// Creates a controller scrolled to the top with symmetric `overscan`.
    #[must_use]
    pub fn new(model: M, viewport_extent: M::Scalar, overscan: M::Scalar) -> Self {
        let zero = M::Scalar::zero();
        Self {
            model,
            scroll_offset: zero,
            viewport_extent: viewport_extent.max(zero),
            overscan_before: overscan.max(zero),
            overscan_after: overscan.max(zero),
            dirty: true,
            last_strip: VisibleStrip::empty(),
        }
    }

    /// The extent model.
    #[must_use]
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Mutable access to the extent model; invalidates the cached strip.
    pub fn model_mut(&mut self) -> &mut M {
        self.dirty = true;
        &mut self.model
    }

    /// Current scroll offset.
    #[must_use]
    pub const fn scroll_offset(&self) -> M::Scalar {
        self.scroll_offset
    }

    /// Sets the scroll offset; negative offsets clamp to zero.
    pub fn set_scroll_offset(&mut self, offset: M::Scalar) {
        let offset = offset.max(M::Scalar::zero());
        if offset != self.scroll_offset {
            self.scroll_offset = offset;
            self.dirty = true;
        }
    }

    /// Current viewport extent.
    #[must_use]
    pub const fn viewport_extent(&self) -> M::Scalar {
        self.viewport_extent
    }

    /// The rows to realize at the current scroll position.
    #[must_use]
    pub fn visible_strip(&mut self) -> VisibleStrip<M::Scalar> {
        if self.dirty {
            self.last_strip = compute_visible_strip(
                &mut self.model,
                self.scroll_offset,
                self.viewport_extent,
                self.overscan_before,
                self.overscan_after,
            );
            self.dirty = false;
        }
        self.last_strip
    }

    /// Returns `true` if row `index` lies entirely inside the viewport.
    #[must_use]
    pub fn is_index_fully_visible(&mut self, index: usize) -> bool {
        if index >= self.model.len() {
            return false;
        }
        let top = self.model.offset_of(index);
        let bottom = top + self.model.extent_of(index);
        top >= self.scroll_offset && bottom <= self.scroll_offset + self.viewport_extent
    }

    /// Pulls the scroll offset back so the viewport never runs past the last row.
    pub fn clamp_scroll_to_content(&mut self) {
        let content = self.visible_strip().content_extent;
        let max_offset = if content > self.viewport_extent {
            content - self.viewport_extent
        } else {
            M::Scalar::zero()
        };
        if self.scroll_offset > max_offset {
            self.set_scroll_offset(max_offset);
        }
    }

    /// Scrolls row `index` (clamped to the last row) into view.
    pub fn scroll_to_index(&mut self, index: usize, align: ScrollAlign) {
        let zero = M::Scalar::zero();
        let len = self.model.len();
        if len == 0 {
            self.set_scroll_offset(zero);
            return;
        }
        let index = index.min(len - 1);
        let top = self.model.offset_of(index);
        let bottom = top + self.model.extent_of(index);
        let viewport = self.viewport_extent;

        let offset = match align {
            ScrollAlign::Start => top,
            ScrollAlign::End => (bottom - viewport).max(zero),
            ScrollAlign::Center => {
                let two = M::Scalar::from_usize(2);
                ((top + bottom) / two - viewport / two).max(zero)
            }
            ScrollAlign::Nearest => {
                let current = self.scroll_offset;
                if top >= current && bottom <= current + viewport {
                    current
                } else if top < current {
                    top
                } else {
                    (bottom - viewport).max(zero)
                }
            }
        };
        self.set_scroll_offset(offset);
    }
}

#[cfg(test)]
mod tests {
    use super::ScrollAlign;
    use crate::{FixedExtentModel, VirtualList};

    #[test]
    fn strip_follows_scroll() {
        // 100 options of 10px in a 50px dropdown.
        let mut list = VirtualList::new(FixedExtentModel::new(100, 10.0_f32), 50.0, 0.0);
        let strip = list.visible_strip();
        assert_eq!((strip.start, strip.end), (0, 5));

        list.set_scroll_offset(10.0);
        let strip = list.visible_strip();
        assert_eq!((strip.start, strip.end), (1, 6));
    }

    #[test]
    fn alignment_modes() {
        let mut list = VirtualList::new(FixedExtentModel::new(10, 10.0_f32), 30.0, 0.0);

        list.scroll_to_index(3, ScrollAlign::Start);
        assert_eq!(list.scroll_offset(), 30.0);

        list.scroll_to_index(3, ScrollAlign::End);
        assert_eq!(list.scroll_offset(), 10.0);

        list.scroll_to_index(3, ScrollAlign::Center);
        assert_eq!(list.scroll_offset(), 20.0);

        // Already visible rows do not move the list.
        list.scroll_to_index(3, ScrollAlign::Nearest);
        assert_eq!(list.scroll_offset(), 20.0);

        // Rows above snap to the top, rows below to the bottom.
        list.scroll_to_index(0, ScrollAlign::Nearest);
        assert_eq!(list.scroll_offset(), 0.0);
        list.scroll_to_index(9, ScrollAlign::Nearest);
        assert_eq!(list.scroll_offset(), 70.0);
    }

    #[test]
    fn clamp_after_list_shrinks() {
        let mut list = VirtualList::new(FixedExtentModel::new(50, 10.0_f32), 30.0, 5.0);
        list.set_scroll_offset(400.0);
        // A filter leaves five rows behind.
        list.model_mut().set_len(5);
        list.clamp_scroll_to_content();
        assert_eq!(list.scroll_offset(), 20.0);
        assert!(list.is_index_fully_visible(4));
        assert!(!list.is_index_fully_visible(1));
    }
}
