// Copyright 2025 the Multipick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row extent models and the strip computation shared by every list controller.

use core::cmp;

use crate::Scalar;

/// The slice of rows that should be realized for a given scroll position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleStrip<S: Scalar> {
    /// First realized row (inclusive).
    pub start: usize,
    /// One past the last realized row.
    pub end: usize,

    /// Extent of the rows above `start`; hosts render this as a spacer.
    pub before_extent: S,
    /// Extent of the rows below `end`; hosts render this as a spacer.
    pub after_extent: S,
    /// Extent of all rows.
    pub content_extent: S,
}

impl<S: Scalar> VisibleStrip<S> {
    /// The strip of an empty list.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            start: 0,
            end: 0,
            before_extent: S::zero(),
            after_extent: S::zero(),
            content_extent: S::zero(),
        }
    }

    /// Returns `true` if no rows are realized.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Number of realized rows.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }
}

/// Per-row extents of a dense list indexed `0..len`.
///
/// Offsets and extents share the coordinate space of the scroll offset, usually
/// logical pixels. Query methods take `&mut self` so implementations can keep
/// lazily rebuilt caches.
pub trait ExtentModel {
    /// Scalar used for extents and offsets.
    type Scalar: Scalar;

    /// Number of rows.
    fn len(&self) -> usize;

    /// Returns `true` if there are no rows.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sum of all row extents.
    fn total_extent(&mut self) -> Self::Scalar;

    /// Extent of a single row. Never negative.
    fn extent_of(&mut self, index: usize) -> Self::Scalar;

    /// Distance from the top of the list to the top of row `index`.
    ///
    /// `offset_of(0)` is zero and offsets never decrease.
    fn offset_of(&mut self, index: usize) -> Self::Scalar;

    /// The row covering `offset`, clamped into `0..len`.
    fn index_at_offset(&mut self, offset: Self::Scalar) -> usize;
}

/// An [`ExtentModel`] whose row count follows the visible option list.
pub trait ResizableExtentModel: ExtentModel {
    /// Resizes the model to `len` rows.
    fn set_len(&mut self, len: usize);
}

/// Computes which rows to realize for a viewport.
///
/// Overscan is applied separately before and after the viewport so hosts can
/// pre-render in the direction the user is scrolling. Negative inputs are
/// treated as zero.
pub fn compute_visible_strip<M>(
    model: &mut M,
    scroll_offset: M::Scalar,
    viewport_extent: M::Scalar,
    overscan_before: M::Scalar,
    overscan_after: M::Scalar,
) -> VisibleStrip<M::Scalar>
where
    M: ExtentModel,
{
    type S<M> = <M as ExtentModel>::Scalar;
    let zero = S::<M>::zero();
    let len = model.len();
    if len == 0 {
        return VisibleStrip::empty();
    }

    let mut content_extent = model.total_extent().max(zero);
    if content_extent == zero {
        // Every row collapsed.
        return VisibleStrip::empty();
    }

    let top = (scroll_offset.max(zero) - overscan_before.max(zero)).max(zero);
    let bottom = (scroll_offset.max(zero) + viewport_extent.max(zero) + overscan_after.max(zero))
        .min(content_extent);

    if bottom <= top {
        return VisibleStrip {
            start: 0,
            end: 0,
            before_extent: top,
            after_extent: (content_extent - top).max(zero),
            content_extent,
        };
    }

    let mut start = cmp::min(model.index_at_offset(top), len - 1);
    while start > 0 && model.offset_of(start) > top {
        start -= 1;
    }

    let mut end = start;
    while end < len && model.offset_of(end) < bottom {
        end += 1;
    }

    let before_extent = model.offset_of(start);
    content_extent = model.total_extent().max(content_extent);
    let end_offset = if end < len {
        model.offset_of(end)
    } else {
        content_extent
    };

    VisibleStrip {
        start,
        end,
        before_extent,
        after_extent: (content_extent - end_offset).max(zero),
        content_extent,
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{ExtentModel, VisibleStrip, compute_visible_strip};

    /// Rows with hand-picked heights, e.g. option rows mixed with taller group headers.
    #[derive(Clone, Debug)]
    struct Rows {
        heights: Vec<f32>,
    }

    impl ExtentModel for Rows {
        type Scalar = f32;

        fn len(&self) -> usize {
            self.heights.len()
        }

        fn total_extent(&mut self) -> f32 {
            self.heights.iter().sum()
        }

        fn extent_of(&mut self, index: usize) -> f32 {
            self.heights.get(index).copied().unwrap_or(0.0)
        }

        fn offset_of(&mut self, index: usize) -> f32 {
            self.heights.iter().take(index).sum()
        }

        fn index_at_offset(&mut self, offset: f32) -> usize {
            let mut top = 0.0;
            for (i, height) in self.heights.iter().copied().enumerate() {
                if top + height > offset {
                    return i;
                }
                top += height;
            }
            self.heights.len().saturating_sub(1)
        }
    }

    #[test]
    fn no_rows_means_no_strip() {
        let mut rows = Rows {
            heights: Vec::new(),
        };
        let strip = compute_visible_strip(&mut rows, 0.0, 100.0, 10.0, 10.0);
        assert_eq!(strip, VisibleStrip::empty());
        assert!(strip.is_empty());
    }

    #[test]
    fn header_and_options_split_by_viewport() {
        // A 30px group header followed by three 10px options.
        let mut rows = Rows {
            heights: [30.0, 10.0, 10.0, 10.0].to_vec(),
        };
        let strip = compute_visible_strip(&mut rows, 25.0, 10.0, 0.0, 0.0);
        assert_eq!((strip.start, strip.end), (0, 2));
        assert_eq!(strip.before_extent, 0.0);
        assert_eq!(strip.after_extent, 20.0);
        assert_eq!(strip.content_extent, 60.0);
        assert_eq!(strip.len(), 2);
    }

    #[test]
    fn overscan_only_grows_requested_side() {
        let mut rows = Rows {
            heights: [10.0; 6].to_vec(),
        };
        let strip = compute_visible_strip(&mut rows, 20.0, 20.0, 0.0, 10.0);
        assert_eq!(strip.start, 2);
        assert_eq!(strip.end, 5);
    }
}
