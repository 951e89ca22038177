// Copyright 2025 the Multipick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Uniform row heights, the common case for option lists.

use crate::{ExtentModel, ResizableExtentModel, Scalar};

/// An [`ExtentModel`] where every row has the same extent.
#[derive(Debug, Clone, Copy)]
pub struct FixedExtentModel<S: Scalar> {
    len: usize,
    extent: S,
}

impl<S: Scalar> FixedExtentModel<S> {
    /// Creates a model of `len` rows, each `extent` tall.
    ///
    /// Negative extents are clamped to zero.
    #[must_use]
    pub fn new(len: usize, extent: S) -> Self {
        Self {
            len,
            extent: clamp_extent(extent),
        }
    }

    /// Sets the number of rows.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
    }

    /// Sets the row extent.
    pub fn set_extent(&mut self, extent: S) {
        debug_assert!(
            extent.is_finite(),
            "row extents must be finite; got {extent:?}"
        );
        self.extent = clamp_extent(extent);
    }

    /// Returns the row extent.
    #[must_use]
    pub const fn extent(&self) -> S {
        self.extent
    }
}

fn clamp_extent<S: Scalar>(extent: S) -> S {
    if extent.is_sign_negative() {
        S::zero()
    } else {
        extent
    }
}

impl<S: Scalar> ExtentModel for FixedExtentModel<S> {
    type Scalar = S;

    fn len(&self) -> usize {
        self.len
    }

    fn total_extent(&mut self) -> S {
        self.extent * S::from_usize(self.len)
    }

    fn extent_of(&mut self, _index: usize) -> S {
        self.extent
    }

    fn offset_of(&mut self, index: usize) -> S {
        S::from_usize(index) * self.extent
    }

    #[allow(
        clippy::cast_possible_wrap,
        clippy::cast_sign_loss,
        reason = "Row counts fit in isize and the clamp keeps the result non-negative"
    )]
    fn index_at_offset(&mut self, offset: S) -> usize {
        if self.len == 0 || self.extent <= S::zero() {
            return 0;
        }
        let row = (offset / self.extent).floor_to_isize();
        row.clamp(0, self.len as isize - 1) as usize
    }
}

impl<S: Scalar> ResizableExtentModel for FixedExtentModel<S> {
    fn set_len(&mut self, len: usize) {
        self.set_len(len);
    }
}
