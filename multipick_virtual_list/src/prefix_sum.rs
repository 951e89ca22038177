// Copyright 2025 the Multipick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Estimated row heights refined by measurement.

use alloc::vec::Vec;

use crate::{ExtentModel, ResizableExtentModel, Scalar};

/// An [`ExtentModel`] for rows of varying height.
///
/// New rows start at the configured estimate. Hosts call
/// [`EstimatedExtentModel::measure`] once a row has been laid out; offsets
/// are kept as prefix sums and rebuilt lazily from the first stale row.
#[derive(Clone, Debug)]
pub struct EstimatedExtentModel<S: Scalar> {
    estimate: S,
    extents: Vec<S>,
    starts: Vec<S>,
    stale_from: Option<usize>,
}

impl<S: Scalar> EstimatedExtentModel<S> {
    /// Creates a model of `len` rows, each assumed to be `estimate` tall.
    #[must_use]
    pub fn new(len: usize, estimate: S) -> Self {
        let estimate = if estimate.is_sign_negative() {
            S::zero()
        } else {
            estimate
        };
        let mut model = Self {
            estimate,
            extents: Vec::new(),
            starts: Vec::new(),
            stale_from: Some(0),
        };
        model.set_len(len);
        model
    }

    /// The height assumed for rows that have not been measured.
    #[must_use]
    pub const fn estimate(&self) -> S {
        self.estimate
    }

    /// Resizes to `len` rows. Added rows use the estimate.
    pub fn set_len(&mut self, len: usize) {
        let old = self.extents.len();
        self.extents.resize(len, self.estimate);
        self.starts.resize(len, S::zero());
        let from = old.min(len);
        self.stale_from = Some(self.stale_from.map_or(from, |s| s.min(from)));
    }

    /// Records the measured height of row `index`.
    ///
    /// Rows past the end are ignored; only [`set_len`](Self::set_len) changes
    /// the row count.
    pub fn measure(&mut self, index: usize, extent: S) {
        debug_assert!(
            extent.is_finite(),
            "measured row extents must be finite; got {extent:?}"
        );
        if index >= self.extents.len() {
            return;
        }
        let extent = if extent.is_sign_negative() {
            S::zero()
        } else {
            extent
        };
        if self.extents[index] != extent {
            self.extents[index] = extent;
            self.stale_from = Some(self.stale_from.map_or(index, |s| s.min(index)));
        }
    }

    fn refresh_through(&mut self, through: usize) {
        let len = self.extents.len();
        if len == 0 || through >= len {
            return;
        }
        let from = match self.stale_from {
            Some(from) if from <= through => from,
            _ => return,
        };

        let mut top = if from == 0 {
            S::zero()
        } else {
            self.starts[from - 1] + self.extents[from - 1]
        };
        for i in from..len {
            self.starts[i] = top;
            top = top + self.extents[i];
        }
        self.stale_from = None;
    }
}

impl<S: Scalar> ExtentModel for EstimatedExtentModel<S> {
    type Scalar = S;

    fn len(&self) -> usize {
        self.extents.len()
    }

    fn total_extent(&mut self) -> S {
        match self.extents.len() {
            0 => S::zero(),
            len => self.offset_of(len - 1) + self.extents[len - 1],
        }
    }

    fn extent_of(&mut self, index: usize) -> S {
        self.extents.get(index).copied().unwrap_or_else(S::zero)
    }

    fn offset_of(&mut self, index: usize) -> S {
        if index == 0 || self.extents.is_empty() {
            return S::zero();
        }
        let index = index.min(self.extents.len() - 1);
        self.refresh_through(index);
        self.starts[index]
    }

    fn index_at_offset(&mut self, offset: S) -> usize {
        let len = self.extents.len();
        if len == 0 {
            return 0;
        }
        self.refresh_through(len - 1);
        let target = offset.max(S::zero());
        match self.starts.binary_search_by(|start| {
            start
                .partial_cmp(&target)
                .unwrap_or(core::cmp::Ordering::Equal)
        }) {
            Ok(i) => i,
            Err(i) => i.saturating_sub(1),
        }
    }
}

impl<S: Scalar> ResizableExtentModel for EstimatedExtentModel<S> {
    fn set_len(&mut self, len: usize) {
        self.set_len(len);
    }
}

#[cfg(test)]
mod tests {
    use super::{EstimatedExtentModel, ExtentModel};

    #[test]
    fn unmeasured_rows_use_the_estimate() {
        let mut rows = EstimatedExtentModel::new(4, 20.0_f64);
        assert_eq!(rows.total_extent(), 80.0);
        assert_eq!(rows.offset_of(2), 40.0);
        assert_eq!(rows.index_at_offset(45.0), 2);
    }

    #[test]
    fn measurement_shifts_later_offsets() {
        let mut rows = EstimatedExtentModel::new(3, 20.0_f64);
        // The first row turns out to be a two-line option.
        rows.measure(0, 44.0);
        assert_eq!(rows.offset_of(1), 44.0);
        assert_eq!(rows.offset_of(2), 64.0);
        assert_eq!(rows.total_extent(), 84.0);
        assert_eq!(rows.index_at_offset(50.0), 1);
        assert_eq!(rows.index_at_offset(500.0), 2);
    }

    #[test]
    fn growing_keeps_measurements() {
        let mut rows = EstimatedExtentModel::new(1, 10.0_f32);
        rows.measure(0, 15.0);
        rows.set_len(3);
        assert_eq!(rows.extent_of(0), 15.0);
        assert_eq!(rows.extent_of(2), 10.0);
        assert_eq!(rows.total_extent(), 35.0);
    }

    #[test]
    fn measuring_past_the_end_is_ignored() {
        let mut rows = EstimatedExtentModel::new(2, 10.0_f64);
        rows.measure(5, 30.0);
        rows.measure(usize::MAX, 30.0);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows.total_extent(), 20.0);
    }

    #[test]
    fn negative_measurements_are_clamped() {
        let mut rows = EstimatedExtentModel::new(2, 10.0_f32);
        rows.measure(1, -3.0);
        assert_eq!(rows.extent_of(1), 0.0);
    }
}
