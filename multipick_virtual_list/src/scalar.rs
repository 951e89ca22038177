// Copyright 2025 the Multipick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Numeric abstraction for extents and scroll offsets.

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Sub};

/// A floating-point type usable for row extents, offsets, and scroll positions.
///
/// Implemented for `f32` and `f64`. Only the handful of operations the
/// virtualization math needs are exposed, and all of them are available in
/// `core`, so no `libm` is required.
pub trait Scalar:
    Copy
    + Debug
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// Converts an item count or index into this scalar type.
    fn from_usize(value: usize) -> Self;

    /// Returns `true` for finite values.
    fn is_finite(self) -> bool;

    /// Returns `true` for NaN.
    fn is_nan(self) -> bool;

    /// Returns `true` if the sign bit is set (including `-0.0`).
    fn is_sign_negative(self) -> bool;

    /// Rounds toward negative infinity and converts to `isize`, saturating.
    fn floor_to_isize(self) -> isize;

    /// The larger of `self` and `other`; NaN loses.
    #[must_use]
    fn max(self, other: Self) -> Self {
        if self >= other || other.is_nan() {
            self
        } else {
            other
        }
    }

    /// The smaller of `self` and `other`; NaN loses.
    #[must_use]
    fn min(self, other: Self) -> Self {
        if self <= other || other.is_nan() {
            self
        } else {
            other
        }
    }
}

macro_rules! impl_scalar {
    ($ty:ty) => {
        impl Scalar for $ty {
            fn zero() -> Self {
                0.0
            }

            #[allow(
                clippy::cast_precision_loss,
                reason = "Option lists are far below the precision limit"
            )]
            fn from_usize(value: usize) -> Self {
                value as $ty
            }

            fn is_finite(self) -> bool {
                <$ty>::is_finite(self)
            }

            fn is_nan(self) -> bool {
                <$ty>::is_nan(self)
            }

            fn is_sign_negative(self) -> bool {
                <$ty>::is_sign_negative(self)
            }

            #[allow(
                clippy::cast_possible_truncation,
                reason = "Float to int casts saturate; callers clamp the result"
            )]
            fn floor_to_isize(self) -> isize {
                let truncated = self as isize;
                if (truncated as $ty) > self {
                    truncated.saturating_sub(1)
                } else {
                    truncated
                }
            }
        }
    };
}

impl_scalar!(f32);
impl_scalar!(f64);
