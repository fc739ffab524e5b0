//! Floating-point abstraction trait for generic numeric operations.

use core::cmp::PartialOrd;
use core::ops::{Add, Sub, Mul, Div, Neg};

/// Trait abstracting the floating-point operations needed by the collision core.
///
/// Implemented for `f32` and `f64`.
pub trait Float:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Default
    + core::fmt::Debug
{
    /// The additive identity (0.0).
    fn zero() -> Self;
    /// The multiplicative identity (1.0).
    fn one() -> Self;
    /// Half (0.5).
    fn half() -> Self;
    /// Two (2.0).
    fn two() -> Self;
    /// Absolute value.
    fn abs(self) -> Self;
    /// Minimum of two values.
    fn min(self, other: Self) -> Self;
    /// Maximum of two values.
    fn max(self, other: Self) -> Self;
    /// Convert from f64 (for constants and configuration).
    fn from_f64(v: f64) -> Self;
    /// Convert from a frame or sample count.
    fn from_usize(v: usize) -> Self;
    /// Neither infinite nor NaN.
    fn is_finite(self) -> bool;

    /// Clamp self to [min, max].
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }

    /// Finite and strictly greater than zero.
    fn is_positive_finite(self) -> bool {
        self.is_finite() && self > Self::zero()
    }
}

impl Float for f32 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn half() -> Self { 0.5 }
    fn two() -> Self { 2.0 }
    fn abs(self) -> Self { libm::fabsf(self) }
    fn min(self, other: Self) -> Self { if self < other { self } else { other } }
    fn max(self, other: Self) -> Self { if self > other { self } else { other } }
    fn from_f64(v: f64) -> Self { v as f32 }
    fn from_usize(v: usize) -> Self { v as f32 }
    fn is_finite(self) -> bool { f32::is_finite(self) }
}

impl Float for f64 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn half() -> Self { 0.5 }
    fn two() -> Self { 2.0 }
    fn abs(self) -> Self { libm::fabs(self) }
    fn min(self, other: Self) -> Self { if self < other { self } else { other } }
    fn max(self, other: Self) -> Self { if self > other { self } else { other } }
    fn from_f64(v: f64) -> Self { v }
    fn from_usize(v: usize) -> Self { v as f64 }
    fn is_finite(self) -> bool { f64::is_finite(self) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_respects_bounds() {
        assert_eq!(Float::clamp(75.0f64, 1.0, 50.0), 50.0);
        assert_eq!(Float::clamp(-3.0f32, 1.0, 50.0), 1.0);
        assert_eq!(Float::clamp(12.5f64, 1.0, 50.0), 12.5);
    }

    #[test]
    fn positive_finite_rejects_nan_and_zero() {
        assert!(1.0f64.is_positive_finite());
        assert!(!0.0f64.is_positive_finite());
        assert!(!(-2.0f32).is_positive_finite());
        assert!(!f64::NAN.is_positive_finite());
        assert!(!f32::INFINITY.is_positive_finite());
    }
}
