//! Fixed-point scalar types and saturating arithmetic
//!
//! A scale is a right-shift count. Combining two values at different binary
//! points means shifting each onto a common one first, which is what the
//! `lhs`/`rhs` scales of [`AddScales`] and [`MulScales`] describe.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::error::{FixedPointError, Result};

/// 8-bit fixed-point value
pub type Q7 = i8;
/// 16-bit fixed-point value
pub type Q15 = i16;
/// 32-bit accumulator
pub type Q31 = i32;

/// Right-shift count applied when moving a value to a coarser scale
pub type Scale = u8;

/// 1-based row index in a sparse column list, `0` terminates the column
pub type Index = u16;

/// Largest shift that is meaningful on a [`Q31`] accumulator
pub const MAX_SCALE: Scale = 31;

/// Storage precision of a quantized operand.
///
/// Implemented for [`Q7`] and [`Q15`]. Arithmetic always widens to [`Q31`]
/// and saturates on the way back.
pub trait Quantized: Copy + Default + Debug + PartialEq + Send + Sync + 'static {
    const MIN: Self;
    const MAX: Self;

    /// Widen to the accumulator type
    fn widen(self) -> Q31;

    /// Narrow from the accumulator type, clamping at the representable range
    fn saturate(value: Q31) -> Self;
}

impl Quantized for Q7 {
    const MIN: Self = i8::MIN;
    const MAX: Self = i8::MAX;

    #[inline]
    fn widen(self) -> Q31 {
        Q31::from(self)
    }

    #[inline]
    fn saturate(value: Q31) -> Self {
        value.clamp(Q31::from(i8::MIN), Q31::from(i8::MAX)) as i8
    }
}

impl Quantized for Q15 {
    const MIN: Self = i16::MIN;
    const MAX: Self = i16::MAX;

    #[inline]
    fn widen(self) -> Q31 {
        Q31::from(self)
    }

    #[inline]
    fn saturate(value: Q31) -> Self {
        value.clamp(Q31::from(i16::MIN), Q31::from(i16::MAX)) as i16
    }
}

/// Reject shifts that cannot be applied to a [`Q31`]
pub fn check_scale(scale: Scale) -> Result<()> {
    if scale > MAX_SCALE {
        return Err(FixedPointError::InvalidScale(scale));
    }
    Ok(())
}

/// Arithmetic right shift, clamped to [`MAX_SCALE`]
#[inline]
pub fn shr(value: Q31, scale: Scale) -> Q31 {
    value >> scale.min(MAX_SCALE)
}

/// Move a value from `from` to `to` fractional bits.
///
/// Shifting left saturates at the [`Q15`] range; shifting right truncates
/// towards negative infinity.
#[inline]
pub fn rescale(value: Q31, from: Scale, to: Scale) -> Q15 {
    if to >= from {
        let shift = (to - from).min(MAX_SCALE);
        let widened = i64::from(value) << shift;
        widened.clamp(i64::from(i16::MIN), i64::from(i16::MAX)) as i16
    } else {
        Q15::saturate(shr(value, from - to))
    }
}

/// Scales for a saturating addition or subtraction.
///
/// `lhs` and `rhs` bring both operands onto a common scale, `out` rescales the
/// exact sum before it is narrowed and `demote` drops further precision after
/// saturation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddScales {
    pub lhs: Scale,
    pub rhs: Scale,
    pub out: Scale,
    #[serde(default)]
    pub demote: Scale,
}

impl AddScales {
    /// Shifts in field order, `demote` last
    pub fn new(lhs: Scale, rhs: Scale, out: Scale, demote: Scale) -> Self {
        Self { lhs, rhs, out, demote }
    }

    /// Reject any shift past `MAX_SCALE`
    pub fn validate(&self) -> Result<()> {
        check_scale(self.lhs)?;
        check_scale(self.rhs)?;
        check_scale(self.out)?;
        check_scale(self.demote)
    }
}

/// Scales for a saturating multiplication: the product is shifted right by
/// `lhs` then by `rhs`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MulScales {
    pub lhs: Scale,
    pub rhs: Scale,
}

impl MulScales {
    /// Product shifts, `lhs` first
    pub fn new(lhs: Scale, rhs: Scale) -> Self {
        Self { lhs, rhs }
    }

    /// Both shifts must fit `MAX_SCALE`
    pub fn validate(&self) -> Result<()> {
        check_scale(self.lhs)?;
        check_scale(self.rhs)
    }
}

#[inline]
fn narrow<T: Quantized>(sum: Q31, scales: &AddScales) -> T {
    let saturated = T::saturate(shr(sum, scales.out));
    T::saturate(shr(saturated.widen(), scales.demote))
}

/// Saturating `a + b`
#[inline]
pub fn add<T: Quantized>(a: T, b: T, scales: &AddScales) -> T {
    let sum = shr(a.widen(), scales.lhs) + shr(b.widen(), scales.rhs);
    narrow(sum, scales)
}

/// Saturating `a - b`
#[inline]
pub fn sub<T: Quantized>(a: T, b: T, scales: &AddScales) -> T {
    let diff = shr(a.widen(), scales.lhs) - shr(b.widen(), scales.rhs);
    narrow(diff, scales)
}

/// Saturating `a * b`
#[inline]
pub fn mul<T: Quantized>(a: T, b: T, scales: &MulScales) -> T {
    // |a * b| <= 2^30 for Q15 operands, so the product never overflows Q31
    let product = a.widen() * b.widen();
    T::saturate(shr(shr(product, scales.lhs), scales.rhs))
}
