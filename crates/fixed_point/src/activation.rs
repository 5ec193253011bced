//! Quantized sigmoid and tanh
//!
//! The direct forms are the piecewise-linear "hard" activations and define
//! the reference results. The table forms sample the smooth curves and are
//! only consulted inside the table domain of [-8, 8).

use serde::{Deserialize, Serialize};

use crate::error::{FixedPointError, Result};
use crate::fixed::{check_scale, rescale, Quantized, Scale, MAX_SCALE, Q15, Q31};
use crate::tables::{SIGMOID_TABLE, TABLE_LEN, TANH_TABLE};

/// Fractional bits of the lookup table entries
pub const TABLE_FRAC_BITS: Scale = 14;

/// log2 of the number of table samples per unit of input
const TABLE_STEP_BITS: u32 = 4;

/// The table starts at -TABLE_HALF_RANGE
const TABLE_HALF_RANGE: i64 = 8;

/// Direct sigmoid: `clamp(v / div + add, 0, limit)`, moved from `scale_in`
/// to `scale_out` fractional bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigmoidParams {
    pub scale_in: Scale,
    pub scale_out: Scale,
    pub div: Q15,
    pub add: Q15,
    pub limit: Q15,
    #[serde(default)]
    pub use_table: bool,
}

impl SigmoidParams {
    /// Hard sigmoid `x / 4 + 1/2` at `frac_bits` fractional bits in and out
    pub fn hard(frac_bits: Scale) -> Self {
        let one = rescale(1, 0, frac_bits);
        Self {
            scale_in: frac_bits,
            scale_out: frac_bits,
            div: 4,
            add: one / 2,
            limit: one,
            use_table: false,
        }
    }

    /// Scales must fit `MAX_SCALE` and `div` must be non-zero
    pub fn validate(&self) -> Result<()> {
        check_scale(self.scale_in)?;
        check_scale(self.scale_out)?;
        if self.div == 0 {
            return Err(FixedPointError::ZeroDivisor);
        }
        Ok(())
    }
}

/// Direct tanh: clamp to ±1 at `scale_in` fractional bits, moved to
/// `scale_out` fractional bits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TanhParams {
    pub scale_in: Scale,
    pub scale_out: Scale,
    #[serde(default)]
    pub use_table: bool,
}

impl TanhParams {
    /// Direct form, no table
    pub fn new(scale_in: Scale, scale_out: Scale) -> Self {
        Self { scale_in, scale_out, use_table: false }
    }

    /// Both scales must fit `MAX_SCALE`
    pub fn validate(&self) -> Result<()> {
        check_scale(self.scale_in)?;
        check_scale(self.scale_out)
    }
}

/// Largest disagreement between table and direct sigmoid under
/// [`SigmoidParams::hard`], at `scale_out` fractional bits.
pub fn sigmoid_table_tolerance(scale_out: Scale) -> Q15 {
    rescale(1, 0, scale_out) / 8
}

/// Largest disagreement between table and direct tanh, at `scale_out`
/// fractional bits.
pub fn tanh_table_tolerance(scale_out: Scale) -> Q15 {
    rescale(1, 0, scale_out) / 4
}

/// Linear interpolation into a table, `None` outside [-8, 8)
fn lookup(table: &[Q15; TABLE_LEN], v: Q15, scale_in: Scale) -> Option<Q31> {
    let s = u32::from(scale_in.min(MAX_SCALE));
    let offset = i64::from(v) + (TABLE_HALF_RANGE << s);
    if offset < 0 {
        return None;
    }

    let pos = offset << TABLE_STEP_BITS;
    let idx = usize::try_from(pos >> s).ok()?;
    if idx >= TABLE_LEN - 1 {
        return None;
    }

    let frac = pos & ((1i64 << s) - 1);
    let lo = i64::from(table[idx]);
    let hi = i64::from(table[idx + 1]);
    Some((lo + (((hi - lo) * frac) >> s)) as Q31)
}

/// Hard sigmoid `clamp(v / div + add, 0, limit)`, or the interpolated table
/// when `use_table` is set and `v` lies inside it
pub fn sigmoid(v: Q15, params: &SigmoidParams) -> Q15 {
    if params.use_table {
        if let Some(y) = lookup(&SIGMOID_TABLE, v, params.scale_in) {
            return rescale(y, TABLE_FRAC_BITS, params.scale_out);
        }
    }

    let scaled = match params.div {
        0 => v.widen(),
        div => v.widen() / Q31::from(div),
    };
    let x = scaled + Q31::from(params.add);
    let limit = Q31::from(params.limit);
    let clamped = if x >= limit {
        limit
    } else if x <= 0 {
        0
    } else {
        x
    };
    rescale(clamped, params.scale_in, params.scale_out)
}

/// Hard tanh clamping to ±1 at `scale_in`, or the interpolated table when
/// `use_table` is set and `v` lies inside it
pub fn tanh(v: Q15, params: &TanhParams) -> Q15 {
    if params.use_table {
        if let Some(y) = lookup(&TANH_TABLE, v, params.scale_in) {
            return rescale(y, TABLE_FRAC_BITS, params.scale_out);
        }
    }

    let one = 1i64 << params.scale_in.min(MAX_SCALE);
    let clamped = i64::from(v).clamp(-one, one) as Q31;
    rescale(clamped, params.scale_in, params.scale_out)
}

/// In-place sigmoid over a vector
pub fn v_sigmoid(vec: &mut [Q15], params: &SigmoidParams) {
    for v in vec.iter_mut() {
        *v = sigmoid(*v, params);
    }
}

/// In-place tanh over a vector
pub fn v_tanh(vec: &mut [Q15], params: &TanhParams) {
    for v in vec.iter_mut() {
        *v = tanh(*v, params);
    }
}
