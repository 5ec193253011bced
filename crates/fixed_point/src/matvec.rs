//! Quantized matrix-vector multiply
//!
//! Matrices are always [`Q15`]; the vector operand may be [`Q15`] or [`Q7`],
//! which is all the mixed-precision cell needs.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::fixed::{check_scale, shr, Index, Quantized, Scale, Q15, Q31};

/// Scales for `out = M · v`.
///
/// Every product is shifted right by `matrix + vector` before it is
/// accumulated, and the sum is shifted by `out` before it is narrowed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MulVecScales {
    pub matrix: Scale,
    pub vector: Scale,
    pub out: Scale,
}

impl MulVecScales {
    /// Shifts for the two operands and the accumulated row
    pub fn new(matrix: Scale, vector: Scale, out: Scale) -> Self {
        Self { matrix, vector, out }
    }

    /// Reject any shift past `MAX_SCALE`
    pub fn validate(&self) -> Result<()> {
        check_scale(self.matrix)?;
        check_scale(self.vector)?;
        check_scale(self.out)
    }

    #[inline]
    fn product<T: Quantized>(&self, m: Q15, v: T) -> Q31 {
        shr(shr(Q31::from(m) * v.widen(), self.matrix), self.vector)
    }
}

/// Dense row-major multiply: `out[r] = Σ_c mat[r * cols + c] · vec[c]`.
///
/// One output per row of `mat` up to `out.len()`.
pub fn m_mulvec<T: Quantized>(
    mat: &[Q15],
    cols: usize,
    vec: &[T],
    out: &mut [Q15],
    scales: &MulVecScales,
) {
    if cols == 0 {
        out.fill(0);
        return;
    }

    for (o, row) in out.iter_mut().zip(mat.chunks_exact(cols)) {
        let acc = row
            .iter()
            .zip(vec)
            .fold(0, |acc: Q31, (&m, &v)| acc.saturating_add(scales.product(m, v)));
        *o = Q15::saturate(shr(acc, scales.out));
    }
}

/// Column-compressed sparse multiply.
///
/// Column `c` of the matrix is the run of `row_ids` up to the next `0`
/// sentinel; its non-zero values are the matching run of `values`. Row ids are
/// 1-based and ids past `out` are skipped. Every term is rescaled to the
/// output scale, then each row is accumulated in [`Q31`] and narrowed once.
pub fn m_sparse_mulvec<T: Quantized>(
    row_ids: &[Index],
    values: &[Q15],
    vec: &[T],
    out: &mut [Q15],
    scales: &MulVecScales,
) {
    for (row, o) in out.iter_mut().enumerate() {
        let target = row + 1;
        let mut acc: Q31 = 0;

        let mut ids = row_ids.iter();
        let mut vals = values.iter();
        for &v in vec {
            let column = ids.by_ref().take_while(|&&id| id != 0);
            for (&id, &m) in column.zip(vals.by_ref()) {
                if usize::from(id) == target {
                    acc = acc.saturating_add(shr(scales.product(m, v), scales.out));
                }
            }
        }
        *o = Q15::saturate(acc);
    }
}
