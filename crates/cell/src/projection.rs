//! Projection stage: `pre = M · v` for the W and U matrices
//!
//! The cell driver only sees the [`Projection`] trait, so the gate, candidate
//! and update arithmetic is shared by every storage layout.

use fastgrnn_fixed_point::{m_mulvec, m_sparse_mulvec, MulVecScales, Quantized, Q15};

use crate::matrix::{FullRank, LowRank};
use crate::scales::{LowRankScales, ProjectionScales};

/// A projection matrix the cell can multiply by
pub trait Projection {
    type Scales: ProjectionScales;

    /// Whether [`Projection::project`] needs an intermediate buffer
    const NEEDS_SCRATCH: bool;

    fn rows(&self) -> usize;

    fn cols(&self) -> usize;

    /// Length of the intermediate buffer, zero when none is needed
    fn scratch_len(&self) -> usize {
        0
    }

    /// Write `rows()` values of `M · operand` into `out`
    fn project<T: Quantized>(
        &self,
        operand: &[T],
        out: &mut [Q15],
        scratch: &mut [Q15],
        scales: &Self::Scales,
    );
}

impl<'a> Projection for FullRank<'a> {
    type Scales = MulVecScales;

    const NEEDS_SCRATCH: bool = false;

    fn rows(&self) -> usize {
        match self {
            Self::Dense(m) => m.rows(),
            Self::Sparse(m) => m.rows(),
        }
    }

    fn cols(&self) -> usize {
        match self {
            Self::Dense(m) => m.cols(),
            Self::Sparse(m) => m.cols(),
        }
    }

    fn project<T: Quantized>(
        &self,
        operand: &[T],
        out: &mut [Q15],
        _scratch: &mut [Q15],
        scales: &MulVecScales,
    ) {
        match self {
            Self::Dense(m) => m_mulvec(m.data(), m.cols(), operand, out, scales),
            Self::Sparse(m) => m_sparse_mulvec(m.row_ids(), m.values(), operand, out, scales),
        }
    }
}

impl<'a> Projection for LowRank<'a> {
    type Scales = LowRankScales;

    const NEEDS_SCRATCH: bool = true;

    fn rows(&self) -> usize {
        self.first().rows()
    }

    fn cols(&self) -> usize {
        self.second().cols()
    }

    fn scratch_len(&self) -> usize {
        self.rank()
    }

    /// `scratch = second · operand`, then `out = first · scratch`
    fn project<T: Quantized>(
        &self,
        operand: &[T],
        out: &mut [Q15],
        scratch: &mut [Q15],
        scales: &LowRankScales,
    ) {
        let second = self.second();
        let first = self.first();
        m_mulvec(second.data(), second.cols(), operand, scratch, &scales.inner);
        m_mulvec(first.data(), first.cols(), scratch, out, &scales.outer);
    }
}
