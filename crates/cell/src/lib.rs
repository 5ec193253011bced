//! FastGRNN Cell
//!
//! Integer-only evaluation of the FastGRNN recurrent cell for targets without
//! a usable FPU. Weights, scales and scratch memory are owned by the caller;
//! the cell borrows them for one call and never allocates.
//!
//! Per step: normalize the input, project it and the hidden state, add the
//! biases, squash through sigmoid (gate) and tanh (candidate), then blend
//! `h = (zeta * (1 - z) + nu) * h~ + z * h` back into the hidden state.

mod buffers;
mod cell;
mod error;
mod gates;
mod matrix;
mod norm;
mod params;
mod projection;
mod scales;
mod update;

pub use buffers::ScratchBuffers;
pub use cell::{Direction, FastGrnn, Q15FastGrnn, Q15FastGrnnLr, Q7xQ15FastGrnn};
pub use error::{
    status_code, CellError, ConfigError, PreCompBuffer, Result, ERR_NORMFEATURES_NOT_INIT,
    ERR_PRECOMP_NOT_INIT, ERR_TEMPLRU_NOT_INIT, ERR_TEMPLRW_NOT_INIT,
};
pub use matrix::{DenseMatrix, FullRank, LowRank, SparseMatrix};
pub use params::{CellParams, Normalization};
pub use projection::Projection;
pub use scales::{
    CandidateScales, FullRankScaleTable, GateScales, LowRankScaleTable, LowRankScales,
    NormalizationScales, ProjectionScales, ScaleTable, UpdateScales,
};
