//! FastGRNN cell error types

use std::fmt;

use thiserror::Error;

use fastgrnn_fixed_point::FixedPointError;

/// Return code for a missing pre-computation buffer
pub const ERR_PRECOMP_NOT_INIT: i32 = -1;
/// Return code for a missing low-rank W buffer
pub const ERR_TEMPLRW_NOT_INIT: i32 = -2;
/// Return code for a missing low-rank U buffer
pub const ERR_TEMPLRU_NOT_INIT: i32 = -3;
/// Return code for a missing normalized-feature buffer
pub const ERR_NORMFEATURES_NOT_INIT: i32 = -4;

/// Which of the three pre-computation buffers was missing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreCompBuffer {
    PreComp1,
    PreComp2,
    PreComp3,
}

impl fmt::Display for PreCompBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::PreComp1 => "pre_comp1",
            Self::PreComp2 => "pre_comp2",
            Self::PreComp3 => "pre_comp3",
        };
        f.write_str(name)
    }
}

/// Failure of a cell evaluation.
///
/// Every variant is a scratch buffer that was not provided (or is too short);
/// all of them are detected before the first step runs.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellError {
    #[error("Pre-computation buffer {buffer} not allocated")]
    PreCompNotInit { buffer: PreCompBuffer },

    #[error("Low-rank W buffer not allocated")]
    TempLrwNotInit,

    #[error("Low-rank U buffer not allocated")]
    TempLruNotInit,

    #[error("Normalized feature buffer not allocated")]
    NormFeaturesNotInit,
}

impl CellError {
    /// Integer return code, as reported to C-style callers
    pub fn code(&self) -> i32 {
        match self {
            Self::PreCompNotInit { .. } => ERR_PRECOMP_NOT_INIT,
            Self::TempLrwNotInit => ERR_TEMPLRW_NOT_INIT,
            Self::TempLruNotInit => ERR_TEMPLRU_NOT_INIT,
            Self::NormFeaturesNotInit => ERR_NORMFEATURES_NOT_INIT,
        }
    }
}

/// Collapse an evaluation result into `0` or the error's code
pub fn status_code(result: &Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => err.code(),
    }
}

/// Result alias for this crate
pub type Result<T> = std::result::Result<T, CellError>;

/// Failure while assembling a cell from its parameters and scales
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Fixed-point error: {0}")]
    FixedPoint(#[from] FixedPointError),

    #[error("Dimension mismatch for {what}: expected {expected}, got {got}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("Malformed sparse matrix: {0}")]
    MalformedSparse(&'static str),
}
