//! Cell parameters

use fastgrnn_fixed_point::{Quantized, Q15};

use crate::error::ConfigError;
use crate::projection::Projection;

/// Per-feature input statistics.
///
/// `std_dev` holds the reciprocal standard deviation so normalization is a
/// multiply. Each slice is either `input_dims` long and shared by every
/// step, or `input_dims * steps` long with one row per step.
#[derive(Debug, Clone, Copy)]
pub struct Normalization<'a, T> {
    pub mean: &'a [T],
    pub std_dev: &'a [T],
}

impl<'a, T: Quantized> Normalization<'a, T> {
    /// Wraps mean and reciprocal std_dev slices of equal layout
    pub fn new(mean: &'a [T], std_dev: &'a [T]) -> Self {
        Self { mean, std_dev }
    }

    /// Statistics applying to the input vector at `offset`
    pub fn for_step(&self, offset: usize, input_dims: usize) -> (&'a [T], &'a [T]) {
        (
            step_row(self.mean, offset, input_dims),
            step_row(self.std_dev, offset, input_dims),
        )
    }

    fn validate(&self, input_dims: usize) -> Result<(), ConfigError> {
        for (what, stats) in [("normalization mean", self.mean), ("normalization std_dev", self.std_dev)] {
            if stats.is_empty() || input_dims == 0 || stats.len() % input_dims != 0 {
                return Err(ConfigError::DimensionMismatch {
                    what,
                    expected: input_dims,
                    got: stats.len(),
                });
            }
        }
        Ok(())
    }
}

fn step_row<T>(stats: &[T], offset: usize, input_dims: usize) -> &[T] {
    if stats.len() == input_dims {
        return stats;
    }
    let start = offset * input_dims;
    debug_assert!(
        start + input_dims <= stats.len(),
        "no statistics row for input step {offset}"
    );
    stats
        .get(start..start + input_dims)
        .unwrap_or(&stats[..input_dims.min(stats.len())])
}

/// Weights of one FastGRNN cell.
///
/// `w` maps the input (`input_dims`) and `u` the hidden state (`hidden_dims`)
/// onto `hidden_dims` pre-activations.
#[derive(Debug, Clone)]
pub struct CellParams<'a, P, T = Q15> {
    pub w: P,
    pub u: P,
    pub normalization: Option<Normalization<'a, T>>,
    /// Gate bias
    pub bg: &'a [Q15],
    /// Candidate bias
    pub bh: &'a [Q15],
    pub sigmoid_zeta: Q15,
    pub sigmoid_nu: Q15,
}

impl<'a, P: Projection, T: Quantized> CellParams<'a, P, T> {
    /// Rows of `u`
    pub fn hidden_dims(&self) -> usize {
        self.u.rows()
    }

    /// Columns of `w`
    pub fn input_dims(&self) -> usize {
        self.w.cols()
    }

    /// Check that every weight agrees on the cell's dimensions
    pub fn validate(&self) -> Result<(), ConfigError> {
        let hidden = self.hidden_dims();
        let checks = [
            ("U columns", self.u.cols()),
            ("W rows", self.w.rows()),
            ("gate bias", self.bg.len()),
            ("candidate bias", self.bh.len()),
        ];
        for (what, got) in checks {
            if got != hidden {
                return Err(ConfigError::DimensionMismatch {
                    what,
                    expected: hidden,
                    got,
                });
            }
        }

        if let Some(norm) = &self.normalization {
            norm.validate(self.input_dims())?;
        }
        Ok(())
    }
}
