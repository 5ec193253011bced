//! FastGRNN cell and step driver

use fastgrnn_fixed_point::{Quantized, Q15, Q7};

use crate::buffers::{ScratchBuffers, Workspace};
use crate::error::{ConfigError, Result};
use crate::gates::{candidate, combine_projections, update_gate};
use crate::matrix::{FullRank, LowRank};
use crate::norm::normalize_input;
use crate::params::CellParams;
use crate::projection::Projection;
use crate::scales::ScaleTable;
use crate::update::update_hidden_state;

/// Order in which the input steps are consumed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    /// `Backward` when `backward` is set
    pub fn from_backward(backward: bool) -> Self {
        if backward {
            Self::Backward
        } else {
            Self::Forward
        }
    }

    /// Input row read at iteration `i` of `steps`, for `i < steps`
    pub(crate) fn step_index(self, i: usize, steps: usize) -> usize {
        match self {
            Self::Forward => i,
            Self::Backward => steps.saturating_sub(i + 1),
        }
    }
}

/// A FastGRNN cell: weights plus the scales they were quantized with.
///
/// `P` selects the projection layout and `T` the input precision. Only the
/// combinations with a `run` method can be evaluated: dense/sparse with Q15
/// or Q7 input, and low-rank with Q15 input.
#[derive(Debug, Clone)]
pub struct FastGrnn<'a, P: Projection, T: Quantized = Q15> {
    params: CellParams<'a, P, T>,
    scales: ScaleTable<P::Scales>,
}

/// Dense or sparse cell, Q15 input
pub type Q15FastGrnn<'a> = FastGrnn<'a, FullRank<'a>, Q15>;

/// Dense or sparse cell, Q7 input and Q15 hidden state
pub type Q7xQ15FastGrnn<'a> = FastGrnn<'a, FullRank<'a>, Q7>;

/// Low-rank cell, Q15 input
pub type Q15FastGrnnLr<'a> = FastGrnn<'a, LowRank<'a>, Q15>;

impl<'a, P: Projection, T: Quantized> FastGrnn<'a, P, T> {
    /// Pair weights with their scale table, checking that both are consistent
    pub fn new(
        params: CellParams<'a, P, T>,
        scales: ScaleTable<P::Scales>,
    ) -> std::result::Result<Self, ConfigError> {
        params.validate()?;
        scales.validate()?;

        tracing::debug!(
            hidden_dims = params.hidden_dims(),
            input_dims = params.input_dims(),
            "Created FastGRNN cell"
        );
        Ok(Self { params, scales })
    }

    /// Weights this cell was built from
    pub fn params(&self) -> &CellParams<'a, P, T> {
        &self.params
    }

    /// Scale table paired with the weights
    pub fn scales(&self) -> &ScaleTable<P::Scales> {
        &self.scales
    }

    /// Length of the hidden state
    pub fn hidden_dims(&self) -> usize {
        self.params.hidden_dims()
    }

    /// Length of one input step
    pub fn input_dims(&self) -> usize {
        self.params.input_dims()
    }

    fn evaluate(
        &self,
        hidden_state: &mut [Q15],
        input: &[T],
        buffers: &mut ScratchBuffers<'_, T>,
        direction: Direction,
        normalize: bool,
    ) -> Result<()> {
        let params = &self.params;
        let scales = &self.scales;
        let hidden_dims = params.hidden_dims();
        let input_dims = params.input_dims();
        debug_assert_eq!(hidden_state.len(), hidden_dims);
        debug_assert!(input_dims == 0 || input.len() % input_dims == 0);

        let steps = input.len().checked_div(input_dims).unwrap_or(0);
        tracing::debug!(hidden_dims, input_dims, steps, ?direction, normalize, "Running FastGRNN");

        let Workspace {
            pre_comp1,
            pre_comp2,
            pre_comp3,
            temp_lr_w,
            temp_lr_u,
            mut norm_features,
        } = buffers
            .acquire(params, hidden_dims, normalize)
            .map_err(|err| {
                tracing::warn!(code = err.code(), "FastGRNN buffer check failed: {}", err);
                err
            })?;

        for i in 0..steps {
            let offset = direction.step_index(i, steps);
            let start = offset * input_dims;
            tracing::trace!(step = i, offset, "FastGRNN step");

            let stats = params
                .normalization
                .as_ref()
                .map(|norm| norm.for_step(offset, input_dims));
            let x = normalize_input(
                &input[start..start + input_dims],
                norm_features.as_deref_mut(),
                stats,
                &scales.normalization,
            );

            params.w.project(x, pre_comp1, temp_lr_w, &scales.w);
            params.u.project(&hidden_state[..], pre_comp2, temp_lr_u, &scales.u);
            combine_projections(pre_comp1, pre_comp2, &scales.projection_sum);

            update_gate(pre_comp1, params.bg, pre_comp2, &scales.gate);
            candidate(pre_comp1, params.bh, &scales.candidate);

            update_hidden_state(
                hidden_state,
                pre_comp2,
                pre_comp1,
                pre_comp3,
                params.sigmoid_zeta,
                params.sigmoid_nu,
                &scales.update,
            );
        }
        Ok(())
    }
}

impl<'a> FastGrnn<'a, FullRank<'a>, Q15> {
    /// Run the cell over `input` (`input_dims` values per step), updating
    /// `hidden_state` in place.
    ///
    /// On error nothing has been computed and `hidden_state` is untouched.
    pub fn run(
        &self,
        hidden_state: &mut [Q15],
        input: &[Q15],
        buffers: &mut ScratchBuffers<'_, Q15>,
        direction: Direction,
        normalize: bool,
    ) -> Result<()> {
        self.evaluate(hidden_state, input, buffers, direction, normalize)
    }
}

impl<'a> FastGrnn<'a, FullRank<'a>, Q7> {
    /// As [`Q15FastGrnn::run`], with Q7 input. `norm_features` is Q7 too.
    pub fn run(
        &self,
        hidden_state: &mut [Q15],
        input: &[Q7],
        buffers: &mut ScratchBuffers<'_, Q7>,
        direction: Direction,
        normalize: bool,
    ) -> Result<()> {
        self.evaluate(hidden_state, input, buffers, direction, normalize)
    }
}

impl<'a> FastGrnn<'a, LowRank<'a>, Q15> {
    /// As [`Q15FastGrnn::run`]; `buffers` also needs `temp_lr_w` and
    /// `temp_lr_u`.
    pub fn run(
        &self,
        hidden_state: &mut [Q15],
        input: &[Q15],
        buffers: &mut ScratchBuffers<'_, Q15>,
        direction: Direction,
        normalize: bool,
    ) -> Result<()> {
        self.evaluate(hidden_state, input, buffers, direction, normalize)
    }
}
