//! Caller-owned scratch buffers and their validation
//!
//! The cell never allocates. Every intermediate vector lives in a buffer the
//! caller hands in; `None` marks a buffer that was not allocated.

use fastgrnn_fixed_point::{Quantized, Q15};

use crate::error::{CellError, PreCompBuffer, Result};
use crate::params::CellParams;
use crate::projection::Projection;

/// Scratch space for one evaluation.
///
/// `pre_comp*` need `hidden_dims` elements, `temp_lr_w`/`temp_lr_u` the W/U
/// rank (low-rank cells only) and `norm_features` `input_dims` elements in the
/// input precision (only when normalizing). Longer buffers are fine; shorter
/// ones count as missing.
#[derive(Debug, Default)]
pub struct ScratchBuffers<'a, T = Q15> {
    pub pre_comp1: Option<&'a mut [Q15]>,
    pub pre_comp2: Option<&'a mut [Q15]>,
    pub pre_comp3: Option<&'a mut [Q15]>,
    pub temp_lr_w: Option<&'a mut [Q15]>,
    pub temp_lr_u: Option<&'a mut [Q15]>,
    pub norm_features: Option<&'a mut [T]>,
}

/// Buffers after validation, trimmed to the lengths the cell uses
pub(crate) struct Workspace<'s, T> {
    pub pre_comp1: &'s mut [Q15],
    pub pre_comp2: &'s mut [Q15],
    pub pre_comp3: &'s mut [Q15],
    pub temp_lr_w: &'s mut [Q15],
    pub temp_lr_u: &'s mut [Q15],
    pub norm_features: Option<&'s mut [T]>,
}

fn require<'s, X>(
    slot: &'s mut Option<&mut [X]>,
    len: usize,
    err: CellError,
) -> Result<&'s mut [X]> {
    match slot.as_deref_mut() {
        Some(buf) if buf.len() >= len => Ok(&mut buf[..len]),
        _ => Err(err),
    }
}

impl<'a, T: Quantized> ScratchBuffers<'a, T> {
    /// Buffers for a full-rank cell without normalization
    pub fn new(
        pre_comp1: &'a mut [Q15],
        pre_comp2: &'a mut [Q15],
        pre_comp3: &'a mut [Q15],
    ) -> Self {
        Self {
            pre_comp1: Some(pre_comp1),
            pre_comp2: Some(pre_comp2),
            pre_comp3: Some(pre_comp3),
            temp_lr_w: None,
            temp_lr_u: None,
            norm_features: None,
        }
    }

    /// Attach the low-rank temporaries
    pub fn with_low_rank(mut self, temp_lr_w: &'a mut [Q15], temp_lr_u: &'a mut [Q15]) -> Self {
        self.temp_lr_w = Some(temp_lr_w);
        self.temp_lr_u = Some(temp_lr_u);
        self
    }

    /// Attach the normalized-input buffer
    pub fn with_norm_features(mut self, norm_features: &'a mut [T]) -> Self {
        self.norm_features = Some(norm_features);
        self
    }

    /// Check the buffers a cell needs, in the order pre_comp1..3, temp_lr_w,
    /// temp_lr_u, norm_features. Buffers the cell does not use are ignored.
    pub fn validate<P: Projection>(
        &mut self,
        params: &CellParams<'_, P, T>,
        hidden_dims: usize,
        normalize: bool,
    ) -> Result<()> {
        self.acquire(params, hidden_dims, normalize).map(|_| ())
    }

    pub(crate) fn acquire<P: Projection>(
        &mut self,
        params: &CellParams<'_, P, T>,
        hidden_dims: usize,
        normalize: bool,
    ) -> Result<Workspace<'_, T>> {
        let pre_comp1 = require(
            &mut self.pre_comp1,
            hidden_dims,
            CellError::PreCompNotInit { buffer: PreCompBuffer::PreComp1 },
        )?;
        let pre_comp2 = require(
            &mut self.pre_comp2,
            hidden_dims,
            CellError::PreCompNotInit { buffer: PreCompBuffer::PreComp2 },
        )?;
        let pre_comp3 = require(
            &mut self.pre_comp3,
            hidden_dims,
            CellError::PreCompNotInit { buffer: PreCompBuffer::PreComp3 },
        )?;

        let (temp_lr_w, temp_lr_u): (&mut [Q15], &mut [Q15]) = if P::NEEDS_SCRATCH {
            (
                require(&mut self.temp_lr_w, params.w.scratch_len(), CellError::TempLrwNotInit)?,
                require(&mut self.temp_lr_u, params.u.scratch_len(), CellError::TempLruNotInit)?,
            )
        } else {
            (Default::default(), Default::default())
        };

        let norm_features = if normalize {
            Some(require(
                &mut self.norm_features,
                params.input_dims(),
                CellError::NormFeaturesNotInit,
            )?)
        } else {
            None
        };

        Ok(Workspace {
            pre_comp1,
            pre_comp2,
            pre_comp3,
            temp_lr_w,
            temp_lr_u,
            norm_features,
        })
    }
}
