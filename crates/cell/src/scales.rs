//! Fixed-point scale table
//!
//! Every intermediate quantity of the cell has its own scale, derived offline
//! together with the weights. A table is built once at model load, validated,
//! and shared by reference with every evaluation of the matching cell.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use fastgrnn_fixed_point::{
    AddScales, MulScales, MulVecScales, SigmoidParams, TanhParams, Q15,
};

use crate::error::ConfigError;

/// Scales consumed by one projection (W or U)
pub trait ProjectionScales: std::fmt::Debug + Clone {
    fn validate(&self) -> fastgrnn_fixed_point::Result<()>;
}

impl ProjectionScales for MulVecScales {
    fn validate(&self) -> fastgrnn_fixed_point::Result<()> {
        MulVecScales::validate(self)
    }
}

/// Scales for a low-rank projection `M1 · (M2 · v)`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LowRankScales {
    /// `M2 · v` into the rank-sized scratch buffer
    pub inner: MulVecScales,
    /// `M1 · scratch` into the pre-computation buffer
    pub outer: MulVecScales,
}

impl ProjectionScales for LowRankScales {
    fn validate(&self) -> fastgrnn_fixed_point::Result<()> {
        self.inner.validate()?;
        self.outer.validate()
    }
}

/// Mean subtraction followed by multiplication with the reciprocal
/// standard deviation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizationScales {
    /// `input - mean`
    pub mean_sub: AddScales,
    /// `(input - mean) * std_dev`
    pub std_dev: MulScales,
}

/// Update gate `z = sigmoid(pre + bg)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateScales {
    pub bias: AddScales,
    pub sigmoid: SigmoidParams,
}

/// Candidate state `h~ = tanh(pre + bh)`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateScales {
    pub bias: AddScales,
    pub tanh: TanhParams,
}

/// Scales of `h = (zeta * (1 - z) + nu) * h~ + z * h`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateScales {
    /// `z * h`
    pub gate_hidden: MulScales,
    /// The value 1 as seen by `one_minus_gate`
    pub q_one: Q15,
    /// `1 - z`
    pub one_minus_gate: AddScales,
    /// `zeta * (1 - z)`
    pub zeta: MulScales,
    /// `nu + zeta * (1 - z)`
    pub nu: AddScales,
    /// Coefficient times candidate; both shifts are applied to the product
    pub blend: MulScales,
    /// Final sum, demoted to the hidden-state scale
    pub hidden_state: AddScales,
}

/// All scales of one cell, generic over the projection layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleTable<P> {
    #[serde(default)]
    pub normalization: NormalizationScales,
    pub w: P,
    pub u: P,
    /// `W·x + U·h`
    pub projection_sum: AddScales,
    pub gate: GateScales,
    pub candidate: CandidateScales,
    pub update: UpdateScales,
}

/// Scale table for dense and sparse cells
pub type FullRankScaleTable = ScaleTable<MulVecScales>;

/// Scale table for low-rank cells
pub type LowRankScaleTable = ScaleTable<LowRankScales>;

impl<P: ProjectionScales> ScaleTable<P> {
    /// Check every shift and the sigmoid divisor
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.normalization.mean_sub.validate()?;
        self.normalization.std_dev.validate()?;
        self.w.validate()?;
        self.u.validate()?;
        self.projection_sum.validate()?;
        self.gate.bias.validate()?;
        self.gate.sigmoid.validate()?;
        self.candidate.bias.validate()?;
        self.candidate.tanh.validate()?;

        let update = &self.update;
        update.gate_hidden.validate()?;
        update.one_minus_gate.validate()?;
        update.zeta.validate()?;
        update.nu.validate()?;
        update.blend.validate()?;
        update.hidden_state.validate()?;
        Ok(())
    }
}

impl<P: ProjectionScales + DeserializeOwned> ScaleTable<P> {
    /// Parse and validate a table from JSON
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let table: Self = serde_json::from_str(json)?;
        table.validate()?;
        Ok(table)
    }

    /// Load and validate a table exported alongside the model weights
    pub fn from_json_file<F: AsRef<Path>>(path: F) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let table = Self::from_json_str(&content)?;
        tracing::debug!(path = %path.display(), "Loaded FastGRNN scale table");
        Ok(table)
    }
}
