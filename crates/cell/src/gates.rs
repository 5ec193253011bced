//! Gate and candidate stages
//!
//! Both read the summed projections `W·x + U·h`. The gate goes through the
//! sigmoid, the candidate through tanh.

use fastgrnn_fixed_point::{v_add, v_add_assign, v_sigmoid, v_tanh, AddScales, Q15};

use crate::scales::{CandidateScales, GateScales};

/// `input_proj += hidden_proj`
pub(crate) fn combine_projections(input_proj: &mut [Q15], hidden_proj: &[Q15], scales: &AddScales) {
    v_add_assign(input_proj, hidden_proj, scales);
}

/// `gate = sigmoid(pre + bg)`
pub(crate) fn update_gate(pre: &[Q15], bg: &[Q15], gate: &mut [Q15], scales: &GateScales) {
    v_add(pre, bg, gate, &scales.bias);
    v_sigmoid(gate, &scales.sigmoid);
}

/// `pre = tanh(pre + bh)`, in place
pub(crate) fn candidate(pre: &mut [Q15], bh: &[Q15], scales: &CandidateScales) {
    v_add_assign(pre, bh, &scales.bias);
    v_tanh(pre, &scales.tanh);
}
