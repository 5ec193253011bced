//! Hidden-state update
//!
//! `h = (zeta * (1 - z) + nu) * h~ + z * h`, written back over the previous
//! state.

use fastgrnn_fixed_point::{
    v_add, v_hadamard, v_hadamard_assign, v_scalar_add_assign, v_scalar_mul_assign,
    v_scalar_sub_assign, Q15,
};

use crate::scales::UpdateScales;

/// Blend the previous state with the candidate.
///
/// `gate` and `candidate` are consumed as scratch; `carry` receives `z * h`.
pub(crate) fn update_hidden_state(
    hidden_state: &mut [Q15],
    gate: &mut [Q15],
    candidate: &mut [Q15],
    carry: &mut [Q15],
    sigmoid_zeta: Q15,
    sigmoid_nu: Q15,
    scales: &UpdateScales,
) {
    v_hadamard(gate, hidden_state, carry, &scales.gate_hidden);

    // gate becomes the candidate coefficient
    v_scalar_sub_assign(scales.q_one, gate, &scales.one_minus_gate);
    v_scalar_mul_assign(sigmoid_zeta, gate, &scales.zeta);
    v_scalar_add_assign(sigmoid_nu, gate, &scales.nu);

    v_hadamard_assign(candidate, gate, &scales.blend);
    v_add(carry, candidate, hidden_state, &scales.hidden_state);
}
