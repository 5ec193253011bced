//! FastGRNN Fixed-Point Primitives
//!
//! Saturating Q7/Q15 arithmetic used by the quantized recurrent cell.
//! Every scale is a right-shift count. Nothing here allocates or wraps on
//! overflow.

mod activation;
mod error;
mod fixed;
mod matvec;
mod tables;
mod vector;

pub use activation::{
    sigmoid, sigmoid_table_tolerance, tanh, tanh_table_tolerance, v_sigmoid, v_tanh,
    SigmoidParams, TanhParams, TABLE_FRAC_BITS,
};
pub use error::{FixedPointError, Result};
pub use fixed::{
    add, check_scale, mul, rescale, shr, sub, AddScales, Index, MulScales, Quantized, Scale, Q15,
    Q31, Q7, MAX_SCALE,
};
pub use matvec::{m_mulvec, m_sparse_mulvec, MulVecScales};
pub use vector::{
    v_add, v_add_assign, v_copy, v_hadamard, v_hadamard_assign, v_scalar_add_assign,
    v_scalar_mul_assign, v_scalar_sub_assign, v_sub,
};
