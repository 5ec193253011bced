//! Element-wise vector operations
//!
//! Each operation walks its operands in lockstep and stops at the shortest
//! one. Results are written into caller-provided storage; the `_assign`
//! variants update their first operand in place.

use crate::fixed::{add, mul, sub, AddScales, MulScales, Quantized, Q15};

/// `out[i] = lhs[i] + rhs[i]`
pub fn v_add<T: Quantized>(lhs: &[T], rhs: &[T], out: &mut [T], scales: &AddScales) {
    for ((o, &a), &b) in out.iter_mut().zip(lhs).zip(rhs) {
        *o = add(a, b, scales);
    }
}

/// `acc[i] = acc[i] + rhs[i]`, with `acc` taking the `lhs` scale
pub fn v_add_assign<T: Quantized>(acc: &mut [T], rhs: &[T], scales: &AddScales) {
    for (a, &b) in acc.iter_mut().zip(rhs) {
        *a = add(*a, b, scales);
    }
}

/// `out[i] = lhs[i] - rhs[i]`
pub fn v_sub<T: Quantized>(lhs: &[T], rhs: &[T], out: &mut [T], scales: &AddScales) {
    for ((o, &a), &b) in out.iter_mut().zip(lhs).zip(rhs) {
        *o = sub(a, b, scales);
    }
}

/// `out[i] = lhs[i] * rhs[i]`
pub fn v_hadamard<T: Quantized>(lhs: &[T], rhs: &[T], out: &mut [T], scales: &MulScales) {
    for ((o, &a), &b) in out.iter_mut().zip(lhs).zip(rhs) {
        *o = mul(a, b, scales);
    }
}

/// `acc[i] = acc[i] * rhs[i]`, with `acc` taking the `lhs` scale
pub fn v_hadamard_assign<T: Quantized>(acc: &mut [T], rhs: &[T], scales: &MulScales) {
    for (a, &b) in acc.iter_mut().zip(rhs) {
        *a = mul(*a, b, scales);
    }
}

/// `vec[i] = scalar + vec[i]`, with the scalar taking the `lhs` scale
pub fn v_scalar_add_assign(scalar: Q15, vec: &mut [Q15], scales: &AddScales) {
    for v in vec.iter_mut() {
        *v = add(scalar, *v, scales);
    }
}

/// `vec[i] = scalar - vec[i]`, with the scalar taking the `lhs` scale
pub fn v_scalar_sub_assign(scalar: Q15, vec: &mut [Q15], scales: &AddScales) {
    for v in vec.iter_mut() {
        *v = sub(scalar, *v, scales);
    }
}

/// `vec[i] = scalar * vec[i]`, with the scalar taking the `lhs` scale
pub fn v_scalar_mul_assign(scalar: Q15, vec: &mut [Q15], scales: &MulScales) {
    for v in vec.iter_mut() {
        *v = mul(scalar, *v, scales);
    }
}

/// Copy as many elements as both slices hold
pub fn v_copy<T: Quantized>(src: &[T], dst: &mut [T]) {
    let len = src.len().min(dst.len());
    dst[..len].copy_from_slice(&src[..len]);
}
