//! Per-step input normalization

use fastgrnn_fixed_point::{v_copy, v_hadamard_assign, v_sub, Quantized};

use crate::scales::NormalizationScales;

/// Normalize one step's input into `norm_features` and return the vector the
/// projections should read.
///
/// Without a buffer the raw input is returned untouched. With a buffer but no
/// statistics the input is copied as is.
pub(crate) fn normalize_input<'b, T: Quantized>(
    raw: &'b [T],
    norm_features: Option<&'b mut [T]>,
    stats: Option<(&[T], &[T])>,
    scales: &NormalizationScales,
) -> &'b [T] {
    let Some(buf) = norm_features else {
        return raw;
    };

    match stats {
        Some((mean, std_dev)) => {
            v_sub(raw, mean, buf, &scales.mean_sub);
            v_hadamard_assign(buf, std_dev, &scales.std_dev);
        }
        None => v_copy(raw, buf),
    }
    buf
}
