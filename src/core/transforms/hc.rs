use std::f64::consts::PI;

use crate::core::data::complex::Complex;

pub const DEFAULT_HC_CONSTANT: f64 = 1.0;

/// Log-polar remapping of a resting point, used to characterise sink clusters.
///
/// Zero components are replaced by `epsilon` before dividing, so points on either axis
/// are slightly perturbed rather than rejected.
#[must_use]
pub fn apply_hc(z: Complex, c_const: f64, epsilon: f64) -> Complex {
    let real = if z.real == 0.0 { epsilon } else { z.real };
    let imag = if z.imag == 0.0 { epsilon } else { z.imag };

    let log_ratio = (imag / real).abs().ln();
    let phase = imag * PI / real;
    let magnitude = c_const / real;

    Complex {
        real: magnitude * log_ratio * phase.cos(),
        imag: magnitude * log_ratio * phase.sin(),
    }
}
