use serde::{Deserialize, Serialize};

use crate::core::data::complex::Complex;

pub const DEFAULT_SINK_DECIMALS: u32 = 4;
/// Beyond this `f64` carries no further decimal digits.
pub const MAX_SINK_DECIMALS: u32 = 15;

/// How resting points are compared when counting unique sinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SinkPrecision {
    /// Bit-exact comparison of both components.
    Exact,
    /// Components rounded half away from zero to the given number of decimal digits,
    /// at most [`MAX_SINK_DECIMALS`].
    Decimals(u32),
}

impl Default for SinkPrecision {
    fn default() -> Self {
        Self::Decimals(DEFAULT_SINK_DECIMALS)
    }
}

/// Identity of a resting point for de-duplication.
///
/// Two keys are only comparable when built with the same [`SinkPrecision`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SinkKey {
    real: i64,
    imag: i64,
}

impl SinkKey {
    #[must_use]
    pub fn new(point: Complex, precision: SinkPrecision) -> Self {
        match precision {
            SinkPrecision::Exact => Self {
                real: exact_component(point.real),
                imag: exact_component(point.imag),
            },
            SinkPrecision::Decimals(decimals) => {
                let factor = 10f64.powi(decimals.min(MAX_SINK_DECIMALS) as i32);
                Self {
                    real: rounded_component(point.real, factor),
                    imag: rounded_component(point.imag, factor),
                }
            }
        }
    }
}

fn exact_component(value: f64) -> i64 {
    // -0.0 and 0.0 are the same sink
    if value == 0.0 {
        return 0;
    }
    value.to_bits() as i64
}

fn rounded_component(value: f64, factor: f64) -> i64 {
    let rounded = (value * factor).round();
    if rounded == 0.0 { 0 } else { rounded as i64 }
}
