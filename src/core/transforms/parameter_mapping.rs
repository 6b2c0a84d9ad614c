use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::data::complex::Complex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParameterMappingError {
    #[error("divisor must not be zero")]
    ZeroDivisor,

    #[error("multiplier must not be zero")]
    ZeroMultiplier,

    #[error("adder must not be zero")]
    ZeroAdder,

    #[error("logarithm argument {numerator}/{divisor} must be positive")]
    NonPositiveLogArgument { numerator: i64, divisor: i64 },
}

/// Ways of placing a generalized Collatz rule `(a, b, c)` (divisor, multiplier, adder)
/// on the complex plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterMapping {
    /// `b/a + (c/a)i`
    Linear,
    /// `(ln(b/a) - 1) + (ln(c/a) - 1)i`
    Logarithmic,
    /// radius `(b + c)/a` at angle `atan(c/b)`
    Polar,
    /// `1/b + (1/(a c))i`
    ReciprocalProducts,
}

impl ParameterMapping {
    pub const ALL: &'static [Self] = &[
        Self::Linear,
        Self::Logarithmic,
        Self::Polar,
        Self::ReciprocalProducts,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Logarithmic => "logarithmic",
            Self::Polar => "polar",
            Self::ReciprocalProducts => "reciprocal",
        }
    }

    pub fn map(self, a: i64, b: i64, c: i64) -> Result<Complex, ParameterMappingError> {
        let (af, bf, cf) = (a as f64, b as f64, c as f64);

        match self {
            Self::Linear => {
                non_zero(a, ParameterMappingError::ZeroDivisor)?;
                Ok(Complex::new(bf / af, cf / af))
            }
            Self::Logarithmic => {
                non_zero(a, ParameterMappingError::ZeroDivisor)?;
                let real_ratio = positive_ratio(b, a)?;
                let imag_ratio = positive_ratio(c, a)?;
                Ok(Complex::new(real_ratio.ln() - 1.0, imag_ratio.ln() - 1.0))
            }
            Self::Polar => {
                non_zero(a, ParameterMappingError::ZeroDivisor)?;
                non_zero(b, ParameterMappingError::ZeroMultiplier)?;
                let radius = (bf + cf) / af;
                let theta = (cf / bf).atan();
                Ok(Complex::new(radius * theta.cos(), radius * theta.sin()))
            }
            Self::ReciprocalProducts => {
                non_zero(b, ParameterMappingError::ZeroMultiplier)?;
                non_zero(a, ParameterMappingError::ZeroDivisor)?;
                non_zero(c, ParameterMappingError::ZeroAdder)?;
                Ok(Complex::new(1.0 / bf, 1.0 / (af * cf)))
            }
        }
    }
}

impl std::fmt::Display for ParameterMapping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.display_name())
    }
}

fn non_zero(value: i64, error: ParameterMappingError) -> Result<(), ParameterMappingError> {
    if value == 0 { Err(error) } else { Ok(()) }
}

fn positive_ratio(numerator: i64, divisor: i64) -> Result<f64, ParameterMappingError> {
    let ratio = numerator as f64 / divisor as f64;
    if ratio > 0.0 {
        Ok(ratio)
    } else {
        Err(ParameterMappingError::NonPositiveLogArgument { numerator, divisor })
    }
}
