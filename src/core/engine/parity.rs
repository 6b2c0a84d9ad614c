use serde::{Deserialize, Serialize};

use crate::core::data::complex::Complex;

/// Parity predicate deciding which branch of the Gaussian Collatz step is taken.
///
/// The two rules agree on integer components and disagree on non-integer ones,
/// e.g. `-0.5 + 2.5i` is even under [`ParityRule::SumBased`] and odd under
/// [`ParityRule::AbsoluteSum`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParityRule {
    /// `|re + im| mod 2 == 0`
    SumBased,
    /// `(|re| + |im|) mod 2 == 0`
    #[default]
    AbsoluteSum,
}

impl ParityRule {
    pub const ALL: &'static [Self] = &[Self::AbsoluteSum, Self::SumBased];

    #[must_use]
    pub fn is_even(self, z: Complex) -> bool {
        let sum = match self {
            Self::SumBased => (z.real + z.imag).abs(),
            Self::AbsoluteSum => z.real.abs() + z.imag.abs(),
        };

        sum % 2.0 == 0.0
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::SumBased => "sum-based",
            Self::AbsoluteSum => "absolute-sum",
        }
    }
}

impl std::fmt::Display for ParityRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.display_name())
    }
}
