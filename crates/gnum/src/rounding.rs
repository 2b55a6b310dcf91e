//! Midpoint rounding modes.

use num_traits::Float;
use rust_decimal::RoundingStrategy;

/// How `round` resolves a value to the requested number of digits.
///
/// `ToEven` and `AwayFromZero` only differ at an exact midpoint; the three
/// directed modes ignore the midpoint and always move the same way.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MidpointRounding {
    /// Banker's rounding: a midpoint goes to the even neighbour.
    #[default]
    ToEven,
    AwayFromZero,
    ToZero,
    ToNegativeInfinity,
    ToPositiveInfinity,
}

impl MidpointRounding {
    /// Round `value` to an integer under this mode.
    pub fn apply<F: Float>(self, value: F) -> F {
        match self {
            MidpointRounding::ToEven => round_half_even(value),
            MidpointRounding::AwayFromZero => value.round(),
            MidpointRounding::ToZero => value.trunc(),
            MidpointRounding::ToNegativeInfinity => value.floor(),
            MidpointRounding::ToPositiveInfinity => value.ceil(),
        }
    }

    /// The equivalent `rust_decimal` strategy.
    pub fn strategy(self) -> RoundingStrategy {
        match self {
            MidpointRounding::ToEven => RoundingStrategy::MidpointNearestEven,
            MidpointRounding::AwayFromZero => RoundingStrategy::MidpointAwayFromZero,
            MidpointRounding::ToZero => RoundingStrategy::ToZero,
            MidpointRounding::ToNegativeInfinity => RoundingStrategy::ToNegativeInfinity,
            MidpointRounding::ToPositiveInfinity => RoundingStrategy::ToPositiveInfinity,
        }
    }
}

fn round_half_even<F: Float>(value: F) -> F {
    let two = F::one() + F::one();
    let half = F::one() / two;
    let away = value.round();
    if (away - value).abs() == half && away % two != F::zero() {
        away - value.signum()
    } else {
        away
    }
}
