/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::error::UnitError;
use super::unit::Unit;

/// One term of a derived unit: a unit raised to a rational power.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Factor {
    dim: Arc<Unit>,
    numerator: i32,
    denominator: i32,
}

impl Factor {
    pub fn new(dim: impl Into<Arc<Unit>>, numerator: i32) -> Self {
        Factor {
            dim: dim.into(),
            numerator,
            denominator: 1,
        }
    }

    pub fn rational(
        dim: impl Into<Arc<Unit>>,
        numerator: i32,
        denominator: i32,
    ) -> Self {
        Factor {
            dim: dim.into(),
            numerator,
            denominator,
        }
    }

    /// Like [`rational`](Self::rational), but rejects a zero
    /// denominator instead of letting [`power`](Self::power) divide
    /// by zero later on.
    pub fn try_rational(
        dim: impl Into<Arc<Unit>>,
        numerator: i32,
        denominator: i32,
    ) -> Result<Self, UnitError> {
        match denominator == 0 {
            true => Err(UnitError::ZeroDenominator(numerator)),
            false => Ok(Self::rational(dim, numerator, denominator)),
        }
    }

    pub fn dim(&self) -> &Unit {
        &self.dim
    }

    pub fn numerator(&self) -> i32 {
        self.numerator
    }

    pub fn denominator(&self) -> i32 {
        self.denominator
    }

    /// The exponent as a floating-point number.
    pub fn power(&self) -> f64 {
        match self.denominator {
            1 => self.numerator as f64,
            denominator => self.numerator as f64 / denominator as f64,
        }
    }

    /// The same factor with the sign of its exponent flipped.
    /// Saturates at the `i32` limits.
    pub fn recip(self) -> Self {
        Factor {
            numerator: self.numerator.saturating_neg(),
            ..self
        }
    }

    /// The same factor with its exponent multiplied by `n`.
    /// Saturates at the `i32` limits.
    pub fn powi(self, n: i32) -> Self {
        Factor {
            numerator: self.numerator.saturating_mul(n),
            ..self
        }
    }
}

/* Every unit can stand in for its power-one factor. */

impl From<Unit> for Factor {
    fn from(unit: Unit) -> Self {
        Factor::new(unit, 1)
    }
}

impl From<&Unit> for Factor {
    fn from(unit: &Unit) -> Self {
        Factor::new(unit.clone(), 1)
    }
}

impl From<Arc<Unit>> for Factor {
    fn from(unit: Arc<Unit>) -> Self {
        Factor::new(unit, 1)
    }
}
