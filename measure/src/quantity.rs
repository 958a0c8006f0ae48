/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::cmp::Ordering;
use std::ops::{Add, Div, Mul, Sub};

use serde::{Deserialize, Serialize};

use super::unit::{Unit, NEUTRAL_UNIT};

/// A value paired with its unit.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Quantity(pub f64, pub Unit);

impl Quantity {
    pub fn new(val: f64, unit: Unit) -> Self {
        Quantity(val, unit)
    }

    pub fn from_unit(unit: Unit) -> Self {
        Quantity(1.0, unit)
    }

    pub fn from_value(value: f64) -> Self {
        Quantity(value, NEUTRAL_UNIT)
    }

    pub fn convert(self, unit: &Unit) -> Self {
        Quantity(self.1.convert(unit, self.0), unit.clone())
    }

    pub fn powi(self, n: i32) -> Self {
        Quantity(self.0.powi(n), self.1.powi(n))
    }

    /* Note: an inherent method, not the trait impl: comparison
    converts the right-hand side first and so disagrees with the
    derived (structural) equality. */
    pub fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&rhs.clone().convert(&self.1).0)
    }
}

/* Sums convert to the left-hand unit and are carried out in base
space, where offset units lose their scale origin. */

impl Add<Quantity> for Quantity {
    type Output = Quantity;
    fn add(self, rhs: Quantity) -> Quantity {
        let base = self.1.to_base();
        Quantity(
            base.inverse().convert(
                base.convert(self.0) + rhs.1.to_base().convert(rhs.0),
            ),
            self.1,
        )
    }
}

impl Sub<Quantity> for Quantity {
    type Output = Quantity;
    fn sub(self, rhs: Quantity) -> Quantity {
        let base = self.1.to_base();
        Quantity(
            base.inverse().convert(
                base.convert(self.0) - rhs.1.to_base().convert(rhs.0),
            ),
            self.1,
        )
    }
}

/* Products keep both operands' units, as a derived unit. The derived
unit's conversion drops the operands' offsets, so plain value
arithmetic is the right thing here. */

impl Mul<Quantity> for Quantity {
    type Output = Quantity;
    fn mul(self, rhs: Quantity) -> Quantity {
        Quantity(self.0 * rhs.0, &self.1 * &rhs.1)
    }
}

impl Div<Quantity> for Quantity {
    type Output = Quantity;
    fn div(self, rhs: Quantity) -> Quantity {
        Quantity(self.0 / rhs.0, &self.1 / &rhs.1)
    }
}

impl Mul<f64> for Quantity {
    type Output = Quantity;
    fn mul(self, rhs: f64) -> Quantity {
        let base = self.1.to_base();
        Quantity(base.inverse().convert(base.convert(self.0) * rhs), self.1)
    }
}

impl Div<f64> for Quantity {
    type Output = Quantity;
    fn div(self, rhs: f64) -> Quantity {
        let base = self.1.to_base();
        Quantity(base.inverse().convert(base.convert(self.0) / rhs), self.1)
    }
}
