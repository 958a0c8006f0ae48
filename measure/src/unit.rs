/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::ops::{Div, Mul};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::converter::UnitConverter;
use super::factor::Factor;

/// A unit of measurement.
///
/// This is an open system: units are defined at runtime relative to
/// each other, and derived units combine any units at any rational
/// power. That keeps the hierarchy small and uniform, at a price:
/// nothing ties a unit to a dimension, so converting between
/// incommensurable units is not detected and silently produces
/// meaningless numbers.
///
/// Every unit reduces to a base representation by following its
/// definition down to fundamental units. Units defined against the
/// same fundamentals convert into each other through that common
/// base.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum Unit {
    /// A reference unit; its conversion to base is the identity.
    Fundamental,
    /// A unit defined by an affine conversion to a reference unit
    /// (kilometre, degree Celsius).
    Transformed(TransformedUnit),
    /// A product of rational powers of other units (m/s, kg·m²).
    Derived(DerivedUnit),
}

/// The unit of plain numbers: a derived unit with no factors.
pub const NEUTRAL_UNIT: Unit = Unit::Derived(DerivedUnit(Vec::new()));

impl Unit {
    /// The conversion from this unit to its base representation.
    pub fn to_base(&self) -> UnitConverter {
        match self {
            Unit::Fundamental => UnitConverter::IDENTITY,
            Unit::Transformed(unit) => unit.to_base(),
            Unit::Derived(unit) => unit.to_base(),
        }
    }

    /// The conversion between two units, through their common base.
    pub fn affine(source: &Unit, target: &Unit) -> UnitConverter {
        target.to_base().inverse().concatenate(&source.to_base())
    }

    /// The conversion from this unit to `target`.
    pub fn converter_to(&self, target: &Unit) -> UnitConverter {
        Unit::affine(self, target)
    }

    /// Converts a value in this unit to `target`.
    pub fn convert(&self, target: &Unit, value: f64) -> f64 {
        self.converter_to(target).convert(value)
    }

    /// A unit offset from this one. `kelvin.shift(273.15)` defines
    /// the degree Celsius: values convert to Kelvin by adding
    /// `273.15`.
    pub fn shift(&self, value: f64) -> Unit {
        Unit::Transformed(TransformedUnit::new(
            UnitConverter::translation(value),
            self.clone(),
        ))
    }

    /// A unit worth `value` of this one. `metre.scale_multiply(1000.0)`
    /// defines the kilometre.
    pub fn scale_multiply(&self, value: f64) -> Unit {
        Unit::Transformed(TransformedUnit::new(
            UnitConverter::scaling(value),
            self.clone(),
        ))
    }

    /// A unit worth a `value`th of this one. `metre.scale_divide(100.0)`
    /// defines the centimetre.
    pub fn scale_divide(&self, value: f64) -> Unit {
        self.scale_multiply(1.0 / value)
    }

    /// This unit raised to an integer power, as a term of a derived
    /// unit.
    pub fn factor(&self, numerator: i32) -> Factor {
        Factor::new(self.clone(), numerator)
    }

    pub fn derived(factors: impl IntoIterator<Item = Factor>) -> Unit {
        Unit::Derived(DerivedUnit::new(factors))
    }

    /// This unit raised to an integer power.
    pub fn powi(&self, n: i32) -> Unit {
        match n {
            1 => self.clone(),
            n => Unit::Derived(DerivedUnit(
                self.clone()
                    .into_factors()
                    .into_iter()
                    .map(|factor| factor.powi(n))
                    .collect(),
            )),
        }
    }

    fn into_factors(self) -> Vec<Factor> {
        match self {
            Unit::Derived(DerivedUnit(factors)) => factors,
            unit => vec![Factor::from(unit)],
        }
    }
}

/// A unit defined by an affine conversion to a reference unit.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct TransformedUnit {
    reference: Arc<Unit>,
    to_reference: UnitConverter,
}

impl TransformedUnit {
    pub fn new(
        to_reference: UnitConverter,
        reference: impl Into<Arc<Unit>>,
    ) -> Self {
        TransformedUnit {
            reference: reference.into(),
            to_reference,
        }
    }

    pub fn reference(&self) -> &Unit {
        &self.reference
    }

    pub fn to_reference(&self) -> UnitConverter {
        self.to_reference
    }

    /// First to the reference unit, then onward to base.
    pub fn to_base(&self) -> UnitConverter {
        self.reference.to_base().concatenate(&self.to_reference)
    }
}

/// A product of rational powers of other units.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[serde(transparent)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct DerivedUnit(pub Vec<Factor>);

impl DerivedUnit {
    pub fn new(factors: impl IntoIterator<Item = Factor>) -> Self {
        DerivedUnit(factors.into_iter().collect())
    }

    pub fn factors(&self) -> &[Factor] {
        &self.0
    }

    /// The product of the factors' linear conversions to base. A
    /// constituent unit contributes its scale factor only; scale
    /// origins have no meaning inside a compound unit.
    pub fn to_base(&self) -> UnitConverter {
        self.0.iter().fold(UnitConverter::IDENTITY, |acc, factor| {
            factor
                .dim()
                .to_base()
                .linear_pow(factor.power())
                .concatenate(&acc)
        })
    }
}

impl From<TransformedUnit> for Unit {
    fn from(unit: TransformedUnit) -> Self {
        Unit::Transformed(unit)
    }
}

impl From<DerivedUnit> for Unit {
    fn from(unit: DerivedUnit) -> Self {
        Unit::Derived(unit)
    }
}

/* Operations on units. */

impl Mul for &Unit {
    type Output = Unit;
    fn mul(self, rhs: &Unit) -> Unit {
        Unit::Derived(DerivedUnit(
            self.clone()
                .into_factors()
                .into_iter()
                .chain(rhs.clone().into_factors())
                .collect(),
        ))
    }
}

impl Div for &Unit {
    type Output = Unit;
    fn div(self, rhs: &Unit) -> Unit {
        Unit::Derived(DerivedUnit(
            self.clone()
                .into_factors()
                .into_iter()
                .chain(
                    rhs.clone().into_factors().into_iter().map(Factor::recip),
                )
                .collect(),
        ))
    }
}
