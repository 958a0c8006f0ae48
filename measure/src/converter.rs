/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::ops::Mul;

use serde::{Deserialize, Serialize};

use super::error::UnitError;

/// An affine conversion between units: `y = x * scale + offset`.
///
/// Converters are plain values; composing or inverting one builds a
/// new converter instead of linking back to the old one. A converter
/// is *linear* when its offset is exactly zero; the zero checks in
/// [`linear`](Self::linear) and [`linear_pow`](Self::linear_pow) are
/// bit-exact, so any non-zero offset, however small, makes a
/// conversion affine.
#[derive(Serialize, Deserialize, PartialEq, Clone, Copy, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct UnitConverter {
    scale: f64,
    offset: f64,
}

impl UnitConverter {
    /// The conversion that leaves values unchanged.
    pub const IDENTITY: Self = UnitConverter {
        scale: 1.0,
        offset: 0.0,
    };

    pub fn identity() -> Self {
        Self::IDENTITY
    }

    pub fn new(scale: f64, offset: f64) -> Self {
        UnitConverter { scale, offset }
    }

    /// Like [`new`](Self::new), but rejects a zero scale, which maps
    /// every value to the offset and has no finite inverse. [`new`]
    /// accepts one and leaves the consequences to the usual
    /// floating-point rules.
    ///
    /// [`new`]: Self::new
    pub fn try_new(scale: f64, offset: f64) -> Result<Self, UnitError> {
        match scale == 0.0 {
            true => Err(UnitError::DegenerateScale(scale)),
            false => Ok(UnitConverter { scale, offset }),
        }
    }

    pub fn scaling(scale: f64) -> Self {
        UnitConverter { scale, offset: 0.0 }
    }

    pub fn translation(offset: f64) -> Self {
        UnitConverter { scale: 1.0, offset }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// The conversion mapping converted values back to their source.
    /// Computed on demand: `c.inverse().inverse()` compares equal to
    /// `c` without being the same object.
    pub fn inverse(&self) -> Self {
        UnitConverter {
            scale: 1.0 / self.scale,
            offset: -self.offset / self.scale,
        }
    }

    /// The linear part of the conversion. Offsets relate scale
    /// origins (Kelvin vs. Celsius) and only apply to absolute
    /// values; a unit used inside a derived unit contributes its
    /// scale factor alone.
    pub fn linear(&self) -> Self {
        // Exact comparison, not an epsilon test.
        match self.offset == 0.0 {
            true => *self,
            false => Self::scaling(self.scale),
        }
    }

    /// The linear part of the conversion, raised to a (possibly
    /// fractional) power.
    pub fn linear_pow(&self, pow: f64) -> Self {
        // Exact comparison, not an epsilon test.
        match self.offset == 0.0 && pow == 1.0 {
            true => *self,
            false => Self::scaling(self.scale.powf(pow)),
        }
    }

    pub fn convert(&self, value: f64) -> f64 {
        value * self.scale + self.offset
    }

    /// Combines two conversions into one that applies `converter`
    /// first and `self` to its result.
    pub fn concatenate(&self, converter: &Self) -> Self {
        UnitConverter {
            scale: converter.scale * self.scale,
            offset: self.convert(converter.offset),
        }
    }
}

impl Default for UnitConverter {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/* Composition: `a * b` applies `b` first, like function composition. */

impl Mul for UnitConverter {
    type Output = UnitConverter;
    fn mul(self, rhs: UnitConverter) -> UnitConverter {
        self.concatenate(&rhs)
    }
}
