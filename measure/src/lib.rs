/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

pub mod converter;
pub mod error;
pub mod factor;
pub mod quantity;
pub mod unit;

pub use crate::unit::{DerivedUnit, TransformedUnit, Unit, NEUTRAL_UNIT};
pub use converter::UnitConverter;
pub use error::UnitError;
pub use factor::Factor;
pub use quantity::Quantity;
