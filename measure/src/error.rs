/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Serialize, Deserialize, Error, PartialEq, Clone, Copy, Debug)]
pub enum UnitError {
    #[error("degenerate conversion scale: {0}")]
    DegenerateScale(f64),
    #[error("invalid factor exponent: {0}/0")]
    ZeroDenominator(i32),
}
