// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use displaydoc::Display;
use serde_derive::Serialize;
use thiserror::Error;

/// Everything that can go wrong while expanding or evaluating a value.
///
/// Reaching the end of a finite expansion is not an error.
#[derive(Error, Display, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "detail")]
pub enum Error {
    /// Division by zero
    DivisionByZero,
    /// Expansion did not terminate within {max_steps} steps
    StepBudgetExceeded { max_steps: usize },
    /// Embedded expansion diverged from the rational one at step {step}
    InvalidEmbedding { step: usize },
    /// Square root of negative number {0}
    NegativeRoot(String),
    /// Cannot combine sqrt({0}) and sqrt({1}) in one quadratic field
    MixedRadicands(String, String),
    /// Value {0} is not rational
    NotRational(String),
    /// {0}
    Parse(String),
}
