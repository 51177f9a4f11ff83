// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Running the pipeline on a rational embedded into a larger field.
//!
//! An embedding that preserves floor and field operations exactly
//! produces the same int/fract stream, term for term, as the rational
//! it came from. Together with [`crate::termination`] this gives: the
//! expansion of a value terminates exactly when the value is the image
//! of a rational.

use serde_derive::Serialize;
use std::fmt;
use tracing::{debug, warn};

use crate::cf::stream::IntFractStream;
use crate::cf::ContinuedFraction;
use crate::error::Error;
use crate::termination::is_rational_terminating;
use crate::types::{BigRat, Field, Surd};

/// A field that contains the rationals.
pub trait RationalEmbedding: Field {
    fn embed(value: &BigRat) -> Self;

    /// The rational this value is the image of, if any.
    fn as_rational(&self) -> Option<BigRat>;
}

impl RationalEmbedding for BigRat {
    fn embed(value: &BigRat) -> Self {
        value.clone()
    }

    fn as_rational(&self) -> Option<BigRat> {
        Some(self.clone())
    }
}

impl RationalEmbedding for Surd {
    fn embed(value: &BigRat) -> Self {
        Surd::rational(value.clone())
    }

    fn as_rational(&self) -> Option<BigRat> {
        if self.is_rational() {
            Some(self.rational_part().clone())
        } else {
            None
        }
    }
}

/// Runs the stream of `q` and of its image in `F` side by side and
/// returns the index at which both end. Fails at the first index where
/// the image stream is not the image of the rational stream.
pub fn check_coincidence<F: RationalEmbedding>(q: &BigRat) -> Result<usize, Error> {
    let end = is_rational_terminating(q).terminated_at;
    let mut rational = IntFractStream::new(q);
    let mut embedded = IntFractStream::new(&F::embed(q));
    for step in 0..=end {
        match (rational.get(step), embedded.get(step)) {
            (None, None) => {
                debug!(%q, step, "embedded expansion coincides");
                return Ok(step);
            }
            (Some(r), Some(e)) if r.whole == e.whole && F::embed(&r.fract) == e.fract => (),
            _ => {
                warn!(%q, step, "embedded expansion diverged");
                return Err(Error::InvalidEmbedding { step });
            }
        }
    }
    Err(Error::InvalidEmbedding { step: end })
}

/// Forward direction: if the expansion of `v` ends within `max_steps`
/// terms, its last convergent is a rational equal to `v`.
pub fn rational_witness<F: RationalEmbedding>(v: &F, max_steps: usize) -> Result<BigRat, Error> {
    let mut cf = ContinuedFraction::of(v);
    let truncated = cf.truncate(max_steps);
    if !truncated.complete {
        return Err(Error::StepBudgetExceeded { max_steps });
    }
    let step = truncated.terms.len() + 1;
    let last = match cf.into_convergents().last() {
        Some(last) => last,
        None => return Err(Error::InvalidEmbedding { step }),
    };
    if &last != v {
        return Err(Error::InvalidEmbedding { step });
    }
    match last.as_rational() {
        Some(q) if q == truncated.value() => Ok(q),
        _ => Err(Error::InvalidEmbedding { step }),
    }
}

/// How the value and its expansion relate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BridgeReport {
    /// The rational the value is the image of, if any.
    pub rational: Option<BigRat>,
    /// Index at which the expansion ended, if within the budget.
    pub terminated_at: Option<usize>,
    pub max_steps: usize,
}

impl fmt::Display for BridgeReport {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match (&self.rational, self.terminated_at) {
            (Some(q), Some(end)) => write!(
                fmt,
                "rational {}; both expansions end at step {}",
                q, end
            ),
            (None, None) => write!(
                fmt,
                "not rational; no termination within {} steps",
                self.max_steps
            ),
            (Some(q), None) => write!(fmt, "rational {}; expansion still running", q),
            (None, Some(end)) => write!(fmt, "not rational; expansion ended at step {}", end),
        }
    }
}

/// Checks both directions of "the expansion terminates iff the value is
/// rational" for one value. Rational values are checked against their
/// rational expansion; other values must not terminate within the
/// budget.
pub fn terminates_iff_rational<F: RationalEmbedding>(
    v: &F,
    max_steps: usize,
) -> Result<BridgeReport, Error> {
    let rational = v.as_rational();
    let witness = match rational_witness(v, max_steps) {
        Ok(q) => Some(q),
        Err(Error::StepBudgetExceeded { .. }) => None,
        Err(err) => return Err(err),
    };
    let terminated_at = match (&rational, &witness) {
        (Some(q), Some(w)) if q == w => Some(check_coincidence::<F>(q)?),
        (None, None) => None,
        (Some(q), None) => {
            // Rationals always terminate; the budget was just too small.
            Some(check_coincidence::<F>(q)?)
        }
        _ => {
            let step = ContinuedFraction::of(v).truncate(max_steps).terms.len() + 1;
            return Err(Error::InvalidEmbedding { step });
        }
    };
    Ok(BridgeReport {
        rational,
        terminated_at,
        max_steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BigInt;

    fn rat(n: i64, d: i64) -> BigRat {
        BigRat::small_ratio(n, d)
    }

    #[test]
    fn test_coincidence_surd() {
        assert_eq!(check_coincidence::<Surd>(&rat(7, 3)), Ok(2));
        assert_eq!(check_coincidence::<Surd>(&rat(-415, 93)), Ok(5));
        assert_eq!(check_coincidence::<BigRat>(&rat(5, 1)), Ok(1));
    }

    #[test]
    fn test_witness_for_embedded_rational() {
        let v = Surd::embed(&rat(355, 113));
        assert_eq!(rational_witness(&v, 10), Ok(rat(355, 113)));
        assert_eq!(
            rational_witness(&v, 1),
            Err(Error::StepBudgetExceeded { max_steps: 1 })
        );
    }

    #[test]
    fn test_irrational_has_no_witness() {
        let v = Surd::sqrt(&rat(2, 1)).unwrap();
        assert_eq!(
            rational_witness(&v, 50),
            Err(Error::StepBudgetExceeded { max_steps: 50 })
        );
        let report = terminates_iff_rational(&v, 50).unwrap();
        assert_eq!(report.rational, None);
        assert_eq!(report.terminated_at, None);
        assert_eq!(report.to_string(), "not rational; no termination within 50 steps");
    }

    #[test]
    fn test_report_for_rational() {
        let v = Surd::new(rat(1, 2), rat(0, 1), BigInt::from(2i64)).unwrap();
        let report = terminates_iff_rational(&v, 50).unwrap();
        assert_eq!(report.rational, Some(rat(1, 2)));
        assert_eq!(report.terminated_at, Some(2));

        // Too small a budget still reports the rational side.
        let big = Surd::embed(&rat(89, 55));
        let report = terminates_iff_rational(&big, 3).unwrap();
        assert_eq!(report.terminated_at, Some(9));
    }
}
