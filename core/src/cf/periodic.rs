// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use indexmap::IndexSet;
use serde_derive::Serialize;
use std::fmt;
use std::hash::Hash;
use tracing::debug;

use super::stream::IntFractStream;
use crate::error::Error;
use crate::types::{BigInt, Field};

/// An eventually periodic continued fraction `[head; pre..., (period...)]`.
/// A finite expansion has an empty `period`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Periodic {
    pub head: BigInt,
    pub preperiod: Vec<BigInt>,
    pub period: Vec<BigInt>,
}

impl Periodic {
    pub fn is_finite(&self) -> bool {
        self.period.is_empty()
    }

    /// Partial denominator `n`, following the period forever.
    pub fn term(&self, n: usize) -> Option<&BigInt> {
        if n < self.preperiod.len() {
            return self.preperiod.get(n);
        }
        if self.period.is_empty() {
            return None;
        }
        self.period.get((n - self.preperiod.len()) % self.period.len())
    }
}

impl fmt::Display for Periodic {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "[{}", self.head)?;
        for (i, term) in self.preperiod.iter().enumerate() {
            write!(fmt, "{}{}", if i == 0 { "; " } else { ", " }, term)?;
        }
        if !self.period.is_empty() {
            let body = self
                .period
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            let sep = if self.preperiod.is_empty() { "; " } else { ", " };
            write!(fmt, "{}({})", sep, body)?;
        }
        write!(fmt, "]")
    }
}

/// Finds the repeating block of the expansion of `value` by
/// remembering every fractional part seen so far. Two equal fractional
/// parts mean equal complete quotients from there on.
///
/// Quadratic irrationals always become periodic and rationals always
/// terminate; anything else runs into the step budget. The budget
/// counts terms after the head, as [`ContinuedFraction::truncate`]
/// does, so an expansion of exactly `max_steps` terms is finite.
///
/// [`ContinuedFraction::truncate`]: super::ContinuedFraction::truncate
pub fn detect_period<F>(value: &F, max_steps: usize) -> Result<Periodic, Error>
where
    F: Field + Hash + Eq,
{
    let mut stream = IntFractStream::new(value);
    let mut seen = IndexSet::new();
    let mut wholes = Vec::new();
    for n in 0..=max_steps {
        let pair = match stream.get(n) {
            Some(pair) => pair.clone(),
            None => break,
        };
        wholes.push(pair.whole);
        if pair.fract.is_zero() {
            let head = wholes.remove(0);
            return Ok(Periodic {
                head,
                preperiod: wholes,
                period: vec![],
            });
        }
        if let (start, false) = seen.insert_full(pair.fract) {
            debug!(start, end = n, "continued fraction period found");
            // Stream indices `start + 1..=n` form one full period.
            let period = wholes.split_off(start + 1);
            let head = wholes.remove(0);
            return Ok(Periodic {
                head,
                preperiod: wholes,
                period,
            });
        }
    }
    Err(Error::StepBudgetExceeded { max_steps })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BigRat, Surd};

    fn ints(values: &[i64]) -> Vec<BigInt> {
        values.iter().map(|&v| BigInt::from(v)).collect()
    }

    fn sqrt(n: i64) -> Surd {
        Surd::sqrt(&BigRat::small_ratio(n, 1)).unwrap()
    }

    #[test]
    fn test_sqrt_two() {
        let periodic = detect_period(&sqrt(2), 50).unwrap();
        assert_eq!(periodic.head, BigInt::from(1i64));
        assert!(periodic.preperiod.is_empty());
        assert_eq!(periodic.period, ints(&[2]));
        assert_eq!(periodic.to_string(), "[1; (2)]");
    }

    #[test]
    fn test_sqrt_three_and_seven() {
        assert_eq!(detect_period(&sqrt(3), 50).unwrap().to_string(), "[1; (1, 2)]");
        assert_eq!(
            detect_period(&sqrt(7), 50).unwrap().to_string(),
            "[2; (1, 1, 1, 4)]"
        );
    }

    #[test]
    fn test_preperiod() {
        let x = Surd::new(BigRat::small_ratio(1, 2), BigRat::one(), BigInt::from(2i64)).unwrap();
        let periodic = detect_period(&x, 200).unwrap();
        let mut cf = crate::cf::ContinuedFraction::of(&x);
        assert_eq!(&periodic.head, cf.head());
        for n in 0..40 {
            assert_eq!(periodic.term(n), cf.partial_denominator(n).as_ref());
        }
    }

    #[test]
    fn test_rational_is_finite() {
        let periodic = detect_period(&BigRat::small_ratio(415, 93), 50).unwrap();
        assert!(periodic.is_finite());
        assert_eq!(periodic.to_string(), "[4; 2, 6, 7]");
        assert_eq!(periodic.term(3), None);
    }

    #[test]
    fn test_budget() {
        assert_eq!(
            detect_period(&sqrt(2), 0),
            Err(Error::StepBudgetExceeded { max_steps: 0 })
        );
        assert_eq!(detect_period(&sqrt(2), 1).unwrap().to_string(), "[1; (2)]");
        // sqrt(7) repeats after four terms.
        assert!(detect_period(&sqrt(7), 3).is_err());
        assert!(detect_period(&sqrt(7), 4).is_ok());
    }

    #[test]
    fn test_finite_at_exact_budget() {
        let q = BigRat::small_ratio(7, 3);
        assert_eq!(detect_period(&q, 1).unwrap().to_string(), "[2; 3]");
        assert_eq!(
            detect_period(&q, 0),
            Err(Error::StepBudgetExceeded { max_steps: 0 })
        );
        let q = BigRat::small_ratio(415, 93);
        let mut cf = crate::cf::ContinuedFraction::of(&q);
        assert!(cf.truncate(3).complete);
        assert!(detect_period(&q, 3).unwrap().is_finite());
        assert!(!cf.truncate(2).complete);
        assert!(detect_period(&q, 2).is_err());
    }
}
