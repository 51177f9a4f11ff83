// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Simple continued fractions `h + 1/(b0 + 1/(b1 + ...))` built
//! lazily from the int/fract stream of a value.

pub mod approx;
pub mod convergents;
pub mod periodic;
pub mod stream;

use serde_derive::Serialize;
use std::fmt;

use crate::types::{BigInt, BigRat, Field};
use stream::IntFractStream;

/// A term of a generalized continued fraction: partial numerator `a`
/// and partial denominator `b`. Simple continued fractions always
/// have `a = 1`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Pair<T> {
    pub a: T,
    pub b: T,
}

/// Lazily expanded continued fraction of a field value. Term `n` is
/// derived from stream index `n + 1`; index 0 is the head.
#[derive(Clone, Debug)]
pub struct ContinuedFraction<F> {
    head: BigInt,
    stream: IntFractStream<F>,
}

impl<F: Field> ContinuedFraction<F> {
    pub fn of(value: &F) -> ContinuedFraction<F> {
        let stream = IntFractStream::new(value);
        ContinuedFraction {
            head: stream.first().whole.clone(),
            stream,
        }
    }

    pub fn head(&self) -> &BigInt {
        &self.head
    }

    pub fn partial_denominator(&mut self, n: usize) -> Option<BigInt> {
        self.stream.get(n + 1).map(|pair| pair.whole.clone())
    }

    pub fn term(&mut self, n: usize) -> Option<Pair<F>> {
        self.partial_denominator(n).map(|b| Pair {
            a: F::one(),
            b: F::from_integer(&b),
        })
    }

    /// Number of terms, known once the expansion has been driven to
    /// its end.
    pub fn known_len(&self) -> Option<usize> {
        self.stream.sealed_at().map(|sealed| sealed - 1)
    }

    pub fn into_partial_denominators(mut self) -> impl Iterator<Item = BigInt> {
        self.stream.restart();
        self.stream.skip(1).map(|pair| pair.whole)
    }

    pub fn into_terms(self) -> impl Iterator<Item = Pair<F>> {
        self.into_partial_denominators().map(|b| Pair {
            a: F::one(),
            b: F::from_integer(&b),
        })
    }

    /// Collects at most `max_terms` terms.
    pub fn truncate(&mut self, max_terms: usize) -> Truncated {
        let mut terms = Vec::new();
        for n in 0..max_terms {
            match self.partial_denominator(n) {
                Some(b) => terms.push(b),
                None => break,
            }
        }
        let complete = terms.len() < max_terms || self.partial_denominator(max_terms).is_none();
        Truncated {
            head: self.head.clone(),
            terms,
            complete,
        }
    }
}

/// A finite prefix of a simple continued fraction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Truncated {
    pub head: BigInt,
    /// Partial denominators; partial numerators are all 1.
    pub terms: Vec<BigInt>,
    /// False if the expansion continues past `terms`.
    pub complete: bool,
}

impl Truncated {
    pub fn pairs(&self) -> impl Iterator<Item = Pair<BigInt>> + '_ {
        self.terms.iter().map(|b| Pair {
            a: BigInt::one(),
            b: b.clone(),
        })
    }

    /// Folds the prefix back into a rational. Exactly the original
    /// value when `complete`, the last convergent otherwise.
    pub fn value(&self) -> BigRat {
        let mut acc: Option<BigRat> = None;
        for b in self.terms.iter().rev() {
            let b = BigRat::from_integer(b);
            acc = Some(match acc {
                Some(tail) => match tail.recip() {
                    Some(inv) => &b + &inv,
                    None => b,
                },
                None => b,
            });
        }
        let head = BigRat::from_integer(&self.head);
        match acc.and_then(|tail| tail.recip()) {
            Some(inv) => &head + &inv,
            None => head,
        }
    }
}

impl fmt::Display for Truncated {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "[{}", self.head)?;
        for (i, term) in self.terms.iter().enumerate() {
            let sep = if i == 0 { "; " } else { ", " };
            write!(fmt, "{}{}", sep, term)?;
        }
        if !self.complete {
            let sep = if self.terms.is_empty() { "; " } else { ", " };
            write!(fmt, "{}...", sep)?;
        }
        write!(fmt, "]")
    }
}
