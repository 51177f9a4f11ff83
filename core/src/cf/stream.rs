// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde_derive::Serialize;
use std::iter::FusedIterator;
use tracing::{debug, trace};

use crate::error::Error;
use crate::types::{BigInt, Field};

/// A value split as `whole + fract`, with `0 <= fract < 1`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct IntFractPair<F> {
    pub whole: BigInt,
    pub fract: F,
}

impl<F: Field> IntFractPair<F> {
    pub fn of(value: &F) -> IntFractPair<F> {
        let whole = value.floor();
        let fract = value.minus(&F::from_integer(&whole));
        IntFractPair { whole, fract }
    }

    /// The pair obtained by inverting the fractional part, or `None`
    /// once the fractional part is zero.
    pub fn successor(&self) -> Option<IntFractPair<F>> {
        if self.fract.is_zero() {
            return None;
        }
        self.fract.recip().map(|inv| IntFractPair::of(&inv))
    }
}

impl<F> IntFractPair<F> {
    pub fn map<G>(self, func: impl FnOnce(F) -> G) -> IntFractPair<G> {
        IntFractPair {
            whole: self.whole,
            fract: func(self.fract),
        }
    }
}

/// `stream(value, n)` computed from scratch. Prefer [`IntFractStream`]
/// when querying several indices of the same value.
pub fn stream<F: Field>(value: &F, n: usize) -> Option<IntFractPair<F>> {
    let mut pair = IntFractPair::of(value);
    for _ in 0..n {
        pair = pair.successor()?;
    }
    Some(pair)
}

/// Memoizing stream of integer/fractional parts.
///
/// Once an index yields `None`, that index is remembered and every
/// later index short-circuits to `None` as well.
#[derive(Clone, Debug)]
pub struct IntFractStream<F> {
    cache: Vec<IntFractPair<F>>,
    sealed_at: Option<usize>,
    cursor: usize,
}

impl<F: Field> IntFractStream<F> {
    pub fn new(value: &F) -> IntFractStream<F> {
        IntFractStream {
            cache: vec![IntFractPair::of(value)],
            sealed_at: None,
            cursor: 0,
        }
    }

    fn grow(&mut self) -> bool {
        if self.sealed_at.is_some() {
            return false;
        }
        let next = match self.cache.last() {
            Some(last) => last.successor(),
            None => None,
        };
        let index = self.cache.len();
        match next {
            Some(pair) => {
                trace!(index, whole = %pair.whole, "int/fract step");
                self.cache.push(pair);
                true
            }
            None => {
                debug!(sealed_at = index, "int/fract stream terminated");
                self.sealed_at = Some(index);
                false
            }
        }
    }

    pub fn get(&mut self, n: usize) -> Option<&IntFractPair<F>> {
        while self.cache.len() <= n {
            if !self.grow() {
                return None;
            }
        }
        self.cache.get(n)
    }

    /// Pair at index 0, which always exists.
    pub fn first(&self) -> &IntFractPair<F> {
        &self.cache[0]
    }

    /// First index known to yield `None`, if it has been reached.
    pub fn sealed_at(&self) -> Option<usize> {
        self.sealed_at
    }

    /// Pairs computed so far.
    pub fn computed(&self) -> &[IntFractPair<F>] {
        &self.cache
    }

    /// Rewinds iteration to index 0. Cached pairs are kept.
    pub fn restart(&mut self) {
        self.cursor = 0;
    }
}

impl<F: Field> Iterator for IntFractStream<F> {
    type Item = IntFractPair<F>;

    fn next(&mut self) -> Option<IntFractPair<F>> {
        let index = self.cursor;
        let pair = self.get(index).cloned();
        if pair.is_some() {
            self.cursor += 1;
        }
        pair
    }
}

impl<F: Field> FusedIterator for IntFractStream<F> {}

/// Iterator returned by [`expand`].
#[derive(Clone, Debug)]
pub struct Expand<F> {
    stream: IntFractStream<F>,
    max_steps: usize,
    produced: usize,
    done: bool,
}

impl<F: Field> Iterator for Expand<F> {
    type Item = Result<IntFractPair<F>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.produced == self.max_steps {
            self.done = true;
            let max_steps = self.max_steps;
            return match self.stream.get(max_steps) {
                Some(_) => Some(Err(Error::StepBudgetExceeded { max_steps })),
                None => None,
            };
        }
        match self.stream.get(self.produced).cloned() {
            Some(pair) => {
                self.produced += 1;
                Some(Ok(pair))
            }
            None => {
                self.done = true;
                None
            }
        }
    }
}

impl<F: Field> FusedIterator for Expand<F> {}

/// Bounded iteration over the int/fract stream of `value`. Yields at
/// most `max_steps` pairs; if the stream has not terminated by then,
/// the last item is [`Error::StepBudgetExceeded`].
pub fn expand<F: Field>(value: &F, max_steps: usize) -> Expand<F> {
    Expand {
        stream: IntFractStream::new(value),
        max_steps,
        produced: 0,
        done: false,
    }
}
