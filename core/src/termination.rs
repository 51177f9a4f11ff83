// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Every rational has a finite continued fraction.
//!
//! Write the fractional part of `q` in lowest terms as `p/d`. Inverting
//! it gives `d/p = k + r/p` with `0 <= r < p`, so the numerator of the
//! next fractional part is strictly smaller than `p`. Numerators are
//! non-negative, so after at most `p + 1` steps the stream has run out.
//! The decider below runs the stream with that bound as a hard cap and
//! checks the descent on every step.

use serde_derive::Serialize;
use std::cmp::Ordering;
use std::fmt;
use tracing::debug;

use crate::cf::stream::IntFractPair;
use crate::types::{BigInt, BigRat};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Termination {
    /// Always true for rationals.
    pub terminates: bool,
    /// `|numer(fract(q))| + 1`; `stream(q, step_bound)` is `None`.
    pub step_bound: BigInt,
    /// First index at which the stream yields `None`.
    pub terminated_at: usize,
}

impl fmt::Display for Termination {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(
            fmt,
            "terminates after {} step{} (bound {})",
            self.terminated_at,
            if self.terminated_at == 1 { "" } else { "s" },
            self.step_bound
        )
    }
}

/// The index by which the int/fract stream of `q` must have ended.
pub fn step_bound(q: &BigRat) -> BigInt {
    &q.fract().numer().abs() + &BigInt::one()
}

/// For `0 < fract < 1`, whether the fractional part of `1 / fract` has
/// a smaller numerator than `fract`. Always true in that range; false
/// for arguments outside it.
pub fn numerator_descends(fract: &BigRat) -> bool {
    if fract.signum() != Ordering::Greater || fract >= &BigRat::one() {
        return false;
    }
    match fract.recip() {
        Some(inv) => IntFractPair::of(&inv).fract.numer() < fract.numer(),
        None => false,
    }
}

/// Decides termination of the expansion of a rational. Total: it never
/// fails and always reports `terminates: true`.
pub fn is_rational_terminating(q: &BigRat) -> Termination {
    let bound = step_bound(q);
    let initial = q.fract().numer();
    let mut pair = IntFractPair::of(q);
    let mut n = 0usize;
    // `pair` is `stream(q, n)` on every iteration.
    let terminated_at = loop {
        debug_assert!(
            pair.fract.numer() <= &initial - &BigInt::from(n),
            "numerator descent violated at step {}",
            n
        );
        match pair.successor() {
            Some(next) => {
                debug_assert!(numerator_descends(&pair.fract));
                pair = next;
                n += 1;
            }
            None => break n + 1,
        }
        assert!(
            BigInt::from(n) < bound,
            "expansion of {} still running at its step bound {}",
            q,
            bound
        );
    };
    debug!(%q, terminated_at, step_bound = %bound, "rational expansion terminated");
    Termination {
        terminates: true,
        step_bound: bound,
        terminated_at,
    }
}
