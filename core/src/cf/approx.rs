// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use tracing::debug;

use super::ContinuedFraction;
use crate::types::{BigInt, BigRat, Field};

/// The last convergent of `value` whose denominator does not exceed
/// `max_denominator`.
///
/// Convergent denominators grow strictly after the first term, so this
/// terminates for irrational values as well. A limit below 1 is treated
/// as 1, which yields the floor of `value`.
pub fn approximate<F: Field>(value: &F, max_denominator: &BigInt) -> BigRat {
    let mut convergents = ContinuedFraction::of(value).into_rational_convergents();
    let mut best = BigRat::from_integer(&value.floor());
    while let Some(next) = convergents.advance() {
        if &next.denom() > max_denominator {
            break;
        }
        best = next;
    }
    debug!(%best, limit = %max_denominator, "best approximation");
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Surd;

    #[test]
    fn test_limits() {
        let q = BigRat::small_ratio(355, 113);
        assert_eq!(approximate(&q, &BigInt::from(1i64)), BigRat::small_ratio(3, 1));
        assert_eq!(approximate(&q, &BigInt::from(100i64)), BigRat::small_ratio(22, 7));
        assert_eq!(approximate(&q, &BigInt::from(113i64)), q);
        assert_eq!(approximate(&q, &BigInt::from(0i64)), BigRat::small_ratio(3, 1));
    }

    #[test]
    fn test_irrational() {
        let root = Surd::sqrt(&BigRat::small_ratio(2, 1)).unwrap();
        assert_eq!(
            approximate(&root, &BigInt::from(1000i64)),
            BigRat::small_ratio(1393, 985)
        );
    }
}
