// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::iter::FusedIterator;

use super::{ContinuedFraction, Pair};
use crate::types::{BigInt, BigRat, Field};

/// Two consecutive continuants of a continued fraction.
///
/// `older` is `continuants_aux(k - 1)` and `newer` is
/// `continuants_aux(k)`, starting from `k = 1`:
///
/// ```text
/// continuants_aux(0) = (1, 0)
/// continuants_aux(1) = (head, 1)
/// continuants_aux(k) = (b·A(k-1) + a·A(k-2), b·B(k-1) + a·B(k-2))
/// ```
///
/// where `(a, b)` is term `k - 2`. Once the terms run out the sequence
/// stays at its last value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Continuants<T> {
    older: Pair<T>,
    newer: Pair<T>,
    index: usize,
}

impl<T: Field> Continuants<T> {
    pub fn new(head: T) -> Continuants<T> {
        Continuants {
            older: Pair {
                a: T::one(),
                b: T::zero(),
            },
            newer: Pair { a: head, b: T::one() },
            index: 1,
        }
    }

    /// Moves from `continuants_aux(k)` to `continuants_aux(k + 1)`
    /// using term `k - 1`, or stays put if that term does not exist.
    pub fn advance(&mut self, term: Option<&Pair<T>>) {
        self.index += 1;
        match term {
            Some(term) => {
                let next = Pair {
                    a: term.b.times(&self.newer.a).plus(&term.a.times(&self.older.a)),
                    b: term.b.times(&self.newer.b).plus(&term.a.times(&self.older.b)),
                };
                self.older = std::mem::replace(&mut self.newer, next);
            }
            None => {
                self.older = self.newer.clone();
            }
        }
    }

    /// `continuants_aux(k)`.
    pub fn current(&self) -> &Pair<T> {
        &self.newer
    }

    /// `k`, the `continuants_aux` index of [`Continuants::current`].
    pub fn index(&self) -> usize {
        self.index
    }

    /// `A(k) / B(k)`; convergent number `k - 1`.
    pub fn convergent(&self) -> Option<T> {
        self.newer.a.divide(&self.newer.b)
    }
}

/// Successive convergents of a continued fraction, computed
/// incrementally. Ends when the terms end.
#[derive(Clone, Debug)]
pub struct Convergents<T, I> {
    continuants: Continuants<T>,
    terms: I,
    started: bool,
}

impl<T, I> Convergents<T, I>
where
    T: Field,
    I: Iterator<Item = Pair<T>>,
{
    pub fn new(head: T, terms: I) -> Convergents<T, I> {
        Convergents {
            continuants: Continuants::new(head),
            terms,
            started: false,
        }
    }

    /// Next convergent from the cached continuants, pulling at most one
    /// term.
    pub fn advance(&mut self) -> Option<T> {
        if !self.started {
            self.started = true;
            return self.continuants.convergent();
        }
        let term = self.terms.next()?;
        self.continuants.advance(Some(&term));
        self.continuants.convergent()
    }

    pub fn continuants(&self) -> &Continuants<T> {
        &self.continuants
    }
}

impl<T, I> Iterator for Convergents<T, I>
where
    T: Field,
    I: Iterator<Item = Pair<T>>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.advance()
    }
}

impl<T, I> FusedIterator for Convergents<T, I>
where
    T: Field,
    I: FusedIterator<Item = Pair<T>>,
{
}

impl<F: Field> ContinuedFraction<F> {
    /// Convergents evaluated in the value's own field.
    pub fn into_convergents(self) -> Convergents<F, impl Iterator<Item = Pair<F>>> {
        let head = F::from_integer(self.head());
        Convergents::new(head, self.into_terms())
    }

    /// Convergents evaluated as exact rationals. The partial
    /// denominators are integers, so this agrees with
    /// [`ContinuedFraction::into_convergents`] for every field.
    pub fn into_rational_convergents(
        self,
    ) -> Convergents<BigRat, impl Iterator<Item = Pair<BigRat>>> {
        let head = BigRat::from_integer(self.head());
        let terms = self.into_partial_denominators().map(|b| Pair {
            a: BigRat::one(),
            b: BigRat::from(b),
        });
        Convergents::new(head, terms)
    }
}

/// `continuants_aux(n + 1)` of `value`, the numerator/denominator pair
/// of convergent `n`. Past the end of a finite expansion this stays at
/// the exact value.
pub fn continuants<F: Field>(value: &F, n: usize) -> Pair<BigInt> {
    let mut cf = ContinuedFraction::of(value);
    let mut state = Continuants::new(BigRat::from_integer(cf.head()));
    for k in 0..n {
        let term = cf.partial_denominator(k).map(|b| Pair {
            a: BigRat::one(),
            b: BigRat::from(b),
        });
        state.advance(term.as_ref());
    }
    let current = state.current();
    Pair {
        a: current.a.numer(),
        b: current.b.numer(),
    }
}

pub fn numerator<F: Field>(value: &F, n: usize) -> BigInt {
    continuants(value, n).a
}

pub fn denominator<F: Field>(value: &F, n: usize) -> BigInt {
    continuants(value, n).b
}

/// Convergent `n` of `value` as an exact rational.
pub fn convergent<F: Field>(value: &F, n: usize) -> BigRat {
    let Pair { a, b } = continuants(value, n);
    BigRat::ratio(&a, &b)
}

/// At most `max_steps` convergents of `value`, stopping early when
/// the expansion is finite.
pub fn convergents_up_to<F: Field>(value: &F, max_steps: usize) -> impl Iterator<Item = BigRat> {
    ContinuedFraction::of(value)
        .into_rational_convergents()
        .take(max_steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Surd;

    fn rat(n: i64, d: i64) -> BigRat {
        BigRat::small_ratio(n, d)
    }

    #[test]
    fn test_five_halves() {
        let q = rat(5, 2);
        assert_eq!(convergent(&q, 0), rat(2, 1));
        assert_eq!(convergent(&q, 1), rat(5, 2));
        assert_eq!(numerator(&q, 1), BigInt::from(5i64));
        assert_eq!(denominator(&q, 1), BigInt::from(2i64));
    }

    #[test]
    fn test_stable_past_end() {
        let q = rat(5, 2);
        assert_eq!(convergent(&q, 2), rat(5, 2));
        assert_eq!(convergent(&q, 10), rat(5, 2));
    }

    #[test]
    fn test_continuants_aux_base_cases() {
        let state = Continuants::new(rat(3, 1));
        assert_eq!(state.index(), 1);
        assert_eq!(state.current(), &Pair { a: rat(3, 1), b: rat(1, 1) });
        assert_eq!(
            continuants(&rat(3, 1), 0),
            Pair {
                a: BigInt::from(3i64),
                b: BigInt::one()
            }
        );
    }

    #[test]
    fn test_pi_approximations() {
        // 3.14159292... = 355/113 = [3; 7, 16]
        let q = rat(355, 113);
        let all = convergents_up_to(&q, 10).collect::<Vec<_>>();
        assert_eq!(all, vec![rat(3, 1), rat(22, 7), rat(355, 113)]);
        let two = convergents_up_to(&q, 2).collect::<Vec<_>>();
        assert_eq!(two, vec![rat(3, 1), rat(22, 7)]);
    }

    #[test]
    fn test_negative_head() {
        // -7/3 = [-3; 1, 2]
        let q = rat(-7, 3);
        let all = convergents_up_to(&q, 10).collect::<Vec<_>>();
        assert_eq!(all, vec![rat(-3, 1), rat(-2, 1), rat(-7, 3)]);
    }

    #[test]
    fn test_field_convergents_match_rational() {
        let golden = Surd::new(rat(1, 2), rat(1, 2), BigInt::from(5i64)).unwrap();
        let in_field = ContinuedFraction::of(&golden)
            .into_convergents()
            .take(12)
            .collect::<Vec<_>>();
        let rational = ContinuedFraction::of(&golden)
            .into_rational_convergents()
            .take(12)
            .collect::<Vec<_>>();
        assert_eq!(in_field.len(), 12);
        for (x, q) in in_field.iter().zip(rational.iter()) {
            assert_eq!(x, &Surd::rational(q.clone()));
        }
        // Ratios of consecutive Fibonacci numbers.
        assert_eq!(rational[11], rat(233, 144));
    }
}
