// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::cmp::Ordering;
use std::fmt;

use super::{BigInt, BigRat};

/// The operations the continued fraction pipeline needs from a number
/// type: an exact ordered field with a floor function.
///
/// Implementations must be exact. Machine floats deliberately do not
/// implement this trait, since rounding breaks both the termination
/// bound and the equality checks in [`crate::bridge`].
pub trait Field: Clone + PartialEq + fmt::Debug + fmt::Display {
    fn zero() -> Self;
    fn one() -> Self;
    fn from_integer(value: &BigInt) -> Self;

    /// Largest integer not greater than `self`.
    fn floor(&self) -> BigInt;

    fn plus(&self, rhs: &Self) -> Self;
    fn minus(&self, rhs: &Self) -> Self;
    fn times(&self, rhs: &Self) -> Self;

    /// Multiplicative inverse, `None` for zero.
    fn recip(&self) -> Option<Self>;

    fn is_zero(&self) -> bool;
    fn signum(&self) -> Ordering;

    /// `self / rhs`, `None` when `rhs` is zero.
    fn divide(&self, rhs: &Self) -> Option<Self> {
        rhs.recip().map(|inv| self.times(&inv))
    }

    /// `self - floor(self)`.
    fn fract(&self) -> Self {
        self.minus(&Self::from_integer(&self.floor()))
    }
}

impl Field for BigRat {
    fn zero() -> Self {
        BigRat::zero()
    }

    fn one() -> Self {
        BigRat::one()
    }

    fn from_integer(value: &BigInt) -> Self {
        BigRat::from_integer(value)
    }

    fn floor(&self) -> BigInt {
        BigRat::floor(self)
    }

    fn plus(&self, rhs: &Self) -> Self {
        self + rhs
    }

    fn minus(&self, rhs: &Self) -> Self {
        self - rhs
    }

    fn times(&self, rhs: &Self) -> Self {
        self * rhs
    }

    fn recip(&self) -> Option<Self> {
        BigRat::recip(self)
    }

    fn is_zero(&self) -> bool {
        BigRat::is_zero(self)
    }

    fn signum(&self) -> Ordering {
        BigRat::signum(self)
    }
}
