// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use num::bigint::BigInt as NumInt;
use num::cast::ToPrimitive;
use num::traits::{Num, One, Signed, Zero};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

/// Arbitrary-precision integer.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct BigInt {
    inner: NumInt,
}

/// Largest trial divisor tried by [`BigInt::square_free_split`].
const TRIAL_LIMIT: i64 = 100_000;

#[derive(Debug)]
pub enum BigIntError {
    ParseError,
}

impl BigInt {
    pub fn one() -> BigInt {
        BigInt {
            inner: NumInt::one(),
        }
    }

    pub fn zero() -> BigInt {
        BigInt {
            inner: NumInt::zero(),
        }
    }

    pub fn inner(&self) -> &NumInt {
        &self.inner
    }

    pub fn into_inner(self) -> NumInt {
        self.inner
    }

    pub fn from_str_radix(input: &str, base: u32) -> Result<Self, BigIntError> {
        NumInt::from_str_radix(input, base)
            .map(|inner| BigInt { inner })
            .map_err(|_err| BigIntError::ParseError)
    }

    pub fn pow(&self, exponent: u32) -> BigInt {
        BigInt {
            inner: self.inner.pow(exponent),
        }
    }

    pub fn abs(&self) -> BigInt {
        BigInt {
            inner: self.inner.abs(),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.inner.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.inner.is_negative()
    }

    pub fn is_positive(&self) -> bool {
        self.inner.is_positive()
    }

    /// Floor of the square root. Only meaningful for non-negative
    /// values; negative inputs return zero.
    pub fn isqrt(&self) -> BigInt {
        if self.inner.is_negative() {
            return BigInt::zero();
        }
        BigInt {
            inner: self.inner.sqrt(),
        }
    }

    pub fn is_perfect_square(&self) -> bool {
        if self.inner.is_negative() {
            return false;
        }
        let root = self.isqrt();
        &root * &root == *self
    }

    /// Splits `|n|` as `k² · s`, returning `(k, s)`. Zero splits as
    /// `(0, 1)`.
    ///
    /// Trial division stops at the cube root of the unfactored part,
    /// since what is left then has at most two prime factors and is
    /// either a perfect square or squarefree. Past `TRIAL_LIMIT` the
    /// search gives up and `s` may keep a square factor with only
    /// large primes.
    pub fn square_free_split(&self) -> (BigInt, BigInt) {
        let limit = BigInt::from(TRIAL_LIMIT);
        let mut rest = self.abs();
        let mut k = BigInt::one();
        let mut s = BigInt::one();
        let mut p = BigInt::from(2i64);
        while p <= limit && &(&p * &p) * &p <= rest {
            let mut count = 0u32;
            while (&rest % &p).is_zero() {
                rest = &rest / &p;
                count += 1;
            }
            k = &k * &p.pow(count / 2);
            if count % 2 == 1 {
                s = &s * &p;
            }
            p = &p + &BigInt::one();
        }
        if rest.is_perfect_square() {
            k = &k * &rest.isqrt();
        } else {
            s = &s * &rest;
        }
        (k, s)
    }

    pub fn as_int(&self) -> Option<i64> {
        self.inner.to_i64()
    }

    pub fn as_usize(&self) -> Option<usize> {
        self.inner.to_usize()
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.inner, fmt)
    }
}

impl Serialize for BigInt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.inner.to_string())
    }
}

impl<'de> Deserialize<'de> for BigInt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        BigInt::from_str_radix(&text, 10)
            .map_err(|_| serde::de::Error::custom(format!("invalid integer `{}`", text)))
    }
}

impl From<NumInt> for BigInt {
    fn from(inner: NumInt) -> BigInt {
        BigInt { inner }
    }
}

impl From<u64> for BigInt {
    fn from(value: u64) -> BigInt {
        BigInt {
            inner: NumInt::from(value),
        }
    }
}

impl From<i64> for BigInt {
    fn from(value: i64) -> BigInt {
        BigInt {
            inner: NumInt::from(value),
        }
    }
}

impl From<usize> for BigInt {
    fn from(value: usize) -> BigInt {
        BigInt {
            inner: NumInt::from(value),
        }
    }
}

impl<'a> Add for &'a BigInt {
    type Output = BigInt;

    fn add(self, rhs: &'a BigInt) -> BigInt {
        BigInt {
            inner: &self.inner + &rhs.inner,
        }
    }
}

impl<'a> Sub for &'a BigInt {
    type Output = BigInt;

    fn sub(self, rhs: &'a BigInt) -> BigInt {
        BigInt {
            inner: &self.inner - &rhs.inner,
        }
    }
}

impl<'a> Neg for &'a BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        BigInt {
            inner: -&self.inner,
        }
    }
}

impl<'a> Mul for &'a BigInt {
    type Output = BigInt;

    fn mul(self, rhs: &'a BigInt) -> BigInt {
        BigInt {
            inner: &self.inner * &rhs.inner,
        }
    }
}

impl<'a> Div for &'a BigInt {
    type Output = BigInt;

    fn div(self, rhs: &'a BigInt) -> BigInt {
        BigInt {
            inner: &self.inner / &rhs.inner,
        }
    }
}

impl<'a> Rem for &'a BigInt {
    type Output = BigInt;

    fn rem(self, rhs: &'a BigInt) -> BigInt {
        BigInt {
            inner: &self.inner % &rhs.inner,
        }
    }
}
