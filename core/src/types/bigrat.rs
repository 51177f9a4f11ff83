// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use num::rational::BigRational as NumRat;
use num::traits::{sign::Signed, One, Zero};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use super::BigInt;

/// Exact arbitrary-precision rational, always kept in lowest terms
/// with a positive denominator.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BigRat {
    inner: NumRat,
}

impl BigRat {
    pub fn one() -> BigRat {
        BigRat {
            inner: NumRat::one(),
        }
    }

    pub fn zero() -> BigRat {
        BigRat {
            inner: NumRat::zero(),
        }
    }

    /// Panics if `denominator` is zero, like the underlying `Ratio`.
    pub fn ratio(numerator: &BigInt, denominator: &BigInt) -> BigRat {
        BigRat {
            inner: NumRat::new(numerator.inner().clone(), denominator.inner().clone()),
        }
    }

    pub fn small_ratio(numerator: i64, denominator: i64) -> BigRat {
        BigRat {
            inner: NumRat::new(
                BigInt::from(numerator).into_inner(),
                BigInt::from(denominator).into_inner(),
            ),
        }
    }

    pub fn from_integer(value: &BigInt) -> BigRat {
        BigRat {
            inner: NumRat::from_integer(value.inner().clone()),
        }
    }

    pub fn into_inner(self) -> NumRat {
        self.inner
    }

    pub fn numer(&self) -> BigInt {
        BigInt::from(self.inner.numer().clone())
    }

    pub fn denom(&self) -> BigInt {
        BigInt::from(self.inner.denom().clone())
    }

    pub fn abs(&self) -> BigRat {
        BigRat {
            inner: self.inner.abs(),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.inner.is_zero()
    }

    pub fn is_integer(&self) -> bool {
        self.inner.is_integer()
    }

    pub fn signum(&self) -> Ordering {
        self.inner.numer().sign().cmp(&num::bigint::Sign::NoSign)
    }

    /// Largest integer not greater than this value. Rounds towards
    /// negative infinity, so `floor(-1/2) = -1`.
    pub fn floor(&self) -> BigInt {
        BigInt::from(self.inner.floor().to_integer())
    }

    /// `self - floor(self)`, always in `[0, 1)`.
    pub fn fract(&self) -> BigRat {
        self - &BigRat::from_integer(&self.floor())
    }

    /// Returns `None` for zero.
    pub fn recip(&self) -> Option<BigRat> {
        if self.is_zero() {
            None
        } else {
            Some(BigRat {
                inner: self.inner.recip(),
            })
        }
    }
}

impl From<NumRat> for BigRat {
    fn from(inner: NumRat) -> BigRat {
        BigRat { inner }
    }
}

impl From<BigInt> for BigRat {
    fn from(value: BigInt) -> BigRat {
        BigRat::from_integer(&value)
    }
}

impl fmt::Display for BigRat {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.inner, fmt)
    }
}

impl Serialize for BigRat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for BigRat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        let invalid = || serde::de::Error::custom(format!("invalid rational `{}`", text));
        let (numer, denom) = match text.split_once('/') {
            Some((numer, denom)) => (numer, denom),
            None => (&text[..], "1"),
        };
        let numer = BigInt::from_str_radix(numer.trim(), 10).map_err(|_| invalid())?;
        let denom = BigInt::from_str_radix(denom.trim(), 10).map_err(|_| invalid())?;
        if denom.is_zero() {
            return Err(invalid());
        }
        Ok(BigRat::ratio(&numer, &denom))
    }
}

impl<'a> Add for &'a BigRat {
    type Output = BigRat;

    fn add(self, rhs: &'a BigRat) -> BigRat {
        BigRat {
            inner: &self.inner + &rhs.inner,
        }
    }
}

impl<'a> Sub for &'a BigRat {
    type Output = BigRat;

    fn sub(self, rhs: &'a BigRat) -> BigRat {
        BigRat {
            inner: &self.inner - &rhs.inner,
        }
    }
}

impl<'a> Neg for &'a BigRat {
    type Output = BigRat;

    fn neg(self) -> BigRat {
        BigRat {
            inner: -&self.inner,
        }
    }
}

impl<'a> Mul for &'a BigRat {
    type Output = BigRat;

    fn mul(self, rhs: &'a BigRat) -> BigRat {
        BigRat {
            inner: &self.inner * &rhs.inner,
        }
    }
}

impl<'a> Div for &'a BigRat {
    type Output = BigRat;

    fn div(self, rhs: &'a BigRat) -> BigRat {
        BigRat {
            inner: &self.inner / &rhs.inner,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::types::{BigInt, BigRat};
    use std::cmp::Ordering;

    #[test]
    fn test_floor_rounds_down() {
        assert_eq!(BigRat::small_ratio(7, 3).floor(), BigInt::from(2i64));
        assert_eq!(BigRat::small_ratio(-7, 3).floor(), BigInt::from(-3i64));
        assert_eq!(BigRat::small_ratio(-1, 2).floor(), BigInt::from(-1i64));
        assert_eq!(BigRat::small_ratio(6, 3).floor(), BigInt::from(2i64));
    }

    #[test]
    fn test_fract_in_unit_interval() {
        assert_eq!(BigRat::small_ratio(7, 3).fract(), BigRat::small_ratio(1, 3));
        assert_eq!(BigRat::small_ratio(-7, 3).fract(), BigRat::small_ratio(2, 3));
        assert_eq!(BigRat::small_ratio(4, 2).fract(), BigRat::zero());
    }

    #[test]
    fn test_recip_of_zero() {
        assert_eq!(BigRat::zero().recip(), None);
        assert_eq!(
            BigRat::small_ratio(-2, 5).recip(),
            Some(BigRat::small_ratio(-5, 2))
        );
    }

    #[test]
    fn test_signum() {
        assert_eq!(BigRat::small_ratio(-2, 5).signum(), Ordering::Less);
        assert_eq!(BigRat::zero().signum(), Ordering::Equal);
        assert_eq!(BigRat::small_ratio(2, 5).signum(), Ordering::Greater);
    }

    #[test]
    fn test_serde_as_string() {
        let value = BigRat::small_ratio(-14, 6);
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, "\"-7/3\"");
        let back: BigRat = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
        let whole: BigRat = serde_json::from_str("\"5\"").unwrap();
        assert_eq!(whole, BigRat::small_ratio(5, 1));
        assert!(serde_json::from_str::<BigRat>("\"1/0\"").is_err());
    }
}
