// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde_derive::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Sub};

use super::{BigInt, BigRat, Field};
use crate::error::Error;

/// An exact element `a + b·√d` of the real quadratic field `ℚ(√d)`.
///
/// Invariant: either `b = 0` and `d = 0` (a plain rational), or `d ≥ 2`
/// is not a perfect square. The constructor also moves square factors
/// of `d` into `b`, so `sqrt(8)` is stored as `2·√2`.
///
/// Two radicands name the same field exactly when their product is a
/// perfect square. Arithmetic and equality rebase one operand onto the
/// other's radicand in that case, so they stay exact even for square
/// factors too large for the constructor to find. Mixing genuinely
/// different fields through the arithmetic operators panics; use the
/// `checked_*` methods when the operands are not known to share a
/// field.
#[derive(Clone, Debug, Serialize)]
pub struct Surd {
    a: BigRat,
    b: BigRat,
    d: BigInt,
}

impl Surd {
    pub fn rational(value: BigRat) -> Surd {
        Surd {
            a: value,
            b: BigRat::zero(),
            d: BigInt::zero(),
        }
    }

    /// Builds `a + b·√d`. Square factors of `d` move into `b`, and a
    /// perfect-square radicand folds into the rational part.
    pub fn new(a: BigRat, b: BigRat, d: BigInt) -> Result<Surd, Error> {
        if b.is_zero() {
            return Ok(Surd::rational(a));
        }
        if d.is_negative() {
            return Err(Error::NegativeRoot(d.to_string()));
        }
        let (k, d) = d.square_free_split();
        let b = &b * &BigRat::from_integer(&k);
        if d == BigInt::one() {
            return Ok(Surd::rational(&a + &b));
        }
        Ok(Surd::normalized(a, b, d))
    }

    /// Exact square root of a non-negative rational. `sqrt(p/q)` is
    /// written as `(1/q)·√(pq)`.
    pub fn sqrt(value: &BigRat) -> Result<Surd, Error> {
        if value.signum() == Ordering::Less {
            return Err(Error::NegativeRoot(value.to_string()));
        }
        let denom = value.denom();
        let radicand = &value.numer() * &denom;
        Surd::new(
            BigRat::zero(),
            BigRat::ratio(&BigInt::one(), &denom),
            radicand,
        )
    }

    pub fn rational_part(&self) -> &BigRat {
        &self.a
    }

    pub fn irrational_part(&self) -> &BigRat {
        &self.b
    }

    /// Zero for rational values.
    pub fn radicand(&self) -> &BigInt {
        &self.d
    }

    pub fn is_rational(&self) -> bool {
        self.b.is_zero()
    }

    pub fn conjugate(&self) -> Surd {
        Surd {
            a: self.a.clone(),
            b: -&self.b,
            d: self.d.clone(),
        }
    }

    /// `a² - b²d`, the product of the value with its conjugate.
    pub fn norm(&self) -> BigRat {
        let d = BigRat::from_integer(&self.d);
        &(&self.a * &self.a) - &(&(&self.b * &self.b) * &d)
    }

    /// Both operands written over one radicand, or `None` if they
    /// live in different fields. Uses `√e = (m/d)·√d` when `de = m²`.
    fn align(&self, rhs: &Surd) -> Option<(Surd, Surd, BigInt)> {
        if self.is_rational() {
            return Some((self.clone(), rhs.clone(), rhs.d.clone()));
        }
        if rhs.is_rational() || self.d == rhs.d {
            return Some((self.clone(), rhs.clone(), self.d.clone()));
        }
        let product = &self.d * &rhs.d;
        if !product.is_perfect_square() {
            return None;
        }
        let m = BigRat::from_integer(&product.isqrt());
        let rebase = |value: &Surd, onto: &BigInt| Surd {
            a: value.a.clone(),
            b: &(&value.b * &m) / &BigRat::from_integer(onto),
            d: onto.clone(),
        };
        if self.d < rhs.d {
            Some((self.clone(), rebase(rhs, &self.d), self.d.clone()))
        } else {
            Some((rebase(self, &rhs.d), rhs.clone(), rhs.d.clone()))
        }
    }

    fn aligned(&self, rhs: &Surd) -> (Surd, Surd, BigInt) {
        match self.align(rhs) {
            Some(aligned) => aligned,
            None => panic!(
                "cannot combine sqrt({}) and sqrt({}) in one quadratic field",
                self.d, rhs.d
            ),
        }
    }

    fn mixed(&self, rhs: &Surd) -> Error {
        Error::MixedRadicands(self.d.to_string(), rhs.d.to_string())
    }

    pub fn checked_add(&self, rhs: &Surd) -> Result<Surd, Error> {
        self.align(rhs)
            .map(|_| self + rhs)
            .ok_or_else(|| self.mixed(rhs))
    }

    pub fn checked_sub(&self, rhs: &Surd) -> Result<Surd, Error> {
        self.align(rhs)
            .map(|_| self - rhs)
            .ok_or_else(|| self.mixed(rhs))
    }

    pub fn checked_mul(&self, rhs: &Surd) -> Result<Surd, Error> {
        self.align(rhs)
            .map(|_| self * rhs)
            .ok_or_else(|| self.mixed(rhs))
    }

    pub fn checked_div(&self, rhs: &Surd) -> Result<Surd, Error> {
        if self.align(rhs).is_none() {
            return Err(self.mixed(rhs));
        }
        Field::divide(self, rhs).ok_or(Error::DivisionByZero)
    }

    /// Sign of `a + b·√d`, decided exactly by comparing `a²` with
    /// `b²d` when the two parts disagree.
    pub fn signum(&self) -> Ordering {
        let sa = self.a.signum();
        let sb = self.b.signum();
        if sb == Ordering::Equal || sa == sb {
            return if sa == Ordering::Equal { sb } else { sa };
        }
        if sa == Ordering::Equal {
            return sb;
        }
        let d = BigRat::from_integer(&self.d);
        let a2 = &self.a * &self.a;
        let b2d = &(&self.b * &self.b) * &d;
        if a2 > b2d {
            sa
        } else {
            sb
        }
    }

    fn cmp_integer(&self, value: &BigInt) -> Ordering {
        let shifted = Surd {
            a: &self.a - &BigRat::from_integer(value),
            b: self.b.clone(),
            d: self.d.clone(),
        };
        shifted.signum()
    }

    pub fn floor(&self) -> BigInt {
        if self.is_rational() {
            return self.a.floor();
        }
        // |b|·√d = √(b²d); bracket it between s/m and (s+1)/m.
        let b2d = &(&self.b * &self.b) * &BigRat::from_integer(&self.d);
        let m = b2d.denom();
        let s = (&b2d.numer() * &m).isqrt();
        let mut root = BigRat::ratio(&s, &m);
        if self.b.signum() == Ordering::Less {
            root = -&root;
        }
        let mut guess = (&self.a + &root).floor();
        let one = BigInt::one();
        loop {
            let next = &guess + &one;
            if self.cmp_integer(&next) == Ordering::Less {
                break;
            }
            guess = next;
        }
        while self.cmp_integer(&guess) == Ordering::Less {
            guess = &guess - &one;
        }
        guess
    }

    pub fn recip(&self) -> Option<Surd> {
        let norm = self.norm();
        if norm.is_zero() {
            return None;
        }
        Some(Surd {
            a: &self.a / &norm,
            b: &(-&self.b) / &norm,
            d: self.d.clone(),
        })
    }

    fn normalized(a: BigRat, b: BigRat, d: BigInt) -> Surd {
        if b.is_zero() {
            Surd::rational(a)
        } else {
            Surd { a, b, d }
        }
    }
}

impl Field for Surd {
    fn zero() -> Self {
        Surd::rational(BigRat::zero())
    }

    fn one() -> Self {
        Surd::rational(BigRat::one())
    }

    fn from_integer(value: &BigInt) -> Self {
        Surd::rational(BigRat::from_integer(value))
    }

    fn floor(&self) -> BigInt {
        Surd::floor(self)
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
        Surd::recip(self)
    }

    fn is_zero(&self) -> bool {
        self.a.is_zero() && self.b.is_zero()
    }

    fn signum(&self) -> Ordering {
        Surd::signum(self)
    }
}

impl PartialEq for Surd {
    fn eq(&self, other: &Surd) -> bool {
        match self.align(other) {
            Some((x, y, _)) => x.a == y.a && x.b == y.b,
            None => false,
        }
    }
}

impl Eq for Surd {}

impl Hash for Surd {
    // Equal values always share their rational part; the radicand can
    // differ by a square factor.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.a.hash(state);
    }
}

impl PartialOrd for Surd {
    fn partial_cmp(&self, other: &Surd) -> Option<Ordering> {
        self.checked_sub(other).ok().map(|diff| diff.signum())
    }
}

impl From<BigRat> for Surd {
    fn from(value: BigRat) -> Surd {
        Surd::rational(value)
    }
}

impl fmt::Display for Surd {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        if self.is_rational() {
            return write!(fmt, "{}", self.a);
        }
        let negative = self.b.signum() == Ordering::Less;
        let coeff = self.b.abs();
        if !self.a.is_zero() {
            write!(fmt, "{} {} ", self.a, if negative { "-" } else { "+" })?;
        } else if negative {
            write!(fmt, "-")?;
        }
        if coeff != BigRat::one() {
            write!(fmt, "{}*", coeff)?;
        }
        write!(fmt, "sqrt({})", self.d)
    }
}

impl<'a> Add for &'a Surd {
    type Output = Surd;

    fn add(self, rhs: &'a Surd) -> Surd {
        let (x, y, d) = self.aligned(rhs);
        Surd::normalized(&x.a + &y.a, &x.b + &y.b, d)
    }
}

impl<'a> Sub for &'a Surd {
    type Output = Surd;

    fn sub(self, rhs: &'a Surd) -> Surd {
        let (x, y, d) = self.aligned(rhs);
        Surd::normalized(&x.a - &y.a, &x.b - &y.b, d)
    }
}

impl<'a> Neg for &'a Surd {
    type Output = Surd;

    fn neg(self) -> Surd {
        Surd {
            a: -&self.a,
            b: -&self.b,
            d: self.d.clone(),
        }
    }
}

impl<'a> Mul for &'a Surd {
    type Output = Surd;

    fn mul(self, rhs: &'a Surd) -> Surd {
        let (x, y, d) = self.aligned(rhs);
        let dq = BigRat::from_integer(&d);
        let a = &(&x.a * &y.a) + &(&(&x.b * &y.b) * &dq);
        let b = &(&x.a * &y.b) + &(&x.b * &y.a);
        Surd::normalized(a, b, d)
    }
}

impl<'a> Div for &'a Surd {
    type Output = Surd;

    /// Panics on division by zero, like `BigRat`.
    fn div(self, rhs: &'a Surd) -> Surd {
        match Surd::recip(rhs) {
            Some(inv) => self * &inv,
            None => panic!("division by zero"),
        }
    }
}
