// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Syntax tree of the query language.

use serde_derive::Serialize;
use std::fmt;

use crate::types::{BigInt, BigRat};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Expr {
    /// A decimal literal, already converted to an exact rational.
    Const(BigRat),
    Sqrt(Box<Expr>),
    Neg(Box<Expr>),
    Plus(Box<Expr>),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Command {
    Expand,
    Convergents,
    Terminates,
    Period,
    Bridge,
    Approx(BigInt),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Query {
    pub command: Command,
    pub expr: Expr,
}

#[derive(PartialOrd, Ord, PartialEq, Eq, Clone, Copy)]
enum Precedence {
    Add,
    Mul,
    Unary,
    Atom,
}

impl Expr {
    fn precedence(&self) -> Precedence {
        match self {
            Expr::Add(..) | Expr::Sub(..) => Precedence::Add,
            Expr::Mul(..) | Expr::Div(..) => Precedence::Mul,
            Expr::Neg(..) | Expr::Plus(..) => Precedence::Unary,
            // Rationals print as `p/q`.
            Expr::Const(ref value) if !value.is_integer() => Precedence::Mul,
            Expr::Const(ref value) if value.signum() == std::cmp::Ordering::Less => {
                Precedence::Unary
            }
            Expr::Const(..) | Expr::Sqrt(..) | Expr::Error(..) => Precedence::Atom,
        }
    }

    /// The first error node in the tree, if any.
    pub fn find_error(&self) -> Option<&str> {
        match self {
            Expr::Error(ref msg) => Some(msg),
            Expr::Const(..) => None,
            Expr::Sqrt(ref e) | Expr::Neg(ref e) | Expr::Plus(ref e) => e.find_error(),
            Expr::Add(ref l, ref r)
            | Expr::Sub(ref l, ref r)
            | Expr::Mul(ref l, ref r)
            | Expr::Div(ref l, ref r) => l.find_error().or_else(|| r.find_error()),
        }
    }
}

fn write_operand(fmt: &mut fmt::Formatter, expr: &Expr, min: Precedence) -> fmt::Result {
    if expr.precedence() < min {
        write!(fmt, "({})", expr)
    } else {
        write!(fmt, "{}", expr)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Expr::Const(ref value) => write!(fmt, "{}", value),
            Expr::Sqrt(ref e) => write!(fmt, "sqrt({})", e),
            Expr::Neg(ref e) => {
                write!(fmt, "-")?;
                write_operand(fmt, e, Precedence::Unary)
            }
            Expr::Plus(ref e) => {
                write!(fmt, "+")?;
                write_operand(fmt, e, Precedence::Unary)
            }
            Expr::Add(ref l, ref r) | Expr::Sub(ref l, ref r) => {
                let op = if let Expr::Add(..) = *self { "+" } else { "-" };
                write_operand(fmt, l, Precedence::Add)?;
                write!(fmt, " {} ", op)?;
                write_operand(fmt, r, Precedence::Mul)
            }
            Expr::Mul(ref l, ref r) | Expr::Div(ref l, ref r) => {
                let op = if let Expr::Mul(..) = *self { "*" } else { "/" };
                write_operand(fmt, l, Precedence::Mul)?;
                write!(fmt, " {} ", op)?;
                write_operand(fmt, r, Precedence::Unary)
            }
            Expr::Error(ref msg) => write!(fmt, "<error: {}>", msg),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Command::Expand => Ok(()),
            Command::Convergents => write!(fmt, "convergents "),
            Command::Terminates => write!(fmt, "terminates "),
            Command::Period => write!(fmt, "period "),
            Command::Bridge => write!(fmt, "bridge "),
            Command::Approx(ref limit) => write!(fmt, "approx {} ", limit),
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}{}", self.command, self.expr)
    }
}
