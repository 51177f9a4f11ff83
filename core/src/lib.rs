// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Exact simple continued fractions.
//!
//! Any value of an ordered field with a floor function can be split
//! into an integer part and a fractional part in `[0, 1)`. Inverting the
//! fractional part and repeating gives the int/fract stream, and the
//! integer parts of that stream are the terms of the simple continued
//! fraction `h + 1/(b0 + 1/(b1 + ...))`.
//!
//! `contfrac_core` computes these streams lazily and exactly over
//! rationals ([`BigRat`]) and real quadratic fields ([`Surd`]), evaluates
//! convergents, and decides termination: the expansion of a rational
//! always ends, within a bound that depends only on its fractional
//! part, and the expansion of an irrational never does.
//!
//! ## Example
//!
//! ```rust
//! use contfrac_core::types::{BigInt, BigRat};
//!
//! let q = BigRat::small_ratio(415, 93);
//! let cf = contfrac_core::continued_fraction(&q, 10);
//! assert_eq!(cf.to_string(), "[4; 2, 6, 7]");
//! assert_eq!(contfrac_core::convergent(&q, 1), BigRat::small_ratio(9, 2));
//!
//! let termination = contfrac_core::is_rational_terminating(&q);
//! assert_eq!(termination.terminated_at, 4);
//! assert!(BigInt::from(termination.terminated_at) <= termination.step_bound);
//! ```
//!
//! ## Queries
//!
//! Frontends parse and answer queries with [`eval`] or [`one_line`].
//!
//! ```rust
//! let ctx = contfrac_core::Context::new();
//! assert_eq!(
//!     contfrac_core::one_line(&ctx, "period (1 + sqrt(5)) / 2").unwrap(),
//!     "1/2 + 1/2*sqrt(5) = [1; (1)]"
//! );
//! ```
//!
//! Replies implement [`output::fmt::TokenFmt`], so they can also be
//! rendered with per-token highlighting.

#![allow(clippy::needless_lifetimes)]

pub mod ast;
pub mod bridge;
pub mod cf;
pub mod error;
pub mod output;
pub mod parsing;
pub mod termination;
pub mod types;

mod context;
mod helpers;

pub use crate::cf::Truncated;
pub use crate::context::Context;
pub use crate::error::Error;
pub use crate::output::QueryReply;
pub use crate::termination::{is_rational_terminating, Termination};
pub use helpers::{
    continued_fraction, convergent, convergents_up_to, eval, expand, one_line, version,
};
