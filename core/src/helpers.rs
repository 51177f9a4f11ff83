// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::cf::stream::{self, Expand};
use crate::cf::{convergents, ContinuedFraction, Truncated};
use crate::error::Error;
use crate::output::QueryReply;
use crate::parsing::text_query;
use crate::types::{BigRat, Field};
use crate::Context;

/// Bounded iteration over the int/fract stream of `value`. See
/// [`stream::expand`].
pub fn expand<F: Field>(value: &F, max_steps: usize) -> Expand<F> {
    stream::expand(value, max_steps)
}

/// The first `max_steps` terms of the continued fraction of `value`.
/// `complete` tells whether the expansion ended within the budget.
pub fn continued_fraction<F: Field>(value: &F, max_steps: usize) -> Truncated {
    ContinuedFraction::of(value).truncate(max_steps)
}

/// Convergent `index` of `value`. Past the end of a finite expansion
/// this is the value itself.
pub fn convergent<F: Field>(value: &F, index: usize) -> BigRat {
    convergents::convergent(value, index)
}

/// At most `max_steps` successive convergents of `value`.
pub fn convergents_up_to<F: Field>(value: &F, max_steps: usize) -> Vec<BigRat> {
    convergents::convergents_up_to(value, max_steps).collect()
}

/// Parses a query and answers it.
pub fn eval(ctx: &Context, line: &str) -> Result<QueryReply, Error> {
    let mut iter = text_query::TokenIterator::new(line.trim()).peekable();
    let query = text_query::parse_query(&mut iter);
    ctx.eval_query(&query)
}

/// A version of eval() that converts the reply into a plain-text string.
pub fn one_line(ctx: &Context, line: &str) -> Result<String, Error> {
    eval(ctx, line).map(|reply| reply.to_string())
}

/// Returns `env!("CARGO_PKG_VERSION")`, a string in `x.y.z` format.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
