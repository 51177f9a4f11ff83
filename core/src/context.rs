// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use tracing::debug;

use crate::ast::{Command, Expr, Query};
use crate::bridge::terminates_iff_rational;
use crate::cf::approx::approximate;
use crate::cf::convergents::convergents_up_to;
use crate::cf::periodic::detect_period;
use crate::cf::ContinuedFraction;
use crate::error::Error;
use crate::output::{
    ApproxReply, BridgeReply, ConvergentsReply, ExpansionReply, PeriodReply, QueryReply,
    TerminationReply,
};
use crate::termination::is_rational_terminating;
use crate::types::{BigRat, Surd};

/// Limits applied while answering queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    /// Step budget for expansions that are not known to terminate.
    pub max_steps: usize,
    /// How many convergents `convergents` lists.
    pub max_convergents: usize,
}

impl Default for Context {
    /// Equivalent to Context::new()
    fn default() -> Self {
        Context::new()
    }
}

impl Context {
    pub fn new() -> Context {
        Context {
            max_steps: 50,
            max_convergents: 10,
        }
    }

    /// Evaluates an expression exactly in a single quadratic field.
    pub fn eval(&self, expr: &Expr) -> Result<Surd, Error> {
        match *expr {
            Expr::Const(ref value) => Ok(Surd::rational(value.clone())),
            Expr::Sqrt(ref arg) => {
                let arg = self.eval(arg)?;
                if !arg.is_rational() {
                    return Err(Error::NotRational(arg.to_string()));
                }
                Surd::sqrt(arg.rational_part())
            }
            Expr::Neg(ref arg) => Ok(-&self.eval(arg)?),
            Expr::Plus(ref arg) => self.eval(arg),
            Expr::Add(ref left, ref right) => self.eval(left)?.checked_add(&self.eval(right)?),
            Expr::Sub(ref left, ref right) => self.eval(left)?.checked_sub(&self.eval(right)?),
            Expr::Mul(ref left, ref right) => self.eval(left)?.checked_mul(&self.eval(right)?),
            Expr::Div(ref left, ref right) => self.eval(left)?.checked_div(&self.eval(right)?),
            Expr::Error(ref message) => Err(Error::Parse(message.clone())),
        }
    }

    pub fn eval_query(&self, query: &Query) -> Result<QueryReply, Error> {
        if let Some(message) = query.expr.find_error() {
            return Err(Error::Parse(message.to_owned()));
        }
        let value = self.eval(&query.expr)?;
        debug!(query = %query, %value, "evaluated query");
        let reply = match query.command {
            Command::Expand => QueryReply::Expansion(ExpansionReply {
                value: value.to_string(),
                expansion: ContinuedFraction::of(&value).truncate(self.max_steps),
            }),
            Command::Convergents => {
                let limit = self.max_convergents;
                let convergents = convergents_up_to(&value, limit).collect::<Vec<BigRat>>();
                // Convergent `n` needs `n` terms. An empty list is never
                // complete.
                let complete = limit > 0
                    && ContinuedFraction::of(&value)
                        .truncate(limit - 1)
                        .complete;
                QueryReply::Convergents(ConvergentsReply {
                    value: value.to_string(),
                    convergents,
                    complete,
                })
            }
            Command::Terminates => {
                if !value.is_rational() {
                    return Err(Error::NotRational(value.to_string()));
                }
                let rational = value.rational_part().clone();
                QueryReply::Termination(TerminationReply {
                    termination: is_rational_terminating(&rational),
                    value: rational,
                })
            }
            Command::Period => QueryReply::Period(PeriodReply {
                value: value.to_string(),
                periodic: detect_period(&value, self.max_steps)?,
            }),
            Command::Bridge => QueryReply::Bridge(BridgeReply {
                value: value.to_string(),
                report: terminates_iff_rational(&value, self.max_steps)?,
            }),
            Command::Approx(ref limit) => QueryReply::Approx(ApproxReply {
                value: value.to_string(),
                limit: limit.clone(),
                approximation: approximate(&value, limit),
            }),
        };
        Ok(reply)
    }
}
