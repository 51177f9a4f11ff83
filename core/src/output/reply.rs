// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde_derive::Serialize;
use std::fmt;

use super::fmt::{join, to_plain_string, Span, TokenFmt};
use crate::bridge::BridgeReport;
use crate::cf::periodic::Periodic;
use crate::cf::Truncated;
use crate::termination::Termination;
use crate::types::{BigInt, BigRat};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpansionReply {
    pub value: String,
    pub expansion: Truncated,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConvergentsReply {
    pub value: String,
    pub convergents: Vec<BigRat>,
    /// False if the expansion has more convergents than were listed.
    pub complete: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TerminationReply {
    pub value: BigRat,
    pub termination: Termination,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodReply {
    pub value: String,
    pub periodic: Periodic,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BridgeReply {
    pub value: String,
    pub report: BridgeReport,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApproxReply {
    pub value: String,
    pub limit: BigInt,
    pub approximation: BigRat,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum QueryReply {
    Expansion(ExpansionReply),
    Convergents(ConvergentsReply),
    Termination(TerminationReply),
    Period(PeriodReply),
    Bridge(BridgeReply),
    Approx(ApproxReply),
}

fn terms<'a>(values: &'a [BigInt]) -> Vec<Span<'a>> {
    let mut spans = vec![];
    if values.is_empty() {
        return spans;
    }
    spans.push(Span::list_sep("; "));
    spans.extend(join(
        values.iter().map(|v| Span::term(v.to_string())),
        Span::list_sep(", "),
    ));
    spans
}

impl<'a> TokenFmt<'a> for Truncated {
    fn to_spans(&'a self) -> Vec<Span<'a>> {
        let mut spans = vec![Span::plain("["), Span::term(self.head.to_string())];
        spans.extend(terms(&self.terms));
        if !self.complete {
            spans.push(Span::list_sep(if self.terms.is_empty() { "; " } else { ", " }));
            spans.push(Span::plain("..."));
        }
        spans.push(Span::plain("]"));
        spans
    }
}

impl<'a> TokenFmt<'a> for Periodic {
    fn to_spans(&'a self) -> Vec<Span<'a>> {
        let mut spans = vec![Span::plain("["), Span::term(self.head.to_string())];
        spans.extend(terms(&self.preperiod));
        if !self.period.is_empty() {
            spans.push(Span::list_sep(if self.preperiod.is_empty() {
                "; "
            } else {
                ", "
            }));
            spans.push(Span::plain("("));
            spans.extend(join(
                self.period.iter().map(|v| Span::period(v.to_string())),
                Span::list_sep(", "),
            ));
            spans.push(Span::plain(")"));
        }
        spans.push(Span::plain("]"));
        spans
    }
}

impl<'a> TokenFmt<'a> for Termination {
    fn to_spans(&'a self) -> Vec<Span<'a>> {
        vec![
            Span::plain("terminates after "),
            Span::number(self.terminated_at.to_string()),
            Span::plain(if self.terminated_at == 1 {
                " step (bound "
            } else {
                " steps (bound "
            }),
            Span::number(self.step_bound.to_string()),
            Span::plain(")"),
        ]
    }
}

impl<'a> TokenFmt<'a> for BridgeReport {
    fn to_spans(&'a self) -> Vec<Span<'a>> {
        match (&self.rational, self.terminated_at) {
            (Some(q), Some(end)) => vec![
                Span::plain("rational "),
                Span::number(q.to_string()),
                Span::plain("; both expansions end at step "),
                Span::number(end.to_string()),
            ],
            (None, None) => vec![
                Span::plain("not rational; no termination within "),
                Span::number(self.max_steps.to_string()),
                Span::plain(" steps"),
            ],
            (Some(q), None) => vec![
                Span::plain("rational "),
                Span::number(q.to_string()),
                Span::plain("; expansion still running"),
            ],
            (None, Some(end)) => vec![
                Span::error("not rational; expansion ended at step "),
                Span::number(end.to_string()),
            ],
        }
    }
}

impl<'a> TokenFmt<'a> for ExpansionReply {
    fn to_spans(&'a self) -> Vec<Span<'a>> {
        vec![
            Span::user_input(&self.value[..]),
            Span::plain(" = "),
            Span::child(&self.expansion),
        ]
    }
}

impl<'a> TokenFmt<'a> for ConvergentsReply {
    fn to_spans(&'a self) -> Vec<Span<'a>> {
        let mut spans = vec![Span::user_input(&self.value[..]), Span::plain(": ")];
        spans.extend(join(
            self.convergents.iter().map(|c| Span::number(c.to_string())),
            Span::list_sep(", "),
        ));
        if !self.complete {
            spans.push(Span::list_sep(", "));
            spans.push(Span::plain("..."));
        }
        spans
    }
}

impl<'a> TokenFmt<'a> for TerminationReply {
    fn to_spans(&'a self) -> Vec<Span<'a>> {
        vec![
            Span::user_input(self.value.to_string()),
            Span::plain(" "),
            Span::child(&self.termination),
        ]
    }
}

impl<'a> TokenFmt<'a> for PeriodReply {
    fn to_spans(&'a self) -> Vec<Span<'a>> {
        vec![
            Span::user_input(&self.value[..]),
            Span::plain(" = "),
            Span::child(&self.periodic),
        ]
    }
}

impl<'a> TokenFmt<'a> for BridgeReply {
    fn to_spans(&'a self) -> Vec<Span<'a>> {
        vec![
            Span::user_input(&self.value[..]),
            Span::plain(": "),
            Span::child(&self.report),
        ]
    }
}

impl<'a> TokenFmt<'a> for ApproxReply {
    fn to_spans(&'a self) -> Vec<Span<'a>> {
        vec![
            Span::user_input(&self.value[..]),
            Span::plain(" ~ "),
            Span::number(self.approximation.to_string()),
            Span::plain(" (max denominator "),
            Span::number(self.limit.to_string()),
            Span::plain(")"),
        ]
    }
}

impl<'a> TokenFmt<'a> for QueryReply {
    fn to_spans(&'a self) -> Vec<Span<'a>> {
        match *self {
            QueryReply::Expansion(ref reply) => vec![Span::child(reply)],
            QueryReply::Convergents(ref reply) => vec![Span::child(reply)],
            QueryReply::Termination(ref reply) => vec![Span::child(reply)],
            QueryReply::Period(ref reply) => vec![Span::child(reply)],
            QueryReply::Bridge(ref reply) => vec![Span::child(reply)],
            QueryReply::Approx(ref reply) => vec![Span::child(reply)],
        }
    }
}

impl fmt::Display for QueryReply {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", to_plain_string(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::fmt::FmtToken;

    fn ints(values: &[i64]) -> Vec<BigInt> {
        values.iter().map(|&v| BigInt::from(v)).collect()
    }

    #[test]
    fn test_truncated_spans_match_display() {
        let cases = vec![
            Truncated {
                head: BigInt::from(4i64),
                terms: ints(&[2, 6, 7]),
                complete: true,
            },
            Truncated {
                head: BigInt::from(1i64),
                terms: ints(&[2, 2]),
                complete: false,
            },
            Truncated {
                head: BigInt::from(-4i64),
                terms: vec![],
                complete: true,
            },
            Truncated {
                head: BigInt::from(1i64),
                terms: vec![],
                complete: false,
            },
        ];
        for case in &cases {
            assert_eq!(to_plain_string(case), case.to_string());
        }
    }

    #[test]
    fn test_periodic_spans_match_display() {
        let periodic = Periodic {
            head: BigInt::from(2i64),
            preperiod: vec![],
            period: ints(&[1, 1, 1, 4]),
        };
        assert_eq!(to_plain_string(&periodic), "[2; (1, 1, 1, 4)]");
        assert_eq!(to_plain_string(&periodic), periodic.to_string());
        let spans = periodic.to_spans();
        let period_tokens = spans
            .iter()
            .filter(|span| matches!(span, Span::Content { token: FmtToken::Period, .. }))
            .count();
        assert_eq!(period_tokens, 4);
    }

    #[test]
    fn test_termination_spans_match_display() {
        let termination = Termination {
            terminates: true,
            step_bound: BigInt::from(35i64),
            terminated_at: 9,
        };
        assert_eq!(to_plain_string(&termination), termination.to_string());
    }

    #[test]
    fn test_serialize_tagged() {
        let reply = QueryReply::Approx(ApproxReply {
            value: "355/113".to_owned(),
            limit: BigInt::from(100i64),
            approximation: BigRat::small_ratio(22, 7),
        });
        let json = serde_json::to_value(&reply).unwrap();
        assert_eq!(json["type"], "approx");
        assert_eq!(json["approximation"], "22/7");
        assert_eq!(json["limit"], "100");
        assert_eq!(reply.to_string(), "355/113 ~ 22/7 (max denominator 100)");
    }
}
