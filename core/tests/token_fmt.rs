// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::borrow::Cow;

use contfrac_core::output::fmt::TokenFmt;
use contfrac_core::output::fmt::{
    FmtToken::{self, *},
    Span,
};
use contfrac_core::*;
use std::fmt;

#[derive(Clone, PartialEq, Eq)]
pub enum FlatSpan<'a> {
    Content { text: Cow<'a, str>, token: FmtToken },
    // Span's Child is a dyn trait, which can't be compared with Eq.
    Child(Vec<FlatSpan<'a>>),
}

impl<'a> From<Span<'a>> for FlatSpan<'a> {
    fn from(span: Span<'a>) -> Self {
        match span {
            Span::Content { text, token } => FlatSpan::Content { text, token },
            Span::Child(child) => {
                FlatSpan::Child(child.to_spans().into_iter().map(Into::into).collect())
            }
        }
    }
}

impl<'a> fmt::Debug for FlatSpan<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlatSpan::Content { text, token } => write!(f, "({:?}, {:?})", text, token),
            FlatSpan::Child(obj) => obj.fmt(f),
        }
    }
}

fn s(text: &'static str, token: FmtToken) -> FlatSpan<'static> {
    FlatSpan::Content {
        text: text.into(),
        token,
    }
}

fn child(children: Vec<FlatSpan<'static>>) -> FlatSpan<'static> {
    FlatSpan::Child(children)
}

fn test(input: &str, output: &[FlatSpan<'static>]) {
    let ctx = Context::new();
    let reply = eval(&ctx, input).unwrap();
    let res = reply
        .to_spans()
        .into_iter()
        .map(FlatSpan::from)
        .collect::<Vec<_>>();
    similar_asserts::assert_eq!(res, output);
}

#[test]
fn test_expansion() {
    test(
        "7/3",
        &[child(vec![
            s("7/3", UserInput),
            s(" = ", Plain),
            child(vec![
                s("[", Plain),
                s("2", Term),
                s("; ", ListSep),
                s("3", Term),
                s("]", Plain),
            ]),
        ])],
    );
}

#[test]
fn test_period() {
    test(
        "period sqrt(3)",
        &[child(vec![
            s("sqrt(3)", UserInput),
            s(" = ", Plain),
            child(vec![
                s("[", Plain),
                s("1", Term),
                s("; ", ListSep),
                s("(", Plain),
                s("1", Period),
                s(", ", ListSep),
                s("2", Period),
                s(")", Plain),
                s("]", Plain),
            ]),
        ])],
    );
}

#[test]
fn test_convergents() {
    test(
        "convergents 7/3",
        &[child(vec![
            s("7/3", UserInput),
            s(": ", Plain),
            s("2", Number),
            s(", ", ListSep),
            s("7/3", Number),
        ])],
    );
}

#[test]
fn test_termination() {
    test(
        "terminates 7/3",
        &[child(vec![
            s("7/3", UserInput),
            s(" ", Plain),
            child(vec![
                s("terminates after ", Plain),
                s("2", Number),
                s(" steps (bound ", Plain),
                s("2", Number),
                s(")", Plain),
            ]),
        ])],
    );
}
