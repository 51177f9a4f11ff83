// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::{borrow::Cow, fmt, iter::Peekable};

/// A node in a token tree. Each piece of text is tagged with a hint
/// for how it should be displayed, which lets frontends add color
/// without re-parsing the plain text rendering.
///
/// # Example
///
/// ```rust
/// use contfrac_core::output::fmt::{Span, TokenFmt};
///
/// fn write_string<'a>(string: &mut String, obj: &'a dyn TokenFmt<'a>) {
///     for span in obj.to_spans() {
///         match span {
///             Span::Content { text, .. } => string.push_str(&text),
///             Span::Child(obj) => write_string(string, obj),
///         }
///     }
/// }
/// ```
#[derive(Clone)]
pub enum Span<'a> {
    Content { text: Cow<'a, str>, token: FmtToken },
    Child(&'a dyn TokenFmt<'a>),
}

impl<'a> Span<'a> {
    pub fn new(text: impl Into<Cow<'a, str>>, token: FmtToken) -> Span<'a> {
        Span::Content {
            text: text.into(),
            token,
        }
    }

    pub fn plain(text: impl Into<Cow<'a, str>>) -> Span<'a> {
        Span::new(text, FmtToken::Plain)
    }

    pub fn error(text: impl Into<Cow<'a, str>>) -> Span<'a> {
        Span::new(text, FmtToken::Error)
    }

    pub fn number(text: impl Into<Cow<'a, str>>) -> Span<'a> {
        Span::new(text, FmtToken::Number)
    }

    pub fn user_input(text: impl Into<Cow<'a, str>>) -> Span<'a> {
        Span::new(text, FmtToken::UserInput)
    }

    pub fn term(text: impl Into<Cow<'a, str>>) -> Span<'a> {
        Span::new(text, FmtToken::Term)
    }

    pub fn period(text: impl Into<Cow<'a, str>>) -> Span<'a> {
        Span::new(text, FmtToken::Period)
    }

    pub fn list_sep(text: impl Into<Cow<'a, str>>) -> Span<'a> {
        Span::new(text, FmtToken::ListSep)
    }

    pub fn child(obj: &'a dyn TokenFmt<'a>) -> Span<'a> {
        Span::Child(obj)
    }
}

impl<'a> fmt::Debug for Span<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Span::Content { text, token } => write!(f, "({:?}, {:?})", text, token),
            Span::Child(obj) => {
                let spans = obj.to_spans();
                spans.fmt(f)
            }
        }
    }
}

/// Display hint attached to a [`Span`].
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum FmtToken {
    /// Fixed text, generally displayed without formatting.
    Plain,
    /// Text in an error context.
    Error,
    /// A rational or other numeric value.
    Number,
    /// Text echoed back from the query.
    UserInput,
    /// A partial denominator of a continued fraction.
    Term,
    /// The repeating block of a periodic expansion.
    Period,
    /// Separator between list items.
    ListSep,
}

/// Allows an object to be converted into a token tree.
pub trait TokenFmt<'a> {
    fn to_spans(&'a self) -> Vec<Span<'a>>;
}

/// Flattens a token tree into plain text.
pub fn to_plain_string<'a>(obj: &'a dyn TokenFmt<'a>) -> String {
    fn flatten<'a>(out: &mut String, spans: Vec<Span<'a>>) {
        for span in spans {
            match span {
                Span::Content { text, .. } => out.push_str(&text),
                Span::Child(obj) => flatten(out, obj.to_spans()),
            }
        }
    }
    let mut out = String::new();
    flatten(&mut out, obj.to_spans());
    out
}

pub(crate) struct JoinIter<'a, I>
where
    I: Iterator,
{
    iter: Peekable<I>,
    sep: Span<'a>,
    last_was_sep: bool,
}

pub(crate) fn join<'a, I>(iter: I, sep: Span<'a>) -> impl Iterator<Item = Span<'a>>
where
    I: Iterator<Item = Span<'a>>,
{
    JoinIter {
        iter: iter.peekable(),
        sep,
        last_was_sep: true,
    }
}

impl<'a, I> Iterator for JoinIter<'a, I>
where
    I: Iterator<Item = Span<'a>>,
{
    type Item = Span<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.iter.peek().is_some() {
            if self.last_was_sep {
                self.last_was_sep = false;
                self.iter.next()
            } else {
                self.last_was_sep = true;
                Some(self.sep.clone())
            }
        } else {
            None
        }
    }
}
