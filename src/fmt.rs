// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use ansi_term::{ANSIString, ANSIStrings};
use contfrac_core::output::fmt::{FmtToken, Span, TokenFmt};
use contfrac_core::Error;

use crate::config::{Config, Theme};

fn to_ansi_inner<'a>(theme: &Theme, strings: &mut Vec<ANSIString<'a>>, obj: &'a dyn TokenFmt<'a>) {
    for span in obj.to_spans() {
        match span {
            Span::Content { text, token } => strings.push(theme.get_style(token).paint(text)),
            Span::Child(obj) => to_ansi_inner(theme, strings, obj),
        }
    }
}

pub fn to_ansi<'a>(config: &Config, obj: &'a dyn TokenFmt<'a>) -> Vec<ANSIString<'a>> {
    let mut strings = vec![];
    to_ansi_inner(config.get_theme(), &mut strings, obj);
    strings
}

pub fn to_ansi_string<'a>(config: &Config, obj: &'a dyn TokenFmt<'a>) -> String {
    let strings = to_ansi(config, obj);
    format!("{}", ANSIStrings(&strings))
}

pub fn error_string(config: &Config, err: &Error) -> String {
    let style = config.get_theme().get_style(FmtToken::Error);
    style.paint(err.to_string()).to_string()
}
