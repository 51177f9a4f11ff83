// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use rustyline::{
    completion::{extract_word, Completer, Pair},
    highlight::Highlighter,
    hint::Hinter,
    validate::Validator,
    Helper,
};
use rustyline::{Context as LineContext, Result};

/// Words the query language and the REPL understand.
const KEYWORDS: &[&str] = &[
    "approx",
    "bridge",
    "convergents",
    "help",
    "period",
    "quit",
    "sqrt",
    "terminates",
];

#[derive(Default)]
pub struct ContfracHelper;

impl ContfracHelper {
    pub fn candidates(prefix: &str) -> Vec<&'static str> {
        if prefix.is_empty() {
            return vec![];
        }
        KEYWORDS
            .iter()
            .copied()
            .filter(|word| word.starts_with(prefix))
            .collect()
    }
}

impl Completer for ContfracHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &LineContext) -> Result<(usize, Vec<Pair>)> {
        let (res_pos, word) = extract_word(line, pos, None, &[b' ', b'(']);
        let results = ContfracHelper::candidates(word)
            .into_iter()
            .map(|keyword| Pair {
                display: keyword.to_owned(),
                replacement: keyword.to_owned(),
            })
            .collect();
        Ok((res_pos, results))
    }
}

impl Helper for ContfracHelper {}

impl Validator for ContfracHelper {}

impl Highlighter for ContfracHelper {}

impl Hinter for ContfracHelper {
    type Hint = String;
}
