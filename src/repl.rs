// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::config::Config;
use crate::fmt::{error_string, to_ansi_string};
use crate::helper::ContfracHelper;
use contfrac_core::{eval, Context};
use eyre::Result;
use rustyline::{config::Configurer, error::ReadlineError, CompletionType, Editor};
use serde_json::json;
use std::io::{BufRead, ErrorKind};
use tracing::debug;

/// Answers one query line. The flag is false if the query failed.
pub fn render(ctx: &Context, config: &Config, line: &str) -> Result<(String, bool)> {
    let result = eval(ctx, line);
    debug!(line, ok = result.is_ok(), "query answered");
    let ok = result.is_ok();
    let text = match (result, config.contfrac.json) {
        (Ok(reply), true) => serde_json::to_string(&reply)?,
        (Err(err), true) => serde_json::to_string(&json!({
            "type": "error",
            "message": err.to_string(),
            "error": err,
        }))?,
        (Ok(reply), false) => to_ansi_string(config, &reply),
        (Err(err), false) => error_string(config, &err),
    };
    Ok((text, ok))
}

pub fn noninteractive<T: BufRead>(f: T, config: &Config, show_prompt: bool) -> Result<()> {
    use std::io::{stdout, Write};

    let ctx = config.context();
    for line in f.lines() {
        let line = line?;
        if show_prompt {
            print!("{}", config.contfrac.prompt);
            stdout().flush()?;
        }
        match line.trim() {
            "" => continue,
            "help" => println!("{}", HELP_TEXT),
            "quit" | "exit" => break,
            line => {
                let (text, _) = render(&ctx, config, line)?;
                println!("{}", text);
            }
        }
    }
    Ok(())
}

pub const HELP_TEXT: &str = "Enter a value to expand it as a continued fraction, e.g. `415/93` or `(1 + sqrt(5)) / 2`.
Prefix it with a command for other answers:
  convergents <expr>     successive convergents
  terminates <expr>      termination bound of a rational
  period <expr>          repeating block of a quadratic irrational
  bridge <expr>          check that the expansion ends iff the value is rational
  approx <n> <expr>      best approximation with denominator at most n
To quit, type `quit` or press Ctrl+D.";

pub fn interactive(config: Config) -> Result<()> {
    let ctx = config.context();
    let mut rl = Editor::<ContfracHelper>::new();
    rl.set_helper(Some(ContfracHelper));
    rl.set_completion_type(CompletionType::List);

    let mut hpath = dirs::data_local_dir().map(|mut path| {
        path.push("contfrac");
        path.push("history.txt");
        path
    });
    if let Some(ref mut path) = hpath {
        match rl.load_history(path) {
            // Ignore file not found errors.
            Err(ReadlineError::Io(ref err)) if err.kind() == ErrorKind::NotFound => (),
            Err(err) => eprintln!("Loading history failed: {}", err),
            Ok(()) => (),
        };
    }

    let save_history = |rl: &mut Editor<ContfracHelper>| {
        if let Some(ref path) = hpath {
            if let Some(parent) = path.parent() {
                // ignore error - if this fails, the next line will as well.
                let _ = std::fs::create_dir_all(parent);
            }
            rl.save_history(path).unwrap_or_else(|e| {
                eprintln!("Saving history failed: {}", e);
            });
        }
    };

    loop {
        let readline = rl.readline(&config.contfrac.prompt);
        match readline {
            Ok(ref line) if line.trim() == "help" => {
                println!("{}", HELP_TEXT);
            }
            Ok(ref line) if line.trim() == "quit" || line.trim() == "exit" => {
                save_history(&mut rl);
                break;
            }
            Ok(ref line) if line.trim().is_empty() => (),
            Ok(line) => {
                rl.add_history_entry(&line);
                let (text, _) = render(&ctx, &config, &line)?;
                println!("{}", text);
            }
            Err(ReadlineError::Interrupted) => {}
            Err(ReadlineError::Eof) => {
                save_history(&mut rl);
                break;
            }
            Err(err) => {
                println!("{:?}", eyre::eyre!(err).wrap_err("Readline"));
                break;
            }
        }
    }

    Ok(())
}
