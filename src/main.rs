// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use clap::{value_parser, Arg, ArgAction, Command};
use eyre::{Result, WrapErr};
use std::fs::File;
use std::io::{stdin, BufReader, IsTerminal};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use contfrac::{config, repl};

fn main() -> Result<ExitCode> {
    let matches = Command::new("contfrac")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Exact continued fraction calculator")
        .arg(
            Arg::new("EXPR")
                .help("Evaluate a list of queries. If no arguments are provided, an interactive session will start.")
                .num_args(..)
                .required(false),
        )
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .help("Reads queries from a file, or from stdin if given `-`"),
        )
        .arg(
            Arg::new("config-path")
                .long("config-path")
                .help("Prints a path to the config file, then exits")
                .action(ArgAction::SetTrue)
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Prints replies as JSON")
                .action(ArgAction::SetTrue)
        )
        .arg(
            Arg::new("steps")
                .long("steps")
                .value_name("N")
                .help("Step budget for expansions that might not terminate")
                .value_parser(value_parser!(usize))
        )
        .arg(
            Arg::new("config")
                .short('c')
                .num_args(1)
                .long("config").action(ArgAction::Set).help("Set path to config.toml")
        )
        .get_matches();

    color_eyre::install()?;
    let filter = EnvFilter::try_from_env("CONTFRAC_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let mut config = config::read_config(matches.get_one::<String>("config").map(|s| &**s))?;
    if matches.get_flag("json") {
        config.contfrac.json = true;
    }
    if let Some(&steps) = matches.get_one::<usize>("steps") {
        config.limits.max_steps = steps;
    }

    if matches.get_flag("config-path") {
        println!("{}", config::config_path("config.toml")?.display());
        Ok(ExitCode::SUCCESS)
    } else if let Some(filename) = matches.get_one::<String>("file") {
        match &filename[..] {
            "-" => {
                let stdin_handle = stdin();
                repl::noninteractive(stdin_handle.lock(), &config, false).map(|_| ExitCode::SUCCESS)
            }
            _ => {
                let file = File::open(filename)
                    .wrap_err(format!("Failed to open input file `{}`", filename))?;
                repl::noninteractive(BufReader::new(file), &config, false)
                    .map(|_| ExitCode::SUCCESS)
            }
        }
    } else if let Some(exprs) = matches.get_many::<String>("EXPR") {
        let ctx = config.context();
        let mut exit_code = ExitCode::SUCCESS;
        for expr in exprs {
            println!("> {}", expr);
            let (text, ok) = repl::render(&ctx, &config, expr)?;
            println!("{}", text);
            if !ok {
                exit_code = ExitCode::FAILURE;
            }
        }
        Ok(exit_code)
    } else if !stdin().is_terminal() {
        let stdin_handle = stdin();
        repl::noninteractive(stdin_handle.lock(), &config, false).map(|_| ExitCode::SUCCESS)
    } else {
        repl::interactive(config).map(|_| ExitCode::SUCCESS)
    }
}
