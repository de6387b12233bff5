// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Skillgate CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use skillgate::cli::{Cli, Command};
use skillgate::config::{self, RuleSource};
use skillgate::error::ExitCode;
use skillgate::{Error, Matcher};

mod cmd_cases;
mod cmd_hook;
mod cmd_show;

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("SKILLGATE_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("skillgate: {}", e);
            match e.downcast_ref::<skillgate::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            // Show help for bare invocation
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
        Some(Command::Test(args)) => cmd_test::run(&cli, args),
        Some(Command::Hook(args)) => cmd_hook::run(&cli, args),
        Some(Command::Cases(args)) => cmd_cases::run(&cli, args),
        Some(Command::Show(args)) => cmd_show::run(&cli, args),
    }
}

/// Resolve the rule and compile it.
///
/// A malformed rule aborts the command; the gate is never installed with a
/// fallback rule.
pub(crate) fn load_matcher(cli: &Cli) -> anyhow::Result<(RuleSource, Matcher)> {
    let cwd = std::env::current_dir().map_err(|e| Error::Io {
        path: ".".into(),
        source: e,
    })?;
    let source = config::resolve_source(cli.config.as_deref(), &cwd, &cli.event)?;
    let rule = config::load_rule(&source)?;
    let matcher = Matcher::new(rule).map_err(Error::from)?;
    tracing::debug!("matcher ready: {} ({})", describe_source(&source), matcher.tier());
    Ok((source, matcher))
}

pub(crate) fn describe_source(source: &RuleSource) -> String {
    match source {
        RuleSource::Builtin => "built-in rule".to_string(),
        RuleSource::Toml(path) => path.display().to_string(),
        RuleSource::Hooks { path, event } => format!("{} ({})", path.display(), event),
    }
}
