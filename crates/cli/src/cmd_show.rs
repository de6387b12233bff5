// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `skillgate show` command implementation.

use std::io::Write;

use anyhow::Result;

use skillgate::cli::{Cli, OutputFormat, ShowArgs};
use skillgate::error::ExitCode;
use skillgate::{Alternative, HooksFile};

pub fn run(cli: &Cli, args: &ShowArgs) -> Result<ExitCode> {
    let (source, matcher) = crate::load_matcher(cli)?;
    let rule = matcher.rule();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match args.output {
        OutputFormat::Json => {
            let file = HooksFile::for_rule(rule, &cli.event, &args.command);
            writeln!(out, "{}", serde_json::to_string_pretty(&file)?)?;
        }
        OutputFormat::Text => {
            writeln!(out, "source: {}", crate::describe_source(&source))?;
            writeln!(
                out,
                "rule: {} alternatives ({} matcher)",
                rule.len(),
                matcher.tier()
            )?;
            let width = rule.len().to_string().len();
            for (i, alt) in rule.alternatives().iter().enumerate() {
                let (kind, text, suffix) = match alt {
                    Alternative::Literal {
                        literal,
                        ignore_case,
                    } => (
                        "literal",
                        literal.as_str(),
                        if *ignore_case { " (ignore case)" } else { "" },
                    ),
                    Alternative::Pattern { pattern } => ("pattern", pattern.as_str(), ""),
                };
                writeln!(out, "  {:>width$}  {:<7}  {}{}", i + 1, kind, text, suffix)?;
            }
            writeln!(out, "pattern: {}", rule.to_pattern())?;
        }
    }

    Ok(ExitCode::Success)
}
