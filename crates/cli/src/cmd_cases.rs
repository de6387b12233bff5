// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `skillgate cases` command implementation.

use anyhow::Result;
use termcolor::StandardStream;

use skillgate::cases;
use skillgate::cli::{CasesArgs, Cli};
use skillgate::color;
use skillgate::error::ExitCode;

pub fn run(cli: &Cli, args: &CasesArgs) -> Result<ExitCode> {
    let (source, matcher) = crate::load_matcher(cli)?;
    let cases = cases::load(&args.file)?;
    tracing::debug!(
        "running {} cases from {} against {}",
        cases.len(),
        args.file.display(),
        crate::describe_source(&source)
    );

    let summary = cases::run(&matcher, cases);

    let mut out = StandardStream::stdout(color::choice(args.color, args.no_color));
    cases::write_report(&mut out, &summary)?;

    Ok(if summary.is_success() {
        ExitCode::Success
    } else {
        ExitCode::Failed
    })
}
