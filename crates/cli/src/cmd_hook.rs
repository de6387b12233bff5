// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `skillgate hook` command implementation.
//!
//! Reads the host's hook payload from stdin and prints the match result as
//! JSON. Injecting skill content is left to the host.

use std::io::Read;

use anyhow::Result;

use skillgate::cli::{Cli, HookArgs};
use skillgate::config::hooks;
use skillgate::error::ExitCode;
use skillgate::Error;

pub fn run(cli: &Cli, args: &HookArgs) -> Result<ExitCode> {
    let (_, matcher) = crate::load_matcher(cli)?;

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .map_err(|e| Error::Io {
            path: "<stdin>".into(),
            source: e,
        })?;
    let payload = hooks::parse_payload(&input)?;

    if let Some(event) = payload.hook_event_name.as_deref()
        && event != cli.event
    {
        tracing::warn!("payload event {} differs from configured {}", event, cli.event);
    }

    let result = matcher.test(&payload.prompt);
    match (&result.span, result.text()) {
        (Some(span), Some(text)) => {
            tracing::debug!("matched {:?} at {}..{}", text, span.start, span.end)
        }
        _ => tracing::debug!("no match; prompt passes through"),
    }

    println!("{}", serde_json::to_string(&result)?);

    Ok(if result.matched || !args.exit_code {
        ExitCode::Success
    } else {
        ExitCode::Failed
    })
}
