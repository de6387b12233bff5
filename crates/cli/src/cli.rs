// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::DEFAULT_EVENT;

/// Decide whether a prompt should pull in the Rust help skill
#[derive(Parser)]
#[command(name = "skillgate")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file (skillgate.toml or a hooks .json file)
    #[arg(short = 'C', long = "config", global = true, env = "SKILLGATE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Hook event whose matcher is read from a hooks file
    #[arg(long, global = true, default_value = DEFAULT_EVENT, env = "SKILLGATE_EVENT")]
    pub event: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Test a prompt against the rule
    Test(TestArgs),
    /// Gate a prompt delivered by the host as a hook payload on stdin
    Hook(HookArgs),
    /// Run a case file against the rule
    Cases(CasesArgs),
    /// Show the resolved rule
    Show(ShowArgs),
}

#[derive(clap::Args)]
pub struct TestArgs {
    /// Prompt to test (read from stdin when omitted)
    #[arg(value_name = "PROMPT")]
    pub prompt: Option<String>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(clap::Args)]
pub struct HookArgs {
    /// Exit with status 1 when the prompt does not match
    #[arg(long)]
    pub exit_code: bool,
}

#[derive(clap::Args)]
pub struct CasesArgs {
    /// Case file (TOML, [[case]] tables)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(clap::Args)]
pub struct ShowArgs {
    /// Output format (json prints a hooks file registering the rule)
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Command written into the generated hooks file
    #[arg(long, default_value = "skillgate hook")]
    pub command: String,
}

#[derive(Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
