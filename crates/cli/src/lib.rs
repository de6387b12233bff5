pub mod cases;
pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod error;
pub mod matcher;
pub mod pattern;
pub mod rule;

pub use cli::{CasesArgs, Cli, Command, HookArgs, OutputFormat, ShowArgs, TestArgs};
pub use config::{HookPayload, HooksFile, RuleSource};
pub use error::{Error, ExitCode, Result};
pub use matcher::{MatchResult, Matcher, Span};
pub use rule::{Alternative, Rule, RuleError};

#[cfg(test)]
pub mod test_utils;
