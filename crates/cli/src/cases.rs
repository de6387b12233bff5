// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Case tables for tuning a rule.
//!
//! A case file lists prompts with the expected outcome:
//!
//! ```toml
//! [[case]]
//! input = "How to fix E0382 error"
//! matches = true
//! text = "E0382"
//! ```

use std::io;
use std::path::Path;

use serde::Deserialize;
use termcolor::{ColorSpec, WriteColor};

use crate::color::scheme;
use crate::error::{Error, Result};
use crate::matcher::{MatchResult, Matcher};

/// One expected outcome.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Case {
    pub input: String,
    pub matches: bool,
    /// Expected matched text; only checked when a match is expected.
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Deserialize)]
struct CaseFile {
    #[serde(default, rename = "case")]
    cases: Vec<Case>,
}

/// A case paired with what the matcher returned.
#[derive(Debug, Clone)]
pub struct CaseResult {
    pub case: Case,
    pub result: MatchResult,
}

impl CaseResult {
    pub fn passed(&self) -> bool {
        if self.result.matched != self.case.matches {
            return false;
        }
        match (&self.case.text, self.case.matches) {
            (Some(expected), true) => self.result.text() == Some(expected.as_str()),
            _ => true,
        }
    }
}

/// Results of a whole case table.
#[derive(Debug, Clone, Default)]
pub struct Summary {
    pub results: Vec<CaseResult>,
}

impl Summary {
    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.passed()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}

/// Parse a case file.
pub fn parse(content: &str, path: &Path) -> Result<Vec<Case>> {
    let file: CaseFile = toml::from_str(content).map_err(|e| Error::config(path, e))?;
    Ok(file.cases)
}

/// Load a case file.
pub fn load(path: &Path) -> Result<Vec<Case>> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse(&content, path)
}

/// Run every case against the matcher.
pub fn run(matcher: &Matcher, cases: Vec<Case>) -> Summary {
    let results = cases
        .into_iter()
        .map(|case| {
            let result = matcher.test(&case.input);
            tracing::trace!("case {:?} -> {:?}", case.input, result.text());
            CaseResult { case, result }
        })
        .collect();
    Summary { results }
}

/// Write one line per case plus a summary.
pub fn write_report<W: WriteColor>(out: &mut W, summary: &Summary) -> io::Result<()> {
    for r in &summary.results {
        let passed = r.passed();
        write_status(out, passed)?;
        write!(out, ": '{}' -> ", r.case.input)?;

        match (r.result.text(), passed) {
            (Some(text), true) => writeln!(out, "matched '{}'", text)?,
            (None, true) => writeln!(out, "no match (expected)")?,
            (Some(text), false) if !r.case.matches => {
                writeln!(out, "matched '{}' (should NOT match)", text)?
            }
            (Some(text), false) => writeln!(
                out,
                "matched '{}' (expected '{}')",
                text,
                r.case.text.as_deref().unwrap_or_default()
            )?,
            (None, false) => match &r.case.text {
                Some(expected) => writeln!(out, "no match (should match '{}')", expected)?,
                None => writeln!(out, "no match (should match)")?,
            },
        }
    }

    writeln!(out)?;
    out.set_color(&scheme::heading())?;
    writeln!(out, "=== Summary ===")?;
    out.reset()?;
    writeln!(out, "Passed: {}/{}", summary.passed(), summary.total())?;
    writeln!(out, "Failed: {}/{}", summary.failed(), summary.total())?;
    Ok(())
}

fn write_status<W: WriteColor>(out: &mut W, passed: bool) -> io::Result<()> {
    let (spec, label): (ColorSpec, &str) = if passed {
        (scheme::pass(), "PASS")
    } else {
        (scheme::fail(), "FAIL")
    };
    out.set_color(&spec)?;
    write!(out, "{}", label)?;
    out.reset()
}

#[cfg(test)]
#[path = "cases_tests.rs"]
mod tests;
