// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The prompt matcher.
//!
//! Decides whether a prompt is on-topic for the skill and reports the first
//! substring that made it so.

use serde::Serialize;

use crate::pattern::{CompiledPattern, PatternError};
use crate::rule::Rule;

/// Byte range of a match within the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// Outcome of testing one prompt.
///
/// `span` and `text` are `Some` exactly when `matched` is true, and
/// `text` is always the prompt slice covered by `span`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub matched: bool,
    pub span: Option<Span>,
    pub text: Option<String>,
}

impl MatchResult {
    pub fn no_match() -> Self {
        Self::default()
    }

    fn found(content: &str, start: usize, end: usize) -> Self {
        Self {
            matched: true,
            span: Some(Span { start, end }),
            text: Some(content[start..end].to_string()),
        }
    }

    /// Matched text, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

/// Compiled, immutable prompt matcher.
///
/// Safe to share across threads: nothing is mutated after construction.
#[derive(Debug)]
pub struct Matcher {
    rule: Rule,
    pattern: CompiledPattern,
}

impl Matcher {
    /// Compile a validated rule.
    pub fn new(rule: Rule) -> Result<Self, PatternError> {
        let pattern = CompiledPattern::compile(rule.alternatives())?;
        tracing::debug!(
            "compiled {} alternatives into {} matcher",
            rule.len(),
            pattern.tier()
        );
        Ok(Self { rule, pattern })
    }

    /// Matcher for the built-in rule.
    pub fn builtin() -> Result<Self, PatternError> {
        Self::new(Rule::builtin())
    }

    /// Test a prompt. Never fails; any string is valid input.
    pub fn test(&self, text: &str) -> MatchResult {
        match self.pattern.find(text) {
            Some(m) => MatchResult::found(text, m.start, m.end),
            None => MatchResult::no_match(),
        }
    }

    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    /// Engine the rule compiled to.
    pub fn tier(&self) -> &'static str {
        self.pattern.tier()
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
