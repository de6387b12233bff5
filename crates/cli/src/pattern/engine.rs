// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiled pattern engines with automatic tier selection.

use aho_corasick::{AhoCorasick, MatchKind};
use memchr::memmem::Finder;
use regex::Regex;

use crate::rule::Alternative;

/// A compiled rule, specialized for its structure.
#[derive(Debug)]
pub enum CompiledPattern {
    /// Single case-sensitive literal (fastest).
    Literal(LiteralMatcher),
    /// Several case-sensitive literals (Aho-Corasick).
    MultiLiteral(MultiLiteralMatcher),
    /// Full regex (case-insensitive literals, fragments).
    Regex(RegexMatcher),
}

/// Matcher for one literal using SIMD-optimized memchr.
#[derive(Debug)]
pub struct LiteralMatcher {
    len: usize,
    finder: Finder<'static>,
}

/// Matcher for several literals using a leftmost-first automaton.
#[derive(Debug)]
pub struct MultiLiteralMatcher {
    automaton: AhoCorasick,
}

/// Matcher for a combined regex.
#[derive(Debug)]
pub struct RegexMatcher {
    regex: Regex,
}

/// Byte range of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternMatch {
    /// Byte offset where match starts.
    pub start: usize,
    /// Byte offset where match ends.
    pub end: usize,
}

/// Error during pattern compilation.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("invalid regex pattern: {0}")]
    InvalidRegex(#[from] regex::Error),

    #[error("invalid pattern: {0}")]
    InvalidPattern(String),

    #[error("no alternatives to compile")]
    Empty,
}

impl CompiledPattern {
    /// Compile alternatives into an engine.
    ///
    /// - All plain literals, one of them -> LiteralMatcher
    /// - All plain literals, several -> MultiLiteralMatcher
    /// - Otherwise -> RegexMatcher over the joined alternation
    pub fn compile(alternatives: &[Alternative]) -> Result<Self, PatternError> {
        if alternatives.is_empty() {
            return Err(PatternError::Empty);
        }

        if let Some(literals) = plain_literals(alternatives) {
            if let [single] = literals.as_slice() {
                return Ok(CompiledPattern::Literal(LiteralMatcher::new(single)));
            }
            return Ok(CompiledPattern::MultiLiteral(MultiLiteralMatcher::new(
                &literals,
            )?));
        }

        Ok(CompiledPattern::Regex(RegexMatcher::new(&join_groups(
            alternatives,
        ))?))
    }

    /// Find the leftmost-first match, if any.
    pub fn find(&self, content: &str) -> Option<PatternMatch> {
        match self {
            CompiledPattern::Literal(m) => m.find(content),
            CompiledPattern::MultiLiteral(m) => m.find(content),
            CompiledPattern::Regex(m) => m.find(content),
        }
    }

    /// Short engine name for diagnostics.
    pub fn tier(&self) -> &'static str {
        match self {
            CompiledPattern::Literal(_) => "literal",
            CompiledPattern::MultiLiteral(_) => "multi-literal",
            CompiledPattern::Regex(_) => "regex",
        }
    }
}

/// Literal texts, if every alternative is a case-sensitive literal.
fn plain_literals(alternatives: &[Alternative]) -> Option<Vec<&str>> {
    alternatives
        .iter()
        .map(|alt| match alt {
            Alternative::Literal {
                literal,
                ignore_case: false,
            } => Some(literal.as_str()),
            _ => None,
        })
        .collect()
}

/// Join alternatives into one regex, each isolated in its own group.
pub(crate) fn join_groups(alternatives: &[Alternative]) -> String {
    alternatives
        .iter()
        .map(Alternative::to_group)
        .collect::<Vec<_>>()
        .join("|")
}

impl LiteralMatcher {
    pub fn new(literal: &str) -> Self {
        Self {
            len: literal.len(),
            finder: Finder::new(literal).into_owned(),
        }
    }

    pub fn find(&self, content: &str) -> Option<PatternMatch> {
        self.finder
            .find(content.as_bytes())
            .map(|start| PatternMatch {
                start,
                end: start + self.len,
            })
    }
}

impl MultiLiteralMatcher {
    /// Build a leftmost-first automaton; earlier literals win ties.
    pub fn new(literals: &[&str]) -> Result<Self, PatternError> {
        let automaton = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostFirst)
            .build(literals)
            .map_err(|e| PatternError::InvalidPattern(format!("aho-corasick error: {}", e)))?;
        Ok(Self { automaton })
    }

    pub fn find(&self, content: &str) -> Option<PatternMatch> {
        self.automaton.find(content).map(|m| PatternMatch {
            start: m.start(),
            end: m.end(),
        })
    }
}

impl RegexMatcher {
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        let regex = Regex::new(pattern)?;
        Ok(Self { regex })
    }

    pub fn find(&self, content: &str) -> Option<PatternMatch> {
        self.regex.find(content).map(|m| PatternMatch {
            start: m.start(),
            end: m.end(),
        })
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
