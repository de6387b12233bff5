// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Trigger rules.
//!
//! A rule is an ordered list of alternatives. Order matters: when two
//! alternatives match at the same position, the one listed first wins.

mod builtin;
mod parse;

use regex::Regex;
use regex_syntax::Parser;
use serde::{Deserialize, Serialize};

/// One alternative of a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Alternative {
    /// Literal phrase, matched verbatim.
    Literal {
        literal: String,
        #[serde(default, skip_serializing_if = "std::ops::Not::not")]
        ignore_case: bool,
    },
    /// Regular expression fragment.
    Pattern { pattern: String },
}

impl Alternative {
    /// Case-sensitive literal.
    pub fn literal(text: impl Into<String>) -> Self {
        Alternative::Literal {
            literal: text.into(),
            ignore_case: false,
        }
    }

    /// Case-insensitive literal.
    pub fn literal_ignore_case(text: impl Into<String>) -> Self {
        Alternative::Literal {
            literal: text.into(),
            ignore_case: true,
        }
    }

    /// Regular expression fragment.
    pub fn pattern(fragment: impl Into<String>) -> Self {
        Alternative::Pattern {
            pattern: fragment.into(),
        }
    }

    /// Self-contained regex group for this alternative.
    pub fn to_group(&self) -> String {
        match self {
            Alternative::Literal {
                literal,
                ignore_case: false,
            } => format!("(?:{})", regex::escape(literal)),
            Alternative::Literal {
                literal,
                ignore_case: true,
            } => format!("(?i:{})", regex::escape(literal)),
            Alternative::Pattern { pattern } => format!("(?:{})", pattern),
        }
    }

    /// Source form used inside a flat alternation string.
    ///
    /// Fragments are grouped only when they would otherwise parse back
    /// differently.
    pub fn to_source(&self) -> String {
        match self {
            Alternative::Literal {
                literal,
                ignore_case: false,
            } => regex::escape(literal),
            Alternative::Literal { .. } => self.to_group(),
            Alternative::Pattern { pattern } => {
                if parse::reparses_as_itself(pattern) {
                    pattern.clone()
                } else {
                    self.to_group()
                }
            }
        }
    }
}

/// Error raised while validating a rule.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("rule has no alternatives")]
    Empty,

    #[error("alternative {}: literal is empty", .index + 1)]
    EmptyLiteral { index: usize },

    #[error("alternative {}: invalid pattern `{fragment}`: {source}", .index + 1)]
    InvalidFragment {
        index: usize,
        fragment: String,
        #[source]
        source: regex::Error,
    },

    #[error("alternative {}: pattern `{fragment}` can match the empty string", .index + 1)]
    MatchesEmpty { index: usize, fragment: String },

    #[error("alternative {}: pattern `{fragment}` turns on verbose mode `(?x)` outside a group", .index + 1)]
    VerboseMode { index: usize, fragment: String },
}

/// Validated, immutable trigger rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    alternatives: Vec<Alternative>,
}

impl Rule {
    /// Validate alternatives and build a rule.
    pub fn new(alternatives: Vec<Alternative>) -> Result<Self, RuleError> {
        if alternatives.is_empty() {
            return Err(RuleError::Empty);
        }

        for (index, alternative) in alternatives.iter().enumerate() {
            validate(index, alternative)?;
        }

        Ok(Self { alternatives })
    }

    /// Parse a single alternation string such as `E0\d{3}|cargo|how to`.
    pub fn parse(pattern: &str) -> Result<Self, RuleError> {
        let alternatives = parse::alternatives(pattern);
        tracing::trace!("parsed {} alternatives from pattern", alternatives.len());
        Self::new(alternatives)
    }

    /// Default rule for the language help skill.
    pub fn builtin() -> Self {
        Self {
            alternatives: builtin::alternatives(),
        }
    }

    pub fn alternatives(&self) -> &[Alternative] {
        &self.alternatives
    }

    pub fn len(&self) -> usize {
        self.alternatives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }

    /// Render as one alternation string, the form hook files store.
    pub fn to_pattern(&self) -> String {
        self.alternatives
            .iter()
            .map(Alternative::to_source)
            .collect::<Vec<_>>()
            .join("|")
    }
}

fn validate(index: usize, alternative: &Alternative) -> Result<(), RuleError> {
    match alternative {
        Alternative::Literal { literal, .. } => {
            if literal.is_empty() {
                return Err(RuleError::EmptyLiteral { index });
            }
        }
        Alternative::Pattern { pattern } => {
            Regex::new(pattern).map_err(|source| RuleError::InvalidFragment {
                index,
                fragment: pattern.clone(),
                source,
            })?;
            // A trailing `#` comment would swallow the group closer once the
            // fragment is joined with the others.
            if parse::enables_verbose(pattern) {
                return Err(RuleError::VerboseMode {
                    index,
                    fragment: pattern.clone(),
                });
            }
            if can_match_empty(pattern) {
                return Err(RuleError::MatchesEmpty {
                    index,
                    fragment: pattern.clone(),
                });
            }
        }
    }
    Ok(())
}

/// True if the shortest possible match is empty.
fn can_match_empty(pattern: &str) -> bool {
    Parser::new()
        .parse(pattern)
        .is_ok_and(|hir| hir.properties().minimum_len() == Some(0))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
