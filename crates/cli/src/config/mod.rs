// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and rule resolution.
//!
//! A rule comes from one of two file formats:
//! - `skillgate.toml`, with version validation and unknown key warnings
//! - a host hooks file (JSON) whose matcher holds one alternation string

pub mod hooks;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::discovery;
use crate::error::{Error, Result};
use crate::rule::{Alternative, Rule};

pub use hooks::{DEFAULT_EVENT, HookCommand, HookEntry, HookPayload, HooksFile};

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "rule"];

/// Known keys in the `[rule]` table.
const KNOWN_RULE_KEYS: &[&str] = &["pattern", "alternatives"];

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    #[serde(default)]
    rule: Option<FlexibleRule>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

#[derive(Deserialize)]
struct FlexibleRule {
    #[serde(default)]
    pattern: Option<String>,

    #[serde(default)]
    alternatives: Option<Vec<Alternative>>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Default)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Rule definition.
    pub rule: RuleConfig,
}

/// The `[rule]` table: one alternation string or an explicit list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RuleConfig {
    /// No rule configured; the built-in rule applies.
    #[default]
    Builtin,
    /// Single alternation string.
    Pattern(String),
    /// Explicit ordered alternatives.
    Alternatives(Vec<Alternative>),
}

impl RuleConfig {
    /// Validate into a rule.
    pub fn to_rule(&self) -> std::result::Result<Rule, crate::rule::RuleError> {
        match self {
            RuleConfig::Builtin => Ok(Rule::builtin()),
            RuleConfig::Pattern(pattern) => Rule::parse(pattern),
            RuleConfig::Alternatives(alternatives) => Rule::new(alternatives.clone()),
        }
    }
}

/// Where a rule is loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleSource {
    /// `skillgate.toml`.
    Toml(PathBuf),
    /// Host hooks file, reading the matcher of `event`.
    Hooks { path: PathBuf, event: String },
    /// Built-in rule.
    Builtin,
}

impl RuleSource {
    /// Pick the format from the file extension.
    pub fn from_path(path: &Path, event: &str) -> Self {
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            RuleSource::Hooks {
                path: path.to_path_buf(),
                event: event.to_string(),
            }
        } else {
            RuleSource::Toml(path.to_path_buf())
        }
    }
}

/// Resolve the rule source from an explicit path or by discovery.
pub fn resolve_source(explicit: Option<&Path>, cwd: &Path, event: &str) -> Result<RuleSource> {
    match discovery::resolve_config(explicit, cwd)? {
        Some(path) => Ok(RuleSource::from_path(&path, event)),
        None => Ok(RuleSource::Builtin),
    }
}

/// Load and validate the rule named by `source`.
///
/// Fails when the configured pattern is malformed; callers must not fall
/// back to a default in that case.
pub fn load_rule(source: &RuleSource) -> Result<Rule> {
    match source {
        RuleSource::Builtin => {
            tracing::debug!("no config found, using built-in rule");
            Ok(Rule::builtin())
        }
        RuleSource::Toml(path) => {
            tracing::debug!("loading rule from {}", path.display());
            let config = load(path)?;
            config.rule.to_rule().map_err(|e| Error::config(path, e))
        }
        RuleSource::Hooks { path, event } => {
            tracing::debug!("loading {} matcher from {}", event, path.display());
            let matcher = hooks::load_matcher(path, event)?;
            Rule::parse(&matcher).map_err(|e| Error::config(path, e))
        }
    }
}

/// Load and validate config from a file path.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse(&content, path)
}

/// Parse config, warning on unknown keys.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let version_check: VersionOnly =
        toml::from_str(content).map_err(|e| Error::config(path, e))?;

    let version = version_check
        .version
        .ok_or_else(|| Error::config(path, "missing required field: version"))?;

    if version != SUPPORTED_VERSION {
        return Err(Error::config(
            path,
            format!(
                "unsupported config version {} (supported: {})\n  Upgrade skillgate to use this config.",
                version, SUPPORTED_VERSION
            ),
        ));
    }

    let flexible: FlexibleConfig = toml::from_str(content).map_err(|e| Error::config(path, e))?;

    for key in flexible.unknown.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            warn_unknown_key(path, key);
        }
    }

    let rule = match flexible.rule {
        None => RuleConfig::Builtin,
        Some(rule) => {
            for key in rule.unknown.keys() {
                if !KNOWN_RULE_KEYS.contains(&key.as_str()) {
                    warn_unknown_key(path, &format!("rule.{}", key));
                }
            }
            match (rule.pattern, rule.alternatives) {
                (Some(pattern), None) => RuleConfig::Pattern(pattern),
                (None, Some(alternatives)) => RuleConfig::Alternatives(alternatives),
                (Some(_), Some(_)) => {
                    return Err(Error::config(
                        path,
                        "[rule] sets both `pattern` and `alternatives`; pick one",
                    ));
                }
                (None, None) => {
                    return Err(Error::config(
                        path,
                        "[rule] needs either `pattern` or `alternatives`",
                    ));
                }
            }
        }
    };

    Ok(Config { version, rule })
}

fn warn_unknown_key(path: &Path, key: &str) {
    tracing::warn!("{}: unrecognized field `{}`", path.display(), key);
    eprintln!(
        "skillgate: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
