// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Host hooks file and hook payloads.
//!
//! The host registers hooks per event:
//!
//! ```json
//! { "hooks": { "UserPromptSubmit": [ { "matcher": "E0\\d{3}|cargo", "hooks": [...] } ] } }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::rule::Rule;

/// Event the prompt gate is registered under.
pub const DEFAULT_EVENT: &str = "UserPromptSubmit";

/// Hooks file, keyed by event name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HooksFile {
    #[serde(default)]
    pub hooks: BTreeMap<String, Vec<HookEntry>>,
}

/// One registration under an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matcher: Option<String>,

    #[serde(default)]
    pub hooks: Vec<HookCommand>,
}

/// Command the host runs when the matcher fires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookCommand {
    #[serde(rename = "type")]
    pub kind: String,

    pub command: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
}

/// Payload the host writes to a hook's stdin.
#[derive(Debug, Clone, Deserialize)]
pub struct HookPayload {
    pub prompt: String,

    #[serde(default)]
    pub hook_event_name: Option<String>,

    #[serde(default)]
    pub session_id: Option<String>,
}

impl HooksFile {
    /// Matcher of the first entry registered for `event`.
    ///
    /// Later entries are not consulted, even when the first has no matcher.
    pub fn matcher(&self, event: &str) -> Option<&str> {
        self.hooks.get(event)?.first()?.matcher.as_deref()
    }

    /// Hooks file registering `rule` under `event`.
    pub fn for_rule(rule: &Rule, event: &str, command: &str) -> Self {
        let entry = HookEntry {
            matcher: Some(rule.to_pattern()),
            hooks: vec![HookCommand {
                kind: "command".to_string(),
                command: command.to_string(),
                timeout: None,
            }],
        };
        Self {
            hooks: BTreeMap::from([(event.to_string(), vec![entry])]),
        }
    }
}

/// Parse a hooks file.
pub fn parse(content: &str, path: &Path) -> Result<HooksFile> {
    serde_json::from_str(content).map_err(|e| Error::config(path, e))
}

/// Load the matcher string for `event` from a hooks file.
pub fn load_matcher(path: &Path, event: &str) -> Result<String> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let file = parse(&content, path)?;
    file.matcher(event)
        .map(str::to_string)
        .ok_or_else(|| Error::config(path, format!("no matcher registered for {}", event)))
}

/// Parse the payload the host sends on stdin.
pub fn parse_payload(content: &str) -> Result<HookPayload> {
    serde_json::from_str(content)
        .map_err(|e| Error::Argument(format!("invalid hook payload: {}", e)))
}

#[cfg(test)]
#[path = "hooks_tests.rs"]
mod tests;
