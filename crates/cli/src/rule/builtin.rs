// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Default trigger rule for the Rust help skill.
//!
//! Favors recall: generic help phrases also match prompts outside the
//! language.

use super::Alternative;

/// Compiler diagnostics and the phrases rustc prints alongside them.
const DIAGNOSTICS: &[&str] = &[
    "value moved",
    "borrowed value",
    "cannot borrow",
    "cannot move",
    "does not live long enough",
    "mismatched types",
    "panicked",
];

/// Ownership, borrowing and lifetimes.
const OWNERSHIP: &[&str] = &[
    "ownership", "borrow", "lifetime", "move", "clone", "Copy", "Drop", "&mut", "'static",
];

/// Concurrency primitives and async runtimes.
const CONCURRENCY: &[&str] = &[
    "async", "await", "tokio", "thread", "Mutex", "RwLock", "Arc<", "Rc<", "RefCell", "Send",
    "Sync", "deadlock", "channel",
];

/// Toolchain and package manager.
const TOOLCHAIN: &[&str] = &[
    "cargo",
    "rustc",
    "rustup",
    "clippy",
    "rustfmt",
    "crate",
    "Cargo.toml",
];

/// Language constructs and std types.
const LANGUAGE: &[&str] = &[
    "trait", "impl", "generic", "closure", "macro", "unsafe", "struct", "enum", "type", "Option<",
    "Result<", "Box<", "Vec<", "String", "&str", "iterator",
];

/// Domain scenarios the skill carries guidance for.
const DOMAINS: &[&str] = &["payment", "trading", "precision", "decimal"];

/// Help-seeking phrasing. Catches questions whose domain is only implied.
const HELP_PHRASES: &[&str] = &[
    "how to",
    "how do",
    "why",
    "help me",
    "explain",
    "what is",
    "best practice",
];

pub(super) fn alternatives() -> Vec<Alternative> {
    let mut alternatives = vec![Alternative::pattern(r"E0\d{3}")];
    alternatives.extend(DIAGNOSTICS.iter().copied().map(Alternative::literal));
    alternatives.extend(OWNERSHIP.iter().copied().map(Alternative::literal));
    alternatives.extend(CONCURRENCY.iter().copied().map(Alternative::literal));
    alternatives.extend(TOOLCHAIN.iter().copied().map(Alternative::literal));
    alternatives.push(Alternative::literal_ignore_case("rust"));
    alternatives.extend(LANGUAGE.iter().copied().map(Alternative::literal));
    alternatives.extend(DOMAINS.iter().copied().map(Alternative::literal));
    alternatives.extend(HELP_PHRASES.iter().copied().map(Alternative::literal));
    alternatives
}
