// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern engines for trigger rules.
//!
//! Each rule compiles to the cheapest engine that keeps leftmost-first
//! semantics:
//! - Single literal: memchr::memmem
//! - Multiple literals: aho-corasick (leftmost-first)
//! - Anything else: regex crate
//!
//! All three search in linear time.

pub mod engine;

pub use engine::{CompiledPattern, PatternError, PatternMatch};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
