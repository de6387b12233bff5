// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use termcolor::Color;

// NOTE: NO_COLOR and COLOR are covered by tests/specs.rs because env var
// manipulation is not safe in parallel unit tests.

#[test]
fn no_color_flag_wins() {
    assert_eq!(choice(true, true), ColorChoice::Never);
}

#[test]
fn color_flag_forces_color() {
    assert_eq!(choice(true, false), ColorChoice::Always);
}

#[test]
fn scheme_heading_is_bold() {
    assert!(scheme::heading().bold());
}

#[test]
fn scheme_fail_is_red_bold() {
    let spec = scheme::fail();
    assert_eq!(spec.fg(), Some(&Color::Red));
    assert!(spec.bold());
}

#[test]
fn scheme_pass_is_green_bold() {
    let spec = scheme::pass();
    assert_eq!(spec.fg(), Some(&Color::Green));
    assert!(spec.bold());
}

#[test]
fn scheme_matched_is_cyan() {
    assert_eq!(scheme::matched().fg(), Some(&Color::Cyan));
}

#[test]
fn scheme_miss_is_yellow() {
    assert_eq!(scheme::miss().fg(), Some(&Color::Yellow));
}
