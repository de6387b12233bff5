// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Splitting an alternation string into rule alternatives.

use super::Alternative;

/// Parse `lit1|lit2|frag` into alternatives, preserving order.
///
/// Bare flag groups such as `(?i)` keep their regex meaning: they stay in
/// effect for every alternative that follows.
pub(super) fn alternatives(pattern: &str) -> Vec<Alternative> {
    let mut inherited = String::new();
    let mut out = Vec::new();

    for part in split_alternation(pattern) {
        out.push(classify(part, &inherited));
        for flags in bare_flag_groups(part) {
            inherited.push_str(flags);
        }
    }

    out
}

/// True if `fragment`, written flat into an alternation, parses back to
/// the same pattern alternative.
pub(super) fn reparses_as_itself(fragment: &str) -> bool {
    split_alternation(fragment).len() == 1
        && bare_flag_groups(fragment).is_empty()
        && classify(fragment, "") == Alternative::pattern(fragment)
}

fn classify(part: &str, inherited: &str) -> Alternative {
    if inherited.is_empty() || inherited == "(?i)" {
        let inherited_ignore_case = !inherited.is_empty();

        if let Some(text) = parse_literal(part) {
            return Alternative::Literal {
                literal: text,
                ignore_case: inherited_ignore_case,
            };
        }
        if let Some(text) = case_insensitive_literal(part) {
            return Alternative::literal_ignore_case(text);
        }
        if !inherited_ignore_case && let Some(inner) = outer_group(part) {
            return Alternative::pattern(inner);
        }
    }

    Alternative::pattern(format!("{}{}", inherited, part))
}

/// Check if pattern is a plain literal (no regex metacharacters).
fn is_literal(pattern: &str) -> bool {
    !pattern.chars().any(is_meta)
}

fn is_meta(c: char) -> bool {
    matches!(
        c,
        '\\' | '.' | '*' | '+' | '?' | '(' | ')' | '[' | ']' | '{' | '}' | '^' | '$' | '|'
    )
}

/// Decode a literal, allowing escaped punctuation such as `\.` or `\&`.
///
/// Returns None for empty input or anything with live metacharacters.
fn parse_literal(part: &str) -> Option<String> {
    if part.is_empty() {
        return None;
    }
    if is_literal(part) {
        return Some(part.to_string());
    }

    let mut text = String::with_capacity(part.len());
    let mut chars = part.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(escaped) if escaped.is_ascii_punctuation() => text.push(escaped),
                _ => return None,
            },
            c if is_meta(c) => return None,
            c => text.push(c),
        }
    }
    Some(text)
}

/// `(?i:lit)` or `(?i)lit`.
fn case_insensitive_literal(part: &str) -> Option<String> {
    if let Some(rest) = part.strip_prefix("(?i)") {
        return parse_literal(rest);
    }
    if part.starts_with("(?i:") && closes_at_end(part) {
        return parse_literal(&part[4..part.len() - 1]);
    }
    None
}

/// Inner text of a part wrapped whole in `(?:...)`.
fn outer_group(part: &str) -> Option<&str> {
    if part.starts_with("(?:") && closes_at_end(part) {
        Some(&part[3..part.len() - 1])
    } else {
        None
    }
}

/// True if the group opened by the first byte closes on the last byte.
fn closes_at_end(part: &str) -> bool {
    let mut first_close = None;
    walk(part, |i, b, depth| {
        if b == b')' && depth == 0 && first_close.is_none() {
            first_close = Some(i);
        }
    });
    first_close == Some(part.len() - 1)
}

/// Split on `|` at group depth 0, outside character classes and escapes.
pub(super) fn split_alternation(pattern: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    walk(pattern, |i, b, depth| {
        if b == b'|' && depth == 0 {
            parts.push(&pattern[start..i]);
            start = i + 1;
        }
    });
    parts.push(&pattern[start..]);
    parts
}

/// Bare flag groups like `(?i)` or `(?-u)` at group depth 0.
pub(super) fn bare_flag_groups(part: &str) -> Vec<&str> {
    let bytes = part.as_bytes();
    let mut groups = Vec::new();
    walk(part, |i, b, depth| {
        if b != b'(' || depth != 0 || bytes.get(i + 1) != Some(&b'?') {
            return;
        }
        let flags_start = i + 2;
        let flags_len = bytes[flags_start..]
            .iter()
            .take_while(|c| c.is_ascii_alphabetic() || **c == b'-')
            .count();
        let close = flags_start + flags_len;
        if flags_len > 0 && bytes.get(close) == Some(&b')') {
            groups.push(&part[i..=close]);
        }
    });
    groups
}

/// True if a bare flag group at depth 0 turns on `x` (verbose mode).
pub(super) fn enables_verbose(fragment: &str) -> bool {
    bare_flag_groups(fragment).iter().any(|group| {
        let flags = &group[2..group.len() - 1];
        flags.split('-').next().is_some_and(|on| on.contains('x'))
    })
}

/// Visit structural bytes (`(`, `)`, `|`) outside escapes and classes.
///
/// `(` is reported with the depth it opens at, `)` with the depth it
/// returns to, and `|` with the current depth.
fn walk(pattern: &str, mut visit: impl FnMut(usize, u8, usize)) {
    let bytes = pattern.as_bytes();
    let mut depth = 0usize;
    let mut class_depth = 0usize;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\\' => {
                i += 2;
                continue;
            }
            b'[' => {
                class_depth += 1;
                i += 1;
                // `]` straight after `[` or `[^` is a literal member.
                if bytes.get(i) == Some(&b'^') {
                    i += 1;
                }
                if bytes.get(i) == Some(&b']') {
                    i += 1;
                }
                continue;
            }
            b']' if class_depth > 0 => class_depth -= 1,
            _ if class_depth > 0 => {}
            b'(' => {
                visit(i, b'(', depth);
                depth += 1;
            }
            b')' => {
                depth = depth.saturating_sub(1);
                visit(i, b')', depth);
            }
            b'|' => visit(i, b'|', depth),
            _ => {}
        }
        i += 1;
    }
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
