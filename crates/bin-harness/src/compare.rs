// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Whitespace-relaxed comparison and mismatch diagnostics.

use similar::TextDiff;

/// Compare two texts treating every run of whitespace as one separator.
///
/// Leading and trailing whitespace is ignored. Non-whitespace tokens must
/// appear in the same order, so `"ab"` never equals `"a b"`.
pub fn equals_relaxed(actual: &str, expected: &str) -> bool {
    actual.split_whitespace().eq(expected.split_whitespace())
}

/// Render a unified line diff of expected against actual.
pub fn render_diff(actual: &str, expected: &str) -> String {
    TextDiff::from_lines(expected, actual)
        .unified_diff()
        .context_radius(3)
        .header("expected", "actual")
        .to_string()
}

#[cfg(test)]
#[path = "compare_tests.rs"]
mod tests;
