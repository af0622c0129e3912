// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Line-ending normalization.

use std::borrow::Cow;

/// Replace every `\r\n` with `\n`. Lone `\r` and `\n` are left alone.
///
/// Borrows the input when there is nothing to replace.
pub fn normalize_crlf(text: &str) -> Cow<'_, str> {
    if text.contains("\r\n") {
        Cow::Owned(text.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
