// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Golden fixture loading.

use crate::error::HarnessError;
use std::path::Path;

/// Byte order mark some editors prepend to UTF-8 files.
const BOM: char = '\u{feff}';

/// Read a fixture file as UTF-8 text, dropping a leading byte order mark.
pub async fn load_fixture(path: &Path) -> Result<String, HarnessError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| HarnessError::FixtureNotFound {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(match text.strip_prefix(BOM) {
        Some(rest) => rest.to_string(),
        None => text,
    })
}
