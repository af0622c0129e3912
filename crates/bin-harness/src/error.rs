// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Harness error taxonomy.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while running conformance scenarios.
///
/// None of these are retried. Every variant is a scenario failure.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("Failed to start {}: {source}", .program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} exited with non-zero status (code: {code:?}): {stderr}", .program.display())]
    ProcessExecution {
        program: PathBuf,
        code: Option<i32>,
        stderr: String,
    },

    #[error("{} did not finish within {timeout_ms}ms", .program.display())]
    Timeout { program: PathBuf, timeout_ms: u64 },

    #[error("Fixture not found at {}: {source}", .path.display())]
    FixtureNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read output file {}: {source}", .path.display())]
    OutputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to remove output file {}: {source}", .path.display())]
    FilesystemCleanup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Scenario '{scenario}' output differs from fixture:\n{diff}")]
    AssertionMismatch {
        scenario: String,
        actual: String,
        expected: String,
        diff: String,
    },

    #[error("Failed to load scenario table {}: {message}", .path.display())]
    TableLoad { path: PathBuf, message: String },

    #[error("Invalid scenario table: {0}")]
    Validation(String),
}

impl HarnessError {
    /// Short kind label used in reports.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Spawn { .. } | Self::ProcessExecution { .. } | Self::Timeout { .. } => {
                "process"
            }
            Self::FixtureNotFound { .. } => "fixture",
            Self::OutputRead { .. } => "output",
            Self::FilesystemCleanup { .. } => "cleanup",
            Self::AssertionMismatch { .. } => "mismatch",
            Self::TableLoad { .. } | Self::Validation(_) => "table",
        }
    }
}
