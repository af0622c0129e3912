// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scenario runner.
//!
//! Runs each scenario of a table strictly in order: invoke the binary, read
//! its output (stdout or a produced file), remove any produced file, load
//! the fixture, normalize line endings on both sides and compare with
//! whitespace relaxed. A scenario's process and cleanup finish before the
//! next one starts, since scenarios may share an output path.

use crate::compare::{equals_relaxed, render_diff};
use crate::config::{FailureMode, HarnessConfig};
use crate::error::HarnessError;
use crate::fixture::load_fixture;
use crate::invoke::Invoker;
use crate::normalize::normalize_crlf;
use crate::scenario::{Scenario, ScenarioTable};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Result of one scenario.
#[derive(Debug)]
pub struct ScenarioOutcome {
    pub name: String,
    pub elapsed_ms: u64,
    pub result: Result<(), HarnessError>,
}

impl ScenarioOutcome {
    pub fn passed(&self) -> bool {
        self.result.is_ok()
    }
}

/// Outcomes of a table run, in table order.
#[derive(Debug, Default)]
pub struct RunReport {
    pub outcomes: Vec<ScenarioOutcome>,
    /// Scenarios not run because an earlier one failed in fail-fast mode
    pub skipped: usize,
}

impl RunReport {
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    /// Failing outcomes with their errors.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &HarnessError)> {
        self.outcomes.iter().filter_map(|o| match &o.result {
            Ok(()) => None,
            Err(e) => Some((o.name.as_str(), e)),
        })
    }

    /// First failure, if any.
    pub fn into_result(self) -> Result<(), HarnessError> {
        match self.outcomes.into_iter().find_map(|o| o.result.err()) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Runs scenarios against one binary under test.
///
/// Scenario paths resolve against the invoker's working directory, so the
/// files the binary writes are the files the runner reads.
#[derive(Clone, Debug)]
pub struct Runner {
    invoker: Invoker,
    failure_mode: FailureMode,
}

impl Runner {
    pub fn new(invoker: Invoker) -> Self {
        Self {
            invoker,
            failure_mode: FailureMode::FailFast,
        }
    }

    pub fn from_config(config: &HarnessConfig) -> Self {
        Self::new(config.invoker()).with_failure_mode(config.failure_mode)
    }

    /// Directory scenario paths resolve against.
    pub fn root(&self) -> &Path {
        &self.invoker.cwd
    }

    /// Set failure mode
    pub fn with_failure_mode(mut self, mode: FailureMode) -> Self {
        self.failure_mode = mode;
        self
    }

    /// Run every scenario, stopping at the first failure.
    pub async fn run_all(&self, table: &ScenarioTable) -> Result<(), HarnessError> {
        self.run_with(table, FailureMode::FailFast)
            .await
            .into_result()
    }

    /// Run the table, honoring the configured failure mode.
    pub async fn run(&self, table: &ScenarioTable) -> RunReport {
        self.run_with(table, self.failure_mode).await
    }

    async fn run_with(&self, table: &ScenarioTable, mode: FailureMode) -> RunReport {
        let mut report = RunReport::default();

        for (idx, scenario) in table.iter().enumerate() {
            let start = Instant::now();
            let result = self.run_scenario(scenario).await;
            let elapsed_ms = start.elapsed().as_millis() as u64;

            let failed = result.is_err();
            report.outcomes.push(ScenarioOutcome {
                name: scenario.name.clone(),
                elapsed_ms,
                result,
            });

            if failed && mode == FailureMode::FailFast {
                report.skipped = table.len() - idx - 1;
                break;
            }
        }

        report
    }

    /// Run a single scenario.
    pub async fn run_scenario(&self, scenario: &Scenario) -> Result<(), HarnessError> {
        tracing::info!(scenario = %scenario.name, args = ?scenario.args, "running scenario");

        // Armed before the invocation so a failing run still cleans up. A
        // file left by an earlier run must not stand in for this one's output.
        let artifact = match scenario.output.file() {
            Some(path) => Some(OutputArtifact::fresh(self.resolve(path)).await?),
            None => None,
        };

        let stdout = self.invoker.invoke(&scenario.args).await?;
        let actual = match artifact {
            Some(artifact) => artifact.take().await?,
            None => stdout,
        };

        let expected = load_fixture(&self.resolve(&scenario.expected)).await?;

        let actual = normalize_crlf(&actual);
        let expected = normalize_crlf(&expected);
        if !equals_relaxed(&actual, &expected) {
            tracing::warn!(scenario = %scenario.name, "output differs from fixture");
            return Err(HarnessError::AssertionMismatch {
                scenario: scenario.name.clone(),
                diff: render_diff(&actual, &expected),
                actual: actual.into_owned(),
                expected: expected.into_owned(),
            });
        }

        tracing::info!(scenario = %scenario.name, "scenario passed");
        Ok(())
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.root().join(path)
    }
}

/// A file the binary under test is expected to produce.
///
/// [`OutputArtifact::take`] reads and removes it, reporting removal errors.
/// If the artifact is dropped without being taken, removal is attempted
/// anyway and failures are logged.
#[derive(Debug)]
pub struct OutputArtifact {
    path: PathBuf,
    removed: bool,
}

impl OutputArtifact {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            removed: false,
        }
    }

    /// Guard `path`, first removing any file already there.
    pub async fn fresh(path: impl Into<PathBuf>) -> Result<Self, HarnessError> {
        let path = path.into();
        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "removed stale output file")
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(source) => return Err(HarnessError::FilesystemCleanup { path, source }),
        }
        Ok(Self::new(path))
    }

    /// Read the file contents, then delete it.
    pub async fn take(mut self) -> Result<String, HarnessError> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|source| {
            HarnessError::OutputRead {
                path: self.path.clone(),
                source,
            }
        })?;

        self.removed = true;
        tokio::fs::remove_file(&self.path)
            .await
            .map_err(|source| HarnessError::FilesystemCleanup {
                path: self.path.clone(),
                source,
            })?;

        Ok(content)
    }
}

impl Drop for OutputArtifact {
    fn drop(&mut self) {
        if self.removed {
            return;
        }
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), "removed leftover output file")
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "failed to remove output file"
                )
            }
        }
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
