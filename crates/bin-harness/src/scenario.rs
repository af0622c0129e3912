// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scenario table types and loading.
//!
//! A table is an ordered list of scenarios. Each one names the arguments
//! passed to the binary under test, where its output lands, and the fixture
//! holding the expected text. Tables are either built in (see
//! [`crate::builtin`]) or loaded from TOML/JSON files:
//!
//! ```toml
//! [[scenarios]]
//! name = "amd-file"
//! args = ["-a", "-f", "TEST_OUTPUT", "spec/artifacts/empty.handlebars"]
//! output = { file = "TEST_OUTPUT" }
//! expected = "spec/expected/empty.amd.js"
//! ```

use crate::error::HarnessError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Where a scenario's actual output is read from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputLocation {
    /// The binary's captured standard output
    #[default]
    Stdout,
    /// A file the binary writes as a side effect, removed after reading
    File(PathBuf),
}

impl OutputLocation {
    /// The output file, if the scenario writes one.
    pub fn file(&self) -> Option<&Path> {
        match self {
            Self::Stdout => None,
            Self::File(path) => Some(path),
        }
    }
}

/// One conformance case.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    /// Name for logging and reports
    pub name: String,

    /// Arguments passed to the binary, in order
    #[serde(default)]
    pub args: Vec<String>,

    /// Where the actual output is read from (default: stdout)
    #[serde(default)]
    pub output: OutputLocation,

    /// Golden fixture holding the expected output
    pub expected: PathBuf,
}

impl Scenario {
    /// Create a scenario reading from stdout.
    pub fn new<I, S>(name: impl Into<String>, args: I, expected: impl Into<PathBuf>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            args: args.into_iter().map(Into::into).collect(),
            output: OutputLocation::Stdout,
            expected: expected.into(),
        }
    }

    /// Read output from `path` instead of stdout.
    pub fn with_output_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = OutputLocation::File(path.into());
        self
    }
}

/// Ordered, immutable set of scenarios.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioTable {
    #[serde(default)]
    scenarios: Vec<Scenario>,
}

impl ScenarioTable {
    /// Build a validated table.
    pub fn new(scenarios: Vec<Scenario>) -> Result<Self, HarnessError> {
        let table = Self { scenarios };
        table.validate()?;
        Ok(table)
    }

    /// Load a table from a TOML or JSON file, chosen by extension.
    pub fn load(path: &Path) -> Result<Self, HarnessError> {
        let load_err = |message: String| HarnessError::TableLoad {
            path: path.to_path_buf(),
            message,
        };

        let content = std::fs::read_to_string(path).map_err(|e| load_err(e.to_string()))?;
        let table: Self = if path.extension().is_some_and(|e| e == "json") {
            serde_json::from_str(&content).map_err(|e| load_err(e.to_string()))?
        } else {
            toml::from_str(&content).map_err(|e| load_err(e.to_string()))?
        };

        table.validate()?;
        Ok(table)
    }

    /// Scenarios in table order.
    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Scenario> {
        self.scenarios.iter()
    }

    fn validate(&self) -> Result<(), HarnessError> {
        let mut seen = HashSet::new();
        for (idx, scenario) in self.scenarios.iter().enumerate() {
            if scenario.name.trim().is_empty() {
                return Err(HarnessError::Validation(format!(
                    "scenario #{} has an empty name",
                    idx + 1
                )));
            }
            if !seen.insert(scenario.name.as_str()) {
                return Err(HarnessError::Validation(format!(
                    "duplicate scenario name '{}'",
                    scenario.name
                )));
            }
            if scenario.expected.as_os_str().is_empty() {
                return Err(HarnessError::Validation(format!(
                    "scenario '{}' has no expected fixture",
                    scenario.name
                )));
            }
            if let Some(file) = scenario.output.file() {
                if file.as_os_str().is_empty() {
                    return Err(HarnessError::Validation(format!(
                        "scenario '{}' has an empty output file path",
                        scenario.name
                    )));
                }
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ScenarioTable {
    type Item = &'a Scenario;
    type IntoIter = std::slice::Iter<'a, Scenario>;

    fn into_iter(self) -> Self::IntoIter {
        self.scenarios.iter()
    }
}

#[cfg(test)]
#[path = "scenario_tests.rs"]
mod tests;
