// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Harness configuration resolved from the environment.

use crate::env::{self, EnvSource};
use crate::error::HarnessError;
use crate::invoke::{InvocationMode, Invoker};
use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

/// Interpreter used when the binary under test cannot run standalone.
pub const DEFAULT_INTERPRETER: &str = "node";

/// What to do after a scenario fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailureMode {
    /// Stop at the first failing scenario
    #[default]
    FailFast,
    /// Run every scenario and report all failures
    KeepGoing,
}

/// Resolved harness settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Directory scenarios run in; relative paths resolve against it
    pub root: PathBuf,
    pub binary: PathBuf,
    pub interpreter: PathBuf,
    pub invocation: InvocationMode,
    pub timeout: Option<Duration>,
    pub failure_mode: FailureMode,
    /// Search path inherited by the binary under test
    pub path: Option<OsString>,
}

impl HarnessConfig {
    /// Resolve from the process environment.
    pub fn from_env() -> Result<Self, HarnessError> {
        Self::from_source(&env::ProcessEnv)
    }

    /// Resolve from any environment source, applying defaults.
    pub fn from_source(source: &impl EnvSource) -> Result<Self, HarnessError> {
        let invocation = match env::invocation(source) {
            Some(raw) => raw.parse().map_err(HarnessError::Validation)?,
            None => InvocationMode::Auto,
        };

        Ok(Self {
            root: env::root(source).unwrap_or_else(|| PathBuf::from(".")),
            binary: env::binary(source)
                .unwrap_or_else(|| PathBuf::from(crate::builtin::DEFAULT_BINARY)),
            interpreter: env::interpreter(source)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INTERPRETER)),
            invocation,
            timeout: env::timeout_ms(source)
                .map_err(HarnessError::Validation)?
                .filter(|ms| *ms > 0)
                .map(Duration::from_millis),
            failure_mode: FailureMode::FailFast,
            path: env::path(source),
        })
    }

    /// Build the invoker for the binary under test.
    pub fn invoker(&self) -> Invoker {
        Invoker::new(&self.binary, &self.root)
            .with_interpreter(&self.interpreter)
            .with_mode(self.invocation)
            .with_base_path(self.path.clone())
            .with_timeout(self.timeout)
    }
}
