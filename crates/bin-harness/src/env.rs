// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All environment variables read by the harness are defined here. Callers
//! pass an [`EnvSource`] so configuration can be resolved from a fixed map in
//! tests without touching the process environment.

/// Generated env var name constants.
mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

// Re-export name constants for callers that need the raw name string.
pub use names::*;

use std::collections::HashMap;
use std::ffi::OsString;
use std::path::PathBuf;

/// Source of environment variable values.
pub trait EnvSource {
    fn var(&self, name: &str) -> Option<String>;

    /// Raw value, for variables such as `PATH` that may not be UTF-8.
    fn var_os(&self, name: &str) -> Option<OsString> {
        self.var(name).map(OsString::from)
    }
}

/// The environment of the running process.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn var_os(&self, name: &str) -> Option<OsString> {
        std::env::var_os(name)
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// `BIN_HARNESS_ROOT` — Directory scenarios run in.
pub fn root(env: &impl EnvSource) -> Option<PathBuf> {
    non_empty(env, names::BIN_HARNESS_ROOT).map(PathBuf::from)
}

/// `BIN_HARNESS_BINARY` — Binary under test.
pub fn binary(env: &impl EnvSource) -> Option<PathBuf> {
    non_empty(env, names::BIN_HARNESS_BINARY).map(PathBuf::from)
}

/// `BIN_HARNESS_INTERPRETER` — Interpreter used when the binary is a script.
pub fn interpreter(env: &impl EnvSource) -> Option<PathBuf> {
    non_empty(env, names::BIN_HARNESS_INTERPRETER).map(PathBuf::from)
}

/// `BIN_HARNESS_INVOCATION` — `auto`, `direct` or `interpreter`.
pub fn invocation(env: &impl EnvSource) -> Option<String> {
    non_empty(env, names::BIN_HARNESS_INVOCATION)
}

/// `BIN_HARNESS_TIMEOUT_MS` — Per-invocation timeout. Unset means no timeout.
pub fn timeout_ms(env: &impl EnvSource) -> Result<Option<u64>, String> {
    var_u64(env, names::BIN_HARNESS_TIMEOUT_MS)
}

/// `BIN_HARNESS_LOG` — Log filter directive.
pub fn log_filter(env: &impl EnvSource) -> Option<String> {
    non_empty(env, names::BIN_HARNESS_LOG)
}

/// `BIN_HARNESS_LOG_JSON` — Emit logs as JSON lines.
pub fn log_json(env: &impl EnvSource) -> bool {
    env.var(names::BIN_HARNESS_LOG_JSON)
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// `PATH` — Executable search path inherited by the binary under test.
pub fn path(env: &impl EnvSource) -> Option<OsString> {
    env.var_os(names::PATH)
}

fn non_empty(env: &impl EnvSource, name: &str) -> Option<String> {
    env.var(name).filter(|v| !v.trim().is_empty())
}

fn var_u64(env: &impl EnvSource, name: &str) -> Result<Option<u64>, String> {
    match non_empty(env, name) {
        Some(v) => v
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| format!("invalid {name} '{v}': must be a whole number of milliseconds")),
        None => Ok(None),
    }
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
