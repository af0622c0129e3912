// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Binary-under-test invocation.
//!
//! Runs the binary to completion with discrete arguments (never through a
//! shell) and returns its stdout. Targets that cannot run on their own, such
//! as scripts without an execute bit, are run through a configured
//! interpreter instead.

use crate::error::HarnessError;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

/// How the binary under test is launched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InvocationMode {
    /// Run directly when the platform can execute the target, otherwise
    /// through the interpreter.
    #[default]
    Auto,
    /// Always run the target directly.
    Direct,
    /// Always run `<interpreter> <target> <args...>`.
    Interpreter,
}

impl std::str::FromStr for InvocationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "direct" => Ok(Self::Direct),
            "interpreter" => Ok(Self::Interpreter),
            other => Err(format!(
                "invalid invocation mode '{}': must be one of auto, direct, interpreter",
                other
            )),
        }
    }
}

/// Configuration for launching the binary under test.
#[derive(Clone, Debug)]
pub struct Invoker {
    /// Path to the binary under test
    pub binary: PathBuf,

    /// Interpreter for targets that cannot run standalone
    pub interpreter: PathBuf,

    /// Launch policy
    pub mode: InvocationMode,

    /// Working directory for the child
    pub cwd: PathBuf,

    /// `PATH` inherited from the harness, extended per invocation
    pub base_path: Option<OsString>,

    /// Optional wall-clock limit per invocation
    pub timeout: Option<Duration>,
}

impl Invoker {
    /// Create an invoker with default interpreter and policy.
    pub fn new(binary: impl Into<PathBuf>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            interpreter: PathBuf::from(crate::config::DEFAULT_INTERPRETER),
            mode: InvocationMode::Auto,
            cwd: cwd.into(),
            base_path: None,
            timeout: None,
        }
    }

    /// Set interpreter
    pub fn with_interpreter(mut self, interpreter: impl Into<PathBuf>) -> Self {
        self.interpreter = interpreter.into();
        self
    }

    /// Set launch policy
    pub fn with_mode(mut self, mode: InvocationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the inherited search path
    pub fn with_base_path(mut self, path: Option<OsString>) -> Self {
        self.base_path = path;
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Resolve the binary path against the working directory.
    pub fn binary_path(&self) -> PathBuf {
        self.cwd.join(&self.binary)
    }

    /// Program and leading arguments for one invocation.
    ///
    /// The target is passed as a discrete argument to the interpreter when
    /// indirection applies.
    pub fn command_line(&self, args: &[String]) -> (PathBuf, Vec<OsString>) {
        let target = self.binary_path();
        let indirect = match self.mode {
            InvocationMode::Direct => false,
            InvocationMode::Interpreter => true,
            InvocationMode::Auto => !is_directly_executable(&target),
        };

        if indirect {
            let mut argv = Vec::with_capacity(args.len() + 1);
            argv.push(target.into_os_string());
            argv.extend(args.iter().map(OsString::from));
            (self.interpreter.clone(), argv)
        } else {
            (target, args.iter().map(OsString::from).collect())
        }
    }

    /// Search path handed to the child: the interpreter's directory first,
    /// then the inherited entries.
    pub fn child_path(&self) -> Option<OsString> {
        extend_search_path(&self.interpreter, self.base_path.as_deref())
    }

    /// Run the binary with `args` and return its stdout.
    pub async fn invoke(&self, args: &[String]) -> Result<String, HarnessError> {
        let (program, argv) = self.command_line(args);
        tracing::debug!(program = %program.display(), args = ?argv, "invoking binary under test");

        let mut command = Command::new(&program);
        command
            .args(&argv)
            .current_dir(&self.cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if let Some(path) = self.child_path() {
            command.env(crate::env::PATH, path);
        }

        let child = command.spawn().map_err(|source| HarnessError::Spawn {
            program: program.clone(),
            source,
        })?;

        let output = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, child.wait_with_output()).await {
                Ok(result) => result,
                // Dropping the child future kills the process.
                Err(_) => {
                    return Err(HarnessError::Timeout {
                        program,
                        timeout_ms: limit.as_millis() as u64,
                    })
                }
            },
            None => child.wait_with_output().await,
        }
        .map_err(|source| HarnessError::Spawn {
            program: program.clone(),
            source,
        })?;

        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        if !output.status.success() {
            return Err(HarnessError::ProcessExecution {
                program,
                code: output.status.code(),
                stderr,
            });
        }
        if !stderr.trim().is_empty() {
            tracing::debug!(stderr = %stderr.trim_end(), "binary wrote to stderr");
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Prepend the interpreter's directory to `base`.
///
/// Returns `base` unchanged when the interpreter is a bare name, and `None`
/// when there is nothing to pass on.
pub fn extend_search_path(
    interpreter: &Path,
    base: Option<&std::ffi::OsStr>,
) -> Option<OsString> {
    let dir = interpreter
        .parent()
        .filter(|d| !d.as_os_str().is_empty())
        .map(Path::to_path_buf);

    let mut entries: Vec<PathBuf> = dir.into_iter().collect();
    if let Some(base) = base {
        entries.extend(std::env::split_paths(base));
    }
    if entries.is_empty() {
        return base.map(|b| b.to_os_string());
    }
    std::env::join_paths(entries)
        .ok()
        .or_else(|| base.map(|b| b.to_os_string()))
}

/// Whether the platform can execute `path` without an interpreter.
#[cfg(unix)]
pub fn is_directly_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path)
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// Whether the platform can execute `path` without an interpreter.
#[cfg(windows)]
pub fn is_directly_executable(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            matches!(
                e.to_ascii_lowercase().as_str(),
                "exe" | "com" | "bat" | "cmd"
            )
        })
        .unwrap_or(false)
}

/// Whether the platform can execute `path` without an interpreter.
#[cfg(not(any(unix, windows)))]
pub fn is_directly_executable(path: &Path) -> bool {
    path.is_file()
}

#[cfg(test)]
#[path = "invoke_tests.rs"]
mod tests;
