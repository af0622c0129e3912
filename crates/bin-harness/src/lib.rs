// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Golden-fixture conformance harness for command-line compilers.
//!
//! Runs a binary under test with fixed argument sets from a scenario table,
//! captures its output (stdout or a file it writes), normalizes line endings
//! and compares against stored fixtures with whitespace relaxed.
//!
//! ```no_run
//! # async fn demo() -> Result<(), bin_harness::HarnessError> {
//! use bin_harness::{builtin, HarnessConfig, Runner};
//!
//! let config = HarnessConfig::from_env()?;
//! Runner::from_config(&config).run_all(&builtin::table()?).await
//! # }
//! ```

pub mod builtin;
pub mod compare;
pub mod config;
pub mod env;
pub mod error;
pub mod fixture;
pub mod invoke;
pub mod normalize;
pub mod runner;
pub mod scenario;

pub use config::{FailureMode, HarnessConfig};
pub use error::HarnessError;
pub use invoke::{InvocationMode, Invoker};
pub use runner::{RunReport, Runner, ScenarioOutcome};
pub use scenario::{OutputLocation, Scenario, ScenarioTable};
