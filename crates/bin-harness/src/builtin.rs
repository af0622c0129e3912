// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Built-in conformance table for the template precompiler.
//!
//! Paths are relative to the harness root: the binary lives at
//! `bin/handlebars`, template inputs under `spec/artifacts/` and golden
//! output under `spec/expected/`.

use crate::scenario::{Scenario, ScenarioTable};

/// Default binary under test, relative to the root.
pub const DEFAULT_BINARY: &str = "./bin/handlebars";

/// File written by the file-output scenario.
pub const FILE_OUTPUT: &str = "TEST_OUTPUT";

const EMPTY_TEMPLATE: &str = "spec/artifacts/empty.handlebars";
const KNOWN_HELPERS_TEMPLATE: &str = "spec/artifacts/known.helpers.handlebars";

/// The precompiler scenarios, in run order.
pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new("amd", ["-a", EMPTY_TEMPLATE], "spec/expected/empty.amd.js"),
        Scenario::new(
            "amd-file-output",
            ["-a", "-f", FILE_OUTPUT, EMPTY_TEMPLATE],
            "spec/expected/empty.amd.js",
        )
        .with_output_file(FILE_OUTPUT),
        Scenario::new(
            "amd-namespace",
            ["-a", "-n", "CustomNamespace.templates", EMPTY_TEMPLATE],
            "spec/expected/empty.amd.namespace.js",
        ),
        Scenario::new(
            "amd-namespace-long",
            ["-a", "--namespace", "CustomNamespace.templates", EMPTY_TEMPLATE],
            "spec/expected/empty.amd.namespace.js",
        ),
        Scenario::new(
            "amd-simple",
            ["-a", "-s", EMPTY_TEMPLATE],
            "spec/expected/empty.amd.simple.js",
        ),
        Scenario::new(
            "amd-minified",
            ["-a", "-m", EMPTY_TEMPLATE],
            "spec/expected/empty.amd.min.js",
        ),
        Scenario::new(
            "known-helpers-only",
            [
                KNOWN_HELPERS_TEMPLATE,
                "-a",
                "-k",
                "someHelper",
                "-k",
                "anotherHelper",
                "-o",
            ],
            "spec/expected/non.empty.amd.known.helper.js",
        ),
        Scenario::new("help", ["--help"], "spec/expected/help.menu.txt"),
        Scenario::new("version", ["-v"], "spec/expected/version.txt"),
        Scenario::new(
            "compile-string",
            ["-i", "<div>Test String</div>"],
            "spec/expected/compiled.string.txt",
        ),
    ]
}

/// The built-in table.
pub fn table() -> Result<ScenarioTable, crate::error::HarnessError> {
    ScenarioTable::new(scenarios())
}

#[cfg(test)]
#[path = "builtin_tests.rs"]
mod tests;
