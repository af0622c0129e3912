// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Shared helpers for harness integration tests.
//!
//! Builds a throwaway project root holding a fake precompiler at
//! `bin/handlebars` plus the fixtures the built-in table expects. The fake
//! echoes back the options it parsed, so each fixture pins down exactly
//! which arguments a scenario passes.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Fake precompiler understanding the flags the built-in table uses.
pub const FAKE_PRECOMPILER: &str = r#"#!/bin/sh
out=""; ns="Handlebars.templates"; simple=false; min=false; known=""; only=false
amd=false; templates=""; mode=compile
while [ $# -gt 0 ]; do
  case "$1" in
    -a) amd=true ;;
    -f) out="$2"; shift ;;
    -n|--namespace) ns="$2"; shift ;;
    -s) simple=true ;;
    -m) min=true ;;
    -k) known="$known $2"; shift ;;
    -o) only=true ;;
    -i) mode=string; templates="$2"; shift ;;
    --help) mode=help ;;
    -v) mode=version ;;
    *) templates="$templates $1" ;;
  esac
  shift
done
case "$mode" in
  help) text="Precompile handlebar templates.
Usage: handlebars [template|directory]..." ;;
  version) text="4.7.7" ;;
  string) text="{\"compiler\":[8,\">= 4.3.0\"],\"main\":$templates}" ;;
  *) text="amd: $amd
namespace: $ns
simple: $simple
minimize: $min
known:$known
knownOnly: $only
templates:$templates" ;;
esac
if [ -n "$out" ]; then printf '%s\n' "$text" > "$out"; else printf '%s\n' "$text"; fi
"#;

/// Expected module text, written with CRLF and loose indentation.
fn module_fixture(
    namespace: &str,
    simple: bool,
    minimize: bool,
    known: &str,
    only: bool,
    template: &str,
) -> String {
    [
        "amd: true".to_string(),
        format!("  namespace: {namespace}"),
        format!("  simple: {simple}"),
        format!("  minimize: {minimize}"),
        format!("  known: {known}"),
        format!("  knownOnly: {only}"),
        format!("  templates:   {template}"),
        String::new(),
    ]
    .join("\r\n")
}

/// Fixture files keyed by their path under the root.
pub fn fixtures() -> Vec<(&'static str, String)> {
    let empty = "spec/artifacts/empty.handlebars";
    vec![
        (
            "spec/expected/empty.amd.js",
            module_fixture("Handlebars.templates", false, false, "", false, empty),
        ),
        (
            "spec/expected/empty.amd.namespace.js",
            module_fixture("CustomNamespace.templates", false, false, "", false, empty),
        ),
        (
            "spec/expected/empty.amd.simple.js",
            module_fixture("Handlebars.templates", true, false, "", false, empty),
        ),
        (
            "spec/expected/empty.amd.min.js",
            module_fixture("Handlebars.templates", false, true, "", false, empty),
        ),
        (
            "spec/expected/non.empty.amd.known.helper.js",
            module_fixture(
                "Handlebars.templates",
                false,
                false,
                "someHelper anotherHelper",
                true,
                "spec/artifacts/known.helpers.handlebars",
            ),
        ),
        (
            "spec/expected/help.menu.txt",
            "Precompile handlebar templates.\r\nUsage: handlebars [template|directory]...\r\n"
                .to_string(),
        ),
        ("spec/expected/version.txt", "4.7.7\n".to_string()),
        (
            "spec/expected/compiled.string.txt",
            "{\"compiler\":[8,\">= 4.3.0\"],\"main\":<div>Test String</div>}".to_string(),
        ),
    ]
}

/// A project root with the fake precompiler and all fixtures.
pub struct Project {
    pub dir: TempDir,
}

impl Project {
    /// Create the project; `executable` controls the precompiler's mode bits.
    pub fn new(executable: bool) -> Self {
        let dir = TempDir::new().unwrap();
        let project = Self { dir };
        project.write("spec/artifacts/empty.handlebars", "");
        project.write(
            "spec/artifacts/known.helpers.handlebars",
            "{{someHelper \"foo\"}}\n{{anotherHelper \"bar\"}}\n",
        );
        for (path, content) in fixtures() {
            project.write(path, &content);
        }
        project.write("bin/handlebars", FAKE_PRECOMPILER);
        project.set_executable("bin/handlebars", executable);
        project
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    pub fn write(&self, rel: &str, content: &str) {
        let path = self.path(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    #[cfg(unix)]
    pub fn set_executable(&self, rel: &str, executable: bool) {
        use std::os::unix::fs::PermissionsExt;
        let mode = if executable { 0o755 } else { 0o644 };
        std::fs::set_permissions(self.path(rel), std::fs::Permissions::from_mode(mode)).unwrap();
    }

    #[cfg(not(unix))]
    pub fn set_executable(&self, _rel: &str, _executable: bool) {}
}
