// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![cfg(unix)]

//! Built-in precompiler table run end to end against a fake precompiler.

mod common;

use bin_harness::builtin::{self, DEFAULT_BINARY, FILE_OUTPUT};
use bin_harness::{FailureMode, HarnessError, InvocationMode, Invoker, Runner};
use common::Project;

fn runner(project: &Project) -> Runner {
    Runner::new(Invoker::new(DEFAULT_BINARY, project.root()))
}

#[tokio::test]
async fn precompiler_table_passes() {
    let project = Project::new(true);
    let table = builtin::table().unwrap();

    runner(&project).run_all(&table).await.unwrap();
    assert!(!project.path(FILE_OUTPUT).exists());
}

#[tokio::test]
async fn precompiler_table_passes_through_interpreter() {
    let project = Project::new(false);
    let table = builtin::table().unwrap();
    let invoker = Invoker::new(DEFAULT_BINARY, project.root()).with_interpreter("/bin/sh");

    Runner::new(invoker).run_all(&table).await.unwrap();
}

#[tokio::test]
async fn direct_mode_cannot_run_a_plain_script() {
    let project = Project::new(false);
    let table = builtin::table().unwrap();
    let invoker =
        Invoker::new(DEFAULT_BINARY, project.root()).with_mode(InvocationMode::Direct);

    let err = Runner::new(invoker).run_all(&table).await.unwrap_err();
    assert!(matches!(err, HarnessError::Spawn { .. }), "got {err}");
}

#[tokio::test]
async fn changed_version_fails_only_that_scenario() {
    let project = Project::new(true);
    project.write("spec/expected/version.txt", "4.7.6\n");
    let table = builtin::table().unwrap();

    let report = runner(&project)
        .with_failure_mode(FailureMode::KeepGoing)
        .run(&table)
        .await;

    let failed: Vec<_> = report.failures().map(|(name, _)| name).collect();
    assert_eq!(failed, ["version"]);
    assert_eq!(report.passed(), table.len() - 1);
}

#[tokio::test]
async fn file_output_mismatch_still_cleans_up() {
    let project = Project::new(true);
    project.write("spec/expected/empty.amd.js", "something else entirely\n");
    let table = builtin::table().unwrap();
    let file_scenario = table
        .iter()
        .find(|s| s.output.file().is_some())
        .unwrap();

    let err = runner(&project)
        .run_scenario(file_scenario)
        .await
        .unwrap_err();
    assert!(matches!(err, HarnessError::AssertionMismatch { .. }));
    assert!(!project.path(FILE_OUTPUT).exists());
}

#[tokio::test]
async fn missing_fixture_aborts_fail_fast_run() {
    let project = Project::new(true);
    std::fs::remove_file(project.path("spec/expected/help.menu.txt")).unwrap();
    let table = builtin::table().unwrap();

    let report = runner(&project).run(&table).await;
    let (name, err) = report.failures().next().unwrap();
    assert_eq!(name, "help");
    assert!(matches!(err, HarnessError::FixtureNotFound { .. }));
    assert_eq!(report.skipped, 2);
}
