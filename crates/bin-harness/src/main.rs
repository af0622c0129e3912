// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! bin-harness CLI entry point.

use anyhow::Result;
use bin_harness::env::{self, ProcessEnv};
use bin_harness::{builtin, FailureMode, HarnessConfig, InvocationMode, Runner, ScenarioTable};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Golden-fixture conformance harness for command-line compilers
#[derive(Parser, Debug)]
#[command(name = "bin-harness")]
#[command(about = "Run a binary against golden fixtures")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the scenario table (the default)
    Run(RunArgs),
    /// List scenarios in run order
    List(TableArgs),
}

#[derive(clap::Args, Debug, Default)]
struct TableArgs {
    /// Scenario table file (TOML or JSON); defaults to the built-in table
    #[arg(long)]
    table: Option<PathBuf>,
}

#[derive(clap::Args, Debug, Default)]
struct RunArgs {
    #[command(flatten)]
    table: TableArgs,

    /// Directory scenarios run in
    #[arg(long)]
    root: Option<PathBuf>,

    /// Binary under test, relative to the root
    #[arg(long)]
    binary: Option<PathBuf>,

    /// Interpreter for binaries that cannot run standalone
    #[arg(long)]
    interpreter: Option<PathBuf>,

    /// How to launch the binary: auto, direct or interpreter
    #[arg(long)]
    invocation: Option<InvocationMode>,

    /// Kill the binary after this many milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Run every scenario instead of stopping at the first failure
    #[arg(long)]
    keep_going: bool,
}

fn init_tracing() {
    let filter = env::log_filter(&ProcessEnv)
        .and_then(|f| EnvFilter::try_new(f).ok())
        .unwrap_or_else(|| EnvFilter::new("info"));
    let fmt = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    if env::log_json(&ProcessEnv) {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt.json())
            .init();
    } else {
        tracing_subscriber::registry().with(filter).with(fmt).init();
    }
}

fn load_table(args: &TableArgs) -> Result<ScenarioTable> {
    Ok(match &args.table {
        Some(path) => ScenarioTable::load(path)?,
        None => builtin::table()?,
    })
}

async fn run(args: RunArgs) -> Result<bool> {
    let table = load_table(&args.table)?;

    let mut config = HarnessConfig::from_env()?;
    if let Some(root) = args.root {
        config.root = root;
    }
    if let Some(binary) = args.binary {
        config.binary = binary;
    }
    if let Some(interpreter) = args.interpreter {
        config.interpreter = interpreter;
    }
    if let Some(mode) = args.invocation {
        config.invocation = mode;
    }
    if let Some(ms) = args.timeout_ms {
        config.timeout = (ms > 0).then(|| Duration::from_millis(ms));
    }
    if args.keep_going {
        config.failure_mode = FailureMode::KeepGoing;
    }

    let report = Runner::from_config(&config).run(&table).await;

    for outcome in &report.outcomes {
        let status = if outcome.passed() { "ok" } else { "FAILED" };
        println!("{} ... {} ({}ms)", outcome.name, status, outcome.elapsed_ms);
    }
    for (name, err) in report.failures() {
        eprintln!("\n---- {} [{}] ----\n{}", name, err.kind(), err);
    }
    println!(
        "\n{} passed; {} failed; {} skipped",
        report.passed(),
        report.failed(),
        report.skipped
    );

    Ok(report.is_success())
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    let success = match cli.command.unwrap_or(Command::Run(RunArgs::default())) {
        Command::Run(args) => run(args).await?,
        Command::List(args) => {
            for scenario in load_table(&args)?.iter() {
                println!("{}\t{}", scenario.name, scenario.args.join(" "));
            }
            true
        }
    };

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
