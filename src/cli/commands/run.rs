//! # Run Command Module / 运行命令模块
//!
//! This module implements the harness's only command: resolve the
//! configuration, discover the test cases and hand them to the orchestrator.
//!
//! 此模块实现了 harness 唯一的命令：解析配置、发现测试用例并将其交给编排器。

use anyhow::{Context, Result};
use colored::*;

use crate::{
    cli::CliArgs,
    core::{
        config::{HarnessConfig, RunConfiguration},
        discovery::{discover, discover_sorted},
        execution::Orchestrator,
        models::RunSummary,
    },
    infra::{
        command::{ProcessRunner, TokioProcessRunner},
        t,
    },
    reporting::console::{print_failure_details, print_run_header, print_summary},
};

/// Executes the run command with the parsed command line.
///
/// # Arguments
/// * `args` - Parsed command-line arguments
///
/// # Returns
/// A Result indicating success or the first fatal error of the run
pub async fn execute(args: CliArgs) -> Result<()> {
    let file_config = load_config(&args)?;

    // `--lang` already won during pre-parsing; the file only fills the gap.
    if args.lang.is_none() {
        if let Some(language) = file_config.language.as_deref() {
            crate::init_locale(Some(language));
        }
    }

    let config = RunConfiguration::resolve(args.path, &file_config, args.overrides)
        .context("Failed to resolve run configuration")?;
    tracing::debug!(?config, "resolved run configuration");

    run_harness(config, TokioProcessRunner).await?;
    Ok(())
}

fn load_config(args: &CliArgs) -> Result<HarnessConfig> {
    match &args.config {
        Some(path) => {
            let config = HarnessConfig::load(path)?;
            println!("{}", t!("config_loaded", path = path.display()).cyan());
            Ok(config)
        }
        None => Ok(HarnessConfig::default()),
    }
}

/// Discovers and runs every test case described by `config` with `runner`.
///
/// On failure the error details are printed before the error is returned,
/// so the caller only has to choose the exit code.
pub async fn run_harness<R: ProcessRunner>(
    config: RunConfiguration,
    runner: R,
) -> Result<RunSummary> {
    print_run_header(&config);

    let orchestrator = Orchestrator::new(runner, config);
    let path = orchestrator.config().path.as_path();

    let outcome = if orchestrator.config().sort {
        match discover_sorted(path) {
            Ok(cases) => orchestrator.run(cases.into_iter().map(Ok)).await,
            Err(e) => Err(e),
        }
    } else {
        match discover(path) {
            Ok(cases) => orchestrator.run(cases).await,
            Err(e) => Err(e),
        }
    };

    match outcome {
        Ok(summary) => {
            print_summary(&summary);
            Ok(summary)
        }
        Err(e) => {
            print_failure_details(&e);
            Err(e.into())
        }
    }
}
