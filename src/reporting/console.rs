//! # Console Reporting Module / 控制台报告模块
//!
//! This module prints the harness's progress to the console: what is being
//! run, which artifacts were written, the dry-run stderr dump and the closing
//! summary. Messages are localised and colour coded.
//!
//! 此模块将 harness 的进度打印到控制台：正在运行的内容、写入的产物、
//! 试运行的 stderr 输出以及最后的摘要。消息经过本地化并使用颜色区分。

use colored::*;
use std::path::Path;

use crate::core::config::RunConfiguration;
use crate::core::error::HarnessError;
use crate::core::models::{RunSummary, TestCase};
use crate::infra::t;

/// Prints what the run is about to do.
///
/// # Output Format / 输出格式
/// ```text
/// Scanning tests for .lox test cases
/// Interpreter: ./build/cloxpp/cloxpp
/// Artifacts: tests (stem naming)
/// ```
pub fn print_run_header(config: &RunConfiguration) {
    println!(
        "{}",
        t!("run.scanning", path = config.path.display()).bold()
    );
    println!(
        "{}",
        t!("run.interpreter", path = config.interpreter.display()).cyan()
    );
    if config.dry_run {
        println!("{}", t!("run.dry_run_mode").yellow());
    } else {
        println!(
            "{}",
            t!(
                "run.output_dir",
                path = config.output_dir.display(),
                naming = config.naming
            )
            .cyan()
        );
    }
}

/// Announces a test case before its interpreter is started.
pub fn print_case_started(index: usize, case: &TestCase) {
    println!(
        "{}",
        t!("run.running_case", index = index, name = case.display_name()).blue()
    );
}

/// Dry-run output for one test case: a header, then the captured stderr
/// exactly as the interpreter wrote it (followed by a newline, even when
/// empty).
///
/// 试运行中单个测试用例的输出：一个标题，然后是解释器写出的原始 stderr。
pub fn print_dry_run_output(case: &TestCase, stderr: &str) {
    println!(
        "{}",
        t!("run.dry_run_stderr", name = case.display_name()).dimmed()
    );
    println!("{}", stderr);
}

pub fn print_artifact_written(path: &Path) {
    println!(
        "{}",
        t!("run.artifact_written", path = path.display()).green()
    );
}

/// Prints the closing line of a completed run.
///
/// 打印一次完成运行的结束行。
pub fn print_summary(summary: &RunSummary) {
    let line = if summary.cases_run == 0 {
        t!("summary.no_cases").yellow()
    } else if summary.dry_run {
        t!("summary.dry_run", count = summary.cases_run).green()
    } else {
        t!(
            "summary.completed",
            count = summary.cases_run,
            artifacts = summary.artifacts.len()
        )
        .green()
    };
    println!("\n{}", line.bold());
}

/// Prints the details of the error that aborted the run. For a failing
/// interpreter this includes whatever it wrote to stderr.
///
/// 打印导致运行中止的错误详情。对于失败的解释器，会包含其写入 stderr 的内容。
pub fn print_failure_details(error: &HarnessError) {
    println!("\n{}", t!("failure.banner").red().bold());
    println!("{}", "-".repeat(80));
    println!("{}", error.to_string().red());
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        println!("  {}", cause);
        source = std::error::Error::source(cause);
    }

    if let HarnessError::NonZeroExit { stderr, .. } = error {
        if !stderr.trim().is_empty() {
            println!("\n--- {} ---\n", t!("failure.stderr_header").yellow());
            println!("{}", stderr.trim_end());
        }
    }
    println!("{}", "-".repeat(80));
}
