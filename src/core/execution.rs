//! # Test Execution Engine Module / 测试执行引擎模块
//!
//! This module runs discovered test cases through the interpreter, one at a
//! time and in discovery order, and turns each result into artifacts or, in
//! a dry run, into console output.
//!
//! 此模块按发现顺序逐个通过解释器运行测试用例，
//! 并将每个结果转换为产物文件，或在试运行中转换为控制台输出。

use std::time::Instant;

use crate::core::{
    artifacts::write_artifact,
    config::RunConfiguration,
    error::HarnessError,
    models::{ExecutionResult, RunSummary, StreamKind, TestCase},
};
use crate::infra::command::{Invocation, ProcessRunner};
use crate::reporting::console;

/// Drives a run: one interpreter invocation per test case, fail-fast.
pub struct Orchestrator<R> {
    runner: R,
    config: RunConfiguration,
}

impl<R: ProcessRunner> Orchestrator<R> {
    pub fn new(runner: R, config: RunConfiguration) -> Self {
        Self { runner, config }
    }

    pub fn config(&self) -> &RunConfiguration {
        &self.config
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Runs every test case in order.
    ///
    /// The first error of any kind (a discovery item, a failed invocation, a
    /// failed write) ends the run. Artifacts written before that point stay
    /// on disk.
    ///
    /// 按顺序运行每个测试用例。任何第一个错误都会结束运行，
    /// 在此之前写入的产物会保留在磁盘上。
    pub async fn run<I>(&self, cases: I) -> Result<RunSummary, HarnessError>
    where
        I: IntoIterator<Item = Result<TestCase, HarnessError>>,
    {
        let mut summary = RunSummary {
            dry_run: self.config.dry_run,
            ..RunSummary::default()
        };
        let mut cases = cases.into_iter().peekable();
        let mut index = 0;

        while let Some(case) = cases.next() {
            let case = case?;
            index += 1;

            let result = self.run_test_case(index, &case).await?;
            summary.cases_run += 1;

            if self.config.dry_run {
                console::print_dry_run_output(&case, &result.stderr);
                // Pace between cases only; nothing follows the last one.
                if cases.peek().is_some() && !self.config.pacing.is_zero() {
                    tokio::time::sleep(self.config.pacing).await;
                }
            } else {
                let written = self.persist(index, &case, &result)?;
                summary.artifacts.extend(written);
            }
        }

        Ok(summary)
    }

    /// Invokes the interpreter on one test case and waits for it to exit.
    /// A non-zero exit is an error, not a result.
    pub async fn run_test_case(
        &self,
        index: usize,
        case: &TestCase,
    ) -> Result<ExecutionResult, HarnessError> {
        let invocation = Invocation::new(&self.config.interpreter).arg(case.path());
        console::print_case_started(index, case);
        tracing::debug!(command = %invocation.command_line(), "invoking interpreter");

        let start_time = Instant::now();
        let invoke = self.runner.invoke(&invocation);
        let outcome = match self.config.timeout {
            Some(limit) => tokio::time::timeout(limit, invoke)
                .await
                .map_err(|_| HarnessError::Timeout {
                    case: case.path().to_path_buf(),
                    after: limit,
                })?,
            None => invoke.await,
        };
        let result = outcome.map_err(|source| HarnessError::Spawn {
            program: invocation.program().to_path_buf(),
            source,
        })?;

        tracing::debug!(
            case = %case,
            status = %result.status,
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            stdout_bytes = result.stdout.len(),
            stderr_bytes = result.stderr.len(),
            "interpreter finished"
        );

        if !result.success() {
            return Err(HarnessError::NonZeroExit {
                case: case.path().to_path_buf(),
                code: result.status.code(),
                stderr: result.stderr,
            });
        }
        Ok(result)
    }

    /// Writes one artifact per non-empty stream.
    fn persist(
        &self,
        index: usize,
        case: &TestCase,
        result: &ExecutionResult,
    ) -> Result<Vec<std::path::PathBuf>, HarnessError> {
        let mut written = Vec::new();
        for stream in StreamKind::ALL {
            let content = result.stream(stream);
            if content.is_empty() {
                continue;
            }
            let path = write_artifact(
                self.config.naming,
                case,
                index,
                &self.config.output_dir,
                stream,
                content,
            )?;
            console::print_artifact_written(&path);
            written.push(path);
        }
        Ok(written)
    }
}
