//! # Data Models Module / 数据模型模块
//!
//! This module defines the core data structures used throughout the harness:
//! the test case being run, the captured result of one interpreter
//! invocation, and the summary printed at the end of a run.
//!
//! 此模块定义了整个 harness 中使用的核心数据结构：
//! 被运行的测试用例、一次解释器调用的捕获结果，以及运行结束时打印的摘要。

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

/// A single `.lox` source file to be executed by the interpreter.
/// Test cases are authored externally; the harness never creates or deletes them.
///
/// 由解释器执行的单个 `.lox` 源文件。
/// 测试用例由外部编写；harness 从不创建或删除它们。
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestCase {
    path: PathBuf,
    stem: String,
}

impl TestCase {
    /// Builds a test case from a path. Returns `None` if the path has no
    /// file stem (e.g. `..`).
    pub fn from_path(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        let stem = path.file_stem()?.to_string_lossy().into_owned();
        Some(Self { path, stem })
    }

    /// The path the interpreter is invoked with.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The file name without its `.lox` extension.
    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// The file name used in console output.
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

impl fmt::Display for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// The two output streams captured from the interpreter.
/// 从解释器捕获的两个输出流。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamKind {
    Stdout,
    Stderr,
}

impl StreamKind {
    pub const ALL: [StreamKind; 2] = [StreamKind::Stdout, StreamKind::Stderr];
}

impl fmt::Display for StreamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamKind::Stdout => write!(f, "stdout"),
            StreamKind::Stderr => write!(f, "stderr"),
        }
    }
}

/// Outcome of one interpreter invocation.
/// It is consumed right after the invocation and never kept across test cases.
///
/// 一次解释器调用的结果。
/// 它在调用后立即被消费，不会跨测试用例保留。
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// Exit status reported by the operating system / 操作系统报告的退出状态
    pub status: ExitStatus,
    /// Captured standard output, decoded as UTF-8 / 捕获的标准输出，按 UTF-8 解码
    pub stdout: String,
    /// Captured standard error, decoded as UTF-8 / 捕获的标准错误，按 UTF-8 解码
    pub stderr: String,
}

impl ExecutionResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Returns the captured text of the given stream.
    pub fn stream(&self, kind: StreamKind) -> &str {
        match kind {
            StreamKind::Stdout => &self.stdout,
            StreamKind::Stderr => &self.stderr,
        }
    }
}

/// What a completed run did. This is not a pass/fail report.
/// 一次完成的运行所做的事情。这不是通过/失败报告。
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of test cases handed to the interpreter / 交给解释器的测试用例数量
    pub cases_run: usize,
    /// Artifacts written, in write order / 按写入顺序排列的已写入产物
    pub artifacts: Vec<PathBuf>,
    /// Whether the run was a dry run / 是否为试运行
    pub dry_run: bool,
}
