//! # Artifact Module / 产物模块
//!
//! Artifacts are the files the harness leaves behind: one per non-empty
//! output stream per test case. This module decides what they are called
//! and writes them.
//!
//! 产物是 harness 留下的文件：每个测试用例的每个非空输出流对应一个。
//! 此模块决定它们的名称并负责写入。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::core::error::HarnessError;
use crate::core::models::{StreamKind, TestCase};
use crate::infra::fs::write_truncating;

/// How artifact file names are derived.
///
/// - `Stem`: `{stem}.stdout` / `{stem}.stderr`. Stable across runs, but two
///   test cases with the same stem overwrite each other.
/// - `Counter`: `{index}_expected.tokens` / `{index}_stderr.tokens`, where
///   `index` is the 1-based position of the test case within the run.
///
/// 产物文件名的推导方式。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamingScheme {
    #[default]
    Stem,
    Counter,
}

impl NamingScheme {
    /// Returns the artifact file name for `case`, which sits at 1-based
    /// position `index` in the run.
    pub fn file_name(&self, case: &TestCase, index: usize, stream: StreamKind) -> String {
        match (self, stream) {
            (NamingScheme::Stem, StreamKind::Stdout) => format!("{}.stdout", case.stem()),
            (NamingScheme::Stem, StreamKind::Stderr) => format!("{}.stderr", case.stem()),
            (NamingScheme::Counter, StreamKind::Stdout) => format!("{index}_expected.tokens"),
            (NamingScheme::Counter, StreamKind::Stderr) => format!("{index}_stderr.tokens"),
        }
    }
}

impl fmt::Display for NamingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NamingScheme::Stem => write!(f, "stem"),
            NamingScheme::Counter => write!(f, "counter"),
        }
    }
}

impl FromStr for NamingScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "stem" => Ok(NamingScheme::Stem),
            "counter" => Ok(NamingScheme::Counter),
            other => Err(format!(
                "unknown naming scheme '{other}', expected 'stem' or 'counter'"
            )),
        }
    }
}

/// Writes one artifact into `output_dir` and returns its path.
///
/// Any existing file with the same name is truncated and replaced.
///
/// 将一个产物写入 `output_dir` 并返回其路径。已存在的同名文件会被截断并覆盖。
pub fn write_artifact(
    scheme: NamingScheme,
    case: &TestCase,
    index: usize,
    output_dir: &Path,
    stream: StreamKind,
    content: &str,
) -> Result<PathBuf, HarnessError> {
    let path = output_dir.join(scheme.file_name(case, index, stream));
    write_truncating(&path, content).map_err(|source| HarnessError::Persistence {
        path: path.clone(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = content.len(), %stream, "artifact written");
    Ok(path)
}
