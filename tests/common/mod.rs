// Shared test helpers for integration tests
#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use std::sync::Mutex;
use std::time::Duration;

use lox_harness::infra::command::{Invocation, ProcessRunner};
use lox_harness::models::{ExecutionResult, TestCase};
use tempfile::{TempDir, tempdir};

/// Creates a temporary directory holding the given `(file name, content)` pairs.
pub fn setup_test_dir(files: &[(&str, &str)]) -> TempDir {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    for (name, content) in files {
        fs::write(temp_dir.path().join(name), content).expect("Failed to write test file");
    }
    temp_dir
}

/// Sorted file names in `dir`.
pub fn list_dir(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Test cases for `names` inside `dir`, in the given order.
pub fn cases_in(dir: &Path, names: &[&str]) -> Vec<Result<TestCase, lox_harness::HarnessError>> {
    names
        .iter()
        .map(|name| Ok(TestCase::from_path(dir.join(name)).unwrap()))
        .collect()
}

#[cfg(unix)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    ExitStatus::from_raw(code << 8)
}

#[cfg(windows)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    ExitStatus::from_raw(code as u32)
}

/// What the fake interpreter does for one test case.
#[derive(Debug, Clone, Default)]
pub struct Scripted {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
    pub delay: Option<Duration>,
}

/// A `ProcessRunner` that answers from a script keyed by test-case stem
/// and records every invocation it receives. Unscripted cases exit 0 with
/// no output.
#[derive(Debug, Default)]
pub struct FakeRunner {
    scripts: HashMap<String, Scripted>,
    missing_program: bool,
    calls: Mutex<Vec<Invocation>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Behaves as if the interpreter executable does not exist.
    pub fn missing_program() -> Self {
        Self {
            missing_program: true,
            ..Self::default()
        }
    }

    pub fn on(mut self, stem: &str, code: i32, stdout: &str, stderr: &str) -> Self {
        self.scripts.insert(
            stem.to_string(),
            Scripted {
                code,
                stdout: stdout.to_string(),
                stderr: stderr.to_string(),
                delay: None,
            },
        );
        self
    }

    pub fn hang(mut self, stem: &str, delay: Duration) -> Self {
        self.scripts.insert(
            stem.to_string(),
            Scripted {
                delay: Some(delay),
                ..Scripted::default()
            },
        );
        self
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().unwrap().clone()
    }

    /// Stems of the test cases the runner was invoked with, in order.
    pub fn invoked_stems(&self) -> Vec<String> {
        self.calls()
            .iter()
            .map(|call| stem_of(&call.args[0]))
            .collect()
    }
}

fn stem_of(arg: &std::ffi::OsStr) -> String {
    PathBuf::from(arg)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

impl ProcessRunner for FakeRunner {
    async fn invoke(&self, invocation: &Invocation) -> io::Result<ExecutionResult> {
        self.calls.lock().unwrap().push(invocation.clone());
        if self.missing_program {
            return Err(io::Error::new(io::ErrorKind::NotFound, "No such file or directory"));
        }

        let script = self
            .scripts
            .get(&stem_of(&invocation.args[0]))
            .cloned()
            .unwrap_or_default();
        if let Some(delay) = script.delay {
            tokio::time::sleep(delay).await;
        }

        Ok(ExecutionResult {
            status: exit_status(script.code),
            stdout: script.stdout,
            stderr: script.stderr,
        })
    }
}
