//! # Command Module / 命令模块
//!
//! Process invocation for the harness. The orchestrator only sees the
//! [`ProcessRunner`] trait, so it can be driven by a scripted runner in tests
//! instead of spawning a real interpreter.
//!
//! harness 的进程调用。编排器只依赖 [`ProcessRunner`] trait，
//! 因此在测试中可以使用脚本化的运行器，而不必启动真实的解释器。

use std::ffi::OsString;
use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::task::JoinHandle;

use crate::core::models::ExecutionResult;

/// A program and its arguments, ready to be run.
/// 一个待运行的程序及其参数。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<OsString>,
}

impl Invocation {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Renders the invocation as a single line for logs.
    pub fn command_line(&self) -> String {
        let mut line = self.program.display().to_string();
        for arg in &self.args {
            line.push(' ');
            line.push_str(&arg.to_string_lossy());
        }
        line
    }
}

/// Runs an [`Invocation`] to completion and captures both output streams.
///
/// Implementations must wait for the process to exit before resolving. An
/// `Err` means the process could not be run at all; a process that ran and
/// failed is reported through [`ExecutionResult::status`].
///
/// 运行一个 [`Invocation`] 直到完成，并捕获两个输出流。
pub trait ProcessRunner {
    fn invoke(
        &self,
        invocation: &Invocation,
    ) -> impl Future<Output = io::Result<ExecutionResult>> + Send;
}

/// The production runner, backed by `tokio::process`.
///
/// The child is killed if the invocation future is dropped, which is how a
/// timeout in the orchestrator stops a hung interpreter.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioProcessRunner;

impl ProcessRunner for TokioProcessRunner {
    async fn invoke(&self, invocation: &Invocation) -> io::Result<ExecutionResult> {
        let mut cmd = tokio::process::Command::new(&invocation.program);
        cmd.args(&invocation.args)
            .stdin(Stdio::null())
            .kill_on_drop(true);
        spawn_and_capture(cmd).await
    }
}

/// Spawns a command and captures its stdout and stderr separately.
/// Both pipes are drained concurrently so a chatty child cannot block on a
/// full pipe while we wait for it to exit.
///
/// # Arguments
/// * `cmd` - The `tokio::process::Command` to execute.
///
/// # Returns
/// The exit status and both streams decoded as UTF-8 (invalid sequences are
/// replaced), or the I/O error that prevented the process from running.
///
/// 派生一个命令，分别捕获其 stdout 和 stderr。
/// 两个管道被并发读取，避免子进程因管道写满而阻塞。
///
/// # Arguments
/// * `cmd` - 要执行的 `tokio::process::Command`。
///
/// # Returns
/// 退出状态以及按 UTF-8 解码的两个输出流（无效序列会被替换），
/// 或者导致进程无法运行的 I/O 错误。
pub async fn spawn_and_capture(mut cmd: tokio::process::Command) -> io::Result<ExecutionResult> {
    let mut child = cmd
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| io::Error::other("failed to capture stdout"))?;
    let stderr = child
        .stderr
        .take()
        .ok_or_else(|| io::Error::other("failed to capture stderr"))?;

    // One reader task per pipe.
    // 每个管道一个读取任务。
    let stdout_handle = read_to_end(stdout);
    let stderr_handle = read_to_end(stderr);

    let status = child.wait().await?;

    // Wait for the readers so nothing written right before exit is lost.
    // 等待读取任务完成，确保退出前写入的内容不会丢失。
    let stdout = join_reader(stdout_handle).await?;
    let stderr = join_reader(stderr_handle).await?;

    Ok(ExecutionResult {
        status,
        stdout: String::from_utf8_lossy(&stdout).into_owned(),
        stderr: String::from_utf8_lossy(&stderr).into_owned(),
    })
}

fn read_to_end<R>(mut reader: R) -> JoinHandle<io::Result<Vec<u8>>>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf).await?;
        Ok(buf)
    })
}

async fn join_reader(handle: JoinHandle<io::Result<Vec<u8>>>) -> io::Result<Vec<u8>> {
    handle.await.map_err(io::Error::other)?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_line_joins_program_and_args() {
        let invocation = Invocation::new("./build/cloxpp/cloxpp").arg("tests/a.lox");
        assert_eq!(invocation.command_line(), "./build/cloxpp/cloxpp tests/a.lox");
        assert_eq!(invocation.args.len(), 1);
    }
}
