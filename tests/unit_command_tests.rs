//! # Command Module Unit Tests / Command 模块单元测试
//!
//! This module contains unit tests for the `command.rs` module, testing
//! `spawn_and_capture` and the `TokioProcessRunner` against real processes.
//!
//! 此模块包含 `command.rs` 模块的单元测试，
//! 使用真实进程测试 `spawn_and_capture` 和 `TokioProcessRunner`。

#![cfg(unix)]

use lox_harness::infra::command::{Invocation, ProcessRunner, TokioProcessRunner, spawn_and_capture};
use tokio::process::Command;

fn sh(script: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.args(["-c", script]);
    cmd
}

#[cfg(test)]
mod spawn_and_capture_tests {
    use super::*;

    #[tokio::test]
    async fn test_spawn_and_capture_successful_command() {
        let mut cmd = Command::new("echo");
        cmd.arg("Hello, World!");

        let result = spawn_and_capture(cmd).await.unwrap();

        assert!(result.success());
        assert_eq!(result.stdout, "Hello, World!\n");
        assert!(result.stderr.is_empty());
    }

    #[tokio::test]
    async fn test_spawn_and_capture_keeps_streams_apart() {
        let result = spawn_and_capture(sh("echo 'Test output'; echo 'Test error' >&2"))
            .await
            .unwrap();

        assert_eq!(result.stdout, "Test output\n");
        assert_eq!(result.stderr, "Test error\n");
    }

    #[tokio::test]
    async fn test_spawn_and_capture_preserves_missing_trailing_newline() {
        let result = spawn_and_capture(sh("printf 'no newline'")).await.unwrap();
        assert_eq!(result.stdout, "no newline");
    }

    #[tokio::test]
    async fn test_spawn_and_capture_nonexistent_command() {
        let cmd = Command::new("this_command_does_not_exist_12345");
        assert!(spawn_and_capture(cmd).await.is_err());
    }

    #[tokio::test]
    async fn test_spawn_and_capture_failing_command() {
        let result = spawn_and_capture(sh("echo 'partial'; exit 3")).await.unwrap();

        assert!(!result.success());
        assert_eq!(result.status.code(), Some(3));
        assert_eq!(result.stdout, "partial\n");
    }

    #[tokio::test]
    async fn test_spawn_and_capture_empty_output() {
        let result = spawn_and_capture(Command::new("true")).await.unwrap();

        assert!(result.success());
        assert!(result.stdout.is_empty());
        assert!(result.stderr.is_empty());
    }

    #[tokio::test]
    async fn test_spawn_and_capture_replaces_invalid_utf8() {
        let result = spawn_and_capture(sh(r"printf 'ok\377'")).await.unwrap();
        assert!(result.stdout.starts_with("ok"));
        assert!(result.stdout.contains('\u{FFFD}'));
    }

    #[tokio::test]
    async fn test_spawn_and_capture_large_output_on_both_pipes() {
        // Well past a typical 64 KiB pipe buffer on each stream.
        let script = "i=0; while [ $i -lt 20000 ]; do echo \"out $i\"; echo \"err $i\" >&2; i=$((i+1)); done";
        let result = spawn_and_capture(sh(script)).await.unwrap();

        assert!(result.success());
        assert_eq!(result.stdout.lines().count(), 20000);
        assert_eq!(result.stderr.lines().count(), 20000);
    }
}

#[cfg(test)]
mod tokio_runner_tests {
    use super::*;

    #[tokio::test]
    async fn test_runner_passes_the_test_file_as_sole_argument() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("args.lox");
        std::fs::write(&script, "echo \"$#\"; echo \"$0\" >&2").unwrap();

        let invocation = Invocation::new("/bin/sh").arg(&script);
        let result = TokioProcessRunner.invoke(&invocation).await.unwrap();

        assert!(result.success());
        // sh sees no extra positional arguments; $0 is the script path.
        assert_eq!(result.stdout, "0\n");
        assert_eq!(result.stderr.trim_end(), script.display().to_string());
    }

    #[tokio::test]
    async fn test_runner_reports_missing_executable() {
        let invocation = Invocation::new("./build/definitely-missing-cloxpp").arg("a.lox");
        let err = TokioProcessRunner.invoke(&invocation).await.unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }
}
