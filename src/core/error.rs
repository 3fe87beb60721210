//! # Error Module / 错误模块
//!
//! Every failure in the harness is fatal. The variants below mirror the
//! three stages of a run (discovery, invocation, persistence) plus the
//! optional configuration file.
//!
//! harness 中的每个失败都是致命的。下面的变体对应一次运行的三个阶段
//! （发现、调用、持久化）以及可选的配置文件。

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    /// The test directory is missing, unreadable, or an entry could not be read.
    #[error("failed to read test directory {}", path.display())]
    Discovery {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The interpreter could not be started, waited on, or its output read.
    #[error("failed to run interpreter {}", program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The interpreter ran but did not exit successfully.
    #[error("interpreter failed on {} ({})", case.display(), describe_code(*code))]
    NonZeroExit {
        case: PathBuf,
        code: Option<i32>,
        stderr: String,
    },

    /// The interpreter did not finish within the configured timeout.
    #[error("interpreter timed out on {} after {}s", case.display(), after.as_secs_f64())]
    Timeout { case: PathBuf, after: Duration },

    /// An artifact could not be written.
    #[error("failed to write artifact {}", path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read config file {}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}: {message}", path.display())]
    ConfigParse { path: PathBuf, message: String },
}

impl HarnessError {
    /// The process exit code the harness should terminate with.
    ///
    /// A failing interpreter's own exit code is passed through (clamped to
    /// 1..=255); signal termination and every other error map to 1.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            HarnessError::NonZeroExit {
                code: Some(code), ..
            } => ExitCode::from(clamp_exit_code(*code)),
            _ => ExitCode::FAILURE,
        }
    }
}

/// Maps an arbitrary status code into the range a process can exit with,
/// never returning 0 for a failure.
pub fn clamp_exit_code(code: i32) -> u8 {
    match u8::try_from(code) {
        Ok(0) | Err(_) => 1,
        Ok(code) => code,
    }
}

fn describe_code(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_exit_codes_into_failure_range() {
        assert_eq!(clamp_exit_code(65), 65);
        assert_eq!(clamp_exit_code(255), 255);
        assert_eq!(clamp_exit_code(0), 1);
        assert_eq!(clamp_exit_code(256), 1);
        assert_eq!(clamp_exit_code(-1), 1);
    }

    #[test]
    fn non_zero_exit_message_names_the_case() {
        let err = HarnessError::NonZeroExit {
            case: PathBuf::from("tests/b.lox"),
            code: None,
            stderr: String::new(),
        };
        assert_eq!(
            err.to_string(),
            "interpreter failed on tests/b.lox (terminated by signal)"
        );
    }

    #[test]
    fn spawn_message_covers_failures_after_start() {
        let err = HarnessError::Spawn {
            program: PathBuf::from("./build/cloxpp/cloxpp"),
            source: std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdout closed"),
        };
        assert_eq!(err.to_string(), "failed to run interpreter ./build/cloxpp/cloxpp");
    }
}
