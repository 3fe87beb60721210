//! # Configuration Module / 配置模块
//!
//! Two layers: [`HarnessConfig`] is the optional TOML file, [`RunConfiguration`]
//! is the resolved, immutable settings for one run. Command-line flags are
//! merged on top of the file by [`RunConfiguration::resolve`].
//!
//! 两层结构：[`HarnessConfig`] 是可选的 TOML 文件，[`RunConfiguration`]
//! 是单次运行解析后的不可变设置。命令行参数通过 [`RunConfiguration::resolve`]
//! 覆盖在文件配置之上。

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::artifacts::NamingScheme;
use crate::core::error::HarnessError;

/// Interpreter used when neither the config file nor the command line names one.
pub const DEFAULT_INTERPRETER: &str = "./build/cloxpp/cloxpp";

/// Pause between test cases in a dry run.
pub const DEFAULT_PACING_MS: u64 = 500;

/// Settings loaded from an optional TOML file.
/// Every field has a default, so an empty file is valid.
///
/// 从可选 TOML 文件加载的设置。每个字段都有默认值，因此空文件也是有效的。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HarnessConfig {
    /// The language for the harness's output messages (e.g., "en", "zh-CN").
    /// Detected from the system when not specified.
    ///
    /// harness 输出消息的语言（例如 "en", "zh-CN"）。未指定时从系统检测。
    #[serde(default)]
    pub language: Option<String>,

    /// Interpreter executable. `~` and environment variables are expanded.
    /// 解释器可执行文件。会展开 `~` 和环境变量。
    #[serde(default = "default_interpreter")]
    pub interpreter: String,

    /// Where artifacts are written. Defaults to the scanned directory.
    /// 产物写入的位置。默认为被扫描的目录。
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// Artifact naming scheme / 产物命名方案
    #[serde(default)]
    pub naming: NamingScheme,

    /// Dry-run pause between test cases, in milliseconds.
    /// 试运行中测试用例之间的暂停时间（毫秒）。
    #[serde(default = "default_pacing_ms")]
    pub pacing_ms: u64,

    /// Optional per-invocation timeout in seconds. No timeout when absent.
    /// 可选的单次调用超时时间（秒）。缺省时不设超时。
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Run test cases sorted by path instead of directory order.
    /// 按路径排序运行测试用例，而不是按目录顺序。
    #[serde(default)]
    pub sort: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            language: None,
            interpreter: default_interpreter(),
            output_dir: None,
            naming: NamingScheme::default(),
            pacing_ms: DEFAULT_PACING_MS,
            timeout_secs: None,
            sort: false,
        }
    }
}

fn default_interpreter() -> String {
    DEFAULT_INTERPRETER.to_string()
}

fn default_pacing_ms() -> u64 {
    DEFAULT_PACING_MS
}

impl HarnessConfig {
    /// Reads and parses a config file.
    pub fn load(path: &Path) -> Result<Self, HarnessError> {
        let content = fs::read_to_string(path).map_err(|source| HarnessError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|message| HarnessError::ConfigParse {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Parses config file content.
    ///
    /// A `timeout_secs` of 0 is rejected, matching the `--timeout` flag.
    pub fn parse(content: &str) -> Result<Self, String> {
        let config: Self = toml::from_str(content).map_err(|e| e.to_string())?;
        if config.timeout_secs == Some(0) {
            return Err("timeout_secs must be at least 1".to_string());
        }
        Ok(config)
    }
}

/// Values given on the command line. `None` means "not given".
/// 命令行上给出的值。`None` 表示未给出。
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub dry_run: bool,
    pub interpreter: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub naming: Option<NamingScheme>,
    pub pacing_ms: Option<u64>,
    pub timeout_secs: Option<u64>,
    pub sort: bool,
}

/// Everything one run needs, fixed for the duration of the run.
///
/// 单次运行所需的全部设置，在运行期间保持不变。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfiguration {
    /// Directory scanned for `*.lox` files / 扫描 `*.lox` 文件的目录
    pub path: PathBuf,
    /// Print stderr instead of writing artifacts / 打印 stderr 而不写入产物
    pub dry_run: bool,
    /// Interpreter executable / 解释器可执行文件
    pub interpreter: PathBuf,
    /// Artifact directory / 产物目录
    pub output_dir: PathBuf,
    pub naming: NamingScheme,
    /// Pause after each dry-run case except the last / 试运行中每个用例后的暂停（最后一个除外）
    pub pacing: Duration,
    pub timeout: Option<Duration>,
    pub sort: bool,
}

impl RunConfiguration {
    /// Defaults for scanning `path`: stem naming, artifacts next to the
    /// sources, default interpreter, no timeout.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            output_dir: path.clone(),
            path,
            dry_run: false,
            interpreter: PathBuf::from(DEFAULT_INTERPRETER),
            naming: NamingScheme::default(),
            pacing: Duration::from_millis(DEFAULT_PACING_MS),
            timeout: None,
            sort: false,
        }
    }

    /// Merges the config file and command-line values. Command-line values win.
    pub fn resolve(
        path: PathBuf,
        file: &HarnessConfig,
        cli: CliOverrides,
    ) -> anyhow::Result<Self> {
        let interpreter = match cli.interpreter {
            Some(interpreter) => interpreter,
            None => crate::infra::fs::expand_path(&file.interpreter)?,
        };
        let output_dir = cli
            .output_dir
            .or_else(|| file.output_dir.clone())
            .unwrap_or_else(|| path.clone());

        Ok(Self {
            path,
            dry_run: cli.dry_run,
            interpreter,
            output_dir,
            naming: cli.naming.unwrap_or(file.naming),
            pacing: Duration::from_millis(cli.pacing_ms.unwrap_or(file.pacing_ms)),
            timeout: cli.timeout_secs.or(file.timeout_secs).map(Duration::from_secs),
            sort: cli.sort || file.sort,
        })
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_interpreter(mut self, interpreter: impl Into<PathBuf>) -> Self {
        self.interpreter = interpreter.into();
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_naming(mut self, naming: NamingScheme) -> Self {
        self.naming = naming;
        self
    }

    pub fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}
