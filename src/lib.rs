//! # Lox Harness Library / Lox Harness 库
//!
//! This library provides the core functionality for the Lox harness tool,
//! a golden-output recorder for a Lox interpreter under development. It
//! discovers `.lox` test cases, runs each one through the interpreter and
//! stores the captured output streams as artifacts.
//!
//! 此库为 Lox harness 工具提供核心功能，
//! 这是一个为开发中的 Lox 解释器记录黄金输出的工具。它会发现 `.lox` 测试用例，
//! 通过解释器逐个运行，并将捕获的输出流保存为产物文件。
//!
//! ## Modules / 模块
//!
//! - `core` - Data models, discovery, artifact naming and the orchestrator
//! - `infra` - Infrastructure services like process invocation and file writes
//! - `reporting` - Console output for progress, dry runs and the run summary
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 数据模型、发现、产物命名和编排器
//! - `infra` - 基础设施服务，如进程调用和文件写入
//! - `reporting` - 进度、试运行和运行摘要的控制台输出
//! - `cli` - 命令行接口和命令

pub mod cli;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use crate::core::config;
pub use crate::core::error::HarnessError;
pub use crate::core::execution;
pub use crate::core::models;

/// Picks the UI language for the application.
///
/// An explicitly requested language wins if it is available. Otherwise the
/// system locale is tried in full (e.g. "zh-CN"), then by its language part
/// (e.g. "en" from "en-US"), and finally "en" is used.
///
/// Returns the locale that was set.
pub fn init_locale(requested: Option<&str>) -> String {
    let available_locales = rust_i18n::available_locales!();

    if let Some(lang) = requested {
        if available_locales.contains(&lang) {
            rust_i18n::set_locale(lang);
            return lang.to_string();
        }
    }

    let locale = sys_locale::get_locale().unwrap_or_else(|| "en".to_string());
    let lang = if available_locales.contains(&locale.as_str()) {
        locale.as_str()
    } else {
        locale
            .split('-')
            .next()
            .filter(|lang_code| available_locales.contains(lang_code))
            .unwrap_or("en")
    };

    rust_i18n::set_locale(lang);
    lang.to_string()
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
