//! # Reporting Module / 报告模块
//!
//! This module handles everything the harness prints to the console:
//! per-case progress, the dry-run stderr dump and the closing run summary.
//! It does not grade results; the harness only records them.
//!
//! 此模块处理 harness 打印到控制台的所有内容：
//! 每个用例的进度、试运行的 stderr 输出以及最后的运行摘要。
//! 它不对结果进行评判；harness 只负责记录。

pub mod console;

// Re-export common reporting functions
pub use console::{
    print_artifact_written, print_case_started, print_dry_run_output, print_failure_details,
    print_run_header, print_summary,
};
