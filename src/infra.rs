//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for the Lox harness,
//! including interpreter process invocation, file system writes and i18n support.
//!
//! 此模块为 Lox harness 提供基础设施服务，
//! 包括解释器进程调用、文件系统写入和国际化支持。

pub mod command;
pub mod fs;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
