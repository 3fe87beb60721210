//! # Core Module / 核心模块
//!
//! This module contains the core functionality of the Lox harness,
//! including data models, configuration, test-case discovery, artifact
//! naming and the orchestration loop.
//!
//! 此模块包含 Lox harness 的核心功能，
//! 包括数据模型、配置、测试用例发现、产物命名和编排循环。

pub mod artifacts;
pub mod config;
pub mod discovery;
pub mod error;
pub mod execution;
pub mod models;

// Re-exports
pub use artifacts::NamingScheme;
pub use config::{HarnessConfig, RunConfiguration};
pub use discovery::discover;
pub use error::HarnessError;
pub use execution::Orchestrator;
pub use models::{ExecutionResult, StreamKind, TestCase};
