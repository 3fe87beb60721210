//! # Commands / 命令
//!
//! The harness has a single command; it lives in `run`.
//!
//! harness 只有一个命令，位于 `run` 中。

pub mod run;
