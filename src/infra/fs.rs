//! # File System Operations Module / 文件系统操作模块
//!
//! This module provides the small set of file system helpers the harness
//! needs: writing artifact text and expanding user-supplied paths.
//!
//! 此模块提供 harness 所需的少量文件系统辅助功能：
//! 写入产物文本和展开用户提供的路径。

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Writes `content` to `path`, creating the file or truncating an existing one.
///
/// The handle is owned by this function's scope and closed on every exit
/// path, including a failed write.
///
/// # Arguments
/// * `path` - Target file path
/// * `content` - Text to write
pub fn write_truncating(path: &Path, content: &str) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    file.flush()
}

/// Expands `~` and environment variables in a configured path.
pub fn expand_path(raw: &str) -> Result<PathBuf> {
    let expanded = shellexpand::full(raw).with_context(|| format!("Failed to expand path: {raw}"))?;
    Ok(PathBuf::from(expanded.into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn write_truncating_replaces_longer_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.stdout");
        write_truncating(&path, "a much longer first version\n").unwrap();
        write_truncating(&path, "short\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "short\n");
    }

    #[test]
    fn write_truncating_fails_in_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("a.stdout");
        assert!(write_truncating(&path, "x").is_err());
    }

    #[test]
    fn expand_path_leaves_plain_paths_alone() {
        assert_eq!(
            expand_path("./build/cloxpp/cloxpp").unwrap(),
            PathBuf::from("./build/cloxpp/cloxpp")
        );
    }
}
