//! # Test Case Discovery Module / 测试用例发现模块
//!
//! Finds the `.lox` files directly inside a directory. Discovery is lazy:
//! the directory is opened up front, entries are read as the orchestrator
//! asks for them.
//!
//! 查找目录中直接包含的 `.lox` 文件。发现过程是惰性的：
//! 目录会预先打开，条目在编排器请求时才被读取。

use std::ffi::OsStr;
use std::fs::{self, ReadDir};
use std::path::{Path, PathBuf};

use crate::core::error::HarnessError;
use crate::core::models::TestCase;

/// File extension of a test case.
pub const TEST_CASE_EXTENSION: &str = "lox";

/// Opens `dir` and returns an iterator over its `*.lox` children.
///
/// The walk is not recursive and follows the file system's enumeration
/// order, which is not sorted. Directories are skipped even if their name
/// ends in `.lox`.
///
/// # Errors
/// Returns [`HarnessError::Discovery`] if the directory cannot be opened.
/// Entries that fail to read are yielded as `Err` items.
///
/// 打开 `dir` 并返回其 `*.lox` 子项的迭代器。
/// 不递归，顺序为文件系统的枚举顺序（未排序）。
pub fn discover(dir: &Path) -> Result<Discovery, HarnessError> {
    let entries = fs::read_dir(dir).map_err(|source| HarnessError::Discovery {
        path: dir.to_path_buf(),
        source,
    })?;
    tracing::debug!(dir = %dir.display(), "scanning for test cases");
    Ok(Discovery {
        dir: dir.to_path_buf(),
        entries,
    })
}

/// Collects every test case in `dir` and sorts them by path.
pub fn discover_sorted(dir: &Path) -> Result<Vec<TestCase>, HarnessError> {
    let mut cases = discover(dir)?.collect::<Result<Vec<_>, _>>()?;
    cases.sort();
    Ok(cases)
}

/// Single-pass iterator returned by [`discover`].
#[derive(Debug)]
pub struct Discovery {
    dir: PathBuf,
    entries: ReadDir,
}

impl Iterator for Discovery {
    type Item = Result<TestCase, HarnessError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.entries.next()? {
                Ok(entry) => entry,
                Err(source) => {
                    return Some(Err(HarnessError::Discovery {
                        path: self.dir.clone(),
                        source,
                    }));
                }
            };

            let path = entry.path();
            if !is_test_case_name(&path) {
                continue;
            }
            // Entries whose type cannot be read are kept.
            if entry.file_type().is_ok_and(|ty| ty.is_dir()) {
                continue;
            }
            if let Some(case) = TestCase::from_path(path) {
                return Some(Ok(case));
            }
        }
    }
}

/// `true` if the file name matches `*.lox`.
pub fn is_test_case_name(path: &Path) -> bool {
    path.extension() == Some(OsStr::new(TEST_CASE_EXTENSION))
}
