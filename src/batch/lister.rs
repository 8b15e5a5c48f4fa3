//! # 文件扫描器
//!
//! 非递归扫描目录，收集匹配 `*.cgid` 的文件名。
//!
//! ## 功能
//! - glob 模式匹配（以 `.` 开头的隐藏文件不参与匹配）
//! - 只返回普通文件，忽略子目录
//! - 按字典序排序，保证处理顺序可复现
//!
//! ## 依赖关系
//! - 被 `commands/rename.rs`, `commands/preview.rs` 调用
//! - 使用 `glob::Pattern` 匹配文件名

use crate::error::{GrassCacheError, Result};
use crate::models::SOURCE_PATTERN;

use glob::{MatchOptions, Pattern};
use std::fs;
use std::path::PathBuf;

/// 文件扫描器
pub struct FileLister {
    /// 目标目录
    directory: PathBuf,
}

impl FileLister {
    /// 创建新的扫描器
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// 列出所有匹配的文件名（字典序升序）
    ///
    /// 目录无法读取时返回 `DirectoryUnreadable`；没有匹配文件时返回空列表。
    pub fn list(&self) -> Result<Vec<String>> {
        let pattern = Pattern::new(SOURCE_PATTERN).map_err(|e| {
            GrassCacheError::Other(format!("Invalid pattern '{}': {}", SOURCE_PATTERN, e))
        })?;

        let unreadable = |source| GrassCacheError::DirectoryUnreadable {
            path: self.directory.display().to_string(),
            source,
        };

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.directory).map_err(unreadable)? {
            let entry = entry.map_err(unreadable)?;

            // 非 UTF-8 文件名无法按字符串规划，直接忽略
            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(_) => continue,
            };

            if Self::matches(&pattern, &name) && entry.path().is_file() {
                names.push(name);
            }
        }

        names.sort();
        Ok(names)
    }

    fn matches(pattern: &Pattern, name: &str) -> bool {
        let options = MatchOptions {
            case_sensitive: true,
            require_literal_separator: true,
            require_literal_leading_dot: true,
        };
        pattern.matches_with(name, options)
    }
}
