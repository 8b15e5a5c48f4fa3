//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `batch/`, `models/`, `utils/`
//! - 子模块: rename, preview, seasons

pub mod preview;
pub mod rename;
pub mod seasons;

use crate::cli::Commands;
use crate::error::{GrassCacheError, Result};

use std::env;
use std::fs;
use std::path::PathBuf;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Rename(args) => rename::execute(args),
        Commands::Preview(args) => preview::execute(args),
        Commands::Seasons => seasons::execute(),
    }
}

/// 解析目标目录：未指定时使用当前目录，返回绝对路径
pub(crate) fn resolve_directory(directory: Option<PathBuf>) -> Result<PathBuf> {
    let directory = match directory {
        Some(dir) => dir,
        None => env::current_dir().map_err(|e| GrassCacheError::DirectoryUnreadable {
            path: ".".to_string(),
            source: e,
        })?,
    };

    if !directory.is_dir() {
        return Err(GrassCacheError::DirectoryNotFound {
            path: directory.display().to_string(),
        });
    }

    fs::canonicalize(&directory).map_err(|e| GrassCacheError::DirectoryUnreadable {
        path: directory.display().to_string(),
        source: e,
    })
}
