//! # 统一错误处理模块
//!
//! 定义 grasscache 的所有错误类型，使用 `thiserror` 派生。
//!
//! 只有目录级别的失败会终止整个运行；单个文件的失败
//! （目标已存在、重命名 I/O 错误）不会成为 `Err`，而是记录为
//! `RenameStatus::Failed` 的结果。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// grasscache 统一错误类型
#[derive(Error, Debug)]
pub enum GrassCacheError {
    // ─────────────────────────────────────────────────────────────
    // 目录错误（整个运行失败）
    // ─────────────────────────────────────────────────────────────
    #[error("Cannot read directory: {path}")]
    DirectoryUnreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 报告输出错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 参数与运行环境错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("{0}")]
    Other(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, GrassCacheError>;
