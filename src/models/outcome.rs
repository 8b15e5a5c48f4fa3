//! # 重命名任务与结果
//!
//! 每个输入文件生成一个 `RenameTask`，执行后恰好产生一个
//! `RenameOutcome`，最终汇总为 `Summary`。
//!
//! ## 依赖关系
//! - 被 `batch/` 各模块使用
//! - 被 `utils/report.rs` 序列化为 CSV

use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

/// 单个文件的重命名任务
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameTask {
    /// 文件名（不含目录）
    pub filename: String,
    /// 所在目录
    pub directory: PathBuf,
    /// 目标扩展名，如 `.WIN.cgid`
    pub target_extension: String,
}

impl RenameTask {
    pub fn new(
        filename: impl Into<String>,
        directory: impl Into<PathBuf>,
        target_extension: impl Into<String>,
    ) -> Self {
        RenameTask {
            filename: filename.into(),
            directory: directory.into(),
            target_extension: target_extension.into(),
        }
    }
}

/// 重命名状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RenameStatus {
    /// 已重命名
    Renamed,
    /// 文件名已正确，未做修改
    Skipped,
    /// 失败（目标已存在或文件系统错误）
    Failed,
}

impl std::fmt::Display for RenameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenameStatus::Renamed => write!(f, "renamed"),
            RenameStatus::Skipped => write!(f, "skipped"),
            RenameStatus::Failed => write!(f, "failed"),
        }
    }
}

/// 单个文件的处理结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenameOutcome {
    pub original_name: String,
    pub target_name: String,
    pub status: RenameStatus,
    pub error_detail: Option<String>,
}

impl RenameOutcome {
    pub fn renamed(original_name: impl Into<String>, target_name: impl Into<String>) -> Self {
        RenameOutcome {
            original_name: original_name.into(),
            target_name: target_name.into(),
            status: RenameStatus::Renamed,
            error_detail: None,
        }
    }

    pub fn skipped(original_name: impl Into<String>, target_name: impl Into<String>) -> Self {
        RenameOutcome {
            original_name: original_name.into(),
            target_name: target_name.into(),
            status: RenameStatus::Skipped,
            error_detail: None,
        }
    }

    pub fn failed(
        original_name: impl Into<String>,
        target_name: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        RenameOutcome {
            original_name: original_name.into(),
            target_name: target_name.into(),
            status: RenameStatus::Failed,
            error_detail: Some(detail.into()),
        }
    }
}

/// 批量重命名统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub renamed: usize,
    pub skipped: usize,
    pub failed: usize,
    /// 墙钟耗时
    pub elapsed: Duration,
}

impl Summary {
    /// 计入一个结果
    pub fn count(&mut self, status: RenameStatus) {
        self.total += 1;
        match status {
            RenameStatus::Renamed => self.renamed += 1,
            RenameStatus::Skipped => self.skipped += 1,
            RenameStatus::Failed => self.failed += 1,
        }
    }

    /// 平均每个文件耗时，无文件时为 `None`
    pub fn average_per_file(&self) -> Option<Duration> {
        if self.total == 0 {
            return None;
        }
        Some(Duration::from_secs_f64(
            self.elapsed.as_secs_f64() / self.total as f64,
        ))
    }

    /// `total == renamed + skipped + failed`
    pub fn is_consistent(&self) -> bool {
        self.total == self.renamed + self.skipped + self.failed
    }
}
