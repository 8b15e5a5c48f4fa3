//! # CSV 结果报告
//!
//! 将每个文件的重命名结果导出为 CSV，按原文件名排序。
//!
//! 列: `original_name, target_name, status, error_detail`
//!
//! ## 依赖关系
//! - 被 `commands/rename.rs` 调用
//! - 使用 `csv` + `serde` 序列化 `RenameOutcome`

use crate::error::{GrassCacheError, Result};
use crate::models::RenameOutcome;

use std::path::Path;

/// 导出结果到 CSV 文件
pub fn write_csv(outcomes: &[RenameOutcome], output_path: &Path) -> Result<()> {
    let mut sorted: Vec<&RenameOutcome> = outcomes.iter().collect();
    sorted.sort_by(|a, b| a.original_name.cmp(&b.original_name));

    let mut wtr = csv::Writer::from_path(output_path)?;
    for outcome in sorted {
        wtr.serialize(outcome)?;
    }

    wtr.flush().map_err(|e| GrassCacheError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}
