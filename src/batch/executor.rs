//! # 单文件重命名执行器
//!
//! 对一个文件执行一次重命名并分类结果。
//!
//! ## 流程
//! 1. 通过 `planner::plan` 计算目标文件名
//! 2. 目标与原名不同且目标已存在 -> Failed
//! 3. 目标与原名相同 -> Skipped，不修改文件系统
//! 4. 否则在同一目录内以不覆盖的方式移动 -> Renamed / Failed
//!
//! 第 2 步的存在性检查与第 4 步之间不是原子的，检查只是快速路径。
//! 第 4 步先 `fs::hard_link` 到目标再删除源文件：建立链接时目标已存在
//! 会原子地失败（`AlreadyExists`），所以两个任务竞争同一个目标时，
//! 后到的一方得到 Failed，而不会覆盖先到的文件。
//! 不支持硬链接的文件系统退回 `fs::rename`，此时只有第 2 步的检查。
//!
//! ## 依赖关系
//! - 被 `batch/dispatcher.rs` 的工作线程调用
//! - 使用 `batch/planner.rs`

use super::planner;
use crate::models::{RenameOutcome, RenameTask};

use std::fs;
use std::io::{self, ErrorKind};
use std::path::Path;

/// 执行一个重命名任务，每次调用至多移动一个文件
pub fn execute(task: &RenameTask) -> RenameOutcome {
    let target_name = planner::plan(&task.filename, &task.target_extension);

    if target_name == task.filename {
        return RenameOutcome::skipped(&task.filename, target_name);
    }

    let source_path = task.directory.join(&task.filename);
    let target_path = task.directory.join(&target_name);

    if target_path.exists() {
        let detail = format!("target already exists: {}", target_name);
        return RenameOutcome::failed(&task.filename, target_name, detail);
    }

    match rename_no_clobber(&source_path, &target_path) {
        Ok(()) => RenameOutcome::renamed(&task.filename, target_name),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            let detail = format!("target already exists: {}", target_name);
            RenameOutcome::failed(&task.filename, target_name, detail)
        }
        Err(e) => RenameOutcome::failed(&task.filename, target_name, e.to_string()),
    }
}

/// 不覆盖已有目标的移动：目标已存在时返回 `AlreadyExists`
fn rename_no_clobber(source: &Path, target: &Path) -> io::Result<()> {
    match fs::hard_link(source, target) {
        Ok(()) => {}
        // FAT 等文件系统不支持硬链接
        Err(e) if matches!(e.kind(), ErrorKind::Unsupported | ErrorKind::PermissionDenied) => {
            if target.exists() {
                return Err(io::Error::new(ErrorKind::AlreadyExists, "target exists"));
            }
            return fs::rename(source, target);
        }
        Err(e) => return Err(e),
    }

    if let Err(e) = fs::remove_file(source) {
        // 撤销链接，保持源文件原样
        let _ = fs::remove_file(target);
        return Err(e);
    }
    Ok(())
}
