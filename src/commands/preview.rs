//! # preview 命令实现
//!
//! 只读预览：列出每个 .cgid 文件计划的目标文件名，
//! 标记无需修改的文件和可能的冲突，不修改文件系统。
//!
//! ## 依赖关系
//! - 使用 `cli/preview.rs` 定义的参数
//! - 使用 `batch/lister.rs`, `batch/planner.rs`
//! - 使用 `tabled` 打印表格

use super::resolve_directory;
use crate::batch::{plan, FileLister};
use crate::cli::preview::PreviewArgs;
use crate::error::Result;
use crate::utils::output;

use std::collections::HashMap;
use std::path::Path;
use tabled::{Table, Tabled};

/// 计划动作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlannedAction {
    Rename,
    Skip,
    /// 目标已存在于目录中
    Exists,
    /// 多个文件规划到同一个目标
    Duplicate,
}

impl std::fmt::Display for PlannedAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlannedAction::Rename => write!(f, "rename"),
            PlannedAction::Skip => write!(f, "skip"),
            PlannedAction::Exists => write!(f, "conflict: target exists"),
            PlannedAction::Duplicate => write!(f, "conflict: shared target"),
        }
    }
}

/// 预览表格行
#[derive(Debug, Tabled)]
struct PreviewRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Action")]
    action: PlannedAction,
}

/// 执行 preview 命令
pub fn execute(args: PreviewArgs) -> Result<()> {
    output::print_header("Rename Preview (dry run)");

    let directory = resolve_directory(args.directory)?;
    let files = FileLister::new(&directory).list()?;

    output::print_info(&format!("Target folder: {}", directory.display()));

    if files.is_empty() {
        output::print_warning(&format!(
            "No .cgid files found in directory: {}",
            directory.display()
        ));
        return Ok(());
    }

    let rows = build_preview(&directory, &files, args.season.extension());

    println!("{}", Table::new(&rows));

    let conflicts = rows
        .iter()
        .filter(|r| matches!(r.action, PlannedAction::Exists | PlannedAction::Duplicate))
        .count();
    let skips = rows.iter().filter(|r| r.action == PlannedAction::Skip).count();

    output::print_separator();
    output::print_info(&format!(
        "{} files, {} to rename, {} already correct, {} potential conflicts",
        rows.len(),
        rows.len() - skips - conflicts,
        skips,
        conflicts
    ));
    if conflicts > 0 {
        output::print_warning("Conflicting files will be reported as failed during rename");
    }

    Ok(())
}

/// 为每个文件计算目标和计划动作
fn build_preview(directory: &Path, files: &[String], extension: &str) -> Vec<PreviewRow> {
    let targets: Vec<String> = files.iter().map(|f| plan(f, extension)).collect();

    let mut target_counts: HashMap<&str, usize> = HashMap::new();
    for (file, target) in files.iter().zip(&targets) {
        if file != target {
            *target_counts.entry(target.as_str()).or_default() += 1;
        }
    }

    files
        .iter()
        .zip(&targets)
        .map(|(file, target)| {
            let action = if file == target {
                PlannedAction::Skip
            } else if directory.join(target).exists() {
                PlannedAction::Exists
            } else if target_counts.get(target.as_str()).copied().unwrap_or(0) > 1 {
                PlannedAction::Duplicate
            } else {
                PlannedAction::Rename
            };
            PreviewRow {
                file: file.clone(),
                target: target.clone(),
                action,
            }
        })
        .collect()
}
