//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `rename`: 并发批量重命名 .cgid 文件
//! - `preview`: 仅显示计划的目标文件名，不修改文件
//! - `seasons`: 列出可选的季节扩展名
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: rename, preview

pub mod preview;
pub mod rename;

use clap::{Parser, Subcommand};

/// grasscache - 季节性草地缓存文件重命名工具
#[derive(Parser, Debug)]
#[command(name = "grasscache")]
#[command(version)]
#[command(about = "Rename seasonal grass cache (.cgid) files in parallel", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rename .cgid files to a seasonal extension
    Rename(rename::RenameArgs),

    /// Show planned renames without touching any file
    Preview(preview::PreviewArgs),

    /// List available seasons and their extensions
    Seasons,
}
