//! # preview 子命令 CLI 定义
//!
//! 只计算目标文件名，不修改任何文件
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/preview.rs`

use crate::models::Season;

use clap::Args;
use std::path::PathBuf;

/// preview 子命令参数
#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// Directory containing .cgid files (default: current directory)
    #[arg(short, long, env = "GRASSCACHE_DIR")]
    pub directory: Option<PathBuf>,

    /// Target season
    #[arg(short, long, value_enum)]
    pub season: Season,
}
