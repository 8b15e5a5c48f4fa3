//! # rename 子命令 CLI 定义
//!
//! 将目录中的 .cgid 文件重命名为指定季节的扩展名
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/rename.rs`

use crate::models::Season;

use clap::Args;
use std::path::PathBuf;

/// rename 子命令参数
#[derive(Args, Debug)]
pub struct RenameArgs {
    /// Directory containing .cgid files (default: current directory)
    #[arg(short, long, env = "GRASSCACHE_DIR")]
    pub directory: Option<PathBuf>,

    /// Target season (prompts interactively when omitted)
    #[arg(short, long, value_enum, env = "GRASSCACHE_SEASON")]
    pub season: Option<Season>,

    /// Number of worker threads (0 = auto: min(32, CPUs + 4))
    #[arg(short, long, default_value_t = 0, env = "GRASSCACHE_JOBS")]
    pub jobs: usize,

    /// Write every outcome to a CSV report
    #[arg(long)]
    pub report: Option<PathBuf>,
}
