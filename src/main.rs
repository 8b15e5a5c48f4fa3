//! # grasscache - 季节性草地缓存文件重命名工具
//!
//! 将目录中的 `*.cgid` 草地缓存文件并发重命名为季节扩展名
//! （`.WIN.cgid` / `.SPR.cgid` / `.SUM.cgid` / `.AUT.cgid`），
//! 或去除季节标记恢复为 `.cgid`。
//!
//! ## 子命令
//! - `rename`  - 并发批量重命名
//! - `preview` - 只读预览计划的目标文件名
//! - `seasons` - 列出季节目录
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/     (并发重命名引擎)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod models;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
