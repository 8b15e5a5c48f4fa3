//! # 美化输出工具
//!
//! 提供统一的终端输出样式。
//!
//! ## 依赖关系
//! - 被 `batch/aggregator.rs` 和所有 `commands/` 模块使用
//! - 使用 `colored` crate

use crate::models::{RenameOutcome, RenameStatus};

use colored::Colorize;

/// 打印成功消息
pub fn print_success(msg: &str) {
    println!("{} {}", "[OK]".green().bold(), msg);
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    println!("{} {}", "[DONE]".green().bold(), msg);
}

/// 格式化单个重命名结果（一行）
pub fn format_outcome(outcome: &RenameOutcome) -> String {
    match outcome.status {
        RenameStatus::Renamed => format!(
            "{} {} {} {}",
            "[OK]".green().bold(),
            outcome.original_name.dimmed(),
            "->".cyan(),
            outcome.target_name
        ),
        RenameStatus::Skipped => format!(
            "{} {} (already correct)",
            "[SKIP]".dimmed(),
            outcome.original_name
        ),
        RenameStatus::Failed => format!(
            "{} {}: {}",
            "[ERR]".red().bold(),
            outcome.original_name,
            outcome.error_detail.as_deref().unwrap_or("unknown error")
        ),
    }
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}

/// 打印分隔线
pub fn print_separator() {
    println!("{}", "─".repeat(60).dimmed());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_outcome_mentions_names() {
        colored::control::set_override(false);

        let line = format_outcome(&RenameOutcome::renamed("a.cgid", "a.WIN.cgid"));
        assert_eq!(line, "[OK] a.cgid -> a.WIN.cgid");

        let line = format_outcome(&RenameOutcome::skipped("a.WIN.cgid", "a.WIN.cgid"));
        assert_eq!(line, "[SKIP] a.WIN.cgid (already correct)");

        let line = format_outcome(&RenameOutcome::failed(
            "a.b.cgid",
            "a.WIN.cgid",
            "target already exists: a.WIN.cgid",
        ));
        assert_eq!(line, "[ERR] a.b.cgid: target already exists: a.WIN.cgid");
    }
}
