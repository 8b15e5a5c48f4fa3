//! # rename 命令实现
//!
//! 将目录中的 .cgid 文件并发重命名为所选季节的扩展名。
//!
//! ## 功能
//! - 未指定季节时显示交互菜单
//! - 并发重命名（rayon 线程池），逐条输出结果
//! - Ctrl-C 中断：停止启动新任务，已完成的重命名保留
//! - 汇总表格与失败详情
//! - 可选 CSV 报告
//!
//! ## 依赖关系
//! - 使用 `cli/rename.rs` 定义的参数
//! - 使用 `batch/` 引擎
//! - 使用 `utils/output.rs`, `utils/progress.rs`, `utils/report.rs`

use super::resolve_directory;
use crate::batch::{FileLister, RenameSession, ResultAggregator};
use crate::cli::rename::RenameArgs;
use crate::error::{GrassCacheError, Result};
use crate::models::{Season, Summary};
use crate::utils::{output, progress, report};

use console::Term;
use std::sync::atomic::Ordering;
use tabled::{Table, Tabled};

/// 失败详情最多显示条数
const MAX_FAILURES_SHOWN: usize = 10;

/// 汇总表格行
#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Metric")]
    metric: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

/// 执行 rename 命令
pub fn execute(args: RenameArgs) -> Result<()> {
    output::print_header("Seasonal Grass Cache File Renamer");

    let directory = resolve_directory(args.directory)?;
    output::print_info(&format!("Target folder: {}", directory.display()));

    let files = FileLister::new(&directory).list()?;
    if files.is_empty() {
        output::print_warning(&format!(
            "No .cgid files found in directory: {}",
            directory.display()
        ));
        return Ok(());
    }
    output::print_info(&format!("Found {} .cgid files", files.len()));

    let season = match args.season {
        Some(season) => season,
        None => match prompt_season()? {
            Some(season) => season,
            None => {
                output::print_info("Exiting without renaming");
                return Ok(());
            }
        },
    };
    output::print_info(&format!(
        "Selected: {} ({})",
        season.label(),
        season.extension()
    ));

    let session = RenameSession::new(&directory, season.extension()).with_concurrency(args.jobs);
    install_interrupt_handler(&session)?;

    output::print_info(&format!(
        "Processing {} files with {} threads...",
        files.len(),
        session.concurrency()
    ));
    output::print_separator();

    // 进度条绘制在 stderr 上，非终端时改为逐行打印
    let aggregator = if Term::stderr().is_term() {
        let pb = progress::create_progress_bar(files.len() as u64, "Renaming");
        ResultAggregator::new().with_progress(pb)
    } else {
        ResultAggregator::new().with_console()
    };

    let outcomes = session.dispatch(files, &aggregator)?;
    let summary = aggregator.finish();

    if session.is_cancelled() {
        output::print_warning("Operation cancelled by user; completed renames were kept");
    }

    print_summary(&summary);

    let failures = aggregator.failures();
    if !failures.is_empty() {
        output::print_warning("Failed files:");
        for (name, err) in failures.iter().take(MAX_FAILURES_SHOWN) {
            output::print_error(&format!("  {}: {}", name, err));
        }
        if failures.len() > MAX_FAILURES_SHOWN {
            output::print_warning(&format!(
                "  ... and {} more",
                failures.len() - MAX_FAILURES_SHOWN
            ));
        }
    }

    if let Some(path) = &args.report {
        report::write_csv(&outcomes, path)?;
        output::print_success(&format!("Report written to '{}'", path.display()));
    }

    Ok(())
}

/// Ctrl-C 时设置会话的中断标志
fn install_interrupt_handler(session: &RenameSession) -> Result<()> {
    let flag = session.cancel_flag();
    ctrlc::set_handler(move || {
        eprintln!("\nInterrupt received; finishing in-flight renames...");
        flag.store(true, Ordering::SeqCst);
    })
    .map_err(|e| GrassCacheError::Other(format!("Failed to set interrupt handler: {}", e)))
}

/// 交互式选择季节，`0` 返回 `None`
fn prompt_season() -> Result<Option<Season>> {
    let term = Term::stdout();
    if !term.is_term() {
        return Err(GrassCacheError::InvalidArgument(
            "no season given and no terminal to prompt on; use --season".to_string(),
        ));
    }

    let io_err = |e: std::io::Error| GrassCacheError::Other(format!("Failed to read input: {}", e));

    println!();
    println!("Rename files to:");
    output::print_separator();
    for season in Season::ALL {
        println!("  {}. {}", season.menu_key(), season.label());
    }
    println!();
    println!("  0. Exit without renaming");
    output::print_separator();

    loop {
        term.write_str("Enter your choice: ").map_err(io_err)?;
        let choice = term.read_line().map_err(io_err)?;
        let choice = choice.trim();

        if choice == "0" {
            return Ok(None);
        }
        match Season::from_menu_key(choice) {
            Some(season) => return Ok(Some(season)),
            None => output::print_warning("Invalid choice, please enter a valid option."),
        }
    }
}

/// 打印汇总表格
fn print_summary(summary: &Summary) {
    output::print_header("Summary");
    println!("{}", Table::new(summary_rows(summary)));

    if summary.failed == 0 {
        output::print_done(&format!("{} files processed", summary.total));
    } else {
        output::print_warning(&format!(
            "{} of {} files failed",
            summary.failed, summary.total
        ));
    }
}

fn summary_rows(summary: &Summary) -> Vec<SummaryRow> {
    let mut rows = vec![
        SummaryRow {
            metric: "Total files processed",
            value: summary.total.to_string(),
        },
        SummaryRow {
            metric: "Successfully renamed",
            value: summary.renamed.to_string(),
        },
        SummaryRow {
            metric: "Already correct name",
            value: summary.skipped.to_string(),
        },
        SummaryRow {
            metric: "Errors encountered",
            value: summary.failed.to_string(),
        },
        SummaryRow {
            metric: "Processing time",
            value: format!("{:.2} s", summary.elapsed.as_secs_f64()),
        },
    ];

    if let Some(avg) = summary.average_per_file() {
        rows.push(SummaryRow {
            metric: "Average time per file",
            value: format!("{:.1} ms", avg.as_secs_f64() * 1000.0),
        });
    }

    rows
}
