//! # 结果汇总器
//!
//! 汇总各工作线程产生的 `RenameOutcome`，统计数量和耗时。
//!
//! ## 功能
//! - 单一互斥锁保护统计和失败列表
//! - 在同一锁内逐条输出进度，多线程输出的行不会交错
//! - 可选 `indicatif` 进度条
//!
//! ## 依赖关系
//! - 被 `batch/dispatcher.rs`, `commands/rename.rs` 使用
//! - 使用 `utils/output.rs` 格式化结果行

use crate::models::{RenameOutcome, RenameStatus, Summary};
use crate::utils::output;

use indicatif::ProgressBar;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

/// 逐条结果的输出方式
enum Reporter {
    /// 不输出
    Silent,
    /// 直接打印到终端
    Console,
    /// 通过进度条打印（不打断进度条）
    Progress(ProgressBar),
}

/// 锁内状态
#[derive(Default)]
struct State {
    summary: Summary,
    /// 失败详情 (文件名, 原因)
    failures: Vec<(String, String)>,
    /// 定稿后的耗时
    finished: Option<Duration>,
}

/// 结果汇总器
pub struct ResultAggregator {
    state: Mutex<State>,
    started: Instant,
    reporter: Reporter,
}

impl Default for ResultAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultAggregator {
    /// 创建静默汇总器，计时从此刻开始
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State::default()),
            started: Instant::now(),
            reporter: Reporter::Silent,
        }
    }

    /// 每条结果打印一行
    pub fn with_console(mut self) -> Self {
        self.reporter = Reporter::Console;
        self
    }

    /// 每条结果打印一行并推进进度条
    pub fn with_progress(mut self, pb: ProgressBar) -> Self {
        self.reporter = Reporter::Progress(pb);
        self
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        // 某个工作线程 panic 不应让统计丢失
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// 记录一个结果
    pub fn record(&self, outcome: &RenameOutcome) {
        let mut state = self.lock();

        state.summary.count(outcome.status);
        if outcome.status == RenameStatus::Failed {
            let detail = outcome.error_detail.clone().unwrap_or_default();
            state.failures.push((outcome.original_name.clone(), detail));
        }

        match &self.reporter {
            Reporter::Silent => {}
            Reporter::Console => println!("{}", output::format_outcome(outcome)),
            Reporter::Progress(pb) => {
                pb.println(output::format_outcome(outcome));
                pb.inc(1);
            }
        }
    }

    /// 当前统计
    pub fn snapshot(&self) -> Summary {
        let state = self.lock();
        let mut summary = state.summary;
        summary.elapsed = state.finished.unwrap_or_else(|| self.started.elapsed());
        summary
    }

    /// 定稿：冻结耗时并关闭进度条
    pub fn finish(&self) -> Summary {
        {
            let mut state = self.lock();
            if state.finished.is_none() {
                state.finished = Some(self.started.elapsed());
            }
        }
        if let Reporter::Progress(pb) = &self.reporter {
            pb.finish_and_clear();
        }
        let summary = self.snapshot();
        debug_assert!(summary.is_consistent());
        summary
    }

    /// 失败详情 (文件名, 原因)，按到达顺序
    pub fn failures(&self) -> Vec<(String, String)> {
        self.lock().failures.clone()
    }
}
