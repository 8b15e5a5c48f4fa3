//! # 任务分发器
//!
//! 把文件列表分发到有界线程池并发执行，并按完成顺序收集结果。
//!
//! ## 功能
//! - 每次运行一个 `RenameSession`，不使用进程级全局状态
//! - 基于 rayon 线程池，线程数可配置（1 即完全串行）
//! - 惰性结果流 `OutcomeStream`，全部任务完成后才结束
//! - 可中断：中断后尚未开始的任务不再触碰文件系统，
//!   已完成的重命名不会回滚
//!
//! 结果按完成顺序产出，不保证与输入顺序一致；
//! 需要输入顺序的调用方应按 `original_name` 重新排序。
//!
//! ## 依赖关系
//! - 被 `commands/rename.rs` 调用
//! - 使用 `batch/executor.rs` 执行单个任务
//! - 使用 `batch/aggregator.rs` 汇总结果

use super::aggregator::ResultAggregator;
use super::{executor, planner};
use crate::error::Result;
use crate::models::{RenameOutcome, RenameTask};

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;

/// 默认线程数上限
const MAX_DEFAULT_WORKERS: usize = 32;

/// 默认并发数：`min(32, CPU 数 + 4)`
pub fn default_concurrency() -> usize {
    (num_cpus::get() + 4).min(MAX_DEFAULT_WORKERS)
}

/// 一次批量重命名运行
///
/// 运行开始时创建，汇总完成后丢弃。
pub struct RenameSession {
    /// 目标目录
    directory: PathBuf,
    /// 目标扩展名
    target_extension: String,
    /// 并发线程数
    concurrency: usize,
    /// 中断标志
    cancelled: Arc<AtomicBool>,
}

impl RenameSession {
    /// 创建新的会话，使用默认并发数
    pub fn new(directory: impl Into<PathBuf>, target_extension: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            target_extension: target_extension.into(),
            concurrency: default_concurrency(),
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// 设置并发线程数（0 = 自动）
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = if concurrency == 0 {
            default_concurrency()
        } else {
            concurrency
        };
        self
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// 中断标志，供信号处理器设置
    pub fn cancel_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancelled)
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// 为文件创建任务
    pub fn task(&self, filename: impl Into<String>) -> RenameTask {
        RenameTask::new(filename, &self.directory, &self.target_extension)
    }

    /// 并发执行所有文件，返回按完成顺序产出的惰性结果流
    ///
    /// 文件列表为空时不创建线程池。
    pub fn stream(&self, filenames: Vec<String>) -> Result<OutcomeStream> {
        let (tx, rx) = mpsc::channel();
        let remaining = filenames.len();

        if filenames.is_empty() {
            return Ok(OutcomeStream { receiver: rx, remaining });
        }

        // 线程池被丢弃后，已提交的任务仍会执行完毕
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.concurrency)
            .thread_name(|i| format!("grasscache-worker-{}", i))
            .build()?;

        for filename in filenames {
            let task = self.task(filename);
            let tx = tx.clone();
            let cancelled = Arc::clone(&self.cancelled);

            pool.spawn(move || {
                let outcome = if cancelled.load(Ordering::SeqCst) {
                    let target = planner::plan(&task.filename, &task.target_extension);
                    RenameOutcome::failed(&task.filename, target, "cancelled before start")
                } else {
                    executor::execute(&task)
                };
                // 接收端已丢弃时结果无人消费，忽略即可
                let _ = tx.send(outcome);
            });
        }

        Ok(OutcomeStream { receiver: rx, remaining })
    }

    /// 执行所有文件并等待全部完成，每个结果交给汇总器
    ///
    /// 返回的结果按完成顺序排列。
    pub fn dispatch(
        &self,
        filenames: Vec<String>,
        aggregator: &ResultAggregator,
    ) -> Result<Vec<RenameOutcome>> {
        let outcomes: Vec<RenameOutcome> = self
            .stream(filenames)?
            .inspect(|outcome| aggregator.record(outcome))
            .collect();
        Ok(outcomes)
    }
}

/// 按完成顺序产出结果的一次性迭代器
pub struct OutcomeStream {
    receiver: Receiver<RenameOutcome>,
    /// 尚未收到结果的任务数
    remaining: usize,
}

impl Iterator for OutcomeStream {
    type Item = RenameOutcome;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        match self.receiver.recv() {
            Ok(outcome) => {
                self.remaining -= 1;
                Some(outcome)
            }
            // 所有发送端都已退出（工作线程 panic）
            Err(_) => {
                self.remaining = 0;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::FileLister;
    use crate::models::{RenameStatus, Season, Summary};
    use std::fs::File;
    use tempfile::TempDir;

    fn setup(names: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for name in names {
            File::create(dir.path().join(name)).unwrap();
        }
        dir
    }

    fn run(dir: &TempDir, season: Season, concurrency: usize) -> (Vec<RenameOutcome>, Summary) {
        let files = FileLister::new(dir.path()).list().unwrap();
        let session =
            RenameSession::new(dir.path(), season.extension()).with_concurrency(concurrency);
        let aggregator = ResultAggregator::new();
        let outcomes = session.dispatch(files, &aggregator).unwrap();
        (outcomes, aggregator.finish())
    }

    fn listing(dir: &TempDir) -> Vec<String> {
        FileLister::new(dir.path()).list().unwrap()
    }

    #[test]
    fn test_default_concurrency_bounds() {
        let n = default_concurrency();
        assert!(n >= 1);
        assert!(n <= MAX_DEFAULT_WORKERS);
    }

    #[test]
    fn test_zero_concurrency_means_auto() {
        let session = RenameSession::new("/tmp", ".WIN.cgid").with_concurrency(0);
        assert_eq!(session.concurrency(), default_concurrency());
        let session = RenameSession::new("/tmp", ".WIN.cgid").with_concurrency(1);
        assert_eq!(session.concurrency(), 1);
    }

    #[test]
    fn test_winter_example() {
        let dir = setup(&["grass01.cgid", "grass02.SPR.cgid"]);

        let (mut outcomes, summary) = run(&dir, Season::Winter, 4);
        outcomes.sort_by(|a, b| a.original_name.cmp(&b.original_name));

        assert_eq!(
            outcomes,
            vec![
                RenameOutcome::renamed("grass01.cgid", "grass01.WIN.cgid"),
                RenameOutcome::renamed("grass02.SPR.cgid", "grass02.WIN.cgid"),
            ]
        );
        assert_eq!(summary.renamed, 2);
        assert_eq!(listing(&dir), vec!["grass01.WIN.cgid", "grass02.WIN.cgid"]);
    }

    #[test]
    fn test_empty_directory() {
        let dir = setup(&["notes.txt"]);

        let (outcomes, summary) = run(&dir, Season::Winter, 4);

        assert!(outcomes.is_empty());
        assert_eq!(summary.total, 0);
        assert_eq!(summary.renamed, 0);
        assert_eq!(summary.skipped, 0);
        assert_eq!(summary.failed, 0);
    }

    #[test]
    fn test_second_run_skips_everything() {
        let names = ["a.cgid", "b.SPR.cgid", "c.AUT.cgid", "d.SUM.cgid"];
        let dir = setup(&names);

        let (_, first) = run(&dir, Season::Winter, 3);
        assert_eq!(first.renamed, 4);

        let (_, second) = run(&dir, Season::Winter, 3);
        assert_eq!(second.total, 4);
        assert_eq!(second.skipped, 4);
        assert_eq!(second.renamed, 0);
        assert_eq!(second.failed, 0);
    }

    #[test]
    fn test_collision_one_wins() {
        let dir = setup(&["a.cgid", "a.b.cgid"]);

        let (outcomes, summary) = run(&dir, Season::Winter, 1);

        assert_eq!(summary.renamed, 1);
        assert_eq!(summary.failed, 1);
        let failed: Vec<_> = outcomes
            .iter()
            .filter(|o| o.status == RenameStatus::Failed)
            .collect();
        assert_eq!(
            failed[0].error_detail.as_deref(),
            Some("target already exists: a.WIN.cgid")
        );

        // 失败的那个源文件仍在原处
        let files = listing(&dir);
        assert_eq!(files.len(), 2);
        assert!(files.contains(&"a.WIN.cgid".to_string()));
        assert!(files.contains(&failed[0].original_name));
    }

    #[test]
    fn test_counts_match_input_and_concurrency() {
        let names: Vec<String> = (0..40)
            .map(|i| match i % 4 {
                0 => format!("field{:02}.cgid", i),
                1 => format!("field{:02}.SPR.cgid", i),
                2 => format!("field{:02}.SUM.cgid", i),
                _ => format!("field{:02}.AUT.cgid", i),
            })
            .collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();

        let sequential = setup(&refs);
        let parallel = setup(&refs);

        let (seq_outcomes, seq) = run(&sequential, Season::Spring, 1);
        let (par_outcomes, par) = run(&parallel, Season::Spring, 8);

        for summary in [&seq, &par] {
            assert_eq!(summary.total, 40);
            assert!(summary.is_consistent());
            assert_eq!(summary.skipped, 10);
            assert_eq!(summary.renamed, 30);
        }
        assert_eq!(seq_outcomes.len(), 40);
        assert_eq!(par_outcomes.len(), 40);
        assert_eq!(listing(&sequential), listing(&parallel));
    }

    #[test]
    fn test_parallel_collisions_never_overwrite() {
        let names: Vec<String> = (0..16)
            .flat_map(|i| [format!("g{:02}.cgid", i), format!("g{:02}.SPR.cgid", i)])
            .collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();

        let baseline = setup(&refs);
        let (_, sequential) = run(&baseline, Season::Winter, 1);
        assert_eq!(sequential.renamed, 16);
        assert_eq!(sequential.failed, 16);

        for _ in 0..50 {
            let dir = setup(&refs);
            let (outcomes, summary) = run(&dir, Season::Winter, 8);

            assert_eq!(summary.total, sequential.total);
            assert_eq!(summary.renamed, sequential.renamed);
            assert_eq!(summary.failed, sequential.failed);
            assert_eq!(summary.skipped, sequential.skipped);

            for i in 0..16 {
                let target = format!("g{:02}.WIN.cgid", i);
                let pair: Vec<_> = outcomes.iter().filter(|o| o.target_name == target).collect();
                assert_eq!(pair.len(), 2);
                let renamed = pair
                    .iter()
                    .filter(|o| o.status == RenameStatus::Renamed)
                    .count();
                assert_eq!(renamed, 1, "pair {} renamed {} times", i, renamed);
            }

            // 每对文件一个改名成功、一个留在原处，没有文件丢失
            assert_eq!(listing(&dir).len(), 32);
        }
    }

    #[test]
    fn test_stream_yields_one_outcome_per_file() {
        let dir = setup(&["x.cgid", "y.cgid", "z.cgid"]);
        let session = RenameSession::new(dir.path(), ".AUT.cgid").with_concurrency(2);

        let stream = session.stream(listing(&dir)).unwrap();
        assert_eq!(stream.size_hint(), (0, Some(3)));

        let mut names: Vec<String> = stream.map(|o| o.original_name).collect();
        names.sort();
        assert_eq!(names, vec!["x.cgid", "y.cgid", "z.cgid"]);
    }

    #[test]
    fn test_cancelled_session_touches_nothing() {
        let dir = setup(&["p.cgid", "q.cgid"]);
        let session = RenameSession::new(dir.path(), ".WIN.cgid").with_concurrency(2);
        session.cancel_flag().store(true, Ordering::SeqCst);

        let aggregator = ResultAggregator::new();
        let outcomes = session.dispatch(listing(&dir), &aggregator).unwrap();

        assert_eq!(outcomes.len(), 2);
        for outcome in &outcomes {
            assert_eq!(outcome.status, RenameStatus::Failed);
            assert_eq!(outcome.error_detail.as_deref(), Some("cancelled before start"));
        }
        assert_eq!(aggregator.finish().failed, 2);
        assert_eq!(listing(&dir), vec!["p.cgid", "q.cgid"]);
    }
}
