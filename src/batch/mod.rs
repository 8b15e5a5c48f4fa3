//! # 批量重命名引擎
//!
//! 并发批量重命名的核心：扫描、规划、执行、分发与汇总。
//!
//! ## 数据流
//! ```text
//! FileLister ──> WorkDispatcher ──(每个文件)──> RenamePlanner + RenameExecutor
//!                     │
//!                     └──> ResultAggregator ──> Summary
//! ```
//!
//! ## 依赖关系
//! - 被 `commands/rename.rs`, `commands/preview.rs` 调用
//! - 使用 `rayon` 线程池并发执行
//! - 使用 `indicatif` 显示进度

pub mod aggregator;
pub mod dispatcher;
pub mod executor;
pub mod lister;
pub mod planner;

pub use aggregator::ResultAggregator;
pub use dispatcher::RenameSession;
pub use lister::FileLister;
pub use planner::plan;
