//! # 数据模型模块
//!
//! 定义季节目录以及重命名任务、结果和统计的数据模型。
//!
//! ## 依赖关系
//! - 被 `batch/` 和 `commands/` 使用
//! - 子模块: season, outcome

pub mod outcome;
pub mod season;

pub use outcome::{RenameOutcome, RenameStatus, RenameTask, Summary};
pub use season::{Season, SOURCE_PATTERN};
