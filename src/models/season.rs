//! # 季节目录
//!
//! 草地缓存文件的季节标记扩展名。这些字符串常量是与游戏资源
//! 生态的约定，本工具只负责使用，不负责定义。
//!
//! ## 依赖关系
//! - 被 `cli/` 和 `commands/` 使用
//! - 引擎 (`batch/`) 只把目标扩展名当作不透明字符串

use clap::ValueEnum;

/// 源文件扩展名（草地缓存标记）
pub const SOURCE_EXTENSION: &str = ".cgid";

/// 源文件匹配模式
pub const SOURCE_PATTERN: &str = "*.cgid";

/// 目标季节
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum Season {
    /// Winter (.WIN.cgid)
    Winter,
    /// Spring (.SPR.cgid)
    Spring,
    /// Summer (.SUM.cgid)
    Summer,
    /// Autumn (.AUT.cgid)
    Autumn,
    /// Remove seasonal extensions (.cgid)
    Strip,
}

impl Season {
    /// 菜单顺序
    pub const ALL: [Season; 5] = [
        Season::Winter,
        Season::Spring,
        Season::Summer,
        Season::Autumn,
        Season::Strip,
    ];

    /// 目标扩展名
    pub fn extension(self) -> &'static str {
        match self {
            Season::Winter => ".WIN.cgid",
            Season::Spring => ".SPR.cgid",
            Season::Summer => ".SUM.cgid",
            Season::Autumn => ".AUT.cgid",
            Season::Strip => SOURCE_EXTENSION,
        }
    }

    /// 菜单显示名称
    pub fn label(self) -> &'static str {
        match self {
            Season::Winter => "Winter",
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
            Season::Strip => "Remove seasonal extensions",
        }
    }

    /// 交互菜单按键（7 为去除季节标记，沿用旧版布局）
    pub fn menu_key(self) -> char {
        match self {
            Season::Winter => '1',
            Season::Spring => '2',
            Season::Summer => '3',
            Season::Autumn => '4',
            Season::Strip => '7',
        }
    }

    /// 根据菜单按键查找季节
    pub fn from_menu_key(key: &str) -> Option<Season> {
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Season::ALL.into_iter().find(|s| s.menu_key() == c),
            _ => None,
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Season::Winter => write!(f, "winter"),
            Season::Spring => write!(f, "spring"),
            Season::Summer => write!(f, "summer"),
            Season::Autumn => write!(f, "autumn"),
            Season::Strip => write!(f, "strip"),
        }
    }
}
