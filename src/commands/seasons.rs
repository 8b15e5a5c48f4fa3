//! # seasons 命令实现
//!
//! 以表格形式列出季节目录（菜单按键、名称、扩展名）。

use crate::error::Result;
use crate::models::Season;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 季节表格行
#[derive(Tabled)]
struct SeasonRow {
    #[tabled(rename = "Key")]
    key: char,
    #[tabled(rename = "Season")]
    name: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Extension")]
    extension: &'static str,
}

/// 执行 seasons 命令
pub fn execute() -> Result<()> {
    output::print_header("Available Seasons");

    let rows: Vec<SeasonRow> = Season::ALL
        .into_iter()
        .map(|s| SeasonRow {
            key: s.menu_key(),
            name: s.label().to_string(),
            value: s.to_string(),
            extension: s.extension(),
        })
        .collect();

    println!("{}", Table::new(&rows));
    Ok(())
}
