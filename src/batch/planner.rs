//! # 目标文件名规划
//!
//! 纯函数，无 I/O：取文件名第一个 `.` 之前的部分作为基名，
//! 拼接目标扩展名。
//!
//! 注意：含多个 `.` 的文件名会被截断到第一段
//! （`grass.lod0.cgid` -> `grass`），这是固定行为。

/// 提取基名（第一个 `.` 之前的部分，没有 `.` 时为整个文件名）
pub fn base_name(filename: &str) -> &str {
    match filename.find('.') {
        Some(idx) => &filename[..idx],
        None => filename,
    }
}

/// 计算目标文件名
pub fn plan(filename: &str, target_extension: &str) -> String {
    format!("{}{}", base_name(filename), target_extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_plain_marker() {
        assert_eq!(plan("grass01.cgid", ".WIN.cgid"), "grass01.WIN.cgid");
    }

    #[test]
    fn test_plan_replaces_existing_season() {
        assert_eq!(plan("grass02.SPR.cgid", ".WIN.cgid"), "grass02.WIN.cgid");
        assert_eq!(plan("grass02.SPR.cgid", ".cgid"), "grass02.cgid");
    }

    #[test]
    fn test_plan_collapses_at_first_dot() {
        assert_eq!(plan("grass.lod0.cgid", ".SUM.cgid"), "grass.SUM.cgid");
        assert_eq!(plan("a.b.cgid", ".WIN.cgid"), plan("a.cgid", ".WIN.cgid"));
    }

    #[test]
    fn test_plan_without_dot() {
        assert_eq!(base_name("grass"), "grass");
        assert_eq!(plan("grass", ".AUT.cgid"), "grass.AUT.cgid");
    }

    #[test]
    fn test_plan_is_deterministic() {
        let first = plan("tundra03.AUT.cgid", ".SPR.cgid");
        let second = plan("tundra03.AUT.cgid", ".SPR.cgid");
        assert_eq!(first, second);
    }
}
