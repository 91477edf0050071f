mod colors;

use ratatui::style::Color;

pub use colors::*;

/// 主题类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
    Nord,
}

impl Theme {
    /// 从名称创建主题（用于配置加载）
    pub fn from_name(name: &str) -> Self {
        match name {
            "Light" => Theme::Light,
            "Nord" => Theme::Nord,
            _ => Theme::Dark, // 默认 Dark
        }
    }

    /// 主题颜色方案
    pub fn colors(&self) -> ThemeColors {
        match self {
            Theme::Dark => dark_colors(),
            Theme::Light => light_colors(),
            Theme::Nord => nord_colors(),
        }
    }
}

/// 主题颜色方案
#[derive(Debug, Clone, Copy)]
pub struct ThemeColors {
    /// 主背景色
    pub bg: Color,
    /// 次级背景色（选中行等）
    pub bg_secondary: Color,
    /// 高亮色（选中项、快捷键等）
    pub highlight: Color,
    /// 普通文字
    pub text: Color,
    /// 次要文字（灰色）
    pub muted: Color,
    /// 边框颜色
    pub border: Color,
    /// 已完成任务
    pub done: Color,
    /// 已过期的截止日期
    pub overdue: Color,
    /// 未过期的截止日期
    pub due: Color,
    /// 错误提示
    pub error: Color,
}
