//! 主题颜色定义

use ratatui::style::Color;

use super::ThemeColors;

/// 深色主题（默认）
pub fn dark_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(24, 24, 24),           // 深灰背景
        bg_secondary: Color::Rgb(48, 48, 48), // 选中行背景
        highlight: Color::Rgb(0, 255, 136),   // 亮绿色
        text: Color::White,
        muted: Color::Rgb(128, 128, 128), // 灰色
        border: Color::Rgb(68, 68, 68),   // 深灰边框
        done: Color::Rgb(100, 100, 100),
        overdue: Color::Rgb(255, 85, 85),   // 红色
        due: Color::Rgb(255, 213, 79),      // 黄色
        error: Color::Rgb(255, 85, 85),
    }
}

/// 浅色主题
pub fn light_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(250, 250, 250),
        bg_secondary: Color::Rgb(230, 230, 230),
        highlight: Color::Rgb(0, 128, 68), // 深绿色
        text: Color::Rgb(30, 30, 30),
        muted: Color::Rgb(120, 120, 120),
        border: Color::Rgb(200, 200, 200),
        done: Color::Rgb(160, 160, 160),
        overdue: Color::Rgb(200, 50, 50),
        due: Color::Rgb(200, 120, 0), // 橙色
        error: Color::Rgb(200, 50, 50),
    }
}

/// Nord 主题
pub fn nord_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(46, 52, 64),           // polar night
        bg_secondary: Color::Rgb(59, 66, 82), // polar night lighter
        highlight: Color::Rgb(136, 192, 208), // frost
        text: Color::Rgb(236, 239, 244),      // snow storm
        muted: Color::Rgb(76, 86, 106),
        border: Color::Rgb(59, 66, 82),
        done: Color::Rgb(76, 86, 106),
        overdue: Color::Rgb(191, 97, 106), // aurora red
        due: Color::Rgb(235, 203, 139),    // aurora yellow
        error: Color::Rgb(191, 97, 106),
    }
}
