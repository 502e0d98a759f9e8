//! 主题颜色定义

use ratatui::style::Color;

use super::ThemeColors;

/// 深色主题（默认）
pub fn dark_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(24, 24, 24),         // 深灰背景
        logo: Color::Rgb(0, 255, 136),      // 亮绿色
        highlight: Color::Rgb(0, 255, 136), // 亮绿色
        text: Color::White,
        muted: Color::Rgb(128, 128, 128), // 灰色
        border: Color::Rgb(68, 68, 68),   // 深灰边框
        done: Color::Rgb(0, 255, 136),    // 绿色
        warning: Color::Rgb(255, 165, 0), // 橙色
    }
}

/// 浅色主题
pub fn light_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(250, 250, 250), // 浅灰背景
        logo: Color::Rgb(0, 128, 68),  // 深绿色
        highlight: Color::Rgb(0, 128, 68),
        text: Color::Rgb(30, 30, 30), // 深灰文字
        muted: Color::Rgb(120, 120, 120),
        border: Color::Rgb(200, 200, 200),
        done: Color::Rgb(0, 150, 80),
        warning: Color::Rgb(200, 120, 0),
    }
}

/// Dracula 主题
pub fn dracula_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(40, 42, 54),           // 背景色
        logo: Color::Rgb(189, 147, 249),      // 紫色
        highlight: Color::Rgb(255, 121, 198), // 粉色
        text: Color::Rgb(248, 248, 242),      // 前景色
        muted: Color::Rgb(98, 114, 164),      // 注释色
        border: Color::Rgb(68, 71, 90),       // 边框
        done: Color::Rgb(80, 250, 123),       // 绿色
        warning: Color::Rgb(255, 184, 108),   // 橙色
    }
}

/// Nord 主题
pub fn nord_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(46, 52, 64),           // Polar Night
        logo: Color::Rgb(136, 192, 208),      // Frost 蓝
        highlight: Color::Rgb(136, 192, 208), // Frost 蓝
        text: Color::Rgb(236, 239, 244),      // Snow Storm
        muted: Color::Rgb(97, 110, 136),
        border: Color::Rgb(67, 76, 94),
        done: Color::Rgb(163, 190, 140),    // Aurora 绿
        warning: Color::Rgb(235, 203, 139), // Aurora 黄
    }
}

/// Gruvbox 主题
pub fn gruvbox_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(40, 40, 40),           // bg0
        logo: Color::Rgb(184, 187, 38),       // 亮绿
        highlight: Color::Rgb(250, 189, 47),  // 亮黄
        text: Color::Rgb(235, 219, 178),      // fg1
        muted: Color::Rgb(146, 131, 116),     // gray
        border: Color::Rgb(80, 73, 69),       // bg2
        done: Color::Rgb(184, 187, 38),       // 绿色
        warning: Color::Rgb(254, 128, 25),    // 橙色
    }
}

/// Tokyo Night 主题
pub fn tokyo_night_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(26, 27, 38),           // 背景
        logo: Color::Rgb(125, 207, 255),      // 青色
        highlight: Color::Rgb(187, 154, 247), // 紫色
        text: Color::Rgb(192, 202, 245),      // 前景
        muted: Color::Rgb(86, 95, 137),       // 注释色
        border: Color::Rgb(59, 66, 97),
        done: Color::Rgb(158, 206, 106),    // 绿色
        warning: Color::Rgb(224, 175, 104), // 橙色
    }
}

/// Catppuccin (Mocha) 主题
pub fn catppuccin_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(30, 30, 46),           // base
        logo: Color::Rgb(203, 166, 247),      // mauve
        highlight: Color::Rgb(245, 194, 231), // pink
        text: Color::Rgb(205, 214, 244),      // text
        muted: Color::Rgb(127, 132, 156),     // overlay1
        border: Color::Rgb(69, 71, 90),       // surface1
        done: Color::Rgb(166, 227, 161),      // green
        warning: Color::Rgb(250, 179, 135),   // peach
    }
}
