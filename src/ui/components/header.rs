use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::SortMode;
use crate::theme::ThemeColors;

/// Header 总高度：1 (上边框) + 1 (标题行)
pub const HEADER_HEIGHT: u16 = 2;

/// 任务计数
pub struct Counts {
    pub total: usize,
    pub completed: usize,
    pub overdue: usize,
}

/// 渲染顶部区域（标题 + 计数 + 排序方式）
pub fn render(
    frame: &mut Frame,
    area: Rect,
    counts: Counts,
    sort_mode: SortMode,
    colors: &ThemeColors,
) {
    // 外框
    let block = Block::default()
        .borders(Borders::TOP | Borders::LEFT | Borders::RIGHT)
        .border_style(Style::default().fg(colors.border));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let [left_area, right_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(24)]).areas(inner_area);

    let mut spans = vec![
        Span::styled(
            " Tasks",
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}/{} done", counts.completed, counts.total),
            Style::default().fg(colors.muted),
        ),
    ];
    if counts.overdue > 0 {
        spans.push(Span::styled(
            format!("  {} overdue", counts.overdue),
            Style::default().fg(colors.overdue),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), left_area);

    let right = Line::from(vec![
        Span::styled("sort: ", Style::default().fg(colors.muted)),
        Span::styled(sort_mode.label(), Style::default().fg(colors.text)),
        Span::raw(" "),
    ])
    .right_aligned();
    frame.render_widget(Paragraph::new(right), right_area);
}
