//! New Task 弹窗组件

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{InputField, NewTaskInput};
use crate::operations::list::is_valid_date;
use crate::theme::ThemeColors;

/// 渲染 New Task 弹窗
pub fn render(frame: &mut Frame, input: &NewTaskInput, colors: &ThemeColors) {
    let area = frame.area();

    // 计算弹窗尺寸
    let popup_width = 60u16.min(area.width.saturating_sub(4));
    let popup_height = 9u16.min(area.height);

    // 居中显示
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    // 清除背景
    frame.render_widget(Clear, popup_area);

    // 外框
    let block = Block::default()
        .title(" New Task ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.highlight))
        .style(Style::default().bg(colors.bg));

    let inner_area = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    // 内部布局: 空行 + 文本行 + 日期行 + 空行 + 校验行 + 空行 + 提示行
    let [_, text_area, due_area, _, check_area, _, hint_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner_area);

    frame.render_widget(
        Paragraph::new(input_line(
            "  Task: ",
            &input.text,
            input.focus == InputField::Text,
            colors,
        )),
        text_area,
    );
    frame.render_widget(
        Paragraph::new(input_line(
            "  Due:  ",
            &input.due_date,
            input.focus == InputField::DueDate,
            colors,
        )),
        due_area,
    );

    // 校验提示：文本为空时不可提交，日期格式只做提醒
    let due = input.due_date.trim();
    let check_line = if input.text.trim().is_empty() {
        Line::from(Span::styled(
            "  (enter task text)",
            Style::default().fg(colors.muted),
        ))
    } else if !due.is_empty() && !is_valid_date(due) {
        Line::from(Span::styled(
            "  due date is not YYYY-MM-DD",
            Style::default().fg(colors.overdue),
        ))
    } else {
        Line::from(Span::styled(
            "  (due date optional, YYYY-MM-DD)",
            Style::default().fg(colors.muted),
        ))
    };
    frame.render_widget(Paragraph::new(check_line), check_area);

    // 渲染底部提示
    let hint = Paragraph::new(Line::from(vec![
        Span::styled("Enter", Style::default().fg(colors.highlight)),
        Span::styled(" add  ", Style::default().fg(colors.muted)),
        Span::styled("Tab", Style::default().fg(colors.highlight)),
        Span::styled(" switch  ", Style::default().fg(colors.muted)),
        Span::styled("Esc", Style::default().fg(colors.highlight)),
        Span::styled(" cancel", Style::default().fg(colors.muted)),
    ]))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

fn input_line<'a>(
    label: &'a str,
    value: &'a str,
    focused: bool,
    colors: &ThemeColors,
) -> Line<'a> {
    let mut spans = vec![
        Span::styled(label, Style::default().fg(colors.muted)),
        Span::styled(value, Style::default().fg(colors.text)),
    ];
    if focused {
        spans.push(Span::styled("█", Style::default().fg(colors.highlight))); // 光标
    }
    Line::from(spans)
}
