use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use crate::model::Task;
use crate::operations::list::is_expired_on;
use crate::theme::ThemeColors;

use super::truncate;

/// 渲染任务列表
pub fn render(
    frame: &mut Frame,
    area: Rect,
    tasks: &[Task],
    selected_index: Option<usize>,
    today: &str,
    colors: &ThemeColors,
) {
    let text_width = area.width.saturating_sub(24) as usize;

    // 数据行
    let rows: Vec<Row> = tasks
        .iter()
        .enumerate()
        .map(|(i, task)| {
            let is_selected = selected_index == Some(i);
            let selector = if is_selected { "❯" } else { " " };
            let checkbox = if task.completed { "[x]" } else { "[ ]" };

            let text_style = if task.completed {
                Style::default()
                    .fg(colors.done)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(colors.text)
            };

            let expired = is_expired_on(task.due_date.as_deref(), today);
            let due = match task.due_date.as_deref() {
                Some(date) if expired => Line::from(vec![
                    Span::styled(date.to_string(), Style::default().fg(colors.overdue)),
                    Span::styled(" !", Style::default().fg(colors.overdue)),
                ]),
                Some(date) => Line::from(Span::styled(
                    date.to_string(),
                    Style::default().fg(colors.due),
                )),
                None => Line::from(""),
            };

            let row_style = if is_selected {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            Row::new(vec![
                Cell::from(selector).style(Style::default().fg(colors.highlight)),
                Cell::from(checkbox).style(Style::default().fg(colors.muted)),
                Cell::from(truncate(&task.text, text_width.max(8))).style(text_style),
                Cell::from(due),
            ])
            .style(row_style)
        })
        .collect();

    let widths = [
        Constraint::Length(2),  // 选择器
        Constraint::Length(4),  // 复选框
        Constraint::Fill(1),    // TASK (flex)
        Constraint::Length(13), // 截止日期
    ];

    let table = Table::new(rows, widths)
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::RIGHT)
                .border_style(Style::default().fg(colors.border)),
        )
        .row_highlight_style(Style::default().bg(colors.bg_secondary));

    let mut table_state = TableState::default();
    table_state.select(selected_index);

    frame.render_stateful_widget(table, area, &mut table_state);
}
