use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    widgets::{Block, Widget},
    Frame,
};

use crate::app::App;
use crate::operations::list;
use crate::storage::KeyValueStore;

use super::components::{empty_state, footer, header, new_task_dialog, task_list, toast};

/// 渲染任务列表页面
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<S>) {
    let area = frame.area();
    let colors = &app.colors;

    // 填充整个背景
    Block::default()
        .style(Style::default().bg(colors.bg))
        .render(area, frame.buffer_mut());

    let [header_area, list_area, footer_area] = Layout::vertical([
        Constraint::Length(header::HEADER_HEIGHT),
        Constraint::Fill(1),
        Constraint::Length(3),
    ])
    .areas(area);

    let tasks = app.tasks();

    let counts = header::Counts {
        total: tasks.len(),
        completed: app.completed_count(),
        overdue: app.overdue_count(),
    };
    header::render(frame, header_area, counts, app.sort_mode(), colors);

    if tasks.is_empty() {
        empty_state::render(frame, list_area, colors);
    } else {
        let today = list::today();
        task_list::render(
            frame,
            list_area,
            tasks,
            app.list_state.selected(),
            &today,
            colors,
        );
    }

    footer::render(frame, footer_area, !tasks.is_empty(), colors);

    // 弹窗与 Toast 覆盖在最上层
    if let Some(input) = &app.new_task_dialog {
        new_task_dialog::render(frame, input, colors);
    }

    if let Some(t) = &app.toast {
        toast::render(frame, t, colors);
    }
}
