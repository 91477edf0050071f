use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::App;
use crate::storage::KeyValueStore;

/// 处理事件，返回 true 表示应该继续运行
pub fn handle_events<S: KeyValueStore>(app: &mut App<S>) -> io::Result<bool> {
    // 更新 Toast 状态
    app.update_toast();

    // 轮询事件（100ms 超时）
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            // 只处理按下事件
            if key.kind != KeyEventKind::Press {
                return Ok(true);
            }
            handle_key(app, key);
        }
    }

    Ok(!app.should_quit)
}

pub fn handle_key<S: KeyValueStore>(app: &mut App<S>, key: KeyEvent) {
    // Ctrl+C 在任何状态下都退出
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    // 优先处理弹窗事件
    if app.new_task_dialog.is_some() {
        handle_new_task_dialog_key(app, key);
        return;
    }

    handle_list_key(app, key);
}

/// 处理任务列表的键盘事件
fn handle_list_key<S: KeyValueStore>(app: &mut App<S>, key: KeyEvent) {
    match key.code {
        // 退出
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),

        // 导航
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_previous(),

        // 切换完成状态
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_selected(),

        // 删除
        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),

        // 新建任务
        KeyCode::Char('n') | KeyCode::Char('a') => app.open_new_task_dialog(),

        // 切换排序方式
        KeyCode::Char('s') => app.cycle_sort(),

        _ => {}
    }
}

/// 处理 New Task 弹窗的键盘事件
fn handle_new_task_dialog_key<S: KeyValueStore>(app: &mut App<S>, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_new_task_dialog(),
        KeyCode::Enter => app.submit_new_task(),
        KeyCode::Tab | KeyCode::BackTab => {
            if let Some(input) = app.new_task_dialog.as_mut() {
                input.switch_focus();
            }
        }
        KeyCode::Backspace => {
            if let Some(input) = app.new_task_dialog.as_mut() {
                input.focused_mut().pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(input) = app.new_task_dialog.as_mut() {
                input.focused_mut().push(c);
            }
        }
        _ => {}
    }
}
