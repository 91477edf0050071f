use std::path::PathBuf;
use std::time::{Duration, Instant};

use ratatui::widgets::ListState;

use crate::model::{SortMode, Task};
use crate::operations::list;
use crate::operations::tasks::{TaskController, TaskRenderer};
use crate::storage::config::{self, Config};
use crate::storage::{FileStore, KeyValueStore};
use crate::theme::{Theme, ThemeColors};

/// Toast 消息
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub is_error: bool,
    pub expires_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            message: message.into(),
            is_error: false,
            expires_at: Instant::now() + duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// TUI 渲染目标：保存最近一次渲染的任务列表
#[derive(Debug, Default)]
pub struct TaskView {
    pub tasks: Vec<Task>,
}

impl TaskRenderer for TaskView {
    fn render(&mut self, tasks: &[Task]) {
        self.tasks = tasks.to_vec();
    }
}

/// New Task 弹窗中的输入框
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputField {
    #[default]
    Text,
    DueDate,
}

/// New Task 弹窗状态
#[derive(Debug, Clone, Default)]
pub struct NewTaskInput {
    pub text: String,
    pub due_date: String,
    pub focus: InputField,
}

impl NewTaskInput {
    /// 当前聚焦的输入内容
    pub fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            InputField::Text => &mut self.text,
            InputField::DueDate => &mut self.due_date,
        }
    }

    /// 在两个输入框之间切换
    pub fn switch_focus(&mut self) {
        self.focus = match self.focus {
            InputField::Text => InputField::DueDate,
            InputField::DueDate => InputField::Text,
        };
    }
}

/// 配置持久化位置（排序方式切换时写回）
pub struct Settings {
    pub data_dir: PathBuf,
    pub config: Config,
}

pub struct App<S: KeyValueStore = FileStore> {
    pub controller: TaskController<S, TaskView>,
    /// 列表选择状态
    pub list_state: ListState,
    /// New Task 弹窗（Some 表示打开）
    pub new_task_dialog: Option<NewTaskInput>,
    pub toast: Option<Toast>,
    pub colors: ThemeColors,
    pub settings: Option<Settings>,
    pub should_quit: bool,
}

impl<S: KeyValueStore> App<S> {
    pub fn new(mut controller: TaskController<S, TaskView>, theme: Theme) -> Self {
        controller.init();

        let mut app = Self {
            controller,
            list_state: ListState::default(),
            new_task_dialog: None,
            toast: None,
            colors: theme.colors(),
            settings: None,
            should_quit: false,
        };
        app.ensure_selection();
        app
    }

    /// 绑定配置文件，排序方式变化时写回
    pub fn with_settings(mut self, data_dir: PathBuf, config: Config) -> Self {
        self.settings = Some(Settings { data_dir, config });
        self
    }

    /// 当前显示的任务（已按排序方式排列）
    pub fn tasks(&self) -> &[Task] {
        &self.controller.renderer().tasks
    }

    pub fn sort_mode(&self) -> SortMode {
        self.controller.sort_mode()
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.list_state.selected().and_then(|i| self.tasks().get(i))
    }

    pub fn completed_count(&self) -> usize {
        self.tasks().iter().filter(|t| t.completed).count()
    }

    /// 未完成且已过期的任务数
    pub fn overdue_count(&self) -> usize {
        self.tasks()
            .iter()
            .filter(|t| !t.completed && list::is_expired(t.due_date.as_deref()))
            .count()
    }

    pub fn select_next(&mut self) {
        let len = self.tasks().len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            Some(_) => 0,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn select_previous(&mut self) {
        let len = self.tasks().len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }

    /// 确保选中项在列表范围内
    pub fn ensure_selection(&mut self) {
        let len = self.tasks().len();
        match self.list_state.selected() {
            _ if len == 0 => self.list_state.select(None),
            Some(i) if i >= len => self.list_state.select(Some(len - 1)),
            None => self.list_state.select(Some(0)),
            Some(_) => {}
        }
    }

    /// 切换选中任务的完成状态
    ///
    /// 同名任务中只有存储顺序上的第一个会被切换，此时用 Toast 提示。
    pub fn toggle_selected(&mut self) {
        let Some(text) = self.selected_task().map(|t| t.text.clone()) else {
            return;
        };
        let same_name = self.tasks().iter().filter(|t| t.text == text).count();

        match self.controller.toggle(&text) {
            Ok(Some(tasks)) => {
                let Some(toggled) = tasks.iter().find(|t| t.text == text) else {
                    return;
                };
                if same_name > 1 {
                    let state = if toggled.completed { "done" } else { "not done" };
                    self.show_toast(format!(
                        "Marked the first of {} tasks named \"{}\" as {}",
                        same_name, text, state
                    ));
                }
                // 排序后任务可能移动，跟随选中
                let index = self.tasks().iter().position(|t| t == toggled);
                self.list_state.select(index);
            }
            Ok(None) => self.show_error(format!("Task \"{}\" no longer exists", text)),
            Err(e) => self.show_error(format!("Save failed: {}", e)),
        }
        self.ensure_selection();
    }

    /// 删除选中任务（同名任务会一起删除）
    pub fn delete_selected(&mut self) {
        let Some(text) = self.selected_task().map(|t| t.text.clone()) else {
            return;
        };
        let before = self.tasks().len();
        match self.controller.remove(&text) {
            Ok(tasks) => {
                let removed = before.saturating_sub(tasks.len());
                if removed > 1 {
                    self.show_toast(format!("Deleted {} tasks named \"{}\"", removed, text));
                } else {
                    self.show_toast("Task deleted");
                }
            }
            Err(e) => self.show_error(format!("Save failed: {}", e)),
        }
        self.ensure_selection();
    }

    /// 循环切换排序方式
    pub fn cycle_sort(&mut self) {
        let mode = self.sort_mode().next();
        self.controller.sort(mode);
        self.ensure_selection();
        self.show_toast(format!("Sort: {}", mode.label()));

        if let Some(settings) = self.settings.as_mut() {
            settings.config.view.sort = mode.label().to_string();
            if let Err(e) = config::save_config(&settings.data_dir, &settings.config) {
                tracing::warn!(error = %e, "failed to remember sort mode");
            }
        }
    }

    pub fn open_new_task_dialog(&mut self) {
        self.new_task_dialog = Some(NewTaskInput::default());
    }

    pub fn cancel_new_task_dialog(&mut self) {
        self.new_task_dialog = None;
    }

    /// 提交 New Task 弹窗
    ///
    /// 文本为空时保持弹窗打开。
    pub fn submit_new_task(&mut self) {
        let Some(input) = self.new_task_dialog.as_ref() else {
            return;
        };
        if input.text.trim().is_empty() {
            return;
        }

        let text = input.text.clone();
        let due_date = input.due_date.clone();
        match self.controller.add(&text, Some(&due_date)) {
            Ok(_) => {
                self.new_task_dialog = None;
                // 选中刚添加的任务
                let added = text.trim();
                let index = self.tasks().iter().rposition(|t| t.text == added);
                self.list_state.select(index);
                self.ensure_selection();
            }
            Err(e) => self.show_error(format!("Save failed: {}", e)),
        }
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message, Duration::from_secs(2)));
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        let mut toast = Toast::new(message, Duration::from_secs(4));
        toast.is_error = true;
        self.toast = Some(toast);
    }

    /// 更新 Toast 状态（清理过期的 Toast）
    pub fn update_toast(&mut self) {
        if let Some(ref toast) = self.toast {
            if toast.is_expired() {
                self.toast = None;
            }
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::storage::memory::MemoryStore;
    use crate::storage::tasks::{TaskStore, TASKS_KEY};

    pub(crate) fn app_with(raw: &str) -> App<MemoryStore> {
        app_sorted(raw, SortMode::None)
    }

    fn app_sorted(raw: &str, sort_mode: SortMode) -> App<MemoryStore> {
        let store = TaskStore::new(MemoryStore::with_value(TASKS_KEY, raw));
        let controller = TaskController::new(store, TaskView::default(), sort_mode);
        App::new(controller, Theme::Dark)
    }

    const THREE: &str = r#"[{"text":"b","completed":true},{"text":"a","completed":false},{"text":"b","completed":false}]"#;

    #[test]
    fn test_new_loads_and_selects_first() {
        let app = app_with(THREE);
        assert_eq!(app.tasks().len(), 3);
        assert_eq!(app.list_state.selected(), Some(0));
        assert_eq!(app.completed_count(), 1);
        assert_eq!(app.overdue_count(), 0);
    }

    #[test]
    fn test_overdue_count_ignores_completed() {
        let app = app_with(
            r#"[{"text":"a","dueDate":"2000-01-01"},{"text":"b","completed":true,"dueDate":"2000-01-01"},{"text":"c","dueDate":"9999-01-01"}]"#,
        );
        assert_eq!(app.overdue_count(), 1);
    }

    #[test]
    fn test_empty_has_no_selection() {
        let app = app_with("[]");
        assert_eq!(app.list_state.selected(), None);
        assert!(app.selected_task().is_none());
    }

    #[test]
    fn test_selection_wraps() {
        let mut app = app_with(THREE);
        app.select_previous();
        assert_eq!(app.list_state.selected(), Some(2));
        app.select_next();
        assert_eq!(app.list_state.selected(), Some(0));
    }

    #[test]
    fn test_delete_removes_all_with_same_text() {
        let mut app = app_with(THREE);
        app.delete_selected();

        assert_eq!(app.tasks().len(), 1);
        assert_eq!(app.tasks()[0].text, "a");
        assert_eq!(app.list_state.selected(), Some(0));
        assert!(app.toast.as_ref().unwrap().message.contains("Deleted 2"));
    }

    #[test]
    fn test_toggle_selected_persists() {
        let mut app = app_with(THREE);
        app.select_next(); // "a"
        app.toggle_selected();

        let stored = app.controller.store().load();
        assert!(stored[1].completed);
    }

    #[test]
    fn test_toggle_duplicate_name_flips_first_and_says_so() {
        let mut app = app_with(THREE);
        app.list_state.select(Some(2)); // 第二个 "b"（未完成）
        app.toggle_selected();

        // 存储顺序上的第一个 "b" 被切换
        let stored = app.controller.store().load();
        assert!(!stored[0].completed);
        assert!(!stored[2].completed);

        let toast = app.toast.as_ref().unwrap();
        assert!(!toast.is_error);
        assert!(toast.message.contains("2 tasks named \"b\""));
        assert!(toast.message.contains("not done"));
    }

    #[test]
    fn test_toggle_unique_name_has_no_toast() {
        let mut app = app_with(THREE);
        app.select_next(); // "a"
        app.toggle_selected();
        assert!(app.toast.is_none());
    }

    #[test]
    fn test_toggle_selection_follows_task_under_status_sort() {
        let mut app = app_sorted(r#"[{"text":"a"},{"text":"b"}]"#, SortMode::Status);
        assert_eq!(app.selected_task().unwrap().text, "a");

        app.toggle_selected();

        // "a" 完成后排到末尾，选中项随之移动
        assert_eq!(app.list_state.selected(), Some(1));
        let selected = app.selected_task().unwrap();
        assert_eq!(selected.text, "a");
        assert!(selected.completed);
    }

    #[test]
    fn test_submit_new_task() {
        let mut app = app_with("[]");
        app.open_new_task_dialog();
        if let Some(input) = app.new_task_dialog.as_mut() {
            input.text = "  Buy milk ".to_string();
            input.switch_focus();
            input.focused_mut().push_str("2030-01-01");
        }
        app.submit_new_task();

        assert!(app.new_task_dialog.is_none());
        assert_eq!(app.tasks().len(), 1);
        assert_eq!(app.selected_task().unwrap().text, "Buy milk");
        assert_eq!(
            app.selected_task().unwrap().due_date.as_deref(),
            Some("2030-01-01")
        );
    }

    #[test]
    fn test_submit_empty_keeps_dialog_open() {
        let mut app = app_with("[]");
        app.open_new_task_dialog();
        app.submit_new_task();

        assert!(app.new_task_dialog.is_some());
        assert!(app.tasks().is_empty());
    }

    #[test]
    fn test_cycle_sort_reorders_view() {
        let mut app = app_with(THREE);
        app.cycle_sort();
        assert_eq!(app.sort_mode(), SortMode::Alphabetical);
        let texts: Vec<&str> = app.tasks().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b", "b"]);

        app.cycle_sort();
        assert_eq!(app.sort_mode(), SortMode::Status);
        assert!(app.tasks()[2].completed);
    }

    #[test]
    fn test_cycle_sort_remembers_mode_in_config() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_with(THREE).with_settings(dir.path().to_path_buf(), Config::default());
        app.cycle_sort();

        let config = config::load_config(dir.path());
        assert_eq!(config.view.sort_mode(), SortMode::Alphabetical);
    }

    #[test]
    fn test_write_failure_shows_error_toast() {
        let store = TaskStore::new(MemoryStore::failing());
        let controller = TaskController::new(store, TaskView::default(), SortMode::None);
        let mut app = App::new(controller, Theme::Dark);

        app.open_new_task_dialog();
        if let Some(input) = app.new_task_dialog.as_mut() {
            input.text = "Buy milk".to_string();
        }
        app.submit_new_task();

        let toast = app.toast.as_ref().unwrap();
        assert!(toast.is_error);
        assert!(app.new_task_dialog.is_some());
    }
}
