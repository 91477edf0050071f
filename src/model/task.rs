use serde::{Deserialize, Serialize};

/// 任务数据
///
/// `text` 同时充当任务的标识（没有独立的 id 字段），
/// 因此按文本查找/删除会命中所有同名任务。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// 任务文本（非空，已去除首尾空白）
    pub text: String,
    /// 是否已完成
    #[serde(default)]
    pub completed: bool,
    /// 截止日期 (YYYY-MM-DD)
    #[serde(rename = "dueDate", default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

impl Task {
    pub fn new(text: impl Into<String>, due_date: Option<String>) -> Self {
        Self {
            text: text.into(),
            completed: false,
            due_date,
        }
    }
}

/// 任务列表（插入顺序即默认显示顺序）
pub type TaskCollection = Vec<Task>;

/// 排序方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// 保持原有顺序
    #[default]
    None,
    /// 按文本字母序
    Alphabetical,
    /// 未完成在前，已完成在后
    Status,
}

impl SortMode {
    /// 显示名称
    pub fn label(&self) -> &'static str {
        match self {
            SortMode::None => "none",
            SortMode::Alphabetical => "alphabetical",
            SortMode::Status => "status",
        }
    }

    /// 从名称解析，无法识别的名称一律视为 `None`
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "alphabetical" => SortMode::Alphabetical,
            "status" => SortMode::Status,
            _ => SortMode::None,
        }
    }

    /// 切换到下一个排序方式（TUI 中 `s` 键循环）
    pub fn next(&self) -> Self {
        match self {
            SortMode::None => SortMode::Alphabetical,
            SortMode::Alphabetical => SortMode::Status,
            SortMode::Status => SortMode::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_mode_from_name() {
        assert_eq!(SortMode::from_name("alphabetical"), SortMode::Alphabetical);
        assert_eq!(SortMode::from_name(" Status "), SortMode::Status);
        assert_eq!(SortMode::from_name("none"), SortMode::None);
        assert_eq!(SortMode::from_name("by-priority"), SortMode::None);
        assert_eq!(SortMode::from_name(""), SortMode::None);
    }

    #[test]
    fn test_sort_mode_cycle() {
        let mode = SortMode::None;
        assert_eq!(mode.next(), SortMode::Alphabetical);
        assert_eq!(mode.next().next(), SortMode::Status);
        assert_eq!(mode.next().next().next(), SortMode::None);
    }

    #[test]
    fn test_task_serialization_field_names() {
        let task = Task::new("Buy milk", Some("2024-05-01".to_string()));
        let json = serde_json::to_string(&task).unwrap();
        assert_eq!(
            json,
            r#"{"text":"Buy milk","completed":false,"dueDate":"2024-05-01"}"#
        );

        // 无截止日期时省略 dueDate 字段
        let task = Task::new("Call mom", None);
        let json = serde_json::to_string(&task).unwrap();
        assert_eq!(json, r#"{"text":"Call mom","completed":false}"#);
    }

    #[test]
    fn test_task_deserialize_missing_completed() {
        let task: Task = serde_json::from_str(r#"{"text":"Walk dog"}"#).unwrap();
        assert_eq!(task, Task::new("Walk dog", None));
    }
}
