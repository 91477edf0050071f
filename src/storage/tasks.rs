use crate::error::Result;
use crate::model::{Task, TaskCollection};

use super::KeyValueStore;

/// 任务列表保存的固定 key
pub const TASKS_KEY: &str = "tasks";

/// 任务列表的持久化边界
///
/// 整个列表作为一个 JSON 数组保存在 [`TASKS_KEY`] 下，每次写入整体替换。
#[derive(Debug, Clone)]
pub struct TaskStore<S> {
    kv: S,
}

impl<S: KeyValueStore> TaskStore<S> {
    pub fn new(kv: S) -> Self {
        Self { kv }
    }

    /// 底层键值存储
    pub fn kv(&self) -> &S {
        &self.kv
    }

    /// 加载任务列表
    ///
    /// 不存在、读取失败或无法解析时都返回空列表，不会报错。
    pub fn load(&self) -> TaskCollection {
        let content = match self.kv.get(TASKS_KEY) {
            Ok(Some(content)) => content,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read tasks, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Task>>(&content) {
            Ok(tasks) => tasks,
            Err(e) => {
                tracing::warn!(error = %e, "stored tasks are malformed, starting empty");
                Vec::new()
            }
        }
    }

    /// 保存任务列表（整体替换）
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        let content = serde_json::to_string(tasks)?;
        self.kv.set(TASKS_KEY, &content)?;
        tracing::debug!(count = tasks.len(), "saved tasks");
        Ok(())
    }
}
