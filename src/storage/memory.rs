//! 内存键值存储（测试替身）

use std::cell::RefCell;
use std::collections::HashMap;

use super::KeyValueStore;
use crate::error::{Result, TodoError};

#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
    /// 为 true 时所有写入都失败，用于模拟存储配额耗尽
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 预置一个原始值
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    /// 所有写入都返回错误的存储
    pub fn failing() -> Self {
        Self {
            values: RefCell::default(),
            fail_writes: true,
        }
    }

    /// 读取原始值（绕过 trait，便于断言）
    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            return Err(TodoError::storage("quota exceeded"));
        }
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
