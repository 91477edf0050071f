pub mod config;
#[cfg(test)]
pub mod memory;
pub mod tasks;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Result, TodoError};

/// 覆盖数据目录的环境变量
pub const HOME_ENV: &str = "GROVE_TODO_HOME";

/// 获取数据目录: $GROVE_TODO_HOME 或 ~/.grove-todo/
pub fn todo_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|home| home.join(".grove-todo"))
        .ok_or_else(|| TodoError::config("Cannot find home directory"))
}

/// 键值存储接口
///
/// 每个 key 对应一个完整的值，写入即整体替换，没有部分更新。
pub trait KeyValueStore {
    /// 读取 key 对应的值，不存在时返回 `None`
    fn get(&self, key: &str) -> Result<Option<String>>;
    /// 写入（替换）key 对应的值
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

/// 基于目录的键值存储：key `k` 保存在 `<dir>/k.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// 存储目录
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(TodoError::storage(format!("invalid key: {:?}", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => {
                tracing::debug!(path = %path.display(), bytes = content.len(), "read key");
                Ok(Some(content))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key)?;
        fs::create_dir_all(&self.dir)?;

        // 先写临时文件再原子替换
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        if let Err(e) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }

        tracing::debug!(path = %path.display(), bytes = value.len(), "wrote key");
        Ok(())
    }
}

/// 从 TOML 文件加载反序列化数据
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// 将数据序列化后保存到 TOML 文件
pub fn save_toml<T: serde::Serialize>(path: &Path, data: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(data)?;
    fs::write(path, content)?;
    Ok(())
}
