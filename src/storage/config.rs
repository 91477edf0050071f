//! 应用配置持久化

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::{load_toml, save_toml};
use crate::error::Result;
use crate::model::SortMode;

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub view: ViewConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// 存储配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StorageConfig {
    /// 任务数据目录，未设置时使用数据目录本身
    #[serde(default)]
    pub dir: Option<String>,
}

/// 列表显示配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewConfig {
    /// 启动时的排序方式: "none"/"alphabetical"/"status"
    #[serde(default = "default_sort_name")]
    pub sort: String,
}

fn default_sort_name() -> String {
    SortMode::None.label().to_string()
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            sort: default_sort_name(),
        }
    }
}

impl ViewConfig {
    pub fn sort_mode(&self) -> SortMode {
        SortMode::from_name(&self.sort)
    }
}

/// 主题配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub name: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "Dark".to_string(),
        }
    }
}

impl Config {
    /// 任务存储目录
    pub fn store_dir(&self, data_dir: &Path) -> PathBuf {
        match self.storage.dir.as_deref() {
            Some(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
            _ => data_dir.to_path_buf(),
        }
    }
}

/// 获取配置文件路径
pub fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join("config.toml")
}

/// 加载配置（不存在或无法解析则返回默认值）
pub fn load_config(data_dir: &Path) -> Config {
    let path = config_path(data_dir);
    if !path.exists() {
        return Config::default();
    }
    match load_toml(&path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring invalid config");
            Config::default()
        }
    }
}

/// 保存配置
pub fn save_config(data_dir: &Path, config: &Config) -> Result<()> {
    save_toml(&config_path(data_dir), config)
}
