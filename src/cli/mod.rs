//! CLI 模块

pub mod tasks;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::error::Result;
use crate::model::SortMode;
use crate::storage::config::{self, Config};
use crate::storage::tasks::TaskStore;
use crate::storage::{self as store, FileStore};

#[derive(Parser)]
#[command(name = "todo")]
#[command(version)]
#[command(about = "A small to-do list with due dates, stored locally")]
pub struct Cli {
    /// Data directory (defaults to $GROVE_TODO_HOME or ~/.grove-todo)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive task list (default)
    Tui,
    /// Add a task
    Add {
        /// Task text; multiple words are joined with spaces
        #[arg(required = true)]
        text: Vec<String>,
        /// Due date (YYYY-MM-DD)
        #[arg(short, long)]
        due: Option<String>,
    },
    /// Delete every task with exactly this text
    #[command(alias = "rm")]
    Remove {
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Flip completion of the first task with exactly this text
    Toggle {
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Print the task list
    #[command(alias = "ls")]
    List {
        /// Ordering: none, alphabetical or status (defaults to config)
        #[arg(short, long)]
        sort: Option<String>,
    },
}

/// 运行时上下文：数据目录 + 配置
pub struct Context {
    pub data_dir: PathBuf,
    pub config: Config,
}

impl Context {
    /// 解析数据目录并加载配置
    pub fn resolve(data_dir: Option<PathBuf>) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => store::todo_dir()?,
        };
        let config = config::load_config(&data_dir);
        Ok(Self { data_dir, config })
    }

    /// 任务存储
    pub fn task_store(&self) -> TaskStore<FileStore> {
        let store = TaskStore::new(FileStore::new(self.config.store_dir(&self.data_dir)));
        tracing::debug!(dir = %store.kv().dir().display(), "opened task store");
        store
    }

    /// 配置中的默认排序方式
    pub fn sort_mode(&self) -> SortMode {
        self.config.view.sort_mode()
    }
}
