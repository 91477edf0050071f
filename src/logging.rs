//! tracing 日志初始化
//!
//! CLI 子命令输出到 stderr；TUI 模式写入数据目录下的 `todo.log`，避免破坏界面。

use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// 日志级别过滤的环境变量（语法同 RUST_LOG）
pub const LOG_ENV: &str = "GROVE_TODO_LOG";

fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// 日志输出到 stderr
pub fn init_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// 日志追加写入 `<data_dir>/todo.log`
pub fn init_file(data_dir: &Path) -> io::Result<()> {
    fs::create_dir_all(data_dir)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(data_dir.join("todo.log"))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
