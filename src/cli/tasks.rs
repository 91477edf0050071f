//! add / remove / toggle / list 子命令实现

use std::io::{self, Write};

use crate::error::Result;
use crate::model::{SortMode, Task};
use crate::operations::list::{self, is_expired_on};
use crate::operations::tasks::{TaskController, TaskRenderer};
use crate::storage::FileStore;

use super::Context;

/// 纯文本渲染：每个任务一行
pub struct PrintRenderer<W> {
    out: W,
    today: String,
}

impl<W: Write> PrintRenderer<W> {
    pub fn new(out: W, today: impl Into<String>) -> Self {
        Self {
            out,
            today: today.into(),
        }
    }
}

impl<W: Write> PrintRenderer<W> {
    fn write_list(&mut self, tasks: &[Task]) -> io::Result<()> {
        if tasks.is_empty() {
            return writeln!(self.out, "No tasks.");
        }
        for task in tasks {
            writeln!(self.out, "{}", format_task(task, &self.today))?;
        }
        self.out.flush()
    }
}

impl<W: Write> TaskRenderer for PrintRenderer<W> {
    fn render(&mut self, tasks: &[Task]) {
        // 例如 `todo ls | head` 关闭了管道
        if let Err(e) = self.write_list(tasks) {
            tracing::warn!(error = %e, "failed to print task list");
        }
    }
}

/// `[x] text  (Due: 2024-01-01)  expired`
pub fn format_task(task: &Task, today: &str) -> String {
    let mark = if task.completed { "x" } else { " " };
    let mut line = format!("[{}] {}", mark, task.text);
    if let Some(due) = task.due_date.as_deref() {
        line.push_str(&format!("  (Due: {})", due));
    }
    if is_expired_on(task.due_date.as_deref(), today) {
        line.push_str("  expired");
    }
    line
}

fn controller(
    ctx: &Context,
    sort_mode: SortMode,
) -> TaskController<FileStore, PrintRenderer<io::Stdout>> {
    TaskController::new(
        ctx.task_store(),
        PrintRenderer::new(io::stdout(), list::today()),
        sort_mode,
    )
}

pub fn execute_add(ctx: &Context, text: &str, due: Option<&str>) -> Result<()> {
    if let Some(due) = due.map(str::trim).filter(|d| !d.is_empty()) {
        if !list::is_valid_date(due) {
            tracing::warn!(due, "due date is not YYYY-MM-DD; stored as given");
        }
    }
    if text.trim().is_empty() {
        eprintln!("Task text is empty, nothing added.");
        return Ok(());
    }
    controller(ctx, ctx.sort_mode()).add(text, due)?;
    Ok(())
}

pub fn execute_remove(ctx: &Context, text: &str) -> Result<()> {
    controller(ctx, ctx.sort_mode()).remove(text)?;
    Ok(())
}

pub fn execute_toggle(ctx: &Context, text: &str) -> Result<()> {
    if controller(ctx, ctx.sort_mode()).toggle(text)?.is_none() {
        eprintln!("No task named \"{}\".", text);
    }
    Ok(())
}

/// 打印列表；`--sort` 只影响本次输出，不写回存储
pub fn execute_list(ctx: &Context, sort: Option<&str>) -> Result<()> {
    let mode = sort.map(SortMode::from_name).unwrap_or_else(|| ctx.sort_mode());
    controller(ctx, mode).init();
    Ok(())
}
