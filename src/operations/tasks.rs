//! Task list controller shared between the TUI and the CLI subcommands
//!
//! Each mutating call is a single read-transform-write cycle:
//!
//! ```text
//! caller ──> TaskController ──> TaskStore::load ──> operations::list ──> TaskStore::save ──> TaskRenderer
//! ```
//!
//! The store and the renderer are injected, so tests drive the controller
//! with an in-memory store and a recording renderer.

use crate::error::Result;
use crate::model::{SortMode, Task, TaskCollection};
use crate::storage::tasks::TaskStore;
use crate::storage::KeyValueStore;

use super::list;

/// Receives the collection after every change
pub trait TaskRenderer {
    fn render(&mut self, tasks: &[Task]);
}

pub struct TaskController<S, R> {
    store: TaskStore<S>,
    renderer: R,
    sort_mode: SortMode,
}

impl<S: KeyValueStore, R: TaskRenderer> TaskController<S, R> {
    pub fn new(store: TaskStore<S>, renderer: R, sort_mode: SortMode) -> Self {
        Self {
            store,
            renderer,
            sort_mode,
        }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    #[cfg(test)]
    pub fn store(&self) -> &TaskStore<S> {
        &self.store
    }

    /// Load the persisted collection and render it once.
    pub fn init(&mut self) -> TaskCollection {
        let tasks = self.store.load();
        self.render(&tasks);
        tasks
    }

    /// Add a task. Empty text leaves storage untouched.
    pub fn add(&mut self, text: &str, due_date: Option<&str>) -> Result<TaskCollection> {
        let before = self.store.load();
        let count = before.len();
        let tasks = list::add(before, text, due_date);
        if tasks.len() == count {
            tracing::debug!("ignored empty task text");
            return Ok(tasks);
        }

        self.commit(tasks)
    }

    /// Remove every task with the given text.
    pub fn remove(&mut self, text: &str) -> Result<TaskCollection> {
        let tasks = list::remove(self.store.load(), text);
        self.commit(tasks)
    }

    /// Flip completion on the first task with the given text.
    ///
    /// Returns `None` without writing or rendering when no task matches.
    pub fn toggle(&mut self, text: &str) -> Result<Option<TaskCollection>> {
        let before = self.store.load();
        if !before.iter().any(|task| task.text == text) {
            tracing::debug!(text, "no task to toggle");
            return Ok(None);
        }

        let tasks = list::toggle_completion(before, text);
        self.commit(tasks).map(Some)
    }

    /// Switch the view ordering and re-render.
    ///
    /// The stored order is left as inserted; only the rendered view is sorted.
    pub fn sort(&mut self, mode: SortMode) -> TaskCollection {
        self.sort_mode = mode;
        let tasks = self.store.load();
        self.render(&tasks);
        tasks
    }

    fn commit(&mut self, tasks: TaskCollection) -> Result<TaskCollection> {
        self.store.save(&tasks)?;
        self.render(&tasks);
        Ok(tasks)
    }

    fn render(&mut self, tasks: &[Task]) {
        let view = list::sort(tasks.to_vec(), self.sort_mode);
        self.renderer.render(&view);
    }
}
