pub mod task;

pub use task::{SortMode, Task, TaskCollection};
