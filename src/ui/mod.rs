pub mod components;
pub mod todo;
