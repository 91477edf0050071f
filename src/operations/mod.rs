//! Task operations - shared business logic layer
//!
//! `list` holds the pure collection transforms; `tasks` wires them to the
//! store and a renderer for both the TUI and the CLI subcommands.

pub mod list;
pub mod tasks;
