//! Application module
//!
//! Contains the main application state and logic, split into:
//! - `state`: App struct and view management
//! - `actions`: Requests against the commit API and their completions
//! - `input`: Key event handling
//! - `render`: UI rendering
//! - `tasks`: Spawning API calls and collecting their results

mod actions;
mod input;
mod render;
mod state;
pub mod tasks;

pub use state::{App, Focus, View};
pub use tasks::Dispatcher;
