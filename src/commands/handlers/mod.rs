//! Per-command handler implementations
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

pub mod tasks;

pub use tasks::TasksHandler;

use std::sync::Arc;

use super::handler::TextCommandHandler;

/// Create all built-in command handlers, ready for a `CommandRegistry`
pub fn create_all_handlers() -> Vec<Arc<dyn TextCommandHandler>> {
    vec![Arc::new(tasks::TasksHandler)]
}
