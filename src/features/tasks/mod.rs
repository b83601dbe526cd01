//! # Tasks Feature
//!
//! Single-user to-do list driven by chat messages.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod classifier;
pub mod store;

pub use classifier::{classify, Intent};
pub use store::{normalize_task, TaskStore, TASK_MARKER};
