//! # Features Layer
//!
//! - **tasks**: to-do list and message classification
//! - **reminders**: periodic nag about stale tasks
//! - **greeting**: daily good-morning message

pub mod greeting;
pub mod reminders;
pub mod tasks;

pub use greeting::{compose_greeting, send_morning_greeting, MORNING_WISHES};
pub use reminders::run_reminder_sweep;
pub use tasks::{classify, Intent, TaskStore};
