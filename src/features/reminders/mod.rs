//! # Reminders Feature
//!
//! Periodic nag about tasks that have not been reminded about recently.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod sweep;

pub use sweep::{reminder_text, run_reminder_sweep};
