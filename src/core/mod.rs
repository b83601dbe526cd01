//! # Core Module
//!
//! Configuration, shared context and outbound messaging for the bot.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod config;
pub mod context;
pub mod outbound;
pub mod response;

// Re-export commonly used items
pub use config::Config;
pub use context::{BotContext, SharedTaskStore};
pub use outbound::{send_addressed, MessageSink};
pub use response::{addressed, bullet_list, split_addressed, MESSAGE_LIMIT};
