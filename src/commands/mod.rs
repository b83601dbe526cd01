//! # Command System
//!
//! Prefix (`!`) command handling for chat messages.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod handler;
pub mod handlers;
pub mod registry;

pub use crate::command_handler::CommandHandler;

pub use handler::{CommandInvocation, TextCommandHandler};
pub use registry::CommandRegistry;
