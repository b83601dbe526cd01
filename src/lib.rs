// Core layer - configuration, shared context, outbound messaging
pub mod core;

// Features layer - tasks, reminders, greeting
pub mod features;

// Application layer
pub mod command_handler;
pub mod commands;
pub mod scheduler;

pub use crate::core::{BotContext, Config};
pub use command_handler::{CommandHandler, IncomingMessage};
pub use scheduler::{BotScheduler, SchedulerSlot};
