//! Task listing command
//!
//! Handles: tasks
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::Result;
use async_trait::async_trait;
use log::info;

use crate::commands::handler::{CommandInvocation, TextCommandHandler};
use crate::core::{bullet_list, BotContext};

pub const NO_TASKS_MESSAGE: &str = "You have no active tasks!";

/// Handler for the `tasks` listing command
pub struct TasksHandler;

/// Render the current task list, or the empty-list message
pub fn render_task_list(tasks: &[String]) -> String {
    if tasks.is_empty() {
        NO_TASKS_MESSAGE.to_string()
    } else {
        format!("Here are your current tasks:\n{}", bullet_list(tasks))
    }
}

#[async_trait]
impl TextCommandHandler for TasksHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["tasks"]
    }

    async fn handle(&self, ctx: &BotContext, invocation: &CommandInvocation) -> Result<()> {
        let body = {
            let store = ctx.tasks.lock().await;
            render_task_list(store.list())
        };
        info!("📋 Listing tasks in channel {}", invocation.channel_id);
        ctx.send_to_user(invocation.channel_id, &body).await
    }
}
