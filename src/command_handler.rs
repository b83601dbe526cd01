//! Inbound message dispatch
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Authorized-user filter, rule classification and prefix command fallback

use anyhow::Result;
use chrono::{DateTime, FixedOffset};
use log::{debug, info};
use uuid::Uuid;

use crate::commands::{CommandInvocation, CommandRegistry};
use crate::core::BotContext;
use crate::features::tasks::{classify, Intent};

pub const DONE_REPLY: &str = "Great job completing your tasks! 🎉";
pub const PLAY_REPLY: &str = "Have fun! 🎮 Remember to take breaks!";

/// The parts of a chat message the bot cares about
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    pub author_id: u64,
    pub author_is_bot: bool,
    pub channel_id: u64,
    pub content: String,
}

#[derive(Clone)]
pub struct CommandHandler {
    ctx: BotContext,
    registry: CommandRegistry,
}

impl CommandHandler {
    pub fn new(ctx: BotContext) -> Self {
        Self {
            ctx,
            registry: CommandRegistry::with_builtin_commands(),
        }
    }

    pub fn context(&self) -> &BotContext {
        &self.ctx
    }

    /// Handle one inbound message received at `now`
    ///
    /// Messages from bots or from anyone but the configured user are dropped
    /// without touching the task store.
    pub async fn handle_message(&self, msg: &IncomingMessage, now: DateTime<FixedOffset>) -> Result<()> {
        if msg.author_is_bot {
            return Ok(());
        }
        if msg.author_id != self.ctx.config.user_id {
            debug!("Ignoring message from unauthorized user {}", msg.author_id);
            return Ok(());
        }

        let request_id = Uuid::new_v4();
        debug!(
            "[{request_id}] 📥 Message received | Channel: {} | Content: '{}'",
            msg.channel_id,
            msg.content.chars().take(100).collect::<String>()
        );

        match classify(&msg.content) {
            Intent::CompleteAll => {
                let cleared = {
                    let mut store = self.ctx.tasks.lock().await;
                    let count = store.len();
                    store.clear();
                    count
                };
                info!("[{request_id}] ✅ Cleared {cleared} task(s)");
                self.ctx.send_to_user(msg.channel_id, DONE_REPLY).await
            }
            Intent::Play => {
                debug!("[{request_id}] 🎮 Play message");
                self.ctx.send_to_user(msg.channel_id, PLAY_REPLY).await
            }
            Intent::AddTask(marked) => {
                let added = self.ctx.tasks.lock().await.add(&marked, now).map(str::to_string);
                match added {
                    Some(task) => {
                        info!("[{request_id}] 📝 Task added: {task}");
                        self.ctx
                            .send_to_user(msg.channel_id, &format!("Task added: {task}"))
                            .await
                    }
                    None => Ok(()),
                }
            }
            Intent::PassThrough => self.dispatch_command(msg, request_id).await,
        }
    }

    async fn dispatch_command(&self, msg: &IncomingMessage, request_id: Uuid) -> Result<()> {
        let Some(invocation) =
            CommandInvocation::parse(&self.ctx.config.command_prefix, &msg.content, msg.channel_id)
        else {
            return Ok(());
        };

        match self.registry.get(&invocation.name) {
            Some(handler) => {
                info!("[{request_id}] 🎯 Processing command: {}", invocation.name);
                handler.handle(&self.ctx, &invocation).await
            }
            None => {
                debug!("[{request_id}] Unknown command: {}", invocation.name);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::tests::test_config;
    use crate::core::outbound::tests::{FailingSink, RecordingSink};
    use chrono::TimeZone;
    use std::sync::Arc;

    const USER: u64 = 42;
    const CHANNEL: u64 = 99;

    fn now() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(7 * 3600)
            .unwrap()
            .timestamp_opt(1_700_000_000, 0)
            .unwrap()
    }

    fn from_user(content: &str) -> IncomingMessage {
        IncomingMessage {
            author_id: USER,
            author_is_bot: false,
            channel_id: CHANNEL,
            content: content.to_string(),
        }
    }

    fn setup() -> (CommandHandler, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::default());
        let ctx = BotContext::new(test_config(), sink.clone());
        (CommandHandler::new(ctx), sink)
    }

    async fn tasks(handler: &CommandHandler) -> Vec<String> {
        handler.context().tasks.lock().await.list().to_vec()
    }

    #[tokio::test]
    async fn test_add_task() {
        let (handler, sink) = setup();
        handler.handle_message(&from_user("- Buy milk"), now()).await.unwrap();

        assert_eq!(tasks(&handler).await, ["buy milk"]);
        assert_eq!(
            handler.context().tasks.lock().await.last_reminded("buy milk"),
            Some(now())
        );
        assert_eq!(
            sink.messages().await,
            vec![(CHANNEL, "<@42> Task added: buy milk".to_string())]
        );
    }

    #[tokio::test]
    async fn test_bare_marker_adds_nothing() {
        let (handler, sink) = setup();
        handler.handle_message(&from_user("-"), now()).await.unwrap();
        assert!(tasks(&handler).await.is_empty());
        assert!(sink.messages().await.is_empty());
    }

    #[tokio::test]
    async fn test_done_clears_everything() {
        for n in [0usize, 1, 3] {
            let (handler, sink) = setup();
            for i in 0..n {
                handler
                    .handle_message(&from_user(&format!("- task {i}")), now())
                    .await
                    .unwrap();
            }

            handler.handle_message(&from_user("done"), now()).await.unwrap();

            let store = handler.context().tasks.lock().await;
            assert!(store.is_empty());
            assert_eq!(store.ledger_len(), 0);
            let sent = sink.messages().await;
            assert_eq!(
                sent.last(),
                Some(&(CHANNEL, "<@42> Great job completing your tasks! 🎉".to_string()))
            );
        }
    }

    #[tokio::test]
    async fn test_play_never_adds_task() {
        let (handler, sink) = setup();
        handler
            .handle_message(&from_user("going to play chess"), now())
            .await
            .unwrap();
        handler
            .handle_message(&from_user("- play video games"), now())
            .await
            .unwrap();

        assert!(tasks(&handler).await.is_empty());
        let sent = sink.messages().await;
        assert_eq!(sent.len(), 2);
        assert!(sent
            .iter()
            .all(|(_, m)| m == "<@42> Have fun! 🎮 Remember to take breaks!"));
    }

    #[tokio::test]
    async fn test_other_authors_ignored() {
        let (handler, sink) = setup();
        for content in ["- buy milk", "done", "play", "!tasks"] {
            let msg = IncomingMessage {
                author_id: 1,
                ..from_user(content)
            };
            handler.handle_message(&msg, now()).await.unwrap();
        }
        assert!(tasks(&handler).await.is_empty());
        assert!(sink.messages().await.is_empty());
    }

    #[tokio::test]
    async fn test_bot_messages_ignored() {
        let (handler, sink) = setup();
        let msg = IncomingMessage {
            author_is_bot: true,
            ..from_user("- buy milk")
        };
        handler.handle_message(&msg, now()).await.unwrap();
        assert!(tasks(&handler).await.is_empty());
        assert!(sink.messages().await.is_empty());
    }

    #[tokio::test]
    async fn test_tasks_command() {
        let (handler, sink) = setup();
        handler.handle_message(&from_user("- a"), now()).await.unwrap();
        handler.handle_message(&from_user("- b"), now()).await.unwrap();
        handler.handle_message(&from_user("!tasks"), now()).await.unwrap();

        let sent = sink.messages().await;
        assert_eq!(
            sent.last(),
            Some(&(CHANNEL, "<@42> Here are your current tasks:\n- a\n- b".to_string()))
        );
    }

    #[tokio::test]
    async fn test_long_task_list_mentions_user_in_every_message() {
        let (handler, sink) = setup();
        for i in 0..150 {
            handler
                .handle_message(&from_user(&format!("- task number {i} with some text")), now())
                .await
                .unwrap();
        }
        let confirmations = sink.messages().await.len();

        handler.handle_message(&from_user("!tasks"), now()).await.unwrap();

        let listing = &sink.messages().await[confirmations..];
        assert!(listing.len() >= 2);
        for (channel, text) in listing {
            assert_eq!(*channel, CHANNEL);
            assert!(text.starts_with("<@42> "), "missing mention: {text:.40}");
            assert!(text.len() <= crate::core::MESSAGE_LIMIT);
        }
    }

    #[tokio::test]
    async fn test_unknown_command_and_chatter_ignored() {
        let (handler, sink) = setup();
        handler.handle_message(&from_user("!nope"), now()).await.unwrap();
        handler.handle_message(&from_user("hello"), now()).await.unwrap();
        assert!(sink.messages().await.is_empty());
    }

    #[tokio::test]
    async fn test_marker_stripped_once() {
        let (handler, _sink) = setup();
        handler.handle_message(&from_user("--flag"), now()).await.unwrap();
        assert_eq!(tasks(&handler).await, ["-flag"]);
    }

    #[tokio::test]
    async fn test_duplicates_accumulate() {
        let (handler, _sink) = setup();
        handler.handle_message(&from_user("- stretch"), now()).await.unwrap();
        handler.handle_message(&from_user("- stretch"), now()).await.unwrap();
        assert_eq!(tasks(&handler).await, ["stretch", "stretch"]);
    }

    #[tokio::test]
    async fn test_send_failure_propagates() {
        let ctx = BotContext::new(test_config(), Arc::new(FailingSink));
        let handler = CommandHandler::new(ctx);
        let result = handler.handle_message(&from_user("- buy milk"), now()).await;
        assert!(result.is_err());
        // the task is still recorded even though the confirmation failed
        assert_eq!(tasks(&handler).await, ["buy milk"]);
    }
}
