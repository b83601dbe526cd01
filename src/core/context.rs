//! Shared application context handed to every handler and scheduled job
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::Result;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::config::Config;
use super::outbound::{send_addressed, MessageSink};
use crate::features::tasks::TaskStore;

pub type SharedTaskStore = Arc<Mutex<TaskStore>>;

/// Process-wide state owned by the bot
///
/// Holds the configuration, the single task store and the outbound sink.
/// The store lock is never held across a send.
#[derive(Clone)]
pub struct BotContext {
    pub config: Arc<Config>,
    pub tasks: SharedTaskStore,
    pub sink: Arc<dyn MessageSink>,
}

impl BotContext {
    pub fn new(config: Config, sink: Arc<dyn MessageSink>) -> Self {
        Self {
            config: Arc::new(config),
            tasks: Arc::new(Mutex::new(TaskStore::new())),
            sink,
        }
    }

    /// Send a message to the configured user in the given channel
    pub async fn send_to_user(&self, channel_id: u64, body: &str) -> Result<()> {
        send_addressed(self.sink.as_ref(), channel_id, &self.config.mention(), body).await
    }

    /// Send a message to the configured user in the configured channel
    pub async fn send_to_home_channel(&self, body: &str) -> Result<()> {
        self.send_to_user(self.config.channel_id, body).await
    }
}
