//! Outbound message delivery
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::Result;
use async_trait::async_trait;
use serenity::http::Http;
use serenity::model::id::ChannelId;

use super::response::split_addressed;

/// Anything that can post plain text into a channel
///
/// Implemented for serenity's `Http` client in production. Handlers only see
/// this trait, so they run without a gateway connection in tests.
#[async_trait]
pub trait MessageSink: Send + Sync {
    async fn send(&self, channel_id: u64, content: &str) -> Result<()>;
}

#[async_trait]
impl MessageSink for Http {
    async fn send(&self, channel_id: u64, content: &str) -> Result<()> {
        ChannelId(channel_id).say(self, content).await?;
        Ok(())
    }
}

/// Send a mention-prefixed body, split across several messages when it
/// exceeds Discord's limit
pub async fn send_addressed(
    sink: &dyn MessageSink,
    channel_id: u64,
    mention: &str,
    body: &str,
) -> Result<()> {
    for piece in split_addressed(mention, body) {
        sink.send(channel_id, &piece).await?;
    }
    Ok(())
}
