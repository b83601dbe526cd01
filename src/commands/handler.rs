//! Prefix command handler trait
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::Result;
use async_trait::async_trait;

use crate::core::BotContext;

/// A parsed prefix command, e.g. `!tasks` in some channel
///
/// Commands take no arguments; anything after the name is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    pub name: String,
    pub channel_id: u64,
}

impl CommandInvocation {
    /// Parse `content` as a command if it starts with `prefix`
    ///
    /// Command names are matched case-sensitively.
    pub fn parse(prefix: &str, content: &str, channel_id: u64) -> Option<Self> {
        let rest = content.trim().strip_prefix(prefix)?;
        let name = rest.split_whitespace().next()?.to_string();
        // "! tasks" is not a command
        if !rest.starts_with(name.as_str()) {
            return None;
        }
        Some(Self { name, channel_id })
    }
}

/// Trait for prefix command handlers
///
/// Handlers are registered with a `CommandRegistry` and dispatched by name.
///
/// # Example
///
/// ```ignore
/// pub struct PingHandler;
///
/// #[async_trait]
/// impl TextCommandHandler for PingHandler {
///     fn command_names(&self) -> &'static [&'static str] {
///         &["ping"]
///     }
///
///     async fn handle(&self, ctx: &BotContext, invocation: &CommandInvocation) -> Result<()> {
///         ctx.send_to_user(invocation.channel_id, "pong").await
///     }
/// }
/// ```
#[async_trait]
pub trait TextCommandHandler: Send + Sync {
    /// Command name(s) this handler processes
    fn command_names(&self) -> &'static [&'static str];

    async fn handle(&self, ctx: &BotContext, invocation: &CommandInvocation) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn TextCommandHandler) {}

    #[test]
    fn test_parse_simple_command() {
        let invocation = CommandInvocation::parse("!", "!tasks", 9).unwrap();
        assert_eq!(invocation.name, "tasks");
        assert_eq!(invocation.channel_id, 9);
    }

    #[test]
    fn test_parse_ignores_trailing_words() {
        let invocation = CommandInvocation::parse("!", "  !tasks all now ", 9).unwrap();
        assert_eq!(invocation.name, "tasks");
        assert_eq!(invocation.channel_id, 9);
    }

    #[test]
    fn test_parse_rejects_non_commands() {
        assert!(CommandInvocation::parse("!", "tasks", 9).is_none());
        assert!(CommandInvocation::parse("!", "!", 9).is_none());
        assert!(CommandInvocation::parse("!", "! tasks", 9).is_none());
        assert!(CommandInvocation::parse("?", "!tasks", 9).is_none());
    }

    #[test]
    fn test_parse_multi_char_prefix() {
        let invocation = CommandInvocation::parse("bot.", "bot.tasks", 1).unwrap();
        assert_eq!(invocation.name, "tasks");
    }
}
