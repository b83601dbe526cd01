//! Ordered message classification rules
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! Rules run in order against the lowercased message and the first match wins.
//! "play" is checked before task creation, so `- play chess` is not added as a task.

use super::store::{normalize_task, TASK_MARKER};

/// What the bot should do with a message from the authorized user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Every task is finished; wipe the list
    CompleteAll,
    /// Encourage the user to take breaks
    Play,
    /// Add a task; holds the trimmed, lowercased message with its marker,
    /// which `TaskStore::add` normalizes
    AddTask(String),
    /// Nothing matched; hand the message to prefix-command dispatch
    PassThrough,
}

type Rule = fn(&str) -> Option<Intent>;

/// Classification rules, highest precedence first
pub const RULES: &[(&str, Rule)] = &[
    ("done", done_rule),
    ("play", play_rule),
    ("add_task", add_task_rule),
];

fn done_rule(content: &str) -> Option<Intent> {
    (content == "done").then_some(Intent::CompleteAll)
}

fn play_rule(content: &str) -> Option<Intent> {
    content.contains("play").then_some(Intent::Play)
}

fn add_task_rule(content: &str) -> Option<Intent> {
    let marked = content.trim();
    if !marked.starts_with(TASK_MARKER) {
        return None;
    }
    // A bare marker falls through to command dispatch
    normalize_task(marked)?;
    Some(Intent::AddTask(marked.to_string()))
}

/// Classify a raw message body
pub fn classify(message: &str) -> Intent {
    let content = message.to_lowercase();
    RULES
        .iter()
        .find_map(|(_, rule)| rule(&content))
        .unwrap_or(Intent::PassThrough)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_done_exact_match() {
        assert_eq!(classify("done"), Intent::CompleteAll);
        assert_eq!(classify("DONE"), Intent::CompleteAll);
        assert_eq!(classify("Done"), Intent::CompleteAll);
    }

    #[test]
    fn test_done_must_be_exact() {
        assert_eq!(classify("done!"), Intent::PassThrough);
        assert_eq!(classify(" done"), Intent::PassThrough);
        assert_eq!(classify("I'm done"), Intent::PassThrough);
    }

    #[test]
    fn test_play_anywhere() {
        assert_eq!(classify("going to play chess"), Intent::Play);
        assert_eq!(classify("PLAYING games"), Intent::Play);
        assert_eq!(classify("display settings"), Intent::Play);
    }

    #[test]
    fn test_play_beats_task_marker() {
        assert_eq!(classify("- play with the dog"), Intent::Play);
    }

    #[test]
    fn test_task_added_lowercased() {
        assert_eq!(classify("- Buy Milk"), Intent::AddTask("- buy milk".to_string()));
        assert_eq!(classify("   -write report  "), Intent::AddTask("-write report".to_string()));
    }

    #[test]
    fn test_bare_marker_passes_through() {
        assert_eq!(classify("-"), Intent::PassThrough);
        assert_eq!(classify("  -   "), Intent::PassThrough);
    }

    #[test]
    fn test_everything_else_passes_through() {
        assert_eq!(classify("!tasks"), Intent::PassThrough);
        assert_eq!(classify("hello there"), Intent::PassThrough);
        assert_eq!(classify(""), Intent::PassThrough);
    }

    #[test]
    fn test_rule_order() {
        let names: Vec<&str> = RULES.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, ["done", "play", "add_task"]);
    }
}
