//! In-memory task list and reminder ledger
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use chrono::{DateTime, Duration, FixedOffset};
use std::collections::HashMap;

/// Leading character that turns a chat message into a new task
pub const TASK_MARKER: char = '-';

/// Trim whitespace and a single leading marker from task text
///
/// Returns `None` when nothing is left.
pub fn normalize_task(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let text = trimmed
        .strip_prefix(TASK_MARKER)
        .map(str::trim)
        .unwrap_or(trimmed);
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Ordered tasks plus the time each task was last reminded about
///
/// Every task in `tasks` has an entry in `last_reminded`. Identical task texts
/// share one ledger entry since the text is the key.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<String>,
    last_reminded: HashMap<String, DateTime<FixedOffset>>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a task, stamping `now` as its last reminder time
    ///
    /// Duplicates are kept. Returns the stored text, or `None` if the text was empty.
    pub fn add(&mut self, raw: &str, now: DateTime<FixedOffset>) -> Option<&str> {
        let task = normalize_task(raw)?;
        self.last_reminded.insert(task.clone(), now);
        self.tasks.push(task);
        self.tasks.last().map(String::as_str)
    }

    /// Drop every task and ledger entry
    pub fn clear(&mut self) {
        self.tasks.clear();
        self.last_reminded.clear();
    }

    /// Tasks in insertion order
    pub fn list(&self) -> &[String] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn ledger_len(&self) -> usize {
        self.last_reminded.len()
    }

    pub fn last_reminded(&self, task: &str) -> Option<DateTime<FixedOffset>> {
        self.last_reminded.get(task).copied()
    }

    /// Tasks not reminded about for at least `threshold`, without touching the ledger
    ///
    /// Identical texts share a ledger entry, so each text is listed once.
    pub fn pending_reminders(&self, now: DateTime<FixedOffset>, threshold: Duration) -> Vec<String> {
        let mut pending: Vec<String> = Vec::new();
        for task in &self.tasks {
            let Some(last) = self.last_reminded.get(task) else {
                continue;
            };
            if now.signed_duration_since(*last) >= threshold && !pending.contains(task) {
                pending.push(task.clone());
            }
        }
        pending
    }

    /// Move a task's ledger entry to `now`
    ///
    /// Returns false if the task is no longer tracked (e.g. cleared meanwhile);
    /// no entry is created in that case.
    pub fn mark_reminded(&mut self, task: &str, now: DateTime<FixedOffset>) -> bool {
        match self.last_reminded.get_mut(task) {
            Some(last) => {
                *last = now;
                true
            }
            None => false,
        }
    }

    /// Select tasks not reminded about for at least `threshold`
    ///
    /// Each selected task has its ledger entry moved to `now`, so polling again
    /// before another `threshold` elapses selects nothing.
    pub fn due_for_reminder(
        &mut self,
        now: DateTime<FixedOffset>,
        threshold: Duration,
    ) -> Vec<String> {
        let due = self.pending_reminders(now, threshold);
        for task in &due {
            self.mark_reminded(task, now);
        }
        due
    }
}
