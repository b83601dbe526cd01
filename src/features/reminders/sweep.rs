//! Reminder sweep over the task store
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::Result;
use chrono::{DateTime, Duration, FixedOffset};
use log::{debug, info};

use crate::core::BotContext;

pub fn reminder_text(task: &str) -> String {
    format!("Have you completed this task yet?\n- {task}")
}

/// Send one reminder per task that is due at `now`
///
/// Returns how many reminders were sent. A task's ledger entry only moves to
/// `now` once its reminder went out, and the store lock is not held while
/// talking to Discord. A failed send stops the sweep; that task and the ones
/// after it stay due for the next sweep.
pub async fn run_reminder_sweep(ctx: &BotContext, now: DateTime<FixedOffset>) -> Result<usize> {
    let threshold = Duration::from_std(ctx.config.reminder_threshold)?;

    let pending = {
        let store = ctx.tasks.lock().await;
        if store.is_empty() {
            debug!("No active tasks, skipping reminder sweep");
            return Ok(0);
        }
        store.pending_reminders(now, threshold)
    };

    let mut sent = 0;
    for task in &pending {
        ctx.send_to_home_channel(&reminder_text(task)).await?;
        ctx.tasks.lock().await.mark_reminded(task, now);
        sent += 1;
    }

    if sent > 0 {
        info!("⏰ Sent {sent} task reminder(s)");
    }
    Ok(sent)
}
