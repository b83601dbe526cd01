//! # Feature: Scheduled Jobs
//!
//! Daily morning greeting (cron, in the configured timezone) and the
//! interval-based task reminder sweep.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

use anyhow::{Context, Result};
use chrono::{NaiveTime, Timelike};
use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::core::BotContext;
use crate::features::greeting::send_morning_greeting;
use crate::features::reminders::run_reminder_sweep;

/// Six-field cron expression (with seconds) firing once a day at `time`
pub fn daily_cron(time: NaiveTime) -> String {
    format!("0 {} {} * * *", time.minute(), time.hour())
}

/// Owns the job runner for both scheduled callbacks
///
/// A missed or failed firing is logged and dropped; nothing is retried.
pub struct BotScheduler {
    inner: JobScheduler,
}

impl BotScheduler {
    pub async fn new() -> Result<Self> {
        let inner = JobScheduler::new()
            .await
            .context("Failed to create job scheduler")?;
        Ok(Self { inner })
    }

    /// Register the greeting and reminder jobs, then start firing them
    pub async fn start(&self, ctx: BotContext) -> Result<()> {
        self.add_morning_greeting(ctx.clone()).await?;
        self.add_reminder_sweep(ctx).await?;
        self.inner
            .start()
            .await
            .context("Failed to start scheduler")?;
        info!("⏱️ Scheduler started");
        Ok(())
    }

    async fn add_morning_greeting(&self, ctx: BotContext) -> Result<()> {
        let cron = daily_cron(ctx.config.morning_time);
        let timezone = ctx.config.timezone;

        let job = Job::new_async_tz(cron.as_str(), timezone, move |_uuid, _lock| {
            let ctx = ctx.clone();
            Box::pin(async move {
                let mut rng = StdRng::from_os_rng();
                if let Err(e) = send_morning_greeting(&ctx, &mut rng).await {
                    error!("❌ Failed to send morning greeting: {e}");
                }
            })
        })
        .with_context(|| format!("Failed to create morning greeting job: {cron}"))?;

        self.inner
            .add(job)
            .await
            .context("Failed to add morning greeting job")?;
        info!("🌅 Morning greeting scheduled with cron '{cron}' ({timezone})");
        Ok(())
    }

    async fn add_reminder_sweep(&self, ctx: BotContext) -> Result<()> {
        let interval = ctx.config.reminder_interval;

        let job = Job::new_repeated_async(interval, move |_uuid, _lock| {
            let ctx = ctx.clone();
            Box::pin(async move {
                let now = ctx.config.local_now();
                if let Err(e) = run_reminder_sweep(&ctx, now).await {
                    error!("❌ Reminder sweep failed: {e}");
                }
            })
        })
        .context("Failed to create reminder sweep job")?;

        self.inner
            .add(job)
            .await
            .context("Failed to add reminder sweep job")?;
        info!("⏰ Reminder sweep scheduled every {}s", interval.as_secs());
        Ok(())
    }
}

/// Holds the running scheduler so jobs are registered at most once
///
/// Each start attempt builds a fresh `BotScheduler`; a failed attempt drops
/// its half-registered runner, so a retry never duplicates a job.
#[derive(Default)]
pub struct SchedulerSlot {
    running: Mutex<Option<BotScheduler>>,
}

impl SchedulerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the jobs unless they are already running
    ///
    /// Returns `true` if this call started them.
    pub async fn start_once(&self, ctx: BotContext) -> Result<bool> {
        let mut running = self.running.lock().await;
        if running.is_some() {
            return Ok(false);
        }
        let scheduler = BotScheduler::new().await?;
        scheduler.start(ctx).await?;
        *running = Some(scheduler);
        Ok(true)
    }

    pub async fn is_running(&self) -> bool {
        self.running.lock().await.is_some()
    }
}
