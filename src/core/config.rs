//! Environment-sourced bot configuration
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Initial release with identity, schedule and reminder settings

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, FixedOffset, NaiveTime, Utc};
use chrono_tz::Tz;
use std::time::Duration;

pub const DEFAULT_USER_NAME: &str = "Joey";
pub const DEFAULT_COMMAND_PREFIX: &str = "!";
pub const DEFAULT_TIMEZONE: &str = "Asia/Bangkok";
pub const DEFAULT_MORNING_TIME: &str = "10:00";
pub const DEFAULT_REMINDER_SECS: u64 = 3600;

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    /// The only user whose messages are acted on, and who every message mentions
    pub user_id: u64,
    /// Channel that scheduled messages are posted to
    pub channel_id: u64,
    pub user_name: String,
    pub command_prefix: String,
    /// IANA zone the greeting time and reminder timestamps are resolved in
    pub timezone: Tz,
    pub morning_time: NaiveTime,
    pub reminder_interval: Duration,
    pub reminder_threshold: Duration,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup (the process environment in production)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String> {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| anyhow!("{key} must be set"))
        };
        let optional = |key: &str, default: &str| -> String {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let discord_token = required("DISCORD_TOKEN")?;
        let user_id = parse_snowflake("USER_ID", &required("USER_ID")?)?;
        let channel_id = parse_snowflake("CHANNEL_ID", &required("CHANNEL_ID")?)?;

        let timezone_raw = optional("BOT_TIMEZONE", DEFAULT_TIMEZONE);
        let timezone = timezone_raw.parse::<Tz>().map_err(|e| {
            anyhow!("BOT_TIMEZONE '{timezone_raw}' is not an IANA zone like Asia/Bangkok: {e}")
        })?;

        let morning_raw = optional("MORNING_TIME", DEFAULT_MORNING_TIME);
        let morning_time = NaiveTime::parse_from_str(&morning_raw, "%H:%M")
            .with_context(|| format!("MORNING_TIME '{morning_raw}' is not HH:MM"))?;

        let reminder_interval = parse_seconds(
            "REMINDER_INTERVAL_SECS",
            &optional("REMINDER_INTERVAL_SECS", &DEFAULT_REMINDER_SECS.to_string()),
        )?;
        let reminder_threshold = parse_seconds(
            "REMINDER_THRESHOLD_SECS",
            &optional("REMINDER_THRESHOLD_SECS", &DEFAULT_REMINDER_SECS.to_string()),
        )?;

        Ok(Self {
            discord_token,
            user_id,
            channel_id,
            user_name: optional("USER_NAME", DEFAULT_USER_NAME),
            command_prefix: optional("COMMAND_PREFIX", DEFAULT_COMMAND_PREFIX),
            timezone,
            morning_time,
            reminder_interval,
            reminder_threshold,
            log_level: optional("LOG_LEVEL", "info"),
        })
    }

    /// Current wall-clock time in the configured timezone
    pub fn local_now(&self) -> DateTime<FixedOffset> {
        self.localize(Utc::now())
    }

    /// Resolve a UTC instant to the zone's offset in effect at that instant
    pub fn localize(&self, instant: DateTime<Utc>) -> DateTime<FixedOffset> {
        instant.with_timezone(&self.timezone).fixed_offset()
    }

    /// Mention markup for the configured user, e.g. `<@1234>`
    pub fn mention(&self) -> String {
        format!("<@{}>", self.user_id)
    }
}

fn parse_snowflake(key: &str, raw: &str) -> Result<u64> {
    raw.parse::<u64>()
        .with_context(|| format!("{key} '{raw}' is not a numeric Discord id"))
}

fn parse_seconds(key: &str, raw: &str) -> Result<Duration> {
    let secs = raw
        .parse::<u64>()
        .with_context(|| format!("{key} '{raw}' is not a number of seconds"))?;
    if secs == 0 {
        return Err(anyhow!("{key} must be greater than zero"));
    }
    Ok(Duration::from_secs(secs))
}
