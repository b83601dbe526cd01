//! # Morning Greeting Feature
//!
//! Daily good-morning message posted to the home channel.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

use anyhow::Result;
use log::info;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::core::BotContext;

/// Greeting templates; `{name}` is replaced with the user's display name
pub const MORNING_WISHES: [&str; 5] = [
    "Rise and shine, {name}! 🌅 Hope your day is filled with awesome moments!",
    "Good morning {name}! 🌞 May today bring you joy and success!",
    "Hey {name}! 🌄 Wishing you a fantastic day ahead!",
    "Morning {name}! 🌅 Let's make today amazing!",
    "Rise and grind, {name}! 🌞 Today is going to be great!",
];

const PLANS_PROMPT: &str = "What are your plans for today?";

/// Pick one greeting uniformly at random and fill in the name
pub fn compose_greeting<R: Rng + ?Sized>(rng: &mut R, name: &str) -> String {
    let template = MORNING_WISHES.choose(rng).copied().unwrap_or(MORNING_WISHES[0]);
    format!("{}\n{PLANS_PROMPT}", template.replace("{name}", name))
}

/// Post the morning greeting to the home channel
pub async fn send_morning_greeting<R: Rng + Send + ?Sized>(
    ctx: &BotContext,
    rng: &mut R,
) -> Result<()> {
    let greeting = compose_greeting(rng, &ctx.config.user_name);
    ctx.send_to_home_channel(&greeting).await?;
    info!("🌅 Sent morning greeting to channel {}", ctx.config.channel_id);
    Ok(())
}
