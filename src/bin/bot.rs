use anyhow::Result;
use dotenvy::dotenv;
use log::{error, info, warn};
use serenity::async_trait;
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::prelude::*;
use std::sync::Arc;

use morning_nag::{BotContext, CommandHandler, Config, IncomingMessage, SchedulerSlot};

struct Handler {
    command_handler: Arc<CommandHandler>,
    scheduler: SchedulerSlot,
}

impl Handler {
    fn new(command_handler: CommandHandler) -> Self {
        Handler {
            command_handler: Arc::new(command_handler),
            scheduler: SchedulerSlot::new(),
        }
    }

    /// Strip a serenity message down to what the handlers need
    fn to_incoming_message(msg: &Message) -> IncomingMessage {
        IncomingMessage {
            author_id: msg.author.id.0,
            author_is_bot: msg.author.bot,
            channel_id: msg.channel_id.0,
            content: msg.content.clone(),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, _ctx: Context, msg: Message) {
        let incoming = Self::to_incoming_message(&msg);
        let now = self.command_handler.context().config.local_now();

        if let Err(e) = self.command_handler.handle_message(&incoming, now).await {
            error!("Error handling message: {e}");
        }
    }

    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!("🎉 {} is connected and ready!", ready.user.name);
        info!("📡 Connected to {} guilds", ready.guilds.len());
        info!("🤖 Bot ID: {}", ready.user.id);

        // Ready fires again on every reconnect
        let ctx = self.command_handler.context().clone();
        match self.scheduler.start_once(ctx).await {
            Ok(true) => {}
            Ok(false) => warn!("🔄 Reconnected to gateway, scheduler already running"),
            Err(e) => error!("❌ Failed to start scheduler, will retry on next Ready: {e}"),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Starting morning task bot...");
    info!(
        "👤 Watching user {} | 📺 Home channel {} | 🕙 Greeting at {} ({})",
        config.user_id, config.channel_id, config.morning_time, config.timezone
    );

    let http = Arc::new(serenity::http::Http::new(&config.discord_token));
    let discord_token = config.discord_token.clone();
    let bot_context = BotContext::new(config, http);
    let command_handler = CommandHandler::new(bot_context);

    let handler = Handler::new(command_handler);

    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(&discord_token, intents)
        .event_handler(handler)
        .await
        .map_err(|e| {
            error!("Failed to create Discord client: {e}");
            anyhow::anyhow!("Client creation failed: {}", e)
        })?;

    info!("Bot configured successfully. Connecting to Discord gateway...");
    info!("Gateway intents: {intents:?}");

    if let Err(why) = client.start().await {
        error!("Gateway connection failed: {why:?}");
        error!("This could be due to:");
        error!("  - Invalid bot token");
        error!("  - Network connectivity issues");
        error!("  - Discord API outage");
        error!("  - Missing MESSAGE_CONTENT intent in the developer portal");
        return Err(anyhow::anyhow!(
            "Failed to establish gateway connection: {}",
            why
        ));
    }

    Ok(())
}
