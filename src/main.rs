use std::env;
use std::sync::Arc;

use serenity::model::gateway::GatewayIntents;
use serenity::model::id::GuildId;
use serenity::prelude::*;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

mod commands;
mod config;
mod handler;
mod jobs;
mod model;
mod responses;
mod sheets;
mod util;

use config::BotConfig;
use model::AppState;
use sheets::{Schema, SheetsClient};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "promobot=info".into()),
        )
        .init();

    let config_path = env::var("BOT_CONFIG").unwrap_or_else(|_| "Config.json".to_string());
    let config = Arc::new(BotConfig::load(&config_path).expect("Failed to load the bot config."));

    let schema = Schema::default();
    schema.validate().expect("Invalid column schema.");

    let token = env::var("DISCORD_TOKEN").expect("Expected DISCORD_TOKEN in the environment.");
    let server_id = env::var("SERVER_ID")
        .expect("Expected SERVER_ID in the environment.")
        .parse::<u64>()
        .expect("SERVER_ID must be a valid number.");
    let allowed_guild_id = GuildId::new(server_id);

    let spreadsheet_id =
        env::var("SPREADSHEET_ID").expect("Expected SPREADSHEET_ID in the environment.");
    let sheets_token = env::var("SHEETS_TOKEN").expect("Expected SHEETS_TOKEN in the environment.");
    let sheets = Arc::new(
        SheetsClient::new(spreadsheet_id, sheets_token).expect("Failed to build the store client."),
    );

    let app_state = Arc::new(AppState::new(config, sheets, schema));

    let shutdown = CancellationToken::new();

    let intents =
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT;
    let mut client = Client::builder(&token, intents)
        .event_handler(handler::Handler {
            allowed_guild_id,
            shutdown: shutdown.clone(),
        })
        .await
        .expect("Error creating the gateway client.");

    {
        let mut data = client.data.write().await;
        data.insert::<AppState>(app_state.clone());
    }

    let job = tokio::spawn(jobs::scheduler::run_daily(
        app_state.clone(),
        shutdown.clone(),
    ));

    let shard_manager = client.shard_manager.clone();
    let shutdown_on_signal = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutdown...");
            shutdown_on_signal.cancel();
            shard_manager.shutdown_all().await;
        }
    });

    info!("Bot started.");
    if let Err(why) = client.start().await {
        error!("Client error: {:?}", why);
    }

    shutdown.cancel();
    let _ = job.await;
}
