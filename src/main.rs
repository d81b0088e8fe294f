use std::sync::{Arc, Mutex};

use poise::serenity_prelude as serenity;
use sqlx::{Pool, Sqlite};

use crate::constants::STARTUP_TIME;

#[derive(Clone)]
struct Data {
    db: Pool<Sqlite>,
    reqwest_client: reqwest::Client,
    bug_report_url: Option<String>,
    status_task: Arc<Mutex<Option<tokio::task::JoinHandle<()>>>>,
}

type Error = Box<dyn std::error::Error + Send + Sync>;
type Context<'a> = poise::Context<'a, Data, Error>;

mod commands;
mod constants;
mod handlers;
mod init;
mod models;
mod presence;
mod settings;
mod telemetry;

#[tracing::instrument(skip_all)]
async fn event_handler(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, Data, Error>,
    data: &Data,
) -> Result<(), Error> {
    match event {
        serenity::FullEvent::Ready { data_about_bot } => {
            handlers::ready(ctx, data, data_about_bot).await?;
        }
        serenity::FullEvent::Message { new_message } => {
            handlers::message(ctx, data, new_message).await?;
        }
        _ => {}
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let _ = &*STARTUP_TIME;

    let mut client = init::init().await?;

    client.start().await?;

    Ok(())
}
