use std::str::FromStr;
use std::sync::{Arc, Mutex};

use poise::serenity_prelude::{self as serenity, *};
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Pool, Sqlite,
};
use tracing::Instrument;

use crate::{commands, constants::STATUS_ROTATION, event_handler, telemetry, Data};

async fn init_database() -> anyhow::Result<Pool<Sqlite>> {
    let db_url = std::env::var("DATABASE_URL").expect("missing DATABASE_URL");

    tracing::info!("initializing database connection...");
    let opts = SqliteConnectOptions::from_str(&db_url)
        .expect("invalid DATABASE_URL")
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal);
    let db = SqlitePoolOptions::new()
        .max_connections(20)
        .connect_with(opts)
        .await?;

    tracing::info!("running migrations...");
    sqlx::migrate!("./migrations").run(&db).await?;
    tracing::info!("finished running migrations!");

    Ok(db)
}

fn init_bug_report_url() -> Option<String> {
    let bug_report_url = std::env::var("BUG_REPORT_URL").ok();

    if bug_report_url.is_none() {
        tracing::warn!("no bug report url found. bug reports will not be relayed.");
    }

    bug_report_url
}

async fn init_discord_client(token: &str, data: Data) -> anyhow::Result<Client> {
    let intents = serenity::GatewayIntents::non_privileged()
        | serenity::GatewayIntents::MESSAGE_CONTENT
        | serenity::GatewayIntents::GUILD_MEMBERS
        | serenity::GatewayIntents::GUILD_PRESENCES;

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![
                commands::help::help(),
                commands::about::about(),
                commands::bugreport::bugreport(),
                commands::server::server(),
                commands::config::config(),
            ],
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some("g>".into()),
                ..Default::default()
            },
            event_handler: |ctx, event, framework, data| {
                Box::pin(event_handler(ctx, event, framework, data))
            },
            ..Default::default()
        })
        .setup(|ctx, _ready, framework| {
            Box::pin(async move {
                poise::builtins::register_globally(ctx, &framework.options().commands)
                    .await
                    .inspect_err(|e| tracing::error!(err = ?e, "an error occurred when registering commands"))?;

                Ok(data)
            }.in_current_span())
        })
        .build();

    let client = ClientBuilder::new(token, intents)
        .framework(framework)
        .activity(serenity::ActivityData {
            name: STATUS_ROTATION[0].into(),
            kind: serenity::ActivityType::Playing,
            state: None,
            url: None,
        })
        .await?;

    Ok(client)
}

pub async fn init() -> anyhow::Result<Client> {
    tracing::info!("initializing... please wait warmly.");

    let token = std::env::var("DISCORD_TOKEN").expect("missing DISCORD_TOKEN");

    telemetry::init_telemetry().expect("Failed to initialize OpenTelemetry");

    let db = init_database().await?;
    let bug_report_url = init_bug_report_url();
    let reqwest_client = reqwest::Client::new();

    let data = Data {
        db,
        reqwest_client,
        bug_report_url,
        status_task: Arc::new(Mutex::new(None)),
    };

    let client = init_discord_client(&token, data).await?;

    tracing::info!("finished initializing!");
    Ok(client)
}
