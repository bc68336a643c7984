mod api;
mod config;
mod database;
mod ledger;
mod lifecycle;
mod models;
mod notifier;
mod telegram;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpServer, http::header, middleware::Logger, web};
use anyhow::{Context, Result};
use tokio::task;
use tracing::{error, info};

use crate::{
    database::database::Database,
    ledger::attestor::EvmAttestor,
    lifecycle::lifecycle::Lifecycle,
    models::model::HelpDeskConfig,
    notifier::notifier::MentorNotifier,
    telegram::{bot_worker::BotWorker, client::TelegramClient},
};

pub struct AppState {
    pub database: Arc<Database>,
    pub lifecycle: Arc<Lifecycle>,
    pub attestor: Arc<EvmAttestor>,
}

#[actix_web::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "help_desk=info,actix_web=info".into()),
        )
        .init();

    info!("🚀 Starting Help Desk backend");

    let config = HelpDeskConfig::from_env()
        .or_else(|_| HelpDeskConfig::from_file("config.toml".into()))
        .context("Failed to load configuration")?;

    config.telegram.validate()?;

    let database = Arc::new(
        Database::new(&config.database.url, config.database.max_connections)
            .context("Failed to initialize database")?,
    );

    info!("📊 Running database migrations");
    Database::run_migrations(&database.pool).context("Failed to run migrations")?;

    info!("💬 Initializing Telegram client");
    let telegram = Arc::new(TelegramClient::new(&config.telegram.bot_token));
    let notifier = Arc::new(MentorNotifier::new(telegram.clone()));

    info!("🔁 Initializing request lifecycle");
    let lifecycle = Arc::new(Lifecycle::new(database.clone(), notifier.clone()));

    info!("🔗 Initializing attestation ledger client");
    let attestor = Arc::new(
        EvmAttestor::new(config.ledger.clone())
            .await
            .context("Failed to initialize attestation client")?,
    );

    let app_state = web::Data::new(AppState {
        database: database.clone(),
        lifecycle: lifecycle.clone(),
        attestor: attestor.clone(),
    });

    info!("🤖 Starting Telegram bot worker");
    let bot_handle = task::spawn({
        let worker = BotWorker::new(
            telegram.clone(),
            lifecycle.clone(),
            config.telegram.rating_page_url.clone(),
        );
        async move {
            worker.run().await;
        }
    });

    let host = config.server.host.clone();
    let port = config.server.port;

    info!("🌐 Starting HTTP server on {}:{}", host, port);

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(
                &std::env::var("CORS_ORIGIN")
                    .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            )
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
            .allowed_headers(vec![
                header::CONTENT_TYPE,
                header::AUTHORIZATION,
                header::ACCEPT,
            ])
            .supports_credentials()
            .max_age(3600);

        App::new()
            .app_data(app_state.clone())
            .configure(config::config_scope::configure)
            .wrap(cors)
            .wrap(Logger::default())
    })
    .bind((host.as_str(), port))
    .context("Failed to bind HTTP server")?
    .run();

    info!("✅ All services started successfully");

    tokio::select! {
        result = server => error!("HTTP server stopped: {:?}", result),
        _ = bot_handle => error!("Telegram bot worker stopped unexpectedly"),
    }

    Ok(())
}
