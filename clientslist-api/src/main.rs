use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use clap::Parser;
use tokio::sync::broadcast::error::RecvError;
use tracing_subscriber::prelude::*;

use clientslist_api::{config, handlers, helpers};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long)]
    log_file_path: Option<String>,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    if let Some(log_path) = args.log_file_path {
        let log_path = std::path::Path::new(&log_path);
        let file_appender = tracing_appender::rolling::never(
            log_path.parent().unwrap_or(std::path::Path::new(".")),
            log_path
                .file_name()
                .unwrap_or(std::ffi::OsStr::new("clientslist-api.log")),
        );
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        std::mem::forget(guard);

        tracing_subscriber::registry()
            .with(env_filter.clone())
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(true)
                    .with_writer(std::io::stdout),
            )
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let (config, config_path) = config::ApiConfig::load()?;
    tracing::info!("Loaded config from {:?}", config_path);

    let db_path = helpers::database::get_db_path(&config)?;
    let controller = helpers::database::initialize_controller(&db_path)?;
    tracing::info!("Contacts database at {:?}", db_path);

    // Follow controller state changes in the log
    let mut events = controller
        .lock()
        .map_err(|_| anyhow::anyhow!("Contacts controller poisoned"))?
        .subscribe();
    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(event) => tracing::debug!("Controller event: {:?}", event),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!("Dropped {} controller events", skipped)
                }
                Err(RecvError::Closed) => break,
            }
        }
    });

    let server_config = config.server();
    tracing::info!(
        "Server will listen on {}:{}",
        server_config.host,
        server_config.port
    );

    let cors_config = config.cors.clone();
    HttpServer::new(move || {
        let cors = match &cors_config {
            Some(cors_config) => cors_config
                .allowed_origins
                .iter()
                .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin)),
            None => Cors::default().allow_any_origin(),
        }
        .allowed_methods(vec!["GET", "POST", "DELETE", "OPTIONS"])
        .allowed_headers(vec!["Accept", "Content-Type"])
        .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(web::Data::new(controller.clone()))
            .configure(handlers::configure)
    })
    .bind((server_config.host.as_str(), server_config.port))?
    .run()
    .await?;

    Ok(())
}
