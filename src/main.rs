mod model;
mod server;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::server::{config::Config, error::AppError, startup, state::AppState};

/// HTTP service storing slide documents for the sketchpad front-end.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Create the slides table if it does not exist, then start serving
    #[arg(long)]
    create_database: bool,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "slidestore=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    if cli.create_database {
        startup::create_schema(&db).await?;
    }

    tracing::info!("Slide listing mode: {}", config.list_mode);

    let app = startup::app(
        AppState::new(db, config.list_mode),
        config.max_body_bytes,
        &config.static_dir,
    );

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!("Listening on {}", config.listen_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
