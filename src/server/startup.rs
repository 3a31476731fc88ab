use std::path::Path;

use axum::Router;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::server::{config::Config, error::AppError, router, state::AppState};

/// Connects to the MySQL database.
///
/// Establishes the connection pool used by every request. The first connection is opened
/// eagerly so an unreachable database fails startup after at most the configured connect
/// timeout instead of failing the first request. The schema is left untouched; see
/// `create_schema`.
///
/// # Arguments
/// - `config` - Application configuration containing the database target
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database pool
/// - `Err(AppError::StorageUnavailable)` - Failed to connect within the timeout
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use sea_orm::{ConnectOptions, Database};

    tracing::info!("Connecting to {}", config.database.redacted());

    let mut opt = ConnectOptions::new(config.database.url());
    opt.connect_timeout(config.db_connect_timeout)
        .acquire_timeout(config.db_connect_timeout)
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Ok(db)
}

/// Creates the slides table if it does not exist yet.
///
/// Only run when explicitly requested with `--create-database`; running it against a
/// database that already has the table is a no-op.
///
/// # Returns
/// - `Ok(())` - Schema is present
/// - `Err(AppError::StorageUnavailable)` - Failed to create the schema
pub async fn create_schema(db: &sea_orm::DatabaseConnection) -> Result<(), AppError> {
    use migration::{Migrator, MigratorTrait};

    tracing::info!("Creating database schema");

    Migrator::up(db, None).await?;

    Ok(())
}

/// Assembles the application router.
///
/// API routes come first; anything else falls through to the front-end bundle when
/// `static_dir` exists. Request tracing wraps both.
pub fn app(state: AppState, max_body_bytes: usize, static_dir: &Path) -> Router {
    let app = router::router(max_body_bytes).with_state(state);

    let app = match static_files(static_dir) {
        Some(files) => app.fallback_service(files),
        None => app,
    };

    app.layer(TraceLayer::new_for_http())
}

/// Builds the file service for the front-end bundle.
///
/// Unknown paths are answered with `index.html` and a 200 status so client-side routes
/// load the application.
///
/// # Returns
/// - `Some(ServeDir)` - Directory exists and will be served
/// - `None` - Directory is missing; static file serving is disabled
pub fn static_files(dir: &Path) -> Option<ServeDir<ServeFile>> {
    if !dir.is_dir() {
        tracing::warn!(
            "Static files directory {:?} not found - static file serving disabled",
            dir
        );
        return None;
    }

    tracing::info!("Serving static files from {:?}", dir);

    Some(ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html"))))
}
