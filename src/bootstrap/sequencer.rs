// src/bootstrap/sequencer.rs
// DOCUMENTATION: Ordered startup sequence run once per process start
// PURPOSE: Migrate schema, publish static assets and provision the admin
// account before the HTTP server binds

use crate::bootstrap::static_files;
use crate::config::Config;
use crate::db::UserRepository;
use crate::errors::StoreError;
use crate::services::AuthService;
use sqlx::migrate::Migrator;
use sqlx::PgPool;
use std::path::Path;
use thiserror::Error;

/// Migrations embedded at compile time from the migrations/ directory
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Failure of one bootstrap step
/// DOCUMENTATION: The first failed step aborts the whole sequence; main maps
/// any of these to a non-zero process exit
#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error("migrate step failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("collectstatic step failed: {0}")]
    StaticFiles(#[from] std::io::Error),

    #[error("admin provisioning step failed: {0}")]
    Admin(#[from] StoreError),
}

/// Run the bootstrap sequence
/// DOCUMENTATION: Step order is load-bearing - schema first, then assets,
/// then the admin account. The caller only starts the server after this
/// returns Ok, so a failed migration never serves requests against a stale
/// schema.
pub async fn run(pool: &PgPool, config: &Config) -> Result<(), BootstrapError> {
    apply_migrations(pool).await?;
    collect_static(config)?;
    ensure_admin(pool, config).await?;
    Ok(())
}

/// Step 1: apply pending database migrations
/// Idempotent - sqlx tracks applied versions in its ledger table
async fn apply_migrations(pool: &PgPool) -> Result<(), BootstrapError> {
    log::info!("Applying database migrations...");
    MIGRATOR.run(pool).await?;
    log::info!("Database schema is up to date");
    Ok(())
}

/// Step 2: publish static assets into the static root
/// Idempotent - republishes the same output set each run
fn collect_static(config: &Config) -> Result<(), BootstrapError> {
    log::info!("Collecting static assets...");

    let stats = static_files::collect(
        Path::new(&config.static_source),
        Path::new(&config.static_root),
    )?;

    log::info!(
        "Collected {} static files into {}",
        stats.files_copied,
        config.static_root
    );
    Ok(())
}

/// Step 3: ensure the admin account exists
/// DOCUMENTATION: Credentials come from the environment only. Without
/// ADMIN_USERNAME the step is skipped; an existing account is left untouched
/// rather than updated, matching non-interactive provisioning semantics
async fn ensure_admin(pool: &PgPool, config: &Config) -> Result<(), BootstrapError> {
    if config.admin_username.is_empty() {
        log::warn!("ADMIN_USERNAME not set - skipping admin provisioning");
        return Ok(());
    }

    log::info!("Ensuring admin account: {}", config.admin_username);

    let password_hash = AuthService::hash_password(&config.admin_password);
    let created = UserRepository::ensure_superuser(
        pool,
        &config.admin_username,
        &config.admin_email,
        &password_hash,
    )
    .await?;

    if created {
        log::info!("Created admin account: {}", config.admin_username);
    } else {
        log::info!(
            "Admin account {} already exists - leaving it untouched",
            config.admin_username
        );
    }
    Ok(())
}
