// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Run the bootstrap sequence (migrate, collectstatic, ensure admin)
// and start the HTTP server

mod bootstrap;
mod config;
mod db;
mod errors;
mod handlers;
mod models;
mod services;

use actix_web::{middleware::Logger, web, App, HttpServer};
use config::Config;
use dotenv::dotenv;
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", config.default_log_filter());
    }
    env_logger::init();

    log::info!("Starting westland-store...");

    if let Err(e) = config.validate() {
        log::error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    log::info!(
        "Server Address: {}:{}",
        config.server_address,
        config.server_port
    );

    // 4. Initialize database connection pool
    let pool = match config::init_db_pool(&config).await {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };

    // 5. Run the bootstrap sequence: migrate, collect static, ensure admin.
    // The first failed step aborts the process before the next step runs,
    // so the server never comes up against a stale schema
    if let Err(e) = bootstrap::run(&pool, &config).await {
        log::error!("Bootstrap failed: {}", e);
        std::process::exit(1);
    }

    // 6. Start HTTP server - the long-lived foreground process
    let server_addr = format!("{}:{}", config.server_address, config.server_port);
    let config_clone = config.clone();

    HttpServer::new(move || {
        App::new()
            // Application state (database pool and config)
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(config_clone.clone()))
            // Middleware
            .wrap(Logger::default())
            .wrap(actix_web::middleware::Compress::default())
            // Routes
            .configure(handlers::health_config)
            .configure(handlers::auth_config)
            .configure(handlers::colors_config)
            .configure(handlers::materials_config)
            .configure(handlers::prepared_config)
            .configure(handlers::purchases_config)
            .configure(handlers::admin_config)
    })
    .bind(&server_addr)?
    .run()
    .await
}
