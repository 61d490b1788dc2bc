// src/handlers/health.rs
// DOCUMENTATION: Health check handler
// PURPOSE: Verify service and database status

use actix_web::{web, HttpResponse, Responder};
use serde_json::json;
use sqlx::PgPool;

/// GET /health
/// Reports degraded (503) when the database stops answering
pub async fn health_check(pool: web::Data<PgPool>) -> impl Responder {
    let database = sqlx::query("SELECT 1").execute(pool.get_ref()).await.is_ok();

    let body = json!({
        "status": if database { "ok" } else { "degraded" },
        "database": database,
        "service": "westland-store",
        "version": env!("CARGO_PKG_VERSION")
    });

    if database {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}
