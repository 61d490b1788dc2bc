// src/handlers/admin.rs
// DOCUMENTATION: Admin handlers for operational status
// PURPOSE: Expose database statistics to superusers

use crate::errors::StoreError;
use crate::services::AuthService;
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use serde::Serialize;
use sqlx::PgPool;

/// Response for the admin status endpoint
#[derive(Debug, Serialize)]
pub struct AdminStatusResponse {
    /// Message describing service status
    pub message: String,
    /// Total purchases in database
    pub total_purchases: i64,
    /// Purchases still waiting for a decision
    pub waited_purchases: i64,
    /// Purchases created in last 24 hours
    pub recent_purchases: i64,
    /// Catalog sizes
    pub total_colors: i64,
    pub total_materials: i64,
}

/// GET /admin/status
/// Get database statistics
///
/// DOCUMENTATION: Requires a superuser bearer token
pub async fn status(
    pool: web::Data<PgPool>,
    req: HttpRequest,
) -> Result<impl Responder, StoreError> {
    let user = AuthService::authenticate(&req, pool.get_ref()).await?;
    AuthService::require_superuser(&user)?;

    let total_purchases: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM purchases")
        .fetch_one(pool.get_ref())
        .await
        .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

    let waited_purchases: (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM purchases WHERE state = 0")
            .fetch_one(pool.get_ref())
            .await
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

    let recent_purchases: (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM purchases WHERE date_created > NOW() - INTERVAL '24 hours'",
    )
    .fetch_one(pool.get_ref())
    .await
    .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

    let total_colors: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM colors")
        .fetch_one(pool.get_ref())
        .await
        .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

    let total_materials: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM materials")
        .fetch_one(pool.get_ref())
        .await
        .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

    let response = AdminStatusResponse {
        message: "Store service operational".to_string(),
        total_purchases: total_purchases.0,
        waited_purchases: waited_purchases.0,
        recent_purchases: recent_purchases.0,
        total_colors: total_colors.0,
        total_materials: total_materials.0,
    };

    Ok(HttpResponse::Ok().json(response))
}

/// Configuration for admin routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/admin").route("/status", web::get().to(status)));
}
