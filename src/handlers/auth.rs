// src/handlers/auth.rs
// DOCUMENTATION: Token authentication endpoint
// PURPOSE: Exchange username/password for a bearer token

use crate::errors::StoreError;
use crate::models::TokenRequest;
use crate::services::AuthService;
use actix_web::{web, HttpResponse, Responder};
use sqlx::PgPool;

/// POST /auth/token
/// Obtain the bearer token for a user
pub async fn obtain_token(
    pool: web::Data<PgPool>,
    req: web::Json<TokenRequest>,
) -> Result<impl Responder, StoreError> {
    let token = AuthService::login(pool.get_ref(), &req).await?;
    Ok(HttpResponse::Ok().json(token))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/auth").route("/token", web::post().to(obtain_token)));
}
