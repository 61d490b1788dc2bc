// src/handlers/prepared.rs
// DOCUMENTATION: HTTP handlers for prepared purchase presets
// PURPOSE: Parse requests, check permissions, call services, return responses

use crate::errors::StoreError;
use crate::models::{CreatePreparedPurchaseRequest, PageQuery, UpdatePreparedPurchaseRequest};
use crate::services::{AuthService, CatalogService};
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

/// GET /prepared-purchases
/// List presets with derived price/weight/delivery - open to customers
pub async fn list_prepared(
    pool: web::Data<PgPool>,
    query: web::Query<PageQuery>,
) -> Result<impl Responder, StoreError> {
    let page = CatalogService::list_prepared(pool.get_ref(), query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(page))
}

/// POST /prepared-purchases
/// Create a preset (manufacturers only)
pub async fn create_prepared(
    pool: web::Data<PgPool>,
    req: HttpRequest,
    body: web::Json<CreatePreparedPurchaseRequest>,
) -> Result<impl Responder, StoreError> {
    AuthService::authenticate(&req, pool.get_ref()).await?;

    if let Err(e) = body.validate() {
        return Err(StoreError::ValidationError(e.to_string()));
    }

    let prepared = CatalogService::create_prepared(pool.get_ref(), body.into_inner()).await?;
    Ok(HttpResponse::Created().json(prepared))
}

/// GET /prepared-purchases/{id}
/// Retrieve a preset (manufacturers only)
pub async fn get_prepared(
    pool: web::Data<PgPool>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> Result<impl Responder, StoreError> {
    AuthService::authenticate(&req, pool.get_ref()).await?;

    let prepared = CatalogService::get_prepared(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(prepared))
}

/// PUT /prepared-purchases/{id}
/// Update a preset (manufacturers only)
pub async fn update_prepared(
    pool: web::Data<PgPool>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    body: web::Json<UpdatePreparedPurchaseRequest>,
) -> Result<impl Responder, StoreError> {
    AuthService::authenticate(&req, pool.get_ref()).await?;

    if let Err(e) = body.validate() {
        return Err(StoreError::ValidationError(e.to_string()));
    }

    let prepared =
        CatalogService::update_prepared(pool.get_ref(), path.into_inner(), body.into_inner())
            .await?;
    Ok(HttpResponse::Ok().json(prepared))
}

/// DELETE /prepared-purchases/{id}
/// Delete a preset (manufacturers only)
pub async fn delete_prepared(
    pool: web::Data<PgPool>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> Result<impl Responder, StoreError> {
    AuthService::authenticate(&req, pool.get_ref()).await?;

    CatalogService::delete_prepared(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Configuration for prepared purchase routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/prepared-purchases")
            .route("", web::get().to(list_prepared))
            .route("", web::post().to(create_prepared))
            .route("/{id}", web::get().to(get_prepared))
            .route("/{id}", web::put().to(update_prepared))
            .route("/{id}", web::delete().to(delete_prepared)),
    );
}
