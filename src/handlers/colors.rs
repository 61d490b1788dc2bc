// src/handlers/colors.rs
// DOCUMENTATION: HTTP handlers for the color catalog
// PURPOSE: Parse requests, check permissions, call services, return responses

use crate::errors::StoreError;
use crate::models::{CreateColorRequest, PageQuery, UpdateColorRequest};
use crate::services::{AuthService, CatalogService};
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use sqlx::PgPool;
use validator::Validate;

/// GET /colors
/// List colors - the only color view open to unauthenticated customers
pub async fn list_colors(
    pool: web::Data<PgPool>,
    query: web::Query<PageQuery>,
) -> Result<impl Responder, StoreError> {
    let page = CatalogService::list_colors(pool.get_ref(), query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(page))
}

/// POST /colors
/// Create a new color (manufacturers only)
pub async fn create_color(
    pool: web::Data<PgPool>,
    req: HttpRequest,
    body: web::Json<CreateColorRequest>,
) -> Result<impl Responder, StoreError> {
    AuthService::authenticate(&req, pool.get_ref()).await?;

    if let Err(e) = body.validate() {
        return Err(StoreError::ValidationError(e.to_string()));
    }

    let color = CatalogService::create_color(pool.get_ref(), body.into_inner()).await?;
    Ok(HttpResponse::Created().json(color))
}

/// GET /colors/{name}
/// Retrieve a color by name (manufacturers only)
pub async fn get_color(
    pool: web::Data<PgPool>,
    req: HttpRequest,
    path: web::Path<String>,
) -> Result<impl Responder, StoreError> {
    AuthService::authenticate(&req, pool.get_ref()).await?;

    let color = CatalogService::get_color(pool.get_ref(), &path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(color))
}

/// PUT /colors/{name}
/// Update a color (manufacturers only)
pub async fn update_color(
    pool: web::Data<PgPool>,
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Json<UpdateColorRequest>,
) -> Result<impl Responder, StoreError> {
    AuthService::authenticate(&req, pool.get_ref()).await?;

    if let Err(e) = body.validate() {
        return Err(StoreError::ValidationError(e.to_string()));
    }

    let color =
        CatalogService::update_color(pool.get_ref(), &path.into_inner(), body.into_inner())
            .await?;
    Ok(HttpResponse::Ok().json(color))
}

/// DELETE /colors/{name}
/// Delete a color (manufacturers only); colors in use are protected
pub async fn delete_color(
    pool: web::Data<PgPool>,
    req: HttpRequest,
    path: web::Path<String>,
) -> Result<impl Responder, StoreError> {
    AuthService::authenticate(&req, pool.get_ref()).await?;

    CatalogService::delete_color(pool.get_ref(), &path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Configuration for color routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/colors")
            .route("", web::get().to(list_colors))
            .route("", web::post().to(create_color))
            .route("/{name}", web::get().to(get_color))
            .route("/{name}", web::put().to(update_color))
            .route("/{name}", web::delete().to(delete_color)),
    );
}
