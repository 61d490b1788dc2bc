// src/handlers/materials.rs
// DOCUMENTATION: HTTP handlers for the material catalog
// PURPOSE: Parse requests, check permissions, call services, return responses

use crate::errors::StoreError;
use crate::models::{CreateMaterialRequest, PageQuery, UpdateMaterialRequest};
use crate::services::{AuthService, CatalogService};
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use sqlx::PgPool;
use validator::Validate;

/// GET /materials
/// List materials - the only material view open to unauthenticated customers
pub async fn list_materials(
    pool: web::Data<PgPool>,
    query: web::Query<PageQuery>,
) -> Result<impl Responder, StoreError> {
    let page = CatalogService::list_materials(pool.get_ref(), query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(page))
}

/// POST /materials
/// Create a new material (manufacturers only)
pub async fn create_material(
    pool: web::Data<PgPool>,
    req: HttpRequest,
    body: web::Json<CreateMaterialRequest>,
) -> Result<impl Responder, StoreError> {
    AuthService::authenticate(&req, pool.get_ref()).await?;

    if let Err(e) = body.validate() {
        return Err(StoreError::ValidationError(e.to_string()));
    }

    let material = CatalogService::create_material(pool.get_ref(), body.into_inner()).await?;
    Ok(HttpResponse::Created().json(material))
}

/// GET /materials/{name}
/// Retrieve a material by name (manufacturers only)
pub async fn get_material(
    pool: web::Data<PgPool>,
    req: HttpRequest,
    path: web::Path<String>,
) -> Result<impl Responder, StoreError> {
    AuthService::authenticate(&req, pool.get_ref()).await?;

    let material = CatalogService::get_material(pool.get_ref(), &path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(material))
}

/// PUT /materials/{name}
/// Update a material (manufacturers only)
pub async fn update_material(
    pool: web::Data<PgPool>,
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Json<UpdateMaterialRequest>,
) -> Result<impl Responder, StoreError> {
    AuthService::authenticate(&req, pool.get_ref()).await?;

    if let Err(e) = body.validate() {
        return Err(StoreError::ValidationError(e.to_string()));
    }

    let material =
        CatalogService::update_material(pool.get_ref(), &path.into_inner(), body.into_inner())
            .await?;
    Ok(HttpResponse::Ok().json(material))
}

/// DELETE /materials/{name}
/// Delete a material (manufacturers only); materials in use are protected
pub async fn delete_material(
    pool: web::Data<PgPool>,
    req: HttpRequest,
    path: web::Path<String>,
) -> Result<impl Responder, StoreError> {
    AuthService::authenticate(&req, pool.get_ref()).await?;

    CatalogService::delete_material(pool.get_ref(), &path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Configuration for material routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/materials")
            .route("", web::get().to(list_materials))
            .route("", web::post().to(create_material))
            .route("/{name}", web::get().to(get_material))
            .route("/{name}", web::put().to(update_material))
            .route("/{name}", web::delete().to(delete_material)),
    );
}
