// src/handlers/purchases.rs
// DOCUMENTATION: HTTP handlers for purchases and their consults
// PURPOSE: Parse requests, check permissions, call services, return responses

use crate::errors::StoreError;
use crate::models::{
    CreatePurchaseRequest, PageQuery, UpdateConsultRequest, UpdatePurchaseRequest,
};
use crate::services::{AuthService, PurchaseService};
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use sqlx::PgPool;
use validator::Validate;

/// POST /purchases
/// Create a new purchase - open to customers; the returned code is the
/// customer's handle for later retrieval
pub async fn create_purchase(
    pool: web::Data<PgPool>,
    body: web::Json<CreatePurchaseRequest>,
) -> Result<impl Responder, StoreError> {
    if let Err(e) = body.validate() {
        return Err(StoreError::ValidationError(e.to_string()));
    }

    let purchase = PurchaseService::create_purchase(pool.get_ref(), body.into_inner()).await?;
    Ok(HttpResponse::Created().json(purchase))
}

/// GET /purchases/{code}
/// Retrieve a purchase by code - open to customers
pub async fn get_purchase(
    pool: web::Data<PgPool>,
    path: web::Path<String>,
) -> Result<impl Responder, StoreError> {
    let purchase = PurchaseService::get_purchase(pool.get_ref(), &path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(purchase))
}

/// GET /purchases
/// List purchases, newest first (manufacturers only)
pub async fn list_purchases(
    pool: web::Data<PgPool>,
    req: HttpRequest,
    query: web::Query<PageQuery>,
) -> Result<impl Responder, StoreError> {
    AuthService::authenticate(&req, pool.get_ref()).await?;

    let page = PurchaseService::list_purchases(pool.get_ref(), query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(page))
}

/// PUT /purchases/{code}
/// Update a purchase (manufacturers only)
pub async fn update_purchase(
    pool: web::Data<PgPool>,
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Json<UpdatePurchaseRequest>,
) -> Result<impl Responder, StoreError> {
    AuthService::authenticate(&req, pool.get_ref()).await?;

    if let Err(e) = body.validate() {
        return Err(StoreError::ValidationError(e.to_string()));
    }

    let purchase =
        PurchaseService::update_purchase(pool.get_ref(), &path.into_inner(), body.into_inner())
            .await?;
    Ok(HttpResponse::Ok().json(purchase))
}

/// DELETE /purchases/{code}
/// Delete a purchase (manufacturers only); its consult cascades
pub async fn delete_purchase(
    pool: web::Data<PgPool>,
    req: HttpRequest,
    path: web::Path<String>,
) -> Result<impl Responder, StoreError> {
    AuthService::authenticate(&req, pool.get_ref()).await?;

    PurchaseService::delete_purchase(pool.get_ref(), &path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// GET /purchases/{code}/consult
/// Read the consult attached to a custom purchase (manufacturers only)
pub async fn get_consult(
    pool: web::Data<PgPool>,
    req: HttpRequest,
    path: web::Path<String>,
) -> Result<impl Responder, StoreError> {
    AuthService::authenticate(&req, pool.get_ref()).await?;

    let consult = PurchaseService::get_consult(pool.get_ref(), &path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(consult))
}

/// PUT/PATCH /purchases/{code}/consult
/// Record the consultant's decision (manufacturers only)
pub async fn update_consult(
    pool: web::Data<PgPool>,
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Json<UpdateConsultRequest>,
) -> Result<impl Responder, StoreError> {
    AuthService::authenticate(&req, pool.get_ref()).await?;

    if let Err(e) = body.validate() {
        return Err(StoreError::ValidationError(e.to_string()));
    }

    let consult =
        PurchaseService::update_consult(pool.get_ref(), &path.into_inner(), body.into_inner())
            .await?;
    Ok(HttpResponse::Ok().json(consult))
}

/// Configuration for purchase routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/purchases")
            .route("", web::get().to(list_purchases))
            .route("", web::post().to(create_purchase))
            .route("/{code}/consult", web::get().to(get_consult))
            .route("/{code}/consult", web::put().to(update_consult))
            .route("/{code}/consult", web::patch().to(update_consult))
            .route("/{code}", web::get().to(get_purchase))
            .route("/{code}", web::put().to(update_purchase))
            .route("/{code}", web::delete().to(delete_purchase)),
    );
}
