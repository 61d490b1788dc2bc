// src/services/catalog_service.rs
// DOCUMENTATION: Business logic for the color/material/preset catalog
// PURPOSE: Intermediary between handlers and repositories, builds response DTOs

use crate::db::{ColorRepository, MaterialRepository, PreparedPurchaseRepository};
use crate::errors::StoreError;
use crate::models::{
    Color, CreateColorRequest, CreateMaterialRequest, CreatePreparedPurchaseRequest, Material,
    Page, PageQuery, PreparedPurchaseResponse, UpdateColorRequest, UpdateMaterialRequest,
    UpdatePreparedPurchaseRequest,
};
use sqlx::PgPool;
use uuid::Uuid;

pub struct CatalogService;

impl CatalogService {
    pub async fn create_color(pool: &PgPool, req: CreateColorRequest) -> Result<Color, StoreError> {
        ColorRepository::create(pool, &req).await
    }

    pub async fn get_color(pool: &PgPool, name: &str) -> Result<Color, StoreError> {
        ColorRepository::get_by_name(pool, name).await
    }

    pub async fn list_colors(pool: &PgPool, query: PageQuery) -> Result<Page<Color>, StoreError> {
        let (colors, total) = ColorRepository::list(pool, &query).await?;
        Ok(Page::new(colors, total, &query))
    }

    pub async fn update_color(
        pool: &PgPool,
        name: &str,
        req: UpdateColorRequest,
    ) -> Result<Color, StoreError> {
        ColorRepository::update_by_name(pool, name, &req).await
    }

    pub async fn delete_color(pool: &PgPool, name: &str) -> Result<(), StoreError> {
        ColorRepository::delete_by_name(pool, name).await
    }

    pub async fn create_material(
        pool: &PgPool,
        req: CreateMaterialRequest,
    ) -> Result<Material, StoreError> {
        MaterialRepository::create(pool, &req).await
    }

    pub async fn get_material(pool: &PgPool, name: &str) -> Result<Material, StoreError> {
        MaterialRepository::get_by_name(pool, name).await
    }

    pub async fn list_materials(
        pool: &PgPool,
        query: PageQuery,
    ) -> Result<Page<Material>, StoreError> {
        let (materials, total) = MaterialRepository::list(pool, &query).await?;
        Ok(Page::new(materials, total, &query))
    }

    pub async fn update_material(
        pool: &PgPool,
        name: &str,
        req: UpdateMaterialRequest,
    ) -> Result<Material, StoreError> {
        MaterialRepository::update_by_name(pool, name, &req).await
    }

    pub async fn delete_material(pool: &PgPool, name: &str) -> Result<(), StoreError> {
        MaterialRepository::delete_by_name(pool, name).await
    }

    /// Create a prepared purchase preset
    pub async fn create_prepared(
        pool: &PgPool,
        req: CreatePreparedPurchaseRequest,
    ) -> Result<PreparedPurchaseResponse, StoreError> {
        let (prepared, color, material) = PreparedPurchaseRepository::create(pool, &req).await?;
        Ok(PreparedPurchaseResponse::from_parts(&prepared, &color, &material))
    }

    pub async fn get_prepared(
        pool: &PgPool,
        id: Uuid,
    ) -> Result<PreparedPurchaseResponse, StoreError> {
        let (prepared, color, material) = PreparedPurchaseRepository::get_by_id(pool, id).await?;
        Ok(PreparedPurchaseResponse::from_parts(&prepared, &color, &material))
    }

    /// List presets with derived weight/price/delivery, the way customers
    /// browse them
    pub async fn list_prepared(
        pool: &PgPool,
        query: PageQuery,
    ) -> Result<Page<PreparedPurchaseResponse>, StoreError> {
        let (rows, total) = PreparedPurchaseRepository::list(pool, &query).await?;

        let data = rows
            .iter()
            .map(|(prepared, color, material)| {
                PreparedPurchaseResponse::from_parts(prepared, color, material)
            })
            .collect();

        Ok(Page::new(data, total, &query))
    }

    pub async fn update_prepared(
        pool: &PgPool,
        id: Uuid,
        req: UpdatePreparedPurchaseRequest,
    ) -> Result<PreparedPurchaseResponse, StoreError> {
        let (prepared, color, material) =
            PreparedPurchaseRepository::update(pool, id, &req).await?;
        Ok(PreparedPurchaseResponse::from_parts(&prepared, &color, &material))
    }

    pub async fn delete_prepared(pool: &PgPool, id: Uuid) -> Result<(), StoreError> {
        PreparedPurchaseRepository::delete(pool, id).await
    }
}
