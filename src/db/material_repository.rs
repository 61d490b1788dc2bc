// src/db/material_repository.rs
// DOCUMENTATION: Database access layer for the material catalog
// PURPOSE: Abstract database operations from business logic

use crate::errors::StoreError;
use crate::models::{CreateMaterialRequest, Material, PageQuery, UpdateMaterialRequest};
use sqlx::PgPool;
use uuid::Uuid;

/// MaterialRepository: All database operations for materials
pub struct MaterialRepository;

impl MaterialRepository {
    /// Create new material in database
    /// Used by POST /materials endpoint
    pub async fn create(
        pool: &PgPool,
        req: &CreateMaterialRequest,
    ) -> Result<Material, StoreError> {
        sqlx::query_as::<_, Material>(
            r#"
            INSERT INTO materials (id, name, cost, density, description)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, cost, density, description
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&req.name)
        .bind(req.cost)
        .bind(req.density)
        .bind(&req.description)
        .fetch_one(pool)
        .await
        .map_err(|e| StoreError::from_db(&format!("material {}", req.name), e))
    }

    /// Fetch material by its unique name (the URL lookup key)
    pub async fn get_by_name(pool: &PgPool, name: &str) -> Result<Material, StoreError> {
        sqlx::query_as::<_, Material>(
            "SELECT id, name, cost, density, description FROM materials WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(pool)
        .await
        .map_err(|e| StoreError::from_db("material", e))?
        .ok_or_else(|| StoreError::NotFound(format!("material {}", name)))
    }

    /// List materials ordered by name
    /// Returns tuple: (results, total_count) for pagination
    pub async fn list(
        pool: &PgPool,
        query: &PageQuery,
    ) -> Result<(Vec<Material>, i64), StoreError> {
        let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM materials")
            .fetch_one(pool)
            .await
            .map_err(|e| StoreError::from_db("materials", e))?;

        let materials = sqlx::query_as::<_, Material>(
            r#"
            SELECT id, name, cost, density, description
            FROM materials
            ORDER BY name
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(query.page_size())
        .bind(query.offset())
        .fetch_all(pool)
        .await
        .map_err(|e| StoreError::from_db("materials", e))?;

        Ok((materials, total.0))
    }

    /// Partial update by name; only provided fields change
    pub async fn update_by_name(
        pool: &PgPool,
        name: &str,
        req: &UpdateMaterialRequest,
    ) -> Result<Material, StoreError> {
        sqlx::query_as::<_, Material>(
            r#"
            UPDATE materials
            SET name = COALESCE($2, name),
                cost = COALESCE($3, cost),
                density = COALESCE($4, density),
                description = COALESCE($5, description)
            WHERE name = $1
            RETURNING id, name, cost, density, description
            "#,
        )
        .bind(name)
        .bind(&req.name)
        .bind(req.cost)
        .bind(req.density)
        .bind(&req.description)
        .fetch_optional(pool)
        .await
        .map_err(|e| StoreError::from_db(&format!("material {}", name), e))?
        .ok_or_else(|| StoreError::NotFound(format!("material {}", name)))
    }

    /// Delete material by name
    /// DOCUMENTATION: Materials referenced by purchases are protected; the FK
    /// violation surfaces as a conflict error
    pub async fn delete_by_name(pool: &PgPool, name: &str) -> Result<(), StoreError> {
        let rows = sqlx::query("DELETE FROM materials WHERE name = $1")
            .bind(name)
            .execute(pool)
            .await
            .map_err(|e| StoreError::from_db(&format!("material {}", name), e))?
            .rows_affected();

        if rows == 0 {
            return Err(StoreError::NotFound(format!("material {}", name)));
        }

        log::info!("Deleted material: {}", name);
        Ok(())
    }
}
