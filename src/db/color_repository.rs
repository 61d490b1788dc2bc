// src/db/color_repository.rs
// DOCUMENTATION: Database access layer for the color catalog
// PURPOSE: Abstract database operations from business logic

use crate::errors::StoreError;
use crate::models::{Color, CreateColorRequest, PageQuery, UpdateColorRequest};
use sqlx::PgPool;
use uuid::Uuid;

/// ColorRepository: All database operations for colors
pub struct ColorRepository;

impl ColorRepository {
    /// Create new color in database
    /// Used by POST /colors endpoint
    pub async fn create(pool: &PgPool, req: &CreateColorRequest) -> Result<Color, StoreError> {
        sqlx::query_as::<_, Color>(
            r#"
            INSERT INTO colors (id, name, cost, description)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, cost, description
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&req.name)
        .bind(req.cost)
        .bind(&req.description)
        .fetch_one(pool)
        .await
        .map_err(|e| StoreError::from_db(&format!("color {}", req.name), e))
    }

    /// Fetch color by its unique name (the URL lookup key)
    pub async fn get_by_name(pool: &PgPool, name: &str) -> Result<Color, StoreError> {
        sqlx::query_as::<_, Color>(
            "SELECT id, name, cost, description FROM colors WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(pool)
        .await
        .map_err(|e| StoreError::from_db("color", e))?
        .ok_or_else(|| StoreError::NotFound(format!("color {}", name)))
    }

    /// List colors ordered by name
    /// Returns tuple: (results, total_count) for pagination
    pub async fn list(pool: &PgPool, query: &PageQuery) -> Result<(Vec<Color>, i64), StoreError> {
        let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM colors")
            .fetch_one(pool)
            .await
            .map_err(|e| StoreError::from_db("colors", e))?;

        let colors = sqlx::query_as::<_, Color>(
            r#"
            SELECT id, name, cost, description
            FROM colors
            ORDER BY name
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(query.page_size())
        .bind(query.offset())
        .fetch_all(pool)
        .await
        .map_err(|e| StoreError::from_db("colors", e))?;

        Ok((colors, total.0))
    }

    /// Partial update by name; only provided fields change
    pub async fn update_by_name(
        pool: &PgPool,
        name: &str,
        req: &UpdateColorRequest,
    ) -> Result<Color, StoreError> {
        sqlx::query_as::<_, Color>(
            r#"
            UPDATE colors
            SET name = COALESCE($2, name),
                cost = COALESCE($3, cost),
                description = COALESCE($4, description)
            WHERE name = $1
            RETURNING id, name, cost, description
            "#,
        )
        .bind(name)
        .bind(&req.name)
        .bind(req.cost)
        .bind(&req.description)
        .fetch_optional(pool)
        .await
        .map_err(|e| StoreError::from_db(&format!("color {}", name), e))?
        .ok_or_else(|| StoreError::NotFound(format!("color {}", name)))
    }

    /// Delete color by name
    /// DOCUMENTATION: Colors referenced by purchases are protected; the FK
    /// violation surfaces as a conflict error
    pub async fn delete_by_name(pool: &PgPool, name: &str) -> Result<(), StoreError> {
        let rows = sqlx::query("DELETE FROM colors WHERE name = $1")
            .bind(name)
            .execute(pool)
            .await
            .map_err(|e| StoreError::from_db(&format!("color {}", name), e))?
            .rows_affected();

        if rows == 0 {
            return Err(StoreError::NotFound(format!("color {}", name)));
        }

        log::info!("Deleted color: {}", name);
        Ok(())
    }
}
