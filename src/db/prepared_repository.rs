// src/db/prepared_repository.rs
// DOCUMENTATION: Database access layer for prepared purchase presets
// PURPOSE: Abstract database operations from business logic

use crate::errors::StoreError;
use crate::models::{
    Color, CreatePreparedPurchaseRequest, Material, PageQuery, PreparedPurchase, Size,
    UpdatePreparedPurchaseRequest,
};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

/// Internal struct for mapping joined prepared purchase rows
#[derive(Debug, FromRow)]
struct PreparedRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub size: Size,
    pub color_id: Uuid,
    pub color_name: String,
    pub color_cost: i32,
    pub color_description: String,
    pub material_id: Uuid,
    pub material_name: String,
    pub material_cost: i32,
    pub material_density: i32,
    pub material_description: String,
}

impl PreparedRow {
    /// Split the joined row back into model structs
    fn into_parts(self) -> (PreparedPurchase, Color, Material) {
        let prepared = PreparedPurchase {
            id: self.id,
            title: self.title,
            description: self.description,
            color_id: self.color_id,
            material_id: self.material_id,
            size: self.size,
        };

        let color = Color {
            id: self.color_id,
            name: self.color_name,
            cost: self.color_cost,
            description: self.color_description,
        };

        let material = Material {
            id: self.material_id,
            name: self.material_name,
            cost: self.material_cost,
            density: self.material_density,
            description: self.material_description,
        };

        (prepared, color, material)
    }
}

const PREPARED_SELECT: &str = r#"
    SELECT pp.id, pp.title, pp.description, pp.size,
           pp.color_id, c.name AS color_name, c.cost AS color_cost,
           c.description AS color_description,
           pp.material_id, m.name AS material_name, m.cost AS material_cost,
           m.density AS material_density, m.description AS material_description
    FROM prepared_purchases pp
    JOIN colors c ON c.id = pp.color_id
    JOIN materials m ON m.id = pp.material_id
"#;

/// PreparedPurchaseRepository: All database operations for prepared purchases
pub struct PreparedPurchaseRepository;

impl PreparedPurchaseRepository {
    /// Create new prepared purchase preset
    /// DOCUMENTATION: Validates the referenced color and material exist first
    /// so a bad reference is a 400, not a constraint violation
    pub async fn create(
        pool: &PgPool,
        req: &CreatePreparedPurchaseRequest,
    ) -> Result<(PreparedPurchase, Color, Material), StoreError> {
        let color = Self::fetch_color(pool, req.color_id).await?;
        let material = Self::fetch_material(pool, req.material_id).await?;

        let prepared = sqlx::query_as::<_, PreparedPurchase>(
            r#"
            INSERT INTO prepared_purchases (id, title, description, color_id, material_id, size)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, title, description, color_id, material_id, size
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&req.title)
        .bind(&req.description)
        .bind(req.color_id)
        .bind(req.material_id)
        .bind(req.size)
        .fetch_one(pool)
        .await
        .map_err(|e| StoreError::from_db("prepared purchase", e))?;

        Ok((prepared, color, material))
    }

    /// Fetch prepared purchase by id with its catalog rows
    pub async fn get_by_id(
        pool: &PgPool,
        id: Uuid,
    ) -> Result<(PreparedPurchase, Color, Material), StoreError> {
        let row = sqlx::query_as::<_, PreparedRow>(&format!("{} WHERE pp.id = $1", PREPARED_SELECT))
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| StoreError::from_db("prepared purchase", e))?
            .ok_or_else(|| StoreError::NotFound(format!("prepared purchase {}", id)))?;

        Ok(row.into_parts())
    }

    /// List prepared purchases ordered by title
    /// Returns tuple: (results, total_count) for pagination
    pub async fn list(
        pool: &PgPool,
        query: &PageQuery,
    ) -> Result<(Vec<(PreparedPurchase, Color, Material)>, i64), StoreError> {
        let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM prepared_purchases")
            .fetch_one(pool)
            .await
            .map_err(|e| StoreError::from_db("prepared purchases", e))?;

        let rows = sqlx::query_as::<_, PreparedRow>(&format!(
            "{} ORDER BY pp.title LIMIT $1 OFFSET $2",
            PREPARED_SELECT
        ))
        .bind(query.page_size())
        .bind(query.offset())
        .fetch_all(pool)
        .await
        .map_err(|e| StoreError::from_db("prepared purchases", e))?;

        Ok((rows.into_iter().map(PreparedRow::into_parts).collect(), total.0))
    }

    /// Partial update by id; only provided fields change
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        req: &UpdatePreparedPurchaseRequest,
    ) -> Result<(PreparedPurchase, Color, Material), StoreError> {
        if let Some(color_id) = req.color_id {
            Self::fetch_color(pool, color_id).await?;
        }
        if let Some(material_id) = req.material_id {
            Self::fetch_material(pool, material_id).await?;
        }

        let updated = sqlx::query_as::<_, PreparedPurchase>(
            r#"
            UPDATE prepared_purchases
            SET title = COALESCE($2, title),
                description = COALESCE($3, description),
                color_id = COALESCE($4, color_id),
                material_id = COALESCE($5, material_id),
                size = COALESCE($6, size)
            WHERE id = $1
            RETURNING id, title, description, color_id, material_id, size
            "#,
        )
        .bind(id)
        .bind(&req.title)
        .bind(&req.description)
        .bind(req.color_id)
        .bind(req.material_id)
        .bind(req.size)
        .fetch_optional(pool)
        .await
        .map_err(|e| StoreError::from_db("prepared purchase", e))?
        .ok_or_else(|| StoreError::NotFound(format!("prepared purchase {}", id)))?;

        Self::get_by_id(pool, updated.id).await
    }

    /// Delete prepared purchase by id
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), StoreError> {
        let rows = sqlx::query("DELETE FROM prepared_purchases WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(|e| StoreError::from_db("prepared purchase", e))?
            .rows_affected();

        if rows == 0 {
            return Err(StoreError::NotFound(format!("prepared purchase {}", id)));
        }

        log::info!("Deleted prepared purchase: {}", id);
        Ok(())
    }

    async fn fetch_color(pool: &PgPool, id: Uuid) -> Result<Color, StoreError> {
        sqlx::query_as::<_, Color>(
            "SELECT id, name, cost, description FROM colors WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| StoreError::from_db("color", e))?
        .ok_or_else(|| StoreError::InvalidInput(format!("unknown color: {}", id)))
    }

    async fn fetch_material(pool: &PgPool, id: Uuid) -> Result<Material, StoreError> {
        sqlx::query_as::<_, Material>(
            "SELECT id, name, cost, density, description FROM materials WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| StoreError::from_db("material", e))?
        .ok_or_else(|| StoreError::InvalidInput(format!("unknown material: {}", id)))
    }
}
