// src/db/purchase_repository.rs
// DOCUMENTATION: Database access layer for purchases
// PURPOSE: Abstract database operations from business logic

use crate::errors::StoreError;
use crate::models::{
    Color, CreatePurchaseRequest, Material, PageQuery, Purchase, PurchaseState, Size,
    UpdatePurchaseRequest,
};
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

/// Internal struct for mapping joined purchase rows
#[derive(Debug, FromRow)]
struct PurchaseRow {
    pub id: Uuid,
    pub code: String,
    pub size: Size,
    pub state: PurchaseState,
    pub address: String,
    pub date_created: DateTime<Utc>,
    pub date_updated: DateTime<Utc>,
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

impl PurchaseRow {
    /// Split the joined row back into model structs
    fn into_parts(self) -> (Purchase, Color, Material) {
        let purchase = Purchase {
            id: self.id,
            code: self.code,
            color_id: self.color_id,
            material_id: self.material_id,
            size: self.size,
            state: self.state,
            address: self.address,
            date_created: self.date_created,
            date_updated: self.date_updated,
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

        (purchase, color, material)
    }
}

const PURCHASE_SELECT: &str = r#"
    SELECT p.id, p.code, p.size, p.state, p.address, p.date_created, p.date_updated,
           p.color_id, c.name AS color_name, c.cost AS color_cost,
           c.description AS color_description,
           p.material_id, m.name AS material_name, m.cost AS material_cost,
           m.density AS material_density, m.description AS material_description
    FROM purchases p
    JOIN colors c ON c.id = p.color_id
    JOIN materials m ON m.id = p.material_id
"#;

/// PurchaseRepository: All database operations for purchases
/// DOCUMENTATION: Purchase creation also decides the consult workflow, so the
/// insert and the consult row go through one transaction
pub struct PurchaseRepository;

impl PurchaseRepository {
    /// Create a new purchase
    /// DOCUMENTATION: If the color/material/size combination does not match
    /// any prepared preset, a consult row is created alongside the purchase.
    /// Returns the created purchase with its catalog rows and whether a
    /// consult was opened.
    pub async fn create(
        pool: &PgPool,
        req: &CreatePurchaseRequest,
    ) -> Result<(Purchase, Color, Material, bool), StoreError> {
        let mut tx = pool
            .begin()
            .await
            .map_err(|e| StoreError::from_db("purchase", e))?;

        // Resolve the referenced catalog rows first; a bad reference is a 400
        let color = sqlx::query_as::<_, Color>(
            "SELECT id, name, cost, description FROM colors WHERE id = $1",
        )
        .bind(req.color_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| StoreError::from_db("color", e))?
        .ok_or_else(|| StoreError::InvalidInput(format!("unknown color: {}", req.color_id)))?;

        let material = sqlx::query_as::<_, Material>(
            "SELECT id, name, cost, density, description FROM materials WHERE id = $1",
        )
        .bind(req.material_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| StoreError::from_db("material", e))?
        .ok_or_else(|| {
            StoreError::InvalidInput(format!("unknown material: {}", req.material_id))
        })?;

        let code = Uuid::new_v4().simple().to_string();

        let purchase = sqlx::query_as::<_, Purchase>(
            r#"
            INSERT INTO purchases (id, code, color_id, material_id, size, state, address)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, code, color_id, material_id, size, state, address,
                      date_created, date_updated
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&code)
        .bind(req.color_id)
        .bind(req.material_id)
        .bind(req.size)
        .bind(PurchaseState::Waited)
        .bind(&req.address)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| StoreError::from_db("purchase", e))?;

        // Purchases with custom properties must be consulted before acceptance
        let prepared: (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM prepared_purchases
                WHERE color_id = $1 AND material_id = $2 AND size = $3
            )
            "#,
        )
        .bind(req.color_id)
        .bind(req.material_id)
        .bind(req.size)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| StoreError::from_db("prepared purchases", e))?;

        let consult_created = !prepared.0;
        if consult_created {
            sqlx::query(
                "INSERT INTO consults (id, purchase_id, comment, is_allowed) VALUES ($1, $2, '', NULL)",
            )
            .bind(Uuid::new_v4())
            .bind(purchase.id)
            .execute(&mut *tx)
            .await
            .map_err(|e| StoreError::from_db("consult", e))?;
        }

        tx.commit()
            .await
            .map_err(|e| StoreError::from_db("purchase", e))?;

        log::info!(
            "Created purchase {} ({})",
            purchase.code,
            if consult_created {
                "custom, consult opened"
            } else {
                "prepared"
            }
        );

        Ok((purchase, color, material, consult_created))
    }

    /// Fetch purchase by its public code
    pub async fn get_by_code(
        pool: &PgPool,
        code: &str,
    ) -> Result<(Purchase, Color, Material), StoreError> {
        let row = sqlx::query_as::<_, PurchaseRow>(&format!("{} WHERE p.code = $1", PURCHASE_SELECT))
            .bind(code)
            .fetch_optional(pool)
            .await
            .map_err(|e| StoreError::from_db("purchase", e))?
            .ok_or_else(|| StoreError::NotFound(format!("purchase {}", code)))?;

        Ok(row.into_parts())
    }

    /// List purchases, newest first
    /// Returns tuple: (results, total_count) for pagination
    pub async fn list(
        pool: &PgPool,
        query: &PageQuery,
    ) -> Result<(Vec<(Purchase, Color, Material)>, i64), StoreError> {
        let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM purchases")
            .fetch_one(pool)
            .await
            .map_err(|e| StoreError::from_db("purchases", e))?;

        let rows = sqlx::query_as::<_, PurchaseRow>(&format!(
            "{} ORDER BY p.date_created DESC, p.date_updated LIMIT $1 OFFSET $2",
            PURCHASE_SELECT
        ))
        .bind(query.page_size())
        .bind(query.offset())
        .fetch_all(pool)
        .await
        .map_err(|e| StoreError::from_db("purchases", e))?;

        Ok((rows.into_iter().map(PurchaseRow::into_parts).collect(), total.0))
    }

    /// Partial update by code; only provided fields change
    pub async fn update_by_code(
        pool: &PgPool,
        code: &str,
        req: &UpdatePurchaseRequest,
    ) -> Result<(Purchase, Color, Material), StoreError> {
        // A bad catalog reference is a 400, not a constraint violation
        if let Some(color_id) = req.color_id {
            let exists: (bool,) =
                sqlx::query_as("SELECT EXISTS (SELECT 1 FROM colors WHERE id = $1)")
                    .bind(color_id)
                    .fetch_one(pool)
                    .await
                    .map_err(|e| StoreError::from_db("color", e))?;
            if !exists.0 {
                return Err(StoreError::InvalidInput(format!("unknown color: {}", color_id)));
            }
        }

        if let Some(material_id) = req.material_id {
            let exists: (bool,) =
                sqlx::query_as("SELECT EXISTS (SELECT 1 FROM materials WHERE id = $1)")
                    .bind(material_id)
                    .fetch_one(pool)
                    .await
                    .map_err(|e| StoreError::from_db("material", e))?;
            if !exists.0 {
                return Err(StoreError::InvalidInput(format!(
                    "unknown material: {}",
                    material_id
                )));
            }
        }

        let updated = sqlx::query_as::<_, Purchase>(
            r#"
            UPDATE purchases
            SET color_id = COALESCE($2, color_id),
                material_id = COALESCE($3, material_id),
                size = COALESCE($4, size),
                state = COALESCE($5, state),
                address = COALESCE($6, address),
                date_updated = NOW()
            WHERE code = $1
            RETURNING id, code, color_id, material_id, size, state, address,
                      date_created, date_updated
            "#,
        )
        .bind(code)
        .bind(req.color_id)
        .bind(req.material_id)
        .bind(req.size)
        .bind(req.state)
        .bind(&req.address)
        .fetch_optional(pool)
        .await
        .map_err(|e| StoreError::from_db(&format!("purchase {}", code), e))?
        .ok_or_else(|| StoreError::NotFound(format!("purchase {}", code)))?;

        log::info!("Updated purchase: {}", updated.code);
        Self::get_by_code(pool, &updated.code).await
    }

    /// Delete purchase by code; its consult cascades
    pub async fn delete_by_code(pool: &PgPool, code: &str) -> Result<(), StoreError> {
        let rows = sqlx::query("DELETE FROM purchases WHERE code = $1")
            .bind(code)
            .execute(pool)
            .await
            .map_err(|e| StoreError::from_db(&format!("purchase {}", code), e))?
            .rows_affected();

        if rows == 0 {
            return Err(StoreError::NotFound(format!("purchase {}", code)));
        }

        log::info!("Deleted purchase: {}", code);
        Ok(())
    }
}
