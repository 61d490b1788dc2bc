// src/db/consult_repository.rs
// DOCUMENTATION: Database access layer for purchase consults
// PURPOSE: Abstract database operations from business logic

use crate::errors::StoreError;
use crate::models::{Consult, UpdateConsultRequest};
use sqlx::PgPool;
use uuid::Uuid;

/// ConsultRepository: All database operations for consults
/// DOCUMENTATION: Consults are created by PurchaseRepository::create and are
/// only ever read or updated through the purchase they belong to
pub struct ConsultRepository;

impl ConsultRepository {
    /// Fetch the consult attached to a purchase, if any
    pub async fn get_by_purchase(
        pool: &PgPool,
        purchase_id: Uuid,
    ) -> Result<Option<Consult>, StoreError> {
        sqlx::query_as::<_, Consult>(
            r#"
            SELECT id, purchase_id, comment, is_allowed, date_created, date_updated
            FROM consults
            WHERE purchase_id = $1
            "#,
        )
        .bind(purchase_id)
        .fetch_optional(pool)
        .await
        .map_err(|e| StoreError::from_db("consult", e))
    }

    /// Partial update of a purchase's consult; only provided fields change
    pub async fn update_by_purchase(
        pool: &PgPool,
        purchase_id: Uuid,
        req: &UpdateConsultRequest,
    ) -> Result<Consult, StoreError> {
        sqlx::query_as::<_, Consult>(
            r#"
            UPDATE consults
            SET comment = COALESCE($2, comment),
                is_allowed = COALESCE($3, is_allowed),
                date_updated = NOW()
            WHERE purchase_id = $1
            RETURNING id, purchase_id, comment, is_allowed, date_created, date_updated
            "#,
        )
        .bind(purchase_id)
        .bind(&req.comment)
        .bind(req.is_allowed)
        .fetch_optional(pool)
        .await
        .map_err(|e| StoreError::from_db("consult", e))?
        .ok_or_else(|| StoreError::NotFound("consult".to_string()))
    }
}
