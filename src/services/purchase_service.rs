// src/services/purchase_service.rs
// DOCUMENTATION: Business logic for purchases and their consults
// PURPOSE: Intermediary between handlers and repositories, handles extra logic

use crate::db::{ConsultRepository, PurchaseRepository};
use crate::errors::StoreError;
use crate::models::{
    ConsultResponse, CreatePurchaseRequest, Page, PageQuery, PurchaseResponse,
    UpdateConsultRequest, UpdatePurchaseRequest,
};
use sqlx::PgPool;

pub struct PurchaseService;

impl PurchaseService {
    /// Create a new purchase
    /// DOCUMENTATION: The repository opens a consult when the requested
    /// properties do not match any prepared preset
    pub async fn create_purchase(
        pool: &PgPool,
        req: CreatePurchaseRequest,
    ) -> Result<PurchaseResponse, StoreError> {
        let (purchase, color, material, _consult_created) =
            PurchaseRepository::create(pool, &req).await?;

        Ok(PurchaseResponse::from_parts(&purchase, &color, &material))
    }

    /// Get a purchase by its public code
    pub async fn get_purchase(pool: &PgPool, code: &str) -> Result<PurchaseResponse, StoreError> {
        let (purchase, color, material) = PurchaseRepository::get_by_code(pool, code).await?;
        Ok(PurchaseResponse::from_parts(&purchase, &color, &material))
    }

    /// List purchases, newest first
    pub async fn list_purchases(
        pool: &PgPool,
        query: PageQuery,
    ) -> Result<Page<PurchaseResponse>, StoreError> {
        let (rows, total) = PurchaseRepository::list(pool, &query).await?;

        let data = rows
            .iter()
            .map(|(purchase, color, material)| {
                PurchaseResponse::from_parts(purchase, color, material)
            })
            .collect();

        Ok(Page::new(data, total, &query))
    }

    pub async fn update_purchase(
        pool: &PgPool,
        code: &str,
        req: UpdatePurchaseRequest,
    ) -> Result<PurchaseResponse, StoreError> {
        let (purchase, color, material) =
            PurchaseRepository::update_by_code(pool, code, &req).await?;
        Ok(PurchaseResponse::from_parts(&purchase, &color, &material))
    }

    pub async fn delete_purchase(pool: &PgPool, code: &str) -> Result<(), StoreError> {
        PurchaseRepository::delete_by_code(pool, code).await
    }

    /// Get the consult attached to a purchase
    /// DOCUMENTATION: Prepared purchases have no consult; that is a 404,
    /// not an empty response
    pub async fn get_consult(pool: &PgPool, code: &str) -> Result<ConsultResponse, StoreError> {
        let (purchase, _, _) = PurchaseRepository::get_by_code(pool, code).await?;

        let consult = ConsultRepository::get_by_purchase(pool, purchase.id)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("consult for purchase {}", code)))?;

        Ok(consult.to_response(&purchase.code))
    }

    /// Update the consult attached to a purchase
    pub async fn update_consult(
        pool: &PgPool,
        code: &str,
        req: UpdateConsultRequest,
    ) -> Result<ConsultResponse, StoreError> {
        let (purchase, _, _) = PurchaseRepository::get_by_code(pool, code).await?;

        // Distinguish "no consult" from a racing delete
        ConsultRepository::get_by_purchase(pool, purchase.id)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("consult for purchase {}", code)))?;

        let consult = ConsultRepository::update_by_purchase(pool, purchase.id, &req).await?;
        Ok(consult.to_response(&purchase.code))
    }
}
