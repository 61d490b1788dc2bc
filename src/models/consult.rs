// src/models/consult.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Purchase consult record
/// DOCUMENTATION: Created automatically for purchases with custom properties;
/// a consultant contacts the customer and records the decision here.
/// is_allowed stays NULL until the consult actually happened
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Consult {
    pub id: Uuid,
    pub purchase_id: Uuid,

    /// Consultant comment
    pub comment: String,

    /// None = not consulted yet, Some(true/false) = decision taken
    pub is_allowed: Option<bool>,

    pub date_created: DateTime<Utc>,
    pub date_updated: DateTime<Utc>,
}

/// Request DTO for updating a consult
/// DOCUMENTATION: Partial update - only provided fields change
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct UpdateConsultRequest {
    #[validate(length(max = 512))]
    pub comment: Option<String>,

    pub is_allowed: Option<bool>,
}

/// Response DTO for consult endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct ConsultResponse {
    pub id: Uuid,

    /// Code of the purchase this consult belongs to
    pub purchase_code: String,

    pub comment: String,
    pub is_allowed: Option<bool>,
    pub date_created: DateTime<Utc>,
    pub date_updated: DateTime<Utc>,
}

impl Consult {
    pub fn to_response(&self, purchase_code: &str) -> ConsultResponse {
        ConsultResponse {
            id: self.id,
            purchase_code: purchase_code.to_string(),
            comment: self.comment.clone(),
            is_allowed: self.is_allowed,
            date_created: self.date_created,
            date_updated: self.date_updated,
        }
    }
}
