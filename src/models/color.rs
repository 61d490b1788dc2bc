// src/models/color.rs
// DOCUMENTATION: Color catalog data structures
// PURPOSE: Defines serialization/deserialization models for the colors API

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Purchase color record
/// DOCUMENTATION: Maps directly to the colors table
/// Color cost contributes to the purchase price per m² of cube surface
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Color {
    /// Unique identifier (UUID v4)
    pub id: Uuid,

    /// Color name, unique, used as the lookup key in URLs
    pub name: String,

    /// Cost per m2 of painted surface
    pub cost: i32,

    /// Optional free-form description
    pub description: String,
}

/// Request DTO for creating a new color
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct CreateColorRequest {
    #[validate(length(min = 1, max = 128))]
    pub name: String,

    #[validate(range(min = 0))]
    #[serde(default)]
    pub cost: i32,

    #[validate(length(max = 512))]
    #[serde(default)]
    pub description: String,
}

/// Request DTO for updating an existing color
/// DOCUMENTATION: All fields are optional - only provided fields are updated
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct UpdateColorRequest {
    #[validate(length(min = 1, max = 128))]
    pub name: Option<String>,

    #[validate(range(min = 0))]
    pub cost: Option<i32>,

    #[validate(length(max = 512))]
    pub description: Option<String>,
}

/// Compact color reference embedded in purchase responses
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ColorSummary {
    pub id: Uuid,
    pub name: String,
}

impl Color {
    pub fn to_summary(&self) -> ColorSummary {
        ColorSummary {
            id: self.id,
            name: self.name.clone(),
        }
    }
}
