// src/models/material.rs
// DOCUMENTATION: Material catalog data structures
// PURPOSE: Defines serialization/deserialization models for the materials API

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Purchase material record
/// DOCUMENTATION: Maps directly to the materials table
/// Density reference values are taken from
/// https://www.galakmet.ru/directory/density/
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Material {
    /// Unique identifier (UUID v4)
    pub id: Uuid,

    /// Material name, unique, used as the lookup key in URLs
    pub name: String,

    /// Cost per m3 of material
    pub cost: i32,

    /// Density in kg/m3 units
    pub density: i32,

    /// Optional free-form description
    pub description: String,
}

/// Request DTO for creating a new material
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct CreateMaterialRequest {
    #[validate(length(min = 1, max = 128))]
    pub name: String,

    #[validate(range(min = 0))]
    #[serde(default)]
    pub cost: i32,

    #[validate(range(min = 0))]
    #[serde(default)]
    pub density: i32,

    #[validate(length(max = 512))]
    #[serde(default)]
    pub description: String,
}

/// Request DTO for updating an existing material
/// DOCUMENTATION: All fields are optional - only provided fields are updated
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct UpdateMaterialRequest {
    #[validate(length(min = 1, max = 128))]
    pub name: Option<String>,

    #[validate(range(min = 0))]
    pub cost: Option<i32>,

    #[validate(range(min = 0))]
    pub density: Option<i32>,

    #[validate(length(max = 512))]
    pub description: Option<String>,
}

/// Compact material reference embedded in purchase responses
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MaterialSummary {
    pub id: Uuid,
    pub name: String,
}

impl Material {
    pub fn to_summary(&self) -> MaterialSummary {
        MaterialSummary {
            id: self.id,
            name: self.name.clone(),
        }
    }
}
