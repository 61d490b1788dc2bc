// src/models/user.rs
// DOCUMENTATION: User account and token data structures
// PURPOSE: Models for authentication and the admin provisioning step

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Application user account
/// DOCUMENTATION: Maps directly to the users table
/// The password hash never leaves the server
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,

    /// Salted hash, format: sha256$<salt>$<hexdigest>
    #[serde(skip_serializing)]
    pub password_hash: String,

    pub is_superuser: bool,
    pub date_joined: DateTime<Utc>,
}

/// Request DTO for POST /auth/token
#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
}

/// Response DTO for POST /auth/token
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}
