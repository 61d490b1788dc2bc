// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Comprehensive error enum for all possible failures
/// Each variant maps to appropriate HTTP status code and error response
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Still referenced by other records: {0}")]
    ProtectedReference(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Unauthorized access")]
    Unauthorized,

    #[error("Forbidden access")]
    Forbidden,

    #[error("Internal server error")]
    #[allow(dead_code)]
    InternalError,
}

impl StoreError {
    /// Map a sqlx error to a domain error
    /// DOCUMENTATION: Inspects SQLSTATE codes for constraint violations
    /// 23505 = unique violation, 23503 = foreign key violation (PROTECT semantics)
    pub fn from_db(context: &str, e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &e {
            if let Some(code) = db_err.code() {
                if code == "23505" {
                    return StoreError::AlreadyExists(context.to_string());
                }
                if code == "23503" {
                    return StoreError::ProtectedReference(context.to_string());
                }
            }
        }

        log::error!("Database error ({}): {}", context, e);
        StoreError::DatabaseError(e.to_string())
    }
}

/// Convert StoreError to HTTP response
/// DOCUMENTATION: Maps error types to HTTP status codes and JSON responses
impl ResponseError for StoreError {
    fn error_response(&self) -> HttpResponse {
        let (status, error_code) = match self {
            StoreError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            StoreError::AlreadyExists(_) => (StatusCode::CONFLICT, "ALREADY_EXISTS"),
            StoreError::ProtectedReference(_) => (StatusCode::CONFLICT, "PROTECTED_REFERENCE"),
            StoreError::DatabaseError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR"),
            StoreError::InvalidInput(_) => (StatusCode::BAD_REQUEST, "INVALID_INPUT"),
            StoreError::ValidationError(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            StoreError::Unauthorized => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            StoreError::Forbidden => (StatusCode::FORBIDDEN, "FORBIDDEN"),
            StoreError::InternalError => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = json!({
            "error": {
                "code": error_code,
                "message": self.to_string(),
                "timestamp": chrono::Utc::now().to_rfc3339()
            }
        });

        HttpResponse::build(status).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            StoreError::NotFound(_) => StatusCode::NOT_FOUND,
            StoreError::AlreadyExists(_) => StatusCode::CONFLICT,
            StoreError::ProtectedReference(_) => StatusCode::CONFLICT,
            StoreError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            StoreError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            StoreError::ValidationError(_) => StatusCode::BAD_REQUEST,
            StoreError::Unauthorized => StatusCode::UNAUTHORIZED,
            StoreError::Forbidden => StatusCode::FORBIDDEN,
            StoreError::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
