// src/services/auth_service.rs
// DOCUMENTATION: Credential hashing and bearer token authentication
// PURPOSE: Owns the password hash format and the Authorization header contract

use crate::db::UserRepository;
use crate::errors::StoreError;
use crate::models::{TokenRequest, TokenResponse, User};
use actix_web::HttpRequest;
use sha2::{Digest, Sha256};
use sqlx::PgPool;
use uuid::Uuid;

/// Stored hash prefix; kept in the hash string so the scheme can evolve
const HASH_ALGORITHM: &str = "sha256";

pub struct AuthService;

impl AuthService {
    /// Hash a password with a fresh random salt
    /// DOCUMENTATION: Stored format is sha256$<salt>$<hexdigest>
    pub fn hash_password(password: &str) -> String {
        let salt = Uuid::new_v4().simple().to_string();
        let digest = Self::digest(&salt, password);
        format!("{}${}${}", HASH_ALGORITHM, salt, digest)
    }

    /// Verify a password against a stored hash
    /// Malformed stored values never verify
    pub fn verify_password(password: &str, stored: &str) -> bool {
        let mut parts = stored.splitn(3, '$');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(HASH_ALGORITHM), Some(salt), Some(digest)) => {
                Self::digest(salt, password) == digest
            }
            _ => false,
        }
    }

    fn digest(salt: &str, password: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(salt.as_bytes());
        hasher.update(password.as_bytes());
        hex::encode(hasher.finalize())
    }

    /// Generate a new 64-hex-char token key
    pub fn generate_token_key() -> String {
        format!(
            "{}{}",
            Uuid::new_v4().simple(),
            Uuid::new_v4().simple()
        )
    }

    /// Exchange username/password for the user's bearer token
    /// DOCUMENTATION: One token per user, created lazily on first login.
    /// Unknown usernames and wrong passwords both return Unauthorized so the
    /// response does not leak which accounts exist
    pub async fn login(pool: &PgPool, req: &TokenRequest) -> Result<TokenResponse, StoreError> {
        let user = UserRepository::find_by_username(pool, &req.username)
            .await?
            .ok_or(StoreError::Unauthorized)?;

        if !Self::verify_password(&req.password, &user.password_hash) {
            log::warn!("Failed login attempt for user: {}", req.username);
            return Err(StoreError::Unauthorized);
        }

        let key =
            UserRepository::get_or_create_token(pool, user.id, &Self::generate_token_key()).await?;

        Ok(TokenResponse { token: key })
    }

    /// Extract the token key from an Authorization header value
    pub fn parse_bearer(header: &str) -> Option<&str> {
        let key = header.strip_prefix("Bearer ")?.trim();
        if key.is_empty() {
            None
        } else {
            Some(key)
        }
    }

    /// Authenticate a request via its Authorization: Bearer header
    /// DOCUMENTATION: Missing header is Unauthorized, a key that resolves to
    /// no user is Forbidden
    pub async fn authenticate(req: &HttpRequest, pool: &PgPool) -> Result<User, StoreError> {
        let key = req
            .headers()
            .get("Authorization")
            .and_then(|h| h.to_str().ok())
            .and_then(Self::parse_bearer)
            .ok_or_else(|| {
                log::warn!("Request without bearer token");
                StoreError::Unauthorized
            })?;

        UserRepository::find_by_token(pool, key)
            .await?
            .ok_or_else(|| {
                log::warn!("Request with invalid bearer token");
                StoreError::Forbidden
            })
    }

    /// Gate an already-authenticated user on the superuser flag
    pub fn require_superuser(user: &User) -> Result<(), StoreError> {
        if user.is_superuser {
            Ok(())
        } else {
            log::warn!("Non-superuser {} denied admin access", user.username);
            Err(StoreError::Forbidden)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_roundtrip() {
        let stored = AuthService::hash_password("Pass-word123");

        assert!(stored.starts_with("sha256$"));
        assert!(AuthService::verify_password("Pass-word123", &stored));
        assert!(!AuthService::verify_password("pass-word123", &stored));
    }

    #[test]
    fn test_same_password_hashes_differently() {
        // Fresh salt per hash
        let first = AuthService::hash_password("secret");
        let second = AuthService::hash_password("secret");

        assert_ne!(first, second);
        assert!(AuthService::verify_password("secret", &first));
        assert!(AuthService::verify_password("secret", &second));
    }

    #[test]
    fn test_malformed_stored_hash_never_verifies() {
        assert!(!AuthService::verify_password("x", ""));
        assert!(!AuthService::verify_password("x", "plaintext"));
        assert!(!AuthService::verify_password("x", "md5$salt$digest"));
        assert!(!AuthService::verify_password("x", "sha256$missingdigest"));
    }

    #[test]
    fn test_parse_bearer() {
        assert_eq!(AuthService::parse_bearer("Bearer abc123"), Some("abc123"));
        assert_eq!(AuthService::parse_bearer("Bearer "), None);
        assert_eq!(AuthService::parse_bearer("Token abc123"), None);
        assert_eq!(AuthService::parse_bearer("abc123"), None);
    }

    #[test]
    fn test_token_key_shape() {
        let key = AuthService::generate_token_key();

        assert_eq!(key.len(), 64);
        assert!(key.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(key, AuthService::generate_token_key());
    }
}
