use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the cookie carrying the session token
pub const TOKEN_COOKIE: &str = "token";

/// Errors that can occur while resolving the caller's identity
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("No token found")]
    MissingToken,

    #[error("Invalid token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    #[error("Token has no identity claim")]
    MissingIdentity,
}

/// Claims carried by session tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    #[serde(default)]
    pub id: Option<String>,
    pub exp: usize,
    #[serde(default)]
    pub iat: Option<usize>,
}

/// Verifies HS256 session tokens issued by the login service
#[derive(Clone)]
pub struct TokenVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    pub fn new(secret: &str) -> Self {
        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    /// Verify a token and return the user id it was issued for
    pub fn verify(&self, token: &str) -> Result<String, AuthError> {
        let data = decode::<Claims>(token, &self.key, &self.validation)?;

        data.claims
            .id
            .filter(|id| !id.trim().is_empty())
            .ok_or(AuthError::MissingIdentity)
    }
}
