//! JWT service for token generation and validation
//!
//! Access and refresh tokens are HS256 tokens signed with two independent
//! secrets. A token only verifies under the secret of its own kind, and the
//! `token_type` claim is checked as well, so a refresh token is never accepted
//! where an access token is expected (or the other way round).

use axum::http::HeaderMap;
use axum_extra::headers::{Authorization, HeaderMapExt, authorization::Bearer};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

/// JWT configuration
#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    /// Secret for signing access tokens
    pub access_secret: String,
    /// Secret for signing refresh tokens
    pub refresh_secret: String,
    /// Access token expiration time in seconds (default: 1 hour)
    #[serde(default = "default_access_token_expiry")]
    pub access_token_expiry: u64,
    /// Refresh token expiration time in seconds (default: 7 days)
    #[serde(default = "default_refresh_token_expiry")]
    pub refresh_token_expiry: u64,
}

fn default_access_token_expiry() -> u64 {
    3600
}

fn default_refresh_token_expiry() -> u64 {
    604800
}

impl JwtConfig {
    /// Create a new JwtConfig from environment variables
    ///
    /// # Environment Variables
    /// - `JWT_ACCESS_SECRET`: Secret for access tokens
    /// - `JWT_REFRESH_SECRET`: Secret for refresh tokens, must differ from the access secret
    /// - `JWT_ACCESS_TOKEN_EXPIRY`: Access token expiry in seconds (default: 3600)
    /// - `JWT_REFRESH_TOKEN_EXPIRY`: Refresh token expiry in seconds (default: 604800)
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let config: JwtConfig = crate::config::load_verbatim("JWT")?;
        config.check()?;
        Ok(config)
    }

    fn check(&self) -> Result<(), config::ConfigError> {
        if self.access_secret.is_empty() || self.refresh_secret.is_empty() {
            return Err(config::ConfigError::Message(
                "JWT secrets must not be empty".to_string(),
            ));
        }
        if self.access_secret == self.refresh_secret {
            return Err(config::ConfigError::Message(
                "JWT_ACCESS_SECRET and JWT_REFRESH_SECRET must differ".to_string(),
            ));
        }
        Ok(())
    }
}

/// Token type enum
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    /// Access token
    Access,
    /// Refresh token
    Refresh,
}

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// User ID
    pub sub: Uuid,
    /// Issued at time
    pub iat: u64,
    /// Expiration time
    pub exp: u64,
    /// Token type (access or refresh)
    pub token_type: TokenType,
}

/// Credential failures
#[derive(Debug, Error)]
pub enum TokenError {
    /// No `Authorization: Bearer <token>` header
    #[error("Access token is missing")]
    MissingToken,

    /// Bad signature, expired, malformed or of the wrong type
    #[error("Invalid or expired token")]
    InvalidOrExpired,

    /// Signing failed
    #[error("Failed to encode token: {0}")]
    Encoding(#[from] jsonwebtoken::errors::Error),
}

/// Access and refresh token issued together at login
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Clone)]
struct SigningKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl SigningKeys {
    fn from_secret(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }
}

/// JWT service
#[derive(Clone)]
pub struct TokenService {
    access: SigningKeys,
    refresh: SigningKeys,
    validation: Validation,
    config: JwtConfig,
}

impl TokenService {
    /// Initialize a new JWT service
    pub fn new(config: JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            access: SigningKeys::from_secret(&config.access_secret),
            refresh: SigningKeys::from_secret(&config.refresh_secret),
            validation,
            config,
        }
    }

    fn now() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default()
    }

    fn keys(&self, token_type: TokenType) -> &SigningKeys {
        match token_type {
            TokenType::Access => &self.access,
            TokenType::Refresh => &self.refresh,
        }
    }

    fn issue(&self, user_id: Uuid, token_type: TokenType, ttl: u64) -> Result<String, TokenError> {
        let now = Self::now();
        let claims = Claims {
            sub: user_id,
            iat: now,
            exp: now + ttl,
            token_type,
        };

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &self.keys(token_type).encoding,
        )?;
        Ok(token)
    }

    fn verify(&self, token: &str, expected: TokenType) -> Result<Claims, TokenError> {
        let token_data = decode::<Claims>(token, &self.keys(expected).decoding, &self.validation)
            .map_err(|e| {
                debug!("Rejected {:?} token: {}", expected, e);
                TokenError::InvalidOrExpired
            })?;

        if token_data.claims.token_type != expected {
            debug!(
                "Rejected token of type {:?} where {:?} was expected",
                token_data.claims.token_type, expected
            );
            return Err(TokenError::InvalidOrExpired);
        }

        Ok(token_data.claims)
    }

    /// Generate an access token for a user
    pub fn issue_access_token(&self, user_id: Uuid) -> Result<String, TokenError> {
        self.issue(user_id, TokenType::Access, self.config.access_token_expiry)
    }

    /// Generate a refresh token for a user
    pub fn issue_refresh_token(&self, user_id: Uuid) -> Result<String, TokenError> {
        self.issue(user_id, TokenType::Refresh, self.config.refresh_token_expiry)
    }

    pub fn issue_token_pair(&self, user_id: Uuid) -> Result<TokenPair, TokenError> {
        Ok(TokenPair {
            access_token: self.issue_access_token(user_id)?,
            refresh_token: self.issue_refresh_token(user_id)?,
        })
    }

    /// Validate an access token and return its claims
    pub fn verify_access_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.verify(token, TokenType::Access)
    }

    /// Validate a refresh token and return its claims
    pub fn verify_refresh_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.verify(token, TokenType::Refresh)
    }

    /// Exchange a refresh token for a new access token bound to the same user.
    ///
    /// The refresh token stays valid until it expires.
    pub fn refresh_access_token(&self, refresh_token: &str) -> Result<String, TokenError> {
        let claims = self.verify_refresh_token(refresh_token)?;
        self.issue_access_token(claims.sub)
    }

    /// Get the access token expiry time
    pub fn access_token_expiry(&self) -> u64 {
        self.config.access_token_expiry
    }

    /// Get the refresh token expiry time
    pub fn refresh_token_expiry(&self) -> u64 {
        self.config.refresh_token_expiry
    }
}

/// Extract the bearer credential from the `Authorization` header
pub fn bearer_token(headers: &HeaderMap) -> Result<String, TokenError> {
    headers
        .typed_get::<Authorization<Bearer>>()
        .map(|auth| auth.token().to_string())
        .filter(|token| !token.is_empty())
        .ok_or(TokenError::MissingToken)
}
