//! Sigpair admin client implementation.
//!
//! The [`SigpairAdminClient`] performs admin actions against a Sigpair node:
//! creating users and issuing user tokens.
//!
//! # Example
//!
//! ```rust,ignore
//! use sigpair_admin::api::SigpairAdminClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let admin = SigpairAdminClient::new(ADMIN_SECRET_HEX, "http://localhost:8080")?;
//!
//!     let user_id = admin.create_user("alice").await?;
//!     let token = admin.generate_user_token(user_id, "0xd75a9801...")?;
//!     println!("User {} token: {}", user_id, token);
//!
//!     Ok(())
//! }
//! ```

use std::fmt;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use zeroize::Zeroizing;

use crate::api::error::{ApiError, ApiResult, ErrorResponse};
use crate::api::types::*;
use crate::auth::{strip_hex_prefix, unix_timestamp, AdminSecret, AuthResult};
use crate::claims::{
    sign_claims, CreateUserClaims, UserId, UserTokenClaims, DEFAULT_USER_TOKEN_LIFETIME_SECS,
};
use crate::network::CREATE_USER_PATH;

/// Builder for configuring [`SigpairAdminClient`].
#[derive(Clone)]
pub struct SigpairAdminClientBuilder {
    admin_secret_hex: Zeroizing<String>,
    base_url: String,
    timeout: Option<Duration>,
    default_headers: Vec<(String, String)>,
}

impl SigpairAdminClientBuilder {
    /// Create a new builder with the given admin secret (hex) and base URL.
    pub fn new(admin_secret_hex: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            admin_secret_hex: Zeroizing::new(admin_secret_hex.into()),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: None,
            default_headers: Vec::new(),
        }
    }

    /// Set the request timeout.
    ///
    /// Unset by default: requests wait as long as the HTTP client allows.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Some(Duration::from_secs(secs));
        self
    }

    /// Add a default header to all requests.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the admin secret is not valid hex, a header is
    /// invalid, or the HTTP client cannot be initialized.
    pub fn build(self) -> ApiResult<SigpairAdminClient> {
        let secret = AdminSecret::from_hex(&self.admin_secret_hex)?;

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::CONTENT_TYPE,
            reqwest::header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        for (name, value) in self.default_headers {
            let header_name = reqwest::header::HeaderName::try_from(name.as_str())
                .map_err(|e| ApiError::InvalidParameter(format!("Invalid header name '{}': {}", name, e)))?;
            let header_value = reqwest::header::HeaderValue::from_str(&value)
                .map_err(|e| ApiError::InvalidParameter(format!("Invalid header value for '{}': {}", name, e)))?;
            headers.insert(header_name, header_value);
        }

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build()?;

        Ok(SigpairAdminClient {
            http_client,
            base_url: self.base_url,
            secret,
        })
    }
}

impl fmt::Debug for SigpairAdminClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigpairAdminClientBuilder")
            .field("admin_secret_hex", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("default_headers", &self.default_headers)
            .finish()
    }
}

/// Sigpair admin client.
///
/// Holds the admin secret and the node's base URL. Both are fixed at
/// construction, so a single instance can be shared across tasks.
#[derive(Debug, Clone)]
pub struct SigpairAdminClient {
    http_client: Client,
    base_url: String,
    secret: AdminSecret,
}

impl SigpairAdminClient {
    /// Create a new client with the given admin secret and base URL.
    ///
    /// The secret is the same hex-encoded admin token configured on the
    /// Sigpair node (32 bytes, 64 hex characters), with or without `0x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the secret is not valid hex or the HTTP client
    /// cannot be initialized.
    pub fn new(admin_secret_hex: impl Into<String>, base_url: impl Into<String>) -> ApiResult<Self> {
        SigpairAdminClientBuilder::new(admin_secret_hex, base_url).build()
    }

    /// Create a new client builder for custom configuration.
    pub fn builder(
        admin_secret_hex: impl Into<String>,
        base_url: impl Into<String>,
    ) -> SigpairAdminClientBuilder {
        SigpairAdminClientBuilder::new(admin_secret_hex, base_url)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[cfg(test)]
    pub(crate) fn admin_secret(&self) -> &AdminSecret {
        &self.secret
    }

    // =========================================================================
    // Internal helpers
    // =========================================================================

    /// POST an empty JSON object with a bearer token and parse the response.
    async fn post_with_bearer<T: DeserializeOwned>(&self, url: &str, token: &str) -> ApiResult<T> {
        let response = self
            .http_client
            .post(url)
            .bearer_auth(token)
            .json(&serde_json::json!({}))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::parse_error_response(response).await);
        }

        let body = response.text().await?;
        serde_json::from_str::<T>(&body)
            .map_err(|e| ApiError::MalformedResponse(format!("Failed to deserialize response: {}", e)))
    }

    /// Parse an error response into an ApiError.
    async fn parse_error_response(response: reqwest::Response) -> ApiError {
        let status = response.status();
        let error_response = match response.text().await {
            Ok(text) => ErrorResponse::from_body(&text),
            Err(e) => ErrorResponse {
                message: Some(format!("HTTP {} (body unreadable: {})", status, e)),
                details: None,
            },
        };
        let message = error_response
            .message()
            .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));

        Self::map_status_error(status, message)
    }

    /// Map HTTP status code to ApiError.
    fn map_status_error(status: StatusCode, message: String) -> ApiError {
        match status {
            StatusCode::BAD_REQUEST => ApiError::BadRequest(message),
            StatusCode::UNAUTHORIZED => ApiError::Unauthorized(message),
            StatusCode::FORBIDDEN => ApiError::Forbidden(message),
            StatusCode::NOT_FOUND => ApiError::NotFound(message),
            StatusCode::CONFLICT => ApiError::Conflict(message),
            StatusCode::TOO_MANY_REQUESTS => ApiError::RateLimited(message),
            _ if status.is_server_error() => ApiError::ServerError(message),
            _ => ApiError::UnexpectedStatus(status.as_u16(), message),
        }
    }

    // =========================================================================
    // Admin endpoints
    // =========================================================================

    /// Create a new user with the given name.
    ///
    /// Signs a five-minute create-user token with the admin secret and sends
    /// it to `POST /v1/create-user`. Fails on the first error; nothing is
    /// retried.
    ///
    /// Returns the id the node assigned to the new user.
    pub async fn create_user(&self, user_name: &str) -> ApiResult<UserId> {
        let claims = CreateUserClaims::new(user_name, unix_timestamp()?);
        let token = sign_claims(&claims, &self.secret)?;

        let url = format!("{}{}", self.base_url, CREATE_USER_PATH);
        tracing::debug!(url = %url, user_name, "Creating user");

        match self.post_with_bearer::<CreateUserResponse>(&url, &token).await {
            Ok(response) => Ok(response.user_id),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    source = ?std::error::Error::source(&e),
                    user_name,
                    "Create user request failed"
                );
                Err(e)
            }
        }
    }

    // =========================================================================
    // Token issuance
    // =========================================================================

    /// Generate a one-hour user token for `user_id` and the user's public key.
    ///
    /// See [`generate_user_token_with_lifetime`](Self::generate_user_token_with_lifetime).
    pub fn generate_user_token(&self, user_id: UserId, user_pubkey_hex: &str) -> AuthResult<String> {
        self.generate_user_token_with_lifetime(user_id, user_pubkey_hex, DEFAULT_USER_TOKEN_LIFETIME_SECS)
    }

    /// Generate a user token valid for `lifetime_secs` seconds.
    ///
    /// `user_pubkey_hex` is the user's ed25519 signing key (32 bytes) as hex,
    /// with or without `0x`. The token authorizes every user action on the
    /// node. No network access is performed.
    pub fn generate_user_token_with_lifetime(
        &self,
        user_id: UserId,
        user_pubkey_hex: &str,
        lifetime_secs: u64,
    ) -> AuthResult<String> {
        let claims = UserTokenClaims::new(
            user_id,
            strip_hex_prefix(user_pubkey_hex),
            unix_timestamp()?,
            lifetime_secs,
        );
        sign_claims(&claims, &self.secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthError;
    use crate::claims::SIGNING_ALGORITHM;
    use jsonwebtoken::{decode, DecodingKey, Validation};

    const SECRET_HEX: &str = "0x4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318";
    const PUBKEY_HEX: &str = "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a";

    fn client() -> SigpairAdminClient {
        SigpairAdminClient::new(SECRET_HEX, "http://localhost:8080").unwrap()
    }

    fn decode_user_token(client: &SigpairAdminClient, token: &str) -> UserTokenClaims {
        let key = DecodingKey::from_secret(client.admin_secret().as_bytes());
        decode::<UserTokenClaims>(token, &key, &Validation::new(SIGNING_ALGORITHM))
            .unwrap()
            .claims
    }

    #[test]
    fn test_client_creation() {
        let client = client();
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.admin_secret().len(), 32);
    }

    #[test]
    fn test_client_builder() {
        let client = SigpairAdminClient::builder(SECRET_HEX, "http://localhost:8080/")
            .timeout_secs(60)
            .header("X-Custom", "test")
            .build()
            .unwrap();

        // Base URL should have trailing slash removed
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_builder_timeout_unset_by_default() {
        let builder = SigpairAdminClient::builder(SECRET_HEX, "http://localhost:8080");
        assert_eq!(builder.timeout, None);

        let builder = builder.timeout_secs(5);
        assert_eq!(builder.timeout, Some(Duration::from_secs(5)));

        let builder = builder.timeout(Duration::from_millis(250));
        assert_eq!(builder.timeout, Some(Duration::from_millis(250)));
    }

    #[test]
    fn test_client_secret_prefix_insensitive() {
        let prefixed = client();
        let bare = SigpairAdminClient::new(&SECRET_HEX[2..], "http://localhost:8080").unwrap();
        assert_eq!(prefixed.admin_secret().as_bytes(), bare.admin_secret().as_bytes());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let builder = SigpairAdminClient::builder(SECRET_HEX, "http://localhost:8080");
        assert!(!format!("{:?}", builder).contains(&SECRET_HEX[2..]));
        assert!(!format!("{:?}", builder.build().unwrap()).contains(&SECRET_HEX[2..]));
    }

    #[test]
    fn test_client_invalid_secret() {
        let err = SigpairAdminClient::new("0xnothex", "http://localhost:8080").unwrap_err();
        assert!(matches!(err, ApiError::Auth(AuthError::InvalidHex(_))));
    }

    #[test]
    fn test_client_invalid_header() {
        let err = SigpairAdminClient::builder(SECRET_HEX, "http://localhost:8080")
            .header("bad header", "value")
            .build()
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidParameter(_)));
    }

    #[test]
    fn test_generate_user_token_default_lifetime() {
        let client = client();
        let token = client.generate_user_token(42, PUBKEY_HEX).unwrap();
        let claims = decode_user_token(&client, &token);

        assert_eq!(claims.user_id, 42);
        assert_eq!(claims.exp - claims.iat, 3600);
        assert_eq!(claims.public_key, PUBKEY_HEX);
    }

    #[test]
    fn test_generate_user_token_strips_prefix() {
        let client = client();
        let bare = client.generate_user_token(1, PUBKEY_HEX).unwrap();
        let prefixed = client.generate_user_token(1, &format!("0x{}", PUBKEY_HEX)).unwrap();

        assert_eq!(decode_user_token(&client, &bare).public_key, PUBKEY_HEX);
        assert_eq!(decode_user_token(&client, &prefixed).public_key, PUBKEY_HEX);
    }

    #[test]
    fn test_generate_user_token_custom_lifetime() {
        let client = client();
        let first = client.generate_user_token_with_lifetime(5, PUBKEY_HEX, 120).unwrap();
        let second = client.generate_user_token_with_lifetime(5, PUBKEY_HEX, 120).unwrap();

        let first = decode_user_token(&client, &first);
        let second = decode_user_token(&client, &second);
        assert_eq!(first.exp - first.iat, 120);
        assert_eq!(second.exp - second.iat, 120);
        assert!(second.iat >= first.iat);
    }

    #[test]
    fn test_generate_user_token_pubkey_not_validated() {
        let client = client();
        let token = client.generate_user_token(3, "0xnot-a-key").unwrap();
        assert_eq!(decode_user_token(&client, &token).public_key, "not-a-key");
    }

    #[test]
    fn test_map_status_error() {
        let msg = || "boom".to_string();
        assert!(matches!(
            SigpairAdminClient::map_status_error(StatusCode::BAD_REQUEST, msg()),
            ApiError::BadRequest(_)
        ));
        assert!(matches!(
            SigpairAdminClient::map_status_error(StatusCode::UNAUTHORIZED, msg()),
            ApiError::Unauthorized(_)
        ));
        assert!(matches!(
            SigpairAdminClient::map_status_error(StatusCode::CONFLICT, msg()),
            ApiError::Conflict(_)
        ));
        assert!(matches!(
            SigpairAdminClient::map_status_error(StatusCode::BAD_GATEWAY, msg()),
            ApiError::ServerError(m) if m == "boom"
        ));
        assert!(matches!(
            SigpairAdminClient::map_status_error(StatusCode::IM_A_TEAPOT, msg()),
            ApiError::UnexpectedStatus(418, _)
        ));
    }
}
