//! Claim shapes signed with the admin secret.
//!
//! Two tokens are issued:
//!
//! - **Create-user token**: `{name, iat, exp}`, valid for five minutes. Sent
//!   by the admin client to `POST /v1/create-user`.
//! - **User token**: `{user_id, iat, exp, public_key}`, valid for a caller
//!   chosen lifetime (one hour by default). Handed to the end user, who
//!   presents it to the node on every request.
//!
//! Tokens are compact JWS strings signed with HS256.

use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};

use crate::auth::{AdminSecret, AuthResult};

/// Unique user identifier assigned by the node.
pub type UserId = u64;

/// Signing algorithm for every token issued by this crate.
pub const SIGNING_ALGORITHM: Algorithm = Algorithm::HS256;

/// Validity window of a create-user token, in seconds.
pub const CREATE_USER_TOKEN_LIFETIME_SECS: u64 = 5 * 60;

/// Default validity window of a user token, in seconds.
pub const DEFAULT_USER_TOKEN_LIFETIME_SECS: u64 = 60 * 60;

/// Claims authorizing creation of a new user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserClaims {
    /// Name of the user to create
    pub name: String,
    /// Issued at (Unix seconds)
    pub iat: u64,
    /// Expiry (Unix seconds)
    pub exp: u64,
}

impl CreateUserClaims {
    /// Build claims issued at `iat`, expiring five minutes later.
    pub fn new(name: impl Into<String>, iat: u64) -> Self {
        Self {
            name: name.into(),
            iat,
            exp: iat.saturating_add(CREATE_USER_TOKEN_LIFETIME_SECS),
        }
    }
}

/// Claims binding a user id to the user's signing public key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserTokenClaims {
    /// User id
    pub user_id: UserId,
    /// Issued at (Unix seconds)
    pub iat: u64,
    /// Expiry (Unix seconds)
    pub exp: u64,
    /// Ed25519 public key of the user, hex without `0x`
    pub public_key: String,
}

impl UserTokenClaims {
    /// Build claims issued at `iat`, expiring `lifetime_secs` later.
    ///
    /// `public_key` is embedded as given; callers strip any `0x` first.
    pub fn new(
        user_id: UserId,
        public_key: impl Into<String>,
        iat: u64,
        lifetime_secs: u64,
    ) -> Self {
        Self {
            user_id,
            iat,
            exp: iat.saturating_add(lifetime_secs),
            public_key: public_key.into(),
        }
    }
}

/// Sign `claims` with the admin secret, producing a compact token.
///
/// # Errors
///
/// Returns [`AuthError::Signing`](crate::auth::AuthError::Signing) if the
/// claims cannot be serialized or signed.
pub fn sign_claims<T: Serialize>(claims: &T, secret: &AdminSecret) -> AuthResult<String> {
    let header = Header::new(SIGNING_ALGORITHM);
    let key = EncodingKey::from_secret(secret.as_bytes());
    Ok(jsonwebtoken::encode(&header, claims, &key)?)
}
