//! # Sigpair Admin Rust SDK
//!
//! Admin-side client for a Sigpair node.
//!
//! ## Modules
//!
//! - [`api`]: HTTP client for admin endpoints (user creation) and user token issuance
//! - [`claims`]: Claim shapes and signing for create-user and user tokens
//! - [`auth`]: Admin secret decoding and key encoding helpers
//! - [`network`]: Endpoint constants
//!
//! ## Authentication Flow
//!
//! 1. The admin signs a short-lived create-user token with the admin secret
//! 2. The node creates the user and returns its id
//! 3. The admin signs a user token binding that id to the user's ed25519 public key
//! 4. The user presents the user token to the node
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sigpair_admin::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let admin = SigpairAdminClient::new(
//!         "0x4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318",
//!         "http://localhost:8080",
//!     )?;
//!
//!     let user_id = admin.create_user("alice").await?;
//!     let token = admin.generate_user_token_with_lifetime(user_id, USER_PUBKEY_HEX, 24 * 60 * 60)?;
//!     println!("{}", token);
//!
//!     Ok(())
//! }
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// Admin secret decoding and hex helpers.
pub mod auth;

/// Create-user and user token claims.
pub mod claims;

/// Endpoint constants.
pub mod network;

/// Admin API client.
pub mod api;

// ============================================================================
// PRELUDE
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use sigpair_admin::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        ApiError, ApiResult, CreateUserResponse, SigpairAdminClient, SigpairAdminClientBuilder,
    };

    pub use crate::auth::{strip_hex_prefix, AdminSecret, AuthError, AuthResult};

    pub use crate::claims::{
        sign_claims, CreateUserClaims, UserId, UserTokenClaims, CREATE_USER_TOKEN_LIFETIME_SECS,
        DEFAULT_USER_TOKEN_LIFETIME_SECS,
    };
}
