//! Admin API client module for Sigpair.
//!
//! This module provides the HTTP client used to perform admin actions
//! against a Sigpair node.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use sigpair_admin::api::SigpairAdminClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let admin = SigpairAdminClient::new(ADMIN_SECRET_HEX, "http://localhost:8080")?;
//!
//!     // Register a user on the node
//!     let user_id = admin.create_user("alice").await?;
//!
//!     // Issue a token the user presents for every user action
//!     let token = admin.generate_user_token(user_id, USER_PUBKEY_HEX)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Client Configuration
//!
//! ```rust,ignore
//! use std::time::Duration;
//!
//! let admin = SigpairAdminClient::builder(ADMIN_SECRET_HEX, "http://localhost:8080")
//!     .timeout(Duration::from_secs(10))
//!     .header("X-Request-Source", "ops")
//!     .build()?;
//! ```
//!
//! # Error Handling
//!
//! ```rust,ignore
//! use sigpair_admin::api::ApiError;
//!
//! match admin.create_user("alice").await {
//!     Ok(id) => println!("Created user {}", id),
//!     Err(ApiError::Unauthorized(msg)) => println!("Admin secret rejected: {}", msg),
//!     Err(ApiError::MalformedResponse(msg)) => println!("Unexpected reply: {}", msg),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

pub mod client;
pub mod error;
pub mod types;

// Re-export main types for convenience
pub use client::{SigpairAdminClient, SigpairAdminClientBuilder};
pub use error::{ApiError, ApiResult, ErrorResponse};
pub use types::*;
