//! Admin key material for Sigpair.
//!
//! The admin secret is the symmetric key shared with the Sigpair node. It signs
//! both the short-lived bootstrap tokens used to create users and the long-lived
//! user tokens handed to end users.
//!
//! # Key Encoding
//!
//! Keys are exchanged as hex strings, with or without a leading `0x`:
//!
//! ```text
//! 0x3f1c...a9   (prefixed)
//! 3f1c...a9     (bare)
//! ```
//!
//! Both forms decode to the same bytes.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;
use zeroize::ZeroizeOnDrop;

/// Expected admin secret length in bytes.
pub const ADMIN_SECRET_LEN: usize = 32;

/// Token issuance errors
#[derive(Debug, Error)]
pub enum AuthError {
    /// System time error (before UNIX epoch)
    #[error("System time error: {0}")]
    SystemTime(String),

    /// Key material is not valid hex
    #[error("Invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// The token codec rejected the claims or key
    #[error("Token signing failed: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
}

/// Result type alias for token issuance operations
pub type AuthResult<T> = Result<T, AuthError>;

/// Strip a single leading `0x` from a hex string.
pub fn strip_hex_prefix(hex_str: &str) -> &str {
    hex_str.strip_prefix("0x").unwrap_or(hex_str)
}

/// Current Unix time in whole seconds.
///
/// # Errors
///
/// Returns an error if the system time is before the UNIX epoch.
pub fn unix_timestamp() -> AuthResult<u64> {
    Ok(SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|_| AuthError::SystemTime("System time before UNIX epoch".to_string()))?
        .as_secs())
}

/// Admin signing secret, wiped from memory on drop.
#[derive(Clone, ZeroizeOnDrop)]
pub struct AdminSecret {
    bytes: Vec<u8>,
}

impl AdminSecret {
    /// Decode an admin secret from hex, accepting an optional `0x` prefix.
    ///
    /// The node expects 32 bytes (64 hex characters). Other lengths are
    /// accepted and logged; the node will reject tokens signed with them.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidHex`] if the string is not valid hex.
    pub fn from_hex(secret_hex: &str) -> AuthResult<Self> {
        let bytes = hex::decode(strip_hex_prefix(secret_hex))?;
        if bytes.len() != ADMIN_SECRET_LEN {
            tracing::warn!(
                len = bytes.len(),
                expected = ADMIN_SECRET_LEN,
                "Admin secret has unexpected length"
            );
        }
        Ok(Self { bytes })
    }

    /// Raw secret bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Secret length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the decoded secret is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for AdminSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AdminSecret(<{} bytes redacted>)", self.bytes.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET_HEX: &str = "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f";

    #[test]
    fn test_strip_hex_prefix() {
        assert_eq!(strip_hex_prefix("0xabcd"), "abcd");
        assert_eq!(strip_hex_prefix("abcd"), "abcd");
        assert_eq!(strip_hex_prefix("0x0xab"), "0xab");
        assert_eq!(strip_hex_prefix(""), "");
    }

    #[test]
    fn test_secret_prefix_insensitive() {
        let bare = AdminSecret::from_hex(SECRET_HEX).unwrap();
        let prefixed = AdminSecret::from_hex(&format!("0x{}", SECRET_HEX)).unwrap();

        assert_eq!(bare.len(), ADMIN_SECRET_LEN);
        assert_eq!(bare.as_bytes(), prefixed.as_bytes());
        assert_eq!(bare.as_bytes()[31], 0x1f);
    }

    #[test]
    fn test_secret_uppercase_hex() {
        let lower = AdminSecret::from_hex(SECRET_HEX).unwrap();
        let upper = AdminSecret::from_hex(&SECRET_HEX.to_uppercase()).unwrap();
        assert_eq!(lower.as_bytes(), upper.as_bytes());
    }

    #[test]
    fn test_secret_length_not_enforced() {
        let short = AdminSecret::from_hex("0xdeadbeef").unwrap();
        assert_eq!(short.as_bytes(), &[0xde, 0xad, 0xbe, 0xef]);

        let empty = AdminSecret::from_hex("0x").unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_secret_invalid_hex() {
        let err = AdminSecret::from_hex("0xabc").unwrap_err();
        assert!(matches!(err, AuthError::InvalidHex(hex::FromHexError::OddLength)));

        let err = AdminSecret::from_hex("zz").unwrap_err();
        assert!(matches!(err, AuthError::InvalidHex(_)));
    }

    #[test]
    fn test_secret_debug_redacted() {
        let secret = AdminSecret::from_hex(SECRET_HEX).unwrap();
        let printed = format!("{:?}", secret);
        assert_eq!(printed, "AdminSecret(<32 bytes redacted>)");
        assert!(!printed.contains("0102"));
    }

    #[test]
    fn test_unix_timestamp() {
        let ts = unix_timestamp().unwrap();
        // 2020-01-01T00:00:00Z
        assert!(ts > 1_577_836_800);
    }
}
