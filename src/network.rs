//! Endpoint constants for the Sigpair node API.

/// Path of the admin user-creation endpoint, relative to the base URL.
pub const CREATE_USER_PATH: &str = "/v1/create-user";
