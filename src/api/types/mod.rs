//! Request and response types for the Sigpair node API.

pub mod admin;

pub use admin::*;
