//! Admin-related types for the Sigpair node API.

use serde::{Deserialize, Serialize};

use crate::claims::UserId;

/// Response for POST /v1/create-user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserResponse {
    /// Id assigned to the new user
    pub user_id: UserId,
}
