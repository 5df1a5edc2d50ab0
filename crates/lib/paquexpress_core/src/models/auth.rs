//! Authentication domain models.
//!
//! These are internal domain models, distinct from the API wire shapes
//! (which fix the Spanish field names of the public contract).

use serde::{Deserialize, Serialize};

/// A delivery agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    pub id: i64,
    pub nombre: String,
    pub email: String,
}

/// Agent with password hash (for internal auth flows).
#[derive(Debug, Clone)]
pub struct AgentWithPassword {
    pub agent: Agent,
    pub password_hash: String,
}

/// JWT claims embedded in access tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject — agent email (standard JWT `sub` claim).
    pub sub: String,
    /// Expiry (unix timestamp).
    pub exp: i64,
    /// Issued at (unix timestamp).
    pub iat: i64,
}
