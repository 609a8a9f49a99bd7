//! User profile model for persistence.
//!
//! Maps to the `users` table and is used by UserRepository. One row per Telegram user;
//! the key is the stringified platform user id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserProfile {
    /// Stringified platform user id; primary key.
    pub user_id: String,
    /// Declared interest; None until the user sets one. Stored verbatim, lower-cased only at
    /// read time for event lookup.
    pub interest: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
