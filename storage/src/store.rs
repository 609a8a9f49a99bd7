use async_trait::async_trait;

use crate::error::StorageError;
use crate::models::UserProfile;

/// Document-style access to user profiles: get-by-key, merge-upsert, equality query.
///
/// The upsert only ever touches named fields, so profiles gaining more fields later keep them.
/// The interest query is byte-for-byte equality and excludes the querying user.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fetches the profile for a user id, if one exists.
    async fn get(&self, user_id: &str) -> Result<Option<UserProfile>, StorageError>;

    /// Creates the profile if missing, otherwise overwrites only the interest field.
    async fn upsert_interest(&self, user_id: &str, interest: &str) -> Result<(), StorageError>;

    /// Returns all profiles whose interest equals `interest` exactly, excluding `exclude_user_id`.
    async fn find_by_interest(
        &self,
        interest: &str,
        exclude_user_id: &str,
    ) -> Result<Vec<UserProfile>, StorageError>;
}
