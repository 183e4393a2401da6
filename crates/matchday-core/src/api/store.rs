use async_trait::async_trait;

use crate::models::{Record, RecordId};

use super::ApiError;

/// CRUD operations the data cache needs from the Remote Store.
///
/// Every collection exposes the same four operations, selected by the record
/// type. The store is the identifier authority: `create` returns the record
/// with its assigned id.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Fetch the whole collection
    async fn list<R: Record>(&self) -> Result<Vec<R>, ApiError>;

    /// Create a record and return it as stored
    async fn create<R: Record>(&self, draft: &R::Draft) -> Result<R, ApiError>;

    /// Replace the record at `id` and return it as stored
    async fn update<R: Record>(&self, id: &RecordId, draft: &R::Draft) -> Result<R, ApiError>;

    /// Delete the record at `id`
    async fn delete<R: Record>(&self, id: &RecordId) -> Result<(), ApiError>;
}
