use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::person::{PersonId, PersonRecord, SearchQuery};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server responded with {status} {reason}")]
    Status { status: u16, reason: String },
    #[error("unreadable response body: {0}")]
    Decode(String),
}

/// The listing service behind the table.
///
/// Every call either succeeds once or reports an [`ApiError`]; there are no
/// retries at this layer.
#[async_trait(?Send)]
pub trait PeopleApi {
    async fn list_all(&self) -> Result<Vec<PersonRecord>, ApiError>;

    async fn search(&self, query: &SearchQuery) -> Result<Vec<PersonRecord>, ApiError>;

    /// Deletes one person. `Ok` carries the response body text.
    async fn delete_by_id(&self, id: PersonId) -> Result<String, ApiError>;
}
