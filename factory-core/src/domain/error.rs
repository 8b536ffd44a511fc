use thiserror::Error;

use crate::domain::post::PostId;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("stored collection is malformed: {0}")]
    Malformed(#[source] serde_json::Error),
    #[error("failed to serialize collection: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("delivery rejected: {0}")]
    Rejected(String),
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("title and content must not be empty")]
    MissingFields,
    #[error("no post ids left")]
    IdsExhausted,
    #[error("post not found: {0}")]
    PostNotFound(PostId),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Publish(#[from] PublishError),
}
