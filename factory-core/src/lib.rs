//! Post collection for the content factory: model, pure transitions,
//! persistence behind [`PostRepository`] and the [`PostManager`] that ties
//! them together.

pub mod application;
pub mod data;
pub mod domain;

pub use application::post_manager::PostManager;
pub use application::publisher::{Publisher, SimulatedPublisher};
pub use application::reducer;
pub use data::file_repository::FileRepository;
pub use data::post_repository::{MemoryRepository, PostRepository};
pub use data::store::PostStore;
pub use domain::error::{DomainError, PublishError, StoreError};
pub use domain::notice::{Notice, NoticeBoard, NoticeKind};
pub use domain::post::{Post, PostDraft, PostId, PostStatus, iso_timestamp};

/// Key the collection lives under, in the browser and on disk alike.
pub const STORAGE_KEY: &str = "posts";
