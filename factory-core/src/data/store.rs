use tracing::{error, info, warn};

use crate::data::post_repository::PostRepository;
use crate::domain::error::StoreError;
use crate::domain::post::Post;

/// Loads and saves the post collection through a repository.
#[derive(Debug, Clone)]
pub struct PostStore<R: PostRepository> {
    repo: R,
}

impl<R: PostRepository> PostStore<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Never fails: a missing key or unreadable content both yield an empty
    /// collection, the latter with a logged warning.
    pub fn load(&self) -> Vec<Post> {
        match self.try_load() {
            Ok(posts) => posts,
            Err(e) => {
                warn!(error = %e, "failed to load posts, starting empty");
                Vec::new()
            }
        }
    }

    pub fn try_load(&self) -> Result<Vec<Post>, StoreError> {
        let posts = self.repo.read()?.unwrap_or_default();
        info!(count = posts.len(), "posts loaded");
        Ok(posts)
    }

    pub fn save(&self, posts: &[Post]) -> Result<(), StoreError> {
        self.repo.write(posts).inspect_err(|e| {
            error!(error = %e, count = posts.len(), "failed to save posts");
        })
    }
}
