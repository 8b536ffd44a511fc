use chrono::Utc;
use tracing::{info, instrument, warn};

use crate::application::publisher::Publisher;
use crate::application::reducer;
use crate::data::post_repository::PostRepository;
use crate::data::store::PostStore;
use crate::domain::error::DomainError;
use crate::domain::notice::Notice;
use crate::domain::post::{Post, PostDraft, PostId};

/// In-memory collection kept in step with its store. Every mutation applies
/// a reducer and then writes the full collection back.
pub struct PostManager<R: PostRepository, P: Publisher> {
    posts: Vec<Post>,
    store: PostStore<R>,
    publisher: P,
    synced: bool,
}

impl<R, P> PostManager<R, P>
where
    R: PostRepository,
    P: Publisher,
{
    pub fn open(repo: R, publisher: P) -> Self {
        let store = PostStore::new(repo);
        let posts = store.load();
        Self {
            posts,
            store,
            publisher,
            synced: true,
        }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn get(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    pub fn store(&self) -> &PostStore<R> {
        &self.store
    }

    /// False when the last write failed; the in-memory list is still the
    /// newer one and the next successful write catches the store up.
    pub fn is_synced(&self) -> bool {
        self.synced
    }

    #[instrument(skip(self, draft), fields(title = %draft.title))]
    pub fn create(&mut self, draft: PostDraft) -> Result<&Post, DomainError> {
        let (next, index) = reducer::add(&self.posts, draft, Utc::now()).inspect_err(|e| {
            warn!(error = %e, "post rejected");
        })?;
        self.replace(next);

        let post = &self.posts[index];
        info!(post_id = post.id, "post created");
        Ok(post)
    }

    #[instrument(skip(self))]
    pub fn delete(&mut self, id: PostId) -> Notice {
        let before = self.posts.len();
        let next = reducer::remove(&self.posts, id);
        if next.len() < before {
            info!(post_id = id, "post deleted");
        }
        self.replace(next);
        Notice::Deleted
    }

    /// Sends the post through the publisher and marks it Published. A post
    /// that is already published is left alone and the publisher is not
    /// called again.
    #[instrument(skip(self))]
    pub fn publish(&mut self, id: PostId) -> Result<Notice, DomainError> {
        let post = self.get(id).ok_or(DomainError::PostNotFound(id))?;
        if post.status.is_published() {
            return Ok(Notice::AlreadyPublished);
        }

        if let Err(e) = self.publisher.send(post) {
            warn!(post_id = id, error = %e, "publish failed");
            return Err(e.into());
        }

        let next = reducer::mark_published(&self.posts, id);
        self.replace(next);
        info!(post_id = id, "post published");
        Ok(Notice::Published)
    }

    fn replace(&mut self, posts: Vec<Post>) {
        self.posts = posts;
        self.synced = self.store.save(&self.posts).is_ok();
    }
}
