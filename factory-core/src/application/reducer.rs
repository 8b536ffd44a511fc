//! Pure transitions over the post collection. Each takes the current
//! sequence and returns the next one; persistence is the caller's job.

use chrono::{DateTime, Utc};

use crate::domain::error::DomainError;
use crate::domain::post::{Post, PostDraft, PostId, PostStatus, next_id};

/// Appends a post built from `draft` and returns the new collection with the
/// index of the added post. An incomplete draft leaves the collection
/// untouched and yields [`DomainError::MissingFields`].
pub fn add(
    posts: &[Post],
    draft: PostDraft,
    now: DateTime<Utc>,
) -> Result<(Vec<Post>, usize), DomainError> {
    if !draft.is_complete() {
        return Err(DomainError::MissingFields);
    }
    let id = next_id(posts, now).ok_or(DomainError::IdsExhausted)?;

    let mut next = posts.to_vec();
    next.push(Post::new(id, draft, now));
    Ok((next, posts.len()))
}

/// Drops the post with `id`; an unknown id changes nothing.
pub fn remove(posts: &[Post], id: PostId) -> Vec<Post> {
    posts.iter().filter(|p| p.id != id).cloned().collect()
}

/// Sets the status of the post with `id` to Published.
pub fn mark_published(posts: &[Post], id: PostId) -> Vec<Post> {
    posts
        .iter()
        .map(|p| {
            if p.id == id {
                Post {
                    status: PostStatus::Published,
                    ..p.clone()
                }
            } else {
                p.clone()
            }
        })
        .collect()
}
