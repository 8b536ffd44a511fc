use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::error::StoreError;
use crate::domain::post::Post;

/// Durable home of the whole post collection under a single key.
pub trait PostRepository {
    /// `Ok(None)` when nothing has been stored yet.
    fn read(&self) -> Result<Option<Vec<Post>>, StoreError>;
    /// Replaces the stored collection.
    fn write(&self, posts: &[Post]) -> Result<(), StoreError>;
}

impl<R: PostRepository + ?Sized> PostRepository for &R {
    fn read(&self) -> Result<Option<Vec<Post>>, StoreError> {
        (**self).read()
    }

    fn write(&self, posts: &[Post]) -> Result<(), StoreError> {
        (**self).write(posts)
    }
}

pub(crate) fn decode(raw: &str) -> Result<Vec<Post>, StoreError> {
    serde_json::from_str(raw).map_err(StoreError::Malformed)
}

pub(crate) fn encode(posts: &[Post]) -> Result<String, StoreError> {
    serde_json::to_string(posts).map_err(StoreError::Serialize)
}

/// Keeps the serialized collection in memory. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with `raw` already stored, whatever it contains.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(raw.into()))),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl PostRepository for MemoryRepository {
    fn read(&self) -> Result<Option<Vec<Post>>, StoreError> {
        self.slot.borrow().as_deref().map(decode).transpose()
    }

    fn write(&self, posts: &[Post]) -> Result<(), StoreError> {
        let raw = encode(posts)?;
        *self.slot.borrow_mut() = Some(raw);
        Ok(())
    }
}
