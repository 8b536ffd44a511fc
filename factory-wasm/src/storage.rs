use factory_core::{Post, PostRepository, StoreError};
use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};

/// The post collection in `window.localStorage`.
#[derive(Debug, Clone, Copy)]
pub struct BrowserRepository {
    key: &'static str,
}

impl BrowserRepository {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }
}

impl PostRepository for BrowserRepository {
    fn read(&self) -> Result<Option<Vec<Post>>, StoreError> {
        match LocalStorage::get::<Vec<Post>>(self.key) {
            Ok(posts) => Ok(Some(posts)),
            Err(StorageError::KeyNotFound(_)) => Ok(None),
            Err(StorageError::SerdeError(e)) => Err(StoreError::Malformed(e)),
            Err(e) => Err(StoreError::Backend(e.to_string())),
        }
    }

    fn write(&self, posts: &[Post]) -> Result<(), StoreError> {
        LocalStorage::set(self.key, posts).map_err(|e| match e {
            StorageError::SerdeError(e) => StoreError::Serialize(e),
            e => StoreError::Backend(e.to_string()),
        })
    }
}
