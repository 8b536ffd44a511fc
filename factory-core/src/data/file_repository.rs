use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::data::post_repository::{PostRepository, decode, encode};
use crate::domain::error::StoreError;
use crate::domain::post::Post;

/// Stores the collection as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileRepository {
    path: PathBuf,
}

impl FileRepository {
    pub fn new(dir: impl AsRef<Path>, key: &str) -> Self {
        Self {
            path: dir.as_ref().join(format!("{key}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PostRepository for FileRepository {
    fn read(&self) -> Result<Option<Vec<Post>>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => decode(&raw).map(Some),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    fn write(&self, posts: &[Post]) -> Result<(), StoreError> {
        let raw = encode(posts)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        // rename over the old file so readers never see a partial write
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, &self.path)?;

        debug!(path = %self.path.display(), count = posts.len(), "collection written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::post::PostDraft;
    use chrono::Utc;

    #[test]
    fn missing_file_is_missing_key() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileRepository::new(dir.path(), "posts");
        assert!(repo.read().unwrap().is_none());
    }

    #[test]
    fn write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileRepository::new(dir.path().join("nested"), "posts");
        let posts = vec![
            Post::new(1, PostDraft::new("A", "B", ""), Utc::now()),
            Post::new(2, PostDraft::new("C", "D", "2026-01-01T10:00"), Utc::now()),
        ];

        repo.write(&posts).unwrap();

        assert_eq!(repo.read().unwrap(), Some(posts));
        assert!(repo.path().ends_with("nested/posts.json"));
        assert!(!repo.path().with_extension("json.tmp").exists());
    }

    #[test]
    fn malformed_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileRepository::new(dir.path(), "posts");
        fs::write(repo.path(), "[{\"id\":").unwrap();

        assert!(matches!(repo.read(), Err(StoreError::Malformed(_))));
    }
}
