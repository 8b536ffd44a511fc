use chrono::{DateTime, SecondsFormat, Utc};
use derive_more::Display;
use serde::{Deserialize, Deserializer, Serialize};

pub type PostId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PostStatus {
    Created,
    Published,
}

/// Any stored label that mentions publication reads as Published, anything
/// else as Created. One odd record must not cost the whole collection.
impl<'de> Deserialize<'de> for PostStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(PostStatus::from_label(&label))
    }
}

impl PostStatus {
    pub fn from_label(label: &str) -> Self {
        if label.contains("Published") || label.contains("Опубликован") {
            PostStatus::Published
        } else {
            PostStatus::Created
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PostStatus::Created => "Created",
            PostStatus::Published => "Published ✓",
        }
    }

    pub fn is_published(self) -> bool {
        matches!(self, PostStatus::Published)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Display)]
#[display("Post {{ id: {}, title: {}, status: {} }}", id, title, status.label())]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub schedule_time: String,
    pub status: PostStatus,
    pub created_at: DateTime<Utc>,
}

/// Form input for a new post, as typed by the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub schedule_time: String,
}

impl PostDraft {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        schedule_time: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            schedule_time: schedule_time.into(),
        }
    }

    /// Both title and content carry something besides whitespace.
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.content.trim().is_empty()
    }
}

impl Post {
    /// Builds a post from a complete draft. Callers check
    /// [`PostDraft::is_complete`] first; title and content are stored as typed.
    pub fn new(id: PostId, draft: PostDraft, now: DateTime<Utc>) -> Self {
        let schedule_time = match draft.schedule_time.trim() {
            "" => iso_timestamp(now),
            given => given.to_string(),
        };

        Self {
            id,
            title: draft.title,
            content: draft.content,
            schedule_time,
            status: PostStatus::Created,
            created_at: now,
        }
    }
}

/// RFC 3339 with millisecond precision and a `Z` suffix, the shape a browser
/// produces for `Date.prototype.toISOString`.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Next id for a collection: the creation time in milliseconds, bumped past
/// the current maximum so ids stay unique and increasing. `None` once the
/// maximum is `PostId::MAX`.
pub fn next_id(posts: &[Post], now: DateTime<Utc>) -> Option<PostId> {
    let millis = now.timestamp_millis();
    match posts.iter().map(|p| p.id).max() {
        Some(max) if max >= millis => max.checked_add(1),
        _ => Some(millis),
    }
}
