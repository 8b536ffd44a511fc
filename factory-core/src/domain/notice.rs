use derive_more::Display;

use crate::domain::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
    Warning,
    Error,
}

/// Transient status message shown after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Notice {
    #[display("✅ Post added!")]
    Added,
    #[display("🗑️ Post deleted")]
    Deleted,
    #[display("📤 Published to Telegram!")]
    Published,
    #[display("ℹ️ Post is already published")]
    AlreadyPublished,
    #[display("⚠️ Fill in all fields!")]
    MissingFields,
    #[display("❌ Failed to publish")]
    PublishFailed,
}

impl Notice {
    pub fn kind(self) -> NoticeKind {
        match self {
            Notice::Added | Notice::Deleted | Notice::Published => NoticeKind::Success,
            Notice::AlreadyPublished => NoticeKind::Info,
            Notice::MissingFields => NoticeKind::Warning,
            Notice::PublishFailed => NoticeKind::Error,
        }
    }

    /// Message for a failed action, if the failure is one the user sees.
    pub fn for_error(err: &DomainError) -> Option<Notice> {
        match err {
            DomainError::MissingFields => Some(Notice::MissingFields),
            DomainError::Publish(_) => Some(Notice::PublishFailed),
            DomainError::IdsExhausted | DomainError::PostNotFound(_) | DomainError::Store(_) => {
                None
            }
        }
    }
}

/// The notice currently on screen. Every [`show`](NoticeBoard::show) hands
/// out a ticket; [`expire`](NoticeBoard::expire) only clears the notice when
/// its ticket is still the latest one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoticeBoard {
    current: Option<Notice>,
    seq: u64,
}

impl NoticeBoard {
    pub fn current(&self) -> Option<Notice> {
        self.current
    }

    pub fn show(&mut self, notice: Notice) -> u64 {
        self.seq += 1;
        self.current = Some(notice);
        self.seq
    }

    pub fn expire(&mut self, ticket: u64) {
        if ticket == self.seq {
            self.current = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::{PublishError, StoreError};

    #[test]
    fn only_user_facing_errors_get_a_notice() {
        assert_eq!(
            Notice::for_error(&DomainError::Publish(PublishError::Rejected("x".into()))),
            Some(Notice::PublishFailed)
        );
        assert_eq!(Notice::for_error(&DomainError::PostNotFound(1)), None);
        assert_eq!(
            Notice::for_error(&DomainError::Store(StoreError::Backend("x".into()))),
            None
        );
    }

    #[test]
    fn warning_for_missing_fields() {
        assert_eq!(Notice::MissingFields.kind(), NoticeKind::Warning);
        assert_eq!(Notice::Published.to_string(), "📤 Published to Telegram!");
    }

    #[test]
    fn stale_timer_keeps_newer_notice() {
        let mut board = NoticeBoard::default();
        let first = board.show(Notice::Added);
        let second = board.show(Notice::Deleted);

        board.expire(first);
        assert_eq!(board.current(), Some(Notice::Deleted));

        board.expire(second);
        assert_eq!(board.current(), None);
    }

    #[test]
    fn latest_timer_clears_notice() {
        let mut board = NoticeBoard::default();
        let ticket = board.show(Notice::MissingFields);

        assert_eq!(board.current(), Some(Notice::MissingFields));
        board.expire(ticket);
        assert_eq!(board.current(), None);
    }
}
