use tracing::info;

use crate::domain::error::PublishError;
use crate::domain::post::Post;

/// Delivers a post to its channel.
pub trait Publisher {
    fn send(&self, post: &Post) -> Result<(), PublishError>;
}

/// Pretends to deliver to Telegram. Never fails and never touches the network.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedPublisher;

impl Publisher for SimulatedPublisher {
    fn send(&self, post: &Post) -> Result<(), PublishError> {
        info!(post_id = post.id, title = %post.title, "simulated delivery");
        Ok(())
    }
}
