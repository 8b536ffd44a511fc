pub mod post_manager;
pub mod publisher;
pub mod reducer;
