// src/infrastructure/publishers/mod.rs
//! Platform adapters behind the `Publisher` port.
pub mod error;
pub mod local;
pub mod media;
mod multipart;
pub mod oauth1;
pub mod slug;
pub mod twitter;
pub mod wordpress;
pub mod youtube;

pub use error::PublishError;
pub use local::LocalPublisher;
pub use twitter::{TwitterEndpoints, TwitterPublisher};
pub use wordpress::WordPressPublisher;
pub use youtube::{YouTubeEndpoints, YouTubePublisher};
