// src/domain/publishing/mod.rs
//! Vocabulary of the publishing fan-out: which platforms exist, what gets
//! delivered to them and what comes back.
pub mod content;
pub mod destination;
pub mod platform;
pub mod result;

pub use content::{FeaturedImage, PublishContent};
pub use destination::{PublishDestination, normalize_destinations};
pub use platform::{Platform, UnknownPlatform};
pub use result::{PublishResult, PublishResults};
