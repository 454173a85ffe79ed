mod registry;
mod service;

pub use registry::PublisherRegistry;
pub use service::{PublisherAvailability, PublishingService};
