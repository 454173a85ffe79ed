/// Featured image reference as handed over by the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeaturedImage {
    /// Media already uploaded to the remote platform.
    MediaId(u64),
    /// File below the uploads root, e.g. `/uploads/2024/cover.png`.
    Path(String),
}

impl FeaturedImage {
    pub fn as_path(&self) -> Option<&str> {
        match self {
            Self::Path(path) if !path.trim().is_empty() => Some(path),
            _ => None,
        }
    }
}

/// Immutable payload delivered to every publisher of one publish call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishContent {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub slug: String,
    pub featured_image: Option<FeaturedImage>,
    pub tags: Vec<String>,
    /// Internal category identifiers, resolved to names by publishers that need them.
    pub categories: Vec<String>,
    pub video_path: Option<String>,
}
