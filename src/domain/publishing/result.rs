use std::collections::BTreeMap;

/// Outcome of one publisher's attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishResult {
    pub success: bool,
    pub url: Option<String>,
    pub platform_id: Option<String>,
    pub error: Option<String>,
}

impl PublishResult {
    pub fn success(url: impl Into<String>, platform_id: impl Into<String>) -> Self {
        Self {
            success: true,
            url: Some(url.into()),
            platform_id: Some(platform_id.into()),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            url: None,
            platform_id: None,
            error: Some(error.into()),
        }
    }
}

/// Per-platform outcomes of one publish call, keyed by the requested platform name.
pub type PublishResults = BTreeMap<String, PublishResult>;
