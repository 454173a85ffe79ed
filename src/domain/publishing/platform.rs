use std::{fmt, str::FromStr};
use thiserror::Error;

/// Closed set of destinations an article can be delivered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Platform {
    Local,
    WordPress,
    YouTube,
    Twitter,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown platform: {0}")]
pub struct UnknownPlatform(pub String);

impl Platform {
    pub const ALL: [Self; 4] = [Self::Local, Self::WordPress, Self::YouTube, Self::Twitter];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::WordPress => "wordpress",
            Self::YouTube => "youtube",
            Self::Twitter => "twitter",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "wordpress" => Ok(Self::WordPress),
            "youtube" => Ok(Self::YouTube),
            "twitter" => Ok(Self::Twitter),
            _ => Err(UnknownPlatform(s.to_string())),
        }
    }
}
