use super::platform::Platform;

/// Caller intent for one platform, built from the editor's toggles.
///
/// The platform name stays a raw string so that names outside the known set
/// can be reported back instead of being rejected up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishDestination {
    pub platform: String,
    pub enabled: bool,
}

impl PublishDestination {
    pub fn new(platform: impl Into<String>, enabled: bool) -> Self {
        Self {
            platform: platform.into(),
            enabled,
        }
    }

    pub fn enabled(platform: Platform) -> Self {
        Self::new(platform.as_str(), true)
    }

    pub fn parsed_platform(&self) -> Option<Platform> {
        self.platform.parse().ok()
    }
}

/// Returns the caller's destinations plus an enabled local entry when none
/// names the local platform. The input is left untouched.
pub fn normalize_destinations(destinations: &[PublishDestination]) -> Vec<PublishDestination> {
    let mut normalized = destinations.to_vec();
    let has_local = destinations
        .iter()
        .any(|d| d.parsed_platform() == Some(Platform::Local));
    if !has_local {
        normalized.push(PublishDestination::enabled(Platform::Local));
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_local_when_missing() {
        let input = vec![PublishDestination::new("wordpress", true)];
        let normalized = normalize_destinations(&input);

        assert_eq!(input.len(), 1);
        assert_eq!(
            normalized,
            vec![
                PublishDestination::new("wordpress", true),
                PublishDestination::new("local", true),
            ]
        );
    }

    #[test]
    fn keeps_an_explicit_local_entry_as_given() {
        let input = vec![
            PublishDestination::new("LOCAL", false),
            PublishDestination::new("twitter", true),
        ];
        assert_eq!(normalize_destinations(&input), input);
    }

    #[test]
    fn empty_selection_still_targets_local() {
        assert_eq!(
            normalize_destinations(&[]),
            vec![PublishDestination::enabled(Platform::Local)]
        );
    }
}
