use std::fmt;

/// Which versions of each artifact get downloaded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VersionPolicy {
    /// Only the latest version reported by the artifact search; no version search
    LatestOnly,
    /// Every version the version search tags with a CycloneDX SBOM
    #[default]
    AllQualifying,
}

impl std::str::FromStr for VersionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "latest-only" | "latest" => Ok(VersionPolicy::LatestOnly),
            "all-versions" | "all" => Ok(VersionPolicy::AllQualifying),
            _ => Err(format!(
                "Invalid version policy: {}. Please specify 'latest-only' or 'all-versions'",
                s
            )),
        }
    }
}

impl fmt::Display for VersionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionPolicy::LatestOnly => write!(f, "latest-only"),
            VersionPolicy::AllQualifying => write!(f, "all-versions"),
        }
    }
}
