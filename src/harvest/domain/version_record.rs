use super::coordinate::{Gav, SBOM_EXTENSION_TAG};

/// One published version as reported by the version search
///
/// Kept raw (tagged or not) so pagination can advance by the number of
/// records the server actually returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRecord {
    pub gav: Gav,
    /// Packaging classifier ("jar", "pom", ...)
    pub packaging: Option<String>,
    /// File extension tags available for this version ("-sources.jar", ".pom", ...)
    pub extension_tags: Vec<String>,
}

impl VersionRecord {
    pub fn new(gav: Gav, packaging: Option<String>, extension_tags: Vec<String>) -> Self {
        Self {
            gav,
            packaging,
            extension_tags,
        }
    }

    /// Whether the repository lists a CycloneDX JSON SBOM for this exact version
    pub fn has_sbom(&self) -> bool {
        self.extension_tags
            .iter()
            .any(|tag| tag == SBOM_EXTENSION_TAG)
    }
}
