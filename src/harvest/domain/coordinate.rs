use crate::shared::security::validate_url_component;
use crate::shared::Result;
use std::fmt;

/// Maximum length for a single coordinate component (security limit)
const MAX_COMPONENT_LENGTH: usize = 255;

/// Classifier suffix under which artifacts publish their CycloneDX JSON SBOM
pub const SBOM_EXTENSION_TAG: &str = "-cyclonedx.json";

fn validate_component(value: &str, component_type: &str) -> Result<()> {
    validate_url_component(value, component_type)?;

    if value.len() > MAX_COMPONENT_LENGTH {
        anyhow::bail!(
            "{} is too long ({} bytes). Maximum allowed: {} bytes",
            component_type,
            value.len(),
            MAX_COMPONENT_LENGTH
        );
    }

    if value.chars().any(char::is_whitespace) {
        anyhow::bail!("{} must not contain whitespace", component_type);
    }

    Ok(())
}

/// Group + artifact identifier: a package family without a version
///
/// Carries the latest version the artifact search reported, which the
/// latest-only policy downloads directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactCoordinate {
    group_id: String,
    artifact_id: String,
    latest_version: Option<String>,
}

impl ArtifactCoordinate {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        latest_version: Option<String>,
    ) -> Result<Self> {
        let group_id = group_id.into();
        let artifact_id = artifact_id.into();
        validate_component(&group_id, "Group id")?;
        validate_component(&artifact_id, "Artifact id")?;

        let latest_version = latest_version.filter(|v| !v.trim().is_empty());

        Ok(Self {
            group_id,
            artifact_id,
            latest_version,
        })
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn latest_version(&self) -> Option<&str> {
        self.latest_version.as_deref()
    }

    /// GAV for the reported latest version, if the search reported one
    pub fn latest_gav(&self) -> Result<Option<Gav>> {
        self.latest_version
            .as_ref()
            .map(|version| Gav::new(&self.group_id, &self.artifact_id, version))
            .transpose()
    }

    /// Identity used for de-duplicating artifacts within one run
    pub fn key(&self) -> (&str, &str) {
        (&self.group_id, &self.artifact_id)
    }
}

impl fmt::Display for ArtifactCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)
    }
}

/// Group + artifact + version: one immutable published release
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Gav {
    group_id: String,
    artifact_id: String,
    version: String,
}

impl Gav {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Result<Self> {
        let group_id = group_id.into();
        let artifact_id = artifact_id.into();
        let version = version.into();
        validate_component(&group_id, "Group id")?;
        validate_component(&artifact_id, "Artifact id")?;
        validate_component(&version, "Version")?;

        Ok(Self {
            group_id,
            artifact_id,
            version,
        })
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Repository-relative path of the SBOM file:
    /// `<group/with/slashes>/<artifact>/<version>/<artifact>-<version>-cyclonedx.json`
    pub fn sbom_path(&self) -> String {
        format!(
            "{}/{}/{}/{}-{}{}",
            self.group_id.replace('.', "/"),
            self.artifact_id,
            self.version,
            self.artifact_id,
            self.version,
            SBOM_EXTENSION_TAG
        )
    }

    /// File name an accepted SBOM is stored under
    pub fn output_file_name(&self) -> String {
        format!(
            "{}_{}_{}.cdx.json",
            self.group_id, self.artifact_id, self.version
        )
    }
}

impl fmt::Display for Gav {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}
