use crate::harvest::domain::{ArtifactCoordinate, Gav, VersionRecord};
use std::collections::HashSet;

/// CandidateSelector - Decides which coordinates are worth downloading
///
/// A GAV only becomes a candidate when the repository reported the SBOM tag
/// for that exact version; nothing is downloaded speculatively.
pub struct CandidateSelector;

impl CandidateSelector {
    /// Keeps the versions tagged with a CycloneDX SBOM, in search order,
    /// dropping repeated versions
    pub fn qualifying_versions(records: Vec<VersionRecord>) -> Vec<Gav> {
        let mut seen = HashSet::new();
        records
            .into_iter()
            .filter(VersionRecord::has_sbom)
            .map(|record| record.gav)
            .filter(|gav| seen.insert(gav.clone()))
            .collect()
    }

    /// Drops artifacts already seen earlier in the result set
    ///
    /// Search indexes can shift between page requests, so the same artifact
    /// may show up on two pages. The first occurrence wins.
    pub fn unique_artifacts(artifacts: Vec<ArtifactCoordinate>) -> Vec<ArtifactCoordinate> {
        let mut seen: HashSet<(String, String)> = HashSet::new();
        artifacts
            .into_iter()
            .filter(|artifact| {
                let (group, name) = artifact.key();
                seen.insert((group.to_string(), name.to_string()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(version: &str, tags: &[&str]) -> VersionRecord {
        VersionRecord::new(
            Gav::new("com.example", "lib", version).unwrap(),
            Some("jar".to_string()),
            tags.iter().map(|t| t.to_string()).collect(),
        )
    }

    #[test]
    fn test_only_tagged_versions_qualify() {
        let records = vec![
            record("2.0.0", &[".jar", "-cyclonedx.json"]),
            record("1.0.0", &[".jar", ".pom"]),
        ];

        let gavs = CandidateSelector::qualifying_versions(records);
        assert_eq!(gavs, vec![Gav::new("com.example", "lib", "2.0.0").unwrap()]);
    }

    #[test]
    fn test_no_tagged_versions_yields_nothing() {
        let records = vec![record("1.0.0", &[".jar"]), record("0.9.0", &[])];
        assert!(CandidateSelector::qualifying_versions(records).is_empty());
    }

    #[test]
    fn test_repeated_versions_are_collapsed() {
        let records = vec![
            record("2.0.0", &["-cyclonedx.json"]),
            record("1.5.0", &["-cyclonedx.json"]),
            record("2.0.0", &["-cyclonedx.json"]),
        ];
        let gavs = CandidateSelector::qualifying_versions(records);
        let versions: Vec<&str> = gavs.iter().map(|g| g.version()).collect();
        assert_eq!(versions, vec!["2.0.0", "1.5.0"]);
    }

    #[test]
    fn test_unique_artifacts_keeps_first_occurrence() {
        let artifacts = vec![
            ArtifactCoordinate::new("com.example", "lib", Some("2.0.0".to_string())).unwrap(),
            ArtifactCoordinate::new("com.example", "other", Some("1.0.0".to_string())).unwrap(),
            ArtifactCoordinate::new("com.example", "lib", Some("2.1.0".to_string())).unwrap(),
        ];

        let unique = CandidateSelector::unique_artifacts(artifacts);
        assert_eq!(unique.len(), 2);
        assert_eq!(unique[0].latest_version(), Some("2.0.0"));
        assert_eq!(unique[1].artifact_id(), "other");
    }
}
