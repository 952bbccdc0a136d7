use crate::shared::error::HarvestError;
use crate::shared::Result;
use serde::de::IgnoredAny;
use serde::Deserialize;

/// The slice of a CycloneDX document the harvester cares about
///
/// Only the presence and length of `components` is interpreted; every other
/// field is skipped during decoding.
#[derive(Debug, Deserialize)]
pub struct SbomDocument {
    #[serde(default)]
    components: Option<Vec<IgnoredAny>>,
}

impl SbomDocument {
    /// Decodes a downloaded body as a CycloneDX JSON document
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(|e| {
            HarvestError::Decode {
                what: "CycloneDX document".to_string(),
                details: e.to_string(),
            }
            .into()
        })
    }

    /// Number of declared components; an absent list counts as zero
    pub fn component_count(&self) -> usize {
        self.components.as_ref().map_or(0, Vec::len)
    }
}
