pub mod coordinate;
pub mod sbom_document;
pub mod version_record;

pub use coordinate::{ArtifactCoordinate, Gav, SBOM_EXTENSION_TAG};
pub use sbom_document::SbomDocument;
pub use version_record::VersionRecord;
