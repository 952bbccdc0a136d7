pub mod acceptance_policy;
pub mod version_policy;

pub use acceptance_policy::{AcceptanceDecision, ComponentThreshold};
pub use version_policy::VersionPolicy;
