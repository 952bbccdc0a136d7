/// Crate-wide result type; errors are `anyhow::Error` so adapter failures can
/// carry context while `HarvestError` variants stay downcastable.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
