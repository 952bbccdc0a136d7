/// Domain layer for the harvest pipeline
///
/// Coordinates, search records and the acceptance rules, free of any
/// network or filesystem concerns.
pub mod domain;
pub mod policies;
pub mod services;
