/// Use cases module containing application business logic orchestration
mod collect_coordinates;
mod harvest_sboms;
mod retrieve_sbom;

pub use collect_coordinates::CollectCoordinatesUseCase;
pub use harvest_sboms::HarvestSbomsUseCase;
pub use retrieve_sbom::{RetrievalOutcome, RetrieveSbomUseCase};
