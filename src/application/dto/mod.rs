/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod harvest_request;
mod harvest_summary;

pub use harvest_request::HarvestRequest;
pub use harvest_summary::HarvestSummary;
