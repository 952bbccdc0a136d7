/// Network adapters for the search index and the artifact repository
mod maven_central_search;
mod maven_repository;
mod reqwest_fetcher;

pub use maven_central_search::{MavenCentralSearch, DEFAULT_SEARCH_URL};
pub use maven_repository::{MavenRepository, DEFAULT_REPOSITORY_URL};
pub use reqwest_fetcher::ReqwestFetcher;
