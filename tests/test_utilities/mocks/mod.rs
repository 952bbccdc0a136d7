/// Mock implementations for testing
mod mock_http_fetcher;
mod mock_progress_reporter;

pub use mock_http_fetcher::MockHttpFetcher;
pub use mock_progress_reporter::MockProgressReporter;
