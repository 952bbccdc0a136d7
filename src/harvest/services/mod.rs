mod candidate_selector;
mod pagination;

pub use candidate_selector::CandidateSelector;
pub use pagination::{PageRequest, Paginator, SearchPage, DEFAULT_MAX_PAGES, DEFAULT_PAGE_SIZE};
