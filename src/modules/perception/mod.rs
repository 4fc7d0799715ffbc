pub mod feed;
pub mod fetcher;
pub mod structs;

pub use fetcher::FeedFetcher;
pub use structs::Candidate;
