pub mod fetcher;
pub mod paginator;

pub use fetcher::{Fetcher, HttpFetcher};
pub use paginator::Collector;
