use crate::config::HarvestConfig;
use crate::crawlers::fetcher::Fetcher;
use crate::error::{HarvestError, Result};
use crate::parsers::{PageSelectors, extract_page};
use crate::results::{Collection, Harvest, StopReason};
use chrono::Utc;
use std::collections::HashSet;
use std::time::Duration;
use url::Url;

/// Walks a paginated listing one page at a time, gathering records
///
/// Exactly one request is in flight at any moment, and consecutive requests
/// are separated by the configured delay.
pub struct Collector<F: Fetcher> {
    fetcher: F,
    start_url: Url,
    selectors: PageSelectors,
    delay: Duration,
    max_pages: Option<usize>,
    stop_on_empty_page: bool,
}

impl<F: Fetcher> Collector<F> {
    /// Build a collector, validating the start URL and compiling selectors
    pub fn new(config: &HarvestConfig, fetcher: F) -> Result<Self> {
        config.validate()?;

        let mut start_url =
            Url::parse(&config.start_url).map_err(|source| HarvestError::InvalidUrl {
                url: config.start_url.clone(),
                source,
            })?;
        start_url.set_fragment(None);
        let selectors = PageSelectors::compile(&config.selectors)?;

        Ok(Self {
            fetcher,
            start_url,
            selectors,
            delay: config.delay(),
            max_pages: config.max_pages,
            stop_on_empty_page: config.stop_on_empty_page,
        })
    }

    /// Run the pagination loop to completion
    ///
    /// Fetch failures end the loop but are not returned as errors: the
    /// records gathered so far are kept and the failure is reported in
    /// [`Harvest::stop_reason`].
    pub async fn run(&self) -> Harvest {
        let mut collection = Collection::new();
        let mut visited = HashSet::new();
        let mut pages_visited = 0;
        let mut current = self.start_url.clone();

        let stop_reason = loop {
            if self.max_pages.is_some_and(|max| pages_visited >= max) {
                break StopReason::PageLimit;
            }

            if pages_visited > 0 && !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }

            visited.insert(current.to_string());
            pages_visited += 1;
            ::log::info!("Scraping page {}: {}", pages_visited, current);

            let body = match self.fetcher.fetch(current.as_str()).await {
                Ok(body) => body,
                Err(e) => {
                    ::log::error!("Error scraping page {}: {}", pages_visited, e);
                    break StopReason::FetchFailed {
                        url: current.to_string(),
                        error: e.to_string(),
                    };
                }
            };

            let extract = extract_page(
                &body,
                &current,
                pages_visited,
                Utc::now(),
                &self.selectors,
            );

            if extract.records.is_empty() && self.stop_on_empty_page {
                ::log::info!("No records found on {}", current);
                break StopReason::EmptyPage;
            }

            for record in &extract.records {
                ::log::debug!("  Found record by {}", record.author);
            }
            collection.extend(extract.records);

            match extract.next_page {
                None => break StopReason::NoNextPage,
                Some(next) if visited.contains(next.as_str()) => {
                    ::log::warn!("Next page {} was already visited", next);
                    break StopReason::RevisitedPage(next.to_string());
                }
                Some(next) => current = next,
            }
        };

        ::log::info!(
            "Collection finished after {} pages with {} records: {}",
            pages_visited,
            collection.len(),
            stop_reason
        );

        Harvest {
            collection,
            pages_visited,
            stop_reason,
        }
    }
}
