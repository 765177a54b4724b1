pub mod config;
pub mod crawlers;
pub mod error;
pub mod output;
pub mod parsers;
pub mod results;
pub mod utils;

#[cfg(test)]
mod test_fixtures;

// Re-export commonly used types for convenience
pub use config::HarvestConfig;
pub use crawlers::{Collector, Fetcher, HttpFetcher};
pub use error::{FetchError, HarvestError};
pub use output::OutputPaths;
pub use results::{Collection, Harvest, Record, StopReason};

/// Collect every page reachable from the configured start URL, then write
/// the three output files
///
/// Records gathered before a fetch failure are still written.
pub async fn run(config: &HarvestConfig) -> error::Result<(Harvest, OutputPaths)> {
    let fetcher = HttpFetcher::new(config)?;
    run_with_fetcher(config, fetcher).await
}

/// Same as [`run`] with a caller-supplied [`Fetcher`]
pub async fn run_with_fetcher<F: Fetcher>(
    config: &HarvestConfig,
    fetcher: F,
) -> error::Result<(Harvest, OutputPaths)> {
    let collector = Collector::new(config, fetcher)?;
    let harvest = collector.run().await;

    if harvest.stop_reason.is_failure() {
        ::log::warn!(
            "Persisting {} records collected before the failure",
            harvest.collection.len()
        );
    }

    let paths = output::persist(&harvest.collection, &config.output)?;
    Ok((harvest, paths))
}
