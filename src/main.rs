use clap::Parser;
use quote_harvest::StopReason;
use std::error::Error;

mod args;
use args::Args;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging
    env_logger::init();

    let config = Args::parse().into_config()?;

    ::log::info!("Starting harvest at {}", config.start_url);
    ::log::debug!(
        "User-Agent: {}, delay: {} ms, max pages: {:?}",
        config.user_agent,
        config.delay_ms,
        config.max_pages
    );

    let start_time = std::time::Instant::now();
    let (harvest, paths) = quote_harvest::run(&config).await?;

    println!(
        "Collected {} records from {} pages in {:.2} seconds",
        harvest.collection.len(),
        harvest.pages_visited,
        start_time.elapsed().as_secs_f64()
    );
    if let StopReason::FetchFailed { url, error } = &harvest.stop_reason {
        println!("Stopped early, could not fetch {}: {}", url, error);
    }
    println!("  {}", paths.json.display());
    println!("  {}", paths.csv.display());
    println!("  {}", paths.summary.display());

    Ok(())
}
