use clap::Parser;
use quote_harvest::HarvestConfig;
use quote_harvest::error::Result;
use std::path::PathBuf;

const DEFAULT_START_URL: &str = "http://quotes.toscrape.com/page/1/";

#[derive(Parser, Debug)]
#[command(name = "quote-harvest")]
#[command(about = "Collects records from a paginated listing and saves them as JSON, CSV and a text summary")]
#[command(version)]
pub struct Args {
    /// Path to a JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// URL of the first page (overrides the config file)
    #[arg(short = 'u', long)]
    pub start_url: Option<String>,

    /// Stop after this many pages
    #[arg(short, long)]
    pub max_pages: Option<usize>,

    /// Delay between requests in milliseconds
    #[arg(short, long)]
    pub delay_ms: Option<u64>,

    /// User-Agent header sent with each request
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Directory the output files are written to
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Keep following next-page links past pages with no records
    #[arg(long)]
    pub no_stop_on_empty: bool,
}

impl Args {
    /// Build the run configuration: file (or defaults) first, then flags
    pub fn into_config(self) -> Result<HarvestConfig> {
        let mut config = match &self.config {
            Some(path) => HarvestConfig::from_file(path)?,
            None => HarvestConfig::new(DEFAULT_START_URL),
        };

        if let Some(url) = self.start_url {
            config.start_url = url;
        }
        if let Some(max_pages) = self.max_pages {
            config = config.with_max_pages(max_pages);
        }
        if let Some(delay_ms) = self.delay_ms {
            config = config.with_delay_ms(delay_ms);
        }
        if let Some(user_agent) = self.user_agent {
            config = config.with_user_agent(user_agent);
        }
        if let Some(timeout) = self.timeout {
            config = config.with_timeout_secs(timeout);
        }
        if let Some(dir) = self.out_dir {
            config = config.with_output_dir(dir);
        }
        if self.no_stop_on_empty {
            config = config.with_stop_on_empty_page(false);
        }

        config.validate()?;
        Ok(config)
    }
}
