use crate::error::{HarvestError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration for a single harvest run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarvestConfig {
    /// URL of the first page to fetch
    pub start_url: String,

    /// Value sent as the User-Agent header on every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Pause between consecutive requests, in milliseconds
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    /// Maximum number of pages to visit (unbounded if None)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_pages: Option<usize>,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Stop when a page contains no record containers at all
    #[serde(default = "default_stop_on_empty_page")]
    pub stop_on_empty_page: bool,

    /// Selectors used to pull records out of each page
    #[serde(default)]
    pub selectors: SelectorConfig,

    /// Where the three output files are written
    #[serde(default)]
    pub output: OutputConfig,
}

/// CSS selectors for record extraction
///
/// `text`, `author` and `tag` are evaluated relative to each `record` node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectorConfig {
    #[serde(default = "default_record_selector")]
    pub record: String,

    #[serde(default = "default_text_selector")]
    pub text: String,

    #[serde(default = "default_author_selector")]
    pub author: String,

    #[serde(default = "default_tag_selector")]
    pub tag: String,

    /// Element holding the link to the following page
    #[serde(default = "default_next_selector")]
    pub next_page: String,

    /// Attribute of `next_page` carrying the link
    #[serde(default = "default_next_attribute")]
    pub next_page_attribute: String,
}

/// Output locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    #[serde(default = "default_json_file")]
    pub json_file: String,

    #[serde(default = "default_csv_file")]
    pub csv_file: String,

    #[serde(default = "default_summary_file")]
    pub summary_file: String,
}

fn default_user_agent() -> String {
    "learning-scraper/1.0".to_string()
}

fn default_delay_ms() -> u64 {
    500
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_stop_on_empty_page() -> bool {
    true
}

fn default_record_selector() -> String {
    ".quote".to_string()
}

fn default_text_selector() -> String {
    ".text".to_string()
}

fn default_author_selector() -> String {
    ".author".to_string()
}

fn default_tag_selector() -> String {
    ".tag".to_string()
}

fn default_next_selector() -> String {
    "li.next > a".to_string()
}

fn default_next_attribute() -> String {
    "href".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_json_file() -> String {
    "quotes.json".to_string()
}

fn default_csv_file() -> String {
    "quotes.csv".to_string()
}

fn default_summary_file() -> String {
    "quotes_summary.txt".to_string()
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            record: default_record_selector(),
            text: default_text_selector(),
            author: default_author_selector(),
            tag: default_tag_selector(),
            next_page: default_next_selector(),
            next_page_attribute: default_next_attribute(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            json_file: default_json_file(),
            csv_file: default_csv_file(),
            summary_file: default_summary_file(),
        }
    }
}

impl OutputConfig {
    pub fn json_path(&self) -> PathBuf {
        self.dir.join(&self.json_file)
    }

    pub fn csv_path(&self) -> PathBuf {
        self.dir.join(&self.csv_file)
    }

    pub fn summary_path(&self) -> PathBuf {
        self.dir.join(&self.summary_file)
    }
}

impl HarvestConfig {
    /// Create a new configuration with default values
    pub fn new(start_url: &str) -> Self {
        Self {
            start_url: start_url.to_string(),
            user_agent: default_user_agent(),
            delay_ms: default_delay_ms(),
            max_pages: None,
            timeout_secs: default_timeout_secs(),
            stop_on_empty_page: default_stop_on_empty_page(),
            selectors: SelectorConfig::default(),
            output: OutputConfig::default(),
        }
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Parse configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = Some(max_pages);
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn with_stop_on_empty_page(mut self, stop: bool) -> Self {
        self.stop_on_empty_page = stop;
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output.dir = dir.into();
        self
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Reject values that would make a run meaningless
    pub fn validate(&self) -> Result<()> {
        if self.start_url.trim().is_empty() {
            return Err(HarvestError::Config("start_url is empty".to_string()));
        }
        if self.user_agent.trim().is_empty() {
            return Err(HarvestError::Config("user_agent is empty".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(HarvestError::Config(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
