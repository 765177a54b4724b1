use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single extracted unit of page content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Body text of the record (empty if the page had none)
    pub text: String,

    /// Attributed author (empty if the page had none)
    pub author: String,

    /// Tags in page order
    pub tags: Vec<String>,

    /// 1-based index of the page visit that produced this record
    pub page: usize,

    /// URL of the page the record was found on
    pub source_url: String,

    /// When the record was extracted
    pub scraped_at: DateTime<Utc>,
}

/// Ordered, append-only set of records gathered during a run
pub type Collection = Vec<Record>;

/// Why the pagination loop ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    /// The last page had no usable next-page link
    NoNextPage,
    /// The configured page limit was reached
    PageLimit,
    /// A page contained no record containers
    EmptyPage,
    /// The next-page link pointed at a page already visited
    RevisitedPage(String),
    /// A request failed; records gathered before it are kept
    FetchFailed { url: String, error: String },
}

impl StopReason {
    pub fn is_failure(&self) -> bool {
        matches!(self, StopReason::FetchFailed { .. })
    }
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::NoNextPage => write!(f, "reached the last page"),
            StopReason::PageLimit => write!(f, "page limit reached"),
            StopReason::EmptyPage => write!(f, "page had no records"),
            StopReason::RevisitedPage(url) => write!(f, "next page {} already visited", url),
            StopReason::FetchFailed { url, error } => {
                write!(f, "failed to fetch {}: {}", url, error)
            }
        }
    }
}

/// Result of a complete pagination run
#[derive(Debug, Clone)]
pub struct Harvest {
    pub collection: Collection,
    pub pages_visited: usize,
    pub stop_reason: StopReason,
}
