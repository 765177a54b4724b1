use crate::config::SelectorConfig;
use crate::error::Result;
use crate::parsers::html::{self, HtmlDocument, HtmlNode};
use crate::results::Record;
use crate::utils::resolve_link;
use chrono::{DateTime, Utc};
use scraper::Selector;
use url::Url;

/// Selectors from [`SelectorConfig`], compiled once per run
#[derive(Debug, Clone)]
pub struct PageSelectors {
    record: Selector,
    text: Selector,
    author: Selector,
    tag: Selector,
    next_page: Selector,
    next_page_attribute: String,
}

/// Everything pulled out of one page
#[derive(Debug, Clone)]
pub struct PageExtract {
    pub records: Vec<Record>,
    /// Absolute URL of the following page, if the page links to one
    pub next_page: Option<Url>,
}

impl PageSelectors {
    pub fn compile(config: &SelectorConfig) -> Result<Self> {
        Ok(Self {
            record: html::compile(&config.record)?,
            text: html::compile(&config.text)?,
            author: html::compile(&config.author)?,
            tag: html::compile(&config.tag)?,
            next_page: html::compile(&config.next_page)?,
            next_page_attribute: config.next_page_attribute.clone(),
        })
    }
}

/// Extract every record on a page plus its next-page link
///
/// A record container lacking a text or author element still yields a
/// record, with that field left empty.
pub fn extract_page(
    body: &str,
    page_url: &Url,
    page: usize,
    scraped_at: DateTime<Utc>,
    selectors: &PageSelectors,
) -> PageExtract {
    let doc = HtmlDocument::parse(body);

    let records = doc
        .select(&selectors.record)
        .into_iter()
        .map(|node| extract_record(&node, page_url, page, scraped_at, selectors))
        .collect::<Vec<_>>();

    let next_page = doc
        .select_first(&selectors.next_page)
        .and_then(|node| node.attribute(&selectors.next_page_attribute))
        .and_then(|href| resolve_link(page_url, href));

    ::log::debug!(
        "Extracted {} records from {} (next: {:?})",
        records.len(),
        page_url,
        next_page.as_ref().map(Url::as_str)
    );

    PageExtract { records, next_page }
}

fn extract_record(
    node: &HtmlNode<'_>,
    page_url: &Url,
    page: usize,
    scraped_at: DateTime<Utc>,
    selectors: &PageSelectors,
) -> Record {
    let text = node
        .select_first(&selectors.text)
        .map(|n| n.text())
        .unwrap_or_default();
    let author = node
        .select_first(&selectors.author)
        .map(|n| n.text())
        .unwrap_or_default();
    let tags = node
        .select(&selectors.tag)
        .iter()
        .map(HtmlNode::text)
        .filter(|t| !t.is_empty())
        .collect();

    if text.is_empty() || author.is_empty() {
        ::log::warn!("Incomplete record on {} (page {})", page_url, page);
    }

    Record {
        text,
        author,
        tags,
        page,
        source_url: page_url.to_string(),
        scraped_at,
    }
}
