use crate::config::SelectorConfig;
use crate::parsers::{PageSelectors, extract_page};
use crate::test_fixtures::*;
use chrono::{TimeZone, Utc};
use url::Url;

fn selectors() -> PageSelectors {
    PageSelectors::compile(&SelectorConfig::default()).unwrap()
}

#[test]
fn test_extracts_records_in_page_order() {
    let url = Url::parse("http://quotes.example/page/1/").unwrap();
    let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
    let extract = extract_page(PAGE_ONE, &url, 1, at, &selectors());

    assert_eq!(extract.records.len(), 2);

    let first = &extract.records[0];
    assert_eq!(
        first.text,
        "“The world as we have created it is a process of our thinking.”"
    );
    assert_eq!(first.author, "Albert Einstein");
    assert_eq!(first.tags, vec!["change", "thinking"]);
    assert_eq!(first.page, 1);
    assert_eq!(first.source_url, "http://quotes.example/page/1/");
    assert_eq!(first.scraped_at, at);

    assert_eq!(extract.records[1].author, "J.K. Rowling");
    assert_eq!(extract.records[1].tags, vec!["choices"]);
}

#[test]
fn test_next_link_is_resolved_to_absolute() {
    let url = Url::parse("http://quotes.example/page/1/").unwrap();
    let extract = extract_page(PAGE_ONE, &url, 1, Utc::now(), &selectors());

    assert_eq!(
        extract.next_page.map(String::from),
        Some("http://quotes.example/page/2/".to_string())
    );
}

#[test]
fn test_last_page_has_no_next_link() {
    let url = Url::parse("http://quotes.example/page/2/").unwrap();
    let extract = extract_page(PAGE_TWO, &url, 2, Utc::now(), &selectors());

    assert_eq!(extract.records.len(), 1);
    assert!(extract.next_page.is_none());
}

#[test]
fn test_missing_author_leaves_field_empty() {
    let url = Url::parse("http://quotes.example/").unwrap();
    let extract = extract_page(PAGE_MISSING_AUTHOR, &url, 1, Utc::now(), &selectors());

    assert_eq!(extract.records.len(), 1);
    assert_eq!(extract.records[0].text, "“Anonymous wisdom.”");
    assert_eq!(extract.records[0].author, "");
    assert_eq!(extract.records[0].tags, vec!["misc"]);
}

#[test]
fn test_page_without_records() {
    let url = Url::parse("http://quotes.example/page/10/").unwrap();
    let extract = extract_page(PAGE_EMPTY, &url, 10, Utc::now(), &selectors());

    assert!(extract.records.is_empty());
    assert!(extract.next_page.is_some());
}

#[test]
fn test_next_element_without_href_ends_pagination() {
    let url = Url::parse("http://quotes.example/").unwrap();
    let body = r#"<div class="quote"><span class="text">x</span></div>
        <ul><li class="next"><a>Next</a></li></ul>"#;
    let extract = extract_page(body, &url, 1, Utc::now(), &selectors());

    assert!(extract.next_page.is_none());
}

#[test]
fn test_custom_selectors() {
    let config = SelectorConfig {
        record: "article".to_string(),
        text: "p".to_string(),
        author: "cite".to_string(),
        tag: "em".to_string(),
        next_page: "link[rel=next]".to_string(),
        next_page_attribute: "href".to_string(),
    };
    let selectors = PageSelectors::compile(&config).unwrap();
    let body = r#"<html><head><link rel="next" href="?p=2"></head><body>
        <article><p>Body</p><cite>Writer</cite><em>a</em><em>b</em></article>
        </body></html>"#;
    let url = Url::parse("http://site.example/list?p=1").unwrap();
    let extract = extract_page(body, &url, 1, Utc::now(), &selectors);

    assert_eq!(extract.records[0].text, "Body");
    assert_eq!(extract.records[0].author, "Writer");
    assert_eq!(extract.records[0].tags, vec!["a", "b"]);
    assert_eq!(
        extract.next_page.unwrap().as_str(),
        "http://site.example/list?p=2"
    );
}

#[test]
fn test_invalid_selector_config() {
    let config = SelectorConfig {
        record: ":::".to_string(),
        ..SelectorConfig::default()
    };
    assert!(PageSelectors::compile(&config).is_err());
}
