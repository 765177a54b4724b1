use crate::error::HarvestError;
use crate::parsers::html::{self, HtmlDocument};

#[test]
fn test_select_in_document_order() {
    let doc = HtmlDocument::parse("<ul><li>one</li><li>two</li><li>three</li></ul>");
    let items = doc.select(&html::compile("li").unwrap());

    let texts: Vec<String> = items.iter().map(|n| n.text()).collect();
    assert_eq!(texts, vec!["one", "two", "three"]);
}

#[test]
fn test_text_collapses_whitespace() {
    let doc = HtmlDocument::parse("<p>\n  Hello,\n   <b>world</b>!  </p>");
    let p = doc.select_first(&html::compile("p").unwrap()).unwrap();
    assert_eq!(p.text(), "Hello, world!");
}

#[test]
fn test_attribute_lookup() {
    let doc = HtmlDocument::parse(r#"<a href="/page/2/" class="x">Next</a>"#);
    let a = doc.select_first(&html::compile("a").unwrap()).unwrap();

    assert_eq!(a.attribute("href"), Some("/page/2/"));
    assert_eq!(a.attribute("title"), None);
}

#[test]
fn test_scoped_selection() {
    let doc = HtmlDocument::parse(
        r#"<div class="a"><span>inside</span></div><span>outside</span>"#,
    );
    let div = doc.select_first(&html::compile("div.a").unwrap()).unwrap();
    let spans = div.select(&html::compile("span").unwrap());

    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].text(), "inside");
}

#[test]
fn test_no_match_is_empty() {
    let doc = HtmlDocument::parse("<p>text</p>");
    let selector = html::compile(".missing").unwrap();
    assert!(doc.select(&selector).is_empty());
    assert!(doc.select_first(&selector).is_none());
}

#[test]
fn test_invalid_selector_is_rejected() {
    match html::compile("div[") {
        Err(HarvestError::Selector { selector, .. }) => assert_eq!(selector, "div["),
        other => panic!("expected selector error, got {:?}", other.map(|_| ())),
    }
}
