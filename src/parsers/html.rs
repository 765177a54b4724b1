use crate::error::{HarvestError, Result};
use crate::utils::normalize_whitespace;
use scraper::{ElementRef, Html, Selector};

/// Compile a CSS selector, turning parse failures into a harvest error
pub fn compile(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| HarvestError::Selector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

/// A parsed HTML document
///
/// Only selection is exposed; everything else stays inside `scraper`.
pub struct HtmlDocument {
    doc: Html,
}

/// An element of an [`HtmlDocument`]
#[derive(Clone, Copy)]
pub struct HtmlNode<'a> {
    element: ElementRef<'a>,
}

impl HtmlDocument {
    pub fn parse(body: &str) -> Self {
        Self {
            doc: Html::parse_document(body),
        }
    }

    /// All elements matching `selector`, in document order
    pub fn select(&self, selector: &Selector) -> Vec<HtmlNode<'_>> {
        self.doc
            .select(selector)
            .map(|element| HtmlNode { element })
            .collect()
    }

    pub fn select_first(&self, selector: &Selector) -> Option<HtmlNode<'_>> {
        self.doc
            .select(selector)
            .next()
            .map(|element| HtmlNode { element })
    }
}

impl<'a> HtmlNode<'a> {
    /// Descendants of this node matching `selector`, in document order
    pub fn select(&self, selector: &Selector) -> Vec<HtmlNode<'a>> {
        self.element
            .select(selector)
            .map(|element| HtmlNode { element })
            .collect()
    }

    pub fn select_first(&self, selector: &Selector) -> Option<HtmlNode<'a>> {
        self.element
            .select(selector)
            .next()
            .map(|element| HtmlNode { element })
    }

    /// Text content with whitespace collapsed
    pub fn text(&self) -> String {
        normalize_whitespace(&self.element.text().collect::<String>())
    }

    pub fn attribute(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }
}
