//! Read-only, selector-based access to a parsed page
//!
//! Extraction code only needs a handful of operations: find the first or
//! every element matching a selector, read text or inner markup, and step
//! to a parent or next sibling. This module exposes exactly that on top of
//! `scraper`, turning absent elements into [`ParseError::MissingElement`].

use crate::{ParseError, ParseResult};
use scraper::{ElementRef, Html, Selector};

/// A compiled CSS selector that remembers its source text
#[derive(Debug)]
pub struct Query {
    css: &'static str,
    selector: Selector,
}

impl Query {
    /// Compiles a selector literal
    ///
    /// # Panics
    ///
    /// Panics if `css` is not a valid selector. Queries are built from
    /// literals, so this only fires on a typo in the source.
    pub fn new(css: &'static str) -> Self {
        let selector = Selector::parse(css)
            .unwrap_or_else(|e| panic!("invalid selector literal {:?}: {:?}", css, e));
        Self { css, selector }
    }

    fn missing(&self) -> ParseError {
        ParseError::MissingElement {
            selector: self.css.to_string(),
        }
    }
}

/// A parsed HTML document
pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// Returns the first element matching `query` in document order
    pub fn select_one(&self, query: &Query) -> ParseResult<ElementRef<'_>> {
        self.html
            .select(&query.selector)
            .next()
            .ok_or_else(|| query.missing())
    }

    /// Returns every element matching `query` in document order
    pub fn select_all(&self, query: &Query) -> Vec<ElementRef<'_>> {
        self.html.select(&query.selector).collect()
    }
}

/// Navigation and content helpers for elements
pub trait ElementExt<'a> {
    /// Concatenated text of all descendants, untrimmed
    fn text_content(&self) -> String;

    /// Descendants matching `query`, in document order
    fn select_all(&self, query: &Query) -> Vec<ElementRef<'a>>;

    fn parent_element(&self) -> Option<ElementRef<'a>>;

    fn next_element_sibling(&self) -> Option<ElementRef<'a>>;
}

impl<'a> ElementExt<'a> for ElementRef<'a> {
    fn text_content(&self) -> String {
        self.text().collect()
    }

    fn select_all(&self, query: &Query) -> Vec<ElementRef<'a>> {
        self.select(&query.selector).collect()
    }

    fn parent_element(&self) -> Option<ElementRef<'a>> {
        self.parent().and_then(ElementRef::wrap)
    }

    fn next_element_sibling(&self) -> Option<ElementRef<'a>> {
        self.next_siblings().find_map(ElementRef::wrap)
    }
}
