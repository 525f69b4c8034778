//! The parsed page model.

use serde::Deserialize;

use crate::color::Colour;
use crate::error::Result;
use crate::markup;

/// One run of text with a single color pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    pub body: String,
    pub background: Colour,
    pub foreground: Colour,
}

impl TextRun {
    pub fn new(body: String, background: Colour, foreground: Colour) -> Self {
        Self {
            body,
            background,
            foreground,
        }
    }
}

/// One printable row: its runs in left-to-right order.
pub type Line = Vec<TextRun>;

/// A quick-access page link tied to a colored on-screen label.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FastTextLink {
    pub title: String,
    pub page: String,
}

/// The page document as served by the upstream JSON endpoint.
///
/// Navigation fields are plain strings where empty means absent; `content`
/// is the raw markup handled by [`markup::parse_content`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageData {
    #[serde(default)]
    pub prev_page: String,
    #[serde(default)]
    pub next_page: String,
    #[serde(default)]
    pub prev_sub_page: String,
    #[serde(default)]
    pub next_sub_page: String,
    #[serde(default)]
    pub fast_text_links: Vec<FastTextLink>,
    #[serde(default)]
    pub content: String,
}

/// A fully parsed teletext page. Built once, never mutated.
///
/// Page identifiers stay strings throughout: sub-pages use a dashed form
/// like `"100-2"` and must never be treated as numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub prev_page: Option<String>,
    pub next_page: Option<String>,
    pub prev_sub_page: Option<String>,
    pub next_sub_page: Option<String>,
    pub fast_text_links: Vec<FastTextLink>,
    pub content: Vec<Line>,
}

impl Page {
    /// Build a page from a decoded document.
    ///
    /// Fails without producing a page if any content row is malformed.
    pub fn from_data(data: PageData) -> Result<Self> {
        let content = markup::parse_content(&data.content)?;
        Ok(Self {
            prev_page: non_empty(data.prev_page),
            next_page: non_empty(data.next_page),
            prev_sub_page: non_empty(data.prev_sub_page),
            next_sub_page: non_empty(data.next_sub_page),
            fast_text_links: data.fast_text_links,
            content,
        })
    }

    /// Decode a raw JSON document and build the page from it.
    pub fn from_json(json: &str) -> Result<Self> {
        let data: PageData = serde_json::from_str(json)?;
        Self::from_data(data)
    }
}

/// An empty navigation string means the link is absent.
fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}
