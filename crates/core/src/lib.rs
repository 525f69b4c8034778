//! teletekst-core - parsing and rendering of NOS Teletekst pages.
//!
//! The upstream service delivers a page as a JSON document holding navigation
//! metadata plus one restricted-HTML content string. This crate decodes that
//! document into an immutable [`page::Page`], resolving the NOS private-use
//! mosaic codepoints to renderable Unicode, and renders the result through a
//! caller-supplied [`render::StyledSink`].

pub mod color;
pub mod error;
pub mod glyph;
pub mod markup;
pub mod page;
pub mod render;

pub use color::Colour;
pub use error::{Result, TeletekstError};
pub use page::{FastTextLink, Line, Page, PageData, TextRun};
pub use render::{StyledSink, render_page};
