//! Page renderer - walks a parsed page and writes styled output.

use std::io;

use crate::color::Colour;
use crate::page::Page;

/// Placeholder for an absent page id in the navigation guide.
const PAGE_SLOT: &str = "   ";
/// Placeholder for an absent sub-page id (dashed ids are wider).
const SUB_PAGE_SLOT: &str = "      ";

/// Destination for rendered output.
///
/// The sink owns all escape-sequence knowledge; the renderer only hands it
/// text plus a color pair from the teletext palette.
pub trait StyledSink {
    /// Write one run of text in the given colors.
    fn write_styled(&mut self, text: &str, foreground: Colour, background: Colour)
    -> io::Result<()>;

    /// Write unstyled text: row terminators and the navigation guide.
    fn write_plain(&mut self, text: &str) -> io::Result<()>;
}

/// Write the content grid of `page`, then its navigation guide.
///
/// Every run is styled with its own color pair, rows end with a newline.
/// The guide always shows the prev/next page slots; a second line with the
/// prev/next sub-page slots appears only when at least one sub-page link
/// exists. Each slot falls back to a fixed-width blank when absent.
pub fn render_page<S: StyledSink>(page: &Page, sink: &mut S) -> io::Result<()> {
    for line in &page.content {
        for run in line {
            sink.write_styled(&run.body, run.foreground, run.background)?;
        }
        sink.write_plain("\n")?;
    }

    let prev = page.prev_page.as_deref().unwrap_or(PAGE_SLOT);
    let next = page.next_page.as_deref().unwrap_or(PAGE_SLOT);
    sink.write_plain(&format!("< {prev}    {next} >\n"))?;

    if page.prev_sub_page.is_some() || page.next_sub_page.is_some() {
        let prev = page.prev_sub_page.as_deref().unwrap_or(SUB_PAGE_SLOT);
        let next = page.next_sub_page.as_deref().unwrap_or(SUB_PAGE_SLOT);
        sink.write_plain(&format!("< {prev}    {next} >\n"))?;
    }

    Ok(())
}
