//! ANSI SGR output sinks for the teletext palette.
//!
//! Pure byte-level encoding of the handful of escape sequences the viewer
//! needs: standard 8-color foreground/background codes plus the SGR reset.
//! Every run is written as set-colors, body, reset, so no color state leaks
//! between runs or into the shell prompt.

use std::io::{self, Write};

use teletekst_core::{Colour, StyledSink};

/// SGR palette index for a teletext color (standard 8-color table).
fn sgr_index(colour: Colour) -> u16 {
    match colour {
        Colour::Black => 0,
        Colour::Red => 1,
        Colour::Green => 2,
        Colour::Yellow => 3,
        Colour::Blue => 4,
        Colour::Cyan => 6,
        Colour::White => 7,
    }
}

/// Set the foreground (text) color (SGR 30-37).
fn fg(w: &mut impl Write, colour: Colour) -> io::Result<()> {
    write!(w, "\x1b[{}m", 30 + sgr_index(colour))
}

/// Set the background color (SGR 40-47).
fn bg(w: &mut impl Write, colour: Colour) -> io::Result<()> {
    write!(w, "\x1b[{}m", 40 + sgr_index(colour))
}

/// Reset all SGR attributes to terminal defaults (SGR 0).
fn reset(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[0m")
}

/// Sink that renders runs as SGR-colored text.
pub struct AnsiSink<W: Write> {
    out: W,
}

impl<W: Write> AnsiSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> StyledSink for AnsiSink<W> {
    fn write_styled(
        &mut self,
        text: &str,
        foreground: Colour,
        background: Colour,
    ) -> io::Result<()> {
        fg(&mut self.out, foreground)?;
        bg(&mut self.out, background)?;
        self.out.write_all(text.as_bytes())?;
        reset(&mut self.out)
    }

    fn write_plain(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())
    }
}

/// Sink that drops all styling, for `--no-color` and piped output.
pub struct PlainSink<W: Write> {
    out: W,
}

impl<W: Write> PlainSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> StyledSink for PlainSink<W> {
    fn write_styled(
        &mut self,
        text: &str,
        _foreground: Colour,
        _background: Colour,
    ) -> io::Result<()> {
        self.out.write_all(text.as_bytes())
    }

    fn write_plain(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn fg_uses_standard_codes() {
        assert_eq!(emit(|w| fg(w, Colour::Red)), "\x1b[31m");
        assert_eq!(emit(|w| fg(w, Colour::Yellow)), "\x1b[33m");
        assert_eq!(emit(|w| fg(w, Colour::Cyan)), "\x1b[36m");
        assert_eq!(emit(|w| fg(w, Colour::White)), "\x1b[37m");
    }

    #[test]
    fn bg_uses_standard_codes() {
        assert_eq!(emit(|w| bg(w, Colour::Black)), "\x1b[40m");
        assert_eq!(emit(|w| bg(w, Colour::Blue)), "\x1b[44m");
    }

    #[test]
    fn ansi_sink_wraps_runs_in_reset() {
        let mut buf = Vec::new();
        let mut sink = AnsiSink::new(&mut buf);
        sink.write_styled("AB", Colour::Red, Colour::Black).unwrap();
        sink.write_plain("\n").unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "\x1b[31m\x1b[40mAB\x1b[0m\n");
    }

    #[test]
    fn plain_sink_strips_styling() {
        let mut buf = Vec::new();
        let mut sink = PlainSink::new(&mut buf);
        sink.write_styled("AB", Colour::Red, Colour::Black).unwrap();
        sink.write_plain("\n").unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "AB\n");
    }
}
