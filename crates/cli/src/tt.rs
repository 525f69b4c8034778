//! tt - view a NOS Teletekst page in the terminal.
//!
//! Reads a page document as served by
//! `https://teletekst-data.nos.nl/json/<page-id>` from a file or stdin and
//! renders it as colored fixed-width text. Fetching stays outside this
//! tool, so the usual invocation is:
//!
//! ```text
//! curl -s https://teletekst-data.nos.nl/json/101 | tt 101
//! ```

mod ansi;

use std::fs;
use std::io::{self, BufWriter, Read, Write};

use ansi::{AnsiSink, PlainSink};
use clap::{ArgAction, Parser};
use teletekst_core::{Page, render_page};

/// View a NOS Teletekst page as colored fixed-width terminal text.
#[derive(Parser, Debug)]
#[command(name = "tt")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Page id, in the format "100" or "100-1"
    page_id: String,

    /// Path to the page JSON document, or "-" for stdin
    #[arg(short, long, default_value = "-")]
    input: String,

    /// Disable ANSI colors
    #[arg(long = "no-color", action = ArgAction::SetTrue)]
    no_color: bool,
}

/// Read the page document from a file or stdin.
fn read_input(input: &str) -> io::Result<String> {
    if input == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        fs::read_to_string(input)
    }
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.page_id.len() > 6 {
        eprintln!("page id too long, must be in format '100' or '100-1'");
        std::process::exit(1);
    }

    let json = match read_input(&args.input) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Error reading {}: {}", args.input, e);
            std::process::exit(1);
        }
    };

    let page = match Page::from_json(&json) {
        Ok(page) => page,
        Err(e) => {
            eprintln!("Error parsing page {}: {}", args.page_id, e);
            std::process::exit(1);
        }
    };

    let mut out = BufWriter::new(io::stdout());
    if args.no_color {
        render_page(&page, &mut PlainSink::new(&mut out))?;
    } else {
        render_page(&page, &mut AnsiSink::new(&mut out))?;
    }
    out.flush()?;

    Ok(())
}
