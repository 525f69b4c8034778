//! Mosaic glyph mapping for the NOS private-use character range.
//!
//! NOS Teletekst encodes G1 block-mosaic characters as `0xF0VH`, where `V`
//! and `H` are the vertical and horizontal positions in the teletext G1
//! mosaic table. The codepoints `0xF020..=0xF03F` and `0xF060..=0xF07F`
//! map onto the Unicode "Symbols for Legacy Computing" sextants, except for
//! the three mosaics that already existed as block elements (left half,
//! right half, full block). Everything else, including the unmapped
//! `0xF040..=0xF05F` gap, renders as itself.

/// The 64 mosaic glyphs: `0xF020..=0xF03F` at indices 0..32,
/// `0xF060..=0xF07F` at indices 32..64.
static MOSAIC: [char; 64] = [
    // 0xF020..=0xF027
    ' ', '🬀', '🬁', '🬂', '🬃', '🬄', '🬅', '🬆',
    // 0xF028..=0xF02F
    '🬇', '🬈', '🬉', '🬊', '🬋', '🬌', '🬍', '🬎',
    // 0xF030..=0xF037
    '🬏', '🬐', '🬑', '🬒', '🬓', '▌', '🬔', '🬕',
    // 0xF038..=0xF03F
    '🬖', '🬗', '🬘', '🬙', '🬚', '🬛', '🬜', '🬝',
    // 0xF060..=0xF067
    '🬞', '🬟', '🬠', '🬡', '🬢', '🬣', '🬤', '🬥',
    // 0xF068..=0xF06F
    '🬦', '🬧', '▐', '🬨', '🬩', '🬪', '🬫', '🬬',
    // 0xF070..=0xF077
    '🬭', '🬮', '🬯', '🬰', '🬱', '🬲', '🬳', '🬴',
    // 0xF078..=0xF07F
    '🬵', '🬶', '🬷', '🬸', '🬹', '🬺', '🬻', '█',
];

/// Map one scalar value to its renderable form.
///
/// Pure and total: identity for everything outside the two mosaic ranges.
pub fn map_char(c: char) -> char {
    match c as u32 {
        cp @ 0xF020..=0xF03F => MOSAIC[(cp - 0xF020) as usize],
        cp @ 0xF060..=0xF07F => MOSAIC[(cp - 0xF060) as usize + 32],
        _ => c,
    }
}

/// Map every scalar of `s` through [`map_char`].
///
/// Scalar count and order are preserved; the mapping never merges, drops or
/// reorders codepoints.
pub fn map_str(s: &str) -> String {
    s.chars().map(map_char).collect()
}
