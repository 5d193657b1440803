//! Display width helpers.
//!
//! Used both for measuring canvas labels and for aligning the styled terminal
//! listing, whose cells carry ANSI color codes.

/// Compute the display width of a string after stripping ANSI escapes.
pub fn display_width(text: &str) -> usize {
    let clean = strip_ansi_escapes::strip(text);
    let clean_str = String::from_utf8_lossy(&clean);
    unicode_width::UnicodeWidthStr::width(&*clean_str)
}
