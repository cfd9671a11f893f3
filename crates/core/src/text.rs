//! Text layout helpers for console output
//!
//! Widths are measured in terminal columns, not bytes or chars, so wide
//! glyphs in banners and help text line up.

use unicode_width::UnicodeWidthStr;

/// Width of a string in terminal columns
#[inline]
#[must_use]
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Center a block of lines within `width` columns
///
/// Every line receives the same left padding, computed from the widest line,
/// so multi-line art keeps its shape. Lines wider than `width` get no padding.
#[must_use]
pub fn center_block<S: AsRef<str>>(lines: &[S], width: usize) -> Vec<String> {
    let Some(longest) = lines.iter().map(|l| display_width(l.as_ref())).max() else {
        return Vec::new();
    };

    let padding = " ".repeat(width.saturating_sub(longest) / 2);
    lines
        .iter()
        .map(|line| format!("{padding}{}", line.as_ref()))
        .collect()
}

/// Split text into lines, word-wrapping paragraphs wider than `width`
///
/// Explicit newlines are preserved. A `width` of zero disables wrapping.
#[must_use]
pub fn wrap_lines(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for line in text.split('\n') {
        if width == 0 || display_width(line) <= width {
            lines.push(line.to_string());
        } else {
            lines.extend(
                textwrap::wrap(line, width)
                    .into_iter()
                    .map(std::borrow::Cow::into_owned),
            );
        }
    }
    lines
}

/// Split (and optionally wrap) text, then center it as one block
#[must_use]
pub fn center_text(text: &str, width: usize, wrap: bool) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let lines = if wrap {
        wrap_lines(text, width)
    } else {
        text.split('\n').map(str::to_string).collect()
    };
    center_block(&lines, width)
}
