use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate a string to fit within `max_cells` terminal cells, appending `…` if truncated.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 0 {
        return String::new();
    }
    let budget = max_cells - 1;
    let mut width = 0;
    let mut result = String::new();
    for grapheme in s.graphemes(true) {
        let gw = display_width(grapheme);
        if width + gw > budget {
            break;
        }
        width += gw;
        result.push_str(grapheme);
    }
    result.push('\u{2026}');
    result
}

/// The suffix of `s` left after dropping at least `cols` leading cells.
/// A wide grapheme straddling the cut is dropped whole.
pub fn skip_cols(s: &str, cols: usize) -> &str {
    let mut width = 0;
    for (i, grapheme) in s.grapheme_indices(true) {
        if width >= cols {
            return &s[i..];
        }
        width += display_width(grapheme);
    }
    ""
}
