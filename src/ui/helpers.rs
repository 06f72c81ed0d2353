//! Shared rendering utilities.
//!
//! Low-level helpers used by several components: cursor positioning, match
//! highlighting and width-aware truncation. Everything here works on
//! character indices, never byte indices.

use crate::ui::theme::Theme;

/// Positions the cursor at a 1-indexed row and column.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Truncates `text` to at most `max` characters, marking the cut with `...`.
///
/// ```
/// use zallery::ui::helpers::truncate_end;
///
/// assert_eq!(truncate_end("Aman Kumar", 20), "Aman Kumar");
/// assert_eq!(truncate_end("Science fair first prize", 10), "Science...");
/// assert_eq!(truncate_end("abc", 2), "ab");
/// ```
#[must_use]
pub fn truncate_end(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max <= 3 {
        return text.chars().take(max).collect();
    }
    let mut truncated: String = text.chars().take(max - 3).collect();
    truncated.push_str("...");
    truncated
}

/// Prints `text` with the given character ranges highlighted.
///
/// Ranges are `(start, end)` character indices, end exclusive, sorted and
/// non-overlapping. When `is_selected` is set the text is printed plain so
/// the selection background stays intact.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start.max(current_pos)..end.max(current_pos)].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));

        current_pos = end.max(current_pos);
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

/// Number of columns needed to centre `len` characters in `cols`.
#[must_use]
pub const fn centre_padding(len: usize, cols: usize) -> usize {
    cols.saturating_sub(len) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_counts_characters() {
        assert_eq!(truncate_end("Zoë Günther", 11), "Zoë Günther");
        assert_eq!(truncate_end("Zoë Günther", 7), "Zoë ...");
        assert_eq!(truncate_end("", 0), "");
    }

    #[test]
    fn padding_centres_text() {
        assert_eq!(centre_padding(4, 10), 3);
        assert_eq!(centre_padding(20, 10), 0);
    }
}
