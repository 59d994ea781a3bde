//! Character-budget and display-width truncation.

use unicode_segmentation::UnicodeSegmentation;

use super::width::{display_width, grapheme_width};

/// Truncates `text` so it holds at most `max_len` characters, appending an
/// elision marker chosen by the available budget.
///
/// Strategies, in priority order:
/// 1. budget > 50: cut to leave room for a `"... (total length of <N>
///    characters)"` suffix, where `<N>` is the original character count,
/// 2. budget > 3: cut to `max_len - 3` characters plus `"..."`,
/// 3. budget 0..=3: that many leading characters of `"..."`,
/// 4. negative budget: empty string.
///
/// Absent input propagates as `None`; this is the one text operation that does
/// not collapse absence to an empty string, because callers use the result to
/// overwrite what they were handed.
pub fn truncate(text: Option<&str>, max_len: isize) -> Option<String> {
    let text = text?;

    if max_len < 0 {
        return Some(String::new());
    }

    let max_len = max_len as usize;
    let char_len = text.chars().count();
    if char_len <= max_len {
        return Some(text.to_string());
    }

    let truncated = if max_len > 50 {
        let suffix = format!("... (total length of {char_len} characters)");
        // The suffix length depends on the digit count of the original
        // length, so the cut point comes from the built string.
        let keep = max_len.saturating_sub(suffix.chars().count());
        let mut out: String = text.chars().take(keep).collect();
        out.push_str(&suffix);
        out
    } else if max_len > 3 {
        let mut out: String = text.chars().take(max_len - 3).collect();
        out.push_str("...");
        out
    } else {
        "...".chars().take(max_len).collect()
    };

    Some(truncated)
}

/// Truncates `text` to fit a display cell `max_width` columns wide, appending
/// `ellipsis` when anything was cut.
///
/// Widths are measured per grapheme cluster, so emoji and wide CJK characters
/// count as two columns and never get split. Returns the text unchanged when
/// it already fits.
pub fn truncate_to_width(text: &str, max_width: usize, ellipsis: &str) -> String {
    if max_width == 0 {
        return String::new();
    }

    if display_width(text) <= max_width {
        return text.to_string();
    }

    let target_width = max_width.saturating_sub(display_width(ellipsis));
    if target_width == 0 {
        return ellipsis.chars().take(max_width).collect();
    }

    let mut out = String::new();
    let mut used = 0;
    for grapheme in text.graphemes(true) {
        let width = grapheme_width(grapheme);
        if used + width > target_width {
            break;
        }
        out.push_str(grapheme);
        used += width;
    }

    out.push_str(ellipsis);
    out
}
