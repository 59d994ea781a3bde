//! Friendly-description formatting.

/// Normalizes a free-text description for display.
///
/// Trims surrounding whitespace and capitalizes the first character, unless the
/// leading word looks like a one- or two-letter identifier (`"x"`, `"dx area"`)
/// in which case the text is left as typed. With `add_period` set, a `.` is
/// appended when the text does not already end in `.`, `!` or `?`.
///
/// Returns an empty string for `None`.
pub fn friendly_description(description: Option<&str>, add_period: bool) -> String {
    let Some(description) = description else {
        return String::new();
    };

    let trimmed = description.trim();
    let mut out = String::with_capacity(trimmed.len() + 1);

    let mut chars = trimmed.chars();
    let first = chars.next();
    let second = chars.next();
    let third = chars.next();

    match (first, second, third) {
        (Some(first), Some(second), Some(third))
            if first.is_lowercase() && second != ' ' && third != ' ' =>
        {
            out.extend(first.to_uppercase());
            out.push_str(&trimmed[first.len_utf8()..]);
        }
        _ => out.push_str(trimmed),
    }

    if add_period
        && second.is_some()
        && !matches!(out.chars().next_back(), Some('.' | '!' | '?'))
    {
        out.push('.');
    }

    out
}

/// Returns whether `text` is absent or contains only whitespace.
pub fn is_empty_after_trimming(text: Option<&str>) -> bool {
    text.map_or(true, |text| text.trim().is_empty())
}
