//! Delimited-area removal (tags, HTML comments).

/// Removes every non-overlapping region delimited by `start` and `end`,
/// markers included.
///
/// The scan runs left to right; after a region is skipped, scanning resumes
/// past its `end` marker, so nested or overlapping markers are not recognized.
/// A `start` with no matching `end` consumes the rest of the input. A single
/// space is kept in place of a removed region that would otherwise fuse two
/// words: when the region contained whitespace and sat directly between two
/// non-whitespace runs (`"foo<!-- x -->bar"` gives `"foo bar"`), and when the
/// region started flush against the previous removed region
/// (`"a<b><i>d"` gives `"a d"`).
///
/// Empty markers are rejected by returning the input unchanged. Absent input
/// propagates as `None`.
pub fn remove_areas(text: Option<&str>, start: &str, end: &str) -> Option<String> {
    let text = text?;

    if start.is_empty() || end.is_empty() {
        return Some(text.to_string());
    }

    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;
    let mut offset = 0;

    while let Some(found) = text[offset..].find(start) {
        let start_idx = offset + found;

        // A region starting where the previous one ended separates words too.
        if start_idx == offset
            && out.chars().next_back().map_or(false, |ch| !ch.is_whitespace())
        {
            pending_space = true;
        }

        push_chunk(&mut out, &text[offset..start_idx], &mut pending_space);

        let body_from = start_idx + start.len();
        let Some(found_end) = text[body_from..].find(end) else {
            // Unterminated region: the remainder is treated as consumed.
            return Some(out);
        };

        let body = &text[body_from..body_from + found_end];
        if body.chars().any(char::is_whitespace)
            && out.chars().next_back().map_or(false, |ch| !ch.is_whitespace())
        {
            pending_space = true;
        }

        offset = body_from + found_end + end.len();
    }

    push_chunk(&mut out, &text[offset..], &mut pending_space);
    Some(out)
}

/// Removes all `<...>` tag structures from `text`.
pub fn remove_tags(text: Option<&str>) -> Option<String> {
    remove_areas(text, "<", ">")
}

/// Removes all `<!-- ... -->` HTML comments from `text`.
pub fn remove_html_comments(text: Option<&str>) -> Option<String> {
    remove_areas(text, "<!--", "-->")
}

fn push_chunk(out: &mut String, chunk: &str, pending_space: &mut bool) {
    if chunk.is_empty() {
        return;
    }
    if *pending_space {
        if !chunk.starts_with(char::is_whitespace) {
            out.push(' ');
        }
        *pending_space = false;
    }
    out.push_str(chunk);
}
