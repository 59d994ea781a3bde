//! Case-insensitive ordering helpers.

use std::cmp::Ordering;

/// Returns the index at which `item` belongs in `sorted`, which must already
/// be in case-insensitive order.
///
/// Binary search: an element comparing equal (ignoring case) ends the search
/// immediately, so among case-insensitive duplicates the returned slot is the
/// first one the probe sequence happens to hit, not necessarily the first
/// occurrence overall. The index only locates the slot; the caller performs
/// the insertion.
pub fn sorted_insert_index<S: AsRef<str>>(sorted: &[S], item: &str) -> usize {
    let mut low = 0;
    let mut high = sorted.len();

    while low < high {
        let mid = (low + high) / 2;
        match cmp_ignore_case(sorted[mid].as_ref(), item) {
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
            Ordering::Equal => return mid,
        }
    }

    low
}

/// Sorts strings case-insensitively by inserting them one at a time at the
/// slot found by [`sorted_insert_index`].
///
/// The incremental build is quadratic over the item count. That is deliberate:
/// callers grow sorted lists the same way one element at a time, and this
/// keeps a single placement routine responsible for the order.
///
/// Accepts any string collection (`Vec`, slices, sets); absent input
/// propagates as `None`.
pub fn sort<I>(items: Option<I>) -> Option<Vec<String>>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let items = items?;

    let mut sorted: Vec<String> = Vec::new();
    for item in items {
        let item = item.into();
        let index = sorted_insert_index(&sorted, &item);
        sorted.insert(index, item);
    }

    Some(sorted)
}

fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}
