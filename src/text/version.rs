//! Version string tokenizing.

/// Splits a version string into its numeric parts.
///
/// `.` and `,` are both treated as single-character delimiters. Tokens that do
/// not parse as base-10 integers are skipped, so the result may hold fewer
/// entries than the input has fields; `"a.b"` yields an empty vector. Absent
/// input yields `[1, 0]`.
pub fn tokenize_version(version: Option<&str>) -> Vec<u32> {
    let Some(version) = version else {
        return vec![1, 0];
    };

    version
        .split(['.', ','])
        .filter_map(|token| token.parse().ok())
        .collect()
}
