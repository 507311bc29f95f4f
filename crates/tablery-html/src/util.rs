//! Small string helpers.

/// Derive a display caption from a column name.
///
/// Splits on underscores, hyphens, and whitespace, capitalizing the first
/// letter of each word.
///
/// # Example
///
/// ```
/// use tablery_html::humanize;
///
/// assert_eq!(humanize("author_name"), "Author Name");
/// assert_eq!(humanize("the-title"), "The Title");
/// ```
#[must_use]
pub fn humanize(name: &str) -> String {
    name.split(['_', '-'])
        .flat_map(str::split_whitespace)
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
