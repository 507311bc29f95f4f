//! Column inference for collection element types.

use tablery_html::Content;

/// A collection element that can describe its own columns.
///
/// This is the capability the table uses for column inference: the header
/// pre-fills one column per entry of [`column_names`](Record::column_names),
/// and each body row pre-populates a cell whenever
/// [`value`](Record::value) returns `Some` for a column.
///
/// Both methods have defaults, so a type with no inferable columns can opt in
/// with an empty impl and still be rendered through explicit per-row
/// callbacks:
///
/// ```
/// use tablery::Record;
///
/// struct Opaque;
///
/// impl Record for Opaque {}
/// ```
///
/// A typical implementation exposes its fields:
///
/// ```
/// use tablery::Record;
/// use tablery_html::Content;
///
/// struct Post {
///     title: String,
/// }
///
/// impl Record for Post {
///     fn column_names() -> Vec<String> {
///         vec!["title".to_owned(), "author_name".to_owned()]
///     }
///
///     fn value(&self, column: &str) -> Option<Content> {
///         match column {
///             "title" => Some(Content::from(self.title.as_str())),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait Record {
    /// Ordered column names used to pre-fill the header.
    #[must_use]
    fn column_names() -> Vec<String>
    where
        Self: Sized,
    {
        Vec::new()
    }

    /// The value for `column`, if this element exposes one.
    ///
    /// Columns returning `None` render as empty placeholder cells unless the
    /// per-row callback sets them.
    #[must_use]
    fn value(&self, column: &str) -> Option<Content> {
        let _ = column;
        None
    }
}

impl Record for String {}

impl Record for &str {}
