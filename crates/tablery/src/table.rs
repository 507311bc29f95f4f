//! The collection table.

use tablery_html::{AttributeMap, HtmlElement};
use tracing::debug;

use crate::body::Body;
use crate::body_row::BodyRow;
use crate::error::Error;
use crate::footer::Footer;
use crate::header::Header;
use crate::options::TableOptions;
use crate::record::Record;

/// A table displaying data for every element of a collection.
///
/// Composes a [`Header`], [`Body`], and [`Footer`] per [`TableOptions`]
/// (header on, footer off by default) inside a `<table>` wrapper carrying
/// `cellpadding="0" cellspacing="0"` unless overridden. Sections are
/// configured through [`header_mut`](CollectionTable::header_mut),
/// [`body_mut`](CollectionTable::body_mut), and
/// [`footer_mut`](CollectionTable::footer_mut) before building.
///
/// [`build`](CollectionTable::build) renders rows from the element type's
/// own attributes; [`build_with`](CollectionTable::build_with) additionally
/// runs a per-row callback that can set any cells.
///
/// # Example
///
/// ```
/// use tablery::{CollectionTable, Record};
/// use tablery_html::Content;
///
/// struct Post {
///     title: String,
/// }
///
/// impl Record for Post {
///     fn column_names() -> Vec<String> {
///         vec!["title".to_owned()]
///     }
///
///     fn value(&self, column: &str) -> Option<Content> {
///         (column == "title").then(|| Content::from(self.title.as_str()))
///     }
/// }
///
/// let posts = vec![Post { title: "first".to_owned() }];
/// let mut table = CollectionTable::new(&posts);
/// let html = table.build().unwrap();
/// assert!(html.starts_with(r#"<table cellpadding="0" cellspacing="0">"#));
/// ```
#[derive(Debug)]
pub struct CollectionTable<'c, T: Record> {
    collection: &'c [T],
    options: TableOptions,
    attributes: AttributeMap,
    header: Header,
    body: Body,
    footer: Footer,
    content: String,
}

impl<'c, T: Record> CollectionTable<'c, T> {
    /// Create a table for the collection with default options.
    #[must_use]
    pub fn new(collection: &'c [T]) -> Self {
        Self::with_options(collection, TableOptions::default())
    }

    /// Create a table for the collection with explicit options.
    #[must_use]
    pub fn with_options(collection: &'c [T], options: TableOptions) -> Self {
        let mut attributes = AttributeMap::new();
        attributes.insert("cellspacing", "0");
        attributes.insert("cellpadding", "0");

        Self {
            collection,
            options,
            attributes,
            header: Header::new(collection),
            body: Body::new(),
            footer: Footer::new(collection),
            content: String::new(),
        }
    }

    /// The collection this table renders.
    #[must_use]
    pub fn collection(&self) -> &'c [T] {
        self.collection
    }

    /// The table's section options.
    #[must_use]
    pub fn options(&self) -> TableOptions {
        self.options
    }

    /// The header section.
    #[must_use]
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Mutable access to the header section.
    pub fn header_mut(&mut self) -> &mut Header {
        &mut self.header
    }

    /// The body section.
    #[must_use]
    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Mutable access to the body section.
    pub fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    /// The footer section.
    #[must_use]
    pub fn footer(&self) -> &Footer {
        &self.footer
    }

    /// Mutable access to the footer section.
    pub fn footer_mut(&mut self) -> &mut Footer {
        &mut self.footer
    }

    /// Build the table using only the element type's own attribute values.
    pub fn build(&mut self) -> Result<String, Error> {
        self.build_with(|_, _, _| Ok(()))
    }

    /// Build the table, running `f` for every body row.
    ///
    /// The callback receives each row, its collection element, and the
    /// element's 0-based index. Returns the complete `<table>` markup.
    pub fn build_with<F>(&mut self, f: F) -> Result<String, Error>
    where
        F: FnMut(&mut BodyRow, &T, usize) -> Result<(), Error>,
    {
        debug!(
            rows = self.collection.len(),
            columns = self.header.column_count(),
            "building collection table"
        );

        self.body.build(self.collection, &self.header, f)?;

        let mut content = String::new();
        if self.options.header {
            content.push_str(&self.header.html());
        }
        content.push_str(&self.body.html());
        if self.options.footer {
            content.push_str(&self.footer.html());
        }
        self.content = content;

        Ok(self.html())
    }
}

impl<T: Record> HtmlElement for CollectionTable<'_, T> {
    fn tag_name(&self) -> &str {
        "table"
    }

    fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut AttributeMap {
        &mut self.attributes
    }

    fn write_content(&self, out: &mut String) {
        out.push_str(&self.content);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tablery_html::Content;

    struct Post {
        title: String,
    }

    impl Post {
        fn new(title: &str) -> Self {
            Self {
                title: title.to_owned(),
            }
        }
    }

    impl Record for Post {
        fn column_names() -> Vec<String> {
            vec!["title".to_owned()]
        }

        fn value(&self, column: &str) -> Option<Content> {
            (column == "title").then(|| Content::from(self.title.as_str()))
        }
    }

    struct Note {
        title: String,
    }

    impl Record for Note {
        fn column_names() -> Vec<String> {
            vec!["title".to_owned(), "author_name".to_owned()]
        }

        fn value(&self, column: &str) -> Option<Content> {
            (column == "title").then(|| Content::from(self.title.as_str()))
        }
    }

    fn posts() -> Vec<Post> {
        vec![Post::new("first"), Post::new("second"), Post::new("last")]
    }

    const TITLE_HEAD: &str =
        r#"<thead><tr><th class="title" scope="col">Title</th></tr></thead>"#;
    const TITLE_ROWS: &str = concat!(
        r#"<tbody>"#,
        r#"<tr class="row"><td class="title">first</td></tr>"#,
        r#"<tr class="row"><td class="title">second</td></tr>"#,
        r#"<tr class="row"><td class="title">last</td></tr>"#,
        r#"</tbody>"#
    );

    #[test]
    fn test_default_table_attributes() {
        let collection: Vec<Post> = Vec::new();
        let table = CollectionTable::new(&collection);
        assert_eq!(table.attributes().get("cellspacing").as_deref(), Some("0"));
        assert_eq!(table.attributes().get("cellpadding").as_deref(), Some("0"));
    }

    #[test]
    fn test_empty_collection_renders_hidden_header_and_no_content() {
        let collection: Vec<Post> = Vec::new();
        let mut table = CollectionTable::new(&collection);
        table.header_mut().clear();

        let html = table.build().unwrap();

        assert_eq!(
            html,
            concat!(
                r#"<table cellpadding="0" cellspacing="0">"#,
                r#"<thead style="display: none;"><tr></tr></thead>"#,
                r#"<tbody><tr class="no_content"><td>No matches found.</td></tr></tbody>"#,
                "</table>"
            )
        );
    }

    #[test]
    fn test_builds_header_and_body_by_default() {
        let collection = posts();
        let mut table = CollectionTable::new(&collection);

        let html = table.build().unwrap();

        assert_eq!(
            html,
            format!(
                r#"<table cellpadding="0" cellspacing="0">{TITLE_HEAD}{TITLE_ROWS}</table>"#
            )
        );
    }

    #[test]
    fn test_header_disabled() {
        let collection = posts();
        let mut table = CollectionTable::with_options(
            &collection,
            TableOptions {
                header: false,
                footer: false,
            },
        );

        let html = table.build().unwrap();

        assert_eq!(
            html,
            format!(r#"<table cellpadding="0" cellspacing="0">{TITLE_ROWS}</table>"#)
        );
    }

    #[test]
    fn test_footer_enabled() {
        let collection = posts();
        let mut table = CollectionTable::with_options(
            &collection,
            TableOptions {
                header: true,
                footer: true,
            },
        );
        table.footer_mut().cell("total").set_content(3_usize);

        let html = table.build().unwrap();

        assert_eq!(
            html,
            format!(
                concat!(
                    r#"<table cellpadding="0" cellspacing="0">{head}{rows}"#,
                    r#"<tfoot><tr><td class="total">3</td></tr></tfoot>"#,
                    "</table>"
                ),
                head = TITLE_HEAD,
                rows = TITLE_ROWS
            )
        );
    }

    #[test]
    fn test_inferred_columns_pad_missing_cells() {
        let collection = vec![
            Note {
                title: "first".to_owned(),
            },
            Note {
                title: "second".to_owned(),
            },
        ];
        let mut table = CollectionTable::new(&collection);

        let html = table.build().unwrap();

        assert_eq!(
            html,
            concat!(
                r#"<table cellpadding="0" cellspacing="0">"#,
                r#"<thead><tr>"#,
                r#"<th class="title" scope="col">Title</th>"#,
                r#"<th class="author_name" scope="col">Author Name</th>"#,
                r#"</tr></thead>"#,
                r#"<tbody>"#,
                r#"<tr class="row"><td class="title">first</td><td class="author_name empty"></td></tr>"#,
                r#"<tr class="row"><td class="title">second</td><td class="author_name empty"></td></tr>"#,
                r#"</tbody>"#,
                "</table>"
            )
        );
    }

    #[test]
    fn test_per_row_callback_overrides_cells() {
        let collection = posts();
        let mut table = CollectionTable::new(&collection);

        let html = table
            .build_with(|row, post, index| {
                row.set("title", format!("{index}: {}", post.title))?;
                Ok(())
            })
            .unwrap();

        assert!(html.contains(r#"<td class="title">0: first</td>"#));
        assert!(html.contains(r#"<td class="title">2: last</td>"#));
    }

    #[test]
    fn test_callback_error_propagates() {
        let collection = posts();
        let mut table = CollectionTable::new(&collection);

        let result = table.build_with(|row, _, _| row.set("missing", "x").map(|_| ()));

        assert_eq!(
            result.unwrap_err(),
            Error::UnknownColumn {
                name: "missing".to_owned()
            }
        );
    }

    #[test]
    fn test_table_attributes_can_be_overridden() {
        let collection = posts();
        let mut table = CollectionTable::new(&collection);
        table.attributes_mut().insert("cellspacing", "2");
        table.attributes_mut().insert("id", "posts");
        table.attributes_mut().insert("class", "summary");

        let html = table.build().unwrap();

        assert!(html.starts_with(
            r#"<table cellpadding="0" cellspacing="2" class="summary" id="posts">"#
        ));
    }

    #[test]
    fn test_rebuild_reflects_new_configuration() {
        let collection = posts();
        let mut table = CollectionTable::new(&collection);
        let first = table.build().unwrap();

        table.header_mut().column("author_name");
        let second = table.build().unwrap();

        assert!(!first.contains("author_name"));
        assert!(second.contains(r#"<td class="author_name empty"></td>"#));
    }
}
