//! The table body.

use tablery_html::{AttributeMap, Content, HtmlElement, content_tag};
use tracing::debug;

use crate::body_row::BodyRow;
use crate::cell::Cell;
use crate::error::Error;
use crate::header::Header;
use crate::options::{BorderPosition, Parity};
use crate::record::Record;

/// The `<tbody>` section: one [`BodyRow`] per collection element.
///
/// Alternating rows and row borders are both off by default. With borders
/// enabled, a border row is emitted adjacent to every data row except at the
/// table's outer edge: never before the first row for
/// [`BorderPosition::Before`], never after the last row for
/// [`BorderPosition::After`].
///
/// When the collection is empty and an empty caption is configured (the
/// default is `"No matches found."`), the body renders a single
/// `no_content` row spanning all columns; with the caption unset it renders
/// nothing.
#[derive(Debug, Clone)]
pub struct Body {
    attributes: AttributeMap,
    alternate_rows: Option<Parity>,
    row_borders: Option<BorderPosition>,
    empty_caption: Option<Content>,
    content: String,
}

impl Body {
    /// Create a body with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Which rows alternate, if any.
    #[must_use]
    pub fn alternate_rows(&self) -> Option<Parity> {
        self.alternate_rows
    }

    /// Enable or disable alternating rows.
    pub fn set_alternate_rows(&mut self, parity: Option<Parity>) {
        self.alternate_rows = parity;
    }

    /// Where row borders are emitted, if anywhere.
    #[must_use]
    pub fn row_borders(&self) -> Option<BorderPosition> {
        self.row_borders
    }

    /// Enable or disable row borders.
    pub fn set_row_borders(&mut self, position: Option<BorderPosition>) {
        self.row_borders = position;
    }

    /// The caption shown when the collection is empty.
    #[must_use]
    pub fn empty_caption(&self) -> Option<&Content> {
        self.empty_caption.as_ref()
    }

    /// Set or clear the empty-collection caption.
    pub fn set_empty_caption(&mut self, caption: Option<Content>) {
        self.empty_caption = caption;
    }

    /// Build the body content: one row per collection element, in order.
    ///
    /// The callback receives each row, its element, and the element's
    /// 0-based index, and may set any cells. An error from the callback
    /// aborts the build.
    pub fn build<T, F>(&mut self, collection: &[T], header: &Header, mut f: F) -> Result<(), Error>
    where
        T: Record,
        F: FnMut(&mut BodyRow, &T, usize) -> Result<(), Error>,
    {
        debug!(rows = collection.len(), "building table body");
        self.content.clear();

        if collection.is_empty() {
            if let Some(caption) = &self.empty_caption {
                let mut cell = Cell::anonymous(caption.clone());
                if header.column_count() > 1 {
                    cell.set_colspan(header.column_count());
                }

                let mut attrs = AttributeMap::new();
                attrs.insert("class", "no_content");
                self.content = content_tag("tr", &cell.html(), &attrs);
            }
            return Ok(());
        }

        for (index, record) in collection.iter().enumerate() {
            let html =
                self.build_row(record, index, collection.len(), header, |row, record, index| {
                    f(row, record, index)
                })?;
            self.content.push_str(&html);
        }

        Ok(())
    }

    /// Build a single row for one collection element.
    ///
    /// `total` is the collection length, used to suppress borders at the
    /// table's outer edge.
    pub fn build_row<T, F>(
        &self,
        record: &T,
        index: usize,
        total: usize,
        header: &Header,
        f: F,
    ) -> Result<String, Error>
    where
        T: Record,
        F: FnOnce(&mut BodyRow, &T, usize) -> Result<(), Error>,
    {
        let mut row = BodyRow::new(record, header);
        row.set_alternate(
            self.alternate_rows
                .is_some_and(|parity| parity.matches(index)),
        );

        if let Some(position) = self.row_borders {
            let at_edge = match position {
                BorderPosition::Before => index == 0,
                BorderPosition::After => index + 1 == total,
            };
            if !at_edge {
                row.set_border_position(Some(position));
            }
        }

        f(&mut row, record, index)?;

        Ok(row.html())
    }

    /// The built body content, without the `<tbody>` wrapper.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl Default for Body {
    fn default() -> Self {
        Self {
            attributes: AttributeMap::new(),
            alternate_rows: None,
            row_borders: None,
            empty_caption: Some(Content::from("No matches found.")),
            content: String::new(),
        }
    }
}

impl HtmlElement for Body {
    fn tag_name(&self) -> &str {
        "tbody"
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

    fn html(&self) -> String {
        if self.alternate_rows.is_some() {
            let mut attrs = self.attributes.clone();
            attrs.insert("class", "alternate");
            self.html_with_attributes(&attrs)
        } else {
            self.html_with_attributes(&self.attributes)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

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
        fn value(&self, column: &str) -> Option<Content> {
            (column == "title").then(|| Content::from(self.title.as_str()))
        }
    }

    fn posts() -> Vec<Post> {
        vec![Post::new("first"), Post::new("second"), Post::new("last")]
    }

    fn titled_header(collection: &[Post]) -> Header {
        let mut header = Header::new(collection);
        header.column("title");
        header
    }

    fn no_op(_row: &mut BodyRow, _record: &Post, _index: usize) -> Result<(), Error> {
        Ok(())
    }

    #[test]
    fn test_defaults() {
        let body = Body::new();
        assert_eq!(body.alternate_rows(), None);
        assert_eq!(body.row_borders(), None);
        assert_eq!(
            body.empty_caption(),
            Some(&Content::from("No matches found."))
        );
    }

    #[test]
    fn test_build_row_passes_element_and_index() {
        let collection = posts();
        let header = titled_header(&collection);
        let body = Body::new();

        let html = body
            .build_row(&collection[1], 1, collection.len(), &header, |_, post, index| {
                assert_eq!(post.title, "second");
                assert_eq!(index, 1);
                Ok(())
            })
            .unwrap();

        assert_eq!(html, r#"<tr class="row"><td class="title">second</td></tr>"#);
    }

    #[test]
    fn test_build_row_with_missing_cells() {
        let collection = posts();
        let mut header = titled_header(&collection);
        header.column("author_name");
        let body = Body::new();

        let html = body
            .build_row(&collection[0], 0, collection.len(), &header, no_op)
            .unwrap();

        assert_eq!(
            html,
            concat!(
                r#"<tr class="row">"#,
                r#"<td class="title">first</td>"#,
                r#"<td class="author_name empty"></td>"#,
                "</tr>"
            )
        );
    }

    #[test]
    fn test_build_creates_one_row_per_element() {
        let collection = posts();
        let header = titled_header(&collection);
        let mut body = Body::new();

        body.build(&collection, &header, no_op).unwrap();

        assert_eq!(
            body.content(),
            concat!(
                r#"<tr class="row"><td class="title">first</td></tr>"#,
                r#"<tr class="row"><td class="title">second</td></tr>"#,
                r#"<tr class="row"><td class="title">last</td></tr>"#
            )
        );
    }

    #[test]
    fn test_html_wraps_in_tbody() {
        let collection = posts();
        let header = titled_header(&collection);
        let mut body = Body::new();

        body.build(&collection, &header, no_op).unwrap();

        assert_eq!(
            body.html(),
            concat!(
                "<tbody>",
                r#"<tr class="row"><td class="title">first</td></tr>"#,
                r#"<tr class="row"><td class="title">second</td></tr>"#,
                r#"<tr class="row"><td class="title">last</td></tr>"#,
                "</tbody>"
            )
        );
    }

    #[test]
    fn test_html_includes_custom_attributes() {
        let collection = posts();
        let header = titled_header(&collection);
        let mut body = Body::new();
        body.attributes_mut().insert("class", "pretty");

        body.build(&collection, &header, no_op).unwrap();

        assert!(body.html().starts_with(r#"<tbody class="pretty">"#));
    }

    #[test]
    fn test_callback_error_aborts_build() {
        let collection = posts();
        let header = titled_header(&collection);
        let mut body = Body::new();

        let result = body.build(&collection, &header, |row, _, _| {
            row.set("publish_date", "today").map(|_| ())
        });

        assert_eq!(
            result.unwrap_err(),
            Error::UnknownColumn {
                name: "publish_date".to_owned()
            }
        );
    }

    #[test]
    fn test_empty_collection_shows_no_content_row() {
        let collection: Vec<Post> = Vec::new();
        let header = Header::new(&collection);
        let mut body = Body::new();

        body.build(&collection, &header, no_op).unwrap();

        assert_eq!(
            body.content(),
            r#"<tr class="no_content"><td>No matches found.</td></tr>"#
        );
    }

    #[test]
    fn test_empty_collection_without_caption_renders_nothing() {
        let collection: Vec<Post> = Vec::new();
        let header = Header::new(&collection);
        let mut body = Body::new();
        body.set_empty_caption(None);

        body.build(&collection, &header, no_op).unwrap();

        assert_eq!(body.content(), "");
    }

    #[test]
    fn test_no_content_row_spans_multiple_columns() {
        let collection: Vec<Post> = Vec::new();
        let mut header = Header::new(&collection);
        header.column("title");
        header.column("author_name");
        let mut body = Body::new();

        body.build(&collection, &header, no_op).unwrap();

        assert_eq!(
            body.content(),
            r#"<tr class="no_content"><td colspan="2">No matches found.</td></tr>"#
        );
    }

    #[test]
    fn test_no_colspan_for_single_column() {
        let collection: Vec<Post> = Vec::new();
        let mut header = Header::new(&collection);
        header.column("title");
        let mut body = Body::new();

        body.build(&collection, &header, no_op).unwrap();

        assert_eq!(
            body.content(),
            r#"<tr class="no_content"><td>No matches found.</td></tr>"#
        );
    }

    #[test]
    fn test_alternating_even_rows() {
        let collection = posts();
        let header = titled_header(&collection);
        let mut body = Body::new();
        body.set_alternate_rows(Some(Parity::Even));

        let first = body
            .build_row(&collection[0], 0, collection.len(), &header, no_op)
            .unwrap();
        let second = body
            .build_row(&collection[1], 1, collection.len(), &header, no_op)
            .unwrap();

        assert_eq!(
            first,
            r#"<tr class="row alternate"><td class="title">first</td></tr>"#
        );
        assert_eq!(
            second,
            r#"<tr class="row"><td class="title">second</td></tr>"#
        );
    }

    #[test]
    fn test_alternating_odd_rows() {
        let collection = posts();
        let header = titled_header(&collection);
        let mut body = Body::new();
        body.set_alternate_rows(Some(Parity::Odd));

        let first = body
            .build_row(&collection[0], 0, collection.len(), &header, no_op)
            .unwrap();
        let second = body
            .build_row(&collection[1], 1, collection.len(), &header, no_op)
            .unwrap();

        assert_eq!(
            first,
            r#"<tr class="row"><td class="title">first</td></tr>"#
        );
        assert_eq!(
            second,
            r#"<tr class="row alternate"><td class="title">second</td></tr>"#
        );
    }

    #[test]
    fn test_alternation_adds_class_to_tbody() {
        let collection = posts();
        let header = titled_header(&collection);
        let mut body = Body::new();
        body.set_alternate_rows(Some(Parity::Odd));

        body.build(&collection, &header, no_op).unwrap();

        assert!(body.html().starts_with(r#"<tbody class="alternate">"#));
    }

    #[test]
    fn test_borders_after_skip_last_row() {
        let collection = posts();
        let header = titled_header(&collection);
        let mut body = Body::new();
        body.set_row_borders(Some(BorderPosition::After));

        body.build(&collection, &header, no_op).unwrap();

        let border = r#"<tr class="border"><td><div><!-- --></div></td></tr>"#;
        assert_eq!(
            body.content(),
            format!(
                concat!(
                    r#"<tr class="row"><td class="title">first</td></tr>{border}"#,
                    r#"<tr class="row"><td class="title">second</td></tr>{border}"#,
                    r#"<tr class="row"><td class="title">last</td></tr>"#
                ),
                border = border
            )
        );
    }

    #[test]
    fn test_borders_before_skip_first_row() {
        let collection = posts();
        let header = titled_header(&collection);
        let mut body = Body::new();
        body.set_row_borders(Some(BorderPosition::Before));

        body.build(&collection, &header, no_op).unwrap();

        let border = r#"<tr class="border"><td><div><!-- --></div></td></tr>"#;
        assert_eq!(
            body.content(),
            format!(
                concat!(
                    r#"<tr class="row"><td class="title">first</td></tr>"#,
                    r#"{border}<tr class="row"><td class="title">second</td></tr>"#,
                    r#"{border}<tr class="row"><td class="title">last</td></tr>"#
                ),
                border = border
            )
        );
    }

    #[test]
    fn test_single_row_gets_no_border() {
        let collection = vec![Post::new("only")];
        let header = titled_header(&collection);
        let mut body = Body::new();
        body.set_row_borders(Some(BorderPosition::After));

        body.build(&collection, &header, no_op).unwrap();

        assert_eq!(
            body.content(),
            r#"<tr class="row"><td class="title">only</td></tr>"#
        );
    }
}
