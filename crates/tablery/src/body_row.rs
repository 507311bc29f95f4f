//! Rows within the table body.

use tablery_html::{AttributeMap, Content, HtmlElement};

use crate::border::Border;
use crate::cell::Cell;
use crate::error::Error;
use crate::header::Header;
use crate::options::BorderPosition;
use crate::record::Record;
use crate::row::Row;

/// A single data row in the table body, bound to one collection element.
///
/// On construction, every header column is pre-populated from the element's
/// matching attribute via [`Record::value`]; columns with no value are only
/// registered, so they render as empty placeholders unless the per-row
/// callback sets them. Cells always render in the header's column order.
///
/// The `alternate` flag appends the `alternate` class at render time without
/// permanently mutating the row's attributes, and
/// [`set_border_position`](BodyRow::set_border_position) renders the row's
/// [`Border`] immediately before or after it.
///
/// # Example
///
/// ```
/// use tablery::{BodyRow, Header, Record};
///
/// struct Post;
/// impl Record for Post {
///     fn column_names() -> Vec<String> {
///         vec!["title".to_owned()]
///     }
/// }
///
/// let posts = vec![Post];
/// let header = Header::new(&posts);
/// let mut row = BodyRow::new(&posts[0], &header);
/// row.set("title", "Hello").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct BodyRow {
    row: Row,
    columns: Vec<String>,
    border: Border,
    border_position: Option<BorderPosition>,
    alternate: bool,
}

impl BodyRow {
    /// Create a row for one collection element, pre-populating cells from
    /// the element's attributes.
    #[must_use]
    pub fn new<T: Record>(record: &T, header: &Header) -> Self {
        let columns = header.column_names();
        let mut row = Row::new();
        row.attributes_mut().classes_mut().prepend("row");

        for column in &columns {
            if let Some(value) = record.value(column) {
                row.cell(column).set_content(value);
            } else {
                row.register(column);
            }
        }

        Self {
            row,
            border: Border::new(header.column_count()),
            columns,
            border_position: None,
            alternate: false,
        }
    }

    /// Replace the named cell's content.
    ///
    /// Only header columns and explicitly created cells are valid names;
    /// anything else fails with [`Error::UnknownColumn`].
    pub fn set(&mut self, name: &str, content: impl Into<Content>) -> Result<&mut Cell, Error> {
        self.row.set(name, content)
    }

    /// The cell for a column, if one has been created.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Cell> {
        self.row.get(name)
    }

    /// Mutable access to a column's cell, if one has been created.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Cell> {
        self.row.get_mut(name)
    }

    /// Create a cell outside the header's columns.
    ///
    /// The cell only renders when its name is in the header's column list,
    /// but it registers the name for later [`set`](BodyRow::set) calls.
    pub fn cell(&mut self, name: &str) -> &mut Cell {
        self.row.cell(name)
    }

    /// The underlying row.
    #[must_use]
    pub fn row(&self) -> &Row {
        &self.row
    }

    /// Mutable access to the underlying row.
    pub fn row_mut(&mut self) -> &mut Row {
        &mut self.row
    }

    /// True if this row renders with the `alternate` class.
    #[must_use]
    pub fn alternate(&self) -> bool {
        self.alternate
    }

    /// Mark this row as an alternating row.
    pub fn set_alternate(&mut self, alternate: bool) {
        self.alternate = alternate;
    }

    /// Where this row's border renders, if anywhere.
    #[must_use]
    pub fn border_position(&self) -> Option<BorderPosition> {
        self.border_position
    }

    /// Set where this row's border renders.
    pub fn set_border_position(&mut self, position: Option<BorderPosition>) {
        self.border_position = position;
    }

    /// The border row rendered adjacent to this row.
    #[must_use]
    pub fn border(&self) -> &Border {
        &self.border
    }

    /// Mutable access to the border row.
    pub fn border_mut(&mut self) -> &mut Border {
        &mut self.border
    }
}

impl HtmlElement for BodyRow {
    fn tag_name(&self) -> &str {
        "tr"
    }

    fn attributes(&self) -> &AttributeMap {
        self.row.attributes()
    }

    fn attributes_mut(&mut self) -> &mut AttributeMap {
        self.row.attributes_mut()
    }

    fn write_content(&self, out: &mut String) {
        self.row.write_cells(Some(&self.columns), out);
    }

    fn html(&self) -> String {
        let row_html = if self.alternate {
            let mut attrs = self.row.attributes().clone();
            attrs.insert("class", "alternate");
            self.html_with_attributes(&attrs)
        } else {
            self.html_with_attributes(self.row.attributes())
        };

        match self.border_position {
            Some(BorderPosition::Before) => format!("{}{row_html}", self.border.html()),
            Some(BorderPosition::After) => format!("{row_html}{}", self.border.html()),
            None => row_html,
        }
    }
}
