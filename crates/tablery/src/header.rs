//! The table header.

use tablery_html::{AttributeMap, HtmlElement};

use crate::cell::{Cell, ContentType};
use crate::record::Record;
use crate::row::Row;

/// The `<thead>` section, owner of the table's column order.
///
/// The ordered list of column names defined here dictates the cell order of
/// every row in the table. When the element type enumerates its own columns
/// through [`Record::column_names`], the header pre-fills one column per
/// name; the first explicit [`column`](Header::column) call discards those
/// inferred columns and switches to fully caller-defined ones.
///
/// When the collection is empty and [`hide_when_empty`](Header::hide_when_empty)
/// is set (the default), the header renders with `display: none;` instead of
/// being omitted, keeping the table structure stable for scripted reveal.
///
/// # Example
///
/// ```
/// use tablery::Header;
///
/// let posts = vec!["first".to_owned()];
/// let mut header = Header::new(&posts);
/// header.column("title").set_content("The Title");
/// assert_eq!(header.column_names(), vec!["title".to_owned()]);
/// ```
#[derive(Debug, Clone)]
pub struct Header {
    row: Row,
    attributes: AttributeMap,
    hide_when_empty: bool,
    collection_empty: bool,
    customized: bool,
}

impl Header {
    /// Create a header for the collection, pre-filling columns from the
    /// element type when it exposes any.
    #[must_use]
    pub fn new<T: Record>(collection: &[T]) -> Self {
        let mut header = Self {
            row: Row::new(),
            attributes: AttributeMap::new(),
            hide_when_empty: true,
            collection_empty: collection.is_empty(),
            customized: true,
        };

        let inferred = T::column_names();
        if !inferred.is_empty() {
            for name in &inferred {
                header.push_column(name);
            }
            header.customized = false;
        }

        header
    }

    /// Append a column, returning its header cell for customization.
    ///
    /// The cell's caption defaults to the humanized column name and its
    /// `scope` attribute to `col`. The first explicit call after
    /// auto-population clears all inferred columns.
    pub fn column(&mut self, name: &str) -> &mut Cell {
        if !self.customized {
            self.customized = true;
            self.row.clear();
        }
        self.push_column(name)
    }

    fn push_column(&mut self, name: &str) -> &mut Cell {
        let cell = self.row.cell(name);
        cell.set_content_type(ContentType::Header);
        if !cell.attributes().contains("scope") {
            cell.set_attr("scope", "col");
        }
        cell
    }

    /// The ordered column names used by every row in the table.
    #[must_use]
    pub fn column_names(&self) -> Vec<String> {
        self.row
            .cell_names()
            .into_iter()
            .map(str::to_owned)
            .collect()
    }

    /// Number of defined columns.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.row.cell_names().len()
    }

    /// The cell for a column, if defined.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Cell> {
        self.row.get(name)
    }

    /// Mutable access to a column's cell, if defined.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Cell> {
        self.row.get_mut(name)
    }

    /// Remove all columns.
    pub fn clear(&mut self) {
        self.customized = true;
        self.row.clear();
    }

    /// The header row.
    #[must_use]
    pub fn row(&self) -> &Row {
        &self.row
    }

    /// Mutable access to the header row.
    pub fn row_mut(&mut self) -> &mut Row {
        &mut self.row
    }

    /// Whether the header hides itself when the collection is empty.
    #[must_use]
    pub fn hide_when_empty(&self) -> bool {
        self.hide_when_empty
    }

    /// Set whether the header hides itself when the collection is empty.
    pub fn set_hide_when_empty(&mut self, hide: bool) {
        self.hide_when_empty = hide;
    }
}

impl HtmlElement for Header {
    fn tag_name(&self) -> &str {
        "thead"
    }

    fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut AttributeMap {
        &mut self.attributes
    }

    fn write_content(&self, out: &mut String) {
        out.push_str(&self.row.html());
    }

    fn html(&self) -> String {
        if self.collection_empty && self.hide_when_empty {
            let mut attrs = self.attributes.clone();
            attrs.insert("style", "display: none;");
            self.html_with_attributes(&attrs)
        } else {
            self.html_with_attributes(&self.attributes)
        }
    }
}
