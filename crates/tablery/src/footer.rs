//! The table footer.

use tablery_html::{AttributeMap, HtmlElement};

use crate::cell::Cell;
use crate::row::Row;

/// The `<tfoot>` section: a single summary row.
///
/// Like the header, the footer hides itself with `display: none;` when the
/// collection is empty and [`hide_when_empty`](Footer::hide_when_empty) is
/// set (the default).
///
/// # Example
///
/// ```
/// use tablery::Footer;
/// use tablery_html::HtmlElement;
///
/// let totals = vec![1, 2, 3];
/// let mut footer = Footer::new(&totals);
/// footer.cell("total").set_content(20_usize);
/// assert_eq!(
///     footer.html(),
///     r#"<tfoot><tr><td class="total">20</td></tr></tfoot>"#
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Footer {
    row: Row,
    attributes: AttributeMap,
    hide_when_empty: bool,
    collection_empty: bool,
}

impl Footer {
    /// Create a footer for the collection.
    #[must_use]
    pub fn new<T>(collection: &[T]) -> Self {
        Self {
            row: Row::new(),
            attributes: AttributeMap::new(),
            hide_when_empty: true,
            collection_empty: collection.is_empty(),
        }
    }

    /// Create a cell in the footer row.
    pub fn cell(&mut self, name: &str) -> &mut Cell {
        self.row.cell(name)
    }

    /// The footer row.
    #[must_use]
    pub fn row(&self) -> &Row {
        &self.row
    }

    /// Mutable access to the footer row.
    pub fn row_mut(&mut self) -> &mut Row {
        &mut self.row
    }

    /// Whether the footer hides itself when the collection is empty.
    #[must_use]
    pub fn hide_when_empty(&self) -> bool {
        self.hide_when_empty
    }

    /// Set whether the footer hides itself when the collection is empty.
    pub fn set_hide_when_empty(&mut self, hide: bool) {
        self.hide_when_empty = hide;
    }
}

impl HtmlElement for Footer {
    fn tag_name(&self) -> &str {
        "tfoot"
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
