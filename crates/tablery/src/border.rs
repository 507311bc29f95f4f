//! Border rows.

use tablery_html::{AttributeMap, Content, HtmlElement};

use crate::cell::Cell;

/// An auxiliary row injected adjacent to a data row for visual separation.
///
/// Some renderers cannot style row borders through CSS alone, so a border is
/// a real `<tr class="border">` with a single full-width cell. The cell wraps
/// an HTML comment marker so renderers that collapse empty cells still show
/// the row. When the table has more than one column and no explicit colspan
/// is set, the cell spans the full column count.
///
/// # Example
///
/// ```
/// use tablery::Border;
/// use tablery_html::HtmlElement;
///
/// let border = Border::new(2);
/// assert_eq!(
///     border.html(),
///     r#"<tr class="border"><td colspan="2"><div><!-- --></div></td></tr>"#
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Border {
    cell: Cell,
    attributes: AttributeMap,
    column_count: usize,
}

impl Border {
    /// Create a border spanning `column_count` columns.
    #[must_use]
    pub fn new(column_count: usize) -> Self {
        let mut attributes = AttributeMap::new();
        attributes.insert("class", "border");
        Self {
            cell: Cell::anonymous(Content::raw("<div><!-- --></div>")),
            attributes,
            column_count,
        }
    }

    /// The cell rendered inside the border row.
    #[must_use]
    pub fn cell(&self) -> &Cell {
        &self.cell
    }

    /// Mutable access to the border's cell.
    pub fn cell_mut(&mut self) -> &mut Cell {
        &mut self.cell
    }
}

impl HtmlElement for Border {
    fn tag_name(&self) -> &str {
        "tr"
    }

    fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut AttributeMap {
        &mut self.attributes
    }

    fn write_content(&self, out: &mut String) {
        if self.column_count > 1 && self.cell.colspan().is_none() {
            let mut cell = self.cell.clone();
            cell.set_colspan(self.column_count);
            out.push_str(&cell.html());
        } else {
            out.push_str(&self.cell.html());
        }
    }
}
