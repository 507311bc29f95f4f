//! Table rows.

use indexmap::{IndexMap, IndexSet};
use tablery_html::{AttributeMap, Content, HtmlElement};

use crate::cell::Cell;
use crate::error::Error;

/// A single `<tr>` holding an ordered mapping of column name to [`Cell`].
///
/// Re-adding a column name replaces the cell but keeps its original position.
/// Column names become *registered* on first use; [`set`](Row::set) and
/// [`get`](Row::get) only accept registered names, which is the typed
/// replacement for the dynamic per-column accessors of looser view layers.
///
/// # Example
///
/// ```
/// use tablery::Row;
/// use tablery_html::HtmlElement;
///
/// let mut row = Row::new();
/// row.cell("name");
/// assert_eq!(row.html(), r#"<tr><td class="name">Name</td></tr>"#);
///
/// row.set("name", "John Doe").unwrap();
/// assert_eq!(row.html(), r#"<tr><td class="name">John Doe</td></tr>"#);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Row {
    cells: IndexMap<String, Cell>,
    registered: IndexSet<String>,
    attributes: AttributeMap,
}

impl Row {
    /// Create an empty row.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cell for the named column, replacing any existing cell at
    /// its original position, and register the name.
    pub fn cell(&mut self, name: &str) -> &mut Cell {
        self.register(name);
        self.cells.insert(name.to_owned(), Cell::new(name));
        &mut self.cells[name]
    }

    /// Register a column name without creating a cell.
    ///
    /// Registered names may be written through [`set`](Row::set); columns
    /// that stay cell-less render as empty placeholders when the row is
    /// rendered against a column list.
    pub fn register(&mut self, name: &str) {
        self.registered.insert(name.to_owned());
    }

    /// True if the column name has been registered.
    #[must_use]
    pub fn is_registered(&self, name: &str) -> bool {
        self.registered.contains(name)
    }

    /// The cell for a registered column, if one has been created.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Cell> {
        self.cells.get(name)
    }

    /// Mutable access to the cell for a column, if one has been created.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Cell> {
        self.cells.get_mut(name)
    }

    /// Replace the named cell with a fresh one holding `content`.
    ///
    /// Fails with [`Error::UnknownColumn`] when the name was never
    /// registered on this row.
    pub fn set(&mut self, name: &str, content: impl Into<Content>) -> Result<&mut Cell, Error> {
        if !self.is_registered(name) {
            return Err(Error::UnknownColumn {
                name: name.to_owned(),
            });
        }
        let cell = self.cell(name);
        cell.set_content(content);
        Ok(cell)
    }

    /// The names of all cells, in insertion order.
    #[must_use]
    pub fn cell_names(&self) -> Vec<&str> {
        self.cells.keys().map(String::as_str).collect()
    }

    /// True if the row has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Remove all cells and registered names.
    pub fn clear(&mut self) {
        self.cells.clear();
        self.registered.clear();
    }

    /// Append the rendered cells to `out`.
    ///
    /// With a column list, cells render in column order; a column with no
    /// cell renders as an empty placeholder, and a cell with a `colspan` of
    /// n skips the following n-1 column slots. Without a column list, cells
    /// render in insertion order.
    pub fn write_cells(&self, columns: Option<&[String]>, out: &mut String) {
        match columns {
            Some(columns) => {
                let mut skip = 0_usize;
                for name in columns {
                    if skip > 0 {
                        skip -= 1;
                        continue;
                    }
                    if let Some(cell) = self.cells.get(name) {
                        skip = cell.colspan().unwrap_or(1).saturating_sub(1);
                        out.push_str(&cell.html());
                    } else {
                        out.push_str(&Cell::empty_placeholder(name).html());
                    }
                }
            }
            None => {
                for cell in self.cells.values() {
                    out.push_str(&cell.html());
                }
            }
        }
    }
}

impl HtmlElement for Row {
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
        self.write_cells(None, out);
    }
}
