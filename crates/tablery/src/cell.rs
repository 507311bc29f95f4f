//! Table cells.

use std::fmt;
use std::str::FromStr;

use tablery_html::{AttributeMap, Content, HtmlElement, humanize};

use crate::error::Error;

/// Whether a cell renders as a data cell (`td`) or a header cell (`th`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ContentType {
    /// A `<td>` cell.
    #[default]
    Data,
    /// A `<th>` cell.
    Header,
}

impl FromStr for ContentType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "data" => Ok(Self::Data),
            "header" => Ok(Self::Header),
            other => Err(Error::InvalidContentType {
                value: other.to_owned(),
            }),
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Data => "data",
            Self::Header => "header",
        })
    }
}

/// A single cell within a table row.
///
/// Cells created for a named column seed their class list with the column
/// name; caller-supplied classes append after it. Content defaults to the
/// humanized column name.
///
/// # Example
///
/// ```
/// use tablery::Cell;
/// use tablery_html::HtmlElement;
///
/// let mut cell = Cell::new("author_name");
/// assert_eq!(cell.html(), r#"<td class="author_name">Author Name</td>"#);
///
/// cell.set_content("John Doe").add_class("selected");
/// assert_eq!(
///     cell.html(),
///     r#"<td class="author_name selected">John Doe</td>"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    content_type: ContentType,
    content: Content,
    attributes: AttributeMap,
}

impl Cell {
    /// Create a data cell for the named column.
    ///
    /// The class list is seeded with the column name and the content defaults
    /// to the humanized name.
    #[must_use]
    pub fn new(name: &str) -> Self {
        let mut attributes = AttributeMap::new();
        attributes.insert("class", name);
        Self {
            content_type: ContentType::Data,
            content: Content::from(humanize(name)),
            attributes,
        }
    }

    /// Create a data cell with no column name and no seeded class.
    ///
    /// Used for cells that do not belong to a column, such as border markers
    /// and no-content captions.
    #[must_use]
    pub fn anonymous(content: impl Into<Content>) -> Self {
        Self {
            content_type: ContentType::Data,
            content: content.into(),
            attributes: AttributeMap::new(),
        }
    }

    /// Create the placeholder rendered for a column with no cell in a row.
    #[must_use]
    pub fn empty_placeholder(name: &str) -> Self {
        let mut cell = Self::anonymous(Content::default());
        cell.attributes.insert("class", name);
        cell.attributes.insert("class", "empty");
        cell
    }

    /// Set the cell content.
    pub fn set_content(&mut self, content: impl Into<Content>) -> &mut Self {
        self.content = content.into();
        self
    }

    /// The cell content.
    #[must_use]
    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Set whether this is a data or header cell.
    pub fn set_content_type(&mut self, content_type: ContentType) -> &mut Self {
        self.content_type = content_type;
        self
    }

    /// Whether this is a data or header cell.
    #[must_use]
    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    /// Append a class to the cell's class list.
    pub fn add_class(&mut self, class: &str) -> &mut Self {
        self.attributes.insert("class", class);
        self
    }

    /// Set an HTML attribute on the cell.
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) -> &mut Self {
        self.attributes.insert(name, value);
        self
    }

    /// The number of column slots this cell spans, if a valid `colspan`
    /// attribute is set.
    #[must_use]
    pub fn colspan(&self) -> Option<usize> {
        self.attributes
            .get("colspan")
            .and_then(|value| value.parse().ok())
    }

    /// Set the `colspan` attribute.
    pub fn set_colspan(&mut self, colspan: usize) -> &mut Self {
        self.attributes.insert("colspan", colspan.to_string());
        self
    }
}

impl HtmlElement for Cell {
    fn tag_name(&self) -> &str {
        match self.content_type {
            ContentType::Data => "td",
            ContentType::Header => "th",
        }
    }

    fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut AttributeMap {
        &mut self.attributes
    }

    fn write_content(&self, out: &mut String) {
        self.content.write_html(out);
    }
}
