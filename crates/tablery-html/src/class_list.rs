//! Ordered CSS class lists.

/// An ordered, de-duplicated set of CSS class names.
///
/// Class attributes in the table model are append-only: a generated class
/// (such as a cell's column name) and caller-supplied classes merge rather
/// than replace each other. This type makes that merge explicit instead of
/// relying on string concatenation.
///
/// # Example
///
/// ```
/// use tablery_html::ClassList;
///
/// let mut classes = ClassList::new();
/// classes.push("selected");
/// classes.prepend("name");
/// classes.push("selected");
/// assert_eq!(classes.to_attribute(), "name selected");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    names: Vec<String>,
}

impl ClassList {
    /// Create an empty class list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append class names, ignoring duplicates and empty strings.
    ///
    /// Whitespace-separated input is split into individual names, so
    /// `push("name selected")` adds two classes.
    pub fn push(&mut self, classes: &str) {
        for name in classes.split_whitespace() {
            if !self.contains(name) {
                self.names.push(name.to_owned());
            }
        }
    }

    /// Prepend class names, ignoring ones already present.
    pub fn prepend(&mut self, classes: &str) {
        for name in classes.split_whitespace().rev() {
            if !self.contains(name) {
                self.names.insert(0, name.to_owned());
            }
        }
    }

    /// Remove a class name if present.
    pub fn remove(&mut self, name: &str) {
        self.names.retain(|existing| existing != name);
    }

    /// True if the list contains `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|existing| existing == name)
    }

    /// True if no classes are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Number of classes in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Iterate over the class names in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Space-joined attribute value.
    #[must_use]
    pub fn to_attribute(&self) -> String {
        self.names.join(" ")
    }
}
