//! HTML attribute maps.

use std::collections::BTreeMap;

use crate::class_list::ClassList;
use crate::escape::escape_html;

/// An HTML attribute map with canonical keys.
///
/// Keys are normalized to trimmed, lowercase ASCII. The `class` attribute is
/// special-cased: it is backed by a [`ClassList`] and inserting it *appends*
/// to the existing classes instead of replacing them, matching the CSS class
/// merge semantics of the table model. Every other attribute replaces on
/// insert.
///
/// Rendering emits attributes sorted by name with escaped values, so output
/// is deterministic.
///
/// # Example
///
/// ```
/// use tablery_html::AttributeMap;
///
/// let mut attrs = AttributeMap::new();
/// attrs.insert("class", "name");
/// attrs.insert("class", "selected");
/// attrs.insert("Scope", "col");
/// assert_eq!(attrs.get("class").as_deref(), Some("name selected"));
/// assert_eq!(attrs.get("scope").as_deref(), Some("col"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeMap {
    classes: ClassList,
    values: BTreeMap<String, String>,
}

impl AttributeMap {
    /// Create an empty attribute map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get an attribute value by name.
    ///
    /// `class` returns the space-joined class list; `None` when no classes
    /// are set. Other attributes return their stored value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<String> {
        let key = canonical_key(name);
        if key == "class" {
            if self.classes.is_empty() {
                None
            } else {
                Some(self.classes.to_attribute())
            }
        } else {
            self.values.get(&key).cloned()
        }
    }

    /// Set an attribute.
    ///
    /// `class` appends to the class list; other attributes replace any
    /// existing value.
    pub fn insert(&mut self, name: &str, value: impl Into<String>) {
        let key = canonical_key(name);
        let value = value.into();
        if key == "class" {
            self.classes.push(&value);
        } else {
            self.values.insert(key, value);
        }
    }

    /// Remove an attribute, returning the previous value.
    ///
    /// Removing `class` clears the whole class list.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let key = canonical_key(name);
        if key == "class" {
            let previous = self.get("class");
            self.classes = ClassList::new();
            previous
        } else {
            self.values.remove(&key)
        }
    }

    /// True if the attribute is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// True if no attributes are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.values.is_empty()
    }

    /// The class list backing the `class` attribute.
    #[must_use]
    pub fn classes(&self) -> &ClassList {
        &self.classes
    }

    /// Mutable access to the class list.
    pub fn classes_mut(&mut self) -> &mut ClassList {
        &mut self.classes
    }

    /// Append the rendered attributes to `out`.
    ///
    /// Each attribute is emitted as ` name="value"` with the value escaped,
    /// sorted by attribute name. Nothing is emitted for an empty map.
    pub fn render(&self, out: &mut String) {
        let class_value = if self.classes.is_empty() {
            None
        } else {
            Some(self.classes.to_attribute())
        };

        let mut entries: Vec<(&str, &str)> = self
            .values
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        if let Some(value) = &class_value {
            entries.push(("class", value));
        }
        entries.sort_unstable_by_key(|(name, _)| *name);

        for (name, value) in entries {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_html(value));
            out.push('"');
        }
    }
}

fn canonical_key(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}
