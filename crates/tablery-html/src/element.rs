//! The rendering contract shared by every table element.

use crate::attributes::AttributeMap;

/// An HTML element that renders as `<tag attrs>content</tag>`.
///
/// Implementors supply a tag name, an attribute map, and content; the
/// provided [`html`](HtmlElement::html) method assembles the markup.
/// Elements that adjust attributes at render time (hidden sections,
/// alternating rows) override `html` and delegate to
/// [`html_with_attributes`](HtmlElement::html_with_attributes) with a
/// modified copy, leaving the stored map untouched.
///
/// An empty tag name renders as `<></>`; every concrete element in the
/// table model has a fixed tag.
pub trait HtmlElement {
    /// The element's tag name, without brackets.
    fn tag_name(&self) -> &str;

    /// The element's attribute map.
    fn attributes(&self) -> &AttributeMap;

    /// Mutable access to the element's attribute map.
    fn attributes_mut(&mut self) -> &mut AttributeMap;

    /// Append the element's inner content to `out`.
    fn write_content(&self, out: &mut String);

    /// Render the element with its stored attributes.
    fn html(&self) -> String {
        self.html_with_attributes(self.attributes())
    }

    /// Render the element using `attrs` in place of the stored map.
    fn html_with_attributes(&self, attrs: &AttributeMap) -> String {
        let mut out = String::new();
        out.push('<');
        out.push_str(self.tag_name());
        attrs.render(&mut out);
        out.push('>');
        self.write_content(&mut out);
        out.push_str("</");
        out.push_str(self.tag_name());
        out.push('>');
        out
    }
}

/// Wrap already-rendered content in a tag with the given attributes.
///
/// # Example
///
/// ```
/// use tablery_html::{AttributeMap, content_tag};
///
/// let mut attrs = AttributeMap::new();
/// attrs.insert("class", "border");
/// assert_eq!(
///     content_tag("tr", "<td></td>", &attrs),
///     r#"<tr class="border"><td></td></tr>"#
/// );
/// ```
#[must_use]
pub fn content_tag(tag: &str, content: &str, attrs: &AttributeMap) -> String {
    let mut out = String::new();
    out.push('<');
    out.push_str(tag);
    attrs.render(&mut out);
    out.push('>');
    out.push_str(content);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
    out
}
