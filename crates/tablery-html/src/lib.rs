//! Low-level HTML rendering primitives for tablery.
//!
//! This crate provides the building blocks used by the table object model:
//!
//! - [`escape_html`]: entity escaping for text and attribute values
//! - [`Content`]: element content that is either plain text (escaped on
//!   render) or raw, pre-escaped markup
//! - [`ClassList`]: an ordered, de-duplicated set of CSS class names
//! - [`AttributeMap`]: an attribute map with canonical keys and append
//!   semantics for `class`
//! - [`HtmlElement`]: the rendering contract shared by every element
//! - [`humanize`]: `author_name` → `Author Name` caption derivation
//!
//! # Example
//!
//! ```
//! use tablery_html::{AttributeMap, HtmlElement};
//!
//! struct Div(AttributeMap);
//!
//! impl HtmlElement for Div {
//!     fn tag_name(&self) -> &str {
//!         "div"
//!     }
//!
//!     fn attributes(&self) -> &AttributeMap {
//!         &self.0
//!     }
//!
//!     fn attributes_mut(&mut self) -> &mut AttributeMap {
//!         &mut self.0
//!     }
//!
//!     fn write_content(&self, out: &mut String) {
//!         out.push_str("hello world");
//!     }
//! }
//!
//! let mut div = Div(AttributeMap::new());
//! div.attributes_mut().insert("class", "fancy");
//! assert_eq!(div.html(), r#"<div class="fancy">hello world</div>"#);
//! ```

mod attributes;
mod class_list;
mod content;
mod element;
mod escape;
mod util;

pub use attributes::AttributeMap;
pub use class_list::ClassList;
pub use content::Content;
pub use element::{HtmlElement, content_tag};
pub use escape::escape_html;
pub use util::humanize;
