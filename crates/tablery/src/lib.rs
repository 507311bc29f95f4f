//! Fluent HTML table builder for rendering object collections.
//!
//! This crate builds `<table>` markup from an ordered collection of objects:
//! a [`Header`] owning the column order, a [`Body`] with one row per
//! element, and an optional [`Footer`], composed by [`CollectionTable`].
//! Column inference comes from the [`Record`] trait, alternating rows and
//! border rows are configured on the body, and everything renders through
//! the [`HtmlElement`](tablery_html::HtmlElement) contract from
//! `tablery-html`.
//!
//! The library performs no I/O and keeps no state across renders: each
//! table is a write-once builder consumed by a single synchronous build.
//!
//! # Example
//!
//! ```
//! use tablery::{Record, collection_table};
//! use tablery_html::Content;
//!
//! struct Post {
//!     title: String,
//!     author: String,
//! }
//!
//! impl Record for Post {
//!     fn column_names() -> Vec<String> {
//!         vec!["title".to_owned(), "author_name".to_owned()]
//!     }
//!
//!     fn value(&self, column: &str) -> Option<Content> {
//!         match column {
//!             "title" => Some(Content::from(self.title.as_str())),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let posts = vec![Post {
//!     title: "Getting some REST".to_owned(),
//!     author: "John Doe".to_owned(),
//! }];
//!
//! let mut table = collection_table(&posts);
//! let html = table
//!     .build_with(|row, post, _index| {
//!         row.set("author_name", post.author.as_str())?;
//!         Ok(())
//!     })
//!     .unwrap();
//!
//! assert!(html.contains(r#"<td class="author_name">John Doe</td>"#));
//! ```
//!
//! # Safe markup
//!
//! Plain strings are escaped when rendered; trusted fragments pass through
//! [`Content::raw`](tablery_html::Content::raw) unchanged. There is no
//! global registration into a host view layer: [`collection_table`] is a
//! plain function to call from wherever markup is assembled.

mod body;
mod body_row;
mod border;
mod cell;
mod error;
mod footer;
mod header;
mod options;
mod record;
mod row;
mod table;

pub use body::Body;
pub use body_row::BodyRow;
pub use border::Border;
pub use cell::{Cell, ContentType};
pub use error::Error;
pub use footer::Footer;
pub use header::Header;
pub use options::{BorderPosition, Parity, TableOptions};
pub use record::Record;
pub use row::Row;
pub use table::CollectionTable;

/// Create a [`CollectionTable`] for a collection with default options.
///
/// Equivalent to [`CollectionTable::new`]; this is the conventional entry
/// point for view code.
#[must_use]
pub fn collection_table<T: Record>(collection: &[T]) -> CollectionTable<'_, T> {
    CollectionTable::new(collection)
}
