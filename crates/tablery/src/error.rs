//! Error types for table construction.

/// Error raised while configuring or building a table.
///
/// All variants are programmer-misuse validation errors raised synchronously;
/// nothing is retried or recovered internally, and a failed validation aborts
/// the render.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A content type outside `data` / `header`.
    #[error("content type must be `data` or `header`, was: {value:?}")]
    InvalidContentType {
        /// The rejected value.
        value: String,
    },

    /// An alternate-rows parity outside `odd` / `even`.
    #[error("alternate rows must be `odd` or `even`, was: {value:?}")]
    InvalidParity {
        /// The rejected value.
        value: String,
    },

    /// A border placement outside `before` / `after`.
    #[error("row border must be `before` or `after`, was: {value:?}")]
    InvalidBorderPosition {
        /// The rejected value.
        value: String,
    },

    /// A cell access through a column name that was never registered on the
    /// row.
    #[error("unknown column: {name:?}")]
    UnknownColumn {
        /// The unregistered column name.
        name: String,
    },
}
