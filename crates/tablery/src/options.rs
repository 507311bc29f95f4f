//! Table configuration options.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Which sections a [`CollectionTable`](crate::CollectionTable) renders.
///
/// The body is always rendered; the header defaults to on and the footer to
/// off. With the `serde` feature enabled, unknown keys are rejected when
/// deserializing, so a typo in a configuration file fails instead of being
/// silently ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct TableOptions {
    /// Render the `<thead>` section. Default is `true`.
    pub header: bool,
    /// Render the `<tfoot>` section. Default is `false`.
    pub footer: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            header: true,
            footer: false,
        }
    }
}

/// Index parity selecting which rows alternate.
///
/// Row indexes are 0-based: with [`Parity::Even`], rows 0, 2, 4, … receive
/// the `alternate` class; with [`Parity::Odd`], rows 1, 3, 5, ….
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Parity {
    /// Rows with odd 0-based indexes alternate.
    Odd,
    /// Rows with even 0-based indexes alternate.
    Even,
}

impl Parity {
    /// True if a row at `index` alternates under this parity.
    #[must_use]
    pub fn matches(self, index: usize) -> bool {
        match self {
            Self::Odd => index % 2 == 1,
            Self::Even => index % 2 == 0,
        }
    }
}

impl FromStr for Parity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "odd" => Ok(Self::Odd),
            "even" => Ok(Self::Even),
            other => Err(Error::InvalidParity {
                value: other.to_owned(),
            }),
        }
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Odd => "odd",
            Self::Even => "even",
        })
    }
}

/// Where a border row is emitted relative to its data row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BorderPosition {
    /// Border row immediately before the data row.
    Before,
    /// Border row immediately after the data row.
    After,
}

impl FromStr for BorderPosition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "before" => Ok(Self::Before),
            "after" => Ok(Self::After),
            other => Err(Error::InvalidBorderPosition {
                value: other.to_owned(),
            }),
        }
    }
}

impl fmt::Display for BorderPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Before => "before",
            Self::After => "after",
        })
    }
}
