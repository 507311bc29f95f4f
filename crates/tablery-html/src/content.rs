//! Element content with a safe-markup distinction.

use crate::escape::escape_html;

/// Content placed inside an element.
///
/// Plain text is escaped when rendered; raw content is trusted markup that
/// passes through unchanged. This mirrors the "safe string" convention of
/// host view layers: anything arriving as a plain string gets escaped,
/// anything explicitly marked raw does not.
///
/// # Example
///
/// ```
/// use tablery_html::Content;
///
/// let text = Content::from("<a&b>");
/// assert_eq!(text.to_html(), "&lt;a&amp;b&gt;");
///
/// let markup = Content::raw("<b>ok!</b>");
/// assert_eq!(markup.to_html(), "<b>ok!</b>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// Plain text, escaped on render.
    Text(String),
    /// Pre-escaped markup, rendered verbatim.
    Raw(String),
}

impl Content {
    /// Create raw content that will not be escaped on render.
    #[must_use]
    pub fn raw(markup: impl Into<String>) -> Self {
        Self::Raw(markup.into())
    }

    /// True if the underlying string is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) | Self::Raw(s) => s.is_empty(),
        }
    }

    /// Render the content, escaping text variants.
    #[must_use]
    pub fn to_html(&self) -> String {
        match self {
            Self::Text(s) => escape_html(s),
            Self::Raw(s) => s.clone(),
        }
    }

    /// Append the rendered content to `out`.
    pub fn write_html(&self, out: &mut String) {
        match self {
            Self::Text(s) => out.push_str(&escape_html(s)),
            Self::Raw(s) => out.push_str(s),
        }
    }
}

impl Default for Content {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<&str> for Content {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for Content {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&String> for Content {
    fn from(s: &String) -> Self {
        Self::Text(s.clone())
    }
}

macro_rules! content_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Content {
                fn from(n: $ty) -> Self {
                    Self::Text(n.to_string())
                }
            }
        )*
    };
}

content_from_integer!(u32, u64, usize, i32, i64, isize);
