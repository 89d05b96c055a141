//! Generated content.
//! Spec: <https://www.w3.org/TR/css-content-3/>

/// One item of a `content` list.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ContentItem {
    Text(String),
    Url(String),
    Attr(String),
    Counter(String),
    OpenQuote,
    CloseQuote,
}

/// Computed `content`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ContentData {
    #[default]
    Normal,
    None,
    Items(Vec<ContentItem>),
}

impl ContentData {
    /// True when the value generates something (a non-empty item list).
    #[inline]
    #[must_use]
    pub fn has_content(&self) -> bool {
        matches!(self, Self::Items(items) if !items.is_empty())
    }
}

/// Computed `quotes`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Quotes {
    #[default]
    Auto,
    None,
    Pairs(Vec<(String, String)>),
}
