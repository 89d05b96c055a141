//! Multi-column layout keywords.
//! Spec: <https://www.w3.org/TR/css-multicol-1/>

/// Computed `column-span`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColumnSpan {
    #[default]
    None,
    All,
}

/// Computed `column-fill`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColumnFill {
    Auto,
    #[default]
    Balance,
}

/// Direction columns are laid out in; `auto` follows the inline axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColumnAxis {
    Horizontal,
    Vertical,
    #[default]
    Auto,
}

/// Whether columns progress along or against the column axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColumnProgression {
    #[default]
    Normal,
    Reverse,
}

/// How a paginated view splits the document into pages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PaginationMode {
    #[default]
    Unpaginated,
    LeftToRight,
    RightToLeft,
    TopToBottom,
    BottomToTop,
}
