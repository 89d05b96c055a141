//! Box generation and positioning keywords.
//! Spec: <https://www.w3.org/TR/css-display-3/>
//! Spec: <https://www.w3.org/TR/css-position-3/>

/// Computed `display`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Display {
    #[default]
    Inline,
    Block,
    InlineBlock,
    ListItem,
    FlowRoot,
    Flex,
    InlineFlex,
    Grid,
    InlineGrid,
    Table,
    InlineTable,
    TableRowGroup,
    TableHeaderGroup,
    TableFooterGroup,
    TableRow,
    TableColumnGroup,
    TableColumn,
    TableCell,
    TableCaption,
    Ruby,
    RubyBase,
    RubyText,
    Contents,
    None,
}

impl Display {
    /// Display types whose outer display type is `inline`.
    #[inline]
    #[must_use]
    pub const fn is_inline_type(self) -> bool {
        matches!(
            self,
            Self::Inline
                | Self::InlineBlock
                | Self::InlineFlex
                | Self::InlineGrid
                | Self::InlineTable
                | Self::Ruby
                | Self::RubyBase
        )
    }

    #[inline]
    #[must_use]
    pub const fn generates_box(self) -> bool {
        !matches!(self, Self::None | Self::Contents)
    }
}

/// Computed `position`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Position {
    #[default]
    Static,
    Relative,
    Absolute,
    Fixed,
    Sticky,
}

impl Position {
    /// Absolutely positioned boxes are taken out of flow.
    #[inline]
    #[must_use]
    pub const fn is_out_of_flow(self) -> bool {
        matches!(self, Self::Absolute | Self::Fixed)
    }

    #[inline]
    #[must_use]
    pub const fn is_static(self) -> bool {
        matches!(self, Self::Static)
    }
}

/// Computed `float`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Float {
    #[default]
    None,
    Left,
    Right,
    InlineStart,
    InlineEnd,
}

/// Computed `clear`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Clear {
    #[default]
    None,
    Left,
    Right,
    InlineStart,
    InlineEnd,
    Both,
}

/// Computed `overflow-x` / `overflow-y`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Overflow {
    #[default]
    Visible,
    Hidden,
    Clip,
    Scroll,
    Auto,
}

/// Computed `unicode-bidi`.
/// Spec: <https://www.w3.org/TR/css-writing-modes-3/#unicode-bidi>
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum UnicodeBidi {
    #[default]
    Normal,
    Embed,
    Isolate,
    BidiOverride,
    IsolateOverride,
    Plaintext,
}

/// Computed `visibility`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
    Collapse,
}

/// Computed `z-index`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ZIndex {
    #[default]
    Auto,
    Integer(i32),
}

impl ZIndex {
    /// Stacking order value, `auto` counting as zero.
    #[inline]
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            Self::Auto => 0,
            Self::Integer(value) => value,
        }
    }
}
