//! Text, writing-mode and line-breaking keywords.
//! Spec: <https://www.w3.org/TR/css-text-3/>
//! Spec: <https://www.w3.org/TR/css-writing-modes-3/>

use bitflags::bitflags;

/// Computed `direction`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

/// Computed `writing-mode`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WritingMode {
    #[default]
    HorizontalTb,
    VerticalRl,
    VerticalLr,
    SidewaysRl,
    SidewaysLr,
}

impl WritingMode {
    #[inline]
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::HorizontalTb)
    }

    /// Blocks progress right to left.
    #[inline]
    #[must_use]
    pub const fn is_block_flipped(self) -> bool {
        matches!(self, Self::VerticalRl | Self::SidewaysRl)
    }
}

/// Computed `text-orientation`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextOrientation {
    #[default]
    Mixed,
    Upright,
    Sideways,
}

/// Computed `white-space-collapse`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WhiteSpaceCollapse {
    #[default]
    Collapse,
    Preserve,
    PreserveBreaks,
    PreserveSpaces,
    BreakSpaces,
}

/// Computed `text-wrap-mode`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextWrapMode {
    #[default]
    Wrap,
    NoWrap,
}

/// Computed `text-wrap-style`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextWrapStyle {
    #[default]
    Auto,
    Balance,
    Pretty,
    Stable,
}

/// Computed `text-align`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAlign {
    #[default]
    Start,
    End,
    Left,
    Right,
    Center,
    Justify,
    MatchParent,
}

bitflags! {
    /// Computed `text-transform`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct TextTransform: u8 {
        const CAPITALIZE = 1 << 0;
        const UPPERCASE = 1 << 1;
        const LOWERCASE = 1 << 2;
        const FULL_WIDTH = 1 << 3;
        const FULL_SIZE_KANA = 1 << 4;
        const MATH_AUTO = 1 << 5;
    }
}

impl Default for TextTransform {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

bitflags! {
    /// Computed `text-decoration-line`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct TextDecorationLine: u8 {
        const UNDERLINE = 1 << 0;
        const OVERLINE = 1 << 1;
        const LINE_THROUGH = 1 << 2;
        const BLINK = 1 << 3;
        const SPELLING_ERROR = 1 << 4;
        const GRAMMAR_ERROR = 1 << 5;
    }
}

impl Default for TextDecorationLine {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

/// Computed `hyphens`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Hyphens {
    None,
    #[default]
    Manual,
    Auto,
}

/// Computed `line-break`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LineBreak {
    #[default]
    Auto,
    Loose,
    Normal,
    Strict,
    Anywhere,
}

/// Computed `overflow-wrap`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OverflowWrap {
    #[default]
    Normal,
    BreakWord,
    Anywhere,
}

/// Computed `word-break`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WordBreak {
    #[default]
    Normal,
    BreakAll,
    KeepAll,
    AutoPhrase,
}

/// Computed `-webkit-text-security`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextSecurity {
    #[default]
    None,
    Disc,
    Circle,
    Square,
}

/// Computed `text-overflow`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextOverflow {
    #[default]
    Clip,
    Ellipsis,
}
