//! SVG presentation values.
//! Spec: <https://www.w3.org/TR/SVG2/painting.html>

use crate::color::{Color, StyleColor};
use crate::length::LengthPercentage;

/// Computed `fill` / `stroke` paint.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SvgPaint {
    #[default]
    None,
    Color(StyleColor),
    /// A paint server reference with an optional color fallback.
    Url(String, Option<StyleColor>),
    ContextFill,
    ContextStroke,
}

impl SvgPaint {
    /// Initial `fill` is black.
    #[inline]
    #[must_use]
    pub const fn initial_fill() -> Self {
        Self::Color(StyleColor::Absolute(Color::BLACK))
    }

    #[inline]
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Computed `fill-rule` / `clip-rule`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FillRule {
    #[default]
    NonZero,
    EvenOdd,
}

/// Computed `stroke-linecap`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StrokeLinecap {
    #[default]
    Butt,
    Round,
    Square,
}

/// Computed `stroke-linejoin`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StrokeLinejoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

/// Computed `text-anchor`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

/// Computed `vector-effect`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum VectorEffect {
    #[default]
    None,
    NonScalingStroke,
}

/// Computed `baseline-shift`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum BaselineShift {
    #[default]
    Baseline,
    Sub,
    Super,
    Length(LengthPercentage),
}
