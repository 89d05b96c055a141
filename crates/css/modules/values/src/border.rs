//! Border, border-radius and outline values.
//! Spec: <https://www.w3.org/TR/css-backgrounds-3/#borders>

use crate::color::StyleColor;
use crate::length::{EdgeBox, LengthPercentage};

/// Computed `border-*-style`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BorderStyle {
    #[default]
    None,
    Hidden,
    Inset,
    Groove,
    Outset,
    Ridge,
    Dotted,
    Dashed,
    Solid,
    Double,
}

impl BorderStyle {
    /// `none` and `hidden` suppress the border entirely.
    #[inline]
    #[must_use]
    pub const fn is_visible(self) -> bool {
        !matches!(self, Self::None | Self::Hidden)
    }
}

/// One side of a border.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BorderValue {
    pub width: f32,
    pub style: BorderStyle,
    pub color: StyleColor,
}

impl BorderValue {
    /// Initial `border-width` is `medium`.
    pub const MEDIUM_WIDTH: f32 = 3.0;

    /// Used width: zero when the style hides the border.
    #[inline]
    #[must_use]
    pub fn used_width(&self) -> f32 {
        if self.style.is_visible() {
            self.width
        } else {
            0.0
        }
    }

}

impl Default for BorderValue {
    #[inline]
    fn default() -> Self {
        Self {
            width: Self::MEDIUM_WIDTH,
            style: BorderStyle::None,
            color: StyleColor::CurrentColor,
        }
    }
}

/// One corner radius: horizontal and vertical components.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CornerRadius {
    pub horizontal: LengthPercentage,
    pub vertical: LengthPercentage,
}

impl CornerRadius {
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.horizontal.is_zero() || self.vertical.is_zero()
    }
}

/// `border-radius` for the four corners.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BorderRadius {
    pub top_left: CornerRadius,
    pub top_right: CornerRadius,
    pub bottom_right: CornerRadius,
    pub bottom_left: CornerRadius,
}

impl BorderRadius {
    #[inline]
    #[must_use]
    pub fn has_radius(&self) -> bool {
        !(self.top_left.is_zero()
            && self.top_right.is_zero()
            && self.bottom_right.is_zero()
            && self.bottom_left.is_zero())
    }
}

/// The four border sides plus corner radii.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BorderData {
    pub edges: EdgeBox<BorderValue>,
    pub radius: BorderRadius,
}

impl BorderData {
    /// Used widths of the four sides.
    #[inline]
    #[must_use]
    pub fn widths(&self) -> EdgeBox<f32> {
        self.edges.map(|side| side.used_width())
    }

}

/// Computed outline.
/// Spec: <https://www.w3.org/TR/css-ui-4/#outline-props>
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OutlineValue {
    pub width: f32,
    pub style: BorderStyle,
    pub color: StyleColor,
    pub offset: f32,
    /// `outline-style: auto`.
    pub is_auto: bool,
}

impl Default for OutlineValue {
    #[inline]
    fn default() -> Self {
        Self {
            width: BorderValue::MEDIUM_WIDTH,
            style: BorderStyle::None,
            color: StyleColor::CurrentColor,
            offset: 0.0,
            is_auto: false,
        }
    }
}

impl OutlineValue {
    #[inline]
    #[must_use]
    pub fn used_width(&self) -> f32 {
        if self.is_auto || self.style.is_visible() {
            self.width
        } else {
            0.0
        }
    }
}
