//! Computed lengths, sizes and edge boxes.
//! Spec: <https://www.w3.org/TR/css-values-4/#lengths>
//!
//! Computed lengths are absolute, so they are stored as CSS pixels. Percentages
//! stay unresolved until layout supplies a basis.

/// A computed `<length-percentage>`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LengthPercentage {
    Fixed(f32),
    Percentage(f32),
}

impl Default for LengthPercentage {
    #[inline]
    fn default() -> Self {
        Self::Fixed(0.0)
    }
}

impl LengthPercentage {
    /// Resolve against a percentage basis in pixels.
    #[inline]
    #[must_use]
    pub fn resolve(self, basis: f32) -> f32 {
        match self {
            Self::Fixed(px) => px,
            Self::Percentage(percent) => basis * percent / 100.0,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Fixed(value) | Self::Percentage(value) => value == 0.0,
        }
    }
}

/// A computed `<length-percentage> | auto`, used by margins and insets.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum LengthPercentageAuto {
    #[default]
    Auto,
    Fixed(f32),
    Percentage(f32),
}

impl LengthPercentageAuto {
    /// Resolve against a basis; `auto` yields `None`.
    #[inline]
    #[must_use]
    pub fn resolve(self, basis: f32) -> Option<f32> {
        match self {
            Self::Auto => None,
            Self::Fixed(px) => Some(px),
            Self::Percentage(percent) => Some(basis * percent / 100.0),
        }
    }
}

impl From<LengthPercentage> for LengthPercentageAuto {
    #[inline]
    fn from(value: LengthPercentage) -> Self {
        match value {
            LengthPercentage::Fixed(px) => Self::Fixed(px),
            LengthPercentage::Percentage(percent) => Self::Percentage(percent),
        }
    }
}

/// A computed sizing value (`width`, `min-height`, `max-width`, ...).
/// Spec: <https://www.w3.org/TR/css-sizing-3/#sizing-values>
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Size {
    #[default]
    Auto,
    /// `none`, only valid for the max-size properties.
    None,
    Fixed(f32),
    Percentage(f32),
    MinContent,
    MaxContent,
    FitContent,
}

/// Four values, one per physical side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct EdgeBox<T> {
    pub top: T,
    pub right: T,
    pub bottom: T,
    pub left: T,
}

impl<T: Copy> EdgeBox<T> {
    /// The same value on every side.
    #[inline]
    #[must_use]
    pub const fn uniform(value: T) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Apply `transform` to every side.
    #[inline]
    #[must_use]
    pub fn map<U>(self, mut transform: impl FnMut(T) -> U) -> EdgeBox<U> {
        EdgeBox {
            top: transform(self.top),
            right: transform(self.right),
            bottom: transform(self.bottom),
            left: transform(self.left),
        }
    }

    #[inline]
    pub fn any(&self, mut predicate: impl FnMut(&T) -> bool) -> bool {
        predicate(&self.top)
            || predicate(&self.right)
            || predicate(&self.bottom)
            || predicate(&self.left)
    }
}

/// Computed `line-height`.
/// Spec: <https://www.w3.org/TR/css-inline-3/#line-height-property>
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum LineHeight {
    #[default]
    Normal,
    /// Unitless multiplier, inherited as a number.
    Number(f32),
    Fixed(f32),
    Percentage(f32),
}

impl LineHeight {
    /// Compute the used line height in pixels.
    ///
    /// # Arguments
    /// * `font_size` - computed `font-size` in pixels.
    /// * `normal_line_spacing` - line spacing of the primary font, used for `normal`.
    #[inline]
    #[must_use]
    pub fn compute(self, font_size: f32, normal_line_spacing: f32) -> f32 {
        match self {
            Self::Normal => normal_line_spacing,
            Self::Number(factor) => font_size * factor,
            Self::Fixed(px) => px,
            Self::Percentage(percent) => font_size * percent / 100.0,
        }
    }
}

/// `letter-spacing` / `word-spacing`, where `normal` computes to zero.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Spacing(pub LengthPercentage);

/// Computed `aspect-ratio`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum AspectRatio {
    #[default]
    Auto,
    Ratio(f32, f32),
    AutoAndRatio(f32, f32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentages_resolve_against_the_basis() {
        assert!((LengthPercentage::Percentage(50.0).resolve(200.0) - 100.0).abs() < f32::EPSILON);
        assert!((LengthPercentage::Fixed(7.0).resolve(200.0) - 7.0).abs() < f32::EPSILON);
        assert_eq!(LengthPercentageAuto::Auto.resolve(10.0), None);
    }

    #[test]
    fn line_height_normal_uses_font_spacing() {
        assert!((LineHeight::Normal.compute(16.0, 19.0) - 19.0).abs() < f32::EPSILON);
        assert!((LineHeight::Number(1.5).compute(16.0, 19.0) - 24.0).abs() < f32::EPSILON);
        assert!((LineHeight::Percentage(200.0).compute(10.0, 19.0) - 20.0).abs() < f32::EPSILON);
    }

    #[test]
    fn edge_box_map_and_any() {
        let edges = EdgeBox {
            top: 1,
            right: 2,
            bottom: 3,
            left: 4,
        };
        assert_eq!(edges.map(|value| value * 2).left, 8);
        assert!(edges.any(|value| *value == 3));
        assert!(!EdgeBox::uniform(0).any(|value| *value != 0));
    }
}
