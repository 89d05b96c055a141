//! Backgrounds and outline.
//! Spec: <https://www.w3.org/TR/css-backgrounds-3/>

use crate::diff::{PropertyGroup, StyleDifference, field_differences};
use css_values::{Color, FillLayers, OutlineValue, StyleColor};

#[derive(Clone, Debug, PartialEq)]
pub struct BackgroundData {
    pub background: FillLayers,
    pub background_color: StyleColor,
    pub outline: OutlineValue,
}

impl Default for BackgroundData {
    fn default() -> Self {
        Self {
            background: FillLayers::default(),
            background_color: StyleColor::Absolute(Color::TRANSPARENT),
            outline: OutlineValue::default(),
        }
    }
}

impl BackgroundData {
    /// Layers and color only; the outline is painted separately.
    #[inline]
    pub fn background_equal(&self, other: &Self) -> bool {
        self.background == other.background && self.background_color == other.background_color
    }
}

impl PropertyGroup for BackgroundData {
    const NAME: &'static str = "BackgroundData";

    fn collect_differences(&self, other: &Self, out: &mut Vec<StyleDifference>) {
        field_differences!(Self::NAME, self, other, out, [
            background,
            background_color,
            outline,
        ]);
    }
}
