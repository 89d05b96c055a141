//! Box sizing and stacking.
//! Spec: <https://www.w3.org/TR/css-sizing-3/>

use crate::diff::{PropertyGroup, StyleDifference, field_differences};
use css_values::{BoxDecorationBreak, BoxSizing, Size, VerticalAlign, ZIndex};

/// Preferred, minimum and maximum sizes plus z-index.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxData {
    pub width: Size,
    pub height: Size,
    pub min_width: Size,
    pub max_width: Size,
    pub min_height: Size,
    pub max_height: Size,
    pub vertical_align: VerticalAlign,
    pub box_sizing: BoxSizing,
    pub box_decoration_break: BoxDecorationBreak,
    /// `z-index` as specified.
    pub specified_z_index: ZIndex,
    /// `z-index` after adjustment for boxes that cannot stack.
    pub used_z_index: ZIndex,
}

impl Default for BoxData {
    fn default() -> Self {
        Self {
            width: Size::Auto,
            height: Size::Auto,
            min_width: Size::Auto,
            max_width: Size::None,
            min_height: Size::Auto,
            max_height: Size::None,
            vertical_align: VerticalAlign::Baseline,
            box_sizing: BoxSizing::ContentBox,
            box_decoration_break: BoxDecorationBreak::Slice,
            specified_z_index: ZIndex::Auto,
            used_z_index: ZIndex::Auto,
        }
    }
}

impl BoxData {
    /// True when any of the six sizing properties differ.
    #[inline]
    pub fn sizes_differ(&self, other: &Self) -> bool {
        self.width != other.width
            || self.min_width != other.min_width
            || self.max_width != other.max_width
            || self.height != other.height
            || self.min_height != other.min_height
            || self.max_height != other.max_height
    }
}

impl PropertyGroup for BoxData {
    const NAME: &'static str = "BoxData";

    fn collect_differences(&self, other: &Self, out: &mut Vec<StyleDifference>) {
        field_differences!(Self::NAME, self, other, out, [
            width,
            height,
            min_width,
            max_width,
            min_height,
            max_height,
            vertical_align,
            box_sizing,
            box_decoration_break,
            specified_z_index,
            used_z_index,
        ]);
    }
}
