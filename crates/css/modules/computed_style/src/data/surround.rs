//! Insets, margins, padding and borders.

use crate::diff::{PropertyGroup, StyleDifference, field_differences};
use css_values::{BorderData, EdgeBox, LengthPercentage, LengthPercentageAuto};

#[derive(Clone, Debug, PartialEq)]
pub struct SurroundData {
    pub inset: EdgeBox<LengthPercentageAuto>,
    pub margin: EdgeBox<LengthPercentageAuto>,
    pub padding: EdgeBox<LengthPercentage>,
    pub border: BorderData,
    pub has_explicitly_set_padding: bool,
    pub has_explicitly_set_border_radius: bool,
}

impl Default for SurroundData {
    fn default() -> Self {
        Self {
            inset: EdgeBox::uniform(LengthPercentageAuto::Auto),
            margin: EdgeBox::uniform(LengthPercentageAuto::Fixed(0.0)),
            padding: EdgeBox::uniform(LengthPercentage::Fixed(0.0)),
            border: BorderData::default(),
            has_explicitly_set_padding: false,
            has_explicitly_set_border_radius: false,
        }
    }
}

impl PropertyGroup for SurroundData {
    const NAME: &'static str = "SurroundData";

    fn collect_differences(&self, other: &Self, out: &mut Vec<StyleDifference>) {
        field_differences!(Self::NAME, self, other, out, [
            inset,
            margin,
            padding,
            border,
            has_explicitly_set_padding,
            has_explicitly_set_border_radius,
        ]);
    }
}
