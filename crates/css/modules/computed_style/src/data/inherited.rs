//! Frequently inherited data: color, line height, border spacing and fonts.

use crate::config::{FastPathPolicy, FastPathProperty};
use crate::data_ref::DataRef;
use crate::diff::{PropertyGroup, StyleDifference, field_differences, group_differences};
use css_values::{Color, FontDescription, LineHeight, Spacing};

/// Font selection and spacing.
/// Spec: <https://www.w3.org/TR/css-fonts-4/>
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FontData {
    pub description: FontDescription,
    pub letter_spacing: Spacing,
    pub word_spacing: Spacing,
}

impl PropertyGroup for FontData {
    const NAME: &'static str = "FontData";

    fn collect_differences(&self, other: &Self, out: &mut Vec<StyleDifference>) {
        field_differences!(Self::NAME, self, other, out, [
            description,
            letter_spacing,
            word_spacing,
        ]);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct InheritedData {
    pub horizontal_border_spacing: f32,
    pub vertical_border_spacing: f32,
    pub line_height: LineHeight,
    pub color: Color,
    /// `color` for elements inside a visited link.
    pub visited_link_color: Color,
    pub font: DataRef<FontData>,
}

impl Default for InheritedData {
    fn default() -> Self {
        Self {
            horizontal_border_spacing: 0.0,
            vertical_border_spacing: 0.0,
            line_height: LineHeight::Normal,
            color: Color::BLACK,
            visited_link_color: Color::BLACK,
            font: DataRef::default(),
        }
    }
}

impl InheritedData {
    /// Equality of the fields `policy` lets fast-path inheritance copy.
    pub fn fast_path_inherited_equal(&self, other: &Self, policy: FastPathPolicy) -> bool {
        (!policy.contains(FastPathProperty::Color) || self.color == other.color)
            && (!policy.contains(FastPathProperty::VisitedLinkColor)
                || self.visited_link_color == other.visited_link_color)
    }

    /// Equality of every field fast-path inheritance does not copy.
    #[allow(clippy::float_cmp, reason = "computed values compare exactly")]
    pub fn non_fast_path_inherited_equal(&self, other: &Self, policy: FastPathPolicy) -> bool {
        self.line_height == other.line_height
            && self.font == other.font
            && self.horizontal_border_spacing == other.horizontal_border_spacing
            && self.vertical_border_spacing == other.vertical_border_spacing
            && (policy.contains(FastPathProperty::Color) || self.color == other.color)
            && (policy.contains(FastPathProperty::VisitedLinkColor)
                || self.visited_link_color == other.visited_link_color)
    }

    /// Copy the fast-path fields from `parent`.
    pub fn fast_path_inherit_from(&mut self, parent: &Self, policy: FastPathPolicy) {
        if policy.contains(FastPathProperty::Color) {
            self.color = parent.color;
        }
        if policy.contains(FastPathProperty::VisitedLinkColor) {
            self.visited_link_color = parent.visited_link_color;
        }
    }
}

impl PropertyGroup for InheritedData {
    const NAME: &'static str = "InheritedData";

    #[allow(clippy::float_cmp, reason = "computed values compare exactly")]
    fn collect_differences(&self, other: &Self, out: &mut Vec<StyleDifference>) {
        field_differences!(Self::NAME, self, other, out, [
            horizontal_border_spacing,
            vertical_border_spacing,
            line_height,
            color,
            visited_link_color,
        ]);
        group_differences(&self.font, &other.font, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fast_path_fields_partition_the_group() {
        let policy = FastPathPolicy::default();
        let base = InheritedData::default();
        let recolored = InheritedData {
            color: Color::WHITE,
            ..InheritedData::default()
        };
        assert!(!base.fast_path_inherited_equal(&recolored, policy));
        assert!(base.non_fast_path_inherited_equal(&recolored, policy));

        let spaced = InheritedData {
            vertical_border_spacing: 2.0,
            ..InheritedData::default()
        };
        assert!(base.fast_path_inherited_equal(&spaced, policy));
        assert!(!base.non_fast_path_inherited_equal(&spaced, policy));
    }

    #[test]
    fn colors_leave_the_fast_path_when_the_policy_excludes_them() {
        let policy = FastPathPolicy::empty().with(FastPathProperty::Visibility);
        let base = InheritedData::default();
        let recolored = InheritedData {
            color: Color::WHITE,
            ..InheritedData::default()
        };
        assert!(base.fast_path_inherited_equal(&recolored, policy));
        assert!(!base.non_fast_path_inherited_equal(&recolored, policy));

        let mut child = InheritedData::default();
        child.fast_path_inherit_from(&recolored, policy);
        assert_eq!(child.color, Color::BLACK);
    }
}
