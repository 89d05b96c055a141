//! Seldom-set inherited properties.

use crate::custom_properties::CustomPropertyData;
use crate::data_ref::DataRef;
use crate::diff::{PropertyGroup, StyleDifference, field_differences, group_differences};
use css_values::{
    Color, ContentVisibility, Hyphens, LengthPercentage, LineBreak, OverflowWrap, Quotes,
    Shadows, StyleColor, TextSecurity, UserModify, UserSelect, WordBreak,
};

#[derive(Clone, Debug, PartialEq)]
#[allow(
    clippy::struct_excessive_bools,
    reason = "independent computed flags of one group"
)]
pub struct InheritedRareData {
    /// Product of the `zoom` values of this element and its ancestors.
    pub used_zoom: f32,
    pub text_stroke_color: StyleColor,
    pub text_stroke_width: f32,
    pub text_fill_color: StyleColor,
    pub text_emphasis_color: StyleColor,
    /// `None` is `auto`.
    pub caret_color: Option<StyleColor>,
    /// `None` is `auto`.
    pub accent_color: Option<StyleColor>,
    pub stroke_color: StyleColor,
    pub stroke_width: LengthPercentage,
    pub has_explicitly_set_stroke_color: bool,
    pub has_explicitly_set_stroke_width: bool,
    pub text_indent: LengthPercentage,
    pub text_shadow: Shadows,
    pub quotes: Quotes,
    pub tab_size: f32,
    pub widows: u16,
    pub orphans: u16,
    pub word_break: WordBreak,
    pub overflow_wrap: OverflowWrap,
    pub line_break: LineBreak,
    pub user_select: UserSelect,
    pub user_modify: UserModify,
    pub hyphens: Hyphens,
    pub text_security: TextSecurity,
    /// Inside an `inert` subtree.
    pub effective_inert: bool,
    /// Hidden by the engine regardless of `visibility`.
    pub is_force_hidden: bool,
    pub effectively_transparent: bool,
    pub used_content_visibility: ContentVisibility,
    pub custom_properties: DataRef<CustomPropertyData>,
}

impl Default for InheritedRareData {
    fn default() -> Self {
        Self {
            used_zoom: 1.0,
            text_stroke_color: StyleColor::CurrentColor,
            text_stroke_width: 0.0,
            text_fill_color: StyleColor::CurrentColor,
            text_emphasis_color: StyleColor::CurrentColor,
            caret_color: None,
            accent_color: None,
            stroke_color: StyleColor::Absolute(Color::TRANSPARENT),
            stroke_width: LengthPercentage::Fixed(1.0),
            has_explicitly_set_stroke_color: false,
            has_explicitly_set_stroke_width: false,
            text_indent: LengthPercentage::Fixed(0.0),
            text_shadow: Shadows::new(),
            quotes: Quotes::Auto,
            tab_size: 8.0,
            widows: 2,
            orphans: 2,
            word_break: WordBreak::Normal,
            overflow_wrap: OverflowWrap::Normal,
            line_break: LineBreak::Auto,
            user_select: UserSelect::Text,
            user_modify: UserModify::ReadOnly,
            hyphens: Hyphens::Manual,
            text_security: TextSecurity::None,
            effective_inert: false,
            is_force_hidden: false,
            effectively_transparent: false,
            used_content_visibility: ContentVisibility::Visible,
            custom_properties: DataRef::default(),
        }
    }
}

impl PropertyGroup for InheritedRareData {
    const NAME: &'static str = "InheritedRareData";

    #[allow(clippy::float_cmp, reason = "computed values compare exactly")]
    fn collect_differences(&self, other: &Self, out: &mut Vec<StyleDifference>) {
        field_differences!(Self::NAME, self, other, out, [
            used_zoom,
            text_stroke_color,
            text_stroke_width,
            text_fill_color,
            text_emphasis_color,
            caret_color,
            accent_color,
            stroke_color,
            stroke_width,
            has_explicitly_set_stroke_color,
            has_explicitly_set_stroke_width,
            text_indent,
            text_shadow,
            quotes,
            tab_size,
            widows,
            orphans,
            word_break,
            overflow_wrap,
            line_break,
            user_select,
            user_modify,
            hyphens,
            text_security,
            effective_inert,
            is_force_hidden,
            effectively_transparent,
            used_content_visibility,
        ]);
        group_differences(&self.custom_properties, &other.custom_properties, out);
    }
}
