//! Seldom-set non-inherited properties.

use crate::custom_properties::CustomPropertyData;
use crate::data_ref::DataRef;
use crate::diff::{PropertyGroup, StyleDifference, field_differences, group_differences};
use css_values::{
    Contain, ContainerType, EdgeBox, LengthPercentage, LengthPercentageAuto, OverflowAnchor,
    Perspective, Rotate, Scale, ScrollSnapAlign, ScrollSnapStop, ScrollSnapType, StyleColor,
    TransformStyle3D, Translate,
};

#[derive(Clone, Debug, PartialEq)]
pub struct NonInheritedRareData {
    pub scroll_margin: EdgeBox<f32>,
    pub scroll_padding: EdgeBox<LengthPercentageAuto>,
    pub scroll_snap_type: ScrollSnapType,
    pub scroll_snap_align: ScrollSnapAlign,
    pub scroll_snap_stop: ScrollSnapStop,
    pub container_type: ContainerType,
    pub container_names: Vec<String>,
    pub overflow_anchor: OverflowAnchor,
    pub contain: Contain,
    pub perspective: Perspective,
    pub transform_style_3d: TransformStyle3D,
    pub rotate: Rotate,
    pub scale: Scale,
    pub translate: Translate,
    /// `None` is `normal`.
    pub column_gap: Option<LengthPercentage>,
    /// `None` is `normal`.
    pub row_gap: Option<LengthPercentage>,
    pub text_decoration_color: StyleColor,
    /// Name argument of the pseudo-element this style describes, e.g. the
    /// highlight name of `::highlight(name)`.
    pub pseudo_element_name_argument: Option<String>,
    /// Custom properties registered with `inherits: false`.
    pub custom_properties: DataRef<CustomPropertyData>,
}

impl Default for NonInheritedRareData {
    fn default() -> Self {
        Self {
            scroll_margin: EdgeBox::uniform(0.0),
            scroll_padding: EdgeBox::uniform(LengthPercentageAuto::Auto),
            scroll_snap_type: ScrollSnapType::default(),
            scroll_snap_align: ScrollSnapAlign::default(),
            scroll_snap_stop: ScrollSnapStop::Normal,
            container_type: ContainerType::Normal,
            container_names: Vec::new(),
            overflow_anchor: OverflowAnchor::Auto,
            contain: Contain::empty(),
            perspective: Perspective::None,
            transform_style_3d: TransformStyle3D::Flat,
            rotate: Rotate::None,
            scale: Scale::None,
            translate: Translate::None,
            column_gap: None,
            row_gap: None,
            text_decoration_color: StyleColor::CurrentColor,
            pseudo_element_name_argument: None,
            custom_properties: DataRef::default(),
        }
    }
}

impl NonInheritedRareData {
    /// `contain` plus the containment implied by `container-type`.
    #[inline]
    pub fn used_contain(&self) -> Contain {
        self.contain | self.container_type.implied_containment()
    }

    #[inline]
    pub fn has_individual_transform(&self) -> bool {
        self.rotate != Rotate::None || self.scale != Scale::None || self.translate != Translate::None
    }
}

impl PropertyGroup for NonInheritedRareData {
    const NAME: &'static str = "NonInheritedRareData";

    fn collect_differences(&self, other: &Self, out: &mut Vec<StyleDifference>) {
        field_differences!(Self::NAME, self, other, out, [
            scroll_margin,
            scroll_padding,
            scroll_snap_type,
            scroll_snap_align,
            scroll_snap_stop,
            container_type,
            container_names,
            overflow_anchor,
            contain,
            perspective,
            transform_style_3d,
            rotate,
            scale,
            translate,
            column_gap,
            row_gap,
            text_decoration_color,
            pseudo_element_name_argument,
        ]);
        group_differences(&self.custom_properties, &other.custom_properties, out);
    }
}
