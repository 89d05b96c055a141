//! Less common non-inherited properties that are still set often enough not
//! to be rare: opacity, alignment, shadows, generated content, and the
//! nested multi-column and transform groups.

use crate::data_ref::DataRef;
use crate::diff::{PropertyGroup, StyleDifference, field_differences, group_differences};
use css_values::{
    Appearance, AspectRatio, BorderValue, ColumnAxis, ColumnFill, ColumnProgression, ColumnSpan,
    ContentData, ContentDistribution, ItemPosition, ObjectFit, Resize, Shadows, TableLayout,
    TextOverflow, TransformBox, TransformList, TransformOrigin, UserDrag,
};

/// Multi-column layout.
/// Spec: <https://www.w3.org/TR/css-multicol-1/>
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MultiColumnData {
    /// `None` is `auto`.
    pub count: Option<u16>,
    /// `None` is `auto`.
    pub width: Option<f32>,
    pub fill: ColumnFill,
    pub span: ColumnSpan,
    pub rule: BorderValue,
    pub axis: ColumnAxis,
    pub progression: ColumnProgression,
}

impl PropertyGroup for MultiColumnData {
    const NAME: &'static str = "MultiColumnData";

    fn collect_differences(&self, other: &Self, out: &mut Vec<StyleDifference>) {
        field_differences!(Self::NAME, self, other, out, [
            count,
            width,
            fill,
            span,
            rule,
            axis,
            progression,
        ]);
    }
}

/// The `transform` list and its reference box.
/// Spec: <https://www.w3.org/TR/css-transforms-1/>
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransformData {
    pub operations: TransformList,
    pub origin: TransformOrigin,
    pub transform_box: TransformBox,
}

impl PropertyGroup for TransformData {
    const NAME: &'static str = "TransformData";

    fn collect_differences(&self, other: &Self, out: &mut Vec<StyleDifference>) {
        field_differences!(Self::NAME, self, other, out, [operations, origin, transform_box]);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NonInheritedMiscData {
    pub opacity: f32,
    pub align_content: ContentDistribution,
    pub align_items: ItemPosition,
    pub align_self: ItemPosition,
    pub justify_content: ContentDistribution,
    pub justify_items: ItemPosition,
    pub justify_self: ItemPosition,
    pub order: i32,
    pub appearance: Appearance,
    /// `appearance` after the theme decided whether native styling applies.
    pub used_appearance: Appearance,
    pub aspect_ratio: AspectRatio,
    pub box_shadow: Shadows,
    pub content: ContentData,
    pub text_overflow: TextOverflow,
    pub object_fit: ObjectFit,
    pub table_layout: TableLayout,
    pub user_drag: UserDrag,
    pub resize: Resize,
    pub multi_col: DataRef<MultiColumnData>,
    pub transform: DataRef<TransformData>,
}

impl Default for NonInheritedMiscData {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            align_content: ContentDistribution::Normal,
            align_items: ItemPosition::Normal,
            align_self: ItemPosition::Auto,
            justify_content: ContentDistribution::Normal,
            justify_items: ItemPosition::Legacy,
            justify_self: ItemPosition::Auto,
            order: 0,
            appearance: Appearance::None,
            used_appearance: Appearance::None,
            aspect_ratio: AspectRatio::Auto,
            box_shadow: Shadows::new(),
            content: ContentData::Normal,
            text_overflow: TextOverflow::Clip,
            object_fit: ObjectFit::Fill,
            table_layout: TableLayout::Auto,
            user_drag: UserDrag::Auto,
            resize: Resize::None,
            multi_col: DataRef::default(),
            transform: DataRef::default(),
        }
    }
}

impl PropertyGroup for NonInheritedMiscData {
    const NAME: &'static str = "NonInheritedMiscData";

    #[allow(clippy::float_cmp, reason = "computed values compare exactly")]
    fn collect_differences(&self, other: &Self, out: &mut Vec<StyleDifference>) {
        field_differences!(Self::NAME, self, other, out, [
            opacity,
            align_content,
            align_items,
            align_self,
            justify_content,
            justify_items,
            justify_self,
            order,
            appearance,
            used_appearance,
            aspect_ratio,
            box_shadow,
            content,
            text_overflow,
            object_fit,
            table_layout,
            user_drag,
            resize,
        ]);
        group_differences(&self.multi_col, &other.multi_col, out);
        group_differences(&self.transform, &other.transform, out);
    }
}
