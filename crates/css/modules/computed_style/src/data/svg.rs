//! SVG presentation properties.
//! Spec: <https://www.w3.org/TR/SVG2/styling.html>
//!
//! This group mixes inherited and non-inherited properties, so inheritance
//! copies its halves field by field instead of sharing the whole group.

use crate::data_ref::DataRef;
use crate::diff::{PropertyGroup, StyleDifference, field_differences, group_differences};
use css_values::{
    BaselineShift, Color, FillRule, LengthPercentage, LengthPercentageAuto, StrokeLinecap,
    StrokeLinejoin, StyleColor, SvgPaint, TextAnchor, VectorEffect,
};

/// Inherited SVG keywords.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SvgInheritedFlags {
    pub fill_rule: FillRule,
    pub clip_rule: FillRule,
    pub stroke_linecap: StrokeLinecap,
    pub stroke_linejoin: StrokeLinejoin,
    pub text_anchor: TextAnchor,
}

/// Non-inherited SVG keywords.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SvgNonInheritedFlags {
    pub vector_effect: VectorEffect,
    /// `mask-type: alpha` when set, `luminance` otherwise.
    pub mask_type_alpha: bool,
}

/// `fill` and `fill-opacity`.
#[derive(Clone, Debug, PartialEq)]
pub struct SvgFillData {
    pub paint: SvgPaint,
    pub opacity: f32,
}

impl Default for SvgFillData {
    fn default() -> Self {
        Self {
            paint: SvgPaint::initial_fill(),
            opacity: 1.0,
        }
    }
}

/// `stroke` and the stroke geometry properties.
#[derive(Clone, Debug, PartialEq)]
pub struct SvgStrokeData {
    pub paint: SvgPaint,
    pub opacity: f32,
    pub dash_array: Vec<LengthPercentage>,
    pub dash_offset: LengthPercentage,
    pub miter_limit: f32,
}

impl Default for SvgStrokeData {
    fn default() -> Self {
        Self {
            paint: SvgPaint::None,
            opacity: 1.0,
            dash_array: Vec::new(),
            dash_offset: LengthPercentage::Fixed(0.0),
            miter_limit: 4.0,
        }
    }
}

/// `marker-start`, `marker-mid` and `marker-end` references.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SvgMarkerData {
    pub start: Option<String>,
    pub mid: Option<String>,
    pub end: Option<String>,
}

/// `stop-color` and `stop-opacity`.
#[derive(Clone, Debug, PartialEq)]
pub struct SvgStopData {
    pub color: StyleColor,
    pub opacity: f32,
}

impl Default for SvgStopData {
    fn default() -> Self {
        Self {
            color: StyleColor::Absolute(Color::BLACK),
            opacity: 1.0,
        }
    }
}

/// Flood and lighting colors, baseline shift.
#[derive(Clone, Debug, PartialEq)]
pub struct SvgMiscData {
    pub flood_color: StyleColor,
    pub flood_opacity: f32,
    pub lighting_color: StyleColor,
    pub baseline_shift: BaselineShift,
}

impl Default for SvgMiscData {
    fn default() -> Self {
        Self {
            flood_color: StyleColor::Absolute(Color::BLACK),
            flood_opacity: 1.0,
            lighting_color: StyleColor::Absolute(Color::WHITE),
            baseline_shift: BaselineShift::Baseline,
        }
    }
}

/// Geometry properties of basic shapes.
#[derive(Clone, Debug, PartialEq)]
pub struct SvgLayoutData {
    pub cx: LengthPercentage,
    pub cy: LengthPercentage,
    pub radius: LengthPercentage,
    pub rx: LengthPercentageAuto,
    pub ry: LengthPercentageAuto,
    pub x: LengthPercentage,
    pub y: LengthPercentage,
    /// Path data of `d`, `None` is `none`.
    pub path: Option<String>,
}

impl Default for SvgLayoutData {
    fn default() -> Self {
        let zero = LengthPercentage::Fixed(0.0);
        Self {
            cx: zero,
            cy: zero,
            radius: zero,
            rx: LengthPercentageAuto::Auto,
            ry: LengthPercentageAuto::Auto,
            x: zero,
            y: zero,
            path: None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SvgData {
    pub inherited_flags: SvgInheritedFlags,
    pub non_inherited_flags: SvgNonInheritedFlags,
    pub fill: DataRef<SvgFillData>,
    pub stroke: DataRef<SvgStrokeData>,
    pub markers: DataRef<SvgMarkerData>,
    pub stop: DataRef<SvgStopData>,
    pub misc: DataRef<SvgMiscData>,
    pub layout: DataRef<SvgLayoutData>,
}

impl SvgData {
    pub fn inherited_equal(&self, other: &Self) -> bool {
        self.fill == other.fill
            && self.stroke == other.stroke
            && self.markers == other.markers
            && self.inherited_flags == other.inherited_flags
    }

    pub fn non_inherited_equal(&self, other: &Self) -> bool {
        self.stop == other.stop
            && self.misc == other.misc
            && self.layout == other.layout
            && self.non_inherited_flags == other.non_inherited_flags
    }

    /// Share the inherited half of `parent`.
    pub fn inherit_from(&mut self, parent: &Self) {
        self.fill = DataRef::clone(&parent.fill);
        self.stroke = DataRef::clone(&parent.stroke);
        self.markers = DataRef::clone(&parent.markers);
        self.inherited_flags = parent.inherited_flags;
    }

    /// Share the non-inherited half of `other`.
    pub fn copy_non_inherited_from(&mut self, other: &Self) {
        self.non_inherited_flags = other.non_inherited_flags;
        self.stop = DataRef::clone(&other.stop);
        self.misc = DataRef::clone(&other.misc);
        self.layout = DataRef::clone(&other.layout);
    }
}

macro_rules! leaf_group {
    ($ty:ty, $name:literal, [$($field:ident),* $(,)?]) => {
        impl PropertyGroup for $ty {
            const NAME: &'static str = $name;

            #[allow(clippy::float_cmp, reason = "computed values compare exactly")]
            fn collect_differences(&self, other: &Self, out: &mut Vec<StyleDifference>) {
                field_differences!(Self::NAME, self, other, out, [$($field),*]);
            }
        }
    };
}

leaf_group!(SvgFillData, "SvgFillData", [paint, opacity]);
leaf_group!(SvgStrokeData, "SvgStrokeData", [
    paint,
    opacity,
    dash_array,
    dash_offset,
    miter_limit,
]);
leaf_group!(SvgMarkerData, "SvgMarkerData", [start, mid, end]);
leaf_group!(SvgStopData, "SvgStopData", [color, opacity]);
leaf_group!(SvgMiscData, "SvgMiscData", [
    flood_color,
    flood_opacity,
    lighting_color,
    baseline_shift,
]);
leaf_group!(SvgLayoutData, "SvgLayoutData", [cx, cy, radius, rx, ry, x, y, path]);

impl PropertyGroup for SvgData {
    const NAME: &'static str = "SvgData";

    fn collect_differences(&self, other: &Self, out: &mut Vec<StyleDifference>) {
        field_differences!(Self::NAME, self, other, out, [
            inherited_flags,
            non_inherited_flags,
        ]);
        group_differences(&self.fill, &other.fill, out);
        group_differences(&self.stroke, &other.stroke, out);
        group_differences(&self.markers, &other.markers, out);
        group_differences(&self.stop, &other.stop, out);
        group_differences(&self.misc, &other.misc, out);
        group_differences(&self.layout, &other.layout, out);
    }
}
