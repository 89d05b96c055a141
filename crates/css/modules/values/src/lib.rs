//! Computed value vocabulary shared by the style record.
//! Spec: <https://www.w3.org/TR/css-values-4/#computed-value>
//!
//! Every type here is the *computed* form of a property value: lengths are
//! absolute pixels or percentages, keywords are closed enums and colors are
//! either `currentcolor` or an absolute RGBA value. Parsing is not handled
//! here; the cascade produces these values and the style record stores them.

#![forbid(unsafe_code)]

pub mod alignment;
pub mod background;
pub mod border;
pub mod color;
pub mod containment;
pub mod content;
pub mod display;
pub mod font;
pub mod length;
pub mod multicol;
pub mod scroll;
pub mod shadow;
pub mod svg;
pub mod text;
pub mod transform;
pub mod ui;

pub use alignment::{ContentDistribution, ItemPosition, SelfPosition};
pub use background::{
    BackgroundAttachment, BackgroundClip, BackgroundRepeat, BackgroundSize, FillLayer, FillLayers,
};
pub use border::{BorderData, BorderRadius, BorderStyle, BorderValue, CornerRadius, OutlineValue};
pub use color::{Color, StyleColor};
pub use containment::{Contain, ContainerType, ContentVisibility};
pub use content::{ContentData, ContentItem, Quotes};
pub use display::{
    Clear, Display, Float, Overflow, Position, UnicodeBidi, Visibility, ZIndex,
};
pub use font::{FontDescription, FontStyle, FontWeight};
pub use length::{
    AspectRatio, EdgeBox, LengthPercentage, LengthPercentageAuto, LineHeight, Size, Spacing,
};
pub use multicol::{ColumnAxis, ColumnFill, ColumnProgression, ColumnSpan, PaginationMode};
pub use scroll::{
    OverflowAnchor, ScrollSnapAlign, ScrollSnapAxis, ScrollSnapStop, ScrollSnapStrictness,
    ScrollSnapType, SnapAlignment,
};
pub use shadow::{Shadow, Shadows};
pub use svg::{
    BaselineShift, FillRule, StrokeLinecap, StrokeLinejoin, SvgPaint, TextAnchor, VectorEffect,
};
pub use text::{
    Direction, Hyphens, LineBreak, OverflowWrap, TextAlign, TextDecorationLine,
    TextOrientation, TextOverflow, TextSecurity, TextTransform, TextWrapMode, TextWrapStyle,
    WhiteSpaceCollapse, WordBreak, WritingMode,
};
pub use transform::{
    Perspective, Rotate, Scale, TransformBox, TransformFunction, TransformList, TransformOrigin,
    TransformStyle3D, Translate,
};
pub use ui::{
    Appearance, BorderCollapse, BoxDecorationBreak, BoxDirection, BoxSizing, CaptionSide, Cursor,
    EmptyCells, ListStylePosition, ObjectFit, PointerEvents, PrintColorAdjust, Resize,
    RtlOrdering, TableLayout, UserDrag, UserModify, UserSelect, VerticalAlign,
};
