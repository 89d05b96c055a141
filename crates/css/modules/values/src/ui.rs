//! Interaction, table and box-model keywords.
//! Spec: <https://www.w3.org/TR/css-ui-4/>

/// Computed `pointer-events`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PointerEvents {
    #[default]
    Auto,
    None,
    VisiblePainted,
    VisibleFill,
    VisibleStroke,
    Visible,
    Painted,
    Fill,
    Stroke,
    All,
}

/// Computed `cursor` keyword. Image cursors are not modelled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cursor {
    #[default]
    Auto,
    Default,
    None,
    Pointer,
    Text,
    Wait,
    Move,
    NotAllowed,
    Grab,
    Grabbing,
}

/// Computed `user-select`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum UserSelect {
    None,
    #[default]
    Text,
    All,
}

/// Computed `-webkit-user-modify`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum UserModify {
    #[default]
    ReadOnly,
    ReadWrite,
    ReadWritePlaintextOnly,
}

/// Computed `-webkit-user-drag`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum UserDrag {
    #[default]
    Auto,
    None,
    Element,
}

/// Computed `resize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Resize {
    #[default]
    None,
    Both,
    Horizontal,
    Vertical,
}

/// Computed `appearance`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Appearance {
    #[default]
    None,
    Auto,
    Button,
    Checkbox,
    Radio,
    TextField,
    Menulist,
    SearchField,
}

/// Computed `list-style-position`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ListStylePosition {
    #[default]
    Outside,
    Inside,
}

/// Computed `empty-cells`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EmptyCells {
    #[default]
    Show,
    Hide,
}

/// Computed `border-collapse`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BorderCollapse {
    #[default]
    Separate,
    Collapse,
}

/// Computed `caption-side`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CaptionSide {
    #[default]
    Top,
    Bottom,
}

/// Computed `table-layout`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TableLayout {
    #[default]
    Auto,
    Fixed,
}

/// Computed `-webkit-box-direction`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BoxDirection {
    #[default]
    Normal,
    Reverse,
}

/// Computed `-webkit-rtl-ordering`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RtlOrdering {
    #[default]
    Logical,
    Visual,
}

/// Computed `print-color-adjust`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PrintColorAdjust {
    #[default]
    Economy,
    Exact,
}

/// Computed `box-sizing`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BoxSizing {
    #[default]
    ContentBox,
    BorderBox,
}

/// Computed `box-decoration-break`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BoxDecorationBreak {
    #[default]
    Slice,
    Clone,
}

/// Computed `vertical-align`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum VerticalAlign {
    #[default]
    Baseline,
    Sub,
    Super,
    Top,
    TextTop,
    Middle,
    Bottom,
    TextBottom,
    Length(f32),
}

/// Computed `object-fit`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ObjectFit {
    #[default]
    Fill,
    Contain,
    Cover,
    None,
    ScaleDown,
}
