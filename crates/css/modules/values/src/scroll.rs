//! Scroll snapping and scroll anchoring keywords.
//! Spec: <https://www.w3.org/TR/css-scroll-snap-1/>
//! Spec: <https://www.w3.org/TR/css-scroll-anchoring-1/>

/// Axis named by `scroll-snap-type`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScrollSnapAxis {
    X,
    Y,
    Block,
    Inline,
    #[default]
    Both,
}

/// Strictness named by `scroll-snap-type`; `None` is the keyword `none`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScrollSnapStrictness {
    #[default]
    None,
    Proximity,
    Mandatory,
}

/// Computed `scroll-snap-type`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScrollSnapType {
    pub axis: ScrollSnapAxis,
    pub strictness: ScrollSnapStrictness,
}

/// Per-axis `scroll-snap-align` keyword.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SnapAlignment {
    #[default]
    None,
    Start,
    End,
    Center,
}

/// Computed `scroll-snap-align`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScrollSnapAlign {
    pub block: SnapAlignment,
    pub inline: SnapAlignment,
}

/// Computed `scroll-snap-stop`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScrollSnapStop {
    #[default]
    Normal,
    Always,
}

/// Computed `overflow-anchor`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OverflowAnchor {
    #[default]
    Auto,
    None,
}
