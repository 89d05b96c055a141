//! Box alignment keywords.
//! Spec: <https://www.w3.org/TR/css-align-3/>

/// Self/item alignment used by `align-items`, `align-self`, `justify-items`
/// and `justify-self`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ItemPosition {
    #[default]
    Auto,
    Normal,
    Stretch,
    Baseline,
    LastBaseline,
    Legacy,
    Position(SelfPosition),
}

/// `<self-position>` keywords.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SelfPosition {
    #[default]
    Start,
    End,
    Center,
    SelfStart,
    SelfEnd,
    FlexStart,
    FlexEnd,
}

/// Content distribution used by `align-content` and `justify-content`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ContentDistribution {
    #[default]
    Normal,
    Start,
    End,
    Center,
    FlexStart,
    FlexEnd,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
    Stretch,
}
