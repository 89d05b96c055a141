//! Box and text shadows.
//! Spec: <https://www.w3.org/TR/css-backgrounds-3/#box-shadow>

use crate::color::StyleColor;
use smallvec::SmallVec;

/// One shadow in a `box-shadow` or `text-shadow` list.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Shadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
    pub spread: f32,
    pub color: StyleColor,
    pub inset: bool,
}

/// A shadow list; empty means `none`.
pub type Shadows = SmallVec<Shadow, 1>;
