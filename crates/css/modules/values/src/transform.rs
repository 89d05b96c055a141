//! Transform functions and the individual transform properties.
//! Spec: <https://www.w3.org/TR/css-transforms-2/>

use crate::length::LengthPercentage;
use smallvec::SmallVec;

/// One computed `<transform-function>`. Angles are in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransformFunction {
    Translate(LengthPercentage, LengthPercentage, f32),
    Scale(f32, f32, f32),
    Rotate(f32),
    Rotate3d(f32, f32, f32, f32),
    Skew(f32, f32),
    Perspective(Option<f32>),
    Matrix([f32; 6]),
    Matrix3d([f32; 16]),
}

/// Computed `transform`; empty means `none`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransformList(pub SmallVec<TransformFunction, 2>);

impl TransformList {
    #[inline]
    #[must_use]
    pub fn is_none(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn push(&mut self, function: TransformFunction) {
        self.0.push(function);
    }
}

/// Computed `transform-origin`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformOrigin {
    pub x: LengthPercentage,
    pub y: LengthPercentage,
    pub z: f32,
}

impl Default for TransformOrigin {
    #[inline]
    fn default() -> Self {
        Self {
            x: LengthPercentage::Percentage(50.0),
            y: LengthPercentage::Percentage(50.0),
            z: 0.0,
        }
    }
}

/// Computed `transform-box`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TransformBox {
    ContentBox,
    #[default]
    ViewBox,
    BorderBox,
    FillBox,
    StrokeBox,
}

/// Computed `transform-style`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TransformStyle3D {
    #[default]
    Flat,
    Preserve3D,
}

/// Computed `rotate`; `None` is the keyword `none`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Rotate {
    #[default]
    None,
    Angle {
        x: f32,
        y: f32,
        z: f32,
        degrees: f32,
    },
}

/// Computed `scale`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Scale {
    #[default]
    None,
    Factors(f32, f32, f32),
}

/// Computed `translate`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Translate {
    #[default]
    None,
    Offset(LengthPercentage, LengthPercentage, f32),
}

/// Computed `perspective`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Perspective {
    #[default]
    None,
    Length(f32),
}

impl Perspective {
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }
}
