//! Background fill layers.
//! Spec: <https://www.w3.org/TR/css-backgrounds-3/#backgrounds>

use crate::length::LengthPercentage;
use smallvec::SmallVec;

/// Computed `background-repeat` for one axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BackgroundRepeat {
    #[default]
    Repeat,
    NoRepeat,
    Space,
    Round,
}

/// Computed `background-attachment`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BackgroundAttachment {
    #[default]
    Scroll,
    Fixed,
    Local,
}

/// Computed `background-clip` / `background-origin`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BackgroundClip {
    #[default]
    BorderBox,
    PaddingBox,
    ContentBox,
    Text,
}

/// Computed `background-size`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum BackgroundSize {
    #[default]
    Auto,
    Cover,
    Contain,
    Explicit {
        width: Option<LengthPercentage>,
        height: Option<LengthPercentage>,
    },
}

/// One background layer.
#[derive(Clone, Debug, PartialEq)]
pub struct FillLayer {
    /// Resolved image URL, `None` for `background-image: none`.
    pub image: Option<String>,
    pub repeat_x: BackgroundRepeat,
    pub repeat_y: BackgroundRepeat,
    pub attachment: BackgroundAttachment,
    pub clip: BackgroundClip,
    pub origin: BackgroundClip,
    pub position_x: LengthPercentage,
    pub position_y: LengthPercentage,
    pub size: BackgroundSize,
}

impl Default for FillLayer {
    #[inline]
    fn default() -> Self {
        Self {
            image: None,
            repeat_x: BackgroundRepeat::Repeat,
            repeat_y: BackgroundRepeat::Repeat,
            attachment: BackgroundAttachment::Scroll,
            clip: BackgroundClip::BorderBox,
            origin: BackgroundClip::PaddingBox,
            position_x: LengthPercentage::Percentage(0.0),
            position_y: LengthPercentage::Percentage(0.0),
            size: BackgroundSize::Auto,
        }
    }
}

impl FillLayer {
    #[inline]
    #[must_use]
    pub const fn has_image(&self) -> bool {
        self.image.is_some()
    }
}

/// The layer list; almost always a single layer, so it is stored inline.
#[derive(Clone, Debug, PartialEq)]
pub struct FillLayers(pub SmallVec<FillLayer, 1>);

impl Default for FillLayers {
    #[inline]
    fn default() -> Self {
        let mut layers = SmallVec::new();
        layers.push(FillLayer::default());
        Self(layers)
    }
}

impl FillLayers {
    #[inline]
    #[must_use]
    pub fn has_image(&self) -> bool {
        self.0.iter().any(FillLayer::has_image)
    }

    #[inline]
    #[must_use]
    pub fn has_fixed_image(&self) -> bool {
        self.0
            .iter()
            .any(|layer| layer.has_image() && layer.attachment == BackgroundAttachment::Fixed)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn first_mut(&mut self) -> Option<&mut FillLayer> {
        self.0.first_mut()
    }
}
