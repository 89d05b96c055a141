//! Font description.
//! Spec: <https://www.w3.org/TR/css-fonts-4/>

use smallvec::SmallVec;

/// Computed `font-style`. Oblique angles are in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
    Oblique(f32),
}

/// Computed `font-weight`, 1..=1000.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FontWeight(pub u16);

impl FontWeight {
    pub const NORMAL: Self = Self(400);
    pub const BOLD: Self = Self(700);

}

impl Default for FontWeight {
    #[inline]
    fn default() -> Self {
        Self::NORMAL
    }
}

/// The computed font properties that together select a font cascade.
#[derive(Clone, Debug, PartialEq)]
pub struct FontDescription {
    pub families: SmallVec<String, 2>,
    /// Computed `font-size` in pixels.
    pub size: f32,
    pub weight: FontWeight,
    pub style: FontStyle,
    /// Computed `font-stretch` as a percentage.
    pub stretch: f32,
    pub small_caps: bool,
}

impl FontDescription {
    /// Initial `font-size` (`medium`).
    pub const MEDIUM_SIZE: f32 = 16.0;
}

impl Default for FontDescription {
    #[inline]
    fn default() -> Self {
        let mut families = SmallVec::new();
        families.push("serif".to_owned());
        Self {
            families,
            size: Self::MEDIUM_SIZE,
            weight: FontWeight::NORMAL,
            style: FontStyle::Normal,
            stretch: 100.0,
            small_caps: false,
        }
    }
}
