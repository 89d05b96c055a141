//! Computed colors.
//! Spec: <https://www.w3.org/TR/css-color-4/#resolving-color-values>

/// An absolute RGBA color, 8 bits per channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Color {
    /// Fully transparent black, the initial value of `background-color`.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black, the initial value of `color`.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    #[inline]
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Opaque color from three channels.
    #[inline]
    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red, green, blue, 255)
    }

    /// True when the alpha channel is non-zero.
    #[inline]
    #[must_use]
    pub const fn is_visible(self) -> bool {
        self.alpha != 0
    }

    #[inline]
    #[must_use]
    pub const fn is_opaque(self) -> bool {
        self.alpha == 255
    }
}

/// A computed `<color>` that may still refer to `currentcolor`.
///
/// `currentcolor` survives computation so that descendants which inherit the
/// value pick up their own `color`, not the ancestor's.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StyleColor {
    #[default]
    CurrentColor,
    Absolute(Color),
}

impl StyleColor {
    /// Resolve against the element's `color` value.
    #[inline]
    #[must_use]
    pub const fn resolve(self, current_color: Color) -> Color {
        match self {
            Self::CurrentColor => current_color,
            Self::Absolute(color) => color,
        }
    }

}

impl From<Color> for StyleColor {
    #[inline]
    fn from(color: Color) -> Self {
        Self::Absolute(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_color_resolves_against_the_element_color() {
        let red = Color::rgb(255, 0, 0);
        assert_eq!(StyleColor::CurrentColor.resolve(red), red);
        assert_eq!(StyleColor::Absolute(Color::WHITE).resolve(red), Color::WHITE);
    }

    #[test]
    fn visibility_and_opacity_follow_alpha() {
        assert!(!Color::TRANSPARENT.is_visible());
        assert!(Color::BLACK.is_opaque());
        assert!(Color::new(1, 2, 3, 10).is_visible());
        assert!(!Color::new(1, 2, 3, 10).is_opaque());
    }
}
