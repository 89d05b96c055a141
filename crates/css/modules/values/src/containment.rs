//! Containment and container queries.
//! Spec: <https://www.w3.org/TR/css-contain-2/>
//! Spec: <https://www.w3.org/TR/css-contain-3/#container-type>

use bitflags::bitflags;

bitflags! {
    /// Computed `contain`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Contain: u8 {
        const SIZE = 1 << 0;
        const INLINE_SIZE = 1 << 1;
        const LAYOUT = 1 << 2;
        const STYLE = 1 << 3;
        const PAINT = 1 << 4;
        /// `contain: strict`.
        const STRICT = Self::SIZE.bits() | Self::LAYOUT.bits() | Self::STYLE.bits() | Self::PAINT.bits();
        /// `contain: content`.
        const CONTENT = Self::LAYOUT.bits() | Self::STYLE.bits() | Self::PAINT.bits();
    }
}

impl Default for Contain {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

/// Computed `container-type`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ContainerType {
    #[default]
    Normal,
    Size,
    InlineSize,
}

impl ContainerType {
    /// Containment implied by establishing a size container.
    #[inline]
    #[must_use]
    pub const fn implied_containment(self) -> Contain {
        match self {
            Self::Normal => Contain::empty(),
            Self::Size => Contain::STYLE.union(Contain::SIZE),
            Self::InlineSize => Contain::STYLE.union(Contain::INLINE_SIZE),
        }
    }
}

/// Computed `content-visibility`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ContentVisibility {
    #[default]
    Visible,
    Auto,
    Hidden,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_containers_imply_style_containment() {
        assert_eq!(ContainerType::Normal.implied_containment(), Contain::empty());
        assert!(ContainerType::Size.implied_containment().contains(Contain::STYLE | Contain::SIZE));
        assert!(
            ContainerType::InlineSize
                .implied_containment()
                .contains(Contain::STYLE | Contain::INLINE_SIZE)
        );
        assert!(!ContainerType::InlineSize.implied_containment().contains(Contain::SIZE));
    }
}
