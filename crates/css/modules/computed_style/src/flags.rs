//! Flag words stored inline in every style.
//!
//! Both words are plain `Copy` structs of narrow enums and bits. They are
//! never shared; copying one is a handful of bytes.

use crate::pseudo::{PseudoBits, PseudoElementType};
use bitflags::bitflags;
use css_values::{
    BorderCollapse, BoxDirection, CaptionSide, Clear, Cursor, Direction, Display, EmptyCells,
    Float, ListStylePosition, Overflow, PointerEvents, Position, PrintColorAdjust, RtlOrdering,
    TextAlign, TextDecorationLine, TextOrientation, TextTransform, TextWrapMode, TextWrapStyle,
    UnicodeBidi, Visibility, WhiteSpaceCollapse, WritingMode,
};

/// Link state of the closest ancestor link, used for `:visited` colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InsideLink {
    #[default]
    NotInside,
    InsideUnvisited,
    InsideVisited,
}

/// Inherited properties that fit in a few bits each.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct InheritedFlags {
    pub writing_mode: WritingMode,
    pub direction: Direction,
    pub text_orientation: TextOrientation,
    pub white_space_collapse: WhiteSpaceCollapse,
    pub text_wrap_mode: TextWrapMode,
    pub text_wrap_style: TextWrapStyle,
    pub text_align: TextAlign,
    pub text_transform: TextTransform,
    pub text_decoration_line_in_effect: TextDecorationLine,
    pub pointer_events: PointerEvents,
    pub visibility: Visibility,
    pub cursor: Cursor,
    pub list_style_position: ListStylePosition,
    pub empty_cells: EmptyCells,
    pub border_collapse: BorderCollapse,
    pub caption_side: CaptionSide,
    pub box_direction: BoxDirection,
    pub rtl_ordering: RtlOrdering,
    pub print_color_adjust: PrintColorAdjust,
    pub inside_link: InsideLink,
    /// Set when `color` was given explicitly rather than inherited.
    pub has_explicitly_set_color: bool,
}

bitflags! {
    /// Single-bit non-inherited state.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct NonInheritedState: u16 {
        const USES_VIEWPORT_UNITS = 1 << 0;
        const USES_CONTAINER_UNITS = 1 << 1;
        const USES_TREE_COUNTING_FUNCTIONS = 1 << 2;
        const HAS_EXPLICITLY_INHERITED_PROPERTIES = 1 << 3;
        const DISALLOWS_FAST_PATH_INHERITANCE = 1 << 4;
        const EMPTY_STATE = 1 << 5;
        const FIRST_CHILD_STATE = 1 << 6;
        const LAST_CHILD_STATE = 1 << 7;
        const IS_LINK = 1 << 8;

        /// Bits that describe the computed values rather than the element's
        /// position in the tree. These travel with `copy_non_inherited_from`.
        const STYLE_DATA = Self::USES_VIEWPORT_UNITS.bits()
            | Self::USES_CONTAINER_UNITS.bits()
            | Self::USES_TREE_COUNTING_FUNCTIONS.bits()
            | Self::HAS_EXPLICITLY_INHERITED_PROPERTIES.bits()
            | Self::DISALLOWS_FAST_PATH_INHERITANCE.bits();
    }
}

impl Default for NonInheritedState {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

/// Non-inherited properties and per-element state that fit in a few bits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NonInheritedFlags {
    pub effective_display: Display,
    pub original_display: Display,
    pub overflow_x: Overflow,
    pub overflow_y: Overflow,
    pub clear: Clear,
    pub position: Position,
    pub unicode_bidi: UnicodeBidi,
    pub floating: Float,
    pub text_decoration_line: TextDecorationLine,
    pub state: NonInheritedState,
    /// Set on the style of a pseudo-element itself.
    pub pseudo_element_type: Option<PseudoElementType>,
    /// Pseudo-elements the element has matching rules for.
    pub pseudo_bits: PseudoBits,
}

const _: () = assert!(size_of::<InheritedFlags>() <= 24);
const _: () = assert!(size_of::<NonInheritedFlags>() <= 16);

impl InheritedFlags {
    /// Copy of `self` with the listed fast-path fields reset, for comparing
    /// the remaining fields.
    #[inline]
    #[must_use]
    pub(crate) fn without(mut self, visibility: bool, explicitly_set_color: bool) -> Self {
        if visibility {
            self.visibility = Visibility::default();
        }
        if explicitly_set_color {
            self.has_explicitly_set_color = false;
        }
        self
    }
}

impl NonInheritedFlags {
    /// Copy the computed-value portion of `other`, keeping this element's
    /// tree state, link bit and pseudo-element data.
    #[inline]
    pub fn copy_non_inherited_from(&mut self, other: &Self) {
        self.effective_display = other.effective_display;
        self.original_display = other.original_display;
        self.overflow_x = other.overflow_x;
        self.overflow_y = other.overflow_y;
        self.clear = other.clear;
        self.position = other.position;
        self.unicode_bidi = other.unicode_bidi;
        self.floating = other.floating;
        self.text_decoration_line = other.text_decoration_line;
        self.state = (self.state - NonInheritedState::STYLE_DATA)
            | (other.state & NonInheritedState::STYLE_DATA);
    }

    #[inline]
    pub fn has_pseudo_style(&self, kind: PseudoElementType) -> bool {
        self.pseudo_bits.contains(kind.bit())
    }

    #[inline]
    pub fn set_state(&mut self, bit: NonInheritedState, value: bool) {
        self.state.set(bit, value);
    }

    #[inline]
    pub fn state(&self, bit: NonInheritedState) -> bool {
        self.state.contains(bit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_words_stay_compact() {
        assert!(size_of::<InheritedFlags>() <= 24);
        assert!(size_of::<NonInheritedFlags>() <= 16);
    }

    #[test]
    fn copy_non_inherited_keeps_tree_state() {
        let mut target = NonInheritedFlags::default();
        target.set_state(NonInheritedState::FIRST_CHILD_STATE, true);
        target.set_state(NonInheritedState::IS_LINK, true);
        target.pseudo_element_type = Some(PseudoElementType::Before);

        let mut source = NonInheritedFlags {
            effective_display: Display::Flex,
            original_display: Display::Flex,
            position: Position::Absolute,
            ..NonInheritedFlags::default()
        };
        source.set_state(NonInheritedState::USES_VIEWPORT_UNITS, true);
        source.set_state(NonInheritedState::LAST_CHILD_STATE, true);

        target.copy_non_inherited_from(&source);
        assert_eq!(target.effective_display, Display::Flex);
        assert_eq!(target.position, Position::Absolute);
        assert!(target.state(NonInheritedState::USES_VIEWPORT_UNITS));
        assert!(target.state(NonInheritedState::FIRST_CHILD_STATE));
        assert!(target.state(NonInheritedState::IS_LINK));
        assert!(!target.state(NonInheritedState::LAST_CHILD_STATE));
        assert_eq!(target.pseudo_element_type, Some(PseudoElementType::Before));
    }

    #[test]
    fn masking_fast_path_fields() {
        let visible = InheritedFlags::default();
        let hidden = InheritedFlags {
            visibility: Visibility::Hidden,
            has_explicitly_set_color: true,
            ..InheritedFlags::default()
        };
        assert_ne!(visible, hidden);
        assert_eq!(visible.without(true, true), hidden.without(true, true));
        assert_ne!(visible.without(true, false), hidden.without(true, false));
    }
}
