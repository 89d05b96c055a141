//! Pseudo-element identifiers and the per-element pseudo-style cache.
//! Spec: <https://www.w3.org/TR/css-pseudo-4/>

use crate::data_ref::set_field;
use crate::style::ComputedStyle;
use bitflags::bitflags;
use std::collections::HashMap;

/// Pseudo-element kinds a style can describe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PseudoElementType {
    FirstLine,
    FirstLetter,
    GrammarError,
    Highlight,
    Marker,
    Before,
    After,
    Selection,
    Backdrop,
    SpellingError,
    TargetText,
    ViewTransition,
    ViewTransitionGroup,
    ViewTransitionImagePair,
    ViewTransitionOld,
    ViewTransitionNew,
    /// Engine-internal scrollbar parts; never reported through `pseudo_bits`.
    Scrollbar,
    ScrollbarThumb,
    ScrollbarTrack,
    Resizer,
}

bitflags! {
    /// Set of public pseudo-element kinds an element has rules for.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct PseudoBits: u16 {
        const FIRST_LINE = 1 << 0;
        const FIRST_LETTER = 1 << 1;
        const GRAMMAR_ERROR = 1 << 2;
        const HIGHLIGHT = 1 << 3;
        const MARKER = 1 << 4;
        const BEFORE = 1 << 5;
        const AFTER = 1 << 6;
        const SELECTION = 1 << 7;
        const BACKDROP = 1 << 8;
        const SPELLING_ERROR = 1 << 9;
        const TARGET_TEXT = 1 << 10;
        const VIEW_TRANSITION = 1 << 11;
        const VIEW_TRANSITION_GROUP = 1 << 12;
        const VIEW_TRANSITION_IMAGE_PAIR = 1 << 13;
        const VIEW_TRANSITION_OLD = 1 << 14;
        const VIEW_TRANSITION_NEW = 1 << 15;
    }
}

impl Default for PseudoBits {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl PseudoElementType {
    /// The bit for this kind, empty for internal kinds.
    #[inline]
    #[must_use]
    pub const fn bit(self) -> PseudoBits {
        match self {
            Self::FirstLine => PseudoBits::FIRST_LINE,
            Self::FirstLetter => PseudoBits::FIRST_LETTER,
            Self::GrammarError => PseudoBits::GRAMMAR_ERROR,
            Self::Highlight => PseudoBits::HIGHLIGHT,
            Self::Marker => PseudoBits::MARKER,
            Self::Before => PseudoBits::BEFORE,
            Self::After => PseudoBits::AFTER,
            Self::Selection => PseudoBits::SELECTION,
            Self::Backdrop => PseudoBits::BACKDROP,
            Self::SpellingError => PseudoBits::SPELLING_ERROR,
            Self::TargetText => PseudoBits::TARGET_TEXT,
            Self::ViewTransition => PseudoBits::VIEW_TRANSITION,
            Self::ViewTransitionGroup => PseudoBits::VIEW_TRANSITION_GROUP,
            Self::ViewTransitionImagePair => PseudoBits::VIEW_TRANSITION_IMAGE_PAIR,
            Self::ViewTransitionOld => PseudoBits::VIEW_TRANSITION_OLD,
            Self::ViewTransitionNew => PseudoBits::VIEW_TRANSITION_NEW,
            Self::Scrollbar | Self::ScrollbarThumb | Self::ScrollbarTrack | Self::Resizer => {
                PseudoBits::empty()
            }
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_public(self) -> bool {
        !self.bit().is_empty()
    }

    /// Kinds that may take a name argument, e.g. `::highlight(name)`.
    #[inline]
    #[must_use]
    pub const fn takes_name_argument(self) -> bool {
        matches!(
            self,
            Self::Highlight
                | Self::ViewTransitionGroup
                | Self::ViewTransitionImagePair
                | Self::ViewTransitionOld
                | Self::ViewTransitionNew
        )
    }
}

/// Key of the pseudo-style cache.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PseudoElementIdentifier {
    pub kind: PseudoElementType,
    pub name_argument: Option<String>,
}

impl PseudoElementIdentifier {
    #[inline]
    #[must_use]
    pub const fn new(kind: PseudoElementType) -> Self {
        Self {
            kind,
            name_argument: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn with_name(kind: PseudoElementType, name: impl Into<String>) -> Self {
        debug_assert!(
            kind.takes_name_argument(),
            "{kind:?} does not take a name argument"
        );
        Self {
            kind,
            name_argument: Some(name.into()),
        }
    }
}

/// Styles of an element's pseudo-elements, each exclusively owned.
#[derive(Debug, Default)]
pub struct PseudoStyleCache {
    styles: HashMap<PseudoElementIdentifier, Box<ComputedStyle>>,
}

impl PseudoStyleCache {
    #[inline]
    pub fn get(&self, key: &PseudoElementIdentifier) -> Option<&ComputedStyle> {
        self.styles.get(key).map(AsRef::as_ref)
    }

    #[inline]
    pub fn get_mut(&mut self, key: &PseudoElementIdentifier) -> Option<&mut ComputedStyle> {
        self.styles.get_mut(key).map(AsMut::as_mut)
    }

    /// Cache `style` under its own pseudo-element identifier.
    ///
    /// Each key is inserted at most once; a second insertion under the same
    /// key is a caller bug and keeps the first entry.
    ///
    /// # Returns
    /// The cached style, or `None` when `style` is not a pseudo-element style.
    pub fn insert(&mut self, style: ComputedStyle) -> Option<&ComputedStyle> {
        let key = style.pseudo_element_identifier();
        debug_assert!(key.is_some(), "cached style must describe a pseudo-element");
        let key = key?;
        debug_assert!(
            !self.styles.contains_key(&key),
            "pseudo-style cached twice for {key:?}"
        );
        tracing::trace!(key = ?key, "caching pseudo-element style");
        let cached = self.styles.entry(key).or_insert_with(|| Box::new(style));
        Some(&**cached)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PseudoElementIdentifier, &ComputedStyle)> {
        self.styles.iter().map(|(key, style)| (key, style.as_ref()))
    }
}

impl ComputedStyle {
    /// Identifier of the pseudo-element this style describes, if any.
    pub fn pseudo_element_identifier(&self) -> Option<PseudoElementIdentifier> {
        let kind = self.non_inherited_flags.pseudo_element_type?;
        Some(PseudoElementIdentifier {
            kind,
            name_argument: self.rare.pseudo_element_name_argument.clone(),
        })
    }

    #[inline]
    pub fn pseudo_element_type(&self) -> Option<PseudoElementType> {
        self.non_inherited_flags.pseudo_element_type
    }

    #[inline]
    pub fn set_pseudo_element_type(&mut self, kind: Option<PseudoElementType>) {
        self.non_inherited_flags.pseudo_element_type = kind;
    }

    #[inline]
    pub fn pseudo_element_name_argument(&self) -> Option<&str> {
        self.rare.pseudo_element_name_argument.as_deref()
    }

    pub fn set_pseudo_element_name_argument(&mut self, name: Option<String>) -> bool {
        set_field(
            &mut self.rare,
            |rare| &rare.pseudo_element_name_argument,
            |rare| &mut rare.pseudo_element_name_argument,
            name,
        )
    }

    /// Make this style describe the pseudo-element `identifier`.
    pub fn set_pseudo_element_identifier(&mut self, identifier: Option<PseudoElementIdentifier>) {
        let (kind, name_argument) = identifier.map_or((None, None), |identifier| {
            (Some(identifier.kind), identifier.name_argument)
        });
        self.set_pseudo_element_type(kind);
        self.set_pseudo_element_name_argument(name_argument);
    }

    #[inline]
    pub fn cached_pseudo_styles(&self) -> Option<&PseudoStyleCache> {
        self.cached_pseudo_styles.as_deref()
    }

    #[inline]
    pub fn cached_pseudo_style(&self, key: &PseudoElementIdentifier) -> Option<&ComputedStyle> {
        self.cached_pseudo_styles.as_ref()?.get(key)
    }

    /// Attach `pseudo` to this style's cache, creating the cache on first use.
    pub fn add_cached_pseudo_style(&mut self, pseudo: ComputedStyle) -> Option<&ComputedStyle> {
        self.cached_pseudo_styles
            .get_or_insert_with(Box::default)
            .insert(pseudo)
    }

    /// Deep-copy every cached pseudo-style of `other` into this style.
    pub fn copy_pseudo_elements_from(&mut self, other: &Self) {
        let Some(cache) = other.cached_pseudo_styles.as_deref() else {
            return;
        };
        for (_, pseudo) in cache.iter() {
            self.add_cached_pseudo_style(pseudo.clone_including_pseudo_elements());
        }
    }

    /// Like `clone`, plus a recursive copy of the pseudo-style cache.
    #[must_use]
    pub fn clone_including_pseudo_elements(&self) -> Self {
        let mut style = self.clone();
        style.copy_pseudo_elements_from(self);
        style
    }

    #[inline]
    pub fn has_pseudo_style(&self, kind: PseudoElementType) -> bool {
        debug_assert!(kind.is_public(), "internal pseudo-elements are not tracked");
        self.non_inherited_flags.has_pseudo_style(kind)
    }

    #[inline]
    pub fn has_any_public_pseudo_styles(&self) -> bool {
        !self.non_inherited_flags.pseudo_bits.is_empty()
    }

    #[inline]
    pub fn set_has_pseudo_styles(&mut self, bits: PseudoBits) {
        self.non_inherited_flags.pseudo_bits |= bits;
    }

    #[inline]
    pub fn pseudo_bits(&self) -> PseudoBits {
        self.non_inherited_flags.pseudo_bits
    }

    #[inline]
    pub fn copy_pseudo_element_bits_from(&mut self, other: &Self) {
        self.non_inherited_flags.pseudo_bits = other.non_inherited_flags.pseudo_bits;
    }
}
