//! Inheriting from a parent style.
//! Spec: <https://www.w3.org/TR/css-cascade-5/#inheriting>
//!
//! Inheritance shares the parent's inherited groups instead of copying them.
//! The fast path copies a handful of properties that no other cascade step
//! reads, and is only valid when nothing else on the child was inherited
//! explicitly.

use crate::config::{FastPathPolicy, FastPathProperty};
use crate::data_ref::DataRef;
use crate::style::ComputedStyle;

impl ComputedStyle {
    /// Share every inherited group of `parent` and copy its inherited flags.
    ///
    /// The SVG group mixes inherited and non-inherited properties; when it
    /// differs from the parent's only its inherited half is taken over.
    pub fn inherit_from(&mut self, parent: &Self) {
        tracing::trace!("inheriting all inherited properties");
        self.rare_inherited = DataRef::clone(&parent.rare_inherited);
        self.inherited = DataRef::clone(&parent.inherited);
        self.inherited_flags = parent.inherited_flags;

        if self.svg != parent.svg {
            self.svg.access().inherit_from(&parent.svg);
        }
    }

    /// Full inherit that keeps this style's own inherited custom properties.
    pub fn inherit_ignoring_custom_properties_from(&mut self, parent: &Self) {
        let custom_properties = DataRef::clone(&self.rare_inherited.custom_properties);
        self.inherit_from(parent);
        if !self.rare_inherited.custom_properties.ptr_eq(&custom_properties) {
            self.rare_inherited.access().custom_properties = custom_properties;
        }
    }

    #[inline]
    pub fn inherit_unicode_bidi_from(&mut self, parent: &Self) {
        self.non_inherited_flags.unicode_bidi = parent.non_inherited_flags.unicode_bidi;
    }

    /// Share the parent's multi-column properties, used for `column-span`
    /// boxes that take their columns from the enclosing multicol container.
    pub fn inherit_column_properties_from(&mut self, parent: &Self) {
        if self.misc.multi_col.ptr_eq(&parent.misc.multi_col) {
            return;
        }
        self.misc.access().multi_col = DataRef::clone(&parent.misc.multi_col);
    }

    /// Fast-path inherit with the default property table.
    #[inline]
    pub fn fast_path_inherit_from(&mut self, parent: &Self) {
        self.fast_path_inherit_from_with_policy(parent, FastPathPolicy::default());
    }

    /// Copy the properties in `policy` from `parent`.
    ///
    /// Must not be called on a style with
    /// [`disallows_fast_path_inheritance`](Self::disallows_fast_path_inheritance)
    /// set.
    pub fn fast_path_inherit_from_with_policy(&mut self, parent: &Self, policy: FastPathPolicy) {
        debug_assert!(
            !self.disallows_fast_path_inheritance(),
            "fast-path inheritance on a style that disallows it"
        );
        tracing::trace!(?policy, "fast-path inheriting");

        if policy.contains(FastPathProperty::Visibility) {
            self.inherited_flags.visibility = parent.inherited_flags.visibility;
        }
        if policy.contains(FastPathProperty::ExplicitlySetColor) {
            self.inherited_flags.has_explicitly_set_color =
                parent.inherited_flags.has_explicitly_set_color;
        }

        if self.inherited.ptr_eq(&parent.inherited) {
            return;
        }
        if self
            .inherited
            .non_fast_path_inherited_equal(&parent.inherited, policy)
        {
            self.inherited = DataRef::clone(&parent.inherited);
            return;
        }
        self.inherited
            .access()
            .fast_path_inherit_from(&parent.inherited, policy);
    }

    /// Share every non-inherited group of `other` and copy the style-data bits
    /// of its non-inherited flags. Tree state and pseudo-element bits stay.
    pub fn copy_non_inherited_from(&mut self, other: &Self) {
        self.box_data = DataRef::clone(&other.box_data);
        self.background = DataRef::clone(&other.background);
        self.surround = DataRef::clone(&other.surround);
        self.misc = DataRef::clone(&other.misc);
        self.rare = DataRef::clone(&other.rare);
        self.non_inherited_flags
            .copy_non_inherited_from(&other.non_inherited_flags);

        if self.svg != other.svg {
            self.svg.access().copy_non_inherited_from(&other.svg);
        }
    }

    /// Copy `content` from `other` when it has any.
    pub fn copy_content_from(&mut self, other: &Self) {
        if !other.misc.content.has_content() {
            return;
        }
        let content = other.misc.content.clone();
        self.set_content(content);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::NonInheritedState;
    use css_values::{
        Color, ColumnSpan, ContentData, ContentItem, Display, FillRule, LineHeight, Position,
        Size, UnicodeBidi, Visibility,
    };

    fn styled_parent() -> ComputedStyle {
        let mut parent = ComputedStyle::default();
        parent.set_color(Color::WHITE);
        parent.set_visibility(Visibility::Hidden);
        parent.set_width(Size::Fixed(50.0));
        parent.set_fill_rule(FillRule::EvenOdd);
        parent
    }

    #[test]
    fn full_inherit_shares_inherited_groups_only() {
        let parent = styled_parent();
        let mut child = ComputedStyle::default();
        child.inherit_from(&parent);

        assert!(child.inherited.ptr_eq(&parent.inherited));
        assert!(child.rare_inherited.ptr_eq(&parent.rare_inherited));
        assert_eq!(child.visibility(), Visibility::Hidden);
        assert_eq!(child.fill_rule(), FillRule::EvenOdd);
        assert_eq!(child.width(), Size::Auto);
        assert!(child.inherited_equal(&parent));
    }

    #[test]
    fn ignoring_custom_properties_keeps_own_map() {
        let mut parent = ComputedStyle::default();
        parent.set_custom_property_value("--theme", "dark", true);
        let mut child = ComputedStyle::default();
        child.set_custom_property_value("--theme", "light", true);
        let own = DataRef::clone(child.inherited_custom_properties());

        child.inherit_ignoring_custom_properties_from(&parent);
        assert!(child.inherited_custom_properties().ptr_eq(&own));
        assert_eq!(child.custom_property_value("--theme"), Some("light"));
        assert_eq!(parent.custom_property_value("--theme"), Some("dark"));
    }

    #[test]
    fn narrow_inherits_copy_one_thing() {
        let mut parent = ComputedStyle::default();
        parent.set_unicode_bidi(UnicodeBidi::Isolate);
        parent.set_column_span(ColumnSpan::All);
        parent.set_color(Color::WHITE);

        let mut child = ComputedStyle::default();
        child.inherit_unicode_bidi_from(&parent);
        child.inherit_column_properties_from(&parent);
        assert_eq!(child.unicode_bidi(), UnicodeBidi::Isolate);
        assert!(child.misc.multi_col.ptr_eq(&parent.misc.multi_col));
        assert_eq!(child.color(), Color::BLACK);
    }

    #[test]
    fn fast_path_rebinds_when_the_rest_matches() {
        let parent = styled_parent();
        let mut child = ComputedStyle::default();
        child.fast_path_inherit_from(&parent);

        assert!(child.inherited.ptr_eq(&parent.inherited));
        assert_eq!(child.visibility(), Visibility::Hidden);
        assert_eq!(child.display(), Display::Inline);
    }

    #[test]
    fn fast_path_copies_fields_when_the_rest_differs() {
        let parent = styled_parent();
        let mut child = ComputedStyle::default();
        child.set_line_height(LineHeight::Number(1.5));
        child.fast_path_inherit_from(&parent);

        assert!(!child.inherited.ptr_eq(&parent.inherited));
        assert_eq!(child.color(), Color::WHITE);
        assert_eq!(child.line_height(), LineHeight::Number(1.5));
    }

    #[test]
    fn fast_path_honours_a_narrower_policy() {
        let parent = styled_parent();
        let mut child = ComputedStyle::default();
        child.set_line_height(LineHeight::Number(2.0));
        child.fast_path_inherit_from_with_policy(
            &parent,
            FastPathPolicy::empty().with(FastPathProperty::Visibility),
        );
        assert_eq!(child.visibility(), Visibility::Hidden);
        assert_eq!(child.color(), Color::BLACK);
    }

    #[test]
    fn copy_non_inherited_keeps_tree_state() {
        let mut source = ComputedStyle::default();
        source.set_position(Position::Absolute);
        source.set_width(Size::Fixed(10.0));
        source.set_uses_viewport_units(true);

        let mut target = ComputedStyle::default();
        target.set_first_child_state(true);
        target.copy_non_inherited_from(&source);

        assert!(target.box_data.ptr_eq(&source.box_data));
        assert_eq!(target.position(), Position::Absolute);
        assert!(target.uses_viewport_units());
        assert!(target.first_child_state());
        assert!(
            !target
                .non_inherited_flags
                .state(NonInheritedState::LAST_CHILD_STATE)
        );
        assert!(!target.non_inherited_equal(&source));
        target.set_first_child_state(false);
        assert!(target.non_inherited_equal(&source));
    }

    #[test]
    fn content_is_copied_only_when_present() {
        let mut target = ComputedStyle::default();
        target.set_content(ContentData::None);
        target.copy_content_from(&ComputedStyle::default());
        assert_eq!(*target.content(), ContentData::None);

        let mut source = ComputedStyle::default();
        source.set_content(ContentData::Items(vec![ContentItem::Text("*".to_owned())]));
        target.copy_content_from(&source);
        assert_eq!(target.content(), source.content());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "fast-path inheritance on a style that disallows it")]
    fn fast_path_inherit_rejects_disallowed_styles() {
        let mut child = ComputedStyle::default();
        child.set_disallows_fast_path_inheritance(true);
        child.fast_path_inherit_from(&styled_parent());
    }
}
