//! Equality predicates used by style invalidation.
//!
//! Each predicate looks at handle identity before comparing fields, so two
//! styles that share the relevant groups compare in constant time.

use crate::config::{FastPathPolicy, FastPathProperty};
use crate::style::ComputedStyle;

impl PartialEq for ComputedStyle {
    /// Flag words and every group. The pseudo-style cache is not compared.
    fn eq(&self, other: &Self) -> bool {
        self.inherited_flags == other.inherited_flags
            && self.non_inherited_flags == other.non_inherited_flags
            && self.box_data == other.box_data
            && self.background == other.background
            && self.surround == other.surround
            && self.misc == other.misc
            && self.rare == other.rare
            && self.inherited == other.inherited
            && self.rare_inherited == other.rare_inherited
            && self.svg == other.svg
    }
}

impl ComputedStyle {
    /// Every inherited property is equal.
    pub fn inherited_equal(&self, other: &Self) -> bool {
        self.inherited_flags == other.inherited_flags
            && self.inherited == other.inherited
            && (self.svg.ptr_eq(&other.svg) || self.svg.inherited_equal(&other.svg))
            && self.rare_inherited == other.rare_inherited
    }

    /// Every non-inherited property is equal.
    pub fn non_inherited_equal(&self, other: &Self) -> bool {
        self.non_inherited_flags == other.non_inherited_flags
            && self.box_data == other.box_data
            && self.background == other.background
            && self.surround == other.surround
            && self.misc == other.misc
            && self.rare == other.rare
            && (self.svg.ptr_eq(&other.svg) || self.svg.non_inherited_equal(&other.svg))
    }

    #[inline]
    pub fn fast_path_inherited_equal(&self, other: &Self) -> bool {
        self.fast_path_inherited_equal_with_policy(other, FastPathPolicy::default())
    }

    /// The properties in `policy` are equal.
    pub fn fast_path_inherited_equal_with_policy(
        &self,
        other: &Self,
        policy: FastPathPolicy,
    ) -> bool {
        if policy.contains(FastPathProperty::Visibility)
            && self.inherited_flags.visibility != other.inherited_flags.visibility
        {
            return false;
        }
        if policy.contains(FastPathProperty::ExplicitlySetColor)
            && self.inherited_flags.has_explicitly_set_color
                != other.inherited_flags.has_explicitly_set_color
        {
            return false;
        }
        self.inherited.ptr_eq(&other.inherited)
            || self
                .inherited
                .fast_path_inherited_equal(&other.inherited, policy)
    }

    #[inline]
    pub fn non_fast_path_inherited_equal(&self, other: &Self) -> bool {
        self.non_fast_path_inherited_equal_with_policy(other, FastPathPolicy::default())
    }

    /// Every inherited property outside `policy` is equal.
    pub fn non_fast_path_inherited_equal_with_policy(
        &self,
        other: &Self,
        policy: FastPathPolicy,
    ) -> bool {
        let visibility = policy.contains(FastPathProperty::Visibility);
        let explicitly_set_color = policy.contains(FastPathProperty::ExplicitlySetColor);
        if self.inherited_flags.without(visibility, explicitly_set_color)
            != other.inherited_flags.without(visibility, explicitly_set_color)
        {
            return false;
        }
        if !self.inherited.ptr_eq(&other.inherited)
            && !self
                .inherited
                .non_fast_path_inherited_equal(&other.inherited, policy)
        {
            return false;
        }
        self.rare_inherited == other.rare_inherited
            && (self.svg.ptr_eq(&other.svg) || self.svg.inherited_equal(&other.svg))
    }

    /// Non-inherited properties that descendants read while resolving their
    /// own style: `align-items`, `justify-items` and the used appearance.
    pub fn descendant_affecting_non_inherited_properties_equal(&self, other: &Self) -> bool {
        if self.misc.ptr_eq(&other.misc) {
            return true;
        }
        self.misc.align_items == other.misc.align_items
            && self.misc.justify_items == other.misc.justify_items
            && self.misc.used_appearance == other.misc.used_appearance
    }

    /// Borders and backgrounds, consulted when deciding whether a layer can
    /// keep its backing store.
    pub fn border_and_background_equal(&self, other: &Self) -> bool {
        (self.surround.ptr_eq(&other.surround) || self.surround.border == other.surround.border)
            && (self.background.ptr_eq(&other.background)
                || self.background.background_equal(&other.background))
    }

    /// Inputs of container query evaluation.
    pub fn container_type_and_names_equal(&self, other: &Self) -> bool {
        if self.rare.ptr_eq(&other.rare) {
            return true;
        }
        self.rare.container_type == other.rare.container_type
            && self.rare.container_names == other.rare.container_names
    }

    /// `column-span`, which decides fragmentation into spanners.
    pub fn column_span_equal(&self, other: &Self) -> bool {
        if self.misc.ptr_eq(&other.misc) || self.misc.multi_col.ptr_eq(&other.misc.multi_col) {
            return true;
        }
        self.misc.multi_col.span == other.misc.multi_col.span
    }

    pub fn scroll_padding_equal(&self, other: &Self) -> bool {
        if self.rare.ptr_eq(&other.rare) {
            return true;
        }
        self.rare.scroll_padding == other.rare.scroll_padding
    }

    /// Only the font description, ignoring the rest of the inherited data.
    pub fn font_cascade_equal(&self, other: &Self) -> bool {
        if self.inherited.ptr_eq(&other.inherited)
            || self.inherited.font.ptr_eq(&other.inherited.font)
        {
            return true;
        }
        self.inherited.font.description == other.inherited.font.description
    }

    /// Scroll snap areas of this box would snap identically.
    pub fn scroll_snap_data_equivalent(&self, other: &Self) -> bool {
        if self.rare.ptr_eq(&other.rare) {
            return true;
        }
        self.rare.scroll_margin == other.rare.scroll_margin
            && self.rare.scroll_snap_align == other.rare.scroll_snap_align
            && self.rare.scroll_snap_stop == other.rare.scroll_snap_stop
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use css_values::{
        Appearance, BorderStyle, BorderValue, Color, ColumnSpan, ContainerType, EdgeBox,
        FontDescription, ItemPosition, LengthPercentageAuto, ScrollSnapStop, StyleColor,
        Visibility,
    };

    #[test]
    fn independently_built_defaults_are_equal() {
        let first = ComputedStyle::default();
        let second = ComputedStyle::default();
        assert!(!first.box_data.ptr_eq(&second.box_data));
        assert_eq!(first, second);
        assert!(first.inherited_equal(&second));
        assert!(first.non_inherited_equal(&second));
    }

    #[test]
    fn inheritance_categories_partition_equality() {
        let base = ComputedStyle::default();
        let mut recolored = base.clone();
        recolored.set_color(Color::WHITE);
        assert!(!recolored.inherited_equal(&base));
        assert!(recolored.non_inherited_equal(&base));

        let mut widened = base.clone();
        widened.set_has_explicitly_set_padding(true);
        assert!(widened.inherited_equal(&base));
        assert!(!widened.non_inherited_equal(&base));
    }

    #[test]
    fn fast_path_predicates_split_inherited_fields() {
        let base = ComputedStyle::default();
        let mut hidden = base.clone();
        hidden.set_visibility(Visibility::Hidden);
        assert!(!hidden.fast_path_inherited_equal(&base));
        assert!(hidden.non_fast_path_inherited_equal(&base));

        let narrow = FastPathPolicy::empty().with(FastPathProperty::Color);
        assert!(hidden.fast_path_inherited_equal_with_policy(&base, narrow));
        assert!(!hidden.non_fast_path_inherited_equal_with_policy(&base, narrow));
    }

    #[test]
    fn descendant_affecting_properties() {
        let base = ComputedStyle::default();
        let mut changed = base.clone();
        changed.set_opacity(0.5);
        assert!(changed.descendant_affecting_non_inherited_properties_equal(&base));
        changed.set_align_items(ItemPosition::Stretch);
        assert!(!changed.descendant_affecting_non_inherited_properties_equal(&base));

        let mut themed = base.clone();
        themed.set_used_appearance(Appearance::Button);
        assert!(!themed.descendant_affecting_non_inherited_properties_equal(&base));
    }

    #[test]
    fn targeted_predicates_look_at_their_fields_only() {
        let base = ComputedStyle::default();

        let mut bordered = base.clone();
        let mut border = bordered.border();
        border.edges.top = BorderValue {
            width: 2.0,
            style: BorderStyle::Solid,
            color: StyleColor::CurrentColor,
        };
        bordered.set_border(border);
        assert!(!bordered.border_and_background_equal(&base));
        assert!(bordered.scroll_padding_equal(&base));

        let mut painted = base.clone();
        painted.set_background_color(StyleColor::Absolute(Color::WHITE));
        assert!(!painted.border_and_background_equal(&base));

        let mut container = base.clone();
        container.set_container_type(ContainerType::InlineSize);
        assert!(!container.container_type_and_names_equal(&base));
        container.set_container_type(ContainerType::Normal);
        assert!(container.container_type_and_names_equal(&base));

        let mut spanner = base.clone();
        spanner.set_column_span(ColumnSpan::All);
        assert!(!spanner.column_span_equal(&base));

        let mut padded = base.clone();
        padded.set_scroll_padding(EdgeBox::uniform(LengthPercentageAuto::Fixed(4.0)));
        assert!(!padded.scroll_padding_equal(&base));
        assert!(padded.scroll_snap_data_equivalent(&base));

        let mut snapping = base.clone();
        snapping.set_scroll_snap_stop(ScrollSnapStop::Always);
        assert!(!snapping.scroll_snap_data_equivalent(&base));
    }

    #[test]
    fn font_cascade_ignores_color() {
        let base = ComputedStyle::default();
        let mut recolored = base.clone();
        recolored.set_color(Color::WHITE);
        assert!(recolored.font_cascade_equal(&base));

        let mut resized = base.clone();
        resized.set_font_description(FontDescription {
            size: 20.0,
            ..FontDescription::default()
        });
        assert!(!resized.font_cascade_equal(&base));
    }
}
