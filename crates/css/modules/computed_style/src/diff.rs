//! Field-level difference reporting between two styles.
//!
//! Used when debugging style invalidation: every property group and both
//! flag words report the names of the fields that differ.

use crate::config::StyleConfig;
use crate::data_ref::DataRef;
use crate::flags::{InheritedFlags, NonInheritedFlags};
use crate::style::ComputedStyle;
use core::fmt;
use log::Level;

/// One differing field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StyleDifference {
    /// Group or flag word holding the field.
    pub group: &'static str,
    pub property: &'static str,
}

impl StyleDifference {
    #[inline]
    #[must_use]
    pub const fn new(group: &'static str, property: &'static str) -> Self {
        Self { group, property }
    }
}

impl fmt::Display for StyleDifference {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}.{}", self.group, self.property)
    }
}

/// A cohesive bundle of properties held behind a copy-on-write handle.
pub trait PropertyGroup: Clone + PartialEq {
    /// Name used in difference reports.
    const NAME: &'static str;

    /// Push one entry per field of `self` that differs from `other`.
    fn collect_differences(&self, other: &Self, out: &mut Vec<StyleDifference>);
}

/// Push a difference for each listed field that is not equal.
macro_rules! field_differences {
    ($group:expr, $lhs:expr, $rhs:expr, $out:expr, [$($field:ident),* $(,)?]) => {
        $(
            if $lhs.$field != $rhs.$field {
                $out.push($crate::diff::StyleDifference::new($group, stringify!($field)));
            }
        )*
    };
}

pub(crate) use field_differences;

impl InheritedFlags {
    pub fn collect_differences(&self, other: &Self, out: &mut Vec<StyleDifference>) {
        field_differences!("InheritedFlags", self, other, out, [
            writing_mode,
            direction,
            text_orientation,
            white_space_collapse,
            text_wrap_mode,
            text_wrap_style,
            text_align,
            text_transform,
            text_decoration_line_in_effect,
            pointer_events,
            visibility,
            cursor,
            list_style_position,
            empty_cells,
            border_collapse,
            caption_side,
            box_direction,
            rtl_ordering,
            print_color_adjust,
            inside_link,
            has_explicitly_set_color,
        ]);
    }
}

impl NonInheritedFlags {
    pub fn collect_differences(&self, other: &Self, out: &mut Vec<StyleDifference>) {
        field_differences!("NonInheritedFlags", self, other, out, [
            effective_display,
            original_display,
            overflow_x,
            overflow_y,
            clear,
            position,
            unicode_bidi,
            floating,
            text_decoration_line,
            state,
            pseudo_element_type,
            pseudo_bits,
        ]);
    }
}

impl ComputedStyle {
    /// Every field that differs between `self` and `other`.
    ///
    /// Groups shared by both styles are skipped without being visited.
    pub fn differences(&self, other: &Self) -> Vec<StyleDifference> {
        let mut out = Vec::new();
        self.inherited_flags
            .collect_differences(&other.inherited_flags, &mut out);
        self.non_inherited_flags
            .collect_differences(&other.non_inherited_flags, &mut out);
        group_differences(&self.box_data, &other.box_data, &mut out);
        group_differences(&self.background, &other.background, &mut out);
        group_differences(&self.surround, &other.surround, &mut out);
        group_differences(&self.misc, &other.misc, &mut out);
        group_differences(&self.rare, &other.rare, &mut out);
        group_differences(&self.inherited, &other.inherited, &mut out);
        group_differences(&self.rare_inherited, &other.rare_inherited, &mut out);
        group_differences(&self.svg, &other.svg, &mut out);
        out
    }

    /// Log every differing field at `debug` level.
    pub fn log_differences(&self, other: &Self) {
        if !log::log_enabled!(target: "computed_style", Level::Debug) {
            return;
        }
        for difference in self.differences(other) {
            log::debug!(target: "computed_style", "style differs in {difference}");
        }
    }

    /// [`log_differences`](Self::log_differences) when `config` enables it.
    #[inline]
    pub fn log_differences_if_enabled(&self, other: &Self, config: &StyleConfig) {
        if config.log_differences {
            self.log_differences(other);
        }
    }
}

/// Differences of one group, skipping the walk when both handles share it.
pub(crate) fn group_differences<T: PropertyGroup>(
    lhs: &DataRef<T>,
    rhs: &DataRef<T>,
    out: &mut Vec<StyleDifference>,
) {
    if !lhs.ptr_eq(rhs) {
        lhs.get().collect_differences(rhs.get(), out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use css_values::{Display, Visibility};

    #[test]
    fn identical_styles_have_no_differences() {
        let style = ComputedStyle::default();
        assert!(style.differences(&style.clone()).is_empty());
        assert!(style.differences(&ComputedStyle::default()).is_empty());
    }

    #[test]
    fn differences_name_group_and_field() {
        let base = ComputedStyle::default();
        let mut changed = base.clone();
        changed.set_visibility(Visibility::Hidden);
        changed.set_display(Display::Block);

        let differences = base.differences(&changed);
        assert!(differences.contains(&StyleDifference::new("InheritedFlags", "visibility")));
        assert!(differences.contains(&StyleDifference::new(
            "NonInheritedFlags",
            "effective_display"
        )));
        assert_eq!(
            StyleDifference::new("BoxData", "width").to_string(),
            "BoxData.width"
        );
    }
}
