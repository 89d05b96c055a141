#![cfg(test)]
#![allow(
    clippy::missing_panics_doc,
    reason = "Assertions in tests are expected"
)]

use core::error::Error;
use css_computed_style::{ComputedStyle, FastPathPolicy, FastPathProperty, StyleConfig};
use css_values::{
    Color, Direction, Display, FillRule, LineHeight, Position, Size, TextAlign, Visibility,
};

/// A handful of parents that differ from each other in fast-path and
/// non-fast-path properties.
fn parents() -> Vec<ComputedStyle> {
    let plain = ComputedStyle::default();

    let mut hidden = plain.clone();
    hidden.set_visibility(Visibility::Hidden);

    let mut colored = plain.clone();
    colored.set_color(Color::rgb(200, 0, 0));
    colored.set_has_explicitly_set_color(true);

    let mut typographic = plain.clone();
    typographic.set_line_height(LineHeight::Fixed(30.0));
    typographic.set_text_align(TextAlign::Center);
    typographic.set_direction(Direction::Rtl);

    let mut vector = plain.clone();
    vector.set_fill_rule(FillRule::EvenOdd);
    vector.set_custom_property_value("--tone", "warm", true);

    vec![plain, hidden, colored, typographic, vector]
}

#[test]
fn full_inherit_matches_parent_and_keeps_own_non_inherited() {
    for parent in parents() {
        let mut child = ComputedStyle::default();
        child.set_display(Display::Block);
        child.set_width(Size::Fixed(40.0));
        let before = child.clone();

        child.inherit_from(&parent);
        assert!(child.inherited_equal(&parent));
        assert!(child.non_inherited_equal(&before));
        assert_eq!(child.display(), Display::Block);
        assert_eq!(child.width(), Size::Fixed(40.0));
    }
}

#[test]
fn inherited_equality_implies_both_fast_path_halves() {
    let policies = [
        FastPathPolicy::default(),
        FastPathPolicy::empty(),
        FastPathPolicy::empty().with(FastPathProperty::Visibility),
        FastPathPolicy::all().without(FastPathProperty::Color),
    ];
    let styles = parents();
    for lhs in &styles {
        for rhs in &styles {
            if !lhs.inherited_equal(rhs) {
                continue;
            }
            for policy in policies {
                assert!(lhs.fast_path_inherited_equal_with_policy(rhs, policy));
                assert!(lhs.non_fast_path_inherited_equal_with_policy(rhs, policy));
            }
        }
    }
}

#[test]
fn both_fast_path_halves_imply_inherited_equality() {
    let styles = parents();
    for lhs in &styles {
        for rhs in &styles {
            if lhs.fast_path_inherited_equal(rhs) && lhs.non_fast_path_inherited_equal(rhs) {
                assert!(lhs.inherited_equal(rhs));
            }
        }
    }
}

#[test]
fn fast_path_inherit_copies_only_visibility() {
    let mut parent = ComputedStyle::default();
    parent.set_visibility(Visibility::Hidden);

    let mut child = ComputedStyle::default();
    child.fast_path_inherit_from(&parent);

    assert_eq!(child.visibility(), Visibility::Hidden);
    assert_eq!(child.display(), Display::Inline);
    assert!(child.inherited_equal(&parent));
}

#[test]
fn fast_path_inherit_agrees_with_full_inherit_when_allowed() -> Result<(), Box<dyn Error>> {
    let config = StyleConfig::from_lookup(|_| None)?;
    for parent in parents() {
        let mut full = ComputedStyle::default();
        full.inherit_from(&parent);

        let mut fast = full.clone();
        let mut updated_parent = parent.clone();
        updated_parent.set_color(Color::rgb(0, 0, 200));
        updated_parent.set_visibility(Visibility::Collapse);
        if !updated_parent.non_fast_path_inherited_equal_with_policy(&parent, config.fast_path) {
            continue;
        }

        fast.fast_path_inherit_from_with_policy(&updated_parent, config.fast_path);
        full.inherit_from(&updated_parent);
        assert!(fast.inherited_equal(&full));
    }
    Ok(())
}

#[test]
fn anonymous_boxes_inherit_from_their_parent() {
    let mut parent = ComputedStyle::default();
    parent.set_position(Position::Relative);
    parent.set_color(Color::WHITE);

    let anonymous = ComputedStyle::create_anonymous_style_with_display(&parent, Display::Block);
    assert!(anonymous.inherited_equal(&parent));
    assert_eq!(anonymous.position(), Position::Static);
    assert_eq!(anonymous.display(), Display::Block);
}
