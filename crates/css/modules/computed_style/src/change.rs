//! Higher level change queries comparing an old style with a new one.

use crate::style::ComputedStyle;
use css_values::OverflowAnchor;

impl ComputedStyle {
    /// Whether going from `old_style` to `self` must suppress scroll
    /// anchoring, because the box may have moved or resized.
    /// Spec: <https://drafts.csswg.org/css-scroll-anchoring/#suppression-triggers>
    pub fn scroll_anchoring_suppression_style_did_change(&self, old_style: Option<&Self>) -> bool {
        let Some(old_style) = old_style else {
            return false;
        };

        if !self.box_data.ptr_eq(&old_style.box_data)
            && self.box_data.sizes_differ(&old_style.box_data)
        {
            return true;
        }

        if old_style.overflow_anchor() != self.overflow_anchor()
            && self.overflow_anchor() == OverflowAnchor::None
        {
            return true;
        }

        if old_style.position() != self.position() {
            return true;
        }

        if !self.surround.ptr_eq(&old_style.surround) {
            if self.margin() != old_style.margin() || self.padding() != old_style.padding() {
                return true;
            }
            if !self.position().is_static() && self.inset() != old_style.inset() {
                return true;
            }
        }

        if self.has_transform_related_property() != old_style.has_transform_related_property()
            || self.transform() != old_style.transform()
        {
            return true;
        }

        false
    }

    /// Whether the box started or stopped being absolutely or fixed
    /// positioned.
    pub fn out_of_flow_position_style_did_change(&self, old_style: Option<&Self>) -> bool {
        old_style.is_some_and(|old_style| {
            self.has_out_of_flow_position() != old_style.has_out_of_flow_position()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use css_values::{
        EdgeBox, LengthPercentage, LengthPercentageAuto, Position, Rotate, Size, TransformFunction,
        TransformList,
    };

    #[test]
    fn no_old_style_means_no_change() {
        let style = ComputedStyle::default();
        assert!(!style.scroll_anchoring_suppression_style_did_change(None));
        assert!(!style.out_of_flow_position_style_did_change(None));
    }

    #[test]
    fn sizes_and_position_suppress_anchoring() {
        let old_style = ComputedStyle::default();
        assert!(!old_style.scroll_anchoring_suppression_style_did_change(Some(&old_style)));

        let mut resized = old_style.clone();
        resized.set_max_height(Size::Fixed(100.0));
        assert!(resized.scroll_anchoring_suppression_style_did_change(Some(&old_style)));

        let mut moved = old_style.clone();
        moved.set_position(Position::Relative);
        assert!(moved.scroll_anchoring_suppression_style_did_change(Some(&old_style)));
    }

    #[test]
    fn only_disabling_overflow_anchor_suppresses() {
        let mut disabled = ComputedStyle::default();
        disabled.set_overflow_anchor(OverflowAnchor::None);
        let enabled = ComputedStyle::default();
        assert!(disabled.scroll_anchoring_suppression_style_did_change(Some(&enabled)));
        assert!(!enabled.scroll_anchoring_suppression_style_did_change(Some(&disabled)));
    }

    #[test]
    fn inset_only_matters_for_positioned_boxes() {
        let old_style = ComputedStyle::default();
        let mut shifted = old_style.clone();
        shifted.set_inset(EdgeBox::uniform(LengthPercentageAuto::Fixed(5.0)));
        assert!(!shifted.scroll_anchoring_suppression_style_did_change(Some(&old_style)));

        let mut positioned = old_style.clone();
        positioned.set_position(Position::Relative);
        let mut positioned_shifted = positioned.clone();
        positioned_shifted.set_inset(EdgeBox::uniform(LengthPercentageAuto::Fixed(5.0)));
        assert!(
            positioned_shifted.scroll_anchoring_suppression_style_did_change(Some(&positioned))
        );

        let mut padded = old_style.clone();
        padded.set_padding(EdgeBox::uniform(LengthPercentage::Fixed(2.0)));
        assert!(padded.scroll_anchoring_suppression_style_did_change(Some(&old_style)));
    }

    #[test]
    fn transforms_suppress_anchoring() {
        let old_style = ComputedStyle::default();
        let mut rotated = old_style.clone();
        rotated.set_rotate(Rotate::Angle {
            x: 0.0,
            y: 0.0,
            z: 1.0,
            degrees: 45.0,
        });
        assert!(rotated.scroll_anchoring_suppression_style_did_change(Some(&old_style)));

        let mut translated = old_style.clone();
        let mut operations = TransformList::default();
        operations.push(TransformFunction::Translate(
            LengthPercentage::Fixed(10.0),
            LengthPercentage::Fixed(0.0),
            0.0,
        ));
        translated.set_transform(operations);
        assert!(translated.scroll_anchoring_suppression_style_did_change(Some(&old_style)));
    }

    #[test]
    fn out_of_flow_changes() {
        let static_style = ComputedStyle::default();
        let mut absolute = static_style.clone();
        absolute.set_position(Position::Absolute);
        let mut fixed = static_style.clone();
        fixed.set_position(Position::Fixed);

        assert!(absolute.out_of_flow_position_style_did_change(Some(&static_style)));
        assert!(!absolute.out_of_flow_position_style_did_change(Some(&fixed)));
        let mut sticky = static_style.clone();
        sticky.set_position(Position::Sticky);
        assert!(!sticky.out_of_flow_position_style_did_change(Some(&static_style)));
    }
}
