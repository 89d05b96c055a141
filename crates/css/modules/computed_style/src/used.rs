//! Used values: computed values adjusted by state the cascade does not see,
//! such as inertness or forced hiding.

use crate::flags::InsideLink;
use crate::style::ComputedStyle;
use css_values::{
    Color, Contain, LengthPercentage, PointerEvents, TransformStyle3D, UserDrag, UserModify,
    UserSelect, Visibility,
};

impl ComputedStyle {
    /// `pointer-events`, or `none` inside an inert subtree.
    #[inline]
    pub fn used_pointer_events(&self) -> PointerEvents {
        if self.rare_inherited.effective_inert {
            return PointerEvents::None;
        }
        self.inherited_flags.pointer_events
    }

    #[inline]
    pub fn used_visibility(&self) -> Visibility {
        if self.rare_inherited.is_force_hidden {
            return Visibility::Hidden;
        }
        self.inherited_flags.visibility
    }

    /// `user-select`. Editable content is always selectable unless it is
    /// draggable as a whole element.
    pub fn used_user_select(&self) -> UserSelect {
        if self.rare_inherited.effective_inert {
            return UserSelect::None;
        }
        let value = self.rare_inherited.user_select;
        if self.rare_inherited.user_modify != UserModify::ReadOnly
            && self.misc.user_drag != UserDrag::Element
        {
            return if value == UserSelect::None {
                UserSelect::Text
            } else {
                value
            };
        }
        value
    }

    /// `contain` plus the containment implied by `container-type`.
    #[inline]
    pub fn used_contain(&self) -> Contain {
        self.rare.used_contain()
    }

    /// Stroke color for text: `stroke-color` when it was set explicitly,
    /// `-webkit-text-stroke-color` otherwise.
    ///
    /// `currentcolor` follows the visited-link color inside a visited link.
    pub fn used_stroke_color(&self) -> Color {
        let color = if self.rare_inherited.has_explicitly_set_stroke_color {
            self.rare_inherited.stroke_color
        } else {
            self.rare_inherited.text_stroke_color
        };
        color.resolve(self.link_dependent_color())
    }

    /// The `color` that `currentcolor` resolves to for painting.
    #[inline]
    pub fn link_dependent_color(&self) -> Color {
        if self.inherited_flags.inside_link == InsideLink::InsideVisited {
            self.inherited.visited_link_color
        } else {
            self.inherited.color
        }
    }

    /// Stroke width for text in pixels.
    ///
    /// Percentages of `stroke-width` resolve against the scaled viewport,
    /// the mean of its width and height.
    pub fn used_stroke_width(&self, viewport_width: f32, viewport_height: f32) -> f32 {
        if !self.rare_inherited.has_explicitly_set_stroke_color {
            return self.rare_inherited.text_stroke_width;
        }
        match self.rare_inherited.stroke_width {
            LengthPercentage::Fixed(pixels) => pixels,
            LengthPercentage::Percentage(percent) => {
                percent * (viewport_width + viewport_height) / 200.0
            }
        }
    }

    /// Distance the outline extends past the border box.
    #[inline]
    pub fn outline_size(&self) -> f32 {
        let outline = &self.background.outline;
        (outline.used_width() + outline.offset).max(0.0)
    }

    #[inline]
    pub fn has_out_of_flow_position(&self) -> bool {
        self.non_inherited_flags.position.is_out_of_flow()
    }

    /// Any property that establishes a transform or a 3D rendering context.
    pub fn has_transform_related_property(&self) -> bool {
        !self.misc.transform.operations.is_none()
            || self.rare.has_individual_transform()
            || self.rare.transform_style_3d == TransformStyle3D::Preserve3D
            || !self.rare.perspective.is_none()
    }

    #[inline]
    pub fn is_display_inline_type(&self) -> bool {
        self.non_inherited_flags.effective_display.is_inline_type()
    }

    /// `line-height` in pixels. `normal` uses the primary font's line
    /// spacing.
    #[inline]
    pub fn computed_line_height(&self, primary_font_line_spacing: f32) -> f32 {
        self.inherited
            .line_height
            .compute(self.computed_font_size(), primary_font_line_spacing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use css_values::{
        BorderStyle, ContainerType, Display, LineHeight, OutlineValue, Perspective, Position,
        StyleColor, ZIndex,
    };

    #[test]
    fn inertness_disables_interaction() {
        let mut style = ComputedStyle::default();
        style.set_pointer_events(PointerEvents::Visible);
        assert_eq!(style.used_pointer_events(), PointerEvents::Visible);
        assert_eq!(style.used_user_select(), UserSelect::Text);

        style.set_effective_inert(true);
        assert_eq!(style.used_pointer_events(), PointerEvents::None);
        assert_eq!(style.used_user_select(), UserSelect::None);
    }

    #[test]
    fn editable_content_stays_selectable() {
        let mut style = ComputedStyle::default();
        style.set_user_select(UserSelect::None);
        assert_eq!(style.used_user_select(), UserSelect::None);

        style.set_user_modify(UserModify::ReadWrite);
        assert_eq!(style.used_user_select(), UserSelect::Text);

        style.set_user_drag(UserDrag::Element);
        assert_eq!(style.used_user_select(), UserSelect::None);
    }

    #[test]
    fn force_hidden_overrides_visibility() {
        let mut style = ComputedStyle::default();
        assert_eq!(style.used_visibility(), Visibility::Visible);
        style.set_is_force_hidden(true);
        assert_eq!(style.used_visibility(), Visibility::Hidden);
        assert_eq!(style.visibility(), Visibility::Visible);
    }

    #[test]
    fn size_containers_imply_containment() {
        let mut style = ComputedStyle::default();
        style.set_contain(Contain::PAINT);
        style.set_container_type(ContainerType::Size);
        let contain = style.used_contain();
        assert!(contain.contains(Contain::PAINT | Contain::SIZE | Contain::STYLE));
        assert_eq!(style.used_z_index(), ZIndex::Auto);
    }

    #[test]
    fn stroke_falls_back_to_text_stroke() {
        let mut style = ComputedStyle::default();
        style.set_color(Color::WHITE);
        style.set_text_stroke_width(2.0);
        assert_eq!(style.used_stroke_color(), Color::WHITE);
        assert!((style.used_stroke_width(800.0, 600.0) - 2.0).abs() < f32::EPSILON);

        style.set_stroke_color(StyleColor::Absolute(Color::BLACK));
        style.set_has_explicitly_set_stroke_color(true);
        style.set_stroke_width(LengthPercentage::Percentage(10.0));
        assert_eq!(style.used_stroke_color(), Color::BLACK);
        assert!((style.used_stroke_width(800.0, 600.0) - 70.0).abs() < f32::EPSILON);
    }

    #[test]
    fn current_color_follows_visited_links() {
        let mut style = ComputedStyle::default();
        style.set_color(Color::rgb(0, 0, 238));
        style.set_visited_link_color(Color::rgb(85, 26, 139));
        assert_eq!(style.used_stroke_color(), Color::rgb(0, 0, 238));

        style.set_inside_link(InsideLink::InsideUnvisited);
        assert_eq!(style.used_stroke_color(), Color::rgb(0, 0, 238));

        style.set_inside_link(InsideLink::InsideVisited);
        assert_eq!(style.used_stroke_color(), Color::rgb(85, 26, 139));

        style.set_text_stroke_color(StyleColor::Absolute(Color::WHITE));
        assert_eq!(style.used_stroke_color(), Color::WHITE);
    }

    #[test]
    fn outline_size_never_goes_negative() {
        let mut style = ComputedStyle::default();
        style.set_outline(OutlineValue {
            width: 2.0,
            style: BorderStyle::Solid,
            offset: -5.0,
            ..OutlineValue::default()
        });
        assert!(style.outline_size().abs() < f32::EPSILON);

        style.set_outline(OutlineValue {
            width: 2.0,
            style: BorderStyle::Solid,
            offset: 1.0,
            ..OutlineValue::default()
        });
        assert!((style.outline_size() - 3.0).abs() < f32::EPSILON);
    }

    #[test]
    fn layout_classification() {
        let mut style = ComputedStyle::default();
        assert!(style.is_display_inline_type());
        assert!(!style.has_out_of_flow_position());
        assert!(!style.has_transform_related_property());

        style.set_display(Display::Block);
        style.set_position(Position::Fixed);
        style.set_perspective(Perspective::Length(100.0));
        assert!(!style.is_display_inline_type());
        assert!(style.has_out_of_flow_position());
        assert!(style.has_transform_related_property());
    }

    #[test]
    fn line_height_resolves_against_font_size() {
        let mut style = ComputedStyle::default();
        assert!((style.computed_line_height(19.0) - 19.0).abs() < f32::EPSILON);
        style.set_line_height(LineHeight::Number(1.5));
        assert!((style.computed_line_height(19.0) - 24.0).abs() < f32::EPSILON);
    }
}
