//! The computed style of one element.

use crate::data::{
    BackgroundData, BoxData, InheritedData, InheritedRareData, NonInheritedMiscData,
    NonInheritedRareData, SurroundData, SvgData,
};
use crate::data_ref::{DataRef, set_field};
use crate::flags::{InheritedFlags, InsideLink, NonInheritedFlags, NonInheritedState};
use crate::pseudo::PseudoStyleCache;
use core::mem;
use css_values::{
    Appearance, AspectRatio, BorderCollapse, BorderData, BoxDecorationBreak, BoxDirection,
    BoxSizing, CaptionSide, Clear, Color, ColumnAxis, ColumnFill, ColumnProgression, ColumnSpan,
    Contain, ContainerType, ContentData, ContentDistribution, ContentVisibility, Cursor, Direction,
    Display, EdgeBox, EmptyCells, FillLayers, FillRule, Float, FontDescription, Hyphens,
    ItemPosition, LengthPercentage, LengthPercentageAuto, LineBreak, LineHeight, ListStylePosition,
    ObjectFit, OutlineValue, Overflow, OverflowAnchor, OverflowWrap, PaginationMode, Perspective,
    PointerEvents, Position, PrintColorAdjust, Quotes, Resize, Rotate, RtlOrdering, Scale,
    ScrollSnapAlign, ScrollSnapStop, ScrollSnapType, Shadows, Size, Spacing, StyleColor, SvgPaint,
    TableLayout, TextAlign, TextAnchor, TextDecorationLine, TextOrientation, TextOverflow,
    TextSecurity, TextTransform, TextWrapMode, TextWrapStyle, TransformBox, TransformFunction,
    TransformList, TransformOrigin, TransformStyle3D, Translate, UnicodeBidi, UserDrag, UserModify,
    UserSelect, VectorEffect, VerticalAlign, Visibility, WhiteSpaceCollapse, WordBreak, WritingMode,
    ZIndex,
};

/// Flag words, one handle per property group, and the cached styles of the
/// element's pseudo-elements.
///
/// Cloning shares every group; a group is copied the first time one of the
/// styles sharing it writes to it.
#[derive(Debug, Default)]
pub struct ComputedStyle {
    pub(crate) inherited_flags: InheritedFlags,
    pub(crate) non_inherited_flags: NonInheritedFlags,
    pub(crate) box_data: DataRef<BoxData>,
    pub(crate) background: DataRef<BackgroundData>,
    pub(crate) surround: DataRef<SurroundData>,
    pub(crate) misc: DataRef<NonInheritedMiscData>,
    pub(crate) rare: DataRef<NonInheritedRareData>,
    pub(crate) inherited: DataRef<InheritedData>,
    pub(crate) rare_inherited: DataRef<InheritedRareData>,
    pub(crate) svg: DataRef<SvgData>,
    pub(crate) cached_pseudo_styles: Option<Box<PseudoStyleCache>>,
}

impl Clone for ComputedStyle {
    /// Copies both flag words and shares every group. The pseudo-style cache
    /// is not copied; see
    /// [`clone_including_pseudo_elements`](Self::clone_including_pseudo_elements).
    fn clone(&self) -> Self {
        Self {
            inherited_flags: self.inherited_flags,
            non_inherited_flags: self.non_inherited_flags,
            box_data: DataRef::clone(&self.box_data),
            background: DataRef::clone(&self.background),
            surround: DataRef::clone(&self.surround),
            misc: DataRef::clone(&self.misc),
            rare: DataRef::clone(&self.rare),
            inherited: DataRef::clone(&self.inherited),
            rare_inherited: DataRef::clone(&self.rare_inherited),
            svg: DataRef::clone(&self.svg),
            cached_pseudo_styles: None,
        }
    }
}

impl ComputedStyle {
    /// Take over every group handle, both flag words and the pseudo-style
    /// cache of `new_style`, handing back the previous contents.
    ///
    /// No group is copied, so the returned style can still be compared
    /// against the new one.
    #[must_use = "the previous style is returned for diffing"]
    pub fn replace(&mut self, new_style: Self) -> Self {
        tracing::trace!("replacing computed style");
        Self {
            inherited_flags: mem::replace(&mut self.inherited_flags, new_style.inherited_flags),
            non_inherited_flags: mem::replace(
                &mut self.non_inherited_flags,
                new_style.non_inherited_flags,
            ),
            box_data: self.box_data.replace(new_style.box_data),
            background: self.background.replace(new_style.background),
            surround: self.surround.replace(new_style.surround),
            misc: self.misc.replace(new_style.misc),
            rare: self.rare.replace(new_style.rare),
            inherited: self.inherited.replace(new_style.inherited),
            rare_inherited: self.rare_inherited.replace(new_style.rare_inherited),
            svg: self.svg.replace(new_style.svg),
            cached_pseudo_styles: mem::replace(
                &mut self.cached_pseudo_styles,
                new_style.cached_pseudo_styles,
            ),
        }
    }

    /// Inherited keyword properties packed into one word.
    #[inline]
    pub fn inherited_flags(&self) -> &InheritedFlags {
        &self.inherited_flags
    }

    /// Non-inherited keyword properties, state bits and pseudo-element data.
    #[inline]
    pub fn non_inherited_flags(&self) -> &NonInheritedFlags {
        &self.non_inherited_flags
    }

    /// Sizes, z-index and box-sizing.
    #[inline]
    pub fn box_data(&self) -> &DataRef<BoxData> {
        &self.box_data
    }

    /// Background layers, background color and outline.
    #[inline]
    pub fn background_data(&self) -> &DataRef<BackgroundData> {
        &self.background
    }

    /// Insets, margins, paddings and borders.
    #[inline]
    pub fn surround_data(&self) -> &DataRef<SurroundData> {
        &self.surround
    }

    #[inline]
    pub fn misc_data(&self) -> &DataRef<NonInheritedMiscData> {
        &self.misc
    }

    #[inline]
    pub fn rare_data(&self) -> &DataRef<NonInheritedRareData> {
        &self.rare
    }

    /// Color, line height and the font.
    #[inline]
    pub fn inherited_data(&self) -> &DataRef<InheritedData> {
        &self.inherited
    }

    #[inline]
    pub fn rare_inherited_data(&self) -> &DataRef<InheritedRareData> {
        &self.rare_inherited
    }

    /// SVG paint, markers and geometry.
    #[inline]
    pub fn svg_data(&self) -> &DataRef<SvgData> {
        &self.svg
    }

    /// Write access to a whole group, copying it if shared. Prefer the
    /// per-property setters, which skip the copy when nothing changes.
    #[inline]
    pub fn mutable_box_data(&mut self) -> &mut BoxData {
        self.box_data.access()
    }

    #[inline]
    pub fn mutable_background_data(&mut self) -> &mut BackgroundData {
        self.background.access()
    }

    #[inline]
    pub fn mutable_surround_data(&mut self) -> &mut SurroundData {
        self.surround.access()
    }

    #[inline]
    pub fn mutable_misc_data(&mut self) -> &mut NonInheritedMiscData {
        self.misc.access()
    }

    #[inline]
    pub fn mutable_rare_data(&mut self) -> &mut NonInheritedRareData {
        self.rare.access()
    }

    #[inline]
    pub fn mutable_inherited_data(&mut self) -> &mut InheritedData {
        self.inherited.access()
    }

    #[inline]
    pub fn mutable_rare_inherited_data(&mut self) -> &mut InheritedRareData {
        self.rare_inherited.access()
    }

    #[inline]
    pub fn mutable_svg_data(&mut self) -> &mut SvgData {
        self.svg.access()
    }
}

/// Getter and change-reporting setter for a property stored in a group.
///
/// `ref` getters return a reference for values that are not `Copy`.
macro_rules! group_property {
    ($getter:ident, $setter:ident: $ty:ty = $group:ident . $field:ident) => {
        #[inline]
        pub fn $getter(&self) -> $ty {
            self.$group.$field
        }

        #[inline]
        pub fn $setter(&mut self, value: $ty) -> bool {
            set_field(
                &mut self.$group,
                |data| &data.$field,
                |data| &mut data.$field,
                value,
            )
        }
    };
    ($getter:ident, $setter:ident: $ty:ty = $group:ident . $nested:ident . $field:ident) => {
        #[inline]
        pub fn $getter(&self) -> $ty {
            self.$group.$nested.$field
        }

        #[inline]
        pub fn $setter(&mut self, value: $ty) -> bool {
            set_field(
                &mut self.$group,
                |data| &data.$nested.$field,
                |data| &mut data.$nested.access().$field,
                value,
            )
        }
    };
    (ref $getter:ident, $setter:ident: $ty:ty = $group:ident . $field:ident) => {
        #[inline]
        pub fn $getter(&self) -> &$ty {
            &self.$group.$field
        }

        #[inline]
        pub fn $setter(&mut self, value: $ty) -> bool {
            set_field(
                &mut self.$group,
                |data| &data.$field,
                |data| &mut data.$field,
                value,
            )
        }
    };
    (ref $getter:ident, $setter:ident: $ty:ty = $group:ident . $nested:ident . $field:ident) => {
        #[inline]
        pub fn $getter(&self) -> &$ty {
            &self.$group.$nested.$field
        }

        #[inline]
        pub fn $setter(&mut self, value: $ty) -> bool {
            set_field(
                &mut self.$group,
                |data| &data.$nested.$field,
                |data| &mut data.$nested.access().$field,
                value,
            )
        }
    };
}

/// Getter and setter for a field of a flag word.
macro_rules! flag_property {
    ($getter:ident, $setter:ident: $ty:ty = $word:ident . $field:ident) => {
        #[inline]
        pub fn $getter(&self) -> $ty {
            self.$word.$field
        }

        #[inline]
        pub fn $setter(&mut self, value: $ty) {
            self.$word.$field = value;
        }
    };
}

/// Getter and setter for one bit of the non-inherited state.
macro_rules! state_bit {
    ($getter:ident, $setter:ident = $bit:ident) => {
        #[inline]
        pub fn $getter(&self) -> bool {
            self.non_inherited_flags.state(NonInheritedState::$bit)
        }

        #[inline]
        pub fn $setter(&mut self, value: bool) {
            self.non_inherited_flags.set_state(NonInheritedState::$bit, value);
        }
    };
}

// Inherited flag word.
impl ComputedStyle {
    flag_property!(writing_mode, set_writing_mode: WritingMode = inherited_flags.writing_mode);
    flag_property!(direction, set_direction: Direction = inherited_flags.direction);
    flag_property!(text_orientation, set_text_orientation: TextOrientation = inherited_flags.text_orientation);
    flag_property!(white_space_collapse, set_white_space_collapse: WhiteSpaceCollapse = inherited_flags.white_space_collapse);
    flag_property!(text_wrap_mode, set_text_wrap_mode: TextWrapMode = inherited_flags.text_wrap_mode);
    flag_property!(text_wrap_style, set_text_wrap_style: TextWrapStyle = inherited_flags.text_wrap_style);
    flag_property!(text_align, set_text_align: TextAlign = inherited_flags.text_align);
    flag_property!(text_transform, set_text_transform: TextTransform = inherited_flags.text_transform);
    flag_property!(text_decoration_line_in_effect, set_text_decoration_line_in_effect: TextDecorationLine = inherited_flags.text_decoration_line_in_effect);
    flag_property!(pointer_events, set_pointer_events: PointerEvents = inherited_flags.pointer_events);
    flag_property!(visibility, set_visibility: Visibility = inherited_flags.visibility);
    flag_property!(cursor, set_cursor: Cursor = inherited_flags.cursor);
    flag_property!(list_style_position, set_list_style_position: ListStylePosition = inherited_flags.list_style_position);
    flag_property!(empty_cells, set_empty_cells: EmptyCells = inherited_flags.empty_cells);
    flag_property!(border_collapse, set_border_collapse: BorderCollapse = inherited_flags.border_collapse);
    flag_property!(caption_side, set_caption_side: CaptionSide = inherited_flags.caption_side);
    flag_property!(box_direction, set_box_direction: BoxDirection = inherited_flags.box_direction);
    flag_property!(rtl_ordering, set_rtl_ordering: RtlOrdering = inherited_flags.rtl_ordering);
    flag_property!(print_color_adjust, set_print_color_adjust: PrintColorAdjust = inherited_flags.print_color_adjust);
    flag_property!(inside_link, set_inside_link: InsideLink = inherited_flags.inside_link);
    flag_property!(has_explicitly_set_color, set_has_explicitly_set_color: bool = inherited_flags.has_explicitly_set_color);
}

// Non-inherited flag word.
impl ComputedStyle {
    flag_property!(effective_display, set_effective_display: Display = non_inherited_flags.effective_display);
    flag_property!(original_display, set_original_display: Display = non_inherited_flags.original_display);
    flag_property!(overflow_x, set_overflow_x: Overflow = non_inherited_flags.overflow_x);
    flag_property!(overflow_y, set_overflow_y: Overflow = non_inherited_flags.overflow_y);
    flag_property!(clear, set_clear: Clear = non_inherited_flags.clear);
    flag_property!(position, set_position: Position = non_inherited_flags.position);
    flag_property!(unicode_bidi, set_unicode_bidi: UnicodeBidi = non_inherited_flags.unicode_bidi);
    flag_property!(floating, set_floating: Float = non_inherited_flags.floating);
    flag_property!(text_decoration_line, set_text_decoration_line: TextDecorationLine = non_inherited_flags.text_decoration_line);

    state_bit!(uses_viewport_units, set_uses_viewport_units = USES_VIEWPORT_UNITS);
    state_bit!(uses_container_units, set_uses_container_units = USES_CONTAINER_UNITS);
    state_bit!(uses_tree_counting_functions, set_uses_tree_counting_functions = USES_TREE_COUNTING_FUNCTIONS);
    state_bit!(has_explicitly_inherited_properties, set_has_explicitly_inherited_properties = HAS_EXPLICITLY_INHERITED_PROPERTIES);
    state_bit!(disallows_fast_path_inheritance, set_disallows_fast_path_inheritance = DISALLOWS_FAST_PATH_INHERITANCE);
    state_bit!(empty_state, set_empty_state = EMPTY_STATE);
    state_bit!(first_child_state, set_first_child_state = FIRST_CHILD_STATE);
    state_bit!(last_child_state, set_last_child_state = LAST_CHILD_STATE);
    state_bit!(is_link, set_is_link = IS_LINK);

    /// The used display, after blockification and similar adjustments.
    #[inline]
    pub fn display(&self) -> Display {
        self.non_inherited_flags.effective_display
    }

    /// Set both the computed and the used display.
    #[inline]
    pub fn set_display(&mut self, display: Display) {
        self.non_inherited_flags.original_display = display;
        self.non_inherited_flags.effective_display = display;
    }
}

// Box sizing.
impl ComputedStyle {
    group_property!(width, set_width: Size = box_data.width);
    group_property!(height, set_height: Size = box_data.height);
    group_property!(min_width, set_min_width: Size = box_data.min_width);
    group_property!(max_width, set_max_width: Size = box_data.max_width);
    group_property!(min_height, set_min_height: Size = box_data.min_height);
    group_property!(max_height, set_max_height: Size = box_data.max_height);
    group_property!(vertical_align, set_vertical_align: VerticalAlign = box_data.vertical_align);
    group_property!(box_sizing, set_box_sizing: BoxSizing = box_data.box_sizing);
    group_property!(box_decoration_break, set_box_decoration_break: BoxDecorationBreak = box_data.box_decoration_break);
    group_property!(specified_z_index, set_specified_z_index: ZIndex = box_data.specified_z_index);
    group_property!(used_z_index, set_used_z_index: ZIndex = box_data.used_z_index);
}

// Backgrounds, outline, surround.
impl ComputedStyle {
    group_property!(ref background_layers, set_background_layers: FillLayers = background.background);
    group_property!(background_color, set_background_color: StyleColor = background.background_color);
    group_property!(outline, set_outline: OutlineValue = background.outline);
    group_property!(inset, set_inset: EdgeBox<LengthPercentageAuto> = surround.inset);
    group_property!(margin, set_margin: EdgeBox<LengthPercentageAuto> = surround.margin);
    group_property!(padding, set_padding: EdgeBox<LengthPercentage> = surround.padding);
    group_property!(border, set_border: BorderData = surround.border);
    group_property!(has_explicitly_set_padding, set_has_explicitly_set_padding: bool = surround.has_explicitly_set_padding);
    group_property!(has_explicitly_set_border_radius, set_has_explicitly_set_border_radius: bool = surround.has_explicitly_set_border_radius);
}

// Miscellaneous non-inherited data and its nested groups.
impl ComputedStyle {
    group_property!(opacity, set_opacity: f32 = misc.opacity);
    group_property!(align_content, set_align_content: ContentDistribution = misc.align_content);
    group_property!(align_items, set_align_items: ItemPosition = misc.align_items);
    group_property!(align_self, set_align_self: ItemPosition = misc.align_self);
    group_property!(justify_content, set_justify_content: ContentDistribution = misc.justify_content);
    group_property!(justify_items, set_justify_items: ItemPosition = misc.justify_items);
    group_property!(justify_self, set_justify_self: ItemPosition = misc.justify_self);
    group_property!(order, set_order: i32 = misc.order);
    group_property!(appearance, set_appearance: Appearance = misc.appearance);
    group_property!(used_appearance, set_used_appearance: Appearance = misc.used_appearance);
    group_property!(aspect_ratio, set_aspect_ratio: AspectRatio = misc.aspect_ratio);
    group_property!(ref box_shadow, set_box_shadow: Shadows = misc.box_shadow);
    group_property!(ref content, set_content: ContentData = misc.content);
    group_property!(text_overflow, set_text_overflow: TextOverflow = misc.text_overflow);
    group_property!(object_fit, set_object_fit: ObjectFit = misc.object_fit);
    group_property!(table_layout, set_table_layout: TableLayout = misc.table_layout);
    group_property!(user_drag, set_user_drag: UserDrag = misc.user_drag);
    group_property!(resize, set_resize: Resize = misc.resize);

    group_property!(column_count, set_column_count: Option<u16> = misc.multi_col.count);
    group_property!(column_width, set_column_width: Option<f32> = misc.multi_col.width);
    group_property!(column_fill, set_column_fill: ColumnFill = misc.multi_col.fill);
    group_property!(column_span, set_column_span: ColumnSpan = misc.multi_col.span);
    group_property!(column_axis, set_column_axis: ColumnAxis = misc.multi_col.axis);
    group_property!(column_progression, set_column_progression: ColumnProgression = misc.multi_col.progression);

    group_property!(ref transform, set_transform: TransformList = misc.transform.operations);
    group_property!(transform_origin, set_transform_origin: TransformOrigin = misc.transform.origin);
    group_property!(transform_box, set_transform_box: TransformBox = misc.transform.transform_box);
}

// Adjustments applied after the cascade.
impl ComputedStyle {
    /// Scale the element by `scale` about its top-left corner, as a page
    /// zoom does. A scale of one leaves the style untouched.
    #[allow(clippy::float_cmp, reason = "only an exact identity scale is skipped")]
    pub fn set_page_scale_transform(&mut self, scale: f32) {
        if scale == 1.0 {
            return;
        }
        let mut operations = TransformList::default();
        operations.push(TransformFunction::Scale(scale, scale, 1.0));
        self.set_transform(operations);

        let origin = TransformOrigin {
            x: LengthPercentage::Fixed(0.0),
            y: LengthPercentage::Fixed(0.0),
            ..self.transform_origin()
        };
        self.set_transform_origin(origin);
    }

    /// Merge `value` into the decorations in effect; `none` changes nothing.
    #[inline]
    pub fn add_to_text_decoration_line_in_effect(&mut self, value: TextDecorationLine) {
        self.inherited_flags.text_decoration_line_in_effect |= value;
    }

    /// Lay the element out as pages flowing in `mode` by turning its
    /// content into columns.
    ///
    /// Progression is relative to the writing mode: a horizontal page flow
    /// runs with the inline direction in horizontal writing modes and with
    /// the block direction in vertical ones, and the reverse for vertical
    /// page flows.
    pub fn set_column_styles_from_pagination_mode(&mut self, mode: PaginationMode) {
        let (axis, along_positive) = match mode {
            PaginationMode::Unpaginated => return,
            PaginationMode::LeftToRight => (ColumnAxis::Horizontal, true),
            PaginationMode::RightToLeft => (ColumnAxis::Horizontal, false),
            PaginationMode::TopToBottom => (ColumnAxis::Vertical, true),
            PaginationMode::BottomToTop => (ColumnAxis::Vertical, false),
        };
        self.set_column_fill(ColumnFill::Auto);
        self.set_column_axis(axis);

        let writing_mode = self.writing_mode();
        let flows_with_inline_axis =
            writing_mode.is_horizontal() == (axis == ColumnAxis::Horizontal);
        let runs_forward = if flows_with_inline_axis {
            self.direction() == Direction::Ltr
        } else {
            !writing_mode.is_block_flipped()
        };
        let progression = if runs_forward == along_positive {
            ColumnProgression::Normal
        } else {
            ColumnProgression::Reverse
        };
        self.set_column_progression(progression);
    }
}

// Rare non-inherited data.
impl ComputedStyle {
    group_property!(scroll_margin, set_scroll_margin: EdgeBox<f32> = rare.scroll_margin);
    group_property!(scroll_padding, set_scroll_padding: EdgeBox<LengthPercentageAuto> = rare.scroll_padding);
    group_property!(scroll_snap_type, set_scroll_snap_type: ScrollSnapType = rare.scroll_snap_type);
    group_property!(scroll_snap_align, set_scroll_snap_align: ScrollSnapAlign = rare.scroll_snap_align);
    group_property!(scroll_snap_stop, set_scroll_snap_stop: ScrollSnapStop = rare.scroll_snap_stop);
    group_property!(container_type, set_container_type: ContainerType = rare.container_type);
    group_property!(ref container_names, set_container_names: Vec<String> = rare.container_names);
    group_property!(overflow_anchor, set_overflow_anchor: OverflowAnchor = rare.overflow_anchor);
    group_property!(contain, set_contain: Contain = rare.contain);
    group_property!(perspective, set_perspective: Perspective = rare.perspective);
    group_property!(transform_style_3d, set_transform_style_3d: TransformStyle3D = rare.transform_style_3d);
    group_property!(rotate, set_rotate: Rotate = rare.rotate);
    group_property!(scale, set_scale: Scale = rare.scale);
    group_property!(translate, set_translate: Translate = rare.translate);
    group_property!(column_gap, set_column_gap: Option<LengthPercentage> = rare.column_gap);
    group_property!(row_gap, set_row_gap: Option<LengthPercentage> = rare.row_gap);
    group_property!(text_decoration_color, set_text_decoration_color: StyleColor = rare.text_decoration_color);
}

// Inherited data and fonts.
impl ComputedStyle {
    group_property!(horizontal_border_spacing, set_horizontal_border_spacing: f32 = inherited.horizontal_border_spacing);
    group_property!(vertical_border_spacing, set_vertical_border_spacing: f32 = inherited.vertical_border_spacing);
    group_property!(line_height, set_line_height: LineHeight = inherited.line_height);
    group_property!(color, set_color: Color = inherited.color);
    group_property!(visited_link_color, set_visited_link_color: Color = inherited.visited_link_color);

    group_property!(ref font_description, set_font_description: FontDescription = inherited.font.description);
    group_property!(letter_spacing, set_letter_spacing: Spacing = inherited.font.letter_spacing);
    group_property!(word_spacing, set_word_spacing: Spacing = inherited.font.word_spacing);

    /// Computed `font-size` in pixels.
    #[inline]
    pub fn computed_font_size(&self) -> f32 {
        self.inherited.font.description.size
    }
}

// Rare inherited data.
impl ComputedStyle {
    group_property!(used_zoom, set_used_zoom: f32 = rare_inherited.used_zoom);
    group_property!(text_stroke_color, set_text_stroke_color: StyleColor = rare_inherited.text_stroke_color);
    group_property!(text_stroke_width, set_text_stroke_width: f32 = rare_inherited.text_stroke_width);
    group_property!(text_fill_color, set_text_fill_color: StyleColor = rare_inherited.text_fill_color);
    group_property!(text_emphasis_color, set_text_emphasis_color: StyleColor = rare_inherited.text_emphasis_color);
    group_property!(caret_color, set_caret_color: Option<StyleColor> = rare_inherited.caret_color);
    group_property!(accent_color, set_accent_color: Option<StyleColor> = rare_inherited.accent_color);
    group_property!(stroke_color, set_stroke_color: StyleColor = rare_inherited.stroke_color);
    group_property!(stroke_width, set_stroke_width: LengthPercentage = rare_inherited.stroke_width);
    group_property!(has_explicitly_set_stroke_color, set_has_explicitly_set_stroke_color: bool = rare_inherited.has_explicitly_set_stroke_color);
    group_property!(has_explicitly_set_stroke_width, set_has_explicitly_set_stroke_width: bool = rare_inherited.has_explicitly_set_stroke_width);
    group_property!(text_indent, set_text_indent: LengthPercentage = rare_inherited.text_indent);
    group_property!(ref text_shadow, set_text_shadow: Shadows = rare_inherited.text_shadow);
    group_property!(ref quotes, set_quotes: Quotes = rare_inherited.quotes);
    group_property!(tab_size, set_tab_size: f32 = rare_inherited.tab_size);
    group_property!(widows, set_widows: u16 = rare_inherited.widows);
    group_property!(orphans, set_orphans: u16 = rare_inherited.orphans);
    group_property!(word_break, set_word_break: WordBreak = rare_inherited.word_break);
    group_property!(overflow_wrap, set_overflow_wrap: OverflowWrap = rare_inherited.overflow_wrap);
    group_property!(line_break, set_line_break: LineBreak = rare_inherited.line_break);
    group_property!(user_select, set_user_select: UserSelect = rare_inherited.user_select);
    group_property!(user_modify, set_user_modify: UserModify = rare_inherited.user_modify);
    group_property!(hyphens, set_hyphens: Hyphens = rare_inherited.hyphens);
    group_property!(text_security, set_text_security: TextSecurity = rare_inherited.text_security);
    group_property!(effective_inert, set_effective_inert: bool = rare_inherited.effective_inert);
    group_property!(is_force_hidden, set_is_force_hidden: bool = rare_inherited.is_force_hidden);
    group_property!(effectively_transparent, set_effectively_transparent: bool = rare_inherited.effectively_transparent);
    group_property!(used_content_visibility, set_used_content_visibility: ContentVisibility = rare_inherited.used_content_visibility);
}

// SVG.
impl ComputedStyle {
    group_property!(ref fill_paint, set_fill_paint: SvgPaint = svg.fill.paint);
    group_property!(fill_opacity, set_fill_opacity: f32 = svg.fill.opacity);
    group_property!(ref stroke_paint, set_stroke_paint: SvgPaint = svg.stroke.paint);
    group_property!(stroke_opacity, set_stroke_opacity: f32 = svg.stroke.opacity);
    group_property!(ref stroke_dash_array, set_stroke_dash_array: Vec<LengthPercentage> = svg.stroke.dash_array);
    group_property!(stroke_miter_limit, set_stroke_miter_limit: f32 = svg.stroke.miter_limit);
    group_property!(stop_color, set_stop_color: StyleColor = svg.stop.color);
    group_property!(stop_opacity, set_stop_opacity: f32 = svg.stop.opacity);
    group_property!(flood_color, set_flood_color: StyleColor = svg.misc.flood_color);
    group_property!(flood_opacity, set_flood_opacity: f32 = svg.misc.flood_opacity);
    group_property!(lighting_color, set_lighting_color: StyleColor = svg.misc.lighting_color);

    #[inline]
    pub fn fill_rule(&self) -> FillRule {
        self.svg.inherited_flags.fill_rule
    }

    pub fn set_fill_rule(&mut self, rule: FillRule) -> bool {
        set_field(
            &mut self.svg,
            |svg| &svg.inherited_flags.fill_rule,
            |svg| &mut svg.inherited_flags.fill_rule,
            rule,
        )
    }

    #[inline]
    pub fn clip_rule(&self) -> FillRule {
        self.svg.inherited_flags.clip_rule
    }

    pub fn set_clip_rule(&mut self, rule: FillRule) -> bool {
        set_field(
            &mut self.svg,
            |svg| &svg.inherited_flags.clip_rule,
            |svg| &mut svg.inherited_flags.clip_rule,
            rule,
        )
    }

    #[inline]
    pub fn text_anchor(&self) -> TextAnchor {
        self.svg.inherited_flags.text_anchor
    }

    pub fn set_text_anchor(&mut self, anchor: TextAnchor) -> bool {
        set_field(
            &mut self.svg,
            |svg| &svg.inherited_flags.text_anchor,
            |svg| &mut svg.inherited_flags.text_anchor,
            anchor,
        )
    }

    #[inline]
    pub fn vector_effect(&self) -> VectorEffect {
        self.svg.non_inherited_flags.vector_effect
    }

    pub fn set_vector_effect(&mut self, effect: VectorEffect) -> bool {
        set_field(
            &mut self.svg,
            |svg| &svg.non_inherited_flags.vector_effect,
            |svg| &mut svg.non_inherited_flags.vector_effect,
            effect,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn styles_can_cross_threads() {
        assert_send_sync::<ComputedStyle>();
    }

    #[test]
    fn clone_shares_every_group() {
        let style = ComputedStyle::default();
        let copy = style.clone();
        assert!(copy.box_data.ptr_eq(&style.box_data));
        assert!(copy.background.ptr_eq(&style.background));
        assert!(copy.surround.ptr_eq(&style.surround));
        assert!(copy.misc.ptr_eq(&style.misc));
        assert!(copy.rare.ptr_eq(&style.rare));
        assert!(copy.inherited.ptr_eq(&style.inherited));
        assert!(copy.rare_inherited.ptr_eq(&style.rare_inherited));
        assert!(copy.svg.ptr_eq(&style.svg));
    }

    #[test]
    fn setters_only_copy_on_change() {
        let style = ComputedStyle::default();
        let mut copy = style.clone();
        assert!(!copy.set_width(Size::Auto));
        assert!(copy.box_data.ptr_eq(&style.box_data));

        assert!(copy.set_width(Size::Fixed(120.0)));
        assert!(!copy.box_data.ptr_eq(&style.box_data));
        assert_eq!(style.width(), Size::Auto);
        assert_eq!(copy.width(), Size::Fixed(120.0));
    }

    #[test]
    fn nested_setter_copies_both_levels() {
        let style = ComputedStyle::default();
        let mut copy = style.clone();
        assert!(copy.set_column_span(ColumnSpan::All));
        assert!(!copy.misc.ptr_eq(&style.misc));
        assert!(!copy.misc.multi_col.ptr_eq(&style.misc.multi_col));
        assert!(copy.misc.transform.ptr_eq(&style.misc.transform));
        assert_eq!(style.column_span(), ColumnSpan::None);
    }

    #[test]
    fn set_display_updates_both_displays() {
        let mut style = ComputedStyle::default();
        style.set_display(Display::Grid);
        assert_eq!(style.original_display(), Display::Grid);
        assert_eq!(style.display(), Display::Grid);
        style.set_effective_display(Display::Block);
        assert_eq!(style.original_display(), Display::Grid);
        assert_eq!(style.display(), Display::Block);
    }

    #[test]
    fn replace_swaps_all_state() {
        let mut current = ComputedStyle::default();
        current.set_color(Color::WHITE);
        let mut incoming = ComputedStyle::default();
        incoming.set_position(Position::Fixed);
        let incoming_box = DataRef::clone(&incoming.box_data);

        let previous = current.replace(incoming);
        assert_eq!(previous.color(), Color::WHITE);
        assert_eq!(current.position(), Position::Fixed);
        assert_eq!(current.color(), Color::BLACK);
        assert!(current.box_data.ptr_eq(&incoming_box));
    }

    #[test]
    fn whole_group_writes_copy_once() {
        let style = ComputedStyle::default();
        let mut copy = style.clone();
        copy.mutable_background_data().background_color = StyleColor::Absolute(Color::WHITE);
        copy.mutable_inherited_data().color = Color::WHITE;
        copy.mutable_box_data().width = Size::Fixed(10.0);
        copy.mutable_surround_data().margin = EdgeBox::uniform(LengthPercentageAuto::Fixed(1.0));
        copy.mutable_misc_data().order = 2;
        copy.mutable_rare_data().column_gap = Some(LengthPercentage::Fixed(4.0));
        copy.mutable_rare_inherited_data().effective_inert = true;
        copy.mutable_svg_data().inherited_flags.clip_rule = FillRule::EvenOdd;

        assert!(!copy.background.ptr_eq(&style.background));
        assert!(!copy.inherited.ptr_eq(&style.inherited));
        assert!(!copy.svg.ptr_eq(&style.svg));
        assert_eq!(copy.clip_rule(), FillRule::EvenOdd);
        assert_eq!(copy.order(), 2);
        assert_eq!(copy.color(), Color::WHITE);
        assert_eq!(style.color(), Color::BLACK);
    }

    #[test]
    fn page_scale_pins_the_origin() {
        let mut style = ComputedStyle::default();
        let untouched = style.clone();
        style.set_page_scale_transform(1.0);
        assert!(style.misc.ptr_eq(&untouched.misc));

        style.set_page_scale_transform(2.0);
        assert_eq!(
            &style.transform().0[..],
            &[TransformFunction::Scale(2.0, 2.0, 1.0)]
        );
        assert_eq!(style.transform_origin().x, LengthPercentage::Fixed(0.0));
        assert_eq!(style.transform_origin().y, LengthPercentage::Fixed(0.0));
        assert!(untouched.transform().is_none());
    }

    #[test]
    fn decorations_in_effect_accumulate() {
        let mut style = ComputedStyle::default();
        style.add_to_text_decoration_line_in_effect(TextDecorationLine::UNDERLINE);
        style.add_to_text_decoration_line_in_effect(TextDecorationLine::empty());
        style.add_to_text_decoration_line_in_effect(TextDecorationLine::LINE_THROUGH);
        assert_eq!(
            style.text_decoration_line_in_effect(),
            TextDecorationLine::UNDERLINE | TextDecorationLine::LINE_THROUGH
        );
    }

    #[test]
    fn pagination_sets_column_axis_and_progression() {
        let mut style = ComputedStyle::default();
        let untouched = style.clone();
        style.set_column_styles_from_pagination_mode(PaginationMode::Unpaginated);
        assert!(style.misc.ptr_eq(&untouched.misc));

        style.set_column_styles_from_pagination_mode(PaginationMode::LeftToRight);
        assert_eq!(style.column_fill(), ColumnFill::Auto);
        assert_eq!(style.column_axis(), ColumnAxis::Horizontal);
        assert_eq!(style.column_progression(), ColumnProgression::Normal);

        style.set_column_styles_from_pagination_mode(PaginationMode::RightToLeft);
        assert_eq!(style.column_progression(), ColumnProgression::Reverse);

        style.set_direction(Direction::Rtl);
        style.set_column_styles_from_pagination_mode(PaginationMode::RightToLeft);
        assert_eq!(style.column_progression(), ColumnProgression::Normal);

        style.set_column_styles_from_pagination_mode(PaginationMode::BottomToTop);
        assert_eq!(style.column_axis(), ColumnAxis::Vertical);
        assert_eq!(style.column_progression(), ColumnProgression::Reverse);

        style.set_writing_mode(WritingMode::VerticalRl);
        style.set_column_styles_from_pagination_mode(PaginationMode::LeftToRight);
        assert_eq!(style.column_progression(), ColumnProgression::Reverse);
        style.set_column_styles_from_pagination_mode(PaginationMode::TopToBottom);
        assert_eq!(style.column_progression(), ColumnProgression::Reverse);
        style.set_column_styles_from_pagination_mode(PaginationMode::BottomToTop);
        assert_eq!(style.column_progression(), ColumnProgression::Normal);
    }

    #[test]
    fn svg_flag_setters_report_changes() {
        let mut style = ComputedStyle::default();
        assert!(!style.set_clip_rule(FillRule::NonZero));
        assert!(style.set_clip_rule(FillRule::EvenOdd));
        assert!(style.set_text_anchor(TextAnchor::Middle));
        assert!(style.set_vector_effect(VectorEffect::NonScalingStroke));
        assert_eq!(style.clip_rule(), FillRule::EvenOdd);
        assert_eq!(style.text_anchor(), TextAnchor::Middle);
        assert_eq!(style.vector_effect(), VectorEffect::NonScalingStroke);
        assert_eq!(style.fill_rule(), FillRule::NonZero);
    }
}
