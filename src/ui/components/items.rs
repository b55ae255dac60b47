//! Items list core shared by list-style widgets
//!
//! [`ItemsList`] owns the items, the selection and the scroll position and
//! knows how to lay out, hit-test and draw one row per item. Widgets such as
//! [`super::ListBox`] and [`super::ComboBox`] wrap it and implement
//! [`ItemsControl`] to decide where the rows go and what a click means.

use crate::error::GuiResult;
use crate::state::{
    LabelSource, ListItem, Point, Rectangle, SelectionChange, SelectionState, Size, Thickness,
};
use crate::ui::context::{Font, GuiContext};
use crate::ui::input::{InputEvent, Key, KeyboardEvent, PointerEvent};
use crate::ui::renderer::Renderer;
use crate::ui::skin::Skin;
use ratatui::style::Color;

/// Everything needed to draw one item label
#[derive(Debug, Clone, PartialEq)]
pub struct TextInfo {
    pub text: String,
    pub font: Font,
    pub position: Point,
    pub color: Color,
    pub clip: Option<Rectangle>,
}

/// Items, selection and scroll offset of a list-style widget
#[derive(Debug)]
pub struct ItemsList<T> {
    items: Vec<T>,
    selection: SelectionState,
    first_index: usize,
    label_source: LabelSource<T>,
    font: Option<Font>,
    text_color: Color,
    selected_text_color: Color,
    selected_item_color: Color,
    item_padding: Thickness,
    text_offset: Point,
}

impl<T> Default for ItemsList<T> {
    fn default() -> Self {
        Self::new(&Skin::default())
    }
}

impl<T> ItemsList<T> {
    pub fn new(skin: &Skin) -> Self {
        Self {
            items: Vec::new(),
            selection: SelectionState::default(),
            first_index: 0,
            label_source: LabelSource::Default,
            font: skin.font.clone(),
            text_color: skin.text_color,
            selected_text_color: skin.selected_text_color,
            selected_item_color: skin.selected_item_color,
            item_padding: skin.item_padding,
            text_offset: Point::default(),
        }
    }

    pub fn with_items(mut self, items: impl IntoIterator<Item = T>) -> Self {
        self.items.extend(items);
        self
    }

    pub fn with_label_source(mut self, source: LabelSource<T>) -> Self {
        self.label_source = source;
        self
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Direct access to the item storage. Selection is left untouched.
    pub fn items_mut(&mut self) -> &mut Vec<T> {
        &mut self.items
    }

    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn label_source(&self) -> &LabelSource<T> {
        &self.label_source
    }

    pub fn set_label_source(&mut self, source: LabelSource<T>) {
        self.label_source = source;
    }

    pub fn font(&self) -> Option<&Font> {
        self.font.as_ref()
    }

    pub fn set_font(&mut self, font: Option<Font>) {
        self.font = font;
    }

    pub fn selected_text_color(&self) -> Color {
        self.selected_text_color
    }

    pub fn set_selected_text_color(&mut self, color: Color) {
        self.selected_text_color = color;
    }

    pub fn selected_item_color(&self) -> Color {
        self.selected_item_color
    }

    pub fn set_selected_item_color(&mut self, color: Color) {
        self.selected_item_color = color;
    }

    pub fn text_color(&self) -> Color {
        self.text_color
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
    }

    pub fn item_padding(&self) -> Thickness {
        self.item_padding
    }

    pub fn set_item_padding(&mut self, padding: Thickness) {
        self.item_padding = padding;
    }

    pub fn text_offset(&self) -> Point {
        self.text_offset
    }

    pub fn set_text_offset(&mut self, offset: Point) {
        self.text_offset = offset;
    }

    // Selection

    pub fn selected_index(&self) -> Option<usize> {
        self.selection.selected_index()
    }

    /// Set the selection. Out-of-range indices are kept but select no item.
    pub fn set_selected_index(&mut self, index: Option<usize>) -> bool {
        self.selection.set_selected_index(index)
    }

    pub fn on_selection_changed(&mut self, handler: impl FnMut(SelectionChange) + 'static) {
        self.selection.on_changed(handler);
    }

    /// The selected item, or `None` when nothing (or nothing in range) is selected
    pub fn selected_item(&self) -> Option<&T> {
        self.selected_index().and_then(|index| self.items.get(index))
    }

    /// Select the first occurrence of `item`, clearing the selection if absent
    pub fn set_selected_item(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        let index = self.items.iter().position(|candidate| candidate == item);
        self.set_selected_index(index)
    }

    pub fn select_next(&mut self) -> bool {
        self.selection.select_next(self.items.len())
    }

    pub fn select_previous(&mut self) -> bool {
        self.selection.select_previous()
    }

    /// Down/Up move the selection. Returns true if the selection changed.
    pub fn handle_key(&mut self, event: &KeyboardEvent) -> bool {
        match event.key {
            Key::Down => self.select_next(),
            Key::Up => self.select_previous(),
            _ => false,
        }
    }

    /// Negative wheel deltas move down, positive move up
    pub fn handle_scroll(&mut self, delta: i32) -> bool {
        match delta.signum() {
            -1 => self.select_next(),
            1 => self.select_previous(),
            _ => false,
        }
    }

    // Scrolling

    pub fn first_visible_index(&self) -> usize {
        self.first_index
    }

    pub fn set_first_visible_index(&mut self, index: usize) {
        self.first_index = index;
    }

    // Layout

    fn active_font<'a>(&'a self, ctx: &'a dyn GuiContext) -> &'a Font {
        self.font.as_ref().unwrap_or_else(|| ctx.default_font())
    }

    /// Height of every row: one font line plus vertical padding
    pub fn item_height(&self, ctx: &dyn GuiContext) -> i32 {
        self.active_font(ctx).line_height + self.item_padding.top + self.item_padding.bottom
    }

    /// Rectangle of the row `index` positions below the first visible item.
    ///
    /// Negative indices address rows above the viewport.
    pub fn item_rectangle(&self, ctx: &dyn GuiContext, index: i32, content: Rectangle) -> Rectangle {
        let height = self.item_height(ctx);
        let y = content.y.saturating_add(height.saturating_mul(index));
        Rectangle::new(content.x, y, content.width, height)
    }

    /// Indices from the first visible item on whose rows start inside `content`
    fn visible_rows<'a>(
        &'a self,
        ctx: &'a dyn GuiContext,
        content: Rectangle,
    ) -> impl Iterator<Item = (usize, Rectangle)> + 'a {
        (self.first_index..self.items.len())
            .map(move |index| {
                let row = row_offset(index, self.first_index);
                (index, self.item_rectangle(ctx, row, content))
            })
            .take_while(move |(_, rect)| rect.top() < content.bottom())
    }

    /// Index of the visible item whose row contains `point`
    pub fn hit_test(&self, ctx: &dyn GuiContext, content: Rectangle, point: Point) -> Option<usize> {
        self.visible_rows(ctx, content)
            .find(|(_, rect)| rect.contains(point))
            .map(|(index, _)| index)
    }

    /// Select the item under the pointer. Returns the hit index.
    pub fn pointer_down(
        &mut self,
        ctx: &dyn GuiContext,
        content: Rectangle,
        event: &PointerEvent,
    ) -> Option<usize> {
        let index = self.hit_test(ctx, content, event.position)?;
        self.set_selected_index(Some(index));
        Some(index)
    }

    /// Step the first visible index by one row towards the selected item.
    ///
    /// Only a single row is scrolled per call; callers invoke this once per
    /// frame or per selection change.
    pub fn scroll_into_view(&mut self, ctx: &dyn GuiContext, content: Rectangle, clip: Rectangle) {
        let Some(selected) = self.selected_index() else {
            return;
        };

        let row = row_offset(selected, self.first_index);
        let rect = self.item_rectangle(ctx, row, content);

        if rect.bottom() > clip.bottom() {
            self.first_index += 1;
            tracing::trace!("scrolled down to first index {}", self.first_index);
        }

        if rect.top() < clip.top() && self.first_index > 0 {
            self.first_index -= 1;
            tracing::trace!("scrolled up to first index {}", self.first_index);
        }
    }

    /// Dispatch an input event to the selection handlers. Pointer events
    /// need layout and go through [`ItemsList::pointer_down`] instead.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Key(key) => self.handle_key(key),
            InputEvent::Scroll { delta, .. } => self.handle_scroll(*delta),
            InputEvent::PointerDown(_) => false,
        }
    }
}

impl<T: ListItem> ItemsList<T> {
    /// Display text for `item`
    pub fn item_label(&self, item: &T) -> GuiResult<String> {
        self.label_source.label_for(item)
    }

    /// Measured label plus padding on both axes
    pub fn item_size(&self, ctx: &dyn GuiContext, item: &T) -> GuiResult<Size> {
        let text = self.item_label(item)?;
        let measured = ctx.measure_text(self.active_font(ctx), &text);
        Ok(Size::new(
            measured.width + self.item_padding.horizontal(),
            measured.height + self.item_padding.vertical(),
        ))
    }

    /// Width of the widest item and the summed height of all items
    pub fn items_extent(&self, ctx: &dyn GuiContext) -> GuiResult<Size> {
        self.items.iter().try_fold(Size::default(), |acc, item| {
            let size = self.item_size(ctx, item)?;
            Ok(Size::new(acc.width.max(size.width), acc.height + size.height))
        })
    }

    /// Label, font and position for drawing `item` inside `item_rect`
    pub fn item_text_info(
        &self,
        ctx: &dyn GuiContext,
        item_rect: Rectangle,
        item: &T,
        clip: Option<Rectangle>,
    ) -> GuiResult<TextInfo> {
        let padding = self.item_padding;
        let text_rect = Rectangle::new(
            item_rect.x + padding.left,
            item_rect.y + padding.top,
            item_rect.width - padding.right,
            item_rect.height - padding.bottom,
        );

        Ok(TextInfo {
            text: self.item_label(item)?,
            font: self.active_font(ctx).clone(),
            position: text_rect.location(),
            color: self.text_color,
            clip,
        })
    }

    /// Draw the visible rows into `content`, highlighting the selection
    pub fn draw_items(
        &self,
        ctx: &dyn GuiContext,
        renderer: &mut dyn Renderer,
        content: Rectangle,
    ) -> GuiResult<()> {
        let selected = self.selected_index();

        for (index, rect) in self.visible_rows(ctx, content) {
            let info = self.item_text_info(ctx, rect, &self.items[index], Some(content))?;
            let is_selected = selected == Some(index);
            let color = if is_selected {
                self.selected_text_color
            } else {
                info.color
            };

            if is_selected {
                renderer.fill_rectangle(rect, self.selected_item_color, Some(content));
            }

            renderer.draw_text(
                &info.font,
                &info.text,
                info.position + self.text_offset,
                color,
                info.clip,
            );
        }

        Ok(())
    }
}

/// Signed row distance from the first visible item
fn row_offset(index: usize, first_index: usize) -> i32 {
    if index >= first_index {
        i32::try_from(index - first_index).unwrap_or(i32::MAX)
    } else {
        i32::try_from(first_index - index).map_or(i32::MIN, |rows| -rows)
    }
}

/// Shared behavior of list-style widgets built on [`ItemsList`]
pub trait ItemsControl<T: ListItem> {
    fn items_list(&self) -> &ItemsList<T>;

    fn items_list_mut(&mut self) -> &mut ItemsList<T>;

    /// Outer rectangle the widget occupies
    fn bounds(&self) -> Rectangle;

    fn set_bounds(&mut self, bounds: Rectangle);

    /// Area the rows are laid out in
    fn content_rectangle(&self, ctx: &dyn GuiContext) -> Rectangle;

    /// Called once after a pointer press selected the item at `index`
    fn item_clicked(&mut self, _ctx: &dyn GuiContext, _index: usize, _event: &PointerEvent) {}

    fn handle_key(&mut self, _ctx: &dyn GuiContext, event: &KeyboardEvent) -> bool {
        self.items_list_mut().handle_key(event)
    }

    fn handle_scroll(&mut self, _ctx: &dyn GuiContext, delta: i32) -> bool {
        self.items_list_mut().handle_scroll(delta)
    }

    /// Hit-test the rows, select the item under the pointer and fire
    /// [`ItemsControl::item_clicked`]
    fn handle_pointer_down(&mut self, ctx: &dyn GuiContext, event: &PointerEvent) -> bool {
        let content = self.content_rectangle(ctx);
        match self.items_list_mut().pointer_down(ctx, content, event) {
            Some(index) => {
                self.item_clicked(ctx, index, event);
                true
            }
            None => false,
        }
    }

    /// Route any input event to the matching handler
    fn handle_input(&mut self, ctx: &dyn GuiContext, event: &InputEvent) -> bool {
        match event {
            InputEvent::Key(key) => self.handle_key(ctx, key),
            InputEvent::PointerDown(pointer) => self.handle_pointer_down(ctx, pointer),
            InputEvent::Scroll { delta, .. } => self.handle_scroll(ctx, *delta),
        }
    }

    /// Size the widget wants given the space available
    fn desired_size(&self, ctx: &dyn GuiContext, available: Size) -> GuiResult<Size>;

    fn draw(&mut self, ctx: &dyn GuiContext, renderer: &mut dyn Renderer) -> GuiResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GuiError;
    use crate::ui::context::CellContext;
    use crate::ui::renderer::MockRenderer;
    use mockall::predicate::eq;
    use mockall::Sequence;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;
    use std::rc::Rc;

    const CONTENT: Rectangle = Rectangle::new(2, 1, 10, 4);

    fn names() -> ItemsList<&'static str> {
        ItemsList::default().with_items(["Alice", "Bob", "Carol", "Dave", "Eve", "Frank"])
    }

    fn counting(list: &mut ItemsList<&'static str>) -> Rc<Cell<usize>> {
        let count = Rc::new(Cell::new(0));
        let sink = Rc::clone(&count);
        list.on_selection_changed(move |_| sink.set(sink.get() + 1));
        count
    }

    mod selection {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_selected_item_follows_index() {
            let mut list = names();
            assert_eq!(list.selected_item(), None);
            list.set_selected_index(Some(1));
            assert_eq!(list.selected_item(), Some(&"Bob"));
        }

        #[test]
        fn test_out_of_range_selects_no_item() {
            let mut list = names();
            list.set_selected_index(Some(42));
            assert_eq!(list.selected_index(), Some(42));
            assert_eq!(list.selected_item(), None);
        }

        #[test]
        fn test_set_selected_item() {
            let mut list = names();
            assert!(list.set_selected_item(&"Carol"));
            assert_eq!(list.selected_index(), Some(2));
            assert!(list.set_selected_item(&"Nobody"));
            assert_eq!(list.selected_index(), None);
        }

        #[test]
        fn test_set_selected_item_picks_first_duplicate() {
            let mut list = ItemsList::default().with_items(["x", "y", "x"]);
            list.set_selected_item(&"x");
            assert_eq!(list.selected_index(), Some(0));
        }

        #[test]
        fn test_same_index_does_not_notify() {
            let mut list = names();
            list.set_selected_index(Some(3));
            let count = counting(&mut list);

            list.set_selected_index(Some(3));
            assert_eq!(count.get(), 0);

            list.set_selected_index(Some(4));
            assert_eq!(count.get(), 1);
        }

        #[test]
        fn test_keys_move_selection() {
            let mut list = names();
            assert!(list.handle_key(&KeyboardEvent::new(Key::Down)));
            assert!(list.handle_key(&KeyboardEvent::new(Key::Down)));
            assert_eq!(list.selected_index(), Some(1));
            assert!(list.handle_key(&KeyboardEvent::new(Key::Up)));
            assert_eq!(list.selected_index(), Some(0));
            assert!(!list.handle_key(&KeyboardEvent::new(Key::Enter)));
        }

        #[test]
        fn test_scroll_down_from_last_is_noop() {
            let mut list = names();
            list.set_selected_index(Some(5));
            let count = counting(&mut list);

            assert!(!list.handle_scroll(-1));
            assert_eq!(list.selected_index(), Some(5));
            assert_eq!(count.get(), 0);
        }

        #[test]
        fn test_scroll_up_from_first_or_none_is_noop() {
            let mut list = names();
            let count = counting(&mut list);
            assert!(!list.handle_scroll(1));
            assert_eq!(list.selected_index(), None);

            list.set_selected_index(Some(0));
            assert!(!list.handle_scroll(3));
            assert_eq!(list.selected_index(), Some(0));
            assert_eq!(count.get(), 1);
        }

        #[test]
        fn test_scroll_zero_does_nothing() {
            let mut list = names();
            list.set_selected_index(Some(2));
            assert!(!list.handle_scroll(0));
            assert_eq!(list.selected_index(), Some(2));
        }

        #[test]
        fn test_scroll_delta_direction() {
            let mut list = names();
            list.set_selected_index(Some(2));
            assert!(list.handle_scroll(-120));
            assert_eq!(list.selected_index(), Some(3));
            assert!(list.handle_scroll(120));
            assert_eq!(list.selected_index(), Some(2));
        }

        #[test]
        fn test_handle_input_routes_keys_and_wheel() {
            let mut list = names();
            assert!(list.handle_input(&InputEvent::Key(KeyboardEvent::new(Key::Down))));
            assert!(list.handle_input(&InputEvent::Scroll {
                position: Point::default(),
                delta: -1
            }));
            assert_eq!(list.selected_index(), Some(1));
            assert!(!list.handle_input(&InputEvent::PointerDown(PointerEvent::left(0, 0))));
        }
    }

    mod layout {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_item_height_includes_vertical_padding() {
            let ctx = CellContext::default();
            let mut list = names();
            assert_eq!(list.item_height(&ctx), 1);
            list.set_item_padding(Thickness::new(1, 2, 1, 3));
            assert_eq!(list.item_height(&ctx), 6);
        }

        #[test]
        fn test_own_font_overrides_default() {
            let ctx = CellContext::default();
            let mut list = names();
            list.set_font(Some(Font {
                line_height: 3,
                ..Font::cell()
            }));
            assert_eq!(list.item_height(&ctx), 3);
        }

        #[test]
        fn test_item_rectangle() {
            let ctx = CellContext::default();
            let mut list = names();
            list.set_item_padding(Thickness::symmetric(1, 1));

            assert_eq!(list.item_rectangle(&ctx, 0, CONTENT), Rectangle::new(2, 1, 10, 3));
            assert_eq!(list.item_rectangle(&ctx, 2, CONTENT), Rectangle::new(2, 7, 10, 3));
            assert_eq!(list.item_rectangle(&ctx, -1, CONTENT), Rectangle::new(2, -2, 10, 3));
        }

        #[test]
        fn test_item_rectangles_tile_contiguously() {
            let ctx = CellContext::default();
            let mut list = names();
            list.set_item_padding(Thickness::new(0, 1, 0, 2));

            let rects: Vec<_> = (0..6)
                .map(|i| list.item_rectangle(&ctx, i, CONTENT))
                .collect();
            for pair in rects.windows(2) {
                assert_eq!(pair[0].bottom(), pair[1].top());
                assert_eq!(pair[0].width, CONTENT.width);
                assert_eq!(pair[0].x, CONTENT.x);
            }
            assert_eq!(rects[0].top(), CONTENT.top());
        }

        #[test]
        fn test_item_size_adds_padding() {
            let ctx = CellContext::default();
            let mut list = names();
            list.set_item_padding(Thickness::new(1, 2, 3, 4));
            assert_eq!(list.item_size(&ctx, &"Bob").unwrap(), Size::new(7, 7));
        }

        #[test]
        fn test_items_extent() {
            let ctx = CellContext::default();
            let list = names();
            // widest is "Alice"/"Carol"/"Frank" (5) + 2 horizontal padding
            assert_eq!(list.items_extent(&ctx).unwrap(), Size::new(7, 6));
        }

        #[test]
        fn test_labels_are_the_items() {
            let list = ItemsList::default().with_items(["Alice", "Bob"]);
            let labels: Vec<_> = list
                .items()
                .iter()
                .map(|item| list.item_label(item).unwrap())
                .collect();
            assert_eq!(labels, vec!["Alice".to_string(), "Bob".to_string()]);
        }

        #[test]
        fn test_unknown_field_propagates() {
            let ctx = CellContext::default();
            let list = names().with_label_source(LabelSource::field("name"));
            assert!(matches!(
                list.item_size(&ctx, &"Alice"),
                Err(GuiError::UnknownField { .. })
            ));
        }

        #[test]
        fn test_text_info_position_is_padded() {
            let ctx = CellContext::default();
            let mut list = names();
            list.set_item_padding(Thickness::new(2, 1, 0, 0));
            let rect = Rectangle::new(5, 5, 10, 2);

            let info = list.item_text_info(&ctx, rect, &"Eve", Some(CONTENT)).unwrap();
            assert_eq!(info.text, "Eve");
            assert_eq!(info.position, Point::new(7, 6));
            assert_eq!(info.clip, Some(CONTENT));
            assert_eq!(info.color, list.text_color());
        }
    }

    mod hit_testing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_pointer_selects_row_under_pointer() {
            let ctx = CellContext::default();
            let mut list = names();
            let count = counting(&mut list);

            let hit = list.pointer_down(&ctx, CONTENT, &PointerEvent::left(4, 3));
            assert_eq!(hit, Some(2));
            assert_eq!(list.selected_index(), Some(2));
            assert_eq!(count.get(), 1);
        }

        #[test]
        fn test_pointer_respects_first_visible_index() {
            let ctx = CellContext::default();
            let mut list = names();
            list.set_first_visible_index(3);

            assert_eq!(list.hit_test(&ctx, CONTENT, Point::new(4, 1)), Some(3));
            assert_eq!(list.hit_test(&ctx, CONTENT, Point::new(4, 3)), Some(5));
        }

        #[test]
        fn test_pointer_outside_rows_misses() {
            let ctx = CellContext::default();
            let mut list = names();

            assert_eq!(list.pointer_down(&ctx, CONTENT, &PointerEvent::left(0, 1)), None);
            assert_eq!(list.pointer_down(&ctx, CONTENT, &PointerEvent::left(4, 0)), None);
            // Rows past the content bottom are not hit
            assert_eq!(list.pointer_down(&ctx, CONTENT, &PointerEvent::left(4, 5)), None);
            assert_eq!(list.selected_index(), None);
        }

        #[test]
        fn test_pointer_below_last_item_misses() {
            let ctx = CellContext::default();
            let mut list = ItemsList::default().with_items(["only"]);
            assert_eq!(list.pointer_down(&ctx, CONTENT, &PointerEvent::left(4, 2)), None);
        }
    }

    mod scrolling {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_selection_below_clip_scrolls_one_row() {
            let ctx = CellContext::default();
            let mut list = names();
            list.set_selected_index(Some(4));

            list.scroll_into_view(&ctx, CONTENT, CONTENT);
            assert_eq!(list.first_visible_index(), 1);
            list.scroll_into_view(&ctx, CONTENT, CONTENT);
            assert_eq!(list.first_visible_index(), 1);
        }

        #[test]
        fn test_far_selection_scrolls_a_single_step_per_call() {
            let ctx = CellContext::default();
            let mut list = names();
            list.set_selected_index(Some(5));

            list.scroll_into_view(&ctx, CONTENT, CONTENT);
            assert_eq!(list.first_visible_index(), 1);
            list.scroll_into_view(&ctx, CONTENT, CONTENT);
            assert_eq!(list.first_visible_index(), 2);
            list.scroll_into_view(&ctx, CONTENT, CONTENT);
            assert_eq!(list.first_visible_index(), 2);
        }

        #[test]
        fn test_selection_above_clip_scrolls_back() {
            let ctx = CellContext::default();
            let mut list = names();
            list.set_first_visible_index(3);
            list.set_selected_index(Some(1));

            list.scroll_into_view(&ctx, CONTENT, CONTENT);
            assert_eq!(list.first_visible_index(), 2);
        }

        #[test]
        fn test_visible_selection_does_not_scroll() {
            let ctx = CellContext::default();
            let mut list = names();
            list.set_selected_index(Some(3));
            list.scroll_into_view(&ctx, CONTENT, CONTENT);
            assert_eq!(list.first_visible_index(), 0);
        }

        #[test]
        fn test_no_selection_does_not_scroll() {
            let ctx = CellContext::default();
            let mut list = names();
            list.set_first_visible_index(2);
            list.scroll_into_view(&ctx, CONTENT, CONTENT);
            assert_eq!(list.first_visible_index(), 2);
        }

        #[test]
        fn test_huge_selection_scrolls_forward() {
            let ctx = CellContext::default();
            let mut list = names();
            list.set_first_visible_index(2);
            list.set_selected_index(Some(usize::MAX));

            list.scroll_into_view(&ctx, CONTENT, CONTENT);
            assert_eq!(list.first_visible_index(), 3);
        }

        #[test]
        fn test_far_rows_saturate_instead_of_overflowing() {
            let ctx = CellContext::default();
            let list = names();
            let rect = list.item_rectangle(&ctx, i32::MAX, CONTENT);
            assert_eq!(rect.top(), i32::MAX);
            assert_eq!(rect.bottom(), i32::MAX);

            let rect = list.item_rectangle(&ctx, i32::MIN, Rectangle::new(0, 0, 10, 4));
            assert_eq!(rect.top(), i32::MIN);
        }

        #[test]
        fn test_first_index_never_goes_negative() {
            let ctx = CellContext::default();
            let mut list = names();
            list.set_selected_index(Some(0));
            let clip = Rectangle::new(2, 3, 10, 4);

            list.scroll_into_view(&ctx, CONTENT, clip);
            assert_eq!(list.first_visible_index(), 0);
        }
    }

    mod drawing {
        use super::*;
        use pretty_assertions::assert_eq;

        const CORNFLOWER: Color = crate::ui::skin::CORNFLOWER_BLUE;

        #[test]
        fn test_draws_visible_rows_and_highlights_selection() {
            let ctx = CellContext::default();
            let mut list = names();
            list.set_selected_index(Some(1));
            list.set_first_visible_index(0);

            let selected_rect = Rectangle::new(2, 2, 10, 1);
            let mut renderer = MockRenderer::new();
            let mut seq = Sequence::new();

            renderer
                .expect_draw_text()
                .withf(|_, text, position, color, clip| {
                    text == "Alice"
                        && *position == Point::new(3, 1)
                        && *color == Color::Reset
                        && *clip == Some(CONTENT)
                })
                .times(1)
                .in_sequence(&mut seq)
                .return_const(());
            renderer
                .expect_fill_rectangle()
                .with(eq(selected_rect), eq(CORNFLOWER), eq(Some(CONTENT)))
                .times(1)
                .in_sequence(&mut seq)
                .return_const(());
            renderer
                .expect_draw_text()
                .withf(|_, text, position, color, _| {
                    text == "Bob" && *position == Point::new(3, 2) && *color == Color::White
                })
                .times(1)
                .in_sequence(&mut seq)
                .return_const(());
            for name in ["Carol", "Dave"] {
                renderer
                    .expect_draw_text()
                    .withf(move |_, text, _, color, _| text == name && *color == Color::Reset)
                    .times(1)
                    .in_sequence(&mut seq)
                    .return_const(());
            }

            list.draw_items(&ctx, &mut renderer, CONTENT).unwrap();
        }

        #[test]
        fn test_draw_starts_at_first_visible_index() {
            let ctx = CellContext::default();
            let mut list = names();
            list.set_first_visible_index(4);

            let mut renderer = MockRenderer::new();
            renderer.expect_fill_rectangle().times(0);
            renderer
                .expect_draw_text()
                .withf(|_, text, position, _, _| text == "Eve" && *position == Point::new(3, 1))
                .times(1)
                .return_const(());
            renderer
                .expect_draw_text()
                .withf(|_, text, position, _, _| text == "Frank" && *position == Point::new(3, 2))
                .times(1)
                .return_const(());

            list.draw_items(&ctx, &mut renderer, CONTENT).unwrap();
        }

        #[test]
        fn test_text_offset_shifts_labels() {
            let ctx = CellContext::default();
            let mut list = ItemsList::default().with_items(["Alice"]);
            list.set_text_offset(Point::new(1, 0));

            let mut renderer = MockRenderer::new();
            renderer
                .expect_draw_text()
                .withf(|_, _, position, _, _| *position == Point::new(4, 1))
                .times(1)
                .return_const(());

            list.draw_items(&ctx, &mut renderer, CONTENT).unwrap();
        }

        #[test]
        fn test_draw_propagates_label_errors() {
            let ctx = CellContext::default();
            let list = names().with_label_source(LabelSource::field("title"));
            let mut renderer = MockRenderer::new();
            renderer.expect_draw_text().times(0);

            assert!(list.draw_items(&ctx, &mut renderer, CONTENT).is_err());
        }
    }
}
