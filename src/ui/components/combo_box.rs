//! Collapsed selector with a dropdown list of items

use super::items::{ItemsControl, ItemsList};
use crate::error::GuiResult;
use crate::state::{LabelSource, ListItem, Point, Rectangle, Size, Thickness};
use crate::ui::context::GuiContext;
use crate::ui::input::{Key, KeyboardEvent, PointerEvent};
use crate::ui::renderer::Renderer;
use crate::ui::skin::Skin;
use ratatui::style::Color;

/// Glyph drawn at the right edge of the collapsed box
pub const DROPDOWN_GLYPH: &str = "▾";

/// Shows the selected item in its bounds. When open, the items are listed
/// in a dropdown directly below the bounds.
#[derive(Debug)]
pub struct ComboBox<T> {
    list: ItemsList<T>,
    bounds: Rectangle,
    padding: Thickness,
    is_open: bool,
    background: Option<Color>,
    dropdown_color: Color,
}

impl<T> Default for ComboBox<T> {
    fn default() -> Self {
        Self::new(&Skin::default())
    }
}

impl<T> ComboBox<T> {
    pub fn new(skin: &Skin) -> Self {
        Self {
            list: ItemsList::new(skin),
            bounds: Rectangle::default(),
            padding: Thickness::default(),
            is_open: false,
            background: skin.background_color,
            dropdown_color: skin.dropdown_color,
        }
    }

    pub fn with_items(mut self, items: impl IntoIterator<Item = T>) -> Self {
        self.list = self.list.with_items(items);
        self
    }

    pub fn with_label_source(mut self, source: LabelSource<T>) -> Self {
        self.list = self.list.with_label_source(source);
        self
    }

    pub fn with_bounds(mut self, bounds: Rectangle) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_padding(mut self, padding: Thickness) -> Self {
        self.padding = padding;
        self
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn set_open(&mut self, open: bool) {
        if self.is_open != open {
            tracing::debug!("combo box {}", if open { "opened" } else { "closed" });
        }
        self.is_open = open;
    }

    pub fn toggle(&mut self) {
        self.set_open(!self.is_open);
    }

    /// Area covered by the open dropdown: one row per item below the bounds
    pub fn dropdown_rectangle(&self, ctx: &dyn GuiContext) -> Rectangle {
        let rows = i32::try_from(self.list.len()).unwrap_or(i32::MAX);
        Rectangle::new(
            self.bounds.x,
            self.bounds.bottom(),
            self.bounds.width,
            self.list.item_height(ctx).saturating_mul(rows),
        )
    }
}

impl<T: ListItem> ItemsControl<T> for ComboBox<T> {
    fn items_list(&self) -> &ItemsList<T> {
        &self.list
    }

    fn items_list_mut(&mut self) -> &mut ItemsList<T> {
        &mut self.list
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rectangle) {
        self.bounds = bounds;
    }

    fn content_rectangle(&self, ctx: &dyn GuiContext) -> Rectangle {
        if self.is_open {
            self.dropdown_rectangle(ctx)
        } else {
            self.bounds.shrink(self.padding)
        }
    }

    fn item_clicked(&mut self, _ctx: &dyn GuiContext, _index: usize, _event: &PointerEvent) {
        self.set_open(false);
    }

    fn handle_key(&mut self, _ctx: &dyn GuiContext, event: &KeyboardEvent) -> bool {
        match event.key {
            Key::Enter | Key::Space => {
                self.toggle();
                true
            }
            Key::Escape if self.is_open => {
                self.set_open(false);
                true
            }
            _ => self.list.handle_key(event),
        }
    }

    /// Open on a press inside the bounds. While open, a press on an item
    /// selects it and closes; a press anywhere else just closes.
    fn handle_pointer_down(&mut self, ctx: &dyn GuiContext, event: &PointerEvent) -> bool {
        if self.is_open {
            let content = self.content_rectangle(ctx);
            match self.list.pointer_down(ctx, content, event) {
                Some(index) => self.item_clicked(ctx, index, event),
                None => self.set_open(false),
            }
            return true;
        }

        if self.bounds.contains(event.position) {
            self.set_open(true);
            return true;
        }
        false
    }

    fn desired_size(&self, ctx: &dyn GuiContext, available: Size) -> GuiResult<Size> {
        let extent = self.list.items_extent(ctx)?;
        let glyph = ctx.measure_text(ctx.default_font(), DROPDOWN_GLYPH);
        let height = self.list.item_height(ctx);
        Ok(Size::new(
            (extent.width + glyph.width + self.padding.horizontal()).min(available.width),
            (height + self.padding.vertical()).min(available.height),
        ))
    }

    fn draw(&mut self, ctx: &dyn GuiContext, renderer: &mut dyn Renderer) -> GuiResult<()> {
        if let Some(color) = self.background {
            renderer.fill_rectangle(self.bounds, color, Some(self.bounds));
        }

        let inner = self.bounds.shrink(self.padding);
        let font = self.list.font().unwrap_or_else(|| ctx.default_font());

        if let Some(item) = self.list.selected_item() {
            let text = self.list.item_label(item)?;
            if !text.is_empty() {
                renderer.draw_text(
                    font,
                    &text,
                    inner.location() + self.list.text_offset(),
                    self.list.text_color(),
                    Some(inner),
                );
            }
        }

        let glyph = ctx.measure_text(font, DROPDOWN_GLYPH);
        renderer.draw_text(
            font,
            DROPDOWN_GLYPH,
            Point::new(self.bounds.right() - glyph.width, inner.y),
            self.list.text_color(),
            Some(self.bounds),
        );

        if self.is_open {
            let dropdown = self.dropdown_rectangle(ctx);
            renderer.fill_rectangle(dropdown, self.dropdown_color, None);
            self.list.draw_items(ctx, renderer, dropdown)?;
        }

        Ok(())
    }
}
