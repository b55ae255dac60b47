//! Always-expanded list of selectable items

use super::items::{ItemsControl, ItemsList};
use crate::error::GuiResult;
use crate::state::{LabelSource, ListItem, Rectangle, Size, Thickness};
use crate::ui::context::GuiContext;
use crate::ui::input::PointerEvent;
use crate::ui::renderer::Renderer;
use crate::ui::skin::Skin;
use ratatui::style::Color;
use std::fmt;

type ClickHandler = Box<dyn FnMut(usize)>;

/// A list box shows one row per item inside its bounds and keeps the
/// selected row scrolled into view.
pub struct ListBox<T> {
    list: ItemsList<T>,
    bounds: Rectangle,
    padding: Thickness,
    background: Option<Color>,
    click_handlers: Vec<ClickHandler>,
}

impl<T: fmt::Debug> fmt::Debug for ListBox<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListBox")
            .field("list", &self.list)
            .field("bounds", &self.bounds)
            .field("padding", &self.padding)
            .field("background", &self.background)
            .finish_non_exhaustive()
    }
}

impl<T> Default for ListBox<T> {
    fn default() -> Self {
        Self::new(&Skin::default())
    }
}

impl<T> ListBox<T> {
    pub fn new(skin: &Skin) -> Self {
        Self {
            list: ItemsList::new(skin),
            bounds: Rectangle::default(),
            padding: Thickness::default(),
            background: skin.background_color,
            click_handlers: Vec::new(),
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

    pub fn padding(&self) -> Thickness {
        self.padding
    }

    pub fn set_background(&mut self, color: Option<Color>) {
        self.background = color;
    }

    /// Register a handler called with the index of every clicked item
    pub fn on_item_clicked(&mut self, handler: impl FnMut(usize) + 'static) {
        self.click_handlers.push(Box::new(handler));
    }
}

impl<T: ListItem> ItemsControl<T> for ListBox<T> {
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

    fn content_rectangle(&self, _ctx: &dyn GuiContext) -> Rectangle {
        self.bounds.shrink(self.padding)
    }

    fn item_clicked(&mut self, _ctx: &dyn GuiContext, index: usize, _event: &PointerEvent) {
        for handler in &mut self.click_handlers {
            handler(index);
        }
    }

    fn desired_size(&self, ctx: &dyn GuiContext, available: Size) -> GuiResult<Size> {
        let extent = self.list.items_extent(ctx)?;
        Ok(Size::new(
            (extent.width + self.padding.horizontal()).min(available.width),
            (extent.height + self.padding.vertical()).min(available.height),
        ))
    }

    fn draw(&mut self, ctx: &dyn GuiContext, renderer: &mut dyn Renderer) -> GuiResult<()> {
        if let Some(color) = self.background {
            renderer.fill_rectangle(self.bounds, color, Some(self.bounds));
        }

        let content = self.content_rectangle(ctx);
        self.list.scroll_into_view(ctx, content, content);
        self.list.draw_items(ctx, renderer, content)
    }
}
