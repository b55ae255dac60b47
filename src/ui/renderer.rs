//! Renderer abstraction and the ratatui buffer implementation

use super::context::Font;
use crate::state::{Point, Rectangle};
use ratatui::{buffer::Buffer, layout::Position, style::Color};
use unicode_width::UnicodeWidthChar;

/// Drawing primitives widgets render through
#[cfg_attr(test, mockall::automock)]
pub trait Renderer {
    /// Fill `rect` with `color`, suppressing anything outside `clip`
    fn fill_rectangle(&mut self, rect: Rectangle, color: Color, clip: Option<Rectangle>);

    /// Draw `text` with its top-left corner at `position`
    fn draw_text(
        &mut self,
        font: &Font,
        text: &str,
        position: Point,
        color: Color,
        clip: Option<Rectangle>,
    );
}

/// Renderer writing straight into a ratatui buffer
pub struct BufferRenderer<'a> {
    buffer: &'a mut Buffer,
}

impl<'a> BufferRenderer<'a> {
    pub fn new(buffer: &'a mut Buffer) -> Self {
        Self { buffer }
    }

    /// Drawable region: the buffer area narrowed by the optional clip
    fn visible_region(&self, clip: Option<Rectangle>) -> Rectangle {
        let area = Rectangle::from(self.buffer.area);
        match clip {
            Some(clip) => area.intersection(&clip),
            None => area,
        }
    }
}

fn to_position(x: i32, y: i32) -> Option<Position> {
    Some(Position::new(u16::try_from(x).ok()?, u16::try_from(y).ok()?))
}

impl Renderer for BufferRenderer<'_> {
    fn fill_rectangle(&mut self, rect: Rectangle, color: Color, clip: Option<Rectangle>) {
        let region = rect.intersection(&self.visible_region(clip));
        if region.is_empty() {
            return;
        }

        for y in region.top()..region.bottom() {
            for x in region.left()..region.right() {
                if let Some(cell) = to_position(x, y).and_then(|pos| self.buffer.cell_mut(pos)) {
                    cell.set_bg(color);
                }
            }
        }
    }

    fn draw_text(
        &mut self,
        font: &Font,
        text: &str,
        position: Point,
        color: Color,
        clip: Option<Rectangle>,
    ) {
        let region = self.visible_region(clip);
        if region.is_empty() {
            return;
        }

        let mut x = position.x;
        let mut y = position.y;
        for ch in text.chars() {
            if ch == '\n' {
                x = position.x;
                y += font.line_height;
                continue;
            }

            let width = ch.width().unwrap_or(0) as i32;
            if width == 0 {
                continue;
            }

            // A glyph is drawn only when every cell it covers is visible
            let glyph = Rectangle::new(x, y, width, 1);
            if glyph.intersection(&region) == glyph {
                if let Some(cell) = to_position(x, y).and_then(|pos| self.buffer.cell_mut(pos)) {
                    cell.set_char(ch).set_fg(color).modifier.insert(font.modifier);
                }
            }
            x += width;
        }
    }
}
