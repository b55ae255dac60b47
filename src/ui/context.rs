//! Fonts and text measurement

use crate::state::Size;
use ratatui::style::Modifier;
use unicode_width::UnicodeWidthStr;

/// Font metrics plus the terminal modifiers used when drawing with it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Font {
    pub name: String,
    /// Height of one text line in rows
    pub line_height: i32,
    pub modifier: Modifier,
}

impl Font {
    /// Plain one-row terminal font
    pub fn cell() -> Self {
        Self {
            name: "cell".to_string(),
            line_height: 1,
            modifier: Modifier::empty(),
        }
    }

    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifier = modifier;
        self
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::cell()
    }
}

/// Services a widget needs from its host while laying out and drawing
pub trait GuiContext {
    /// Font used by controls that don't set their own
    fn default_font(&self) -> &Font;

    /// Size of `text` when drawn with `font`
    fn measure_text(&self, font: &Font, text: &str) -> Size;
}

/// Terminal context: one column per display cell, `line_height` rows per line
#[derive(Debug, Clone, Default)]
pub struct CellContext {
    font: Font,
}

impl CellContext {
    pub fn new(font: Font) -> Self {
        Self { font }
    }
}

impl GuiContext for CellContext {
    fn default_font(&self) -> &Font {
        &self.font
    }

    fn measure_text(&self, font: &Font, text: &str) -> Size {
        let (width, lines) = text
            .split('\n')
            .fold((0usize, 0i32), |(width, lines), line| {
                (width.max(line.width()), lines + 1)
            });
        Size::new(
            i32::try_from(width).unwrap_or(i32::MAX),
            lines * font.line_height,
        )
    }
}
