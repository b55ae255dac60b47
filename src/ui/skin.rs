//! Style defaults shared by the items widgets

use super::context::Font;
use crate::config::TuiConfig;
use crate::state::Thickness;
use ratatui::style::Color;

/// Cornflower blue, the default selection background
pub const CORNFLOWER_BLUE: Color = Color::Rgb(100, 149, 237);

/// Colors, font and spacing applied to widgets when they are built
#[derive(Debug, Clone, PartialEq)]
pub struct Skin {
    /// Font override; `None` falls back to the context's default font
    pub font: Option<Font>,
    pub text_color: Color,
    pub selected_text_color: Color,
    pub selected_item_color: Color,
    pub item_padding: Thickness,
    /// Background behind a list box's bounds
    pub background_color: Option<Color>,
    /// Background behind an open combo box dropdown
    pub dropdown_color: Color,
}

impl Default for Skin {
    fn default() -> Self {
        Self {
            font: None,
            text_color: Color::Reset,
            selected_text_color: Color::White,
            selected_item_color: CORNFLOWER_BLUE,
            item_padding: Thickness::symmetric(1, 0),
            background_color: None,
            dropdown_color: Color::DarkGray,
        }
    }
}

impl Skin {
    /// Apply the overrides present in `config`
    pub fn with_config(mut self, config: &TuiConfig) -> Self {
        if let Some(color) = config.selected_text_color {
            self.selected_text_color = color;
        }
        if let Some(color) = config.selected_item_color {
            self.selected_item_color = color;
        }
        if let Some(color) = config.text_color {
            self.text_color = color;
        }
        if let Some(padding) = config.item_padding {
            self.item_padding = padding;
        }
        self
    }
}
