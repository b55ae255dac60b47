//! Reusable UI components

mod combo_box;
mod items;
mod list_box;

pub use combo_box::{ComboBox, DROPDOWN_GLYPH};
pub use items::{ItemsControl, ItemsList, TextInfo};
pub use list_box::ListBox;
