//! Widgets, rendering and input for the terminal UI

pub mod components;
pub mod context;
pub mod input;
pub mod renderer;
pub mod skin;
mod widgets;

pub use context::{CellContext, Font, GuiContext};
pub use input::{InputEvent, Key, KeyboardEvent, PointerButton, PointerEvent};
pub use renderer::{BufferRenderer, Renderer};
pub use skin::Skin;
pub use widgets::render_items_control;
