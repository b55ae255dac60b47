//! Items TUI - scrollable, selectable items-list widgets
//!
//! The [`ui::components::ItemsList`] core stores items, tracks the selection
//! and the scroll position, lays out one row per item and draws through a
//! [`ui::Renderer`]. [`ui::components::ListBox`] and
//! [`ui::components::ComboBox`] build on it through the
//! [`ui::components::ItemsControl`] trait.

pub mod config;
pub mod error;
pub mod state;
pub mod ui;

pub use error::{GuiError, GuiResult};
