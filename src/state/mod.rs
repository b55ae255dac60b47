//! Widget state: geometry, selection and item labels

mod geometry;
mod item_label;
mod selection;

pub use geometry::*;
pub use item_label::*;
pub use selection::*;
