//! Error types for the items widgets

use thiserror::Error;

/// Failures surfaced by widget operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GuiError {
    /// A label field was requested that the item type does not expose
    #[error("item type `{item}` has no field named `{field}`")]
    UnknownField { field: String, item: &'static str },
}

pub type GuiResult<T> = std::result::Result<T, GuiError>;
