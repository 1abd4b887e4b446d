//! Structured error types for gridfill.
//!
//! Contract violations surface as `Err`; recoverable replication skips are
//! logged and reported, not raised.

use crate::types::CellRange;

/// All errors that can occur in gridfill selection, clipboard, and fill operations.
#[derive(Debug, thiserror::Error)]
pub enum GridfillError {
    /// A range with inverted coordinates was passed to an engine entry point.
    #[error("malformed range (inverted coordinates): {0}")]
    MalformedRange(CellRange),

    /// A row index outside the dataset was used directly against the accessor.
    #[error("row index {0} out of bounds")]
    RowOutOfBounds(u32),

    /// A column index with no field mapping.
    #[error("column index {0} out of bounds")]
    ColumnOutOfBounds(u32),

    /// The component was constructed without any column definitions.
    #[error("no columns defined; nothing can map cell indices to record fields")]
    NoColumns,

    /// Malformed clipboard text (e.g. an unterminated quoted field).
    #[error("clipboard parse error: {0}")]
    Clipboard(String),

    /// JSON (de)serialization of record values.
    #[error("record serialization: {0}")]
    Json(#[from] serde_json::Error),

    /// Catch-all for string errors.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridfillError>;

impl From<String> for GridfillError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for GridfillError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<GridfillError> for wasm_bindgen::JsValue {
    fn from(e: GridfillError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
