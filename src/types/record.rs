//! Row records and column definitions.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One data row: a mapping from field name to value.
pub type Record = serde_json::Map<String, Value>;

/// A column definition mapping a grid column index to a record field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Unique column id.
    pub id: String,
    /// Record field this column reads and writes.
    pub field: String,
    /// Header label shown by the embedding grid.
    #[serde(default)]
    pub name: String,
}

impl Column {
    /// Create a column whose id, field, and label share one name.
    #[must_use]
    pub fn new(field: &str) -> Self {
        Self {
            id: field.to_string(),
            field: field.to_string(),
            name: field.to_string(),
        }
    }
}
