use super::Value;

use indexmap::IndexMap;

/// A single result row, keyed by column name in the order the backend
/// returned the columns.
pub type Row = IndexMap<String, Value>;

/// An ordered row set.
pub type Rows = Vec<Row>;
