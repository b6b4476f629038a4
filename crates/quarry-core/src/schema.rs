mod field;
pub use field::{Field, FieldKind, Relation};

use indexmap::IndexMap;

/// Describes how the fields of a model map onto the columns of its table.
///
/// Fields are kept in declaration order. Projection and mutation payloads
/// follow that order, not an alphabetical one.
#[derive(Debug, Clone)]
pub struct Schema {
    /// Primary table name
    pub table: String,

    /// Fields keyed by their projection key
    pub fields: IndexMap<String, Field>,
}

impl Schema {
    pub fn new(table: impl Into<String>) -> Schema {
        Schema {
            table: table.into(),
            fields: IndexMap::new(),
        }
    }

    /// Adds a field, replacing any previous field with the same key.
    pub fn field(mut self, field: Field) -> Schema {
        self.fields.insert(field.key.clone(), field);
        self
    }

    pub fn table_name(&self) -> &str {
        &self.table
    }

    /// Every declared field, including those stored in other tables and
    /// relation fields.
    pub fn all_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.values()
    }

    /// Fields whose column lives in the primary table.
    pub fn same_table_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.values().filter(move |field| match &field.table {
            Some(table) => *table == self.table,
            None => true,
        })
    }
}
