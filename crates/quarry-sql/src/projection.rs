//! Column projection for a schema's primary table.

use quarry_core::Schema;

/// Returns one `table.column AS key` projection per column the schema stores
/// in its primary table, in declaration order.
///
/// Compressed columns are read through `UNCOMPRESS()`. Relation, pivot,
/// computed and concatenated fields are resolved elsewhere and never
/// projected.
pub fn project(schema: &Schema) -> Vec<String> {
    let table = schema.table_name();

    schema
        .same_table_fields()
        .filter(|field| !field.is_virtual())
        .map(|field| {
            let column = field.column.trim();
            if field.is_compressed() {
                format!("UNCOMPRESS({table}.{column}) AS {}", field.key)
            } else {
                format!("{table}.{column} AS {}", field.key)
            }
        })
        .collect()
}
