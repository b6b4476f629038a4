/// Builds a [`Row`](quarry_core::stmt::Row) from `column => value` pairs.
#[macro_export]
macro_rules! row {
    ( $( $column:expr => $value:expr ),* $(,)? ) => {{
        let mut row = $crate::quarry_core::stmt::Row::new();
        $( row.insert($column.to_string(), $crate::quarry_core::stmt::Value::from($value)); )*
        row
    }};
}

/// Builds a mutation payload from `key => value` pairs.
#[macro_export]
macro_rules! data {
    ( $( $key:expr => $value:expr ),* $(,)? ) => {{
        let mut data = $crate::indexmap::IndexMap::<String, $crate::quarry_core::stmt::Value>::new();
        $( data.insert($key.to_string(), $crate::quarry_core::stmt::Value::from($value)); )*
        data
    }};
}
