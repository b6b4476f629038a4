use mysql_async::{consts::ColumnType, from_value_opt, Column, Value as MyValue};
use quarry_core::stmt::{Row, Value};

/// Converts a result row, keyed by column name in select order.
pub(crate) fn from_row(mut row: mysql_async::Row) -> Row {
    let columns = row.columns();

    columns
        .iter()
        .enumerate()
        .map(|(index, column)| {
            let value = row
                .take::<MyValue, usize>(index)
                .map(|value| from_sql(value, column))
                .unwrap_or_default();

            (column.name_str().into_owned(), value)
        })
        .collect()
}

/// The text protocol returns every cell as bytes; the column type decides how
/// they are read.
pub(crate) fn from_sql(value: MyValue, column: &Column) -> Value {
    if value == MyValue::NULL {
        return Value::Null;
    }

    match column.column_type() {
        ColumnType::MYSQL_TYPE_TINY
        | ColumnType::MYSQL_TYPE_SHORT
        | ColumnType::MYSQL_TYPE_INT24
        | ColumnType::MYSQL_TYPE_LONG
        | ColumnType::MYSQL_TYPE_LONGLONG
        | ColumnType::MYSQL_TYPE_YEAR => match from_value_opt::<i64>(value) {
            Ok(v) => Value::I64(v),
            Err(err) => untyped(err.0),
        },
        ColumnType::MYSQL_TYPE_FLOAT | ColumnType::MYSQL_TYPE_DOUBLE => {
            match from_value_opt::<f64>(value) {
                Ok(v) => Value::F64(v),
                Err(err) => untyped(err.0),
            }
        }
        ColumnType::MYSQL_TYPE_DATE
        | ColumnType::MYSQL_TYPE_DATETIME
        | ColumnType::MYSQL_TYPE_TIMESTAMP => datetime(value),
        _ => untyped(value),
    }
}

/// Zero dates do not exist in the civil calendar and stay text.
fn datetime(value: MyValue) -> Value {
    match value {
        MyValue::Bytes(bytes) => match std::str::from_utf8(&bytes)
            .ok()
            .and_then(|text| text.parse::<jiff::civil::DateTime>().ok())
        {
            Some(datetime) => Value::DateTime(datetime),
            None => untyped(MyValue::Bytes(bytes)),
        },
        MyValue::Date(year, month, day, hour, minute, second, micros) => {
            match jiff::civil::DateTime::new(
                year as i16,
                month as i8,
                day as i8,
                hour as i8,
                minute as i8,
                second as i8,
                micros as i32 * 1000,
            ) {
                Ok(datetime) => Value::DateTime(datetime),
                Err(_) => untyped(value),
            }
        }
        value => untyped(value),
    }
}

fn untyped(value: MyValue) -> Value {
    match value {
        MyValue::NULL => Value::Null,
        MyValue::Bytes(bytes) => Value::String(String::from_utf8_lossy(&bytes).into_owned()),
        MyValue::Int(v) => Value::I64(v),
        MyValue::UInt(v) => match i64::try_from(v) {
            Ok(v) => Value::I64(v),
            Err(_) => Value::String(v.to_string()),
        },
        MyValue::Float(v) => Value::F64(v as f64),
        MyValue::Double(v) => Value::F64(v),
        MyValue::Date(year, month, day, hour, minute, second, _) => Value::String(format!(
            "{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}"
        )),
        MyValue::Time(negative, days, hours, minutes, seconds, _) => {
            let sign = if negative { "-" } else { "" };
            let hours = days * 24 + u32::from(hours);
            Value::String(format!("{sign}{hours:02}:{minutes:02}:{seconds:02}"))
        }
    }
}
