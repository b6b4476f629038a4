//! Type-directed conversion of application values into assignment literals.

use crate::{
    escape::{escape_html, escape_string},
    stmt::Literal,
};

use indexmap::IndexMap;
use jiff::tz::TimeZone;
use quarry_core::{
    err,
    schema::{Field, FieldKind},
    stmt::Value,
    Error, Result, Schema,
};
use serde::Deserialize;

/// Written to datetime columns when the value is not a date.
pub const ZERO_DATETIME: &str = "0000-00-00 00:00:00";

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// What to do when a value does not match its field's kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoercionMode {
    /// Substitute the field's default (zero, empty string, zero date).
    #[default]
    Lenient,

    /// Fail with a type conversion error.
    Strict,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Coercer {
    mode: CoercionMode,
}

impl Coercer {
    pub fn new(mode: CoercionMode) -> Coercer {
        Coercer { mode }
    }

    pub fn lenient() -> Coercer {
        Coercer::new(CoercionMode::Lenient)
    }

    pub fn strict() -> Coercer {
        Coercer::new(CoercionMode::Strict)
    }

    pub fn mode(&self) -> CoercionMode {
        self.mode
    }

    /// Converts a mutation payload into column assignments.
    ///
    /// Fields are visited in schema order. Each reads its value from the
    /// field's input key (`<key>Id` for foreign keys); keys with no matching
    /// field are ignored. Fields that are not stored in a column are skipped.
    pub fn prepare(
        &self,
        schema: &Schema,
        mut data: IndexMap<String, Value>,
    ) -> Result<IndexMap<String, Literal>> {
        let mut parsed = IndexMap::new();

        for field in schema.all_fields() {
            if !field.is_persisted() {
                continue;
            }

            let Some(value) = data.swap_remove(&field.input_key()) else {
                continue;
            };

            let literal = self.coerce(field, value)?;
            parsed.insert(field.column.clone(), literal);
        }

        Ok(parsed)
    }

    /// Converts a single value according to its field's kind.
    pub fn coerce(&self, field: &Field, value: Value) -> Result<Literal> {
        match &field.kind {
            FieldKind::String
            | FieldKind::Email
            | FieldKind::ForeignKey(_)
            | FieldKind::RelatedKeys(_) => {
                let text = self.text(field, value)?;
                Ok(self.compress(field, text.trim().to_string()))
            }
            FieldKind::RelatedKeysArray(_) => {
                let text = match value {
                    Value::List(items) => items
                        .into_iter()
                        .map(|item| self.text(field, item).map(|text| text.trim().to_string()))
                        .collect::<Result<Vec<_>>>()?
                        .join(","),
                    value => self.text(field, value)?.trim().to_string(),
                };
                Ok(self.compress(field, text))
            }
            FieldKind::Html => {
                let text = self.text(field, value)?;
                Ok(self.compress(field, escape_html(&text)))
            }
            FieldKind::Boolean => Ok(Literal::from(self.boolean(field, value)?)),
            FieldKind::Integer => Ok(Literal::Int(self.integer(field, value)?)),
            FieldKind::Float => Ok(Literal::Float(self.float(field, value)?)),
            FieldKind::UnixTimestamp => Ok(Literal::Int(self.unix_timestamp(field, value)?)),
            FieldKind::DateTime => Ok(Literal::Text(self.datetime(field, value)?)),
            FieldKind::File => match value {
                Value::File(file) => Ok(Literal::Text(file.name)),
                Value::Null => Ok(Literal::Text(String::new())),
                value => self.mismatch(field, value, "File", Literal::Text(String::new())),
            },
            FieldKind::Json => {
                let text = self.json(field, value)?;
                Ok(self.compress(field, text))
            }
            // Not stored in a column. Rendered as text if a caller asks
            // anyway.
            FieldKind::Related(_)
            | FieldKind::Pivot(_)
            | FieldKind::Computed
            | FieldKind::Concat(_) => Ok(Literal::Text(self.text(field, value)?)),
        }
    }

    fn compress(&self, field: &Field, text: String) -> Literal {
        if field.is_compressed() {
            Literal::Expr(format!("{}'{}')", Literal::COMPRESS, escape_string(&text)))
        } else {
            Literal::Text(text)
        }
    }

    fn text(&self, field: &Field, value: Value) -> Result<String> {
        match value {
            Value::String(text) => Ok(text),
            Value::I64(v) => Ok(v.to_string()),
            Value::F64(v) => Ok(v.to_string()),
            Value::Bool(v) => Ok(if v { "1" } else { "0" }.to_string()),
            Value::Null => Ok(String::new()),
            value => self.mismatch(field, value, "String", String::new()),
        }
    }

    fn boolean(&self, field: &Field, value: Value) -> Result<bool> {
        match value {
            Value::Bool(v) => Ok(v),
            Value::I64(v) => Ok(v != 0),
            Value::Null => Ok(false),
            Value::String(ref text) => match text.trim().to_ascii_lowercase().as_str() {
                "1" | "true" => Ok(true),
                "0" | "false" | "" => Ok(false),
                _ => self.mismatch(field, value, "Bool", false),
            },
            value => self.mismatch(field, value, "Bool", false),
        }
    }

    fn integer(&self, field: &Field, value: Value) -> Result<i64> {
        match value {
            Value::I64(v) => Ok(v),
            Value::F64(v) if v.is_finite() => Ok(v as i64),
            Value::Bool(v) => Ok(v as i64),
            Value::Null => Ok(0),
            Value::String(ref text) => {
                let text = text.trim();
                match text.parse::<i64>() {
                    Ok(v) => Ok(v),
                    Err(_) => match finite(text) {
                        Some(v) => Ok(v as i64),
                        None => self.mismatch(field, value, "I64", 0),
                    },
                }
            }
            value => self.mismatch(field, value, "I64", 0),
        }
    }

    fn float(&self, field: &Field, value: Value) -> Result<f64> {
        match value {
            Value::F64(v) if v.is_finite() => Ok(v),
            Value::I64(v) => Ok(v as f64),
            Value::Bool(v) => Ok(if v { 1.0 } else { 0.0 }),
            Value::Null => Ok(0.0),
            Value::String(ref text) => match finite(text.trim()) {
                Some(v) => Ok(v),
                None => self.mismatch(field, value, "F64", 0.0),
            },
            value => self.mismatch(field, value, "F64", 0.0),
        }
    }

    /// Civil date-times are interpreted as UTC.
    fn unix_timestamp(&self, field: &Field, value: Value) -> Result<i64> {
        match value {
            Value::DateTime(datetime) => match datetime.to_zoned(TimeZone::UTC) {
                Ok(zoned) => Ok(zoned.timestamp().as_second()),
                Err(_) => self.mismatch(field, value, "Timestamp", 0),
            },
            Value::Timestamp(timestamp) => Ok(timestamp.as_second()),
            Value::Null => Ok(0),
            value => self.mismatch(field, value, "Timestamp", 0),
        }
    }

    fn datetime(&self, field: &Field, value: Value) -> Result<String> {
        match value {
            Value::DateTime(datetime) => Ok(datetime.strftime(DATETIME_FORMAT).to_string()),
            Value::Timestamp(timestamp) => Ok(timestamp
                .to_zoned(TimeZone::UTC)
                .datetime()
                .strftime(DATETIME_FORMAT)
                .to_string()),
            Value::Null => Ok(ZERO_DATETIME.to_string()),
            value => self.mismatch(field, value, "DateTime", ZERO_DATETIME.to_string()),
        }
    }

    /// Arrays and objects are serialized and HTML-escaped. A string is taken
    /// to be JSON text already.
    fn json(&self, field: &Field, value: Value) -> Result<String> {
        match value {
            Value::Json(json @ (serde_json::Value::Array(_) | serde_json::Value::Object(_))) => {
                Ok(escape_html(&serde_json::to_string(&json)?))
            }
            Value::List(ref items) => match items.iter().map(to_json).collect::<Option<Vec<_>>>() {
                Some(items) => Ok(escape_html(&serde_json::to_string(&items)?)),
                None => self.mismatch(field, value, "Json", String::new()),
            },
            Value::Json(serde_json::Value::String(text)) | Value::String(text) => Ok(text),
            Value::Json(serde_json::Value::Null) | Value::Null => Ok(String::new()),
            Value::Json(json) => Ok(json.to_string()),
            value => self.mismatch(field, value, "Json", String::new()),
        }
    }

    fn mismatch<T>(&self, field: &Field, value: Value, to_type: &'static str, default: T) -> Result<T> {
        match self.mode {
            CoercionMode::Strict => Err(Error::type_conversion(value, to_type)
                .context(err!("field `{}` ({})", field.key, field.kind.name()))),
            CoercionMode::Lenient => {
                tracing::debug!(
                    field = %field.key,
                    kind = field.kind.name(),
                    value = value.type_name(),
                    "substituting default for mismatched value"
                );
                Ok(default)
            }
        }
    }
}

/// Parses a float, rejecting `NaN` and infinities.
fn finite(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// JSON form of a list item. Files and non-finite floats have none.
fn to_json(value: &Value) -> Option<serde_json::Value> {
    Some(match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(v) => serde_json::Value::Bool(*v),
        Value::I64(v) => serde_json::Value::from(*v),
        Value::F64(v) => serde_json::Number::from_f64(*v)?.into(),
        Value::String(v) => serde_json::Value::String(v.clone()),
        Value::DateTime(v) => serde_json::Value::String(v.strftime(DATETIME_FORMAT).to_string()),
        Value::Timestamp(v) => serde_json::Value::from(v.as_second()),
        Value::Json(v) => v.clone(),
        Value::List(items) => items.iter().map(to_json).collect::<Option<Vec<_>>>()?.into(),
        Value::File(_) => return None,
    })
}
