use crate::CachePolicy;

use quarry_sql::CoercionMode;
use serde::Deserialize;

/// Connector settings a host application can load from its own
/// configuration files.
///
/// ```
/// let config: quarry::Config = serde_json::from_str(r#"{
///     "coercion": "strict",
///     "cache": { "max_entries": 500, "invalidate_on_write": true },
///     "lang": "en"
/// }"#).unwrap();
///
/// assert_eq!(config.lang.as_deref(), Some("en"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How mismatched mutation values are handled
    pub coercion: CoercionMode,

    /// Policy for the registry's shared result cache
    pub cache: CachePolicy,

    /// Replaces the `_LANG` suffix in statements
    pub lang: Option<String>,
}
