//! The decoded configuration record.

use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Marker printed in place of credentials.
pub const REDACTED: &str = "[REDACTED]";

const FIELDS: [&str; 3] = ["database_url", "api_key", "max_retries"];

/// Settings read from a JSON configuration file.
///
/// Every field is optional in the source document. Missing keys and explicit
/// `null` both leave the zero value, so `""` / `0` cannot be told apart from
/// an absent key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigRecord {
    /// Database connection string, passed through verbatim.
    #[serde(deserialize_with = "null_as_default")]
    pub database_url: String,

    /// Opaque credential.
    #[serde(deserialize_with = "null_as_default")]
    pub api_key: String,

    /// Retry budget for downstream consumers.
    #[serde(deserialize_with = "null_as_default")]
    pub max_retries: i64,
}

impl ConfigRecord {
    /// Decode a config document.
    ///
    /// The top level must be an object; `null` yields the default record.
    /// Keys match field names ignoring ASCII case and a repeated key keeps the
    /// value that appears last.
    pub fn from_json_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        let object = match serde_json::from_slice::<Value>(bytes)? {
            Value::Object(object) => object,
            Value::Null => return Ok(Self::default()),
            other => return Err(de::Error::invalid_type(unexpected(&other), &"a JSON object")),
        };

        let mut fields = Map::new();
        for (key, value) in object {
            if let Some(name) = FIELDS.iter().find(|name| name.eq_ignore_ascii_case(&key)) {
                fields.insert((*name).to_string(), value);
            }
        }
        serde_json::from_value(Value::Object(fields))
    }

    /// Copy with the credential masked, for printing.
    pub fn redacted(&self) -> Self {
        let api_key = if self.api_key.is_empty() { String::new() } else { REDACTED.to_string() };
        Self { api_key, ..self.clone() }
    }
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Number(_) => Unexpected::Other("number"),
        Value::Null => Unexpected::Unit,
        Value::Object(_) => Unexpected::Map,
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
