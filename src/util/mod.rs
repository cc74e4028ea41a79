use serde::de;
use serde_json::Value;

/// Accepts any JSON value, keeping it only when it is a string.
pub(crate) fn deserialize_string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: de::Deserializer<'de>,
{
    let value: Value = de::Deserialize::deserialize(deserializer)?;

    match value {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}
