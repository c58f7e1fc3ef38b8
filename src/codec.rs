//! JSON segment codec
//!
//! A segment is a JSON object serialized to text and Base64URL-encoded
//! without padding. Keys keep their insertion order, so a header built as
//! `{"alg":..,"typ":..}` always encodes to the same bytes.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::utils::{base64url, finite};

/// An ordered JSON object: the shape of both header and claims
pub type Mapping = Map<String, Value>;

/// Serialize any value into a JSON object
///
/// `what` names the argument in the error when the value serializes to
/// something other than an object. NaN and infinite floats are rejected with
/// [`Error::Serialization`] rather than written as `null`.
pub fn to_mapping<T>(value: &T, what: &'static str) -> Result<Mapping>
where
    T: Serialize + ?Sized,
{
    finite::ensure_finite(value).map_err(|e| Error::Serialization(e.to_string()))?;

    match serde_json::to_value(value).map_err(|e| Error::Serialization(e.to_string()))? {
        Value::Object(map) => Ok(map),
        other => Err(Error::NotAnObject {
            what,
            found: kind_of(&other),
        }),
    }
}

/// Encode a mapping as an unpadded Base64URL segment
pub fn encode(mapping: &Mapping) -> Result<String> {
    encode_within(mapping, usize::MAX)
}

/// Encode a mapping, failing with [`Error::TokenTooLarge`] when its JSON text
/// is longer than `max_size` bytes
///
/// Uses the same bound [`decode`] applies, so a segment produced here always
/// decodes under the same `max_size`.
pub fn encode_within(mapping: &Mapping, max_size: usize) -> Result<String> {
    let json = serde_json::to_string(mapping).map_err(|e| Error::Serialization(e.to_string()))?;
    if json.len() > max_size {
        return Err(Error::TokenTooLarge {
            size: json.len(),
            max: max_size,
        });
    }
    Ok(base64url::encode(&json))
}

/// Decode a Base64URL segment into a mapping
///
/// An empty segment, or one that decodes to empty text, yields an empty
/// mapping. Anything else must be valid Base64URL carrying a JSON object.
pub fn decode(segment: &str, max_size: usize) -> Result<Mapping> {
    let json = base64url::decode(segment, max_size)?;
    if json.is_empty() {
        return Ok(Mapping::new());
    }

    match serde_json::from_str::<Value>(&json).map_err(|e| Error::InvalidJson(e.to_string()))? {
        Value::Object(map) => Ok(map),
        other => Err(Error::InvalidJson(format!(
            "expected a JSON object, found {}",
            kind_of(&other)
        ))),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
