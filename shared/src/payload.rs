//! ==============================================================================
//! payload.rs - decoding query responses
//! ==============================================================================
//!
//! purpose:
//!     the backend wraps every answer in `{"data": ...}` but the shape of
//!     `data` varies: plain text, text that is itself json, a list of
//!     records, or nothing at all. this module decides the shape once, at
//!     the network boundary, so rendering never has to inspect raw json.
//!
//! decoding rules:
//!     - missing / null / [] / "" / false / 0 / "null" -> Empty
//!     - "text"                         -> Text (after trying a json decode)
//!     - "[...]" / "{...}" (json text)  -> decoded, then classified again
//!     - ["text", ...]                  -> Text(first element)
//!     - [{...}, ...]                   -> Records
//!     - {...}                          -> Records with one entry
//!
//! ==============================================================================

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::ClientError;

// ==============================================================================
// types
// ==============================================================================

/// decoded response payload
#[derive(Debug, Clone, PartialEq)]
pub enum QueryResult {
    Text(String),
    Records(Vec<Record>),
    Empty,
}

/// one key/value record, fields kept in response order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    pub fields: Vec<(String, Value)>,
}

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    data: Value,
}

impl Record {
    pub fn from_map(map: Map<String, Value>) -> Self {
        Self {
            fields: map.into_iter().collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }
}

// ==============================================================================
// decoding
// ==============================================================================

/// decode a success body into a `QueryResult`
pub fn decode_envelope(body: &str) -> Result<QueryResult, ClientError> {
    let envelope: Envelope =
        serde_json::from_str(body).map_err(|e| ClientError::InvalidResponse(e.to_string()))?;
    Ok(classify(envelope.data))
}

/// classify the `data` field of an envelope
pub fn classify(data: Value) -> QueryResult {
    if is_falsy(&data) {
        return QueryResult::Empty;
    }
    match data {
        Value::String(text) => decode_text(text),
        other => classify_decoded(other),
    }
}

/// secondary decode for string payloads; falls back to the raw text
fn decode_text(text: String) -> QueryResult {
    match serde_json::from_str::<Value>(&text) {
        Ok(decoded @ (Value::Array(_) | Value::Object(_))) => classify_decoded(decoded),
        Ok(Value::String(inner)) => QueryResult::Text(inner),
        Ok(Value::Null) => QueryResult::Empty,
        Ok(_) => QueryResult::Text(text),
        Err(_) => {
            log::trace!("data is plain text ({} bytes)", text.len());
            QueryResult::Text(text)
        }
    }
}

/// "", false, 0 and null all mean nothing came back
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64() == Some(0.0),
        _ => false,
    }
}

fn classify_decoded(value: Value) -> QueryResult {
    match value {
        Value::Null => QueryResult::Empty,
        Value::String(text) => QueryResult::Text(text),
        Value::Bool(_) | Value::Number(_) => QueryResult::Text(value.to_string()),
        Value::Object(map) => QueryResult::Records(vec![Record::from_map(map)]),
        Value::Array(items) => classify_sequence(items),
    }
}

fn classify_sequence(items: Vec<Value>) -> QueryResult {
    let total = items.len();
    let mut items = items.into_iter();
    match items.next() {
        None => QueryResult::Empty,
        // the backend sometimes answers with a list of prose strings; only the
        // first one is shown. kept for compatibility, likely not a contract.
        Some(Value::String(first)) => {
            if total > 1 {
                log::debug!("string sequence: showing first entry, {} dropped", total - 1);
            }
            QueryResult::Text(first)
        }
        Some(first) => QueryResult::Records(
            std::iter::once(first)
                .chain(items)
                .map(record_from_value)
                .collect(),
        ),
    }
}

/// non-object entries become a single `value` field
fn record_from_value(value: Value) -> Record {
    match value {
        Value::Object(map) => Record::from_map(map),
        other => Record {
            fields: vec![("value".to_string(), other)],
        },
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_text() {
        let result = decode_envelope(r#"{"data":"hello"}"#).unwrap();
        assert_eq!(result, QueryResult::Text("hello".into()));
    }

    #[test]
    fn test_missing_and_null_data_are_empty() {
        assert_eq!(decode_envelope(r#"{}"#).unwrap(), QueryResult::Empty);
        assert_eq!(decode_envelope(r#"{"data":null}"#).unwrap(), QueryResult::Empty);
        assert_eq!(decode_envelope(r#"{"data":[]}"#).unwrap(), QueryResult::Empty);
    }

    #[test]
    fn test_falsy_data_is_empty() {
        for body in [
            r#"{"data":""}"#,
            r#"{"data":false}"#,
            r#"{"data":0}"#,
            r#"{"data":"null"}"#,
        ] {
            assert_eq!(decode_envelope(body).unwrap(), QueryResult::Empty, "{}", body);
        }
    }

    #[test]
    fn test_truthy_scalars_stay_text() {
        assert_eq!(classify(json!(true)), QueryResult::Text("true".into()));
        assert_eq!(classify(json!(7)), QueryResult::Text("7".into()));
        assert_eq!(classify(json!("0")), QueryResult::Text("0".into()));
    }

    #[test]
    fn test_record_list_keeps_field_order() {
        let result =
            decode_envelope(r#"{"data":[{"name":"Paris","country":"France","area":105}]}"#)
                .unwrap();
        let QueryResult::Records(records) = result else {
            panic!("expected records");
        };
        let keys: Vec<_> = records[0].fields.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["name", "country", "area"]);
    }

    #[test]
    fn test_json_encoded_string_is_decoded() {
        let inner = json!([{"title": "Alien", "year": 1979}]).to_string();
        let body = json!({ "data": inner }).to_string();
        let QueryResult::Records(records) = decode_envelope(&body).unwrap() else {
            panic!("expected records");
        };
        assert_eq!(records[0].get("title"), Some(&json!("Alien")));
    }

    #[test]
    fn test_broken_json_string_falls_back_to_text() {
        let body = json!({ "data": "[{\"name\": \"Paris\"" }).to_string();
        assert_eq!(
            decode_envelope(&body).unwrap(),
            QueryResult::Text("[{\"name\": \"Paris\"".into())
        );
    }

    #[test]
    fn test_scalar_json_string_stays_text() {
        let body = json!({ "data": "42" }).to_string();
        assert_eq!(decode_envelope(&body).unwrap(), QueryResult::Text("42".into()));
    }

    #[test]
    fn test_string_sequence_shows_first_only() {
        let body = json!({ "data": ["first fact", "second fact"] }).to_string();
        assert_eq!(
            decode_envelope(&body).unwrap(),
            QueryResult::Text("first fact".into())
        );
    }

    #[test]
    fn test_single_object_is_one_record() {
        let body = json!({ "data": {"sport": "cricket"} }).to_string();
        let QueryResult::Records(records) = decode_envelope(&body).unwrap() else {
            panic!("expected records");
        };
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_scalar_items_wrapped() {
        let result = classify(json!([1, 2]));
        let QueryResult::Records(records) = result else {
            panic!("expected records");
        };
        assert_eq!(records[1].get("value"), Some(&json!(2)));
    }

    #[test]
    fn test_invalid_body() {
        assert!(matches!(
            decode_envelope("<html>502</html>"),
            Err(ClientError::InvalidResponse(_))
        ));
    }
}
