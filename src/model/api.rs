use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// Error body in the shape produced by the backend framework's own validation layer.
#[derive(Debug, Deserialize)]
pub struct DetailDto {
    pub detail: serde_json::Value,
}

/// Acknowledgement returned by create, update and delete.
///
/// A small string-keyed status map such as `{"message": "Fund created"}`. An empty 2xx body
/// decodes to an empty map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ack(pub BTreeMap<String, serde_json::Value>);

impl Ack {
    /// Human readable message carried by the acknowledgement, if any.
    pub fn message(&self) -> Option<&str> {
        ["message", "status"]
            .iter()
            .find_map(|key| self.0.get(*key).and_then(|value| value.as_str()))
    }

    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ack_prefers_message_over_status() {
        let ack: Ack =
            serde_json::from_str(r#"{"status": "ok", "message": "Fund created"}"#).unwrap();
        assert_eq!(ack.message(), Some("Fund created"));
    }

    #[test]
    fn ack_without_known_keys_has_no_message() {
        let ack: Ack = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert_eq!(ack.message(), None);
        assert!(ack.get("id").is_some());
    }
}
