//! Submission payload assembly
//!
//! The payload is a snapshot: the original event payload spread first,
//! then the pipeline-added fields, so `method`, `sheets` and `records`
//! always win on key collision. Serialized exactly once by the caller.

use crate::domain::{Result, SheetDescriptor};
use serde_json::{Map, Value};

/// Marker the webhook consumer dispatches on
const METHOD: &str = "fetch";

/// Merge the event payload with the collected sheet and record data
///
/// Pipeline-added keys override same-named keys from the event payload.
pub fn build_payload(
    event_payload: &Map<String, Value>,
    sheets: &[SheetDescriptor],
    records: Map<String, Value>,
) -> Result<Value> {
    let mut body = event_payload.clone();

    body.insert("method".to_string(), Value::String(METHOD.to_string()));
    body.insert("sheets".to_string(), serde_json::to_value(sheets)?);
    body.insert("records".to_string(), Value::Object(records));

    Ok(Value::Object(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SheetId;
    use serde_json::json;

    fn sheets() -> Vec<SheetDescriptor> {
        vec![SheetDescriptor::new(
            SheetId::new("us_sh_1").unwrap(),
            "Example Sheet",
        )]
    }

    #[test]
    fn test_event_payload_fields_carried_over() {
        let mut event_payload = Map::new();
        event_payload.insert("source".to_string(), json!("ui"));

        let payload = build_payload(&event_payload, &sheets(), Map::new()).unwrap();

        assert_eq!(payload["source"], "ui");
        assert_eq!(payload["method"], "fetch");
    }

    #[test]
    fn test_pipeline_fields_win_on_collision() {
        let mut event_payload = Map::new();
        event_payload.insert("sheets".to_string(), json!("stale"));
        event_payload.insert("records".to_string(), json!("stale"));
        event_payload.insert("method".to_string(), json!("push"));

        let mut records = Map::new();
        records.insert("Sheet[0]".to_string(), json!([]));

        let payload = build_payload(&event_payload, &sheets(), records).unwrap();

        assert_eq!(payload["method"], "fetch");
        assert!(payload["sheets"].is_array());
        assert_eq!(payload["records"]["Sheet[0]"], json!([]));
    }

    #[test]
    fn test_record_map_order_preserved() {
        let mut records = Map::new();
        for i in 0..12 {
            records.insert(format!("Sheet[{i}]"), json!([]));
        }

        let payload = build_payload(&Map::new(), &sheets(), records).unwrap();
        let keys: Vec<&String> = payload["records"].as_object().unwrap().keys().collect();

        // Insertion order survives serialization, even past single digits
        assert_eq!(keys[0], "Sheet[0]");
        assert_eq!(keys[10], "Sheet[10]");
        assert_eq!(keys[11], "Sheet[11]");
    }
}
