//! Fallback extraction for payloads the normalizer does not model.
//!
//! Scans the well-known list-shaped keys providers use ("records",
//! "matches", "items", "results", "entries") and turns each entry into a
//! low-confidence generic fact.

use serde_json::Value;

use dossier_core::constants::GENERIC_LIST_KEYS;
use dossier_core::models::{Fact, FactKind};
use dossier_core::types::Confidence;

const GENERIC_CONFIDENCE: f64 = 0.5;

pub fn extract(data: &Value, provider: &str) -> Vec<Fact> {
    let Some(object) = data.as_object() else {
        return Vec::new();
    };

    let c = Confidence::new(GENERIC_CONFIDENCE);
    let mut facts = Vec::new();

    for key in GENERIC_LIST_KEYS {
        let Some(items) = object.get(*key).and_then(Value::as_array) else {
            continue;
        };
        for item in items {
            let value = match item {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            if value.is_empty() || value == "null" {
                continue;
            }
            let fact = Fact::new(FactKind::Generic, value, provider, c)
                .with_details(item.clone());
            facts.push(fact);
        }
    }

    facts
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scans_all_known_list_keys() {
        let data = json!({
            "records": ["a"],
            "matches": ["b"],
            "items": ["c"],
            "unrelated": ["ignored-scalar-key"],
        });
        let facts = extract(&data, "prov-x");
        let values: Vec<&str> = facts.iter().map(|f| f.value.as_str()).collect();
        assert_eq!(values, vec!["a", "b", "c"]);
    }

    #[test]
    fn non_object_payload_yields_nothing() {
        assert!(extract(&json!(null), "prov-x").is_empty());
        assert!(extract(&json!("scalar"), "prov-x").is_empty());
    }
}
