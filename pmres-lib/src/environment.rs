use serde_json::Value;
use std::collections::BTreeMap;

/// Variable name to value, built once from an environment document.
pub type VariableMap = BTreeMap<String, String>;

/// Builds the lookup of enabled variables from a Postman environment document.
///
/// Entries are read from the `values` array in order. An entry is kept only when
/// its `enabled` flag is truthy and it carries both a `key` and a `value`; later
/// duplicates overwrite earlier ones. Anything structurally unexpected is skipped,
/// so the worst case is an empty map.
pub fn build_variable_map(document: &Value) -> VariableMap {
    let mut map = VariableMap::new();

    let Some(entries) = document.get("values").and_then(Value::as_array) else {
        return map;
    };

    for entry in entries {
        if let Some((key, value)) = enabled_entry(entry) {
            map.insert(key, value);
        }
    }

    map
}

fn enabled_entry(entry: &Value) -> Option<(String, String)> {
    let fields = entry.as_object()?;

    if !fields.get("enabled").is_some_and(is_truthy) {
        return None;
    }

    let key = fields.get("key")?.as_str()?;
    let value = match fields.get("value")? {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => return None,
    };

    Some((key.to_string(), value))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}
