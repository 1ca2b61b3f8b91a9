use super::*;

// Shared test helpers
fn assert_camel_keys(v: &serde_json::Value) {
    match v {
        serde_json::Value::Object(map) => {
            for (k, child) in map {
                assert!(
                    !k.contains('_') && !k.contains('-'),
                    "key {:?} is not camelCase",
                    k
                );
                assert!(
                    k.chars().next().is_none_or(|c| !c.is_uppercase()),
                    "key {:?} starts uppercase",
                    k
                );
                assert_camel_keys(child);
            }
        }
        serde_json::Value::Array(items) => {
            for child in items {
                assert_camel_keys(child);
            }
        }
        _ => {}
    }
}

mod quoting;
