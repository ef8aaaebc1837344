//! Key normalization for endpoints that mix PascalCase and camelCase.

use serde_json::{Map, Value};

/// Keys whose values are user documents. Their own keys are data and are
/// passed through untouched.
const OPAQUE_KEYS: &[&str] = &["content"];

/// Rewrite response object keys so that they start with a lowercase letter.
///
/// `PublicId` becomes `publicId`; keys that are already camelCase, and
/// all-caps keys such as `ID`, are left alone. When both spellings of a
/// key are present the camelCase one wins. The value under a `content` key
/// (a JSON Schema document) is never rewritten.
pub fn normalize_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut out = Map::with_capacity(map.len());
            let mut pascal = Vec::new();

            for (key, value) in map {
                let camel = camel_case(&key);
                let name = camel.as_deref().unwrap_or(&key);
                let value = if OPAQUE_KEYS.contains(&name) {
                    value
                } else {
                    normalize_keys(value)
                };

                match camel {
                    Some(camel) => pascal.push((camel, value)),
                    None => {
                        out.insert(key, value);
                    }
                }
            }

            for (key, value) in pascal {
                out.entry(key).or_insert(value);
            }

            Value::Object(out)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(normalize_keys).collect()),
        other => other,
    }
}

/// Returns the camelCase form of a PascalCase key, or `None` when the key
/// needs no change.
fn camel_case(key: &str) -> Option<String> {
    let mut chars = key.chars();
    let first = chars.next()?;
    let rest = chars.as_str();

    if !first.is_ascii_uppercase() || rest.chars().all(|c| !c.is_ascii_lowercase()) {
        return None;
    }

    let mut camel = String::with_capacity(key.len());
    camel.push(first.to_ascii_lowercase());
    camel.push_str(rest);
    Some(camel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn lowercases_leading_capital() {
        let value = normalize_keys(json!({
            "Classification": {"DocType": "Invoice", "Country": "PT", "Pages": [1, 2]},
            "Schema": {"PublicId": "sch_1", "publicVersionId": "schv_1"}
        }));

        assert_eq!(
            value,
            json!({
                "classification": {"docType": "Invoice", "country": "PT", "pages": [1, 2]},
                "schema": {"publicId": "sch_1", "publicVersionId": "schv_1"}
            })
        );
    }

    #[test]
    fn camel_case_wins_over_pascal_duplicate() {
        let value = normalize_keys(json!({"Name": "old", "name": "new"}));
        assert_eq!(value, json!({"name": "new"}));
    }

    #[test]
    fn schema_content_keeps_its_keys() {
        let value = normalize_keys(json!({
            "Schema": {
                "Content": {
                    "properties": {"InvoiceNumber": {"type": "string"}},
                    "required": ["InvoiceNumber"]
                },
                "Generated": true
            }
        }));

        assert_eq!(
            value,
            json!({
                "schema": {
                    "content": {
                        "properties": {"InvoiceNumber": {"type": "string"}},
                        "required": ["InvoiceNumber"]
                    },
                    "generated": true
                }
            })
        );
    }

    #[test]
    fn leaves_acronyms_and_arrays_of_scalars() {
        let value = normalize_keys(json!({"ID": 1, "items": [{"Key": "v"}, 3]}));
        assert_eq!(value, json!({"ID": 1, "items": [{"key": "v"}, 3]}));
    }
}
