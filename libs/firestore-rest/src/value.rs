use serde_json::{Map, Value};

/// Decode a Firestore `fields` map into a plain JSON object.
///
/// Firestore wraps every field in a single-key type envelope, e.g.
/// `{"likeCount": {"integerValue": "4"}}`. Integers arrive as strings and are
/// parsed back to numbers.
pub fn decode_fields(fields: &Map<String, Value>) -> Value {
    let mut out = Map::with_capacity(fields.len());
    for (name, wrapped) in fields {
        out.insert(name.clone(), decode_value(wrapped));
    }
    Value::Object(out)
}

fn decode_value(wrapped: &Value) -> Value {
    let Some(obj) = wrapped.as_object() else {
        return Value::Null;
    };

    if let Some((kind, inner)) = obj.iter().next() {
        match kind.as_str() {
            "nullValue" => Value::Null,
            "booleanValue" => inner.clone(),
            "integerValue" => inner
                .as_str()
                .and_then(|s| s.parse::<i64>().ok())
                .map(Value::from)
                .unwrap_or_else(|| inner.clone()),
            "doubleValue" => inner.clone(),
            "stringValue" | "timestampValue" | "referenceValue" => inner.clone(),
            "mapValue" => inner
                .get("fields")
                .and_then(Value::as_object)
                .map(decode_fields)
                .unwrap_or_else(|| Value::Object(Map::new())),
            "arrayValue" => {
                let values = inner
                    .get("values")
                    .and_then(Value::as_array)
                    .map(|vs| vs.iter().map(decode_value).collect())
                    .unwrap_or_default();
                Value::Array(values)
            }
            _ => Value::Null,
        }
    } else {
        Value::Null
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_post_document_fields() {
        let fields = json!({
            "userId": { "stringValue": "u1" },
            "likeCount": { "integerValue": "4" },
            "public": { "booleanValue": true }
        });

        let decoded = decode_fields(fields.as_object().unwrap());

        assert_eq!(decoded["userId"], "u1");
        assert_eq!(decoded["likeCount"], 4);
        assert_eq!(decoded["public"], true);
    }

    #[test]
    fn test_decode_nested_map_and_array() {
        let fields = json!({
            "tags": {
                "arrayValue": {
                    "values": [
                        { "stringValue": "yoga" },
                        { "stringValue": "calm" }
                    ]
                }
            },
            "stats": {
                "mapValue": {
                    "fields": { "views": { "integerValue": "12" } }
                }
            }
        });

        let decoded = decode_fields(fields.as_object().unwrap());

        assert_eq!(decoded["tags"], json!(["yoga", "calm"]));
        assert_eq!(decoded["stats"]["views"], 12);
    }

    #[test]
    fn test_decode_null_and_unknown_kinds() {
        let fields = json!({
            "deletedAt": { "nullValue": null },
            "location": { "geoPointValue": { "latitude": 1.0, "longitude": 2.0 } }
        });

        let decoded = decode_fields(fields.as_object().unwrap());

        assert_eq!(decoded["deletedAt"], Value::Null);
        assert_eq!(decoded["location"], Value::Null);
    }

    #[test]
    fn test_decode_empty_array() {
        let fields = json!({
            "tags": { "arrayValue": {} }
        });

        let decoded = decode_fields(fields.as_object().unwrap());
        assert_eq!(decoded["tags"], json!([]));
    }
}
