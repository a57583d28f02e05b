pub(crate) fn decode_payload(body: &str) -> serde_json::Value {
    if body.is_empty() {
        return serde_json::Value::Null;
    }
    serde_json::from_str(body).unwrap_or_else(|_| serde_json::Value::String(body.to_owned()))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::decode_payload;

    #[test]
    fn json_body_decodes_structured() {
        assert_eq!(
            decode_payload(r#"{"id": 7, "name": "Kit"}"#),
            json!({"id": 7, "name": "Kit"})
        );
    }

    #[test]
    fn non_json_body_falls_back_to_string() {
        assert_eq!(
            decode_payload("plain text body"),
            json!("plain text body")
        );
    }

    #[test]
    fn empty_body_is_null() {
        assert_eq!(decode_payload(""), serde_json::Value::Null);
    }
}
