use crate::domain::ports::MetadataSerializer;
use crate::error::MetadataDecodeError;
use serde_json::Value;

/// JSON serializer, the storefront's default format for stored metadata.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonSerializer;

impl JsonSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl MetadataSerializer for JsonSerializer {
    fn unserialize(&self, raw: &str) -> Result<Value, MetadataDecodeError> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unserialize_valid() {
        let value = JsonSerializer::new()
            .unserialize(r#"{"accept_url":"https://partner.test/ok"}"#)
            .unwrap();
        assert_eq!(value, json!({ "accept_url": "https://partner.test/ok" }));
    }

    #[test]
    fn test_unserialize_malformed() {
        let err = JsonSerializer::new()
            .unserialize("a:1:{s:10:\"accept_url\";}")
            .unwrap_err();
        assert!(!err.reason.is_empty());
    }
}
