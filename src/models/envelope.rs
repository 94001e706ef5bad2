use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;

use crate::error::{ConvertioError, Result};

/// Wrapper around every answer of the API: `{status, data, error}`.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    pub status: String,
    #[serde(default)]
    pub data: Value,
    #[serde(default)]
    pub error: Option<String>,
}

impl Envelope {
    pub fn into_data<T: DeserializeOwned>(self) -> Result<T> {
        if self.status != "ok" {
            return Err(ConvertioError::Api(self.error.unwrap_or_else(|| "unknown error".to_string())));
        }
        Ok(serde_json::from_value(self.data)?)
    }
}

#[cfg(test)]
mod tests {
    use serde::de::IgnoredAny;
    use serde_json::json;

    use super::*;

    fn envelope(value: Value) -> Envelope {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn error_status_carries_message() {
        let result = envelope(json!({"status": "error", "error": "invalid format"})).into_data::<IgnoredAny>();
        match result {
            Err(ConvertioError::Api(message)) => assert_eq!(message, "invalid format"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn error_without_message() {
        let result = envelope(json!({"status": "error"})).into_data::<IgnoredAny>();
        assert!(matches!(result, Err(ConvertioError::Api(message)) if message == "unknown error"));
    }

    #[test]
    fn ok_without_data_is_accepted_when_ignored() {
        assert!(envelope(json!({"code": 200, "status": "ok"})).into_data::<IgnoredAny>().is_ok());
    }

    #[test]
    fn data_shape_mismatch_is_decode_error() {
        let result = envelope(json!({"status": "ok", "data": {"id": 5}})).into_data::<crate::models::CreatedConversion>();
        assert!(matches!(result, Err(ConvertioError::Decode(_))));
    }
}
