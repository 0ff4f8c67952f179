use serde::Deserialize;
use serde::de::DeserializeOwned;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response is missing field: {field}")]
    MissingField { field: &'static str },
}

/// Uniform `{success, message, payload, error}` wrapper around every response.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub payload: Option<T>,
    #[serde(default)]
    pub error: Option<ErrorJson>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorJson {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// Human readable cause of a failed envelope.
    ///
    /// `error.message` wins over the top-level `message` when it is non-empty.
    pub fn rejection_message(&self) -> String {
        self.error
            .as_ref()
            .and_then(|err| err.message.as_deref())
            .filter(|msg| !msg.trim().is_empty())
            .or(self.message.as_deref())
            .unwrap_or_default()
            .to_owned()
    }
}

pub fn decode_envelope<T: DeserializeOwned>(json: &str) -> Result<Envelope<T>, TransportError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use serde::de::IgnoredAny;

    use super::*;

    #[test]
    fn decode_success_without_optional_fields() {
        let env = decode_envelope::<IgnoredAny>(r#"{"success":true}"#).unwrap();
        assert!(env.success);
        assert!(env.payload.is_none());
        assert!(env.error.is_none());
    }

    #[test]
    fn rejection_message_prefers_error_detail() {
        let json = r#"
        {
          "success": false,
          "message": "Request failed",
          "payload": null,
          "error": {"code": 400, "title": "Bad Request", "message": "senderId is required"}
        }
        "#;
        let env = decode_envelope::<IgnoredAny>(json).unwrap();
        assert!(!env.success);
        assert_eq!(env.rejection_message(), "senderId is required");
        let err = env.error.unwrap();
        assert_eq!(err.code, Some(400));
        assert_eq!(err.title.as_deref(), Some("Bad Request"));
    }

    #[test]
    fn rejection_message_falls_back_to_top_level_message() {
        let json = r#"{"success":false,"message":"Unauthorized","error":{"code":0,"title":"","message":""}}"#;
        let env = decode_envelope::<IgnoredAny>(json).unwrap();
        assert_eq!(env.rejection_message(), "Unauthorized");

        let env = decode_envelope::<IgnoredAny>(r#"{"success":false}"#).unwrap();
        assert_eq!(env.rejection_message(), "");
    }

    #[derive(Debug, Deserialize)]
    struct TokenOnly {
        token: String,
    }

    #[test]
    fn decode_payload_without_default_impl() {
        let env = decode_envelope::<TokenOnly>(r#"{"success":true,"payload":{"token":"T"}}"#)
            .unwrap();
        assert_eq!(env.payload.unwrap().token, "T");

        let env = decode_envelope::<TokenOnly>(r#"{"success":false,"payload":null}"#).unwrap();
        assert!(env.payload.is_none());
    }

    #[test]
    fn decode_rejects_non_envelope_bodies() {
        assert!(decode_envelope::<IgnoredAny>("<html>502</html>").is_err());
        assert!(decode_envelope::<IgnoredAny>(r#"{"message":"no flag"}"#).is_err());
    }
}
