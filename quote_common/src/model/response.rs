//! Transport-level responses and the payload decoded from their bodies.
use serde::Deserialize;
use serde_json::Value;

use crate::error::QuoteError;
use crate::result::Result;

/// Status/body pair as reported by a transport. Either part may be missing on a malformed
/// response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP-like status code.
    pub status: Option<u16>,
    /// Undecoded response body.
    pub body: Option<String>,
}

impl RawResponse {
    /// Creates a response with both a status and a body.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            body: Some(body.into()),
        }
    }

    /// Checks the response shape and returns its status and body.
    ///
    /// A missing or empty body is rejected, and so is a missing status or a status of `0`.
    pub fn validate(response: Option<Self>) -> Result<(u16, String)> {
        let Some(RawResponse { status, body }) = response else {
            return Err(QuoteError::InvalidResponse);
        };
        match (status, body) {
            (Some(status), Some(body)) if status != 0 && !body.is_empty() => Ok((status, body)),
            _ => Err(QuoteError::InvalidResponse),
        }
    }
}

/// Structured payload carried in a response body.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Payload {
    /// The quote text, or the failure description for error statuses.
    pub message: String,
}

impl Payload {
    /// Parses `body` as JSON of any shape.
    pub fn parse(body: &str) -> Result<Value> {
        serde_json::from_str(body).map_err(QuoteError::Decode)
    }

    /// Reads a payload of the shape `{ "message": string }` from a parsed document.
    pub fn from_document(document: Value) -> Result<Self> {
        serde_json::from_value(document).map_err(QuoteError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_complete_response() {
        let response = RawResponse::new(200, r#"{"message":"ok"}"#);
        let (status, body) = RawResponse::validate(Some(response)).unwrap();
        assert_eq!(status, 200);
        assert_eq!(body, r#"{"message":"ok"}"#);
    }

    #[test]
    fn validate_rejects_malformed_responses() {
        let cases = [
            None,
            Some(RawResponse {
                status: Some(200),
                body: None,
            }),
            Some(RawResponse {
                status: Some(200),
                body: Some(String::new()),
            }),
            Some(RawResponse {
                status: None,
                body: Some(String::new()),
            }),
            Some(RawResponse {
                status: None,
                body: Some(r#"{"message":"x"}"#.into()),
            }),
            Some(RawResponse::new(0, r#"{"message":"x"}"#)),
            Some(RawResponse::default()),
        ];
        for case in cases {
            let err = RawResponse::validate(case.clone()).unwrap_err();
            assert!(matches!(err, QuoteError::InvalidResponse), "case {case:?}");
        }
    }

    #[test]
    fn parse_accepts_any_json() {
        for body in [r#"{"error":"Not Found"}"#, "42", "[]", r#"{"message":"x"}"#] {
            assert!(Payload::parse(body).is_ok(), "body {body}");
        }
    }

    #[test]
    fn parse_rejects_non_json() {
        let err = Payload::parse("Arun is the best").unwrap_err();
        assert!(matches!(err, QuoteError::Decode(_)));
        assert!(err.to_string().contains("Error when making request"));
    }

    #[test]
    fn from_document_reads_message_and_ignores_extra_fields() {
        let document = Payload::parse(r#"{"message":"Get to the chopper","id":3}"#).unwrap();
        let payload = Payload::from_document(document).unwrap();
        assert_eq!(payload.message, "Get to the chopper");
    }

    #[test]
    fn from_document_rejects_wrong_shape() {
        for body in ["42", r#"{"msg":"x"}"#, r#"{"message":7}"#] {
            let document = Payload::parse(body).unwrap();
            let err = Payload::from_document(document).unwrap_err();
            assert!(matches!(err, QuoteError::Decode(_)), "body {body}");
            assert!(err.to_string().contains("Error when making request"));
        }
    }
}
