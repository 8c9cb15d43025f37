use serde::de::DeserializeOwned;
use tintero_core::{ApiError, ApiResult, ErrorBody};

/// Fallback message when an error body carries none.
pub(crate) const GENERIC_REQUEST_ERROR: &str = "Request error";

/// Normalize a raw HTTP response into a typed envelope or a structured
/// error.
///
/// Non-success statuses become [`ApiError::Api`] with the server's
/// message and validation errors when the body provides them; the body
/// is parsed as JSON unconditionally, so a non-JSON error body surfaces
/// as a decode failure, matching the transport taxonomy.
pub(crate) fn decode_body<E: DeserializeOwned>(status: u16, body: &str) -> ApiResult<E> {
    if !(200..300).contains(&status) {
        let parsed: ErrorBody = serde_json::from_str(body)?;
        return Err(ApiError::Api {
            status,
            message: parsed
                .message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| GENERIC_REQUEST_ERROR.to_owned()),
            errors: parsed.errors,
        });
    }
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tintero_core::{ApiResponse, PagedResponse};

    #[test]
    fn success_status_yields_the_typed_envelope() {
        let envelope: ApiResponse<serde_json::Value> =
            decode_body(200, r#"{"success":true,"message":"ok","data":{"id_post":"p1"}}"#)
                .unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.data.unwrap()["id_post"], "p1");
    }

    #[test]
    fn error_status_becomes_a_structured_error() {
        let err = decode_body::<ApiResponse<serde_json::Value>>(
            422,
            r#"{"success":false,"message":"invalid","errors":{"email":["Email taken"]}}"#,
        )
        .unwrap_err();
        match &err {
            ApiError::Api {
                status, message, ..
            } => {
                assert_eq!(*status, 422);
                assert_eq!(message, "invalid");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
        assert_eq!(err.first_validation_message(), Some("Email taken"));
    }

    #[test]
    fn error_status_without_message_uses_the_fallback() {
        let err = decode_body::<ApiResponse<serde_json::Value>>(500, r#"{"success":false}"#)
            .unwrap_err();
        match err {
            ApiError::Api { message, .. } => assert_eq!(message, GENERIC_REQUEST_ERROR),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn non_json_bodies_surface_as_decode_errors() {
        let err =
            decode_body::<ApiResponse<serde_json::Value>>(502, "Bad Gateway").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));

        let err = decode_body::<ApiResponse<serde_json::Value>>(200, "<html>").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn paged_envelopes_decode_through_the_same_path() {
        let envelope: PagedResponse<Vec<serde_json::Value>> = decode_body(
            200,
            r#"{"success":true,"message":"ok","data":[],"pagination":{"page":1,"limit":9,"count":0}}"#,
        )
        .unwrap();
        assert_eq!(envelope.pagination.unwrap().limit, 9);
    }
}
