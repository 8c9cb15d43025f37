use serde::Deserialize;
use serde_json::{Map, Value};

/// The `{success, message, data}` wrapper every backend response uses.
#[derive(Clone, Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    /// Whether the backend considers the operation successful.
    pub success: bool,
    /// Human-readable status message.
    #[serde(default)]
    pub message: String,
    /// Endpoint-specific payload. Absent on some error bodies.
    #[serde(default)]
    pub data: Option<T>,
}

/// Paging information carried by list endpoints.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page number that was served.
    pub page: u32,
    /// Page size that was applied.
    pub limit: u32,
    /// Total number of records across all pages.
    pub count: u64,
}

/// Envelope variant for list endpoints, which add a `pagination` block.
#[derive(Clone, Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct PagedResponse<T> {
    /// Whether the backend considers the operation successful.
    pub success: bool,
    /// Human-readable status message.
    #[serde(default)]
    pub message: String,
    /// Endpoint-specific payload. Absent on some error bodies.
    #[serde(default)]
    pub data: Option<T>,
    /// Paging block. Some deployments omit it on empty result sets.
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// Body shape of a non-success response, as far as we trust it.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    /// Server-provided message, when present.
    #[serde(default)]
    pub message: Option<String>,
    /// Per-field validation messages, in server order.
    #[serde(default)]
    pub errors: Option<Map<String, Value>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_deserializes() {
        let body = r#"{"success":true,"message":"ok","data":{"user_id":"u1"}}"#;
        let parsed: ApiResponse<Value> = serde_json::from_str(body).unwrap();
        assert!(parsed.success);
        assert_eq!(parsed.message, "ok");
        assert_eq!(parsed.data.unwrap()["user_id"], "u1");
    }

    #[test]
    fn missing_data_and_message_default() {
        let parsed: ApiResponse<Value> = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert!(!parsed.success);
        assert_eq!(parsed.message, "");
        assert!(parsed.data.is_none());
    }

    #[test]
    fn paged_envelope_carries_pagination() {
        let body = r#"{
            "success": true,
            "message": "posts",
            "data": [1, 2, 3],
            "pagination": {"page": 2, "limit": 9, "count": 23}
        }"#;
        let parsed: PagedResponse<Vec<u32>> = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.data.unwrap(), vec![1, 2, 3]);
        assert_eq!(
            parsed.pagination,
            Some(Pagination {
                page: 2,
                limit: 9,
                count: 23
            })
        );
    }

    #[test]
    fn paged_envelope_tolerates_missing_pagination() {
        let body = r#"{"success":true,"message":"posts","data":[]}"#;
        let parsed: PagedResponse<Vec<u32>> = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.data.unwrap(), Vec::<u32>::new());
        assert!(parsed.pagination.is_none());
    }

    #[test]
    fn error_body_preserves_field_order() {
        let body = r#"{"message":"invalid","errors":{"zmail":["first"],"aname":["second"]}}"#;
        let parsed: ErrorBody = serde_json::from_str(body).unwrap();
        let errors = parsed.errors.unwrap();
        let first_field = errors.keys().next().unwrap();
        assert_eq!(first_field, "zmail");
    }
}
