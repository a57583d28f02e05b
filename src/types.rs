use reqwest::{header::HeaderMap, StatusCode};

/// Response returned by every wrapped verb, exactly as the adapter produced it.
#[derive(Clone, Debug)]
pub struct ApiResponse {
    /// HTTP status of the final attempt.
    pub status: StatusCode,
    /// Response headers of the final attempt.
    pub headers: HeaderMap,
    /// Decoded response payload. JSON bodies arrive structured; non-JSON
    /// bodies arrive as a string value; an empty body is null.
    pub data: serde_json::Value,
}
