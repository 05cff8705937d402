//! Status checks and error details for API responses

use super::response::ApiResponse;
use crate::traits::error::{ClientError, Result};

/// Plain-text error bodies at or above this length are not shown to users
const MAX_TEXT_DETAIL_LEN: usize = 200;

/// Extract a human-readable detail from a failed response
///
/// JSON bodies contribute their `error`, `message` or `detail` field (first
/// non-empty string wins). Other bodies contribute their text when it is
/// short enough to be a message rather than an HTML error page.
pub fn extract_error_detail(response: &ApiResponse) -> Option<String> {
    if response.is_json() {
        let body: serde_json::Value = response.json().ok()?;
        return ["error", "message", "detail"]
            .iter()
            .filter_map(|field| body.get(*field).and_then(|v| v.as_str()))
            .map(str::trim)
            .find(|s| !s.is_empty())
            .map(str::to_string);
    }

    let text = response.text();
    let text = text.trim();
    if text.is_empty() || text.chars().count() >= MAX_TEXT_DETAIL_LEN {
        return None;
    }
    Some(text.to_string())
}

/// Check if response is successful, returning the response or an error
pub fn check_response(response: ApiResponse, context: &str) -> Result<ApiResponse> {
    if response.is_success() {
        return Ok(response);
    }

    Err(ClientError::Api {
        status: response.status(),
        message: context.to_string(),
        detail: extract_error_detail(&response),
    })
}
