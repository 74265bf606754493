//! HTTP helper functions for the Crux Core
//!
//! Response handling shared by the update handlers. HTTP status codes are
//! deliberately not part of the error taxonomy: the firmware answers `/save`
//! failures with a 500 and a plain-text explanation, and the portal shows
//! that text as the status line. Only transport failures (and, for the
//! settings load, an unparsable JSON body) take the error path.

use crux_http::Response;

/// Base URL for the portal endpoints.
///
/// NOTE: This is a dummy prefix required because `crux_http` (v0.16.0-rc2)
/// requires absolute URLs and rejects relative paths
/// (`RelativeUrlWithoutBase` error). The browser shell strips this prefix
/// before sending requests via `fetch()`, making them relative to the page
/// that served the portal.
pub const BASE_URL: &str = "https://relative";

/// Constructs the full address from a given endpoint.
///
/// # Example
/// ```
/// use hub_portal_core::http_helpers::build_url;
/// let url = build_url("/config");
/// assert_eq!(url, "https://relative/config");
/// ```
pub fn build_url(endpoint: &str) -> String {
    format!("{BASE_URL}{endpoint}")
}

/// Extract the response body as text, whatever the status code.
///
/// Mirrors reading a response body as text in a browser: an empty or absent
/// body is the empty string, and only invalid UTF-8 fails.
pub fn extract_text(response: &mut Response<Vec<u8>>) -> Result<String, String> {
    match response.take_body() {
        Some(bytes) => {
            String::from_utf8(bytes).map_err(|e| format!("Invalid UTF-8 in response: {e}"))
        }
        None => Ok(String::new()),
    }
}

/// Process an HTTP result into the response body text.
pub fn process_text_response(
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<String, String> {
    match result {
        Ok(mut response) => extract_text(&mut response),
        Err(e) => Err(e.to_string()),
    }
}

/// Process an HTTP result by parsing the response body as JSON.
pub fn process_json_response<T: serde::de::DeserializeOwned>(
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<T, String> {
    match result {
        Ok(mut response) => match response.take_body() {
            Some(body) => serde_json::from_slice(&body).map_err(|e| format!("JSON parse error: {e}")),
            None => Err("Empty response body".to_string()),
        },
        Err(e) => Err(e.to_string()),
    }
}
