/// Macro for model field updates with automatic rendering.
/// Supports both single and multiple field updates.
///
/// # Examples
///
/// Single field update:
/// ```ignore
/// update_field!(model.status, None)
/// ```
///
/// Multiple field updates:
/// ```ignore
/// update_field!(
///     model.is_loading, false;
///     model.status, None
/// )
/// ```
#[macro_export]
macro_rules! update_field {
    // Multiple field updates (must come first to match the pattern)
    ($($model_field:expr, $value:expr);+ $(;)?) => {{
        let mut changed = false;
        $(
            let value = $value;
            if $model_field != value {
                $model_field = value;
                changed = true;
            }
        )+
        if changed {
            crux_core::render::render()
        } else {
            crux_core::Command::done()
        }
    }};

    // Single field update
    ($model_field:expr, $value:expr) => {{
        update_field!($model_field, $value;)
    }};
}

// Re-export http_helpers functions for macro use
pub use crate::http_helpers::{build_url, process_json_response, process_text_response, BASE_URL};

/// Macro for GET requests expecting a JSON response.
///
/// NOTE: URLs are prefixed with `https://relative`.
/// `crux_http` requires absolute URLs and rejects relative paths.
/// The browser shell strips this prefix before sending requests.
///
/// # Example
/// ```ignore
/// json_get!("/config", LoadResponse)
/// ```
#[macro_export]
macro_rules! json_get {
    ($endpoint:expr, $response_event:ident) => {
        $crate::HttpCmd::get($crate::build_url($endpoint))
            .build()
            .then_send(|result| {
                $crate::events::Event::$response_event($crate::process_json_response(result))
            })
    };
}

/// Macro for POST requests whose response body is plain text.
///
/// # Patterns
///
/// Pattern 1: Empty-bodied POST
/// ```ignore
/// text_post!("/restart", RestartResponse)
/// ```
///
/// Pattern 2: POST with JSON body
/// ```ignore
/// text_post!("/save", SaveResponse, body_json: &request)
/// ```
/// Pattern 2 evaluates to a `Result`: `Err` carries the body serialization
/// failure and must be handled at the call site.
#[macro_export]
macro_rules! text_post {
    // Pattern 1: Empty-bodied POST
    ($endpoint:expr, $response_event:ident) => {
        $crate::HttpCmd::post($crate::build_url($endpoint))
            .build()
            .then_send(|result| {
                $crate::events::Event::$response_event($crate::process_text_response(result))
            })
    };

    // Pattern 2: POST with JSON body
    ($endpoint:expr, $response_event:ident, body_json: $body:expr) => {
        $crate::HttpCmd::post($crate::build_url($endpoint))
            .header("Content-Type", "application/json")
            .body_json($body)
            .map(|builder| {
                builder.build().then_send(|result| {
                    $crate::events::Event::$response_event($crate::process_text_response(result))
                })
            })
    };
}
