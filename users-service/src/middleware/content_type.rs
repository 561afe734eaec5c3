//! Default JSON content type

use axum::Router;
use http::{header, HeaderValue};
use tower_http::set_header::SetResponseHeaderLayer;

/// Content type declared on responses that do not set their own
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Declare `application/json` on every response that has no content type
///
/// Error responses keep their `text/plain` type; empty success bodies are
/// still declared as JSON.
pub fn apply_json_content_type(app: Router) -> Router {
    app.layer(SetResponseHeaderLayer::if_not_present(
        header::CONTENT_TYPE,
        HeaderValue::from_static(JSON_CONTENT_TYPE),
    ))
}
