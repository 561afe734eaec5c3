//! Response middleware applied to every route

pub mod content_type;
pub mod cors;

pub use content_type::{apply_json_content_type, JSON_CONTENT_TYPE};
pub use cors::{apply_cors, short_circuit_preflight, ALLOW_HEADERS, ALLOW_METHODS, ALLOW_ORIGIN};

use axum::Router;

/// Apply the response middleware stack
///
/// Order from the outside in: CORS headers, preflight short-circuit,
/// default content type, route. Preflight answers therefore carry the CORS
/// headers but no content type.
pub fn apply(app: Router) -> Router {
    apply_cors(apply_json_content_type(app))
}
