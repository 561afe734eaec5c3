//! Permissive CORS headers and preflight short-circuit
//!
//! Every response carries the same three CORS headers regardless of the
//! request's `Origin`. `OPTIONS` requests never reach a handler.

use axum::{
    extract::Request,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    Router,
};
use http::{header, HeaderValue, Method, StatusCode};
use tower_http::set_header::SetResponseHeaderLayer;

/// Value of `Access-Control-Allow-Origin`
pub const ALLOW_ORIGIN: &str = "*";

/// Value of `Access-Control-Allow-Methods`
pub const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE";

/// Value of `Access-Control-Allow-Headers`
pub const ALLOW_HEADERS: &str = "Content-Type";

/// Answer `OPTIONS` with an empty 200 without invoking the route
pub async fn short_circuit_preflight(req: Request, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        tracing::debug!(path = %req.uri().path(), "Answering preflight request");
        return StatusCode::OK.into_response();
    }

    next.run(req).await
}

/// Apply the CORS headers and the preflight short-circuit to the router
///
/// The header layers sit outside the short-circuit so preflight answers
/// carry them too.
pub fn apply_cors(app: Router) -> Router {
    app.layer(middleware::from_fn(short_circuit_preflight))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static(ALLOW_ORIGIN),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOW_METHODS),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOW_HEADERS),
        ))
}
