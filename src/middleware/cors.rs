use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};

/// Any origin may call the API; the results page is served separately.
pub fn permissive_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any)
        .allow_origin(Any)
}
