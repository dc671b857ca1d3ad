use axum::http::{header::CONTENT_TYPE, HeaderName, Method};
use tower_http::cors::{Any, CorsLayer};

pub fn init_cors() -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers([
            CONTENT_TYPE,
            HeaderName::from_static("x-user-id"),
            HeaderName::from_static("x-user-email"),
        ])
        .allow_origin(Any);

    cors
}
