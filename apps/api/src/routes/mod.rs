pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderName, HeaderValue},
    routing::{get, post},
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::gateway::handlers;
use crate::state::AppState;

/// Cross-origin headers stamped on every response, whatever the method or outcome.
fn cors_headers() -> [(HeaderName, &'static str); 4] {
    [
        (header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true"),
        (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
        (
            header::ACCESS_CONTROL_ALLOW_METHODS,
            "GET,OPTIONS,PATCH,DELETE,POST,PUT",
        ),
        (
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            "X-CSRF-Token, X-Requested-With, Accept, Accept-Version, Content-Length, \
             Content-MD5, Content-Type, Date, X-Api-Version",
        ),
    ]
}

pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/optimize",
            post(handlers::handle_optimize)
                .options(handlers::handle_preflight)
                .fallback(handlers::handle_method_not_allowed)
                // resumes and job descriptions are taken at any size
                .layer(DefaultBodyLimit::disable()),
        );

    for (name, value) in cors_headers() {
        router = router.layer(SetResponseHeaderLayer::overriding(
            name,
            HeaderValue::from_static(value),
        ));
    }

    router.with_state(state)
}
