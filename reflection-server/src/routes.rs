//! API routes

use crate::config::{CorsOrigins, ServerConfig};
use crate::handlers;
use axum::{routing::get, Router};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the application router
pub fn create_router(config: &ServerConfig) -> Router {
    let cors = match config.cors_origins() {
        CorsOrigins::Any => CorsLayer::new().allow_origin(Any),
        CorsOrigins::List(origins) => CorsLayer::new().allow_origin(AllowOrigin::list(origins)),
    }
    .allow_methods(Any)
    .allow_headers(Any);

    Router::new()
        .route(
            "/",
            get(handlers::root).fallback(handlers::method_not_allowed),
        )
        .route(
            "/health",
            get(handlers::health_check).fallback(handlers::method_not_allowed),
        )
        .merge(reflection_routes())
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Reflection router, mounted at `/reflection/`
pub fn reflection_routes() -> Router {
    Router::new()
        .route(
            handlers::REFLECTION_PATH,
            get(handlers::get_reflections)
                .post(handlers::create_reflection)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/reflection",
            get(handlers::redirect_to_reflections)
                .post(handlers::redirect_to_reflections)
                .fallback(handlers::method_not_allowed),
        )
}
