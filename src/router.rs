use crate::logging::logging_middleware;
use crate::middleware::origin::reject_disallowed_origin;
use crate::modules::auth::router::init_auth_router;
use crate::modules::enrollments::router::init_enrollments_router;
use crate::modules::users::router::init_users_router;
use crate::state::AppState;
use axum::http::{HeaderValue, Method, header};
use axum::{Router, middleware, routing::get};
use tower_http::cors::CorsLayer;

async fn health() -> &'static str {
    "server running"
}

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health))
        .merge(init_auth_router())
        .merge(init_users_router(state.clone()))
        .merge(init_enrollments_router(state.clone()))
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
                .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
                .allow_credentials(true)
        })
        // Outside the CORS layer so unknown origins never reach a handler,
        // preflight included.
        .layer(middleware::from_fn_with_state(
            state,
            reject_disallowed_origin,
        ))
        .layer(middleware::from_fn(logging_middleware))
}
