use axum::{
    Router, middleware,
    routing::{delete, get, post},
};

use crate::middleware::{auth::verify_token, role::require_admin};
use crate::modules::enrollments::controller::{
    create_enrollment, delete_enrollment, get_enrollments,
};
use crate::state::AppState;

pub fn init_enrollments_router(state: AppState) -> Router<AppState> {
    let public = Router::new().route("/enroll", post(create_enrollment));
    let admin = Router::new()
        .route("/enrollments", get(get_enrollments))
        .route("/enrollment/{id}", delete(delete_enrollment))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin))
        .route_layer(middleware::from_fn_with_state(state, verify_token));
    public.merge(admin)
}
