use crate::middleware::auth::verify_token;
use crate::middleware::role::require_admin;
use crate::modules::users::controller::{
    check_admin, create_user, delete_user, get_user, get_users,
};
use crate::state::AppState;
use axum::{
    Router, middleware,
    routing::{delete, get, post},
};

pub fn init_users_router(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/users", get(get_users))
        .route("/user", post(create_user));

    let authenticated = Router::new()
        .route("/user", get(get_user))
        .route("/user/admin/{email}", get(check_admin))
        .route_layer(middleware::from_fn_with_state(state.clone(), verify_token));

    // Layers run outermost-last: the token is verified before the role check.
    let admin = Router::new()
        .route("/user/{id}", delete(delete_user))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin))
        .route_layer(middleware::from_fn_with_state(state, verify_token));

    public.merge(authenticated).merge(admin)
}
