//! Middleware for request processing.
//!
//! - [`auth`]: Bearer token verification and the [`auth::AuthUser`] extractor
//! - [`role`]: The admin gate for privileged routes
//! - [`origin`]: Rejection of cross-origin requests from unknown front ends
//!
//! # Authentication Flow
//!
//! 1. Client sends `Authorization: Bearer <token>`
//! 2. [`auth::verify_token`] validates the JWT and stores the caller's claims
//!    in the request extensions
//! 3. [`role::require_admin`] (admin routes only) looks the caller up and
//!    requires the `admin` role
//! 4. Handler executes, reading the caller through [`auth::AuthUser`]
//!
//! ```ignore
//! let admin_routes = Router::new()
//!     .route("/enrollments", get(get_enrollments))
//!     .route_layer(middleware::from_fn_with_state(state.clone(), require_admin))
//!     .route_layer(middleware::from_fn_with_state(state, verify_token));
//! ```

pub mod auth;
pub mod origin;
pub mod role;
