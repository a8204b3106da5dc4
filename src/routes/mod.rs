use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{auth, bookings, health, method_not_allowed, not_found, workers};
use crate::AppState;

/// Application routes. Transport layers (tracing, CORS, rate limiting) are
/// added by the binary so tests can drive this router directly.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Auth
        .route("/api/auth/register", post(auth::register).fallback(method_not_allowed))
        .route("/api/auth/login", post(auth::login).fallback(method_not_allowed))
        // Workers
        .route("/api/workers", get(workers::list_workers).fallback(method_not_allowed))
        .route(
            "/api/workers/register",
            post(workers::register_worker).fallback(method_not_allowed),
        )
        // Bookings
        .route("/api/bookings", get(bookings::list_bookings).fallback(method_not_allowed))
        .route(
            "/api/bookings/create",
            post(bookings::create_booking).fallback(method_not_allowed),
        )
        .route("/api/health", get(health::health).fallback(method_not_allowed))
        .fallback(not_found)
        .with_state(state)
}
