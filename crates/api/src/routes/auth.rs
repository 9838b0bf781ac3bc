//! Route definitions for the `/api/auth` resource.

use axum::routing::post;
use axum::Router;
use clientdesk_core::contract;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes from the auth section of the contract.
///
/// ```text
/// POST /api/auth/login   -> login
/// POST /api/auth/logout  -> logout
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(contract::auth::LOGIN.path, post(auth::login))
        .route(contract::auth::LOGOUT.path, post(auth::logout))
}
