//! Route definitions for the `/api/developers` resource.

use axum::routing::get;
use axum::Router;
use clientdesk_core::contract;

use super::axum_path;
use crate::handlers::developer;
use crate::state::AppState;

/// Routes from the developers section of the contract.
///
/// ```text
/// GET    /api/developers      -> list
/// POST   /api/developers      -> create
/// GET    /api/developers/:id  -> get_by_id
/// DELETE /api/developers/:id  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            contract::developers::LIST.path,
            get(developer::list).post(developer::create),
        )
        .route(
            &axum_path(contract::developers::GET.path),
            get(developer::get_by_id).delete(developer::delete),
        )
}
