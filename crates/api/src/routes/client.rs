//! Route definitions for the `/api/clients` resource.

use axum::routing::get;
use axum::Router;
use clientdesk_core::contract;

use super::axum_path;
use crate::handlers::client;
use crate::state::AppState;

/// Routes from the clients section of the contract.
///
/// ```text
/// GET    /api/clients      -> list
/// POST   /api/clients      -> create
/// GET    /api/clients/:id  -> get_by_id
/// PUT    /api/clients/:id  -> update
/// DELETE /api/clients/:id  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            contract::clients::LIST.path,
            get(client::list).post(client::create),
        )
        .route(
            &axum_path(contract::clients::GET.path),
            get(client::get_by_id)
                .put(client::update)
                .delete(client::delete),
        )
}
