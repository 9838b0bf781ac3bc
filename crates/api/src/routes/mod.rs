pub mod auth;
pub mod client;
pub mod developer;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree from the shared route contract.
///
/// Route hierarchy:
///
/// ```text
/// /api/auth/login        login (public)
/// /api/auth/logout       logout (public no-op acknowledgement)
///
/// /api/clients           list, create
/// /api/clients/:id       get, update, delete
///
/// /api/developers        list, create
/// /api/developers/:id    get, delete
/// ```
///
/// Every record-kind handler requires a Bearer token; login and logout do
/// not.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .merge(client::router())
        .merge(developer::router())
}

/// Rewrite a contract `:id` template into axum's `{id}` syntax.
///
/// The contract keeps the `:id` style because request helpers substitute it
/// by plain string replacement; axum is the only consumer needing braces.
pub(crate) fn axum_path(template: &str) -> String {
    template.replace(":id", "{id}")
}
