//! Handlers for the `/api/clients` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use clientdesk_core::error::CoreError;
use clientdesk_core::types::DbId;
use clientdesk_db::models::client::{Client, CreateClient, UpdateClient};
use clientdesk_db::repositories::ClientRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/clients
pub async fn list(_auth: AuthUser, State(state): State<AppState>) -> AppResult<Json<Vec<Client>>> {
    let clients = ClientRepo::list(&state.pool).await?;
    Ok(Json(clients))
}

/// GET /api/clients/:id
pub async fn get_by_id(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Client>> {
    let client = ClientRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id,
        }))?;
    Ok(Json(client))
}

/// POST /api/clients
pub async fn create(
    _auth: AuthUser,
    State(state): State<AppState>,
    body: Result<Json<CreateClient>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Client>)> {
    let Json(input) = body.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let input = input.validate()?;

    let client = ClientRepo::create(&state.pool, &input).await?;
    tracing::info!(id = client.id, name = %client.name, "Client created");
    Ok((StatusCode::CREATED, Json(client)))
}

/// PUT /api/clients/:id
pub async fn update(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    body: Result<Json<UpdateClient>, JsonRejection>,
) -> AppResult<Json<Client>> {
    let Json(patch) = body.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    patch.validate()?;

    let client = ClientRepo::update(&state.pool, id, &patch)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id,
        }))?;
    tracing::info!(id = client.id, "Client updated");
    Ok(Json(client))
}

/// DELETE /api/clients/:id
///
/// Deletion is idempotent: removing an id that is already gone is still a
/// 204 success.
pub async fn delete(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let removed = ClientRepo::delete(&state.pool, id).await?;
    if removed {
        tracing::info!(id, "Client deleted");
    }
    Ok(StatusCode::NO_CONTENT)
}
