//! Handlers for the `/api/developers` resource.
//!
//! Developers expose no update operation; rows are created and deleted
//! whole.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use clientdesk_core::error::CoreError;
use clientdesk_core::types::DbId;
use clientdesk_db::models::developer::{CreateDeveloper, Developer};
use clientdesk_db::repositories::DeveloperRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/developers
pub async fn list(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Developer>>> {
    let developers = DeveloperRepo::list(&state.pool).await?;
    Ok(Json(developers))
}

/// GET /api/developers/:id
pub async fn get_by_id(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Developer>> {
    let developer = DeveloperRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Developer",
            id,
        }))?;
    Ok(Json(developer))
}

/// POST /api/developers
pub async fn create(
    _auth: AuthUser,
    State(state): State<AppState>,
    body: Result<Json<CreateDeveloper>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Developer>)> {
    let Json(input) = body.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let input = input.validate()?;

    let developer = DeveloperRepo::create(&state.pool, &input).await?;
    tracing::info!(id = developer.id, name = %developer.name, "Developer created");
    Ok((StatusCode::CREATED, Json(developer)))
}

/// DELETE /api/developers/:id
///
/// Idempotent like client deletion: a missing id still yields 204.
/// Clients referencing this developer keep their label; the
/// `assignedDeveloper` field is not a foreign key.
pub async fn delete(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let removed = DeveloperRepo::delete(&state.pool, id).await?;
    if removed {
        tracing::info!(id, "Developer deleted");
    }
    Ok(StatusCode::NO_CONTENT)
}
