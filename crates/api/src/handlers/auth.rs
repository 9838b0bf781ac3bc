//! Handlers for the `/api/auth` resource (login, logout).

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use clientdesk_core::error::CoreError;
use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use crate::auth::jwt::generate_token;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/auth/login`. Fields are optional at the
/// serde level so their absence is reported as a validation error.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Plain acknowledgement body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl LoginRequest {
    /// Fail-fast validation: email present and syntactically valid,
    /// password present and non-empty.
    fn validate(self) -> Result<(String, String), CoreError> {
        let email = match self.email {
            Some(email) if email.validate_email() => email,
            Some(_) => {
                return Err(CoreError::validation(
                    "email must be a valid email address",
                    "email",
                ))
            }
            None => return Err(CoreError::validation("email is required", "email")),
        };
        let password = match self.password {
            Some(password) if !password.is_empty() => password,
            Some(_) => {
                return Err(CoreError::validation(
                    "password must not be empty",
                    "password",
                ))
            }
            None => return Err(CoreError::validation("password is required", "password")),
        };
        Ok((email, password))
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/login
///
/// Validate the submitted credential pair against the configured identity
/// and return a signed token. The failure message never distinguishes a
/// wrong password from an unknown email.
pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> AppResult<Json<TokenResponse>> {
    let Json(input) = body.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let (email, password) = input.validate()?;

    let auth = &state.config.auth;
    if email != auth.admin_email || password != auth.admin_password {
        tracing::info!("Rejected login attempt");
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid email or password".into(),
        )));
    }

    let token = generate_token(&email, auth)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(%email, "Login succeeded");
    Ok(Json(TokenResponse { token }))
}

/// POST /api/auth/logout
///
/// Tokens are stateless and not revocable; the caller discards its copy.
/// This endpoint only acknowledges.
pub async fn logout() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Logged out successfully".to_string(),
    })
}
