//! Registration handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::app::RegisterUser;
use crate::domain::entities::User;
use crate::error::AppError;
use crate::AppState;

/// Request body for registration
///
/// Missing fields deserialize as empty so they are reported by validation
/// rather than as a malformed body.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub password: String,
    pub full_name: Option<String>,
}

impl From<RegisterRequest> for RegisterUser {
    fn from(request: RegisterRequest) -> Self {
        RegisterUser {
            email: request.email,
            username: request.username,
            password: request.password,
            full_name: request.full_name,
        }
    }
}

/// Envelope for successful writes
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub status: &'static str,
    pub message: String,
    pub data: T,
}

/// POST /api/auth/register
///
/// Creates an account and returns it without the password hash.
pub async fn register(
    State(state): State<AppState>,
    body: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<User>>), AppError> {
    let Json(request) =
        body.map_err(|e| AppError::BadRequest(format!("Invalid JSON format: {}", e.body_text())))?;

    let user = state.user_service.register(request.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse {
            status: "success",
            message: "User registered successfully".to_string(),
            data: user,
        }),
    ))
}
