use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use super::{AppJson, CreatedResponse};
use crate::error::AppResult;
use crate::services::auth::{self, LoginRequest, RegisterRequest, UserSummary};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub user: UserSummary,
}

/// Register a customer account
pub async fn register(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let db = state.store.acquire().await?;
    let id = auth::register(&db, state.password_params(), payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new("User registered", id)),
    ))
}

/// Login with email and password
pub async fn login(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let db = state.store.acquire().await?;
    let user = auth::login(&db, state.password_params(), payload).await?;

    Ok(Json(LoginResponse {
        success: true,
        message: "Login successful".to_string(),
        user,
    }))
}
