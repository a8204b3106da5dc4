pub mod auth;
pub mod bookings;
pub mod health;
pub mod workers;

use axum::extract::{FromRequest, FromRequestParts};
use serde::Serialize;
use uuid::Uuid;

use crate::error::AppError;

/// `Json` whose rejections use the error envelope instead of plain text.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// `Query` whose rejections use the error envelope instead of plain text.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub message: String,
    pub id: Uuid,
}

impl CreatedResponse {
    pub fn new(message: &str, id: Uuid) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            id,
        }
    }
}

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

pub async fn not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}
