use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use serde::Serialize;
use validator::{ValidationError, ValidationErrors};

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Too many requests, retry in {0}s")]
    TooManyRequests(u64),

    /// Store unreachable. The cause is already redacted of credentials.
    #[error("Database unavailable: {0}")]
    Connection(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("{0}")]
    Internal(String),
}

/// Wire shape shared by every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            // Duplicate email keeps the 400 the web client already handles.
            AppError::Validation(_) | AppError::Conflict(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::TooManyRequests(_) => StatusCode::TOO_MANY_REQUESTS,
            AppError::Connection(_) | AppError::Database(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Maps a unique-index violation onto `Conflict`, anything else onto `Database`.
    pub fn from_insert(err: DbErr, conflict_message: &str) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                AppError::Conflict(conflict_message.to_string())
            }
            _ => AppError::Database(err),
        }
    }

    fn body(&self) -> ErrorBody {
        let (message, error) = match self {
            AppError::Connection(cause) => ("Database unavailable".to_string(), Some(cause.clone())),
            // Driver text names tables and constraints; it stays in the log.
            AppError::Database(_) => (
                "Database error".to_string(),
                Some("The request could not be completed".to_string()),
            ),
            AppError::Internal(detail) => ("Internal server error".to_string(), Some(detail.clone())),
            other => (other.to_string(), None),
        };

        ErrorBody {
            success: false,
            message,
            error,
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let reason = errs
                    .first()
                    .map(validation_reason)
                    .unwrap_or_else(|| "is required".to_string());
                format!("{} {}", wire_name(&field), reason)
            })
            .collect();
        fields.sort();

        AppError::Validation(format!("Invalid request: {}", fields.join(", ")))
    }
}

/// Request fields travel in camelCase; validator reports the Rust name.
fn wire_name(field: &str) -> String {
    let mut name = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            name.extend(c.to_uppercase());
            upper = false;
        } else {
            name.push(c);
        }
    }
    name
}

fn validation_reason(error: &ValidationError) -> String {
    if let Some(message) = &error.message {
        return message.to_string();
    }

    let given = error
        .params
        .get("value")
        .and_then(|v| v.as_str())
        .map_or(0, |v| v.chars().count());
    match error.params.get("max") {
        Some(max) if error.code == "length" && given > 0 => {
            format!("must be at most {} characters", max)
        }
        _ => "is required".to_string(),
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Validation(format!("Invalid query string: {}", rejection.body_text()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, status = %status, "Request rejected");
        }

        (status, Json(self.body())).into_response()
    }
}
