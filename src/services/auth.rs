use std::fmt;

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::entities::user;
use crate::error::{AppError, AppResult};
use crate::utils::password::{hash_password, verify_stored_password, PasswordParams};

const INVALID_CREDENTIALS: &str = "Invalid credentials";

#[derive(Default, Deserialize, Validate)]
#[serde(default)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 255))]
    pub email: String,
    #[validate(length(min = 1, message = "is required"))]
    pub password: String,
}

#[derive(Default, Deserialize, Validate)]
#[serde(default)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "is required"))]
    pub password: String,
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// What a successful login hands back. Never includes the hash.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl From<user::Model> for UserSummary {
    fn from(user: user::Model) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

/// Register a customer account and return its id.
pub async fn register(
    db: &DatabaseConnection,
    params: PasswordParams,
    payload: RegisterRequest,
) -> AppResult<Uuid> {
    payload.validate()?;

    let password_hash = hash_password(params, payload.password).await?;

    let user_id = Uuid::new_v4();
    let new_user = user::ActiveModel {
        id: Set(user_id),
        name: Set(payload.name),
        email: Set(payload.email),
        password_hash: Set(password_hash),
        created_at: Set(Utc::now().into()),
    };

    // The unique index on email decides duplicates, so concurrent sign-ups
    // with one address cannot both land.
    let user = new_user
        .insert(db)
        .await
        .map_err(|e| AppError::from_insert(e, "Email already registered"))?;

    tracing::info!(user_id = %user.id, "User registered");
    Ok(user.id)
}

/// Check an email/password pair. Unknown email and wrong password fail
/// identically and cost one Argon2 run each.
pub async fn login(
    db: &DatabaseConnection,
    params: PasswordParams,
    payload: LoginRequest,
) -> AppResult<UserSummary> {
    payload.validate()?;

    let user = user::Entity::find()
        .filter(user::Column::Email.eq(&payload.email))
        .one(db)
        .await?;

    let stored_hash = user.as_ref().map(|u| u.password_hash.clone());
    if !verify_stored_password(params, stored_hash, payload.password).await? {
        tracing::debug!(known_account = user.is_some(), "Login rejected");
        return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
    }

    user.map(UserSummary::from)
        .ok_or_else(|| AppError::Unauthorized(INVALID_CREDENTIALS.to_string()))
}
