use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use serde::Deserialize;
use uuid::Uuid;

use super::{non_empty, parse_identifier};
use crate::entities::worker::{self, ServiceCategory};
use crate::entities::booking;
use crate::error::{AppError, AppResult};

/// Optional exact-match filters for the worker directory.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct WorkerFilter {
    pub service: Option<String>,
    pub pincode: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BookingsQuery {
    pub user_id: Option<String>,
}

impl BookingsQuery {
    pub fn user_id(self) -> AppResult<Uuid> {
        let raw = non_empty(self.user_id)
            .ok_or_else(|| AppError::Validation("userId is required".to_string()))?;
        parse_identifier("userId", &raw)
    }
}

/// Workers matching every supplied filter. Omitted or blank filters are not
/// applied, and status is never filtered. A service no worker can hold
/// matches nothing. Order is whatever the store returns.
pub async fn list_workers(
    db: &DatabaseConnection,
    filter: WorkerFilter,
) -> AppResult<Vec<worker::Model>> {
    let mut query = worker::Entity::find();

    if let Some(service) = non_empty(filter.service) {
        match service.parse::<ServiceCategory>() {
            Ok(service) => query = query.filter(worker::Column::Service.eq(service)),
            Err(reason) => {
                tracing::debug!(%reason, "Service filter matches no category");
                return Ok(Vec::new());
            }
        }
    }
    if let Some(pincode) = non_empty(filter.pincode) {
        query = query.filter(worker::Column::Pincode.eq(pincode));
    }

    let workers = query.all(db).await?;
    tracing::debug!(count = workers.len(), "Listed workers");
    Ok(workers)
}

/// A user's bookings, most recent first.
pub async fn list_bookings_for_user(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> AppResult<Vec<booking::Model>> {
    let bookings = booking::Entity::find()
        .filter(booking::Column::UserId.eq(user_id))
        .order_by_desc(booking::Column::CreatedAt)
        .all(db)
        .await?;

    Ok(bookings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_user_id_is_a_validation_error() {
        let err = BookingsQuery::default().user_id().unwrap_err();
        assert_eq!(err.to_string(), "userId is required");

        let err = BookingsQuery {
            user_id: Some("".into()),
        }
        .user_id()
        .unwrap_err();
        assert_eq!(err.to_string(), "userId is required");
    }

    #[test]
    fn user_id_is_normalized() {
        let id = Uuid::new_v4();
        let parsed = BookingsQuery {
            user_id: Some(id.simple().to_string().to_uppercase()),
        }
        .user_id()
        .unwrap();
        assert_eq!(parsed, id);
    }
}
