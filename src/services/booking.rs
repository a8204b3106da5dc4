use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use serde::Deserialize;
use uuid::Uuid;

use super::{non_empty, parse_identifier};
use crate::entities::booking::{self, BookingStatus};
use crate::entities::{user, worker};
use crate::error::{AppError, AppResult};

/// Hourly start times a booking can pick.
pub const TIME_SLOTS: [&str; 10] = [
    "09:00", "10:00", "11:00", "12:00", "13:00", "14:00", "15:00", "16:00", "17:00", "18:00",
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StayQuote {
    pub day_count: i32,
    pub total_price: f64,
}

/// Inclusive day count for `start..=end` and its price at `per_day_charges`.
/// A same-day booking is one day.
pub fn quote_stay(start: NaiveDate, end: NaiveDate, per_day_charges: f64) -> AppResult<StayQuote> {
    if end < start {
        return Err(AppError::Validation(
            "End date must be on or after start date".to_string(),
        ));
    }
    if !(per_day_charges.is_finite() && per_day_charges > 0.0) {
        return Err(AppError::Validation(
            "Per day charges must be a positive number".to_string(),
        ));
    }

    let days = ((end - start).num_days() + 1).max(1);
    let day_count = i32::try_from(days)
        .map_err(|_| AppError::Validation("Booking range is too long".to_string()))?;

    Ok(StayQuote {
        day_count,
        total_price: f64::from(day_count) * per_day_charges,
    })
}

/// Booking form as the web client posts it. Denormalized worker/user fields
/// and client-side totals may be present; they are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub worker_id: Option<String>,
    pub user_id: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub time: Option<String>,
    pub per_day_charges: Option<f64>,
}

struct ValidBooking {
    worker_id: Uuid,
    user_id: Uuid,
    start_date: NaiveDate,
    end_date: NaiveDate,
    time_slot: String,
}

impl CreateBookingRequest {
    fn into_valid(self) -> AppResult<ValidBooking> {
        let fields = [
            ("workerId", non_empty(self.worker_id)),
            ("userId", non_empty(self.user_id)),
            ("startDate", non_empty(self.start_date)),
            ("endDate", non_empty(self.end_date)),
            ("time", non_empty(self.time)),
        ];

        let missing: Vec<&str> = fields
            .iter()
            .filter(|(_, value)| value.is_none())
            .map(|(name, _)| *name)
            .collect();
        if !missing.is_empty() {
            return Err(AppError::Validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }

        let [worker_id, user_id, start_date, end_date, time] =
            fields.map(|(_, value)| value.unwrap_or_default());

        let time_slot = time.trim().to_string();
        if !TIME_SLOTS.contains(&time_slot.as_str()) {
            return Err(AppError::Validation(format!(
                "time must be one of {}",
                TIME_SLOTS.join(", ")
            )));
        }

        Ok(ValidBooking {
            worker_id: parse_identifier("workerId", &worker_id)?,
            user_id: parse_identifier("userId", &user_id)?,
            start_date: parse_date("startDate", &start_date)?,
            end_date: parse_date("endDate", &end_date)?,
            time_slot,
        })
    }
}

fn parse_date(field: &str, raw: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::Validation(format!("{} must be a date in YYYY-MM-DD format", field)))
}

/// Reserve a worker for a date range. Price and denormalized names come from
/// the stored worker and user, never from the request.
pub async fn create_booking(
    db: &DatabaseConnection,
    payload: CreateBookingRequest,
) -> AppResult<Uuid> {
    let client_rate = payload.per_day_charges;
    let request = payload.into_valid()?;

    let worker = worker::Entity::find_by_id(request.worker_id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Worker not found".to_string()))?;

    let user = user::Entity::find_by_id(request.user_id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let quote = quote_stay(request.start_date, request.end_date, worker.per_day_charges)?;

    if let Some(rate) = client_rate {
        if (rate - worker.per_day_charges).abs() > f64::EPSILON {
            tracing::warn!(
                worker_id = %worker.id,
                client_rate = rate,
                stored_rate = worker.per_day_charges,
                "Ignoring client-supplied per day charges"
            );
        }
    }

    let booking_id = Uuid::new_v4();
    let new_booking = booking::ActiveModel {
        id: Set(booking_id),
        worker_id: Set(worker.id),
        worker_name: Set(worker.name),
        worker_phone: Set(worker.phone),
        service: Set(worker.service),
        user_id: Set(user.id),
        user_name: Set(user.name),
        user_email: Set(user.email),
        start_date: Set(request.start_date),
        end_date: Set(request.end_date),
        time_slot: Set(request.time_slot),
        per_day_charges: Set(worker.per_day_charges),
        day_count: Set(quote.day_count),
        total_price: Set(quote.total_price),
        status: Set(BookingStatus::Pending),
        created_at: Set(Utc::now().into()),
    };

    let booking = new_booking.insert(db).await?;

    tracing::info!(
        booking_id = %booking.id,
        worker_id = %booking.worker_id,
        user_id = %booking.user_id,
        day_count = booking.day_count,
        total_price = booking.total_price,
        "Booking created"
    );
    Ok(booking.id)
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn same_day_is_one_day() {
        let day = date("2024-01-10");
        let quote = quote_stay(day, day, 500.0).unwrap();
        assert_eq!(quote.day_count, 1);
        assert_eq!(quote.total_price, 500.0);
    }

    #[test]
    fn five_days_later_is_six_days() {
        let start = date("2024-02-27");
        let quote = quote_stay(start, start + Duration::days(5), 750.0).unwrap();
        assert_eq!(quote.day_count, 6);
        assert_eq!(quote.total_price, 4500.0);
    }

    #[test]
    fn range_is_inclusive() {
        let quote = quote_stay(date("2024-01-10"), date("2024-01-12"), 500.0).unwrap();
        assert_eq!(quote.day_count, 3);
        assert_eq!(quote.total_price, 1500.0);
    }

    #[test]
    fn end_before_start_is_rejected() {
        let err = quote_stay(date("2024-01-12"), date("2024-01-10"), 500.0).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn non_positive_rate_is_rejected() {
        let day = date("2024-01-10");
        assert!(quote_stay(day, day, 0.0).is_err());
        assert!(quote_stay(day, day, -10.0).is_err());
    }

    #[test]
    fn missing_fields_are_all_named() {
        let err = match (CreateBookingRequest {
            worker_id: Some(Uuid::new_v4().to_string()),
            start_date: Some("2024-01-10".into()),
            time: Some("  ".into()),
            ..Default::default()
        })
        .into_valid()
        {
            Err(err) => err,
            Ok(_) => panic!("request should be rejected"),
        };

        assert_eq!(
            err.to_string(),
            "Missing required fields: userId, endDate, time"
        );
    }

    #[test]
    fn unknown_time_slot_is_rejected() {
        let result = CreateBookingRequest {
            worker_id: Some(Uuid::new_v4().to_string()),
            user_id: Some(Uuid::new_v4().to_string()),
            start_date: Some("2024-01-10".into()),
            end_date: Some("2024-01-10".into()),
            time: Some("08:30".into()),
            per_day_charges: None,
        }
        .into_valid();

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn malformed_date_is_rejected() {
        let result = CreateBookingRequest {
            worker_id: Some(Uuid::new_v4().to_string()),
            user_id: Some(Uuid::new_v4().to_string()),
            start_date: Some("10/01/2024".into()),
            end_date: Some("2024-01-10".into()),
            time: Some("10:00".into()),
            per_day_charges: None,
        }
        .into_valid();

        match result {
            Err(err) => assert!(err.to_string().starts_with("startDate")),
            Ok(_) => panic!("request should be rejected"),
        }
    }
}
