use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use super::{AppJson, AppQuery, CreatedResponse};
use crate::entities::booking;
use crate::error::AppResult;
use crate::services::booking::{self as booking_service, CreateBookingRequest};
use crate::services::query::{self, BookingsQuery};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct BookingsResponse {
    pub success: bool,
    pub bookings: Vec<booking::Model>,
}

/// Create a booking
pub async fn create_booking(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateBookingRequest>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let db = state.store.acquire().await?;
    let id = booking_service::create_booking(&db, payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new("Booking created successfully", id)),
    ))
}

/// List a user's bookings, newest first
pub async fn list_bookings(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<BookingsQuery>,
) -> AppResult<Json<BookingsResponse>> {
    let user_id = params.user_id()?;
    let db = state.store.acquire().await?;
    let bookings = query::list_bookings_for_user(&db, user_id).await?;

    Ok(Json(BookingsResponse {
        success: true,
        bookings,
    }))
}
