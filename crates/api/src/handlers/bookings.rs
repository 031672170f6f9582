use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    Json,
};
use serde::Deserialize;
use slotbook_core::{
    errors::BookingError,
    models::booking::{AdminUpdateBookingRequest, BookingResponse, CreateBookingRequest},
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    handlers::MessageResponse,
    middleware::{auth, error_handling::AppError},
    ApiState,
};

/// Query parameters for the student cancellation endpoint.
#[derive(Debug, Deserialize)]
pub struct CancelBookingQuery {
    pub cancellation_code: String,
}

fn booking_response(booking: slotbook_db::models::DbBooking) -> BookingResponse {
    BookingResponse {
        id: booking.id,
        slot_id: booking.slot_id,
        student_name: booking.student_name,
        student_email: booking.student_email,
        question: booking.question,
        thesis_type: booking.thesis_type,
        program: booking.program,
        artifacts_link: booking.artifacts_link,
        cancellation_code: booking.cancellation_code,
        created_at: booking.created_at,
    }
}

#[axum::debug_handler]
pub async fn book_slot(
    State(state): State<Arc<ApiState>>,
    Path(slot_id): Path<Uuid>,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<Json<BookingResponse>, AppError> {
    payload.validate()?;

    let slot = slotbook_db::repositories::slot::get_slot_by_id(&state.db_pool, slot_id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| BookingError::NotFound(format!("Slot with ID {} not found", slot_id)))?;
    if !slot.is_available {
        return Err(AppError(BookingError::Conflict(
            "Slot is already booked".to_string(),
        )));
    }

    let cancellation_code = auth::generate_cancellation_code();

    // The availability check above is advisory only; the unique constraint
    // on slot_id is what decides a race, and the repository reports losing
    // it as None
    let booking = slotbook_db::repositories::booking::create_booking(
        &state.db_pool,
        slot_id,
        &payload,
        &cancellation_code,
    )
    .await
    .map_err(BookingError::Database)?
    .ok_or_else(|| BookingError::Conflict("Slot is already booked".to_string()))?;

    Ok(Json(booking_response(booking)))
}

#[axum::debug_handler]
pub async fn cancel_booking(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Query(query): Query<CancelBookingQuery>,
) -> Result<Json<MessageResponse>, AppError> {
    let booking = slotbook_db::repositories::booking::get_booking_by_id(&state.db_pool, id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| BookingError::NotFound(format!("Booking with ID {} not found", id)))?;

    if booking.cancellation_code != query.cancellation_code {
        return Err(AppError(BookingError::Forbidden(
            "Invalid cancellation code".to_string(),
        )));
    }

    slotbook_db::repositories::booking::delete_booking(&state.db_pool, id)
        .await
        .map_err(BookingError::Database)?;

    Ok(Json(MessageResponse::new("Booking cancelled")))
}

#[axum::debug_handler]
pub async fn list_bookings(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<BookingResponse>>, AppError> {
    auth::require_admin(&state.config, &headers)?;

    let bookings = slotbook_db::repositories::booking::list_bookings(&state.db_pool)
        .await
        .map_err(BookingError::Database)?;

    Ok(Json(bookings.into_iter().map(booking_response).collect()))
}

#[axum::debug_handler]
pub async fn expert_bookings(
    State(state): State<Arc<ApiState>>,
    Path(expert_id): Path<Uuid>,
) -> Result<Json<Vec<BookingResponse>>, AppError> {
    let bookings =
        slotbook_db::repositories::booking::list_bookings_by_expert(&state.db_pool, expert_id)
            .await
            .map_err(BookingError::Database)?;

    Ok(Json(bookings.into_iter().map(booking_response).collect()))
}

#[axum::debug_handler]
pub async fn admin_update_booking(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
    Json(payload): Json<AdminUpdateBookingRequest>,
) -> Result<Json<BookingResponse>, AppError> {
    auth::require_admin(&state.config, &headers)?;
    payload.validate()?;

    let booking = slotbook_db::repositories::booking::get_booking_by_id(&state.db_pool, id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| BookingError::NotFound(format!("Booking with ID {} not found", id)))?;

    // Reassignment target must exist and be free
    if let Some(slot_id) = payload.slot_id {
        if slot_id != booking.slot_id {
            let slot = slotbook_db::repositories::slot::get_slot_by_id(&state.db_pool, slot_id)
                .await
                .map_err(BookingError::Database)?
                .ok_or_else(|| {
                    BookingError::NotFound(format!("Slot with ID {} not found", slot_id))
                })?;
            if !slot.is_available {
                return Err(AppError(BookingError::Conflict(
                    "Target slot is already booked".to_string(),
                )));
            }
        }
    }

    let updated = slotbook_db::repositories::booking::update_booking(
        &state.db_pool,
        id,
        payload.slot_id,
        payload.question.as_deref(),
    )
    .await
    .map_err(BookingError::Database)?
    .ok_or_else(|| BookingError::Conflict("Target slot is already booked".to_string()))?;

    Ok(Json(booking_response(updated)))
}

#[axum::debug_handler]
pub async fn admin_delete_booking(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<Json<MessageResponse>, AppError> {
    auth::require_admin(&state.config, &headers)?;

    let deleted = slotbook_db::repositories::booking::delete_booking(&state.db_pool, id)
        .await
        .map_err(BookingError::Database)?;
    if !deleted {
        return Err(AppError(BookingError::NotFound(format!(
            "Booking with ID {} not found",
            id
        ))));
    }

    Ok(Json(MessageResponse::new("Booking deleted")))
}
