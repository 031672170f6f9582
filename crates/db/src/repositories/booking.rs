use crate::models::DbBooking;
use chrono::Utc;
use eyre::Result;
use slotbook_core::models::booking::CreateBookingRequest;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

// Postgres unique_violation; raised by uq_bookings_slot when two bookings
// race for the same slot.
const UNIQUE_VIOLATION: &str = "23505";

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some(UNIQUE_VIOLATION))
}

/// Inserts a booking for the slot. Returns `Ok(None)` when the unique
/// constraint on `slot_id` rejects the insert, meaning another booking won
/// the race; the caller turns that into a conflict response.
pub async fn create_booking(
    pool: &Pool<Postgres>,
    slot_id: Uuid,
    payload: &CreateBookingRequest,
    cancellation_code: &str,
) -> Result<Option<DbBooking>> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!("Creating booking: id={}, slot_id={}", id, slot_id);

    let result = sqlx::query_as::<_, DbBooking>(
        r#"
        INSERT INTO bookings (id, slot_id, student_name, student_email, question,
                              thesis_type, program, artifacts_link, cancellation_code, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING id, slot_id, student_name, student_email, question,
                  thesis_type, program, artifacts_link, cancellation_code, created_at
        "#,
    )
    .bind(id)
    .bind(slot_id)
    .bind(&payload.student_name)
    .bind(&payload.student_email)
    .bind(&payload.question)
    .bind(&payload.thesis_type)
    .bind(&payload.program)
    .bind(&payload.artifacts_link)
    .bind(cancellation_code)
    .bind(now)
    .fetch_one(pool)
    .await;

    match result {
        Ok(booking) => Ok(Some(booking)),
        Err(err) if is_unique_violation(&err) => {
            tracing::debug!("Booking lost the race for slot {}", slot_id);
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}

pub async fn get_booking_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbBooking>> {
    let booking = sqlx::query_as::<_, DbBooking>(
        r#"
        SELECT id, slot_id, student_name, student_email, question,
               thesis_type, program, artifacts_link, cancellation_code, created_at
        FROM bookings
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(booking)
}

pub async fn delete_booking(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM bookings
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn list_bookings(pool: &Pool<Postgres>) -> Result<Vec<DbBooking>> {
    let bookings = sqlx::query_as::<_, DbBooking>(
        r#"
        SELECT id, slot_id, student_name, student_email, question,
               thesis_type, program, artifacts_link, cancellation_code, created_at
        FROM bookings
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(bookings)
}

pub async fn list_bookings_by_expert(
    pool: &Pool<Postgres>,
    expert_id: Uuid,
) -> Result<Vec<DbBooking>> {
    let bookings = sqlx::query_as::<_, DbBooking>(
        r#"
        SELECT b.id, b.slot_id, b.student_name, b.student_email, b.question,
               b.thesis_type, b.program, b.artifacts_link, b.cancellation_code, b.created_at
        FROM bookings b
        JOIN slots s ON s.id = b.slot_id
        WHERE s.expert_id = $1
        ORDER BY s.start_at ASC
        "#,
    )
    .bind(expert_id)
    .fetch_all(pool)
    .await?;

    Ok(bookings)
}

/// Moves a booking to another slot and/or replaces its question. Returns
/// `Ok(None)` when the target slot is already taken (unique violation during
/// the reassignment). Missing booking and target-slot checks belong to the
/// caller.
pub async fn update_booking(
    pool: &Pool<Postgres>,
    id: Uuid,
    slot_id: Option<Uuid>,
    question: Option<&str>,
) -> Result<Option<DbBooking>> {
    let result = sqlx::query_as::<_, DbBooking>(
        r#"
        UPDATE bookings
        SET slot_id = COALESCE($2, slot_id),
            question = COALESCE($3, question)
        WHERE id = $1
        RETURNING id, slot_id, student_name, student_email, question,
                  thesis_type, program, artifacts_link, cancellation_code, created_at
        "#,
    )
    .bind(id)
    .bind(slot_id)
    .bind(question)
    .fetch_one(pool)
    .await;

    match result {
        Ok(booking) => Ok(Some(booking)),
        Err(err) if is_unique_violation(&err) => Ok(None),
        Err(err) => Err(err.into()),
    }
}
