use crate::models::{DbSlot, DbSlotWithAvailability};
use chrono::{DateTime, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

const SLOT_WITH_AVAILABILITY: &str = r#"
    SELECT s.id, s.expert_id, s.start_at, s.duration_minutes, s.created_at,
           (b.id IS NULL) AS is_available
    FROM slots s
    LEFT JOIN bookings b ON b.slot_id = s.id
"#;

pub async fn create_slot(
    pool: &Pool<Postgres>,
    expert_id: Uuid,
    start_at: DateTime<Utc>,
    duration_minutes: i32,
) -> Result<DbSlot> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let slot = sqlx::query_as::<_, DbSlot>(
        r#"
        INSERT INTO slots (id, expert_id, start_at, duration_minutes, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, expert_id, start_at, duration_minutes, created_at
        "#,
    )
    .bind(id)
    .bind(expert_id)
    .bind(start_at)
    .bind(duration_minutes)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(slot)
}

/// Inserts one slot per start time inside a single transaction, so a failure
/// partway through commits nothing.
pub async fn create_slots_batch(
    pool: &Pool<Postgres>,
    expert_id: Uuid,
    start_times: &[DateTime<Utc>],
    duration_minutes: i32,
) -> Result<Vec<DbSlot>> {
    tracing::debug!(
        "Creating slot batch: expert_id={}, count={}, duration={}min",
        expert_id,
        start_times.len(),
        duration_minutes
    );

    let mut tx = pool.begin().await?;
    let mut created = Vec::with_capacity(start_times.len());

    for start_at in start_times {
        let slot = sqlx::query_as::<_, DbSlot>(
            r#"
            INSERT INTO slots (id, expert_id, start_at, duration_minutes, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, expert_id, start_at, duration_minutes, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(expert_id)
        .bind(start_at)
        .bind(duration_minutes)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;
        created.push(slot);
    }

    tx.commit().await?;
    Ok(created)
}

pub async fn get_slot_by_id(
    pool: &Pool<Postgres>,
    id: Uuid,
) -> Result<Option<DbSlotWithAvailability>> {
    let query = format!("{SLOT_WITH_AVAILABILITY} WHERE s.id = $1");
    let slot = sqlx::query_as::<_, DbSlotWithAvailability>(&query)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(slot)
}

pub async fn list_slots(pool: &Pool<Postgres>) -> Result<Vec<DbSlotWithAvailability>> {
    let query = format!("{SLOT_WITH_AVAILABILITY} ORDER BY s.start_at ASC");
    let slots = sqlx::query_as::<_, DbSlotWithAvailability>(&query)
        .fetch_all(pool)
        .await?;

    Ok(slots)
}

/// Lists slots starting inside `[min_start, max_start]`, ordered by start
/// time. Used for the windowed expert listing.
pub async fn list_slots_between(
    pool: &Pool<Postgres>,
    min_start: DateTime<Utc>,
    max_start: DateTime<Utc>,
) -> Result<Vec<DbSlotWithAvailability>> {
    let query = format!(
        "{SLOT_WITH_AVAILABILITY} WHERE s.start_at >= $1 AND s.start_at <= $2 ORDER BY s.start_at ASC"
    );
    let slots = sqlx::query_as::<_, DbSlotWithAvailability>(&query)
        .bind(min_start)
        .bind(max_start)
        .fetch_all(pool)
        .await?;

    Ok(slots)
}

/// Updates start time and/or duration, leaving absent fields untouched.
/// Returns `None` when the slot does not exist. Occupancy must be checked by
/// the caller before mutating.
pub async fn update_slot(
    pool: &Pool<Postgres>,
    id: Uuid,
    start_at: Option<DateTime<Utc>>,
    duration_minutes: Option<i32>,
) -> Result<Option<DbSlot>> {
    let updated = sqlx::query_as::<_, DbSlot>(
        r#"
        UPDATE slots
        SET start_at = COALESCE($2, start_at),
            duration_minutes = COALESCE($3, duration_minutes)
        WHERE id = $1
        RETURNING id, expert_id, start_at, duration_minutes, created_at
        "#,
    )
    .bind(id)
    .bind(start_at)
    .bind(duration_minutes)
    .fetch_optional(pool)
    .await?;

    Ok(updated)
}

pub async fn delete_slot(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM slots
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
