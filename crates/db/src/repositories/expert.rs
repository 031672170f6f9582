use crate::models::DbExpert;
use chrono::Utc;
use eyre::Result;
use slotbook_core::models::expert::UpdateExpertRequest;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_expert(
    pool: &Pool<Postgres>,
    full_name: &str,
    expertise_area: &str,
    bio: Option<&str>,
    contact_info: Option<&str>,
    meeting_room: Option<&str>,
) -> Result<DbExpert> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!("Creating expert: id={}, full_name={}", id, full_name);

    let expert = sqlx::query_as::<_, DbExpert>(
        r#"
        INSERT INTO experts (id, full_name, expertise_area, bio, contact_info, meeting_room, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, full_name, expertise_area, bio, contact_info, meeting_room, created_at
        "#,
    )
    .bind(id)
    .bind(full_name)
    .bind(expertise_area)
    .bind(bio)
    .bind(contact_info)
    .bind(meeting_room)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(expert)
}

pub async fn get_expert_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbExpert>> {
    let expert = sqlx::query_as::<_, DbExpert>(
        r#"
        SELECT id, full_name, expertise_area, bio, contact_info, meeting_room, created_at
        FROM experts
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(expert)
}

pub async fn list_experts(pool: &Pool<Postgres>) -> Result<Vec<DbExpert>> {
    let experts = sqlx::query_as::<_, DbExpert>(
        r#"
        SELECT id, full_name, expertise_area, bio, contact_info, meeting_room, created_at
        FROM experts
        ORDER BY full_name ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(experts)
}

/// Applies a partial update and returns the updated row, or `None` when the
/// expert does not exist. Double-option fields distinguish "leave as is"
/// (absent) from "clear" (explicit null).
pub async fn update_expert(
    pool: &Pool<Postgres>,
    id: Uuid,
    patch: &UpdateExpertRequest,
) -> Result<Option<DbExpert>> {
    let Some(expert) = get_expert_by_id(pool, id).await? else {
        return Ok(None);
    };

    let full_name = patch.full_name.as_deref().unwrap_or(&expert.full_name);
    let expertise_area = patch
        .expertise_area
        .as_deref()
        .unwrap_or(&expert.expertise_area);
    let bio = match &patch.bio {
        Some(value) => value.as_deref(),
        None => expert.bio.as_deref(),
    };
    let contact_info = match &patch.contact_info {
        Some(value) => value.as_deref(),
        None => expert.contact_info.as_deref(),
    };
    let meeting_room = match &patch.meeting_room {
        Some(value) => value.as_deref(),
        None => expert.meeting_room.as_deref(),
    };

    let updated = sqlx::query_as::<_, DbExpert>(
        r#"
        UPDATE experts
        SET full_name = $2, expertise_area = $3, bio = $4, contact_info = $5, meeting_room = $6
        WHERE id = $1
        RETURNING id, full_name, expertise_area, bio, contact_info, meeting_room, created_at
        "#,
    )
    .bind(id)
    .bind(full_name)
    .bind(expertise_area)
    .bind(bio)
    .bind(contact_info)
    .bind(meeting_room)
    .fetch_one(pool)
    .await?;

    Ok(Some(updated))
}

/// Deletes an expert; the foreign keys cascade to its slots and their
/// bookings in the same statement. Returns false when the id is unknown.
pub async fn delete_expert(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    tracing::debug!("Deleting expert: id={}", id);

    let result = sqlx::query(
        r#"
        DELETE FROM experts
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
