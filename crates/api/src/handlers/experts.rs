use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    Json,
};
use chrono::{Duration, Utc};
use serde::Deserialize;
use slotbook_core::{
    errors::BookingError,
    models::{
        expert::{
            CreateExpertRequest, ExpertResponse, ExpertWithSlotsResponse, UpdateExpertRequest,
        },
        slot::SlotResponse,
    },
};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    handlers::{slots::slot_response, MessageResponse},
    middleware::{auth, error_handling::AppError},
    ApiState,
};

/// Query parameters for the expert listing.
#[derive(Debug, Deserialize)]
pub struct ExpertListQuery {
    /// When present, only slots starting within `[now, now + horizon_days]`
    /// are attached to each expert.
    pub horizon_days: Option<i64>,
}

fn expert_response(expert: slotbook_db::models::DbExpert) -> ExpertResponse {
    ExpertResponse {
        id: expert.id,
        full_name: expert.full_name,
        expertise_area: expert.expertise_area,
        bio: expert.bio,
        contact_info: expert.contact_info,
        meeting_room: expert.meeting_room,
    }
}

#[axum::debug_handler]
pub async fn list_experts(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<ExpertListQuery>,
) -> Result<Json<Vec<ExpertWithSlotsResponse>>, AppError> {
    let window = match query.horizon_days {
        Some(days) => {
            if !(1..=365).contains(&days) {
                return Err(AppError(BookingError::Validation(
                    "horizon_days must be between 1 and 365".to_string(),
                )));
            }
            let now = Utc::now();
            Some((now, now + Duration::days(days)))
        }
        None => None,
    };

    let experts = slotbook_db::repositories::expert::list_experts(&state.db_pool)
        .await
        .map_err(BookingError::Database)?;

    let slots = match window {
        Some((min_start, max_start)) => {
            slotbook_db::repositories::slot::list_slots_between(
                &state.db_pool,
                min_start,
                max_start,
            )
            .await
        }
        None => slotbook_db::repositories::slot::list_slots(&state.db_pool).await,
    }
    .map_err(BookingError::Database)?;

    // Slots arrive ordered by start time; bucket them per expert
    let mut slots_by_expert: HashMap<Uuid, Vec<SlotResponse>> = HashMap::new();
    for slot in slots {
        slots_by_expert
            .entry(slot.expert_id)
            .or_default()
            .push(slot_response(slot));
    }

    let response = experts
        .into_iter()
        .map(|expert| ExpertWithSlotsResponse {
            slots: slots_by_expert.remove(&expert.id).unwrap_or_default(),
            id: expert.id,
            full_name: expert.full_name,
            expertise_area: expert.expertise_area,
            bio: expert.bio,
            contact_info: expert.contact_info,
            meeting_room: expert.meeting_room,
        })
        .collect();

    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn create_expert(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Json(payload): Json<CreateExpertRequest>,
) -> Result<Json<ExpertResponse>, AppError> {
    auth::require_admin(&state.config, &headers)?;
    payload.validate()?;

    let expert = slotbook_db::repositories::expert::create_expert(
        &state.db_pool,
        &payload.full_name,
        &payload.expertise_area,
        payload.bio.as_deref(),
        payload.contact_info.as_deref(),
        payload.meeting_room.as_deref(),
    )
    .await
    .map_err(BookingError::Database)?;

    Ok(Json(expert_response(expert)))
}

#[axum::debug_handler]
pub async fn update_expert(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
    Json(payload): Json<UpdateExpertRequest>,
) -> Result<Json<ExpertResponse>, AppError> {
    auth::require_admin(&state.config, &headers)?;
    payload.validate()?;

    let expert = slotbook_db::repositories::expert::update_expert(&state.db_pool, id, &payload)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| BookingError::NotFound(format!("Expert with ID {} not found", id)))?;

    Ok(Json(expert_response(expert)))
}

#[axum::debug_handler]
pub async fn delete_expert(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<Json<MessageResponse>, AppError> {
    auth::require_admin(&state.config, &headers)?;

    let deleted = slotbook_db::repositories::expert::delete_expert(&state.db_pool, id)
        .await
        .map_err(BookingError::Database)?;
    if !deleted {
        return Err(AppError(BookingError::NotFound(format!(
            "Expert with ID {} not found",
            id
        ))));
    }

    Ok(Json(MessageResponse::new("Expert deleted")))
}
