use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};
use slotbook_core::{
    errors::BookingError,
    models::slot::{
        plan_batch, BatchCreateSlotsRequest, CreateSlotRequest, SlotResponse, UpdateSlotRequest,
    },
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    handlers::MessageResponse,
    middleware::{auth, error_handling::AppError},
    ApiState,
};

pub(crate) fn slot_response(slot: slotbook_db::models::DbSlotWithAvailability) -> SlotResponse {
    SlotResponse {
        id: slot.id,
        expert_id: slot.expert_id,
        start_at: slot.start_at,
        duration_minutes: slot.duration_minutes,
        is_available: slot.is_available,
    }
}

fn new_slot_response(slot: slotbook_db::models::DbSlot) -> SlotResponse {
    // A freshly created slot cannot have a booking yet
    SlotResponse {
        id: slot.id,
        expert_id: slot.expert_id,
        start_at: slot.start_at,
        duration_minutes: slot.duration_minutes,
        is_available: true,
    }
}

async fn ensure_expert_exists(state: &ApiState, expert_id: Uuid) -> Result<(), AppError> {
    slotbook_db::repositories::expert::get_expert_by_id(&state.db_pool, expert_id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| BookingError::NotFound(format!("Expert with ID {} not found", expert_id)))?;
    Ok(())
}

#[axum::debug_handler]
pub async fn list_slots(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<SlotResponse>>, AppError> {
    let slots = slotbook_db::repositories::slot::list_slots(&state.db_pool)
        .await
        .map_err(BookingError::Database)?;

    Ok(Json(slots.into_iter().map(slot_response).collect()))
}

#[axum::debug_handler]
pub async fn create_slot(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Json(payload): Json<CreateSlotRequest>,
) -> Result<Json<SlotResponse>, AppError> {
    auth::require_admin(&state.config, &headers)?;
    payload.validate()?;
    ensure_expert_exists(&state, payload.expert_id).await?;

    let slot = slotbook_db::repositories::slot::create_slot(
        &state.db_pool,
        payload.expert_id,
        payload.start_at,
        payload.duration_minutes,
    )
    .await
    .map_err(BookingError::Database)?;

    Ok(Json(new_slot_response(slot)))
}

#[axum::debug_handler]
pub async fn create_slot_batch(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Json(payload): Json<BatchCreateSlotsRequest>,
) -> Result<Json<Vec<SlotResponse>>, AppError> {
    auth::require_admin(&state.config, &headers)?;
    ensure_expert_exists(&state, payload.expert_id).await?;

    // Validates the range and computes every start time; no slot is
    // persisted unless the whole plan is valid
    let start_times = plan_batch(
        payload.start_at,
        payload.end_at,
        payload.slot_duration_minutes,
    )?;

    let slots = slotbook_db::repositories::slot::create_slots_batch(
        &state.db_pool,
        payload.expert_id,
        &start_times,
        payload.slot_duration_minutes,
    )
    .await
    .map_err(BookingError::Database)?;

    Ok(Json(slots.into_iter().map(new_slot_response).collect()))
}

#[axum::debug_handler]
pub async fn update_slot(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
    Json(payload): Json<UpdateSlotRequest>,
) -> Result<Json<SlotResponse>, AppError> {
    auth::require_admin(&state.config, &headers)?;
    payload.validate()?;

    let slot = slotbook_db::repositories::slot::get_slot_by_id(&state.db_pool, id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| BookingError::NotFound(format!("Slot with ID {} not found", id)))?;
    if !slot.is_available {
        return Err(AppError(BookingError::Conflict(
            "Cannot update an occupied slot".to_string(),
        )));
    }

    let updated = slotbook_db::repositories::slot::update_slot(
        &state.db_pool,
        id,
        payload.start_at,
        payload.duration_minutes,
    )
    .await
    .map_err(BookingError::Database)?
    .ok_or_else(|| BookingError::NotFound(format!("Slot with ID {} not found", id)))?;

    Ok(Json(new_slot_response(updated)))
}

#[axum::debug_handler]
pub async fn delete_slot(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<Json<MessageResponse>, AppError> {
    auth::require_admin(&state.config, &headers)?;

    let slot = slotbook_db::repositories::slot::get_slot_by_id(&state.db_pool, id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| BookingError::NotFound(format!("Slot with ID {} not found", id)))?;
    if !slot.is_available {
        return Err(AppError(BookingError::Conflict(
            "Cannot delete an occupied slot; cancel its booking first".to_string(),
        )));
    }

    slotbook_db::repositories::slot::delete_slot(&state.db_pool, id)
        .await
        .map_err(BookingError::Database)?;

    Ok(Json(MessageResponse::new("Slot deleted")))
}
