use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{BookingError, BookingResult};

/// Shortest slot an expert can offer, in minutes.
pub const MIN_DURATION_MINUTES: i32 = 5;
/// Longest slot an expert can offer, in minutes.
pub const MAX_DURATION_MINUTES: i32 = 240;

const DEFAULT_DURATION_MINUTES: i32 = 30;

fn default_duration() -> i32 {
    DEFAULT_DURATION_MINUTES
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSlotRequest {
    pub expert_id: Uuid,
    pub start_at: DateTime<Utc>,
    #[serde(default = "default_duration")]
    pub duration_minutes: i32,
}

impl CreateSlotRequest {
    pub fn validate(&self) -> BookingResult<()> {
        validate_duration(self.duration_minutes)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchCreateSlotsRequest {
    pub expert_id: Uuid,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    #[serde(default = "default_duration")]
    pub slot_duration_minutes: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSlotRequest {
    pub start_at: Option<DateTime<Utc>>,
    pub duration_minutes: Option<i32>,
}

impl UpdateSlotRequest {
    pub fn validate(&self) -> BookingResult<()> {
        if let Some(minutes) = self.duration_minutes {
            validate_duration(minutes)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotResponse {
    pub id: Uuid,
    pub expert_id: Uuid,
    pub start_at: DateTime<Utc>,
    pub duration_minutes: i32,
    pub is_available: bool,
}

pub fn validate_duration(minutes: i32) -> BookingResult<()> {
    if !(MIN_DURATION_MINUTES..=MAX_DURATION_MINUTES).contains(&minutes) {
        return Err(BookingError::Validation(format!(
            "duration_minutes must be between {} and {}",
            MIN_DURATION_MINUTES, MAX_DURATION_MINUTES
        )));
    }
    Ok(())
}

/// Plans a batch of consecutive, non-overlapping slot start times covering
/// `[start_at, end_at)` with slots of `duration_minutes` each.
///
/// The range must be longer than zero, hold at least one slot, and divide
/// evenly by the duration; otherwise no slots are planned and a validation
/// error is returned. Slot `i` starts at `start_at + i * duration`.
pub fn plan_batch(
    start_at: DateTime<Utc>,
    end_at: DateTime<Utc>,
    duration_minutes: i32,
) -> BookingResult<Vec<DateTime<Utc>>> {
    validate_duration(duration_minutes)?;

    if end_at <= start_at {
        return Err(BookingError::Validation(
            "end_at must be after start_at".to_string(),
        ));
    }

    let step = Duration::minutes(duration_minutes as i64);
    let span = end_at - start_at;
    if span < step {
        return Err(BookingError::Validation(
            "range is shorter than a single slot".to_string(),
        ));
    }

    let step_seconds = step.num_seconds();
    let span_seconds = span.num_seconds();
    if span_seconds % step_seconds != 0 {
        return Err(BookingError::Validation(
            "range must divide evenly by the slot duration".to_string(),
        ));
    }

    let count = span_seconds / step_seconds;
    Ok((0..count).map(|i| start_at + step * i as i32).collect())
}
