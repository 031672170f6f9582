use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{BookingError, BookingResult};
use crate::models::slot::SlotResponse;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateExpertRequest {
    pub full_name: String,
    pub expertise_area: String,
    pub bio: Option<String>,
    pub contact_info: Option<String>,
    pub meeting_room: Option<String>,
}

impl CreateExpertRequest {
    pub fn validate(&self) -> BookingResult<()> {
        if self.full_name.trim().is_empty() {
            return Err(BookingError::Validation(
                "full_name must not be empty".to_string(),
            ));
        }
        if self.expertise_area.trim().is_empty() {
            return Err(BookingError::Validation(
                "expertise_area must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Partial update payload. Required fields are plain options (absent or a new
/// value); optional descriptive fields use double options so an explicit
/// `null` clears the field while an absent key leaves it untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateExpertRequest {
    pub full_name: Option<String>,
    pub expertise_area: Option<String>,
    #[serde(default, deserialize_with = "crate::models::patch_field")]
    pub bio: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::models::patch_field")]
    pub contact_info: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::models::patch_field")]
    pub meeting_room: Option<Option<String>>,
}

impl UpdateExpertRequest {
    pub fn validate(&self) -> BookingResult<()> {
        if matches!(&self.full_name, Some(name) if name.trim().is_empty()) {
            return Err(BookingError::Validation(
                "full_name must not be empty".to_string(),
            ));
        }
        if matches!(&self.expertise_area, Some(area) if area.trim().is_empty()) {
            return Err(BookingError::Validation(
                "expertise_area must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpertResponse {
    pub id: Uuid,
    pub full_name: String,
    pub expertise_area: String,
    pub bio: Option<String>,
    pub contact_info: Option<String>,
    pub meeting_room: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpertWithSlotsResponse {
    pub id: Uuid,
    pub full_name: String,
    pub expertise_area: String,
    pub bio: Option<String>,
    pub contact_info: Option<String>,
    pub meeting_room: Option<String>,
    pub slots: Vec<SlotResponse>,
}
