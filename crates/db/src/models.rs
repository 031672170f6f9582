use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbExpert {
    pub id: Uuid,
    pub full_name: String,
    pub expertise_area: String,
    pub bio: Option<String>,
    pub contact_info: Option<String>,
    pub meeting_room: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbSlot {
    pub id: Uuid,
    pub expert_id: Uuid,
    pub start_at: DateTime<Utc>,
    pub duration_minutes: i32,
    pub created_at: DateTime<Utc>,
}

/// Slot row joined against bookings; `is_available` is true when no booking
/// references the slot.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbSlotWithAvailability {
    pub id: Uuid,
    pub expert_id: Uuid,
    pub start_at: DateTime<Utc>,
    pub duration_minutes: i32,
    pub created_at: DateTime<Utc>,
    pub is_available: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBooking {
    pub id: Uuid,
    pub slot_id: Uuid,
    pub student_name: String,
    pub student_email: String,
    pub question: String,
    pub thesis_type: Option<String>,
    pub program: Option<String>,
    pub artifacts_link: Option<String>,
    pub cancellation_code: String,
    pub created_at: DateTime<Utc>,
}
