use chrono::{DateTime, Utc};
use mockall::mock;
use slotbook_core::models::{
    booking::CreateBookingRequest,
    expert::UpdateExpertRequest,
};
use uuid::Uuid;

use crate::models::{DbBooking, DbExpert, DbSlot, DbSlotWithAvailability};

// Mock repositories for testing
mock! {
    pub ExpertRepo {
        pub async fn create_expert(
            &self,
            full_name: &'static str,
            expertise_area: &'static str,
            bio: Option<&'static str>,
            contact_info: Option<&'static str>,
            meeting_room: Option<&'static str>,
        ) -> eyre::Result<DbExpert>;

        pub async fn get_expert_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbExpert>>;

        pub async fn list_experts(&self) -> eyre::Result<Vec<DbExpert>>;

        pub async fn update_expert(
            &self,
            id: Uuid,
            patch: UpdateExpertRequest,
        ) -> eyre::Result<Option<DbExpert>>;

        pub async fn delete_expert(&self, id: Uuid) -> eyre::Result<bool>;
    }
}

mock! {
    pub SlotRepo {
        pub async fn create_slot(
            &self,
            expert_id: Uuid,
            start_at: DateTime<Utc>,
            duration_minutes: i32,
        ) -> eyre::Result<DbSlot>;

        pub async fn create_slots_batch(
            &self,
            expert_id: Uuid,
            start_times: Vec<DateTime<Utc>>,
            duration_minutes: i32,
        ) -> eyre::Result<Vec<DbSlot>>;

        pub async fn get_slot_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbSlotWithAvailability>>;

        pub async fn list_slots(&self) -> eyre::Result<Vec<DbSlotWithAvailability>>;

        pub async fn update_slot(
            &self,
            id: Uuid,
            start_at: Option<DateTime<Utc>>,
            duration_minutes: Option<i32>,
        ) -> eyre::Result<Option<DbSlot>>;

        pub async fn delete_slot(&self, id: Uuid) -> eyre::Result<bool>;
    }
}

mock! {
    pub BookingRepo {
        pub async fn create_booking(
            &self,
            slot_id: Uuid,
            payload: CreateBookingRequest,
            cancellation_code: &'static str,
        ) -> eyre::Result<Option<DbBooking>>;

        pub async fn get_booking_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbBooking>>;

        pub async fn delete_booking(&self, id: Uuid) -> eyre::Result<bool>;

        pub async fn list_bookings(&self) -> eyre::Result<Vec<DbBooking>>;

        pub async fn list_bookings_by_expert(
            &self,
            expert_id: Uuid,
        ) -> eyre::Result<Vec<DbBooking>>;

        pub async fn update_booking(
            &self,
            id: Uuid,
            slot_id: Option<Uuid>,
            question: Option<&'static str>,
        ) -> eyre::Result<Option<DbBooking>>;
    }
}
