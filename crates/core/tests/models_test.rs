use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::from_str;
use slotbook_core::errors::BookingError;
use slotbook_core::models::{
    booking::{AdminUpdateBookingRequest, CreateBookingRequest},
    expert::{CreateExpertRequest, UpdateExpertRequest},
    slot::{CreateSlotRequest, UpdateSlotRequest},
};

#[test]
fn expert_patch_distinguishes_absent_null_and_value() {
    let absent: UpdateExpertRequest = from_str("{}").unwrap();
    assert_eq!(absent.full_name, None);
    assert_eq!(absent.bio, None);

    let cleared: UpdateExpertRequest = from_str(r#"{"bio": null}"#).unwrap();
    assert_eq!(cleared.bio, Some(None));

    let replaced: UpdateExpertRequest =
        from_str(r#"{"bio": "Databases", "meeting_room": null}"#).unwrap();
    assert_eq!(replaced.bio, Some(Some("Databases".to_string())));
    assert_eq!(replaced.meeting_room, Some(None));
    assert_eq!(replaced.contact_info, None);
}

#[test]
fn expert_patch_rejects_blank_required_fields() {
    let patch: UpdateExpertRequest = from_str(r#"{"full_name": "  "}"#).unwrap();
    assert!(matches!(
        patch.validate(),
        Err(BookingError::Validation(_))
    ));

    let patch: UpdateExpertRequest = from_str(r#"{"full_name": "Dr. Ada"}"#).unwrap();
    assert!(patch.validate().is_ok());
}

#[test]
fn create_expert_requires_name_and_area() {
    let request = CreateExpertRequest {
        full_name: "".to_string(),
        expertise_area: "Distributed systems".to_string(),
        bio: None,
        contact_info: None,
        meeting_room: None,
    };
    assert!(request.validate().is_err());

    let request = CreateExpertRequest {
        full_name: "Dr. Ada".to_string(),
        expertise_area: "Distributed systems".to_string(),
        bio: Some("Consensus and storage".to_string()),
        contact_info: None,
        meeting_room: None,
    };
    assert!(request.validate().is_ok());
}

#[test]
fn slot_create_defaults_duration_to_thirty_minutes() {
    let request: CreateSlotRequest = from_str(
        r#"{
            "expert_id": "a1b2c3d4-e5f6-4890-abcd-ef1234567890",
            "start_at": "2025-03-10T09:00:00Z"
        }"#,
    )
    .unwrap();

    assert_eq!(request.duration_minutes, 30);
    assert!(request.validate().is_ok());
}

#[test]
fn slot_update_validates_supplied_duration_only() {
    let request = UpdateSlotRequest {
        start_at: None,
        duration_minutes: None,
    };
    assert!(request.validate().is_ok());

    let request = UpdateSlotRequest {
        start_at: None,
        duration_minutes: Some(3),
    };
    assert!(request.validate().is_err());
}

fn booking_payload() -> CreateBookingRequest {
    CreateBookingRequest {
        student_name: "Jordan Lee".to_string(),
        student_email: "jordan@example.edu".to_string(),
        question: "How should I evaluate my index structure?".to_string(),
        thesis_type: None,
        program: None,
        artifacts_link: None,
    }
}

#[test]
fn valid_booking_payload_passes() {
    assert!(booking_payload().validate().is_ok());
}

#[rstest]
#[case("J")]
#[case(" ")]
fn short_student_name_is_rejected(#[case] name: &str) {
    let mut payload = booking_payload();
    payload.student_name = name.to_string();
    assert!(matches!(
        payload.validate(),
        Err(BookingError::Validation(_))
    ));
}

#[rstest]
#[case("not-an-email")]
#[case("@example.edu")]
#[case("jordan@")]
#[case("jordan@@example.edu")]
fn malformed_email_is_rejected(#[case] email: &str) {
    let mut payload = booking_payload();
    payload.student_email = email.to_string();
    assert!(matches!(
        payload.validate(),
        Err(BookingError::Validation(_))
    ));
}

#[test]
fn short_question_is_rejected() {
    let mut payload = booking_payload();
    payload.question = "Hi?".to_string();
    assert!(payload.validate().is_err());
}

#[test]
fn admin_booking_update_validates_question_when_present() {
    let request: AdminUpdateBookingRequest = from_str("{}").unwrap();
    assert!(request.validate().is_ok());

    let request: AdminUpdateBookingRequest = from_str(r#"{"question": "Hm?"}"#).unwrap();
    assert!(request.validate().is_err());

    let request: AdminUpdateBookingRequest =
        from_str(r#"{"question": "Could we move this earlier?"}"#).unwrap();
    assert!(request.validate().is_ok());
}
