use chrono::{DateTime, Duration, TimeZone, Utc};
use pretty_assertions::assert_eq;
use rstest::rstest;
use slotbook_core::errors::BookingError;
use slotbook_core::models::slot::{
    plan_batch, validate_duration, MAX_DURATION_MINUTES, MIN_DURATION_MINUTES,
};

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap()
}

#[test]
fn ninety_minutes_at_thirty_yields_three_slots() {
    let start = t0();
    let end = start + Duration::minutes(90);

    let plan = plan_batch(start, end, 30).expect("valid plan");

    assert_eq!(
        plan,
        vec![
            start,
            start + Duration::minutes(30),
            start + Duration::minutes(60),
        ]
    );
}

#[rstest]
#[case(60, 30)]
#[case(240, 5)]
#[case(120, 40)]
#[case(30, 30)]
#[case(480, 240)]
fn count_and_spacing_cover_the_span_exactly(#[case] span_minutes: i64, #[case] duration: i32) {
    let start = t0();
    let end = start + Duration::minutes(span_minutes);

    let plan = plan_batch(start, end, duration).expect("valid plan");

    assert_eq!(plan.len() as i64, span_minutes / duration as i64);
    assert_eq!(plan[0], start);
    for pair in plan.windows(2) {
        assert_eq!(pair[1] - pair[0], Duration::minutes(duration as i64));
    }
    // total count * duration == span
    assert_eq!(plan.len() as i64 * duration as i64, span_minutes);
}

#[rstest]
#[case(100, 30)]
#[case(45, 30)]
#[case(239, 5)]
fn non_dividing_span_is_rejected(#[case] span_minutes: i64, #[case] duration: i32) {
    let start = t0();
    let end = start + Duration::minutes(span_minutes);

    let err = plan_batch(start, end, duration).unwrap_err();
    assert!(matches!(err, BookingError::Validation(_)));
}

#[test]
fn end_before_start_is_rejected() {
    let start = t0();
    let err = plan_batch(start, start - Duration::minutes(30), 30).unwrap_err();
    assert!(matches!(err, BookingError::Validation(_)));

    let err = plan_batch(start, start, 30).unwrap_err();
    assert!(matches!(err, BookingError::Validation(_)));
}

#[test]
fn span_shorter_than_one_slot_is_rejected() {
    let start = t0();
    let end = start + Duration::minutes(20);

    let err = plan_batch(start, end, 30).unwrap_err();
    assert!(matches!(err, BookingError::Validation(_)));
}

#[rstest]
#[case(MIN_DURATION_MINUTES - 1)]
#[case(0)]
#[case(MAX_DURATION_MINUTES + 1)]
fn out_of_range_duration_is_rejected(#[case] duration: i32) {
    assert!(matches!(
        validate_duration(duration),
        Err(BookingError::Validation(_))
    ));

    let start = t0();
    let end = start + Duration::minutes(duration.unsigned_abs() as i64 + 60);
    assert!(plan_batch(start, end, duration).is_err());
}

#[test]
fn boundary_durations_are_accepted() {
    assert!(validate_duration(MIN_DURATION_MINUTES).is_ok());
    assert!(validate_duration(MAX_DURATION_MINUTES).is_ok());
}
