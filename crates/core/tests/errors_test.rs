use std::error::Error;
use slotbook_core::errors::{BookingError, BookingResult};

#[test]
fn test_booking_error_display() {
    let not_found = BookingError::NotFound("Slot not found".to_string());
    let validation = BookingError::Validation("Invalid input".to_string());
    let conflict = BookingError::Conflict("Slot is already booked".to_string());
    let unauthorized = BookingError::Unauthorized("Invalid admin token".to_string());
    let forbidden = BookingError::Forbidden("Invalid cancellation code".to_string());
    let database = BookingError::Database(eyre::eyre!("Database connection failed"));

    assert_eq!(not_found.to_string(), "Resource not found: Slot not found");
    assert_eq!(validation.to_string(), "Validation error: Invalid input");
    assert_eq!(conflict.to_string(), "Conflict: Slot is already booked");
    assert_eq!(
        unauthorized.to_string(),
        "Unauthorized: Invalid admin token"
    );
    assert_eq!(
        forbidden.to_string(),
        "Forbidden: Invalid cancellation code"
    );
    assert!(database.to_string().contains("Database error:"));
}

#[test]
fn test_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "IO error");
    let booking_error = BookingError::Internal(Box::new(io_error));

    assert!(booking_error.source().is_some());
    assert!(booking_error.to_string().contains("Internal server error:"));
}

#[test]
fn test_booking_result() {
    let result: BookingResult<i32> = Ok(42);
    assert_eq!(result.unwrap(), 42);

    let result: BookingResult<i32> = Err(BookingError::NotFound("Not found".to_string()));
    assert!(result.is_err());
}

#[test]
fn test_from_eyre_report() {
    let report = eyre::eyre!("constraint violated");
    let booking_error = BookingError::from(report);

    assert!(matches!(booking_error, BookingError::Database(_)));
}
