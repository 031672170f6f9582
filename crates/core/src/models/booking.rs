use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{BookingError, BookingResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    pub student_name: String,
    pub student_email: String,
    pub question: String,
    pub thesis_type: Option<String>,
    pub program: Option<String>,
    pub artifacts_link: Option<String>,
}

impl CreateBookingRequest {
    pub fn validate(&self) -> BookingResult<()> {
        if self.student_name.trim().chars().count() < 2 {
            return Err(BookingError::Validation(
                "student_name must be at least 2 characters".to_string(),
            ));
        }
        validate_email(&self.student_email)?;
        if self.question.trim().chars().count() < 5 {
            return Err(BookingError::Validation(
                "question must be at least 5 characters".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdminUpdateBookingRequest {
    pub slot_id: Option<Uuid>,
    pub question: Option<String>,
}

impl AdminUpdateBookingRequest {
    pub fn validate(&self) -> BookingResult<()> {
        if matches!(&self.question, Some(q) if q.trim().chars().count() < 5) {
            return Err(BookingError::Validation(
                "question must be at least 5 characters".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingResponse {
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

// Structural check only; deliverability is out of scope.
fn validate_email(email: &str) -> BookingResult<()> {
    let valid = match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    };
    if !valid {
        return Err(BookingError::Validation(
            "student_email is not a valid email address".to_string(),
        ));
    }
    Ok(())
}
