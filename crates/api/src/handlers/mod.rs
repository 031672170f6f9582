pub mod bookings;
pub mod experts;
pub mod session;
pub mod slots;

use serde::{Deserialize, Serialize};

/// Plain acknowledgement body returned by delete and logout endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
