//! # Slotbook Core
//!
//! Domain types shared by the booking service: experts, slots, bookings,
//! the request/response payloads exchanged over the API, payload validation,
//! and the error taxonomy every layer maps into.
//!
//! This crate is deliberately free of web-framework and database concerns so
//! the batch planner and validation rules can be tested in isolation.

/// Error taxonomy for the booking service
pub mod errors;
/// Domain models and API payloads
pub mod models;
