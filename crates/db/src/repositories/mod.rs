pub mod booking;
pub mod expert;
pub mod slot;
