pub mod bookings;
pub mod experts;
pub mod health;
pub mod session;
pub mod slots;
