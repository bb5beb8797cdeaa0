pub mod appointments;
pub mod booking;
pub mod health;
pub mod status;
