pub mod booking;
pub mod messaging;
pub mod phone;
pub mod reminder;
pub mod time_math;
pub mod validation;
