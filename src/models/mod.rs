pub mod appointment;
pub mod booking;

pub use appointment::{Appointment, AppointmentView};
pub use booking::{BookingOutcome, BookingRequest, LineType, ReminderRecord, ValidatedBooking, VerifiedContact};
