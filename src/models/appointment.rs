use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use crate::services::time_math::format_display;

#[derive(Debug, Clone, PartialEq)]
pub struct Appointment {
    pub id: String,
    pub name: String,
    pub treatment: String,
    pub number: String,
    pub appointment_at: DateTime<FixedOffset>,
    pub remind_at: DateTime<FixedOffset>,
}

/// Confirmation view-data, with times formatted as `YYYY-MM-DD HH:mm`.
#[derive(Debug, Clone, Serialize)]
pub struct AppointmentView {
    pub id: String,
    pub name: String,
    pub treatment: String,
    pub number: String,
    pub appointment_date_time: String,
    pub reminder_date_time: String,
}

impl From<&Appointment> for AppointmentView {
    fn from(a: &Appointment) -> Self {
        Self {
            id: a.id.clone(),
            name: a.name.clone(),
            treatment: a.treatment.clone(),
            number: a.number.clone(),
            appointment_date_time: format_display(&a.appointment_at),
            reminder_date_time: format_display(&a.remind_at),
        }
    }
}
