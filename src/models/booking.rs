use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::errors::RejectionReason;
use crate::models::Appointment;

/// Raw form submission. Absent fields deserialize as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub treatment: String,
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
}

#[derive(Debug, Clone)]
pub struct ValidatedBooking {
    pub request: BookingRequest,
    pub appointment_at: DateTime<FixedOffset>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineType {
    Mobile,
    Other,
}

impl LineType {
    pub fn from_provider(s: &str) -> Self {
        if s.eq_ignore_ascii_case("mobile") {
            LineType::Mobile
        } else {
            LineType::Other
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedContact {
    pub normalized_number: String,
    pub line_type: LineType,
}

#[derive(Debug, Clone)]
pub struct ReminderRecord {
    pub remind_at: DateTime<FixedOffset>,
    pub message_id: Option<String>,
}

#[derive(Debug, Clone)]
pub enum BookingOutcome {
    Confirmed(Appointment),
    Rejected {
        reason: RejectionReason,
        fields: BookingRequest,
    },
    Failed,
}

impl BookingOutcome {
    pub fn state(&self) -> &'static str {
        match self {
            BookingOutcome::Confirmed(_) => "confirmed",
            BookingOutcome::Rejected { .. } => "rejected",
            BookingOutcome::Failed => "failed",
        }
    }
}
