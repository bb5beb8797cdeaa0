use std::sync::Arc;

use chrono::{DateTime, FixedOffset};

use crate::errors::RejectionReason;
use crate::models::{ReminderRecord, VerifiedContact};
use crate::services::messaging::{MessagingProvider, ScheduledMessage};
use crate::services::time_math::{self, Clock};

pub struct ReminderScheduler {
    messaging: Arc<dyn MessagingProvider>,
    clock: Arc<dyn Clock>,
    originator: String,
}

pub fn reminder_body(name: &str, treatment: &str, appointment_at: &DateTime<FixedOffset>) -> String {
    format!(
        "{name}, here's a reminder that you have a {treatment} scheduled for {}. See you soon!",
        time_math::format_clock(appointment_at)
    )
}

impl ReminderScheduler {
    pub fn new(messaging: Arc<dyn MessagingProvider>, clock: Arc<dyn Clock>, originator: String) -> Self {
        Self {
            messaging,
            clock,
            originator,
        }
    }

    /// Schedule an SMS to the verified number exactly 3 hours before the appointment. The
    /// returned time carries the local offset in effect at the reminder instant.
    pub async fn schedule_reminder(
        &self,
        contact: &VerifiedContact,
        appointment_at: DateTime<FixedOffset>,
        name: &str,
        treatment: &str,
    ) -> Result<ReminderRecord, RejectionReason> {
        let remind_at = self.clock.to_local(time_math::reminder_time(appointment_at));

        let message = ScheduledMessage {
            originator: self.originator.clone(),
            recipients: vec![contact.normalized_number.clone()],
            scheduled_datetime: time_math::format_iso(&remind_at),
            body: reminder_body(name, treatment, &appointment_at),
        };

        match self.messaging.schedule_message(&message).await {
            Ok(message_id) => {
                tracing::info!(
                    to = %contact.normalized_number,
                    scheduled = %message.scheduled_datetime,
                    message_id = message_id.as_deref().unwrap_or("-"),
                    "reminder scheduled"
                );
                Ok(ReminderRecord {
                    remind_at,
                    message_id,
                })
            }
            Err(e) => {
                tracing::error!(error = %e, to = %contact.normalized_number, "failed to schedule reminder");
                Err(RejectionReason::ReminderDispatchFailed)
            }
        }
    }
}
